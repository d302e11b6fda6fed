//! Chemistry module: constants and helper functions for the freshwater carbonate system.
//!
//! This module provides:
//! - Unit conversions from field measurements (mg C/L, °C, pH, kPa) to the
//!   concentration/temperature basis used by the equilibrium algebra
//! - Temperature-dependent equilibrium constants (K1, K2, Kw, K0) from
//!   empirical regression fits
//! - `EquilibriumConstants`, bundling all four constants for one temperature
//!
//! Units conventions:
//! - DIC and species concentrations are µmol/L (µM)
//! - Temperatures passed to the constant functions are Kelvin
//! - Hydrogen ion is `10^-pH` used directly on the µM scale (see below)
//! - Pressure is atm after conversion from kPa
//!
//! Design notes:
//! - Regression coefficients are kept literally as published; the formulas
//!   are evaluated in the same order so results stay bit-compatible with
//!   existing speciation tables.
//! - Nothing here clamps or validates. Non-physical inputs produce
//!   non-finite or negative values that the caller is expected to inspect.
//!
//! # Hydrogen ion scaling
//! `h_um_from_ph` returns `10^-pH` without the `1e6` factor that a strict
//! mol/L → µmol/L conversion would apply. K1 and K2 below are used on that
//! same scale, so the speciation ratios `K1/h` and `K1*K2/h²` are consistent
//! with the published outputs. Do not "correct" one side without the other.
//!
//! # Kw temperature term
//! `kw` applies `log10(T)` where the DOE/Millero fit uses `ln(T)`, giving a
//! non-physical magnitude (~2.5e18 at 12 °C). It is reproduced unchanged;
//! nothing downstream consumes it yet.
//!
//! # Examples
//! ```rust
//! use dic_speciation::chemistry::{EquilibriumConstants, kelvin_from_celsius};
//!
//! let ks = EquilibriumConstants::at_temperature_k(kelvin_from_celsius(12.0));
//! assert!(ks.k1 > ks.k2);
//! assert!(ks.k0 > 0.0);
//! ```
//!
//! # Panics
//! None of the functions panic.

use serde::{Deserialize, Serialize};

/// Molar mass of carbon (g/mol) used to convert mg C/L to µmol C/L.
pub const M_C: f64 = 12.01;
/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;
/// Conversion factor: kPa -> atm (1 / 101.325).
pub const KPA_TO_ATM: f64 = 0.00986923;
/// Reference atmospheric CO2 mixing ratio (ppm) for percent saturation.
pub const ATM_CO2_PPM_DEFAULT: f64 = 410.0;
/// µmol per mol.
pub const UMOL_PER_MOL: f64 = 1e6;

// First dissociation constant (CO2(aq) + H2O <-> HCO3- + H+).
// log10 K1 = K1_A / T + K1_B - K1_C * T   (Harned & Davis 1943)
pub const K1_A: f64 = -3404.71;
pub const K1_B: f64 = 14.8435;
pub const K1_C: f64 = 0.032786;

// Second dissociation constant (HCO3- <-> CO3-- + H+).
// log10 K2 = K2_A / T + K2_B - K2_C * T   (Harned & Scholes 1941)
pub const K2_A: f64 = -2902.39;
pub const K2_B: f64 = 6.498;
pub const K2_C: f64 = 0.02379;

// Water self-ionization. Coefficients of the DOE (1994) / Millero fit
//   ln Kw = KW_A - KW_B / T - KW_C * ln(T)
// evaluated here with log10(T) in place of ln(T); see `kw`.
pub const KW_A: f64 = 148.9802;
pub const KW_B: f64 = 13847.26;
pub const KW_C: f64 = 23.6521;

// Henry's law solubility of CO2.
// -log10 K0 = K0_A / T + K0_B - K0_C * T   (Harned & Davis 1943)
pub const K0_A: f64 = -2385.73;
pub const K0_B: f64 = 14.0184;
pub const K0_C: f64 = 0.0152642;

/// Convert DIC from mg C/L to µmol C/L.
pub fn dic_um_from_mg_l(dic_mg_per_l: f64) -> f64 {
    dic_mg_per_l * (1000.0 / M_C)
}

pub fn kelvin_from_celsius(temp_c: f64) -> f64 {
    temp_c + KELVIN_OFFSET
}

/// Hydrogen ion on the µM speciation scale: `10^-pH`.
pub fn h_um_from_ph(ph: f64) -> f64 {
    10f64.powf(-ph)
}

pub fn atm_from_kpa(pressure_kpa: f64) -> f64 {
    pressure_kpa * KPA_TO_ATM
}

/// First dissociation constant K1 at temperature `t` (K).
pub fn k1(t: f64) -> f64 {
    10f64.powf(K1_A / t + K1_B - K1_C * t)
}

/// Second dissociation constant K2 at temperature `t` (K).
pub fn k2(t: f64) -> f64 {
    10f64.powf(K2_A / t + K2_B - K2_C * t)
}

/// Water self-ionization constant Kw at temperature `t` (K).
///
/// The published fit is in `ln T`; this evaluates the `log10 T` form used
/// by the source equations, which gives Kw on the order of 1e18 rather than
/// the physical ~1e-14. Kept as-is for agreement with existing results. No
/// speciation output reads it.
pub fn kw(t: f64) -> f64 {
    10f64.powf((KW_A - KW_B / t - KW_C * t.log10()).exp().log10())
}

/// Henry's law coefficient K0 at temperature `t` (K), in mol/(L·atm).
pub fn k0(t: f64) -> f64 {
    10f64.powf(-(K0_A / t + K0_B - K0_C * t))
}

/// The four equilibrium constants evaluated at one temperature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumConstants {
    pub k1: f64,
    pub k2: f64,
    pub kw: f64,
    pub k0: f64,
}

impl EquilibriumConstants {
    pub fn at_temperature_k(temp_k: f64) -> Self {
        Self {
            k1: k1(temp_k),
            k2: k2(temp_k),
            kw: kw(temp_k),
            k0: k0(temp_k),
        }
    }
}
