use serde::{Deserialize, Serialize};

use crate::chemistry::{
    ATM_CO2_PPM_DEFAULT, EquilibriumConstants, atm_from_kpa, dic_um_from_mg_l, h_um_from_ph,
    kelvin_from_celsius,
};

/// Output column names, in the order results are reported.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "calc_CO2_uM",
    "calc_HCO3_uM",
    "calc_CO3_uM",
    "calc_carb_alk_uM",
    "calc_pCO2_uatm",
    "calc_pCO2_perc_sat",
];

/// Caller-tunable settings for a speciation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Reference atmospheric CO2 (ppm) for percent saturation.
    pub atm_co2_ppm: f64,
    /// Reject results containing non-finite values instead of returning them.
    pub strict: bool,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            atm_co2_ppm: ATM_CO2_PPM_DEFAULT,
            strict: false,
        }
    }
}

/// One water sample as measured in the field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleInput {
    /// Total DIC, mg C/L.
    pub dic_mg_per_l: f64,
    /// pH (dimensionless, not range-checked).
    pub ph: f64,
    /// Water temperature, °C.
    pub temp_c: f64,
    /// Barometric pressure, kPa.
    pub pressure_kpa: f64,
}

impl SampleInput {
    pub fn new(dic_mg_per_l: f64, ph: f64, temp_c: f64, pressure_kpa: f64) -> Self {
        Self {
            dic_mg_per_l,
            ph,
            temp_c,
            pressure_kpa,
        }
    }

    /// Convert the field units into the basis used by the equilibrium algebra.
    pub fn normalized(&self) -> NormalizedSample {
        NormalizedSample {
            dic_um: dic_um_from_mg_l(self.dic_mg_per_l),
            temp_k: kelvin_from_celsius(self.temp_c),
            h_um: h_um_from_ph(self.ph),
            pressure_atm: atm_from_kpa(self.pressure_kpa),
        }
    }
}

/// A sample after unit normalization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSample {
    pub dic_um: f64,
    pub temp_k: f64,
    pub h_um: f64,
    pub pressure_atm: f64,
}

/// Speciated carbonate system for one sample.
///
/// Serialized field names match [`OUTPUT_COLUMNS`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeciationResult {
    #[serde(rename = "calc_CO2_uM")]
    pub co2_um: f64,
    #[serde(rename = "calc_HCO3_uM")]
    pub hco3_um: f64,
    #[serde(rename = "calc_CO3_uM")]
    pub co3_um: f64,
    #[serde(rename = "calc_carb_alk_uM")]
    pub carb_alk_um: f64,
    #[serde(rename = "calc_pCO2_uatm")]
    pub pco2_uatm: f64,
    #[serde(rename = "calc_pCO2_perc_sat")]
    pub pco2_pct_sat: f64,
}

impl SpeciationResult {
    pub fn named_values(&self) -> [(&'static str, f64); 6] {
        [
            (OUTPUT_COLUMNS[0], self.co2_um),
            (OUTPUT_COLUMNS[1], self.hco3_um),
            (OUTPUT_COLUMNS[2], self.co3_um),
            (OUTPUT_COLUMNS[3], self.carb_alk_um),
            (OUTPUT_COLUMNS[4], self.pco2_uatm),
            (OUTPUT_COLUMNS[5], self.pco2_pct_sat),
        ]
    }

    /// First output field that is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<(&'static str, f64)> {
        self.named_values().into_iter().find(|(_, v)| !v.is_finite())
    }
}

/// Everything computed for one sample, intermediates included.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DetailedSpeciation {
    pub normalized: NormalizedSample,
    pub constants: EquilibriumConstants,
    pub result: SpeciationResult,
}

impl DetailedSpeciation {
    /// Ionization fractions `(alpha0, alpha1, alpha2)`: the share of DIC
    /// present as CO2(aq), HCO3- and CO3--.
    pub fn ionization_fractions(&self) -> (f64, f64, f64) {
        let dic = self.normalized.dic_um;
        (
            self.result.co2_um / dic,
            self.result.hco3_um / dic,
            self.result.co3_um / dic,
        )
    }
}

/// Column-parallel results for a batch of samples, row order preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SpeciationColumns {
    pub co2_um: Vec<f64>,
    pub hco3_um: Vec<f64>,
    pub co3_um: Vec<f64>,
    pub carb_alk_um: Vec<f64>,
    pub pco2_uatm: Vec<f64>,
    pub pco2_pct_sat: Vec<f64>,
}

impl SpeciationColumns {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            co2_um: Vec::with_capacity(n),
            hco3_um: Vec::with_capacity(n),
            co3_um: Vec::with_capacity(n),
            carb_alk_um: Vec::with_capacity(n),
            pco2_uatm: Vec::with_capacity(n),
            pco2_pct_sat: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, r: &SpeciationResult) {
        self.co2_um.push(r.co2_um);
        self.hco3_um.push(r.hco3_um);
        self.co3_um.push(r.co3_um);
        self.carb_alk_um.push(r.carb_alk_um);
        self.pco2_uatm.push(r.pco2_uatm);
        self.pco2_pct_sat.push(r.pco2_pct_sat);
    }

    pub fn len(&self) -> usize {
        self.co2_um.len()
    }

    pub fn is_empty(&self) -> bool {
        self.co2_um.is_empty()
    }

    /// `(column name, values)` pairs for merging into a caller's table.
    pub fn named_columns(&self) -> [(&'static str, &[f64]); 6] {
        [
            (OUTPUT_COLUMNS[0], self.co2_um.as_slice()),
            (OUTPUT_COLUMNS[1], self.hco3_um.as_slice()),
            (OUTPUT_COLUMNS[2], self.co3_um.as_slice()),
            (OUTPUT_COLUMNS[3], self.carb_alk_um.as_slice()),
            (OUTPUT_COLUMNS[4], self.pco2_uatm.as_slice()),
            (OUTPUT_COLUMNS[5], self.pco2_pct_sat.as_slice()),
        ]
    }

    /// The results of row `i`, if present.
    pub fn row(&self, i: usize) -> Option<SpeciationResult> {
        Some(SpeciationResult {
            co2_um: *self.co2_um.get(i)?,
            hco3_um: *self.hco3_um.get(i)?,
            co3_um: *self.co3_um.get(i)?,
            carb_alk_um: *self.carb_alk_um.get(i)?,
            pco2_uatm: *self.pco2_uatm.get(i)?,
            pco2_pct_sat: *self.pco2_pct_sat.get(i)?,
        })
    }
}

impl FromIterator<SpeciationResult> for SpeciationColumns {
    fn from_iter<I: IntoIterator<Item = SpeciationResult>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut cols = Self::with_capacity(iter.size_hint().0);
        for r in iter {
            cols.push(&r);
        }
        cols
    }
}
