use serde::Serialize;
use tracing::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::chemistry::{EquilibriumConstants, UMOL_PER_MOL};
use crate::error::SpeciationError;
use crate::models::{
    Assumptions, DetailedSpeciation, NormalizedSample, SampleInput, SpeciationColumns,
    SpeciationResult,
};

/// One input row echoed alongside its speciation, for reporting.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub input: SampleInput,
    pub result: SpeciationResult,
}

/// Partition total DIC among CO2(aq), HCO3- and CO3-- and derive
/// alkalinity, pCO2 and percent saturation.
///
/// Each denominator is the inverse ionization fraction of its species.
/// Division by a vanishing hydrogen ion or pressure follows IEEE semantics:
/// results go to zero or infinity rather than failing.
pub fn speciate_normalized(
    n: &NormalizedSample,
    ks: &EquilibriumConstants,
    atm_co2_ppm: f64,
) -> SpeciationResult {
    let dic = n.dic_um;
    let h = n.h_um;
    let EquilibriumConstants { k1, k2, k0, .. } = *ks;

    let co2_um = dic / (1.0 + k1 / h + k1 * k2 / (h * h));
    let hco3_um = dic / (1.0 + h / k1 + k2 / h);
    let co3_um = dic / (h * h / (k1 * k2) + h / k2 + 1.0);

    let carb_alk_um = hco3_um + 2.0 * co3_um;
    let pco2_uatm = co2_um / k0;
    let atm_fraction = atm_co2_ppm / UMOL_PER_MOL;
    let pco2_pct_sat = ((co2_um / UMOL_PER_MOL) / (k0 * (atm_fraction * n.pressure_atm))) * 100.0;

    SpeciationResult {
        co2_um,
        hco3_um,
        co3_um,
        carb_alk_um,
        pco2_uatm,
        pco2_pct_sat,
    }
}

/// Speciate one sample, keeping the normalized inputs and the equilibrium
/// constants (Kw included) alongside the result.
pub fn speciate_detailed(inp: &SampleInput, ass: &Assumptions) -> DetailedSpeciation {
    let normalized = inp.normalized();
    let constants = EquilibriumConstants::at_temperature_k(normalized.temp_k);
    trace!(
        temp_k = normalized.temp_k,
        k1 = constants.k1,
        k2 = constants.k2,
        kw = constants.kw,
        k0 = constants.k0,
        "equilibrium constants"
    );
    let result = speciate_normalized(&normalized, &constants, ass.atm_co2_ppm);
    DetailedSpeciation {
        normalized,
        constants,
        result,
    }
}

/// Speciate one sample. Never fails; non-finite values pass through.
pub fn speciate_sample(inp: &SampleInput, ass: &Assumptions) -> SpeciationResult {
    speciate_detailed(inp, ass).result
}

/// Speciate from the four field measurements with default assumptions.
///
/// ```rust
/// let r = dic_speciation::speciate(1.2, 6.8, 12.0, 99.9);
/// assert!(r.hco3_um > r.co2_um);
/// ```
pub fn speciate(dic_mg_per_l: f64, ph: f64, temp_c: f64, pressure_kpa: f64) -> SpeciationResult {
    speciate_sample(
        &SampleInput::new(dic_mg_per_l, ph, temp_c, pressure_kpa),
        &Assumptions::default(),
    )
}

/// Speciate one sample, rejecting non-finite outputs when `ass.strict` is set.
pub fn try_speciate(
    inp: &SampleInput,
    ass: &Assumptions,
) -> Result<SpeciationResult, SpeciationError> {
    let result = speciate_sample(inp, ass);
    if ass.strict
        && let Some((field, value)) = result.first_non_finite()
    {
        warn!(?inp, field, value, "non-finite speciation result");
        return Err(SpeciationError::Domain { field, value });
    }
    Ok(result)
}

/// Speciate a batch of samples. Output order matches input order and each
/// row is computed independently of the others.
pub fn speciate_batch(samples: &[SampleInput], ass: &Assumptions) -> Vec<SpeciationResult> {
    debug!(rows = samples.len(), "speciating batch");

    #[cfg(feature = "parallel")]
    {
        samples.par_iter().map(|s| speciate_sample(s, ass)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        samples.iter().map(|s| speciate_sample(s, ass)).collect()
    }
}

/// Speciate column-parallel input, as pulled from a tabular dataset.
///
/// All four columns must have the same length; `dic_mg_per_l` sets the
/// expected row count.
pub fn speciate_columns(
    dic_mg_per_l: &[f64],
    ph: &[f64],
    temp_c: &[f64],
    pressure_kpa: &[f64],
    ass: &Assumptions,
) -> Result<SpeciationColumns, SpeciationError> {
    let expected = dic_mg_per_l.len();
    for (column, found) in [
        ("ph", ph.len()),
        ("temp_c", temp_c.len()),
        ("pressure_kpa", pressure_kpa.len()),
    ] {
        if found != expected {
            return Err(SpeciationError::ColumnLengthMismatch {
                expected,
                column,
                found,
            });
        }
    }

    let samples: Vec<SampleInput> = dic_mg_per_l
        .iter()
        .zip(ph)
        .zip(temp_c)
        .zip(pressure_kpa)
        .map(|(((&dic, &ph), &t), &p)| SampleInput::new(dic, ph, t, p))
        .collect();

    Ok(speciate_batch(&samples, ass).into_iter().collect())
}

/// Speciate every sample and pair it with its input, honouring strict mode.
pub fn compute_summary(
    samples: &[SampleInput],
    ass: &Assumptions,
) -> Result<Vec<SampleSummary>, SpeciationError> {
    debug!(rows = samples.len(), strict = ass.strict, "computing summary");
    samples
        .iter()
        .map(|s| {
            try_speciate(s, ass).map(|result| SampleSummary { input: *s, result })
        })
        .collect()
}
