pub mod adapters;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod speciation;

pub use crate::chemistry::EquilibriumConstants;
pub use crate::error::{AppError, SpeciationError};
pub use crate::models::{
    Assumptions, DetailedSpeciation, NormalizedSample, OUTPUT_COLUMNS, SampleInput,
    SpeciationColumns, SpeciationResult,
};
pub use crate::speciation::calculator::{
    SampleSummary, compute_summary, speciate, speciate_batch, speciate_columns, speciate_detailed,
    speciate_normalized, speciate_sample, try_speciate,
};
