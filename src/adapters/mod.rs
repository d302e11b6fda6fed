#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, init_logging, parse_inputs, print_output};
    use crate::speciation::calculator::compute_summary;

    let args = Args::parse();
    init_logging(&args);

    let (samples, ass) = parse_inputs(&args)?;
    tracing::debug!(rows = samples.len(), ?ass, "parsed inputs");

    let out = compute_summary(&samples, &ass)?;

    print_output(&out, &args)?;

    Ok(())
}
