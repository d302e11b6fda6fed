use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::Level;

use crate::error::AppError;
use crate::models::{Assumptions, OUTPUT_COLUMNS, SampleInput};
use crate::speciation::calculator::SampleSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "DIC speciation calculator (CO2, HCO3-, CO3--, pCO2)", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with samples and optional assumptions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for one sample or an array of samples (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for assumptions (optional, supplements --inputs-json)"
    )]
    assumptions_json: Option<String>,
    #[arg(short, long, help = "Log debug events to stderr")]
    verbose: bool,
}

/// Install the stderr log subscriber; stdout is reserved for results.
pub fn init_logging(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// A single sample object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleSet {
    One(SampleInput),
    Many(Vec<SampleInput>),
}

impl From<SampleSet> for Vec<SampleInput> {
    fn from(set: SampleSet) -> Self {
        match set {
            SampleSet::One(s) => vec![s],
            SampleSet::Many(v) => v,
        }
    }
}

#[derive(Deserialize)]
struct CmdInput {
    samples: SampleSet,
    #[serde(default)]
    assumptions: Option<Assumptions>,
}

fn parse_inline_inputs(
    inputs_json: &str,
    assumptions_json: Option<&String>,
) -> Result<(Vec<SampleInput>, Assumptions), AppError> {
    let samples: SampleSet =
        serde_json::from_str(inputs_json).map_err(|source| AppError::ParseInputsJson { source })?;

    let assumptions = match assumptions_json {
        Some(s) => serde_json::from_str::<Assumptions>(s)
            .map_err(|source| AppError::ParseAssumptionsJson { source })?,
        None => Assumptions::default(),
    };

    Ok((samples.into(), assumptions))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Vec<SampleInput>, Assumptions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.samples.into(), parsed.assumptions.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Vec<SampleInput>, Assumptions), AppError> {
    match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => parse_inline_inputs(inputs_json, args.assumptions_json.as_ref()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

/// Fixed four decimals, switching to scientific notation for small
/// magnitudes (trace carbonate at low pH) so they do not print as zero.
fn format_value(v: f64) -> String {
    if v != 0.0 && v.is_finite() && v.abs() < 0.01 {
        format!("{:.4e}", v)
    } else {
        format!("{:.4}", v)
    }
}

pub fn print_output(out: &[SampleSummary], args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    let width = OUTPUT_COLUMNS.iter().map(|c| c.len()).max().unwrap_or(0);
    for (i, row) in out.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let inp = &row.input;
        println!(
            "Sample {}: DIC {} mg/L, pH {}, {} °C, {} kPa",
            i + 1,
            inp.dic_mg_per_l,
            inp.ph,
            inp.temp_c,
            inp.pressure_kpa
        );
        for (name, value) in row.result.named_values() {
            println!("  {:<width$}  {}", name, format_value(value), width = width);
        }
    }

    Ok(())
}
