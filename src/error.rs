use thiserror::Error;

/// Errors raised by the speciation engine.
///
/// The default engine path never fails; these come from strict mode and
/// from malformed column batches.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeciationError {
    #[error("Non-finite result for {field}: {value}")]
    Domain { field: &'static str, value: f64 },

    #[error("Column '{column}' has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        expected: usize,
        column: &'static str,
        found: usize,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --assumptions-json: {source}")]
    ParseAssumptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,

    #[error(transparent)]
    Speciation(#[from] SpeciationError),
}
