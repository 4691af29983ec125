//! Loader Error Types

use data_validator::ValidationError;
use insurance_record::ParseCategoryError;
use thiserror::Error;

/// Errors while loading a dataset
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// Other I/O failure opening the input
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column absent from the header
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// Numeric field that does not parse
    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// Categorical field outside its closed set
    #[error("line {line}: {source}")]
    InvalidCategory {
        line: u64,
        #[source]
        source: ParseCategoryError,
    },

    /// Record rejected by range validation
    #[error("line {line}: {}", format_errors(.errors))]
    Validation {
        line: u64,
        errors: Vec<ValidationError>,
    },

    /// Dataset cache lock poisoned
    #[error("cache error: {0}")]
    Cache(String),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
