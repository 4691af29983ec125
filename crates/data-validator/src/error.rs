//! Validation Error Types

use thiserror::Error;

/// Errors during record validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite numeric field
    #[error("{field} value {value} is not a finite number")]
    NotFinite { field: &'static str, value: f64 },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } | ValidationError::NotFinite { field, .. } => {
                *field
            }
        }
    }
}
