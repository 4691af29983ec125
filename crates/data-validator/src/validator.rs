//! Data Validator for Range Checking

use crate::error::ValidationError;
use insurance_record::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration (all ranges inclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// BMI valid range (kg/m²)
    pub bmi_range: (f64, f64),
    /// Children valid range
    pub children_range: (f64, f64),
    /// Charges valid range
    pub charges_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (0.0, 120.0),
            bmi_range: (0.0, 100.0),
            children_range: (0.0, 20.0),
            charges_range: (0.0, 1_000_000.0),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for raw insurance records
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Number of numeric fields checked per record
    pub const FIELDS_PER_RECORD: usize = 4;

    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field, value });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate age
    pub fn validate_age(&self, age: u32) -> Result<(), ValidationError> {
        self.validate_range("age", age as f64, self.config.age_range)
    }

    /// Validate BMI
    pub fn validate_bmi(&self, bmi: f64) -> Result<(), ValidationError> {
        self.validate_range("bmi", bmi, self.config.bmi_range)
    }

    /// Validate number of children
    pub fn validate_children(&self, children: u32) -> Result<(), ValidationError> {
        self.validate_range("children", children as f64, self.config.children_range)
    }

    /// Validate charges
    pub fn validate_charges(&self, charges: f64) -> Result<(), ValidationError> {
        self.validate_range("charges", charges, self.config.charges_range)
    }

    /// Validate every numeric field of a record, collecting all failures
    pub fn validate_record(&self, record: &Record) -> ValidationResult {
        let errors: Vec<ValidationError> = [
            self.validate_age(record.age),
            self.validate_bmi(record.bmi),
            self.validate_children(record.children),
            self.validate_charges(record.charges),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            ValidationResult::valid(Self::FIELDS_PER_RECORD)
        } else {
            debug!("Record failed validation: {} error(s)", errors.len());
            ValidationResult::invalid(errors, Self::FIELDS_PER_RECORD)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
