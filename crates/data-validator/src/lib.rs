//! Record Validation
//!
//! Range checks applied by the data loader before records reach the feature engine.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
