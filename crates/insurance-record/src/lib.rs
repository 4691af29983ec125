//! Insurance Records
//!
//! Row type shared by the loader, validator and feature engine.

mod category;

pub use category::{ParseCategoryError, Region, Sex, Smoker};

use serde::{Deserialize, Serialize};

/// One subject's insurance data row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Age in years (not range checked here)
    pub age: u32,
    pub sex: Sex,
    /// Body mass index
    pub bmi: f64,
    /// Number of dependent children
    pub children: u32,
    pub smoker: Smoker,
    pub region: Region,
    /// Billed medical charges
    pub charges: f64,
}

impl Record {
    /// Create a record from already-typed fields
    pub fn new(
        age: u32,
        sex: Sex,
        bmi: f64,
        children: u32,
        smoker: Smoker,
        region: Region,
        charges: f64,
    ) -> Self {
        Self {
            age,
            sex,
            bmi,
            children,
            smoker,
            region,
            charges,
        }
    }
}
