//! Categorical Fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown value for a categorical column
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} category: {value:?}")]
pub struct ParseCategoryError {
    pub field: &'static str,
    pub value: String,
}

impl ParseCategoryError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Biological sex as recorded in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// All variants in label order
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

impl FromStr for Sex {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(ParseCategoryError::new("sex", s)),
        }
    }
}

/// Smoking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    No,
    Yes,
}

impl Smoker {
    /// All variants in label order
    pub const ALL: [Smoker; 2] = [Smoker::No, Smoker::Yes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Smoker::No => "no",
            Smoker::Yes => "yes",
        }
    }
}

impl FromStr for Smoker {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no" => Ok(Smoker::No),
            "yes" => Ok(Smoker::Yes),
            _ => Err(ParseCategoryError::new("smoker", s)),
        }
    }
}

/// US region of the beneficiary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    /// All variants in label order
    pub const ALL: [Region; 4] = [
        Region::Northeast,
        Region::Northwest,
        Region::Southeast,
        Region::Southwest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Northeast => "northeast",
            Region::Northwest => "northwest",
            Region::Southeast => "southeast",
            Region::Southwest => "southwest",
        }
    }
}

impl FromStr for Region {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError::new("region", s))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
