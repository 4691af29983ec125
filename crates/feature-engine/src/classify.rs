//! Categorical Labels
//!
//! Pure classifiers that bucket raw numeric fields into the labels used for
//! grouping and filtering.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18–25")]
    From18To25,
    #[serde(rename = "26–35")]
    From26To35,
    #[serde(rename = "36–45")]
    From36To45,
    #[serde(rename = "46–55")]
    From46To55,
    #[serde(rename = "56–65")]
    From56To65,
    #[serde(rename = "65+")]
    Over65,
}

/// Age bins as `(lower_exclusive, upper_inclusive, group)`, scanned in order
pub const AGE_BINS: [(f64, f64, AgeGroup); 6] = [
    (17.0, 25.0, AgeGroup::From18To25),
    (25.0, 35.0, AgeGroup::From26To35),
    (35.0, 45.0, AgeGroup::From36To45),
    (45.0, 55.0, AgeGroup::From46To55),
    (55.0, 65.0, AgeGroup::From56To65),
    (65.0, 100.0, AgeGroup::Over65),
];

impl AgeGroup {
    /// All groups in ascending age order
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::From18To25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::From56To65,
        AgeGroup::Over65,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::From18To25 => "18–25",
            AgeGroup::From26To35 => "26–35",
            AgeGroup::From36To45 => "36–45",
            AgeGroup::From46To55 => "46–55",
            AgeGroup::From56To65 => "56–65",
            AgeGroup::Over65 => "65+",
        }
    }

    /// `(lower_exclusive, upper_inclusive)` bounds of this bin
    pub fn bounds(&self) -> (f64, f64) {
        AGE_BINS
            .iter()
            .find(|(_, _, group)| group == self)
            .map(|&(lower, upper, _)| (lower, upper))
            .unwrap_or((f64::NAN, f64::NAN))
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an age into its bracket.
///
/// Returns `None` for ages outside `(17, 100]` and for NaN.
pub fn classify_age_group(age: f64) -> Option<AgeGroup> {
    AGE_BINS
        .iter()
        .find(|&&(lower, upper, _)| age > lower && age <= upper)
        .map(|&(_, _, group)| group)
}

/// BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a BMI value. Total: NaN falls through to `Obese`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Label for the number of children
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildrenLabel {
    NoKids,
    OneChild,
    Children(u32),
}

impl fmt::Display for ChildrenLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildrenLabel::NoKids => f.write_str("No kids"),
            ChildrenLabel::OneChild => f.write_str("1 child"),
            ChildrenLabel::Children(n) => write!(f, "{} children", n),
        }
    }
}

impl Serialize for ChildrenLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Classify a children count
pub fn classify_children(n: u32) -> ChildrenLabel {
    match n {
        0 => ChildrenLabel::NoKids,
        1 => ChildrenLabel::OneChild,
        n => ChildrenLabel::Children(n),
    }
}
