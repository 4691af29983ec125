//! Feature Engineering Engine
//!
//! Derives categorical features (age group, BMI category, children label)
//! from insurance records and folds them into group aggregates. Everything
//! here is pure: no I/O, no shared state.

mod aggregate;
mod classify;
mod features;
mod filter;
mod statistics;

pub use aggregate::{average_by, average_charges_by_region, GroupAverages, GroupMean};
pub use classify::{
    classify_age_group, classify_bmi, classify_children, AgeGroup, BmiCategory, ChildrenLabel,
    AGE_BINS,
};
pub use features::{enrich, unclassified_count, EnrichedRecord};
pub use filter::{filter_records, FilterOptions, FilterSelection};
pub use statistics::{summarize_by, GroupSummary};
