//! Allow-List Filtering

use crate::classify::AgeGroup;
use crate::features::EnrichedRecord;
use insurance_record::{Region, Smoker};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// User-chosen allow-lists. `None` selects every observed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: Option<BTreeSet<Region>>,
    pub smoker: Option<BTreeSet<Smoker>>,
    pub age_groups: Option<BTreeSet<AgeGroup>>,
}

impl FilterSelection {
    /// Selection that keeps every classified record
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = Some(regions.into_iter().collect());
        self
    }

    pub fn with_smoker(mut self, smoker: impl IntoIterator<Item = Smoker>) -> Self {
        self.smoker = Some(smoker.into_iter().collect());
        self
    }

    pub fn with_age_groups(mut self, age_groups: impl IntoIterator<Item = AgeGroup>) -> Self {
        self.age_groups = Some(age_groups.into_iter().collect());
        self
    }

    /// Whether a record passes all three allow-lists
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        let region_ok = self
            .regions
            .as_ref()
            .map_or(true, |set| set.contains(&record.record.region));
        let smoker_ok = self
            .smoker
            .as_ref()
            .map_or(true, |set| set.contains(&record.record.smoker));
        // Unclassified ages are never among the observed options.
        let age_ok = match (&self.age_groups, record.age_group) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(set), Some(group)) => set.contains(&group),
        };
        region_ok && smoker_ok && age_ok
    }
}

/// Distinct values present in the data, sorted, as offered to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub regions: Vec<Region>,
    pub smoker: Vec<Smoker>,
    pub age_groups: Vec<AgeGroup>,
}

impl FilterOptions {
    /// Collect the observed options; unclassified ages are left out
    pub fn observed(records: &[EnrichedRecord]) -> Self {
        let mut regions = BTreeSet::new();
        let mut smoker = BTreeSet::new();
        let mut age_groups = BTreeSet::new();

        for record in records {
            regions.insert(record.record.region);
            smoker.insert(record.record.smoker);
            if let Some(group) = record.age_group {
                age_groups.insert(group);
            }
        }

        Self {
            regions: regions.into_iter().collect(),
            smoker: smoker.into_iter().collect(),
            age_groups: age_groups.into_iter().collect(),
        }
    }

    /// Explicit selection of every option
    pub fn to_selection(&self) -> FilterSelection {
        FilterSelection::all()
            .with_regions(self.regions.iter().copied())
            .with_smoker(self.smoker.iter().copied())
            .with_age_groups(self.age_groups.iter().copied())
    }
}

/// Keep the records passing `selection`, in their original order
pub fn filter_records(records: &[EnrichedRecord], selection: &FilterSelection) -> Vec<EnrichedRecord> {
    let kept: Vec<EnrichedRecord> = records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect();
    debug!("Filter kept {} of {} records", kept.len(), records.len());
    kept
}
