//! Record Enrichment

use crate::classify::{
    classify_age_group, classify_bmi, classify_children, AgeGroup, BmiCategory, ChildrenLabel,
};
use insurance_record::Record;
use serde::Serialize;
use tracing::debug;

/// Record with its derived categorical fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    /// Source fields, untouched
    #[serde(flatten)]
    pub record: Record,
    /// `None` when the age falls outside every bracket
    pub age_group: Option<AgeGroup>,
    pub bmi_category: BmiCategory,
    pub children_label: ChildrenLabel,
}

impl EnrichedRecord {
    /// Derive the categorical fields of a single record
    pub fn derive(record: &Record) -> Self {
        Self {
            age_group: classify_age_group(record.age as f64),
            bmi_category: classify_bmi(record.bmi),
            children_label: classify_children(record.children),
            record: record.clone(),
        }
    }

    /// Whether the age falls outside every bracket
    pub fn is_unclassified(&self) -> bool {
        self.age_group.is_none()
    }
}

impl From<Record> for EnrichedRecord {
    fn from(record: Record) -> Self {
        Self {
            age_group: classify_age_group(record.age as f64),
            bmi_category: classify_bmi(record.bmi),
            children_label: classify_children(record.children),
            record,
        }
    }
}

/// Enrich every record, preserving length and order
pub fn enrich(records: &[Record]) -> Vec<EnrichedRecord> {
    let enriched: Vec<EnrichedRecord> = records.iter().map(EnrichedRecord::derive).collect();
    debug!(
        "Enriched {} records ({} without age group)",
        enriched.len(),
        unclassified_count(&enriched)
    );
    enriched
}

/// Number of records whose age falls outside every bracket
pub fn unclassified_count(records: &[EnrichedRecord]) -> usize {
    records.iter().filter(|r| r.is_unclassified()).count()
}
