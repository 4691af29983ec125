//! Dashboard view assembly

use feature_engine::{
    average_charges_by_region, enrich, filter_records, summarize_by, unclassified_count,
    AgeGroup, BmiCategory, ChildrenLabel, EnrichedRecord, FilterOptions, FilterSelection,
    GroupAverages, GroupSummary,
};
use insurance_record::{Record, Region, Smoker};
use serde::Serialize;
use tracing::info;

/// Charges distribution for one category, split by smoking status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeSummary<K> {
    pub group: K,
    pub smoker: Smoker,
    pub summary: GroupSummary,
}

/// Everything the presentation layer needs for one filter selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Records loaded before filtering
    pub total_records: usize,
    /// Records passing the filter
    pub filtered_records: usize,
    /// Loaded records with no age group; these can never pass the filter
    pub unclassified_records: usize,
    /// Sidebar options (and the default selection)
    pub options: FilterOptions,
    /// Mean charges per region over the filtered records
    pub region_averages: GroupAverages<Region>,
    pub charges_by_age_group: Vec<ChargeSummary<AgeGroup>>,
    pub charges_by_bmi_category: Vec<ChargeSummary<BmiCategory>>,
    pub charges_by_children: Vec<ChargeSummary<ChildrenLabel>>,
    pub charges_by_smoker: Vec<(Smoker, GroupSummary)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<EnrichedRecord>>,
}

/// Summaries of charges keyed by `(category, smoker)`
fn split_by_smoker<K, G>(records: &[EnrichedRecord], category: G) -> Vec<ChargeSummary<K>>
where
    K: Ord,
    G: Fn(&EnrichedRecord) -> K,
{
    summarize_by(records, |r| (category(r), r.record.smoker), |r| r.record.charges)
        .into_iter()
        .map(|((group, smoker), summary)| ChargeSummary {
            group,
            smoker,
            summary,
        })
        .collect()
}

/// Enrich, filter and aggregate loaded records
pub fn build_view(records: &[Record], selection: &FilterSelection, include_records: bool) -> DashboardView {
    let enriched = enrich(records);
    let options = FilterOptions::observed(&enriched);
    let filtered = filter_records(&enriched, selection);

    info!(
        "Filter selection kept {} of {} records",
        filtered.len(),
        enriched.len()
    );

    // Filtered records always carry an age group.
    let classified: Vec<(AgeGroup, &EnrichedRecord)> = filtered
        .iter()
        .filter_map(|r| r.age_group.map(|group| (group, r)))
        .collect();
    let charges_by_age_group = summarize_by(
        &classified,
        |(group, r)| (*group, r.record.smoker),
        |(_, r)| r.record.charges,
    )
    .into_iter()
    .map(|((group, smoker), summary)| ChargeSummary {
        group,
        smoker,
        summary,
    })
    .collect();

    DashboardView {
        total_records: enriched.len(),
        filtered_records: filtered.len(),
        unclassified_records: unclassified_count(&enriched),
        options,
        region_averages: average_charges_by_region(&filtered).sorted(),
        charges_by_age_group,
        charges_by_bmi_category: split_by_smoker(&filtered, |r| r.bmi_category),
        charges_by_children: split_by_smoker(&filtered, |r| r.children_label),
        charges_by_smoker: summarize_by(&filtered, |r| r.record.smoker, |r| r.record.charges),
        records: include_records.then_some(filtered),
    }
}
