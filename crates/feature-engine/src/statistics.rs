//! Descriptive Statistics per Group

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Distribution summary of one group's values (the numbers behind a box plot)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Number of values
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Skewness (asymmetry)
    pub skewness: f64,
    /// Minimum value
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum value
    pub max: f64,
}

impl GroupSummary {
    /// Compute the summary of a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        // Mean
        let mean = values.iter().sum::<f64>() / n;

        // Min/Max
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
            m3 += d * d * d;
        }

        let variance = m2 / n;
        let std_dev = variance.sqrt();

        // Skewness: E[(X-μ)³] / σ³
        let skewness = if std_dev > 0.0 {
            (m3 / n) / (std_dev * std_dev * std_dev)
        } else {
            0.0
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            count: values.len(),
            mean,
            std_dev,
            skewness,
            min,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max,
        }
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Linearly interpolated quantile of sorted, non-empty values
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

/// Summarize `value_key` per distinct `group_key`, ordered by key.
///
/// Groups without records never appear.
pub fn summarize_by<T, K, G, V>(records: &[T], group_key: G, value_key: V) -> Vec<(K, GroupSummary)>
where
    K: Ord,
    G: Fn(&T) -> K,
    V: Fn(&T) -> f64,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(group_key(record)).or_default().push(value_key(record));
    }

    debug!("Summarized {} records into {} groups", records.len(), groups.len());

    groups
        .into_iter()
        .map(|(key, values)| (key, GroupSummary::compute(&values)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_computation() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = GroupSummary::compute(&values);
        assert!((stats.mean - 3.0).abs() < 0.001);
        assert_eq!(stats.count, 5);
    }

    #[test]
    fn test_std_dev_computation() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = GroupSummary::compute(&values);
        assert!((stats.std_dev - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_quartiles() {
        let values = vec![7.0, 1.0, 5.0, 3.0, 9.0];
        let stats = GroupSummary::compute(&values);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.iqr(), 4.0);
    }

    #[test]
    fn test_interpolated_median() {
        let stats = GroupSummary::compute(&[1.0, 2.0, 3.0, 4.0]);
        assert!((stats.median - 2.5).abs() < 1e-12);
        assert!((stats.q1 - 1.75).abs() < 1e-12);
    }

    #[test]
    fn test_right_skewed_charges() {
        let values = vec![1000.0, 1100.0, 1200.0, 1300.0, 40000.0];
        let stats = GroupSummary::compute(&values);
        assert!(stats.skewness > 0.0);
    }

    #[test]
    fn test_empty_values() {
        let values: Vec<f64> = vec![];
        let stats = GroupSummary::compute(&values);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
    }

    #[test]
    fn test_summarize_by_orders_keys() {
        let rows = vec![("b", 2.0), ("a", 1.0), ("b", 4.0)];
        let summaries = summarize_by(&rows, |r| r.0, |r| r.1);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].0, "a");
        assert_eq!(summaries[1].0, "b");
        assert_eq!(summaries[1].1.count, 2);
        assert_eq!(summaries[1].1.mean, 3.0);
    }
}
