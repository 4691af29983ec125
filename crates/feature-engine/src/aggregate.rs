//! Group Averages

use crate::features::EnrichedRecord;
use insurance_record::Region;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Mean of a value within one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean: f64,
    /// Records contributing to the mean (always > 0)
    pub count: usize,
}

/// Group averages in insertion order of each key's first occurrence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupAverages<K> {
    groups: Vec<GroupMean<K>>,
}

impl<K: PartialEq> GroupAverages<K> {
    /// Mean for a key, if any record carried it
    pub fn get(&self, key: &K) -> Option<f64> {
        self.groups.iter().find(|g| &g.key == key).map(|g| g.mean)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupMean<K>> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|g| &g.key)
    }

    pub fn into_vec(self) -> Vec<GroupMean<K>> {
        self.groups
    }
}

impl<K: Ord> GroupAverages<K> {
    /// Re-order groups by key
    pub fn sorted(mut self) -> Self {
        self.groups.sort_by(|a, b| a.key.cmp(&b.key));
        self
    }
}

impl<K> IntoIterator for GroupAverages<K> {
    type Item = GroupMean<K>;
    type IntoIter = std::vec::IntoIter<GroupMean<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Arithmetic mean of `value_key` per distinct `group_key`.
///
/// Groups without records never appear, so empty input gives empty averages.
pub fn average_by<T, K, G, V>(records: &[T], group_key: G, value_key: V) -> GroupAverages<K>
where
    K: Eq + Hash + Clone,
    G: Fn(&T) -> K,
    V: Fn(&T) -> f64,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut sums: Vec<(K, f64, usize)> = Vec::new();

    for record in records {
        let key = group_key(record);
        let value = value_key(record);
        match index.get(&key) {
            Some(&slot) => {
                sums[slot].1 += value;
                sums[slot].2 += 1;
            }
            None => {
                index.insert(key.clone(), sums.len());
                sums.push((key, value, 1));
            }
        }
    }

    debug!("Averaged {} records into {} groups", records.len(), sums.len());

    GroupAverages {
        groups: sums
            .into_iter()
            .map(|(key, sum, count)| GroupMean {
                key,
                mean: sum / count as f64,
                count,
            })
            .collect(),
    }
}

/// Mean charges per region
pub fn average_charges_by_region(records: &[EnrichedRecord]) -> GroupAverages<Region> {
    average_by(records, |r| r.record.region, |r| r.record.charges)
}
