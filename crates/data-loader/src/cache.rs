//! Dataset Cache
//!
//! Memoizes loaded datasets per path so repeated views over the same file do
//! not re-read it.

use crate::error::LoadError;
use crate::loader::{load_records, LoaderConfig};
use insurance_record::Record;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Per-path cache of loaded records
pub struct DatasetCache {
    config: LoaderConfig,
    datasets: Mutex<HashMap<PathBuf, Arc<Vec<Record>>>>,
}

impl DatasetCache {
    /// Create an empty cache that loads with `config`
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            datasets: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached dataset for `path`, loading it on first use
    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Vec<Record>>, LoadError> {
        let path = path.as_ref();
        let mut datasets = self
            .datasets
            .lock()
            .map_err(|e| LoadError::Cache(format!("Lock error: {}", e)))?;

        if let Some(records) = datasets.get(path) {
            debug!("Cache hit for {}", path.display());
            return Ok(Arc::clone(records));
        }

        let records = Arc::new(load_records(path, &self.config)?);
        datasets.insert(path.to_path_buf(), Arc::clone(&records));
        info!("Cached {} records for {}", records.len(), path.display());
        Ok(records)
    }

    /// Drop the cached dataset for `path`; returns whether one was present
    pub fn invalidate(&self, path: impl AsRef<Path>) -> Result<bool, LoadError> {
        let mut datasets = self
            .datasets
            .lock()
            .map_err(|e| LoadError::Cache(format!("Lock error: {}", e)))?;
        Ok(datasets.remove(path.as_ref()).is_some())
    }

    /// Number of cached datasets
    pub fn len(&self) -> usize {
        self.datasets.lock().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "age,sex,bmi,children,smoker,region,charges").unwrap();
        writeln!(file, "19,female,27.9,0,yes,southwest,16884.924").unwrap();
        writeln!(file, "18,male,33.77,1,no,southeast,1725.5523").unwrap();
        file
    }

    #[test]
    fn test_second_load_is_served_from_cache() {
        let file = create_test_csv();
        let cache = DatasetCache::default();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let file = create_test_csv();
        let cache = DatasetCache::default();

        let first = cache.get_or_load(file.path()).unwrap();
        assert!(cache.invalidate(file.path()).unwrap());
        assert!(!cache.invalidate(file.path()).unwrap());
        assert!(cache.is_empty());

        let reloaded = cache.get_or_load(file.path()).unwrap();
        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(*first, *reloaded);
    }

    #[test]
    fn test_missing_file_is_not_cached() {
        let cache = DatasetCache::default();
        let err = cache.get_or_load("missing/insurance.csv").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(cache.is_empty());
    }
}
