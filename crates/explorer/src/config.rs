//! Explorer configuration

use crate::ExplorerError;
use ::config::{Config, Environment, File};
use data_loader::LoaderConfig;
use feature_engine::{AgeGroup, FilterSelection};
use insurance_record::{Region, Smoker};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file looked up when no other path is given (extension optional)
pub const DEFAULT_CONFIG_FILE: &str = "explorer";

/// Prefix of environment overrides, e.g. `EXPLORER_DATA_PATH`
pub const ENV_PREFIX: &str = "EXPLORER";

/// Explorer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Input CSV path
    pub data_path: PathBuf,

    /// Allowed regions; unset selects every observed region
    pub regions: Option<Vec<String>>,

    /// Allowed smoker values; unset selects both
    pub smoker: Option<Vec<String>>,

    /// Allowed age groups, e.g. `"18–25"` or `"18-25"`
    pub age_groups: Option<Vec<String>>,

    /// Range-check records while loading
    pub validate: bool,

    /// Drop out-of-range records instead of failing
    pub skip_invalid: bool,

    /// Include the filtered rows in the view
    pub include_records: bool,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("insurance.csv"),
            regions: None,
            smoker: None,
            age_groups: None,
            validate: true,
            skip_invalid: false,
            include_records: false,
            log_level: "info".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Load from `explorer.{toml,yaml,json}` (optional) and `EXPLORER_*` env vars
    pub fn load() -> Result<Self, ExplorerError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load from a specific config file (optional) and `EXPLORER_*` env vars
    pub fn load_from(path: &str) -> Result<Self, ExplorerError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("regions")
                    .with_list_parse_key("smoker")
                    .with_list_parse_key("age_groups"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Loader settings derived from this config
    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig {
            validate: self.validate,
            skip_invalid: self.skip_invalid,
            ..Default::default()
        }
    }

    /// Parse the configured allow-lists
    pub fn selection(&self) -> Result<FilterSelection, ExplorerError> {
        let mut selection = FilterSelection::all();

        if let Some(regions) = &self.regions {
            let parsed = regions
                .iter()
                .map(|r| r.parse::<Region>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ExplorerError::InvalidFilter(e.to_string()))?;
            selection = selection.with_regions(parsed);
        }

        if let Some(smoker) = &self.smoker {
            let parsed = smoker
                .iter()
                .map(|s| s.parse::<Smoker>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ExplorerError::InvalidFilter(e.to_string()))?;
            selection = selection.with_smoker(parsed);
        }

        if let Some(age_groups) = &self.age_groups {
            let parsed = age_groups
                .iter()
                .map(|label| parse_age_group(label))
                .collect::<Result<Vec<_>, _>>()?;
            selection = selection.with_age_groups(parsed);
        }

        Ok(selection)
    }
}

/// Match an age group label, accepting an ASCII hyphen for the en dash
fn parse_age_group(label: &str) -> Result<AgeGroup, ExplorerError> {
    let normalized = label.trim().replace('-', "–");
    AgeGroup::ALL
        .into_iter()
        .find(|group| group.label() == normalized)
        .ok_or_else(|| ExplorerError::InvalidFilter(format!("unknown age group: {:?}", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.data_path, PathBuf::from("insurance.csv"));
        assert!(config.validate);
        assert_eq!(config.selection().unwrap(), FilterSelection::all());
    }

    #[test]
    fn test_selection_parsing() {
        let config = ExplorerConfig {
            regions: Some(vec!["Northeast".into(), " southwest".into()]),
            smoker: Some(vec!["yes".into()]),
            age_groups: Some(vec!["18-25".into(), "65+".into(), "26–35".into()]),
            ..Default::default()
        };

        let expected = FilterSelection::all()
            .with_regions([Region::Northeast, Region::Southwest])
            .with_smoker([Smoker::Yes])
            .with_age_groups([AgeGroup::From18To25, AgeGroup::From26To35, AgeGroup::Over65]);
        assert_eq!(config.selection().unwrap(), expected);
    }

    #[test]
    fn test_invalid_filter_values() {
        let bad_region = ExplorerConfig {
            regions: Some(vec!["midwest".into()]),
            ..Default::default()
        };
        assert!(matches!(bad_region.selection(), Err(ExplorerError::InvalidFilter(_))));

        let bad_age = ExplorerConfig {
            age_groups: Some(vec!["0-17".into()]),
            ..Default::default()
        };
        assert!(matches!(bad_age.selection(), Err(ExplorerError::InvalidFilter(_))));
    }

    #[test]
    fn test_empty_allow_list_is_kept_explicit() {
        let config = ExplorerConfig {
            smoker: Some(vec![]),
            ..Default::default()
        };
        let selection = config.selection().unwrap();
        assert_eq!(selection.smoker.map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "data_path = \"data/insurance.csv\"").unwrap();
        writeln!(file, "smoker = [\"no\"]").unwrap();
        writeln!(file, "skip_invalid = true").unwrap();

        let config = ExplorerConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/insurance.csv"));
        assert_eq!(config.smoker, Some(vec!["no".to_string()]));
        assert!(config.skip_invalid);
        assert!(config.validate);
        assert!(config.loader_config().skip_invalid);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let config = ExplorerConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.log_level, "info");
    }
}
