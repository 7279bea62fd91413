//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DataConfig, PredictionConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ZONING_*`)
/// 2. Project config (`zoning.toml` in the host root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ZoningConfig {
    pub prediction: PredictionConfig,
    pub data: DataConfig,
}

impl ZoningConfig {
    /// Load configuration for a host rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ZoningConfig) -> Result<(), ConfigError> {
        if config.prediction.max_comparables == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "prediction.max_comparables".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(year) = config.prediction.as_of_year {
            if !(1900..=2200).contains(&year) {
                return Err(ConfigError::ValidationFailed {
                    field: "prediction.as_of_year".to_string(),
                    message: "must be between 1900 and 2200".to_string(),
                });
            }
        }
        if config.data.cache_ttl_seconds == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "data.cache_ttl_seconds".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.data.cache_max_entries == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "data.cache_max_entries".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut ZoningConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ZoningConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ZoningConfig, other: &ZoningConfig) {
        // Prediction
        if other.prediction.max_comparables.is_some() {
            base.prediction.max_comparables = other.prediction.max_comparables;
        }
        if other.prediction.as_of_year.is_some() {
            base.prediction.as_of_year = other.prediction.as_of_year;
        }

        // Data
        if other.data.places_path.is_some() {
            base.data.places_path = other.data.places_path.clone();
        }
        if other.data.reforms_path.is_some() {
            base.data.reforms_path = other.data.reforms_path.clone();
        }
        if other.data.cache_ttl_seconds.is_some() {
            base.data.cache_ttl_seconds = other.data.cache_ttl_seconds;
        }
        if other.data.cache_max_entries.is_some() {
            base.data.cache_max_entries = other.data.cache_max_entries;
        }
        if other.data.allow_missing_reforms.is_some() {
            base.data.allow_missing_reforms = other.data.allow_missing_reforms;
        }
    }

    /// Apply environment overrides read through `lookup`.
    /// Pattern: `ZONING_PREDICTION_MAX_COMPARABLES`, `ZONING_DATA_PLACES_PATH`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut ZoningConfig, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ZONING_PREDICTION_MAX_COMPARABLES") {
            match val.parse::<usize>() {
                Ok(v) => config.prediction.max_comparables = Some(v),
                Err(_) => warn_unparsed("ZONING_PREDICTION_MAX_COMPARABLES", &val),
            }
        }
        if let Some(val) = lookup("ZONING_PREDICTION_AS_OF_YEAR") {
            match val.parse::<i32>() {
                Ok(v) => config.prediction.as_of_year = Some(v),
                Err(_) => warn_unparsed("ZONING_PREDICTION_AS_OF_YEAR", &val),
            }
        }
        if let Some(val) = lookup("ZONING_DATA_PLACES_PATH") {
            config.data.places_path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("ZONING_DATA_REFORMS_PATH") {
            config.data.reforms_path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("ZONING_DATA_CACHE_TTL_SECONDS") {
            match val.parse::<u64>() {
                Ok(v) => config.data.cache_ttl_seconds = Some(v),
                Err(_) => warn_unparsed("ZONING_DATA_CACHE_TTL_SECONDS", &val),
            }
        }
        if let Some(val) = lookup("ZONING_DATA_CACHE_MAX_ENTRIES") {
            match val.parse::<u64>() {
                Ok(v) => config.data.cache_max_entries = Some(v),
                Err(_) => warn_unparsed("ZONING_DATA_CACHE_MAX_ENTRIES", &val),
            }
        }
        if let Some(val) = lookup("ZONING_DATA_ALLOW_MISSING_REFORMS") {
            match val.parse::<bool>() {
                Ok(v) => config.data.allow_missing_reforms = Some(v),
                Err(_) => warn_unparsed("ZONING_DATA_ALLOW_MISSING_REFORMS", &val),
            }
        }
    }
}

fn warn_unparsed(key: &str, value: &str) {
    ::tracing::warn!(key, value, "ignoring unparseable environment override");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ZoningConfig::default();
        assert!(ZoningConfig::validate(&config).is_ok());
        assert_eq!(config.prediction.effective_max_comparables(), 5);
        assert_eq!(
            config.data.effective_places_path(),
            PathBuf::from("data/places.json")
        );
        assert!(!config.data.effective_allow_missing_reforms());
    }

    #[test]
    fn parses_partial_toml() {
        let config = ZoningConfig::from_toml(
            r#"
            [prediction]
            max_comparables = 8
            as_of_year = 2024

            [data]
            reforms_path = "fixtures/reforms.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.prediction.effective_max_comparables(), 8);
        assert_eq!(config.prediction.effective_as_of_year(), 2024);
        assert_eq!(
            config.data.effective_reforms_path(),
            PathBuf::from("fixtures/reforms.csv")
        );
        assert_eq!(config.data.effective_cache_ttl().as_secs(), 3600);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            ZoningConfig::from_toml("[prediction\nmax_comparables = 1"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn zero_comparables_fails_validation() {
        let config = ZoningConfig::from_toml("[prediction]\nmax_comparables = 0").unwrap();
        assert!(matches!(
            ZoningConfig::validate(&config),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn env_overrides_win_and_bad_values_are_ignored() {
        let env: HashMap<&str, &str> = [
            ("ZONING_PREDICTION_MAX_COMPARABLES", "3"),
            ("ZONING_PREDICTION_AS_OF_YEAR", "not-a-year"),
            ("ZONING_DATA_ALLOW_MISSING_REFORMS", "true"),
            ("ZONING_DATA_CACHE_MAX_ENTRIES", "16"),
        ]
        .into_iter()
        .collect();

        let mut config = ZoningConfig::from_toml(
            "[prediction]\nmax_comparables = 9\nas_of_year = 2023",
        )
        .unwrap();
        ZoningConfig::apply_env_overrides(&mut config, |k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.prediction.max_comparables, Some(3));
        assert_eq!(config.prediction.as_of_year, Some(2023));
        assert_eq!(config.data.allow_missing_reforms, Some(true));
        assert_eq!(config.data.effective_cache_max_entries(), 16);
    }

    #[test]
    fn load_merges_project_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("zoning.toml"),
            "[data]\ncache_ttl_seconds = 60\nplaces_path = \"p.csv\"\n",
        )
        .unwrap();
        let config = ZoningConfig::load(dir.path()).unwrap();
        assert_eq!(config.data.effective_cache_ttl().as_secs(), 60);
        assert_eq!(config.data.effective_places_path(), PathBuf::from("p.csv"));
    }

    #[test]
    fn to_toml_round_trips() {
        let config = ZoningConfig::from_toml("[prediction]\nmax_comparables = 2").unwrap();
        let text = config.to_toml().unwrap();
        assert_eq!(ZoningConfig::from_toml(&text).unwrap(), config);
    }
}
