//! Scenario engine configuration.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_COMPARABLES;

/// Tunables for the scenario orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PredictionConfig {
    /// Comparable cities returned per request. Default: 5.
    pub max_comparables: Option<usize>,
    /// Year that "years since reform" is measured against. Default: current UTC year.
    pub as_of_year: Option<i32>,
}

impl PredictionConfig {
    /// Returns the effective comparable limit, defaulting to 5.
    pub fn effective_max_comparables(&self) -> usize {
        self.max_comparables.unwrap_or(DEFAULT_MAX_COMPARABLES)
    }

    /// Returns the effective as-of year, defaulting to the current UTC year.
    pub fn effective_as_of_year(&self) -> i32 {
        self.as_of_year.unwrap_or_else(|| Utc::now().year())
    }
}
