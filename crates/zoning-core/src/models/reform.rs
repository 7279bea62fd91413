use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ReformType;

/// A historical zoning-reform adoption by one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReformRecord {
    pub place_id: String,
    pub place_name: String,
    pub state_id: String,
    pub state_name: String,
    pub reform_name: String,
    pub reform_type: ReformType,
    pub effective_date: NaiveDate,
    /// WRLURI-style restrictiveness at adoption. Higher is more restrictive.
    pub baseline_restrictiveness: Option<f64>,
}

impl ReformRecord {
    pub fn adoption_year(&self) -> i32 {
        self.effective_date.year()
    }

    /// Whole years between adoption and `as_of_year`. Negative for future adoptions.
    pub fn years_since(&self, as_of_year: i32) -> i32 {
        as_of_year - self.adoption_year()
    }
}
