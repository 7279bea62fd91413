use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A census place with the features the model consumes.
/// Immutable reference data, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: String,
    pub place_name: String,
    pub state_id: String,
    pub state_name: String,
    /// Most recent annual permitted units.
    pub recent_permits: u64,
    /// Signed 5-year growth in permits, as a percentage.
    pub growth_rate_5yr: f64,
    /// Multifamily share of recent permits, 0-100.
    pub mf_share: f64,
}

impl Place {
    /// Reject places whose numeric features cannot enter the model.
    pub fn check_finite(&self) -> Result<(), ValidationError> {
        let features = [
            ("growth_rate_5yr", self.growth_rate_5yr),
            ("mf_share", self.mf_share),
        ];
        for (field, value) in features {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteFeature {
                    place_id: self.place_id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    /// Recent permits as the float the formulas operate on.
    pub fn permits_f64(&self) -> f64 {
        self.recent_permits as f64
    }
}
