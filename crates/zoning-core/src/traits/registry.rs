use crate::models::{Place, ReformRecord, ReformType};

/// Read-only place lookup, materialized in memory by the host.
pub trait IPlaceRegistry: Send + Sync {
    /// Look up a place by identifier.
    fn place(&self, place_id: &str) -> Option<&Place>;

    /// Number of places available.
    fn place_count(&self) -> usize;
}

/// Read-only reform lookup, materialized in memory by the host.
pub trait IReformRegistry: Send + Sync {
    /// All adoptions of the given reform type, in load order.
    fn reforms_of_type(&self, reform_type: &ReformType) -> Vec<&ReformRecord>;

    /// All adoptions by one place, in load order.
    fn reforms_for_place(&self, place_id: &str) -> Vec<&ReformRecord>;

    /// Distinct reform types present, sorted.
    fn reform_types(&self) -> Vec<ReformType>;

    /// Restrictiveness recorded with the place's most recent adoption.
    fn latest_restrictiveness(&self, place_id: &str) -> Option<f64> {
        self.reforms_for_place(place_id)
            .into_iter()
            .filter(|r| r.baseline_restrictiveness.is_some())
            .max_by_key(|r| r.effective_date)
            .and_then(|r| r.baseline_restrictiveness)
    }
}
