//! Comparable-city search.
//!
//! Candidates are places that adopted one of the requested reform types.
//! Each candidate's historical change is the heuristic estimate for that
//! place, scaled by how far it has progressed along the reform's ramp.
//! Results are ranked by feature similarity to the target place.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;
use zoning_core::errors::ComputationError;
use zoning_core::models::{ComparableCity, PredictionRequest};
use zoning_core::{IPlaceRegistry, IReformRegistry, Place, ReformRecord, ReformType};

use crate::heuristic;
use crate::ramp::{adoption_progress, typical_ramp_years};
use crate::scenarios::round1;
use crate::similarity::similarity;

/// Searches the registries for places that adopted matching reforms.
pub struct ComparableSearch<'a> {
    places: &'a dyn IPlaceRegistry,
    reforms: &'a dyn IReformRegistry,
    as_of_year: i32,
}

struct Candidate<'a> {
    place: &'a Place,
    record: &'a ReformRecord,
    historical_change: f64,
}

impl<'a> ComparableSearch<'a> {
    pub fn new(
        places: &'a dyn IPlaceRegistry,
        reforms: &'a dyn IReformRegistry,
        as_of_year: i32,
    ) -> Self {
        Self {
            places,
            reforms,
            as_of_year,
        }
    }

    /// Up to `limit` comparables for `target`, most similar first.
    ///
    /// Fails if any candidate's estimate is non-finite.
    pub fn find(
        &self,
        target: &Place,
        reform_types: &[ReformType],
        limit: usize,
    ) -> Result<Vec<ComparableCity>, ComputationError> {
        let places: &'a dyn IPlaceRegistry = self.places;
        let reforms: &'a dyn IReformRegistry = self.reforms;
        let mut best: BTreeMap<&'a str, Candidate<'a>> = BTreeMap::new();

        for reform_type in reform_types {
            for record in reforms.reforms_of_type(reform_type) {
                if record.place_id == target.place_id {
                    continue;
                }
                let Some(place) = places.place(&record.place_id) else {
                    debug!(place_id = %record.place_id, "reform record without a known place");
                    continue;
                };
                if place.check_finite().is_err() {
                    debug!(place_id = %place.place_id, "skipping place with non-finite features");
                    continue;
                }

                let historical_change = self.historical_change(place, record)?;
                let replace = best
                    .get(place.place_id.as_str())
                    .map_or(true, |c| historical_change > c.historical_change);
                if replace {
                    best.insert(
                        place.place_id.as_str(),
                        Candidate {
                            place,
                            record,
                            historical_change,
                        },
                    );
                }
            }
        }

        let mut ranked: Vec<ComparableCity> = best
            .into_values()
            .map(|c| self.to_comparable(target, c))
            .collect();
        ranked.sort_by(rank);
        ranked.truncate(limit);

        debug!(
            target = %target.place_id,
            reform_types = reform_types.len(),
            comparables = ranked.len(),
            "comparable search complete"
        );
        Ok(ranked)
    }

    /// Estimated change realized so far at `place` after adopting `record`.
    pub fn historical_change(
        &self,
        place: &Place,
        record: &ReformRecord,
    ) -> Result<f64, ComputationError> {
        let estimate = heuristic::checked_breakdown(&PredictionRequest::for_place(
            record.reform_type.clone(),
            place,
            record.baseline_restrictiveness,
        ))?
        .final_pct;
        let progress = adoption_progress(
            record.years_since(self.as_of_year),
            typical_ramp_years(&record.reform_type),
        );
        Ok(estimate * progress)
    }

    fn to_comparable(&self, target: &Place, candidate: Candidate<'_>) -> ComparableCity {
        let Candidate {
            place,
            record,
            historical_change,
        } = candidate;
        ComparableCity {
            place_id: place.place_id.clone(),
            place_name: place.place_name.clone(),
            state_name: place.state_name.clone(),
            reform_type: record.reform_type.clone(),
            adoption_year: record.adoption_year(),
            years_since_reform: record.years_since(self.as_of_year),
            historical_change_pct: round1(historical_change),
            current_annual_permits: place.recent_permits,
            similarity_score: similarity(target, place),
        }
    }
}

/// Similarity descending, then historical change descending, then place id.
fn rank(a: &ComparableCity, b: &ComparableCity) -> Ordering {
    b.similarity_score
        .partial_cmp(&a.similarity_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            b.historical_change_pct
                .partial_cmp(&a.historical_change_pct)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.place_id.cmp(&b.place_id))
}
