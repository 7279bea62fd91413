//! In-memory registries. Immutable after construction.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::warn;
use zoning_core::config::DataConfig;
use zoning_core::errors::DataError;
use zoning_core::{IPlaceRegistry, IReformRegistry, Place, ReformRecord, ReformType, ZoningResult};

use crate::loader;

/// Places keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct PlaceRegistry {
    places: HashMap<String, Place>,
}

impl PlaceRegistry {
    /// Build from validated places. Later duplicates replace earlier ones;
    /// the loader already rejects duplicates in files.
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places: places
                .into_iter()
                .map(|p| (p.place_id.clone(), p))
                .collect(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        Ok(Self::new(loader::load_places(path)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl IPlaceRegistry for PlaceRegistry {
    fn place(&self, place_id: &str) -> Option<&Place> {
        self.places.get(place_id)
    }

    fn place_count(&self) -> usize {
        self.places.len()
    }
}

/// Reform adoptions with lookup indexes by type and by place.
#[derive(Debug, Clone, Default)]
pub struct ReformRegistry {
    records: Vec<ReformRecord>,
    by_type: HashMap<ReformType, Vec<usize>>,
    by_place: HashMap<String, Vec<usize>>,
}

impl ReformRegistry {
    pub fn new(records: Vec<ReformRecord>) -> Self {
        let mut by_type: HashMap<ReformType, Vec<usize>> = HashMap::new();
        let mut by_place: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            by_type
                .entry(record.reform_type.clone())
                .or_default()
                .push(idx);
            by_place
                .entry(record.place_id.clone())
                .or_default()
                .push(idx);
        }
        Self {
            records,
            by_type,
            by_place,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        Ok(Self::new(loader::load_reforms(path)?))
    }

    pub fn records(&self) -> &[ReformRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn select(&self, indexes: Option<&Vec<usize>>) -> Vec<&ReformRecord> {
        indexes
            .map(|ids| ids.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }
}

impl IReformRegistry for ReformRegistry {
    fn reforms_of_type(&self, reform_type: &ReformType) -> Vec<&ReformRecord> {
        self.select(self.by_type.get(reform_type))
    }

    fn reforms_for_place(&self, place_id: &str) -> Vec<&ReformRecord> {
        self.select(self.by_place.get(place_id))
    }

    fn reform_types(&self) -> Vec<ReformType> {
        self.by_type
            .keys()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// One consistent snapshot of both registries.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    pub places: PlaceRegistry,
    pub reforms: ReformRegistry,
}

impl Registries {
    /// Load both registries from the configured paths.
    pub fn load(config: &DataConfig) -> ZoningResult<Self> {
        let places = PlaceRegistry::from_path(&config.effective_places_path())?;

        let reforms_path = config.effective_reforms_path();
        let reforms = if !reforms_path.exists() && config.effective_allow_missing_reforms() {
            warn!(
                path = %reforms_path.display(),
                "reforms file missing, continuing with an empty reform registry"
            );
            ReformRegistry::default()
        } else {
            ReformRegistry::from_path(&reforms_path)?
        };

        Ok(Self { places, reforms })
    }
}
