#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Shelter query engine.
//!
//! Every entry point on [`ShelterQueryEngine`] reloads and reclassifies the
//! dataset from disk, so results always reflect the file as it is at call
//! time and no state is shared between calls. The building blocks
//! ([`filter`], [`nearby`], [`recommend`], ...) are pure functions over an
//! already-loaded record slice.

pub mod config;
pub mod display;
pub mod filter;
pub mod landmarks;
pub mod location;
pub mod nearby;
pub mod options;
pub mod recommend;
pub mod status;

use std::path::{Path, PathBuf};

use shelter_map_query_models::{
    FilterCriteria, FilterOptions, Landmark, LocationFix, NearbyOutcome, RecommendOutcome,
};
use shelter_map_shelter_models::{District, ShelterRecord};
use shelter_map_source::SourceError;

pub use config::QueryConfig;

/// Errors that prevent a query from running at all.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The dataset could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// A config override file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config override file is not valid.
    #[error("Invalid query config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Entry points over a shelter dataset on disk.
#[derive(Debug, Clone)]
pub struct ShelterQueryEngine {
    dataset: PathBuf,
    config: QueryConfig,
}

impl ShelterQueryEngine {
    /// Engine over an explicit dataset path and tunables.
    #[must_use]
    pub const fn new(dataset: PathBuf, config: QueryConfig) -> Self {
        Self { dataset, config }
    }

    /// Engine over the dataset resolved from `explicit`, the environment,
    /// or the default location, with default tunables.
    #[must_use]
    pub fn from_env(explicit: Option<&Path>) -> Self {
        Self::new(
            shelter_map_source::paths::dataset_path(explicit),
            QueryConfig::default(),
        )
    }

    /// Replaces the tunables, keeping the dataset path.
    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Path the dataset is read from on every call.
    #[must_use]
    pub fn dataset(&self) -> &Path {
        &self.dataset
    }

    /// Tunables in effect.
    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Loads and classifies the full dataset.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn records(&self) -> Result<Vec<ShelterRecord>, QueryError> {
        Ok(shelter_map_source::load_records(&self.dataset)?)
    }

    /// Records passing every selector in `criteria`, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<ShelterRecord>, QueryError> {
        let records = self.records()?;
        Ok(filter::filter_records(&records, criteria)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Shelters passing `criteria` within the nearby radius, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn nearby(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        criteria: &FilterCriteria,
    ) -> Result<NearbyOutcome, QueryError> {
        if location::require_location(latitude, longitude).is_none() {
            return Ok(NearbyOutcome::NoLocation);
        }
        let records = self.records()?;
        Ok(nearby::nearby(
            &records,
            latitude,
            longitude,
            criteria,
            &self.config,
        ))
    }

    /// Infers the district of the point, then lists nearby shelters in that
    /// district only. Returns the inferred district alongside the listing.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn nearby_in_detected_district(
        &self,
        latitude: f64,
        longitude: f64,
        criteria: &FilterCriteria,
    ) -> Result<(District, NearbyOutcome), QueryError> {
        let records = self.records()?;
        let district = self.infer_from(&records, Some(latitude), Some(longitude));
        let criteria = criteria.clone().with_district(district);
        let outcome = nearby::nearby(
            &records,
            Some(latitude),
            Some(longitude),
            &criteria,
            &self.config,
        );
        Ok((district, outcome))
    }

    /// Nearest operating shelter suitable for the user's age.
    ///
    /// A missing location or an unusable age is reported without touching
    /// the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn recommend(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
        age: Option<&str>,
    ) -> Result<RecommendOutcome, QueryError> {
        if let Err(outcome) = recommend::check_input(latitude, longitude, age) {
            return Ok(outcome);
        }
        let records = self.records()?;
        Ok(recommend::recommend(
            &records,
            latitude,
            longitude,
            age,
            &self.config,
        ))
    }

    /// District containing the point, by vote of the nearest shelters.
    ///
    /// A missing or zero coordinate yields the default district without
    /// touching the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn infer_district(
        &self,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<District, QueryError> {
        if location::require_location(latitude, longitude).is_none() {
            return Ok(self.config.default_district);
        }
        let records = self.records()?;
        Ok(self.infer_from(&records, latitude, longitude))
    }

    fn infer_from(
        &self,
        records: &[ShelterRecord],
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> District {
        let Some((latitude, longitude)) = location::require_location(latitude, longitude) else {
            return self.config.default_district;
        };
        shelter_map_spatial::infer_district(
            records,
            latitude,
            longitude,
            self.config.district_neighbours,
            self.config.default_district,
        )
    }

    /// Turns a browser geolocation payload into a location fix. Never fails:
    /// every problem is reported through [`LocationFix::message`].
    #[must_use]
    pub fn process_location_json(&self, json: &str) -> LocationFix {
        let reading = match location::read_geolocation(json) {
            Ok(reading) => reading,
            Err(message) => return LocationFix::failed(message),
        };

        let district = self
            .infer_district(Some(reading.latitude), Some(reading.longitude))
            .unwrap_or_else(|e| {
                log::warn!("District inference failed, using default: {e}");
                self.config.default_district
            });

        location::located(reading, district)
    }

    /// Selector choices for the current dataset.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Source`] if the dataset is missing or unreadable.
    pub fn filter_options(&self) -> Result<FilterOptions, QueryError> {
        Ok(options::filter_options(&self.records()?))
    }

    /// The built-in quick-pick landmarks.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn landmarks(&self) -> Vec<Landmark> {
        landmarks::all_landmarks()
    }

    /// The point used when the user has not shared a location.
    #[must_use]
    pub const fn default_location(&self) -> (f64, f64) {
        (self.config.default_latitude, self.config.default_longitude)
    }
}
