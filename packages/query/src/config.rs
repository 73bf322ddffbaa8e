//! Query tunables.
//!
//! Every field has a built-in default; a TOML file may override any subset
//! of them:
//!
//! ```toml
//! nearby_radius_km = 1.5
//! default_district = "종로구"
//! ```

use std::path::Path;

use serde::Deserialize;
use shelter_map_shelter_models::{DEFAULT_DISTRICT, District};
use shelter_map_spatial::district::DEFAULT_NEIGHBOURS;

use crate::QueryError;

/// Tunables for the query engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Radius of a nearby listing, inclusive.
    pub nearby_radius_km: f64,
    /// Nearest shelters that vote in district inference.
    pub district_neighbours: usize,
    /// District returned when inference has no votes.
    pub default_district: District,
    /// Users at or under this age cannot be sent to members-only facilities.
    pub senior_age_threshold: i64,
    /// Substring of facility-type (level 2) marking members-only facilities.
    pub members_only_marker: String,
    /// Temperature at or above which an empty shelter counts as closed.
    pub hot_temperature_c: f64,
    /// Map centre used when the user has no location (Seoul City Hall).
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: 1.0,
            district_neighbours: DEFAULT_NEIGHBOURS,
            default_district: DEFAULT_DISTRICT,
            senior_age_threshold: 60,
            members_only_marker: "회원이용시설".to_string(),
            hot_temperature_c: 30.0,
            default_latitude: 37.5665,
            default_longitude: 126.9780,
        }
    }
}

impl QueryConfig {
    /// Parses a TOML override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or names an unknown key.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::de::from_str(toml_str)
    }

    /// Reads a TOML override file.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, QueryError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents).map_err(|source| QueryError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded query config from {}", path.display());
        Ok(config)
    }
}
