//! Quick-pick landmarks, loaded from the embedded `config/landmarks.toml`.

use serde::Deserialize;
use shelter_map_query_models::Landmark;

const LANDMARKS_TOML: &str = include_str!("../config/landmarks.toml");

#[derive(Deserialize)]
struct LandmarkFile {
    landmark: Vec<Landmark>,
}

/// Parses a landmarks TOML document.
///
/// # Errors
///
/// Returns an error string if the TOML is malformed.
pub fn parse_landmarks_toml(toml_str: &str) -> Result<Vec<Landmark>, String> {
    toml::de::from_str::<LandmarkFile>(toml_str)
        .map(|file| file.landmark)
        .map_err(|e| e.to_string())
}

/// Returns the embedded landmarks in file order.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (caught by tests).
#[must_use]
pub fn all_landmarks() -> Vec<Landmark> {
    parse_landmarks_toml(LANDMARKS_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse landmarks.toml: {e}"))
}

/// Finds a landmark by exact name.
#[must_use]
pub fn find_landmark(name: &str) -> Option<Landmark> {
    all_landmarks().into_iter().find(|l| l.name == name)
}
