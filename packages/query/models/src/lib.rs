#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and result types for the shelter query engine.
//!
//! These are the values exchanged with the presentation layer. Empty and
//! invalid-input results are explicit enum variants carrying their own
//! user-facing message, so callers never have to guess why a list is empty.

use serde::{Deserialize, Serialize};
use shelter_map_shelter_models::{District, OperatingStatus, ShelterRecord};

/// Selector value meaning "no constraint".
pub const ALL_SELECTOR: &str = "전체";

/// The six multi-valued filter selectors.
///
/// An empty selector, or one containing [`ALL_SELECTOR`], does not
/// constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Accepted facility-type (level 2) values.
    pub facility_types: Vec<String>,
    /// Accepted area-class labels.
    pub area_classes: Vec<String>,
    /// Accepted capacity-class labels.
    pub capacity_classes: Vec<String>,
    /// Accepted fan-presence labels.
    pub fan: Vec<String>,
    /// Accepted AC-presence labels.
    pub ac: Vec<String>,
    /// Accepted district names.
    pub districts: Vec<String>,
}

impl FilterCriteria {
    /// Criteria that let every record through.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Replaces the district selector with a single district.
    #[must_use]
    pub fn with_district(mut self, district: District) -> Self {
        self.districts = vec![district.to_string()];
        self
    }
}

/// Human-readable renderings of nullable shelter fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterDisplay {
    /// e.g. `"120.0㎡ (보통)"` or `"정보없음 (정보없음)"`.
    pub area: String,
    /// e.g. `"45명 (보통)"`.
    pub capacity: String,
    /// e.g. `"31.5°C"` or `"정보없음"`.
    pub temperature: String,
    /// e.g. `"3명"` or `"정보없음"`.
    pub occupancy: String,
}

/// A shelter in a nearby listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyShelter {
    #[serde(flatten)]
    pub record: ShelterRecord,
    /// Great-circle distance from the query point.
    pub distance_km: f64,
    pub status: OperatingStatus,
    pub display: ShelterDisplay,
    /// Walking-directions link from the query point.
    pub directions_url: String,
}

/// Result of a nearby listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NearbyOutcome {
    /// No usable coordinates were supplied.
    NoLocation,
    /// Coordinates were supplied but nothing matched within the radius.
    NoMatches,
    /// Matching shelters, nearest first.
    Found {
        shelters: Vec<NearbyShelter>,
    },
}

impl NearbyOutcome {
    pub const NO_LOCATION_MESSAGE: &'static str = "위치 정보를 입력해주세요.";
    pub const NO_MATCHES_MESSAGE: &'static str = "주변 1km 내에 조건에 맞는 쉼터가 없습니다.";

    /// User-facing message for the empty variants.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoLocation => Some(Self::NO_LOCATION_MESSAGE),
            Self::NoMatches => Some(Self::NO_MATCHES_MESSAGE),
            Self::Found { .. } => None,
        }
    }

    /// The listed shelters (empty for the message variants).
    #[must_use]
    pub fn shelters(&self) -> &[NearbyShelter] {
        match self {
            Self::Found { shelters } => shelters,
            Self::NoLocation | Self::NoMatches => &[],
        }
    }
}

/// The shelter picked by a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenShelter {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
    pub directions_url: String,
}

/// Result of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecommendOutcome {
    /// No usable coordinates were supplied.
    MissingLocation,
    /// No age was supplied.
    MissingAge,
    /// The age was not an integer.
    InvalidAge,
    /// No operating, age-eligible shelter exists.
    NoSuitableShelter,
    /// The nearest eligible shelter.
    Recommended {
        message: String,
        shelter: ChosenShelter,
    },
}

impl RecommendOutcome {
    pub const MISSING_LOCATION_MESSAGE: &'static str = "위치 정보를 입력해주세요.";
    pub const MISSING_AGE_MESSAGE: &'static str = "나이를 입력해주세요.";
    pub const INVALID_AGE_MESSAGE: &'static str = "올바른 나이를 입력해주세요.";
    pub const NO_SUITABLE_MESSAGE: &'static str = "주변에 적합한 쉼터가 없습니다.";

    /// User-facing message for every variant.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::MissingLocation => Self::MISSING_LOCATION_MESSAGE,
            Self::MissingAge => Self::MISSING_AGE_MESSAGE,
            Self::InvalidAge => Self::INVALID_AGE_MESSAGE,
            Self::NoSuitableShelter => Self::NO_SUITABLE_MESSAGE,
            Self::Recommended { message, .. } => message,
        }
    }

    /// Splits into the message and the chosen shelter, if any.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<ChosenShelter>) {
        match self {
            Self::Recommended { message, shelter } => (message, Some(shelter)),
            other => (other.message().to_owned(), None),
        }
    }
}

/// Outcome of ingesting a browser geolocation payload.
///
/// On failure every coordinate field is `None` and `message` explains why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Reported accuracy radius in metres.
    pub accuracy_m: Option<f64>,
    /// District inferred for the reported point.
    pub district: Option<District>,
    pub message: String,
}

impl LocationFix {
    /// A failed fix carrying only a diagnostic.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            latitude: None,
            longitude: None,
            accuracy_m: None,
            district: None,
            message: message.into(),
        }
    }

    /// Returns `true` when coordinates were obtained.
    #[must_use]
    pub const fn is_located(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Choices offered for each filter selector, [`ALL_SELECTOR`] first where
/// applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub facility_types: Vec<String>,
    pub area_sizes: Vec<String>,
    pub capacity_sizes: Vec<String>,
    pub fan_options: Vec<String>,
    pub ac_options: Vec<String>,
    pub districts: Vec<String>,
}

/// A well-known place users can jump to instead of sharing their location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcomes_have_distinct_messages() {
        assert_ne!(
            NearbyOutcome::NoLocation.message(),
            NearbyOutcome::NoMatches.message()
        );
        assert!(NearbyOutcome::NoMatches.shelters().is_empty());
    }

    #[test]
    fn recommendation_validation_messages_are_distinct() {
        let messages = [
            RecommendOutcome::MissingLocation.message().to_owned(),
            RecommendOutcome::MissingAge.message().to_owned(),
            RecommendOutcome::InvalidAge.message().to_owned(),
            RecommendOutcome::NoSuitableShelter.message().to_owned(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn into_parts_drops_shelter_for_failures() {
        let (message, shelter) = RecommendOutcome::InvalidAge.into_parts();
        assert_eq!(message, RecommendOutcome::INVALID_AGE_MESSAGE);
        assert!(shelter.is_none());
    }

    #[test]
    fn criteria_deserialize_with_missing_selectors() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"districts": ["중구", "종로구"]}"#).unwrap();
        assert!(criteria.facility_types.is_empty());
        assert_eq!(criteria.districts, ["중구", "종로구"]);
    }

    #[test]
    fn with_district_replaces_selector() {
        let criteria = FilterCriteria {
            districts: vec!["강남구".to_string(), "서초구".to_string()],
            ..FilterCriteria::default()
        }
        .with_district(District::Mapo);
        assert_eq!(criteria.districts, ["마포구"]);
    }

    #[test]
    fn outcome_is_tagged_in_json() {
        let json = serde_json::to_value(NearbyOutcome::NoLocation).unwrap();
        assert_eq!(json["kind"], "noLocation");
    }
}
