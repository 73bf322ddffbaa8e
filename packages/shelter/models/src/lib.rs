#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heat-relief shelter record types and classification taxonomies.
//!
//! This crate defines the canonical shelter record used across the entire
//! shelter-map system, along with the fixed categorical buckets that raw
//! numeric attributes are classified into. Labels are the Korean strings
//! the source dataset and its consumers use, so every enum round-trips
//! through [`std::fmt::Display`] and [`std::str::FromStr`] with those labels.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Label shared by every "no information" sentinel category.
pub const UNKNOWN_LABEL: &str = "정보없음";

/// Facility size bucket derived from the floor area in square metres.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum AreaClass {
    /// Under 50 m²
    #[serde(rename = "매우 작음")]
    #[strum(serialize = "매우 작음")]
    VerySmall,
    /// 50 m² up to (not including) 100 m²
    #[serde(rename = "작음")]
    #[strum(serialize = "작음")]
    Small,
    /// 100 m² up to (not including) 200 m²
    #[serde(rename = "보통")]
    #[strum(serialize = "보통")]
    Medium,
    /// 200 m² up to (not including) 500 m²
    #[serde(rename = "큼")]
    #[strum(serialize = "큼")]
    Large,
    /// 500 m² and above
    #[serde(rename = "매우 큼")]
    #[strum(serialize = "매우 큼")]
    VeryLarge,
    /// Area missing from the source row
    #[serde(rename = "정보없음")]
    #[strum(serialize = "정보없음")]
    Unknown,
}

impl AreaClass {
    /// Returns the selectable size buckets in ascending order (excludes
    /// [`Self::Unknown`]).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::VerySmall,
            Self::Small,
            Self::Medium,
            Self::Large,
            Self::VeryLarge,
        ]
    }
}

/// Capacity bucket derived from the number of people a shelter can hold.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CapacityClass {
    /// Fewer than 10 people
    #[serde(rename = "매우 적음")]
    #[strum(serialize = "매우 적음")]
    VeryFew,
    /// 10 to 29 people
    #[serde(rename = "적음")]
    #[strum(serialize = "적음")]
    Few,
    /// 30 to 49 people
    #[serde(rename = "보통")]
    #[strum(serialize = "보통")]
    Medium,
    /// 50 to 99 people
    #[serde(rename = "많음")]
    #[strum(serialize = "많음")]
    Many,
    /// 100 people or more
    #[serde(rename = "매우 많음")]
    #[strum(serialize = "매우 많음")]
    VeryMany,
    /// Capacity missing from the source row
    #[serde(rename = "정보없음")]
    #[strum(serialize = "정보없음")]
    Unknown,
}

impl CapacityClass {
    /// Returns the selectable capacity buckets in ascending order (excludes
    /// [`Self::Unknown`]).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::VeryFew,
            Self::Few,
            Self::Medium,
            Self::Many,
            Self::VeryMany,
        ]
    }
}

/// Whether a shelter has at least one unit of some piece of equipment
/// (fans, air conditioners).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Presence {
    /// One or more units
    #[serde(rename = "있음")]
    #[strum(serialize = "있음")]
    Present,
    /// Zero units, or the count is missing
    #[serde(rename = "없음")]
    #[strum(serialize = "없음")]
    Absent,
}

impl Presence {
    /// Returns both variants, present first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Present, Self::Absent]
    }
}

/// Seoul administrative district (자치구).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum District {
    #[serde(rename = "강남구")]
    #[strum(serialize = "강남구")]
    Gangnam,
    #[serde(rename = "강동구")]
    #[strum(serialize = "강동구")]
    Gangdong,
    #[serde(rename = "강북구")]
    #[strum(serialize = "강북구")]
    Gangbuk,
    #[serde(rename = "강서구")]
    #[strum(serialize = "강서구")]
    Gangseo,
    #[serde(rename = "관악구")]
    #[strum(serialize = "관악구")]
    Gwanak,
    #[serde(rename = "광진구")]
    #[strum(serialize = "광진구")]
    Gwangjin,
    #[serde(rename = "구로구")]
    #[strum(serialize = "구로구")]
    Guro,
    #[serde(rename = "금천구")]
    #[strum(serialize = "금천구")]
    Geumcheon,
    #[serde(rename = "노원구")]
    #[strum(serialize = "노원구")]
    Nowon,
    #[serde(rename = "도봉구")]
    #[strum(serialize = "도봉구")]
    Dobong,
    #[serde(rename = "동대문구")]
    #[strum(serialize = "동대문구")]
    Dongdaemun,
    #[serde(rename = "동작구")]
    #[strum(serialize = "동작구")]
    Dongjak,
    #[serde(rename = "마포구")]
    #[strum(serialize = "마포구")]
    Mapo,
    #[serde(rename = "서대문구")]
    #[strum(serialize = "서대문구")]
    Seodaemun,
    #[serde(rename = "서초구")]
    #[strum(serialize = "서초구")]
    Seocho,
    #[serde(rename = "성동구")]
    #[strum(serialize = "성동구")]
    Seongdong,
    #[serde(rename = "성북구")]
    #[strum(serialize = "성북구")]
    Seongbuk,
    #[serde(rename = "송파구")]
    #[strum(serialize = "송파구")]
    Songpa,
    #[serde(rename = "양천구")]
    #[strum(serialize = "양천구")]
    Yangcheon,
    #[serde(rename = "영등포구")]
    #[strum(serialize = "영등포구")]
    Yeongdeungpo,
    #[serde(rename = "용산구")]
    #[strum(serialize = "용산구")]
    Yongsan,
    #[serde(rename = "은평구")]
    #[strum(serialize = "은평구")]
    Eunpyeong,
    #[serde(rename = "종로구")]
    #[strum(serialize = "종로구")]
    Jongno,
    #[serde(rename = "중구")]
    #[strum(serialize = "중구")]
    Jung,
    #[serde(rename = "중랑구")]
    #[strum(serialize = "중랑구")]
    Jungnang,
    /// An address is present but names none of the 25 districts
    #[serde(rename = "기타")]
    #[strum(serialize = "기타")]
    Other,
    /// No road address to extract a district from
    #[serde(rename = "정보없음")]
    #[strum(serialize = "정보없음")]
    Unknown,
}

/// District returned when nothing better can be inferred (the city hall
/// district).
pub const DEFAULT_DISTRICT: District = District::Jung;

impl District {
    /// The 25 named districts, in the order addresses are scanned.
    pub const SEOUL: &'static [Self] = &[
        Self::Gangnam,
        Self::Gangdong,
        Self::Gangbuk,
        Self::Gangseo,
        Self::Gwanak,
        Self::Gwangjin,
        Self::Guro,
        Self::Geumcheon,
        Self::Nowon,
        Self::Dobong,
        Self::Dongdaemun,
        Self::Dongjak,
        Self::Mapo,
        Self::Seodaemun,
        Self::Seocho,
        Self::Seongdong,
        Self::Seongbuk,
        Self::Songpa,
        Self::Yangcheon,
        Self::Yeongdeungpo,
        Self::Yongsan,
        Self::Eunpyeong,
        Self::Jongno,
        Self::Jung,
        Self::Jungnang,
    ];
}

/// A yes/no operating flag (night operation, holiday operation, overnight
/// stay).
///
/// Source encodings are mapped onto [`Self::Yes`] / [`Self::No`] during
/// load; anything the mapping table does not recognize is preserved
/// verbatim in [`Self::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatingFlag {
    /// 예
    Yes,
    /// 아니오
    No,
    /// Raw source value outside the mapping table
    Unrecognized(String),
}

impl OperatingFlag {
    /// Canonical label for [`Self::Yes`].
    pub const YES_LABEL: &'static str = "예";
    /// Canonical label for [`Self::No`].
    pub const NO_LABEL: &'static str = "아니오";

    /// Returns the display label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Yes => Self::YES_LABEL,
            Self::No => Self::NO_LABEL,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl std::fmt::Display for OperatingFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for OperatingFlag {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::YES_LABEL => Self::Yes,
            Self::NO_LABEL => Self::No,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<OperatingFlag> for String {
    fn from(value: OperatingFlag) -> Self {
        match value {
            OperatingFlag::Unrecognized(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

/// Live availability of a shelter derived from its telemetry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum OperatingStatus {
    #[serde(rename = "운영 중")]
    #[strum(serialize = "운영 중")]
    Operating,
    #[serde(rename = "미운영 중")]
    #[strum(serialize = "미운영 중")]
    NotOperating,
}

impl OperatingStatus {
    #[must_use]
    pub const fn is_operating(self) -> bool {
        matches!(self, Self::Operating)
    }
}

/// One row of the shelter dataset after type coercion and validation.
///
/// Coordinates are either both present and inside the Seoul bounding box or
/// both `None`. Count and size fields are never negative.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    /// Source-assigned location code.
    pub location_code: Option<String>,
    /// Shelter name.
    pub name: String,
    /// Facility category, level 1.
    pub facility_type_1: Option<String>,
    /// Facility category, level 2 (e.g. "노인시설(경로당, 회원이용시설)").
    pub facility_type_2: Option<String>,
    /// Road-name address.
    pub road_address: Option<String>,
    /// Lot-number address.
    pub lot_address: Option<String>,
    /// Floor area in square metres.
    pub area_m2: Option<f64>,
    /// Number of people the shelter can hold.
    pub capacity: Option<u32>,
    /// Construction year, within 1900 and the year the dataset was loaded.
    pub construction_year: Option<i32>,
    /// Number of fans.
    pub fan_count: Option<u32>,
    /// Number of air conditioners.
    pub ac_count: Option<u32>,
    /// Open at night.
    pub night_operation: Option<OperatingFlag>,
    /// Open on holidays.
    pub holiday_operation: Option<OperatingFlag>,
    /// Overnight stays allowed.
    pub overnight_stay: Option<OperatingFlag>,
    /// Free-text remarks.
    pub remarks: Option<String>,
    /// Managing department name.
    pub department_name: Option<String>,
    /// Managing department phone number.
    pub department_phone: Option<String>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// Current indoor temperature in °C, when telemetry is available.
    pub current_temperature: Option<f64>,
    /// Current number of occupants, when telemetry is available.
    pub current_occupancy: Option<u32>,
}

impl Shelter {
    /// Returns `(latitude, longitude)` when both are known.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Categorical attributes derived from a [`Shelter`]'s raw fields.
///
/// Serialized alongside the [`Shelter`] fields, so the buckets use their own
/// keys instead of shadowing `capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterClasses {
    #[serde(rename = "areaClass")]
    pub area: AreaClass,
    #[serde(rename = "capacityClass")]
    pub capacity: CapacityClass,
    pub fan: Presence,
    pub ac: Presence,
    pub district: District,
}

/// A normalized shelter together with its derived classes.
///
/// Built once per load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    #[serde(flatten)]
    pub shelter: Shelter,
    #[serde(flatten)]
    pub classes: ShelterClasses,
}

impl ShelterRecord {
    /// Returns `(latitude, longitude)` when both are known.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        self.shelter.coordinates()
    }

    /// Returns the shelter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.shelter.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_strum() {
        for class in AreaClass::all() {
            let parsed: AreaClass = class.as_ref().parse().unwrap();
            assert_eq!(parsed, *class);
        }
        for district in District::SEOUL {
            let parsed: District = district.to_string().parse().unwrap();
            assert_eq!(parsed, *district);
        }
    }

    #[test]
    fn seoul_has_twenty_five_named_districts() {
        assert_eq!(District::SEOUL.len(), 25);
        assert!(!District::SEOUL.contains(&District::Other));
        assert!(!District::SEOUL.contains(&District::Unknown));
    }

    #[test]
    fn default_district_is_jung_gu() {
        assert_eq!(DEFAULT_DISTRICT.as_ref(), "중구");
    }

    #[test]
    fn operating_flag_keeps_unrecognized_values() {
        assert_eq!(OperatingFlag::from("예".to_string()), OperatingFlag::Yes);
        assert_eq!(OperatingFlag::from("아니오".to_string()), OperatingFlag::No);
        let other = OperatingFlag::from("주말만".to_string());
        assert_eq!(other.as_str(), "주말만");
        assert_eq!(String::from(other), "주말만");
    }

    #[test]
    fn operating_flag_serializes_as_label() {
        let json = serde_json::to_string(&OperatingFlag::No).unwrap();
        assert_eq!(json, "\"아니오\"");
    }

    #[test]
    fn record_json_keeps_count_and_class_apart() {
        let record = ShelterRecord {
            shelter: Shelter {
                name: "시청 경로당".to_string(),
                area_m2: Some(120.0),
                capacity: Some(45),
                night_operation: Some(OperatingFlag::Yes),
                latitude: Some(37.567),
                longitude: Some(126.978),
                ..Shelter::default()
            },
            classes: ShelterClasses {
                area: AreaClass::Medium,
                capacity: CapacityClass::Medium,
                fan: Presence::Present,
                ac: Presence::Absent,
                district: District::Jung,
            },
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json.matches("\"capacity\"").count(), 1);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["capacity"], 45);
        assert_eq!(value["capacityClass"], "보통");
        assert_eq!(value["areaM2"], 120.0);
        assert_eq!(value["areaClass"], "보통");
        assert_eq!(value["district"], "중구");

        let parsed: ShelterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn coordinates_require_both_axes() {
        let mut shelter = Shelter {
            latitude: Some(37.5),
            ..Shelter::default()
        };
        assert_eq!(shelter.coordinates(), None);
        shelter.longitude = Some(127.0);
        assert_eq!(shelter.coordinates(), Some((37.5, 127.0)));
    }
}
