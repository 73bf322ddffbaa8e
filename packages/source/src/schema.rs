//! Raw CSV row layout of the shelter dataset.
//!
//! Header names are the Korean column titles used by the published
//! dataset and must match byte-for-byte. Every cell is read as optional
//! text and coerced later, so a malformed value never fails deserialization.

use serde::Deserialize;

/// Header of the shelter name column. A file without it is not a shelter
/// dataset.
pub const NAME_HEADER: &str = "쉼터명칭";

/// One undecoded row of the shelter CSV.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawShelterRow {
    #[serde(rename = "위치코드")]
    pub location_code: Option<String>,
    #[serde(rename = "시설구분1")]
    pub facility_type_1: Option<String>,
    #[serde(rename = "시설구분2")]
    pub facility_type_2: Option<String>,
    #[serde(rename = "쉼터명칭")]
    pub name: Option<String>,
    #[serde(rename = "도로명주소")]
    pub road_address: Option<String>,
    #[serde(rename = "지번주소")]
    pub lot_address: Option<String>,
    #[serde(rename = "시설면적")]
    pub area: Option<String>,
    #[serde(rename = "이용가능인원")]
    pub capacity: Option<String>,
    #[serde(rename = "시설년도")]
    pub construction_year: Option<String>,
    #[serde(rename = "선풍기보유대수")]
    pub fan_count: Option<String>,
    #[serde(rename = "에어컨보유대수")]
    pub ac_count: Option<String>,
    #[serde(rename = "야간운영여부")]
    pub night_operation: Option<String>,
    #[serde(rename = "휴일운영여부")]
    pub holiday_operation: Option<String>,
    #[serde(rename = "숙박가능여부")]
    pub overnight_stay: Option<String>,
    #[serde(rename = "비고")]
    pub remarks: Option<String>,
    #[serde(rename = "관리부서명")]
    pub department_name: Option<String>,
    #[serde(rename = "관리부서전화번호")]
    pub department_phone: Option<String>,
    #[serde(rename = "위도")]
    pub latitude: Option<String>,
    #[serde(rename = "경도")]
    pub longitude: Option<String>,
    pub current_temperature: Option<String>,
    pub current_occupancy: Option<String>,
}
