//! User location input: coordinate validation, browser geolocation payloads
//! and free-text coordinates.

use serde::{Deserialize, Deserializer};
use shelter_map_query_models::LocationFix;
use shelter_map_shelter_models::{District, UNKNOWN_LABEL};

pub const EMPTY_PAYLOAD_MESSAGE: &str = "위치 정보를 가져올 수 없습니다.";
pub const INCOMPLETE_PAYLOAD_MESSAGE: &str = "위치 정보가 올바르지 않습니다.";

/// Returns the query point when both coordinates are usable.
///
/// A zero on either axis counts as "no location", the same as a missing
/// value.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn require_location(latitude: Option<f64>, longitude: Option<f64>) -> Option<(f64, f64)> {
    let latitude = latitude?;
    let longitude = longitude?;
    if latitude == 0.0 || longitude == 0.0 {
        return None;
    }
    Some((latitude, longitude))
}

/// Body posted by the browser geolocation script: either a position or an
/// `error` describing why none is available.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeolocationPayload {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Accuracy radius in metres.
    pub accuracy: Option<f64>,
    /// `Some` whenever the key is present, even when its value is `null`.
    #[serde(default, deserialize_with = "present")]
    pub error: Option<serde_json::Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// A position read from a geolocation payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeolocationReading {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: Option<f64>,
}

/// Parses a raw geolocation payload.
///
/// # Errors
///
/// Returns the user-facing diagnostic when the payload is empty, reports an
/// error, lacks a coordinate, or is not valid JSON.
pub fn read_geolocation(json: &str) -> Result<GeolocationReading, String> {
    if json.trim().is_empty() {
        return Err(EMPTY_PAYLOAD_MESSAGE.to_string());
    }

    let payload: GeolocationPayload =
        serde_json::from_str(json).map_err(|e| format!("JSON 처리 중 오류: {e}"))?;

    if let Some(error) = payload.error {
        let error = match error {
            serde_json::Value::String(text) => text,
            serde_json::Value::Null => "None".to_string(),
            other => other.to_string(),
        };
        return Err(format!("오류: {error}"));
    }

    match (payload.latitude, payload.longitude) {
        (Some(latitude), Some(longitude)) => Ok(GeolocationReading {
            latitude,
            longitude,
            accuracy_m: payload.accuracy,
        }),
        _ => Err(INCOMPLETE_PAYLOAD_MESSAGE.to_string()),
    }
}

/// Status line shown after a successful fix.
#[must_use]
pub fn located_message(accuracy_m: Option<f64>, district: District) -> String {
    let accuracy = accuracy_m.map_or_else(|| UNKNOWN_LABEL.to_string(), |m| format!("{m:.0}m"));
    format!("위치를 성공적으로 가져왔습니다! (정확도: {accuracy})\n감지된 자치구: {district}")
}

/// Combines a parsed reading with its inferred district.
#[must_use]
pub fn located(reading: GeolocationReading, district: District) -> LocationFix {
    LocationFix {
        latitude: Some(reading.latitude),
        longitude: Some(reading.longitude),
        accuracy_m: reading.accuracy_m,
        district: Some(district),
        message: located_message(reading.accuracy_m, district),
    }
}

/// Parses free-text coordinates. Returns `None` unless both parse as
/// finite numbers.
#[must_use]
pub fn parse_manual_coordinates(latitude: &str, longitude: &str) -> Option<(f64, f64)> {
    let latitude = latitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let longitude = longitude.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some((latitude, longitude))
}
