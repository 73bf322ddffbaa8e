//! Human-readable renderings of shelter fields and directions links.

use shelter_map_query_models::ShelterDisplay;
use shelter_map_shelter_models::{ShelterRecord, UNKNOWN_LABEL};

const DIRECTIONS_BASE_URL: &str = "https://map.kakao.com/link";

/// Formats a float the way the dataset writes it: integral values keep one
/// decimal place (`30.0`), everything else uses the shortest exact form.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[must_use]
pub fn area_display(record: &ShelterRecord) -> String {
    let class = record.classes.area;
    match record.shelter.area_m2 {
        Some(area) => format!("{}㎡ ({class})", format_decimal(area)),
        None => format!("{UNKNOWN_LABEL} ({class})"),
    }
}

#[must_use]
pub fn capacity_display(record: &ShelterRecord) -> String {
    let class = record.classes.capacity;
    match record.shelter.capacity {
        Some(capacity) => format!("{capacity}명 ({class})"),
        None => format!("{UNKNOWN_LABEL} ({class})"),
    }
}

#[must_use]
pub fn temperature_display(temperature: Option<f64>) -> String {
    temperature.map_or_else(
        || UNKNOWN_LABEL.to_string(),
        |t| format!("{}°C", format_decimal(t)),
    )
}

#[must_use]
pub fn occupancy_display(occupancy: Option<u32>) -> String {
    occupancy.map_or_else(|| UNKNOWN_LABEL.to_string(), |n| format!("{n}명"))
}

/// Builds every display string for `record`.
#[must_use]
pub fn shelter_display(record: &ShelterRecord) -> ShelterDisplay {
    ShelterDisplay {
        area: area_display(record),
        capacity: capacity_display(record),
        temperature: temperature_display(record.shelter.current_temperature),
        occupancy: occupancy_display(record.shelter.current_occupancy),
    }
}

/// Walking-directions link from `from` to the named destination.
///
/// Both points are `(latitude, longitude)`.
#[must_use]
pub fn directions_url(from: (f64, f64), to_name: &str, to: (f64, f64)) -> String {
    format!(
        "{DIRECTIONS_BASE_URL}/from/현재위치,{},{}/to/{to_name},{},{}",
        format_decimal(from.0),
        format_decimal(from.1),
        format_decimal(to.0),
        format_decimal(to.1),
    )
}
