//! Live operating status from shelter telemetry.

use shelter_map_shelter_models::{OperatingStatus, Shelter};

/// Derives a shelter's live status from its telemetry.
///
/// A shelter is closed only when both readings are present, the temperature
/// is at or above `hot_temperature_c`, and nobody is inside. Missing
/// telemetry always counts as operating.
#[must_use]
pub fn operating_status(shelter: &Shelter, hot_temperature_c: f64) -> OperatingStatus {
    match (shelter.current_temperature, shelter.current_occupancy) {
        (Some(temperature), Some(0)) if temperature >= hot_temperature_c => {
            OperatingStatus::NotOperating
        }
        _ => OperatingStatus::Operating,
    }
}
