//! Row normalization: type coercion and sanity checks.
//!
//! Turns a [`RawShelterRow`] into a [`Shelter`]. Bad cells are nulled in
//! place and tallied in a [`NormalizeReport`] so the loader can log one
//! summary line per load instead of one warning per cell.

use shelter_map_shelter_models::{OperatingFlag, Shelter};

use crate::parsing::{clean_text, parse_area, parse_float, parse_integer};
use crate::schema::RawShelterRow;

/// Inclusive latitude range of the Seoul bounding box.
pub const SEOUL_LATITUDE_RANGE: (f64, f64) = (37.4, 37.7);

/// Inclusive longitude range of the Seoul bounding box.
pub const SEOUL_LONGITUDE_RANGE: (f64, f64) = (126.7, 127.2);

/// Earliest construction year accepted as real.
pub const MIN_CONSTRUCTION_YEAR: i32 = 1900;

/// Counts of cells nulled while normalizing a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rows read.
    pub rows: usize,
    /// Rows whose coordinate pair was dropped (missing half, or outside
    /// the bounding box).
    pub dropped_coordinates: usize,
    /// Count or size cells dropped because the value was negative.
    pub negative_values: usize,
    /// Construction years dropped for falling outside the valid range.
    pub invalid_years: usize,
    /// Operating-flag cells that matched no known encoding.
    pub unrecognized_flags: usize,
}

/// Maps the assorted yes/no encodings found in the source onto
/// [`OperatingFlag`]. Values outside the table are kept verbatim.
#[must_use]
pub fn normalize_flag(value: Option<&str>) -> Option<OperatingFlag> {
    const YES: &[&str] = &["y", "yes", "1", "true", OperatingFlag::YES_LABEL];
    const NO: &[&str] = &["n", "no", "0", "false", OperatingFlag::NO_LABEL];

    let cleaned = clean_text(value)?;
    let matches = |table: &[&str]| table.iter().any(|v| v.eq_ignore_ascii_case(&cleaned));

    Some(if matches(YES) {
        OperatingFlag::Yes
    } else if matches(NO) {
        OperatingFlag::No
    } else {
        OperatingFlag::Unrecognized(cleaned)
    })
}

/// Returns `true` when the point lies inside the Seoul bounding box.
#[must_use]
pub fn within_seoul(latitude: f64, longitude: f64) -> bool {
    (SEOUL_LATITUDE_RANGE.0..=SEOUL_LATITUDE_RANGE.1).contains(&latitude)
        && (SEOUL_LONGITUDE_RANGE.0..=SEOUL_LONGITUDE_RANGE.1).contains(&longitude)
}

/// Validates a coordinate pair. Both halves are kept or both are dropped.
#[must_use]
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Option<(f64, f64)> {
    let (lat, lon) = (latitude?, longitude?);
    within_seoul(lat, lon).then_some((lat, lon))
}

/// Normalizes one raw row. `current_year` bounds the construction year.
#[must_use]
pub fn normalize_row(
    raw: &RawShelterRow,
    current_year: i32,
    report: &mut NormalizeReport,
) -> Shelter {
    report.rows += 1;

    let raw_latitude = parse_float(raw.latitude.as_deref());
    let raw_longitude = parse_float(raw.longitude.as_deref());
    let coordinates = validate_coordinates(raw_latitude, raw_longitude);
    if coordinates.is_none() && (raw_latitude.is_some() || raw_longitude.is_some()) {
        report.dropped_coordinates += 1;
    }

    let area_m2 = parse_area(raw.area.as_deref()).and_then(|area| {
        if area < 0.0 {
            report.negative_values += 1;
            None
        } else {
            Some(area)
        }
    });

    let capacity = non_negative_count(raw.capacity.as_deref(), report);
    let fan_count = non_negative_count(raw.fan_count.as_deref(), report);
    let ac_count = non_negative_count(raw.ac_count.as_deref(), report);
    let current_occupancy = non_negative_count(raw.current_occupancy.as_deref(), report);

    let construction_year = parse_integer(raw.construction_year.as_deref()).and_then(|year| {
        let valid = i32::try_from(year)
            .ok()
            .filter(|y| (MIN_CONSTRUCTION_YEAR..=current_year).contains(y));
        if valid.is_none() {
            report.invalid_years += 1;
        }
        valid
    });

    let mut flag = |cell: Option<&str>| {
        let normalized = normalize_flag(cell);
        if matches!(normalized, Some(OperatingFlag::Unrecognized(_))) {
            report.unrecognized_flags += 1;
        }
        normalized
    };
    let night_operation = flag(raw.night_operation.as_deref());
    let holiday_operation = flag(raw.holiday_operation.as_deref());
    let overnight_stay = flag(raw.overnight_stay.as_deref());

    Shelter {
        location_code: clean_text(raw.location_code.as_deref()),
        name: clean_text(raw.name.as_deref()).unwrap_or_default(),
        facility_type_1: clean_text(raw.facility_type_1.as_deref()),
        facility_type_2: clean_text(raw.facility_type_2.as_deref()),
        road_address: clean_text(raw.road_address.as_deref()),
        lot_address: clean_text(raw.lot_address.as_deref()),
        area_m2,
        capacity,
        construction_year,
        fan_count,
        ac_count,
        night_operation,
        holiday_operation,
        overnight_stay,
        remarks: clean_text(raw.remarks.as_deref()),
        department_name: clean_text(raw.department_name.as_deref()),
        department_phone: clean_text(raw.department_phone.as_deref()),
        latitude: coordinates.map(|(lat, _)| lat),
        longitude: coordinates.map(|(_, lon)| lon),
        current_temperature: parse_float(raw.current_temperature.as_deref()),
        current_occupancy,
    }
}

fn non_negative_count(cell: Option<&str>, report: &mut NormalizeReport) -> Option<u32> {
    let value = parse_integer(cell)?;
    if value < 0 {
        report.negative_values += 1;
        return None;
    }
    u32::try_from(value).ok()
}
