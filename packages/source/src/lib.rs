#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Shelter dataset loading and normalization.
//!
//! Reads the shelter CSV, coerces every cell into a typed field, applies
//! the range and sign checks, and classifies each row into a
//! [`ShelterRecord`]. Loading is a pure function of the file contents
//! (plus the current year), and nothing is cached between calls.

pub mod classify;
pub mod normalize;
pub mod parsing;
pub mod paths;
pub mod schema;

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Datelike as _;
use shelter_map_shelter_models::ShelterRecord;

use crate::normalize::{NormalizeReport, normalize_row};
use crate::schema::{NAME_HEADER, RawShelterRow};

/// Errors that make the dataset unusable. Per-cell problems are never
/// reported here; they are nulled during normalization.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The dataset file does not exist.
    #[error("Shelter dataset not found: {}", path.display())]
    MissingDataset {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid CSV (ragged rows, invalid UTF-8, ...).
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed, but it does not look like the shelter dataset.
    #[error("Schema error: missing required column '{column}'")]
    Schema {
        /// Header that was expected.
        column: &'static str,
    },
}

/// Loads and classifies every shelter in the CSV file at `path`.
///
/// # Errors
///
/// Returns [`SourceError`] if the file is missing, unreadable, or not a
/// shelter dataset.
pub fn load_records(path: &Path) -> Result<Vec<ShelterRecord>, SourceError> {
    if !path.is_file() {
        return Err(SourceError::MissingDataset {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Loading shelter dataset from {}", path.display());
    let file = std::fs::File::open(path)?;
    let records = load_records_from_reader(file, chrono::Local::now().year())?;
    log::info!(
        "Loaded {} shelters from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

/// Loads and classifies shelters from any CSV byte stream.
///
/// `current_year` is the upper bound of the construction-year check.
///
/// # Errors
///
/// Returns [`SourceError`] if the stream is not valid CSV or lacks the
/// shelter name column.
pub fn load_records_from_reader<R: Read>(
    reader: R,
    current_year: i32,
) -> Result<Vec<ShelterRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);

    if !reader.headers()?.iter().any(|h| h.trim() == NAME_HEADER) {
        return Err(SourceError::Schema {
            column: NAME_HEADER,
        });
    }

    let mut report = NormalizeReport::default();
    let mut records = Vec::new();

    for row in reader.deserialize::<RawShelterRow>() {
        let raw = row?;
        let shelter = normalize_row(&raw, current_year, &mut report);
        records.push(classify::into_record(shelter));
    }

    log_report(&report);

    Ok(records)
}

fn log_report(report: &NormalizeReport) {
    if report.dropped_coordinates > 0 {
        log::warn!(
            "{} of {} rows had missing or out-of-bounds coordinates",
            report.dropped_coordinates,
            report.rows
        );
    }
    if report.negative_values > 0 {
        log::warn!("Dropped {} negative count/area values", report.negative_values);
    }
    if report.invalid_years > 0 {
        log::warn!("Dropped {} unrealistic construction years", report.invalid_years);
    }
    if report.unrecognized_flags > 0 {
        log::debug!(
            "{} operating-flag values kept verbatim (no known encoding)",
            report.unrecognized_flags
        );
    }
}

#[cfg(test)]
mod tests {
    use shelter_map_shelter_models::{AreaClass, District, OperatingFlag, Presence};

    use super::*;

    const HEADER: &str = "위치코드,시설구분1,시설구분2,쉼터명칭,도로명주소,지번주소,시설면적,이용가능인원,시설년도,선풍기보유대수,에어컨보유대수,야간운영여부,휴일운영여부,숙박가능여부,비고,관리부서명,관리부서전화번호,위도,경도";

    fn csv_with(rows: &[&str]) -> String {
        let mut out = HEADER.to_string();
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn loads_and_classifies_rows() {
        let csv = csv_with(&[
            "A001,노인시설,노인시설(경로당),중림 경로당,서울특별시 중구 중림로 10,서울특별시 중구 중림동 1,\"1,234\",45,1995,2,1,Y,n,0,,중구청 복지과,02-3396-0000,37.5600,126.9680",
            "A002,공공시설,주민센터,성남 쉼터,경기도 성남시 분당구 불정로 6,,80,,2030,0,,예,아니오,주말만,,,,37.3500,127.1100",
        ]);
        let records = load_records_from_reader(csv.as_bytes(), 2025).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.name(), "중림 경로당");
        assert_eq!(first.shelter.area_m2, Some(1234.0));
        assert_eq!(first.classes.area, AreaClass::VeryLarge);
        assert_eq!(first.shelter.night_operation, Some(OperatingFlag::Yes));
        assert_eq!(first.shelter.holiday_operation, Some(OperatingFlag::No));
        assert_eq!(first.shelter.overnight_stay, Some(OperatingFlag::No));
        assert_eq!(first.shelter.remarks, None);
        assert_eq!(first.classes.district, District::Jung);
        assert_eq!(first.coordinates(), Some((37.56, 126.968)));

        let second = &records[1];
        assert_eq!(second.shelter.construction_year, None);
        assert_eq!(second.shelter.capacity, None);
        assert_eq!(second.classes.fan, Presence::Absent);
        assert_eq!(second.classes.ac, Presence::Absent);
        assert_eq!(
            second.shelter.overnight_stay,
            Some(OperatingFlag::Unrecognized("주말만".to_string()))
        );
        assert_eq!(second.classes.district, District::Other);
        assert_eq!(second.coordinates(), None);
    }

    #[test]
    fn telemetry_columns_are_optional() {
        let csv = "쉼터명칭,위도,경도,current_temperature,current_occupancy\n\
                   더운 쉼터,37.56,126.97,31.5,0\n\
                   빈 쉼터,37.56,126.97,,\n";
        let records = load_records_from_reader(csv.as_bytes(), 2025).unwrap();
        assert_eq!(records[0].shelter.current_temperature, Some(31.5));
        assert_eq!(records[0].shelter.current_occupancy, Some(0));
        assert_eq!(records[1].shelter.current_temperature, None);
        assert_eq!(records[1].shelter.current_occupancy, None);

        let without = load_records_from_reader("쉼터명칭\n쉼터\n".as_bytes(), 2025).unwrap();
        assert_eq!(without[0].shelter.current_temperature, None);
        assert_eq!(without[0].classes.district, District::Unknown);
    }

    #[test]
    fn loading_twice_is_deterministic() {
        let csv = csv_with(&[
            "A001,노인시설,노인시설(경로당),중림 경로당,서울특별시 중구 중림로 10,,120,45,1995,2,1,Y,N,N,,,,37.5600,126.9680",
        ]);
        let first = load_records_from_reader(csv.as_bytes(), 2025).unwrap();
        let second = load_records_from_reader(csv.as_bytes(), 2025).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_files_without_name_column() {
        let err = load_records_from_reader("a,b\n1,2\n".as_bytes(), 2025).unwrap_err();
        assert!(matches!(err, SourceError::Schema { column: "쉼터명칭" }));
    }

    #[test]
    fn ragged_rows_are_fatal() {
        let csv = "쉼터명칭,위도,경도\n쉼터,37.5\n";
        let err = load_records_from_reader(csv.as_bytes(), 2025).unwrap_err();
        assert!(matches!(err, SourceError::Csv(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_records(Path::new("/nonexistent/shelters.csv")).unwrap_err();
        assert!(matches!(err, SourceError::MissingDataset { .. }));
    }
}
