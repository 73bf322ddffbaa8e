//! Age-aware recommendation of the single nearest suitable shelter.

use shelter_map_query_models::{ChosenShelter, RecommendOutcome};
use shelter_map_shelter_models::ShelterRecord;
use shelter_map_spatial::rank_by_distance;

use crate::config::QueryConfig;
use crate::display::{directions_url, occupancy_display, temperature_display};
use crate::location::require_location;
use crate::status::operating_status;

enum AgeInput {
    Missing,
    Invalid,
    Valid(i64),
}

fn parse_age(age: Option<&str>) -> AgeInput {
    let Some(age) = age.map(str::trim).filter(|a| !a.is_empty()) else {
        return AgeInput::Missing;
    };
    age.parse::<i64>().map_or(AgeInput::Invalid, AgeInput::Valid)
}

/// Validates the query point and age before any data is consulted.
///
/// # Errors
///
/// Returns the outcome to report when the location or age is unusable.
pub(crate) fn check_input(
    latitude: Option<f64>,
    longitude: Option<f64>,
    age: Option<&str>,
) -> Result<((f64, f64), i64), RecommendOutcome> {
    let point = require_location(latitude, longitude).ok_or(RecommendOutcome::MissingLocation)?;
    match parse_age(age) {
        AgeInput::Missing => Err(RecommendOutcome::MissingAge),
        AgeInput::Invalid => Err(RecommendOutcome::InvalidAge),
        AgeInput::Valid(age) => Ok((point, age)),
    }
}

fn is_members_only(record: &ShelterRecord, marker: &str) -> bool {
    record
        .shelter
        .facility_type_2
        .as_deref()
        .is_some_and(|facility_type| facility_type.contains(marker))
}

/// Picks the nearest operating shelter the user may enter.
///
/// Users at or under the senior age threshold are never sent to
/// members-only facilities.
#[must_use]
pub fn recommend(
    records: &[ShelterRecord],
    latitude: Option<f64>,
    longitude: Option<f64>,
    age: Option<&str>,
    config: &QueryConfig,
) -> RecommendOutcome {
    let ((latitude, longitude), age) = match check_input(latitude, longitude, age) {
        Ok(input) => input,
        Err(outcome) => return outcome,
    };
    let excludes_members_only = age <= config.senior_age_threshold;

    let operating = records.iter().filter(|record| {
        operating_status(&record.shelter, config.hot_temperature_c).is_operating()
    });

    let best = rank_by_distance(operating, latitude, longitude)
        .into_iter()
        .find(|ranked| {
            !(excludes_members_only && is_members_only(ranked.record, &config.members_only_marker))
        });

    let Some(best) = best else {
        log::debug!("No suitable shelter for age {age} near ({latitude}, {longitude})");
        return RecommendOutcome::NoSuitableShelter;
    };
    let Some((shelter_lat, shelter_lon)) = best.record.coordinates() else {
        return RecommendOutcome::NoSuitableShelter;
    };

    let shelter = &best.record.shelter;
    let message = format!(
        "선생님께 가장 적합한 쉼터는 {} 입니다. 현 위치로부터 {:.1}km 거리에 있습니다. 현재 온도 {}, 현재 사용자 수 {}로 운영 중입니다.",
        shelter.name,
        best.distance_km,
        temperature_display(shelter.current_temperature),
        occupancy_display(shelter.current_occupancy),
    );

    log::debug!(
        "Recommended {} at {:.3} km for age {age}",
        shelter.name,
        best.distance_km
    );

    RecommendOutcome::Recommended {
        message,
        shelter: ChosenShelter {
            name: shelter.name.clone(),
            latitude: shelter_lat,
            longitude: shelter_lon,
            distance_km: best.distance_km,
            directions_url: directions_url(
                (latitude, longitude),
                &shelter.name,
                (shelter_lat, shelter_lon),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use shelter_map_shelter_models::{
        AreaClass, CapacityClass, District, Presence, Shelter, ShelterClasses,
    };

    use super::*;

    const ORIGIN: (f64, f64) = (37.5665, 126.9780);

    fn record(name: &str, steps_north: f64, facility_type_2: &str) -> ShelterRecord {
        ShelterRecord {
            shelter: Shelter {
                name: name.to_string(),
                facility_type_2: Some(facility_type_2.to_string()),
                latitude: Some(ORIGIN.0 + 0.0009 * steps_north),
                longitude: Some(ORIGIN.1),
                ..Shelter::default()
            },
            classes: ShelterClasses {
                area: AreaClass::Unknown,
                capacity: CapacityClass::Unknown,
                fan: Presence::Absent,
                ac: Presence::Absent,
                district: District::Jung,
            },
        }
    }

    fn fixture() -> Vec<ShelterRecord> {
        vec![
            record("경로당", 1.0, "노인시설(경로당, 회원이용시설)"),
            record("주민센터", 3.0, "주민센터"),
        ]
    }

    fn chosen_name(outcome: RecommendOutcome) -> Option<String> {
        outcome.into_parts().1.map(|shelter| shelter.name)
    }

    fn ask(records: &[ShelterRecord], age: &str) -> RecommendOutcome {
        recommend(
            records,
            Some(ORIGIN.0),
            Some(ORIGIN.1),
            Some(age),
            &QueryConfig::default(),
        )
    }

    #[test]
    fn age_sixty_skips_members_only_facilities() {
        assert_eq!(chosen_name(ask(&fixture(), "60")).as_deref(), Some("주민센터"));
    }

    #[test]
    fn age_sixty_one_may_use_members_only_facilities() {
        assert_eq!(chosen_name(ask(&fixture(), "61")).as_deref(), Some("경로당"));
    }

    #[test]
    fn input_validation_comes_first() {
        let records = fixture();
        let config = QueryConfig::default();
        assert_eq!(
            recommend(&records, None, Some(ORIGIN.1), Some("70"), &config),
            RecommendOutcome::MissingLocation
        );
        assert_eq!(
            recommend(&records, Some(ORIGIN.0), Some(ORIGIN.1), None, &config),
            RecommendOutcome::MissingAge
        );
        assert_eq!(ask(&records, "  "), RecommendOutcome::MissingAge);
        assert_eq!(ask(&records, "일흔"), RecommendOutcome::InvalidAge);
        assert_eq!(ask(&records, "65.5"), RecommendOutcome::InvalidAge);
    }

    #[test]
    fn closed_shelters_are_skipped() {
        let mut records = fixture();
        records[1].shelter.current_temperature = Some(33.0);
        records[1].shelter.current_occupancy = Some(0);
        assert_eq!(ask(&records, "30"), RecommendOutcome::NoSuitableShelter);
    }

    #[test]
    fn message_names_shelter_distance_and_telemetry() {
        let mut records = fixture();
        records[1].shelter.current_temperature = Some(28.5);
        records[1].shelter.current_occupancy = Some(4);

        let RecommendOutcome::Recommended { message, shelter } = ask(&records, "45") else {
            panic!("expected a recommendation");
        };
        assert_eq!(
            message,
            "선생님께 가장 적합한 쉼터는 주민센터 입니다. 현 위치로부터 0.3km 거리에 있습니다. 현재 온도 28.5°C, 현재 사용자 수 4명로 운영 중입니다."
        );
        assert!((shelter.longitude - ORIGIN.1).abs() < 1e-12);
    }

    #[test]
    fn unknown_telemetry_is_reported() {
        let (message, _) = ask(&fixture(), "80").into_parts();
        assert!(message.contains("현재 온도 정보없음, 현재 사용자 수 정보없음"));
    }

    #[test]
    fn no_records_means_no_suitable_shelter() {
        assert_eq!(ask(&[], "70"), RecommendOutcome::NoSuitableShelter);
    }
}
