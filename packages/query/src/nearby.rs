//! Nearby shelter listing.

use shelter_map_query_models::{FilterCriteria, NearbyOutcome, NearbyShelter};
use shelter_map_shelter_models::ShelterRecord;
use shelter_map_spatial::within_radius;

use crate::config::QueryConfig;
use crate::display::{directions_url, shelter_display};
use crate::filter::filter_records;
use crate::location::require_location;
use crate::status::operating_status;

/// Lists shelters passing `criteria` within the configured radius of the
/// query point, nearest first.
#[must_use]
pub fn nearby(
    records: &[ShelterRecord],
    latitude: Option<f64>,
    longitude: Option<f64>,
    criteria: &FilterCriteria,
    config: &QueryConfig,
) -> NearbyOutcome {
    let Some((latitude, longitude)) = require_location(latitude, longitude) else {
        return NearbyOutcome::NoLocation;
    };

    let candidates = filter_records(records, criteria);
    let ranked = within_radius(candidates, latitude, longitude, config.nearby_radius_km);

    log::debug!(
        "{} shelters within {} km of ({latitude}, {longitude})",
        ranked.len(),
        config.nearby_radius_km
    );

    if ranked.is_empty() {
        return NearbyOutcome::NoMatches;
    }

    let shelters = ranked
        .into_iter()
        .filter_map(|ranked| {
            let destination = ranked.record.coordinates()?;
            Some(NearbyShelter {
                status: operating_status(&ranked.record.shelter, config.hot_temperature_c),
                display: shelter_display(ranked.record),
                directions_url: directions_url(
                    (latitude, longitude),
                    ranked.record.name(),
                    destination,
                ),
                distance_km: ranked.distance_km,
                record: ranked.record.clone(),
            })
        })
        .collect();

    NearbyOutcome::Found { shelters }
}

#[cfg(test)]
mod tests {
    use shelter_map_query_models::ALL_SELECTOR;
    use shelter_map_shelter_models::{
        AreaClass, CapacityClass, District, OperatingStatus, Presence, Shelter, ShelterClasses,
    };
    use shelter_map_spatial::EARTH_RADIUS_KM;

    use super::*;

    const ORIGIN: (f64, f64) = (37.5665, 126.9780);

    /// Latitude `km` kilometres due north of the origin.
    fn north_km(km: f64) -> f64 {
        ORIGIN.0 + (km / EARTH_RADIUS_KM).to_degrees()
    }

    fn record(name: &str, km: f64, district: District) -> ShelterRecord {
        ShelterRecord {
            shelter: Shelter {
                name: name.to_string(),
                latitude: Some(north_km(km)),
                longitude: Some(ORIGIN.1),
                ..Shelter::default()
            },
            classes: ShelterClasses {
                area: AreaClass::Unknown,
                capacity: CapacityClass::Unknown,
                fan: Presence::Absent,
                ac: Presence::Absent,
                district,
            },
        }
    }

    fn distances(outcome: &NearbyOutcome) -> Vec<f64> {
        outcome
            .shelters()
            .iter()
            .map(|s| (s.distance_km * 10.0).round() / 10.0)
            .collect()
    }

    #[test]
    fn keeps_shelters_within_one_kilometre_sorted() {
        let records = [
            record("far", 1.5, District::Jung),
            record("middle", 0.9, District::Jung),
            record("near", 0.5, District::Jung),
        ];
        let outcome = nearby(
            &records,
            Some(ORIGIN.0),
            Some(ORIGIN.1),
            &FilterCriteria::unrestricted(),
            &QueryConfig::default(),
        );
        assert_eq!(distances(&outcome), [0.5, 0.9]);
        assert_eq!(outcome.shelters()[0].record.name(), "near");
    }

    #[test]
    fn missing_or_zero_location_is_rejected() {
        let records = [record("near", 0.5, District::Jung)];
        let config = QueryConfig::default();
        let criteria = FilterCriteria::unrestricted();
        assert_eq!(
            nearby(&records, None, Some(ORIGIN.1), &criteria, &config),
            NearbyOutcome::NoLocation
        );
        assert_eq!(
            nearby(&records, Some(0.0), Some(ORIGIN.1), &criteria, &config),
            NearbyOutcome::NoLocation
        );
    }

    #[test]
    fn filtered_out_shelters_yield_no_matches() {
        let records = [record("near", 0.5, District::Jung)];
        let criteria = FilterCriteria {
            districts: vec!["종로구".to_string()],
            ..FilterCriteria::default()
        };
        let outcome = nearby(
            &records,
            Some(ORIGIN.0),
            Some(ORIGIN.1),
            &criteria,
            &QueryConfig::default(),
        );
        assert_eq!(outcome, NearbyOutcome::NoMatches);
        assert_ne!(outcome.message(), NearbyOutcome::NoLocation.message());
    }

    #[test]
    fn entries_carry_status_display_and_directions() {
        let mut hot = record("hot", 0.2, District::Jung);
        hot.shelter.current_temperature = Some(31.0);
        hot.shelter.current_occupancy = Some(0);
        let records = [hot];

        let criteria = FilterCriteria {
            districts: vec![ALL_SELECTOR.to_string()],
            ..FilterCriteria::default()
        };
        let outcome = nearby(
            &records,
            Some(ORIGIN.0),
            Some(ORIGIN.1),
            &criteria,
            &QueryConfig::default(),
        );
        let entry = &outcome.shelters()[0];
        assert_eq!(entry.status, OperatingStatus::NotOperating);
        assert_eq!(entry.display.temperature, "31.0°C");
        assert_eq!(entry.display.occupancy, "0명");
        assert!(
            entry
                .directions_url
                .starts_with("https://map.kakao.com/link/from/현재위치,37.5665,126.978/to/hot,")
        );
    }
}
