//! Multi-selector record filtering.

use shelter_map_query_models::{ALL_SELECTOR, FilterCriteria};
use shelter_map_shelter_models::ShelterRecord;

/// Returns `true` if `selector` imposes no constraint.
fn is_unconstrained(selector: &[String]) -> bool {
    selector.is_empty() || selector.iter().any(|v| v == ALL_SELECTOR)
}

fn accepts(selector: &[String], value: Option<&str>) -> bool {
    if is_unconstrained(selector) {
        return true;
    }
    value.is_some_and(|value| selector.iter().any(|v| v == value))
}

/// Returns `true` if `record` passes every selector in `criteria`.
#[must_use]
pub fn matches(record: &ShelterRecord, criteria: &FilterCriteria) -> bool {
    let classes = &record.classes;
    accepts(
        &criteria.facility_types,
        record.shelter.facility_type_2.as_deref(),
    ) && accepts(&criteria.area_classes, Some(classes.area.as_ref()))
        && accepts(&criteria.capacity_classes, Some(classes.capacity.as_ref()))
        && accepts(&criteria.fan, Some(classes.fan.as_ref()))
        && accepts(&criteria.ac, Some(classes.ac.as_ref()))
        && accepts(&criteria.districts, Some(classes.district.as_ref()))
}

/// Keeps the records that pass every selector, preserving input order.
#[must_use]
pub fn filter_records<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a ShelterRecord>
where
    I: IntoIterator<Item = &'a ShelterRecord>,
{
    let filtered: Vec<&ShelterRecord> = records
        .into_iter()
        .filter(|record| matches(record, criteria))
        .collect();
    log::debug!("{} shelters passed the filter", filtered.len());
    filtered
}

#[cfg(test)]
mod tests {
    use shelter_map_shelter_models::{
        AreaClass, CapacityClass, District, Presence, Shelter, ShelterClasses,
    };

    use super::*;

    fn record(
        name: &str,
        facility_type_2: Option<&str>,
        area: AreaClass,
        fan: Presence,
        district: District,
    ) -> ShelterRecord {
        ShelterRecord {
            shelter: Shelter {
                name: name.to_string(),
                facility_type_2: facility_type_2.map(str::to_string),
                ..Shelter::default()
            },
            classes: ShelterClasses {
                area,
                capacity: CapacityClass::Medium,
                fan,
                ac: Presence::Present,
                district,
            },
        }
    }

    fn fixture() -> Vec<ShelterRecord> {
        vec![
            record("a", Some("경로당"), AreaClass::Small, Presence::Present, District::Jung),
            record("b", Some("주민센터"), AreaClass::Large, Presence::Absent, District::Jongno),
            record("c", None, AreaClass::Unknown, Presence::Present, District::Other),
            record("d", Some("경로당"), AreaClass::Medium, Presence::Absent, District::Jung),
        ]
    }

    fn names(records: &[&ShelterRecord]) -> Vec<String> {
        records.iter().map(|r| r.name().to_string()).collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn empty_criteria_keep_everything() {
        let records = fixture();
        let filtered = filter_records(&records, &FilterCriteria::unrestricted());
        assert_eq!(names(&filtered), ["a", "b", "c", "d"]);
    }

    #[test]
    fn all_selector_is_a_wildcard_even_with_other_values() {
        let records = fixture();
        let criteria = FilterCriteria {
            districts: strings(&["종로구", ALL_SELECTOR]),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_records(&records, &criteria).len(), records.len());
    }

    #[test]
    fn selectors_are_anded() {
        let records = fixture();
        let criteria = FilterCriteria {
            facility_types: strings(&["경로당"]),
            fan: strings(&["없음"]),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_records(&records, &criteria)), ["d"]);
    }

    #[test]
    fn selector_accepts_any_listed_value() {
        let records = fixture();
        let criteria = FilterCriteria {
            area_classes: strings(&["작음", "큼"]),
            ..FilterCriteria::default()
        };
        assert_eq!(names(&filter_records(&records, &criteria)), ["a", "b"]);
    }

    #[test]
    fn missing_facility_type_never_matches_a_constraint() {
        let records = fixture();
        let criteria = FilterCriteria {
            facility_types: strings(&["경로당", "주민센터"]),
            ..FilterCriteria::default()
        };
        assert!(!names(&filter_records(&records, &criteria)).contains(&"c".to_string()));
    }

    #[test]
    fn filtering_is_order_independent() {
        let records = fixture();
        let criteria = FilterCriteria {
            facility_types: strings(&["경로당"]),
            districts: strings(&["중구"]),
            area_classes: strings(&["보통", "작음"]),
            ..FilterCriteria::default()
        };

        let once = filter_records(&records, &criteria);

        // Applying each selector on its own, in reverse, gives the same set.
        let by_area = FilterCriteria {
            area_classes: criteria.area_classes.clone(),
            ..FilterCriteria::default()
        };
        let by_district = FilterCriteria {
            districts: criteria.districts.clone(),
            ..FilterCriteria::default()
        };
        let by_type = FilterCriteria {
            facility_types: criteria.facility_types.clone(),
            ..FilterCriteria::default()
        };
        let step = filter_records(&records, &by_area);
        let step = filter_records(step, &by_district);
        let chained = filter_records(step, &by_type);

        assert_eq!(names(&once), names(&chained));
        assert_eq!(names(&once), ["a", "d"]);
    }
}
