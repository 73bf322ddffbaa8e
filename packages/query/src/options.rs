//! Choices offered for each filter selector.

use std::collections::BTreeSet;

use shelter_map_query_models::{ALL_SELECTOR, FilterOptions};
use shelter_map_shelter_models::{AreaClass, CapacityClass, Presence, ShelterRecord};

fn with_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    std::iter::once(ALL_SELECTOR.to_string())
        .chain(values)
        .collect()
}

fn labels<T: AsRef<str>>(values: &[T]) -> impl Iterator<Item = String> + '_ {
    values.iter().map(|v| v.as_ref().to_string())
}

/// Selector choices for the given records.
///
/// Facility types and districts are the sorted distinct values present in
/// the data; the class and presence lists are fixed.
#[must_use]
pub fn filter_options(records: &[ShelterRecord]) -> FilterOptions {
    let facility_types: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.shelter.facility_type_2.as_deref())
        .collect();
    let districts: BTreeSet<&str> = records.iter().map(|r| r.classes.district.as_ref()).collect();

    FilterOptions {
        facility_types: with_all(facility_types.into_iter().map(str::to_string)),
        area_sizes: with_all(labels(AreaClass::all())),
        capacity_sizes: with_all(labels(CapacityClass::all())),
        fan_options: with_all(labels(Presence::all())),
        ac_options: with_all(labels(Presence::all())),
        districts: with_all(districts.into_iter().map(str::to_string)),
    }
}
