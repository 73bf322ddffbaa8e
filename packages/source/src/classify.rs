//! Derived attribute classification.
//!
//! Maps raw numeric fields onto the fixed buckets in
//! [`shelter_map_shelter_models`] and pulls the district out of the road
//! address. Every function is total: missing input maps to the sentinel
//! "unknown" bucket.

use shelter_map_shelter_models::{
    AreaClass, CapacityClass, District, Presence, Shelter, ShelterClasses, ShelterRecord,
};

/// Buckets a floor area in m². Each threshold is the exclusive upper
/// bound of the bucket below it.
#[must_use]
pub fn classify_area(area_m2: Option<f64>) -> AreaClass {
    let Some(area) = area_m2 else {
        return AreaClass::Unknown;
    };
    if area < 50.0 {
        AreaClass::VerySmall
    } else if area < 100.0 {
        AreaClass::Small
    } else if area < 200.0 {
        AreaClass::Medium
    } else if area < 500.0 {
        AreaClass::Large
    } else {
        AreaClass::VeryLarge
    }
}

/// Buckets a person capacity.
#[must_use]
pub const fn classify_capacity(capacity: Option<u32>) -> CapacityClass {
    match capacity {
        None => CapacityClass::Unknown,
        Some(0..=9) => CapacityClass::VeryFew,
        Some(10..=29) => CapacityClass::Few,
        Some(30..=49) => CapacityClass::Medium,
        Some(50..=99) => CapacityClass::Many,
        Some(_) => CapacityClass::VeryMany,
    }
}

/// Missing and zero counts both mean the equipment is absent.
#[must_use]
pub const fn classify_presence(count: Option<u32>) -> Presence {
    match count {
        Some(n) if n > 0 => Presence::Present,
        _ => Presence::Absent,
    }
}

/// Finds the first of the 25 district names contained in the address.
#[must_use]
pub fn extract_district(road_address: Option<&str>) -> District {
    let Some(address) = road_address else {
        return District::Unknown;
    };
    District::SEOUL
        .iter()
        .copied()
        .find(|district| address.contains(district.as_ref()))
        .unwrap_or(District::Other)
}

/// Computes every derived class for a shelter.
#[must_use]
pub fn classify(shelter: &Shelter) -> ShelterClasses {
    ShelterClasses {
        area: classify_area(shelter.area_m2),
        capacity: classify_capacity(shelter.capacity),
        fan: classify_presence(shelter.fan_count),
        ac: classify_presence(shelter.ac_count),
        district: extract_district(shelter.road_address.as_deref()),
    }
}

/// Attaches derived classes to a normalized shelter.
#[must_use]
pub fn into_record(shelter: Shelter) -> ShelterRecord {
    let classes = classify(&shelter);
    ShelterRecord { shelter, classes }
}
