#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Great-circle distance and nearest-shelter ranking.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. The dataset is small enough that every lookup is a
//! linear scan followed by a stable sort; no spatial index is built.

pub mod district;

use shelter_map_shelter_models::ShelterRecord;

pub use district::infer_district;

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points given as
/// longitude/latitude degrees.
#[must_use]
pub fn distance_km(lon_a: f64, lat_a: f64, lon_b: f64, lat_b: f64) -> f64 {
    let (lon1, lat1) = (lon_a.to_radians(), lat_a.to_radians());
    let (lon2, lat2) = (lon_b.to_radians(), lat_b.to_radians());

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1.0 for near-antipodal points.
    2.0 * a.sqrt().min(1.0).asin() * EARTH_RADIUS_KM
}

/// A shelter paired with its distance from a query point.
#[derive(Debug, Clone, Copy)]
pub struct RankedShelter<'a> {
    pub record: &'a ShelterRecord,
    pub distance_km: f64,
}

/// Ranks every shelter with coordinates by distance from the query point,
/// nearest first. Equal distances keep their input order.
#[must_use]
pub fn rank_by_distance<'a, I>(records: I, latitude: f64, longitude: f64) -> Vec<RankedShelter<'a>>
where
    I: IntoIterator<Item = &'a ShelterRecord>,
{
    let mut ranked: Vec<RankedShelter<'a>> = records
        .into_iter()
        .filter_map(|record| {
            let (lat, lon) = record.coordinates()?;
            Some(RankedShelter {
                record,
                distance_km: distance_km(longitude, latitude, lon, lat),
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Like [`rank_by_distance`], keeping only shelters within `radius_km`
/// (inclusive).
#[must_use]
pub fn within_radius<'a, I>(
    records: I,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Vec<RankedShelter<'a>>
where
    I: IntoIterator<Item = &'a ShelterRecord>,
{
    let mut ranked = rank_by_distance(records, latitude, longitude);
    ranked.retain(|r| r.distance_km <= radius_km);
    ranked
}
