//! Great circle distance math over geographic coordinates.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geo_test.rs"]
mod geo_test;

use crate::utils::Float;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: Float = 6371.;

/// Gets distance between two points in kilometers using haversine formula.
pub fn distance_km(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> Float {
    let d_lat = degree_rad(lat2 - lat1);
    let d_lon = degree_rad(lon2 - lon1);

    let lat1 = degree_rad(lat1);
    let lat2 = degree_rad(lat2);

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lon / 2.).sin() * (d_lon / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Checks whether the pair is usable for distance math: finite, inside valid ranges and
/// not the (0, 0) null island placeholder which backend records use for a missing geocode.
pub fn is_valid_coordinate(lat: Float, lon: Float) -> bool {
    if !lat.is_finite() || !lon.is_finite() {
        return false;
    }

    if lat == 0. && lon == 0. {
        return false;
    }

    lat.abs() <= 90. && lon.abs() <= 180.
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
