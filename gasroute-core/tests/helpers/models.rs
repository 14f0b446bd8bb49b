use crate::models::{FleetConfig, Location, LocationType, RouteTotals};
use crate::utils::Float;

/// Creates a customer site carrying pickup demand.
pub fn test_customer(id: &str, lat: Float, lng: Float, empty_cylinders: u32) -> Location {
    test_location(id, LocationType::Customer, lat, lng, 0, empty_cylinders)
}

/// Creates a storage depot carrying supply.
pub fn test_depot(id: &str, lat: Float, lng: Float, full_cylinders: u32) -> Location {
    test_location(id, LocationType::Storage, lat, lng, full_cylinders, 0)
}

pub fn test_location(
    id: &str,
    location_type: LocationType,
    lat: Float,
    lng: Float,
    full_cylinders: u32,
    empty_cylinders: u32,
) -> Location {
    Location {
        id: id.to_string(),
        name: format!("site {id}"),
        location_type,
        latitude: lat,
        longitude: lng,
        full_cylinders,
        empty_cylinders,
        open_time: None,
        close_time: None,
        region: None,
        country: None,
    }
}

pub fn test_fleet_config() -> FleetConfig {
    FleetConfig { max_cylinders: 80, cylinder_weight_kg: 22. }
}

pub fn test_totals(distance_km: Float, duration_min: Float, cost: Float, cylinders: u32) -> RouteTotals {
    RouteTotals { distance_km, duration_min, cost, cylinders }
}
