use crate::model::*;
use gasroute_core::prelude::*;
use gasroute_core::utils::RandomGen;
use std::sync::Arc;
use time::OffsetDateTime;

/// A clock pinned to Monday at the given hour.
pub struct FixedClock {
    now: OffsetDateTime,
}

impl FixedClock {
    pub fn at_hour(hour: u8) -> Self {
        // Monday 2024-01-01 00:00 UTC
        let timestamp = 1_704_067_200 + hour as i64 * 3_600;
        Self { now: OffsetDateTime::from_unix_timestamp(timestamp).unwrap() }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.now
    }
}

/// A random stub which always answers the lower bound.
pub struct MinRandom {}

impl Random for MinRandom {
    fn uniform_int(&self, min: i32, _max: i32) -> i32 {
        min
    }

    fn uniform_real(&self, min: f64, _max: f64) -> f64 {
        min
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::with_seed(0)
    }
}

/// Creates a deterministic environment pinned to Monday at the given hour.
pub fn test_environment_at(hour: u8) -> Environment {
    Environment::new(Arc::new(FixedClock::at_hour(hour)), Arc::new(MinRandom {}), Arc::new(|_| {}))
}

pub fn test_api_location(id: &str, location_type: ApiLocationType, lat: f64, lng: f64) -> ApiLocation {
    ApiLocation {
        id: id.to_string(),
        name: format!("site {id}"),
        location_type,
        latitude: lat,
        longitude: lng,
        full_cylinders: if matches!(location_type, ApiLocationType::Customer) { 0 } else { 10 },
        empty_cylinders: if matches!(location_type, ApiLocationType::Customer) { 5 } else { 0 },
        open_time: None,
        close_time: None,
        region: None,
        country: None,
    }
}

/// Creates a three stop request around Johannesburg with default settings.
pub fn test_plan_request() -> PlanRequest {
    PlanRequest {
        start: test_api_location("depot", ApiLocationType::Storage, -26.0, 28.0),
        end: test_api_location("return", ApiLocationType::Distribution, -26.05, 28.02),
        stops: vec![
            test_api_location("c1", ApiLocationType::Customer, -26.2, 28.1),
            test_api_location("c2", ApiLocationType::Customer, -26.1, 28.05),
            test_api_location("c3", ApiLocationType::Customer, -26.3, 28.2),
        ],
        params: ApiOptimizationParams::default(),
        config: PlanConfig::default(),
        date: None,
    }
}

pub fn test_api_route(id: &str, distance: f64, duration: f64, cost: f64, cylinders: u32) -> ApiRoute {
    ApiRoute {
        id: id.to_string(),
        name: format!("route {id}"),
        date: None,
        total_distance: distance,
        total_duration: duration,
        estimated_cost: cost,
        total_cylinders: cylinders,
        status: ApiRouteStatus::Completed,
    }
}
