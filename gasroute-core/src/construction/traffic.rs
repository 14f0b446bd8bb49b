//! Time, region and road type based speed and congestion simulation.

#[cfg(test)]
#[path = "../../tests/unit/construction/traffic_test.rs"]
mod traffic_test;

use crate::algorithms::geo;
use crate::models::{Location, TrafficCondition};
use crate::utils::{Clock, Environment, Float};
use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

/// Hourly congestion factors, midnight first. Morning and evening rush carry the peaks.
const HOURLY_FACTORS: [Float; 24] = [
    0.7, 0.7, 0.7, 0.7, 0.7, 0.7, // night
    0.9, 1.4, 1.5, 1.4, // morning ramp up and rush
    1.1, 1.0, 1.0, 1.0, 1.0, 1.1, // daytime
    1.4, 1.5, 1.4, // evening rush
    1.1, 1.0, 0.9, 0.7, 0.7, // wind down
];

/// Day of week congestion factors, Monday first.
const DAY_FACTORS: [Float; 7] = [1.1, 1.0, 1.0, 1.05, 1.2, 0.9, 0.8];

/// Fixed service time spent at every stop, minutes.
const SERVICE_TIME_MIN: Float = 8.;

/// Minutes lost per intersection.
const INTERSECTION_DELAY_MIN: Float = 0.5;

lazy_static! {
    /// Region factors used when the model is built without explicit overrides.
    static ref DEFAULT_REGION_FACTORS: FxHashMap<&'static str, Float> = {
        let mut factors = FxHashMap::default();
        factors.insert("Gauteng", 1.15);
        factors.insert("Western Cape", 1.1);
        factors.insert("KwaZulu-Natal", 1.05);
        factors.insert("Eastern Cape", 0.95);
        factors.insert("Free State", 0.9);
        factors
    };
}

/// A road class guessed from the straight line length of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadType {
    /// Long haul segments, 50 km and up.
    Highway,
    /// Regional connections, 15 km and up.
    MajorRoad,
    /// Country side roads, 8 km and up.
    Rural,
    /// Town edge segments, 5 km and up.
    Suburban,
    /// Everything shorter: inner city driving.
    UrbanRoad,
}

/// Driving characteristics of a road class.
#[derive(Clone, Copy, Debug)]
pub struct RoadProfile {
    /// Multiplier inflating straight line distance to an approximate road path.
    pub distance_factor: Float,
    /// Free flow speed in km/h.
    pub base_speed_kmh: Float,
    /// How strongly congestion eats into the base speed, [0, 1].
    pub traffic_sensitivity: Float,
    /// Expected intersections per kilometer.
    pub intersections_per_km: Float,
}

impl RoadType {
    /// Buckets a straight line segment distance into a road class.
    pub fn classify(straight_km: Float) -> Self {
        match straight_km {
            d if d >= 50. => RoadType::Highway,
            d if d >= 15. => RoadType::MajorRoad,
            d if d >= 8. => RoadType::Rural,
            d if d >= 5. => RoadType::Suburban,
            _ => RoadType::UrbanRoad,
        }
    }

    /// Returns the driving characteristics of the class.
    pub fn profile(&self) -> RoadProfile {
        match self {
            RoadType::Highway => RoadProfile {
                distance_factor: 1.1,
                base_speed_kmh: 95.,
                traffic_sensitivity: 0.4,
                intersections_per_km: 0.1,
            },
            RoadType::MajorRoad => RoadProfile {
                distance_factor: 1.2,
                base_speed_kmh: 75.,
                traffic_sensitivity: 0.6,
                intersections_per_km: 0.4,
            },
            RoadType::Rural => RoadProfile {
                distance_factor: 1.3,
                base_speed_kmh: 60.,
                traffic_sensitivity: 0.5,
                intersections_per_km: 0.7,
            },
            RoadType::Suburban => RoadProfile {
                distance_factor: 1.35,
                base_speed_kmh: 50.,
                traffic_sensitivity: 0.8,
                intersections_per_km: 1.2,
            },
            RoadType::UrbanRoad => RoadProfile {
                distance_factor: 1.4,
                base_speed_kmh: 35.,
                traffic_sensitivity: 1.0,
                intersections_per_km: 2.0,
            },
        }
    }
}

/// A single segment travel estimate.
#[derive(Clone, Debug)]
pub struct SegmentTravel {
    /// Guessed road class.
    pub road_type: RoadType,
    /// Approximate road distance in kilometers.
    pub distance_km: Float,
    /// Travel time in minutes, intersection delays included.
    pub duration_min: Float,
}

/// A whole trip travel estimate.
#[derive(Clone, Debug, Default)]
pub struct TripTravel {
    /// Road distance in kilometers over all segments.
    pub distance_km: Float,
    /// Driving plus service time in minutes.
    pub duration_min: Float,
}

/// Simulates travel speed from time of day, weekday, region and road class.
pub struct TrafficModel {
    region_factors: FxHashMap<String, Float>,
}

impl Default for TrafficModel {
    fn default() -> Self {
        Self {
            region_factors: DEFAULT_REGION_FACTORS
                .iter()
                .map(|(&region, &factor)| (region.to_string(), factor))
                .collect(),
        }
    }
}

impl TrafficModel {
    /// Creates a model with explicit per region factors, unknown regions default to 1.0.
    pub fn new(region_factors: FxHashMap<String, Float>) -> Self {
        Self { region_factors }
    }

    /// Gets the composite congestion multiplier for an hour, weekday and region.
    pub fn multiplier(&self, hour: u8, weekday: u8, region: Option<&str>) -> Float {
        let hour_factor = HOURLY_FACTORS[hour as usize % 24];
        let day_factor = DAY_FACTORS[weekday as usize % 7];
        let region_factor =
            region.and_then(|region| self.region_factors.get(region).copied()).unwrap_or(1.0);

        hour_factor * day_factor * region_factor
    }

    /// Estimates travel over a single segment of known straight line length.
    pub fn estimate_segment_distance(
        &self,
        straight_km: Float,
        region: Option<&str>,
        environment: &Environment,
    ) -> SegmentTravel {
        let road_type = RoadType::classify(straight_km);
        let profile = road_type.profile();

        let jitter = environment.random.uniform_real(0.9, 1.1);
        let distance_km = straight_km * profile.distance_factor * jitter;

        let multiplier = self.multiplier(
            environment.clock.hour(),
            environment.clock.weekday(),
            region,
        );
        let adjusted_speed =
            profile.base_speed_kmh / (1. + (multiplier - 1.) * profile.traffic_sensitivity);

        let driving_min = distance_km / adjusted_speed * 60.;
        let intersection_min = distance_km * profile.intersections_per_km * INTERSECTION_DELAY_MIN;

        SegmentTravel { road_type, distance_km, duration_min: driving_min + intersection_min }
    }

    /// Estimates travel between two sites.
    pub fn estimate_segment(
        &self,
        from: &Location,
        to: &Location,
        environment: &Environment,
    ) -> SegmentTravel {
        let straight_km = geo::distance_km(from.latitude, from.longitude, to.latitude, to.longitude);

        self.estimate_segment_distance(straight_km, to.region.as_deref(), environment)
    }

    /// Estimates a whole trip over the visiting order: segment travel summed up plus a fixed
    /// service time per stop. Segments with unusable coordinates take the mean straight line
    /// length of the valid ones instead of poisoning the totals.
    pub fn estimate_trip(&self, locations: &[Location], environment: &Environment) -> TripTravel {
        if locations.len() < 2 {
            return TripTravel::default();
        }

        let straights = segment_straights(locations);

        let mut trip = TripTravel::default();
        for (straight_km, to) in straights.iter().zip(locations.iter().skip(1)) {
            let segment =
                self.estimate_segment_distance(*straight_km, to.region.as_deref(), environment);
            trip.distance_km += segment.distance_km;
            trip.duration_min += segment.duration_min;
        }

        trip.duration_min += locations.len() as Float * SERVICE_TIME_MIN;

        trip
    }
}

/// Gets the coarse traffic condition for the current hour.
pub fn current_condition(clock: &dyn Clock) -> TrafficCondition {
    condition_for_hour(clock.hour())
}

/// Gets the coarse traffic condition for the given hour of day.
pub fn condition_for_hour(hour: u8) -> TrafficCondition {
    match hour {
        7..=9 | 16..=18 => TrafficCondition::Heavy,
        h if h >= 22 || h <= 5 => TrafficCondition::Light,
        _ => TrafficCondition::Moderate,
    }
}

/// Computes straight line lengths of consecutive segments, replacing segments with unusable
/// coordinates by the mean of the valid ones.
pub(crate) fn segment_straights(locations: &[Location]) -> Vec<Float> {
    let raw = locations
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            if from.has_valid_coordinates() && to.has_valid_coordinates() {
                Some(geo::distance_km(from.latitude, from.longitude, to.latitude, to.longitude))
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    let valid = raw.iter().flatten().copied().collect::<Vec<_>>();
    let fallback = if valid.is_empty() { 0. } else { valid.iter().sum::<Float>() / valid.len() as Float };

    raw.into_iter().map(|straight| straight.unwrap_or(fallback)).collect()
}
