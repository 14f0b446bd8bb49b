//! Aggregates an ordered stop list into distance, duration, fuel and cost figures.

#[cfg(test)]
#[path = "../../tests/unit/construction/estimation_test.rs"]
mod estimation_test;

use crate::construction::traffic::{current_condition, segment_straights};
use crate::construction::weight;
use crate::models::{
    CostEstimate, FleetConfig, Location, OptimizationParams, Route, RouteStatus, RouteStop,
    RouteTotals, TrafficCondition,
};
use crate::utils::{round_to, Environment, Float};

/// Average minutes per kilometer without live traffic data.
const BASE_MIN_PER_KM: Float = 1.5;

/// Average fuel burn, liters per 100 km.
const FUEL_L_PER_100KM: Float = 12.;

/// Extra fuel burn per 100 kg of payload, fraction.
const WEIGHT_FUEL_PENALTY: Float = 0.02;

/// Maintenance cost per kilometer.
const MAINTENANCE_PER_KM: Float = 0.85;

/// Duration reported for degenerate routes, minutes.
const MIN_DURATION_MIN: Float = 15.;

/// A derived per segment figure set, one entry per stop after the first.
#[derive(Clone, Debug)]
pub struct SegmentEstimate {
    /// Corrected road distance of the segment in kilometers.
    pub distance_km: Float,
    /// Segment travel time in minutes.
    pub duration_min: Float,
    /// Segment fuel cost, two decimals.
    pub fuel_cost: Float,
}

/// A full route estimate: per segment breakdown plus the aggregate cost figures.
#[derive(Clone, Debug)]
pub struct RouteEstimate {
    /// Per segment figures in visiting order.
    pub segments: Vec<SegmentEstimate>,
    /// Aggregate cost estimate.
    pub cost: CostEstimate,
}

/// Gets the road curvature correction for a straight line segment length. Short hops are
/// assumed the most circuitous, so the factor shrinks as segments grow.
pub fn curvature_factor(straight_km: Float) -> Float {
    match straight_km {
        d if d <= 5. => 1.3,
        d if d <= 20. => 1.25,
        _ => 1.15,
    }
}

/// Gets the duration of a distance under the flat speed model, minutes.
pub fn base_duration_min(distance_km: Float) -> Float {
    distance_km * BASE_MIN_PER_KM
}

/// Estimates the given visiting order: curvature corrected distance, duration, fuel burn
/// and operating cost, optionally adjusted by live traffic data.
///
/// The estimate is a pure derivation of its arguments and is meant to be recomputed on
/// every stop list or parameter change, never cached.
pub fn estimate_route(
    locations: &[Location],
    params: &OptimizationParams,
    fuel_cost_per_liter: Float,
    config: &FleetConfig,
    environment: &Environment,
) -> RouteEstimate {
    let total_weight_kg = weight::total_weight(locations, config);

    if locations.len() < 2 {
        return degenerate_estimate(total_weight_kg, environment);
    }

    let straights = segment_straights(locations);
    let corrected =
        straights.iter().map(|&straight| straight * curvature_factor(straight)).collect::<Vec<_>>();

    // live data widens or narrows both axes around the flat model
    let (distance_multiplier, duration_multiplier, traffic_conditions) = if params.use_real_time_data {
        let distance_multiplier = if params.optimize_for_distance { 0.9 } else { 1.05 };
        let (duration_multiplier, traffic_conditions) = real_time_duration_factor(environment);
        (distance_multiplier, duration_multiplier, traffic_conditions)
    } else {
        (1., 1., current_condition(environment.clock.as_ref()))
    };

    let fuel_multiplier = if params.prioritize_fuel { 0.9 } else { 1.0 };
    let weight_penalty = 1. + total_weight_kg / 100. * WEIGHT_FUEL_PENALTY;

    let mut segments = Vec::with_capacity(corrected.len());
    let mut distance_km = 0.;
    let mut duration_min = 0.;

    for segment_km in corrected {
        let segment_km = segment_km * distance_multiplier;
        let segment_min = base_duration_min(segment_km) * duration_multiplier;
        let segment_fuel_l = segment_km * FUEL_L_PER_100KM / 100. * weight_penalty * fuel_multiplier;

        distance_km += segment_km;
        duration_min += segment_min;

        segments.push(SegmentEstimate {
            distance_km: round_to(segment_km, 1),
            duration_min: round_to(segment_min, 1),
            fuel_cost: round_to(segment_fuel_l * fuel_cost_per_liter, 2),
        });
    }

    let fuel_consumption_l = distance_km * FUEL_L_PER_100KM / 100. * weight_penalty * fuel_multiplier;
    let fuel_cost = round_to(fuel_consumption_l * fuel_cost_per_liter, 2);
    let maintenance_cost = round_to(distance_km * MAINTENANCE_PER_KM, 2);

    let cost = CostEstimate {
        distance_km: round_to(distance_km, 1),
        duration_min: duration_min.max(MIN_DURATION_MIN).round() as i64,
        fuel_consumption_l: round_to(fuel_consumption_l, 2),
        fuel_cost,
        maintenance_cost,
        total_cost: round_to(fuel_cost + maintenance_cost, 2),
        traffic_conditions,
        total_weight_kg: total_weight_kg.round() as i64,
    };

    RouteEstimate { segments, cost }
}

/// Assembles a scheduled route from the ordered stops and their estimate: one stop per
/// location with its inbound segment figures, plus the aggregate totals.
pub fn build_route(locations: &[Location], estimate: &RouteEstimate) -> Route {
    let stops = locations
        .iter()
        .enumerate()
        .map(|(sequence, location)| {
            // the first stop has no inbound segment
            let segment = sequence.checked_sub(1).and_then(|idx| estimate.segments.get(idx));

            RouteStop {
                location: location.clone(),
                sequence,
                distance_km: segment.map(|s| s.distance_km).unwrap_or_default(),
                duration_min: segment.map(|s| s.duration_min).unwrap_or_default(),
                fuel_cost: segment.map(|s| s.fuel_cost).unwrap_or_default(),
            }
        })
        .collect();

    Route {
        stops,
        totals: RouteTotals {
            distance_km: estimate.cost.distance_km,
            duration_min: estimate.cost.duration_min as Float,
            cost: estimate.cost.total_cost,
            cylinders: locations.iter().map(Location::handled_cylinders).sum(),
        },
        status: RouteStatus::Scheduled,
    }
}

/// Zero or one stop: nothing to drive, but the caller still gets a well formed estimate
/// instead of a division by zero.
fn degenerate_estimate(total_weight_kg: Float, environment: &Environment) -> RouteEstimate {
    RouteEstimate {
        segments: vec![],
        cost: CostEstimate {
            distance_km: 0.,
            duration_min: MIN_DURATION_MIN as i64,
            fuel_consumption_l: 0.,
            fuel_cost: 0.,
            maintenance_cost: 0.,
            total_cost: 0.,
            traffic_conditions: current_condition(environment.clock.as_ref()),
            total_weight_kg: total_weight_kg.round() as i64,
        },
    }
}

/// Samples the live duration spread for the current hour and names the matching condition.
fn real_time_duration_factor(environment: &Environment) -> (Float, TrafficCondition) {
    let hour = environment.clock.hour();

    let (min, max, condition) = match hour {
        7..=9 | 16..=18 => (1.3, 1.5, TrafficCondition::Heavy),
        10..=15 | 19..=20 => (1.0, 1.2, TrafficCondition::Moderate),
        _ => (0.8, 0.9, TrafficCondition::Light),
    };

    (environment.random.uniform_real(min, max), condition)
}
