//! Greedy nearest neighbor stop ordering weighted by load, traffic and fuel preferences.

#[cfg(test)]
#[path = "../../tests/unit/construction/ordering_test.rs"]
mod ordering_test;

use crate::algorithms::geo;
use crate::models::{Location, OptimizationParams};
use crate::utils::{compare_floats, Float};
use std::cmp::Ordering;

/// Empty cylinder count at which a customer reaches full pickup priority.
const FULL_PRIORITY_CYLINDERS: Float = 50.;

/// Orders intermediate stops between a pinned start and end using a greedy nearest
/// neighbor pass: from the current location every unvisited candidate is scored and the
/// cheapest one is visited next. Ties keep the input order.
///
/// This is a deliberate approximation: no 2-opt or exhaustive search happens here, and a
/// better optimizer should replace this function behind the same signature rather than
/// bolt passes on top.
pub fn order_stops(
    start: &Location,
    end: &Location,
    intermediates: &[Location],
    params: &OptimizationParams,
) -> Vec<Location> {
    let mut ordered = Vec::with_capacity(intermediates.len() + 2);
    ordered.push(start.clone());

    if intermediates.len() < 2 {
        ordered.extend(intermediates.iter().cloned());
        ordered.push(end.clone());
        return ordered;
    }

    let mut remaining: Vec<Option<&Location>> = intermediates.iter().map(Some).collect();
    let mut current = start.clone();

    for _ in 0..intermediates.len() {
        let next_idx = remaining
            .iter()
            .enumerate()
            .filter_map(|(idx, candidate)| candidate.map(|candidate| (idx, candidate)))
            .map(|(idx, candidate)| (idx, score_candidate(&current, candidate, params)))
            .min_by(|(_, left), (_, right)| match compare_floats(*left, *right) {
                // first seen wins on equal score, keeping the pass stable
                Ordering::Equal => Ordering::Less,
                ordering => ordering,
            })
            .map(|(idx, _)| idx)
            .expect("remaining candidates cannot be empty");

        let next = remaining[next_idx].take().expect("candidate taken twice");
        current = next.clone();
        ordered.push(next.clone());
    }

    ordered.push(end.clone());

    ordered
}

/// Scores a candidate stop from the current position, lower is better.
fn score_candidate(current: &Location, candidate: &Location, params: &OptimizationParams) -> Float {
    let distance = geo::distance_km(
        current.latitude,
        current.longitude,
        candidate.latitude,
        candidate.longitude,
    );

    distance * location_factor(candidate, params) * traffic_factor(params) * fuel_factor(params)
}

/// Gets the per candidate weighting in [0.5, 1.5]: stops holding many empties are worth
/// visiting sooner, and with fuel priority on, high latitude stops (a hilliness proxy)
/// are pushed later.
fn location_factor(candidate: &Location, params: &OptimizationParams) -> Float {
    let pickup_pull =
        0.2 * (candidate.empty_cylinders as Float).min(FULL_PRIORITY_CYLINDERS) / FULL_PRIORITY_CYLINDERS;

    let hill_push = if params.prioritize_fuel {
        0.1 * (candidate.latitude.abs() / 90.).min(1.)
    } else {
        0.
    };

    (1.0 - pickup_pull + hill_push).clamp(0.5, 1.5)
}

fn traffic_factor(params: &OptimizationParams) -> Float {
    match (params.avoid_traffic, params.use_real_time_data) {
        (true, true) => 0.7,
        (true, false) => 0.85,
        _ => 1.0,
    }
}

fn fuel_factor(params: &OptimizationParams) -> Float {
    if params.prioritize_fuel {
        0.7
    } else {
        1.0
    }
}
