//! Cylinder payload tracking and capacity enforcement.

#[cfg(test)]
#[path = "../../tests/unit/construction/weight_test.rs"]
mod weight_test;

use crate::models::{FleetConfig, Location};
use crate::utils::Float;
use std::fmt;

/// Gets total cylinder weight over the given stop subset: full cylinders count for supply
/// sites (storage, distribution), empty cylinders for customers.
pub fn total_weight(locations: &[Location], config: &FleetConfig) -> Float {
    locations
        .iter()
        .map(|location| {
            let cylinders = if location.location_type.is_supply() {
                location.full_cylinders
            } else {
                location.empty_cylinders
            };
            cylinders as Float * config.cylinder_weight_kg
        })
        .sum()
}

/// A running payload snapshot after serving one stop.
#[derive(Clone, Debug)]
pub struct WeightProfileEntry {
    /// A served site id.
    pub location_id: String,
    /// Full cylinders at the site.
    pub full_cylinders: u32,
    /// Empty cylinders at the site.
    pub empty_cylinders: u32,
    /// Truck payload in kilograms after the stop.
    pub weight_kg: Float,
}

/// The running truck payload along a route's visiting order.
///
/// Pickups and drop offs change the load mid route, so the peak can occur before the
/// last stop.
#[derive(Clone, Debug, Default)]
pub struct WeightProfile {
    /// Per stop snapshots in visiting order.
    pub entries: Vec<WeightProfileEntry>,
}

impl WeightProfile {
    /// Returns the largest payload reached along the route.
    pub fn peak_weight_kg(&self) -> Float {
        self.entries.iter().map(|entry| entry.weight_kg).fold(0., Float::max)
    }

    /// Checks whether any snapshot breaks the truck capacity.
    pub fn exceeds_capacity(&self, config: &FleetConfig) -> bool {
        self.entries.iter().any(|entry| entry.weight_kg > config.max_weight_kg())
    }
}

/// Builds the running weight profile for the given visiting order.
///
/// Supply sites load their full cylinders, customers hand over their empties and take
/// delivered fulls off the truck. Inconsistent records cannot drive the payload below zero.
pub fn weight_profile(locations: &[Location], config: &FleetConfig) -> WeightProfile {
    let w = config.cylinder_weight_kg;
    let mut running = 0.;

    let entries = locations
        .iter()
        .map(|location| {
            let delta = if location.location_type.is_supply() {
                location.full_cylinders as Float * w
            } else {
                location.empty_cylinders as Float * w - location.full_cylinders as Float * w
            };
            running = (running + delta).max(0.);

            WeightProfileEntry {
                location_id: location.id.clone(),
                full_cylinders: location.full_cylinders,
                empty_cylinders: location.empty_cylinders,
                weight_kg: running,
            }
        })
        .collect();

    WeightProfile { entries }
}

/// Gets how many cylinders can still be loaded on top of the current payload.
pub fn max_addable_cylinders(current_weight_kg: Float, config: &FleetConfig) -> u32 {
    let headroom = config.max_weight_kg() - current_weight_kg;
    if headroom <= 0. {
        return 0;
    }

    (headroom / config.cylinder_weight_kg).floor() as u32
}

/// A capacity violation: the requested load does not fit the truck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// Amount of cylinders requested to load.
    pub requested: u32,
    /// Amount of cylinders which would still fit.
    pub available: u32,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot load {} cylinders, only {} fit", self.requested, self.available)
    }
}

impl std::error::Error for CapacityExceeded {}

/// Tries to load the given amount of cylinders, returning the new payload weight.
///
/// A request past the truck limit is rejected, not clamped: the caller decides whether to
/// split the load or skip the stop.
pub fn try_load_cylinders(
    current_weight_kg: Float,
    cylinders: u32,
    config: &FleetConfig,
) -> Result<Float, CapacityExceeded> {
    let available = max_addable_cylinders(current_weight_kg, config);
    if cylinders > available {
        return Err(CapacityExceeded { requested: cylinders, available });
    }

    Ok(current_weight_kg + cylinders as Float * config.cylinder_weight_kg)
}
