use crate::models::problem::Location;
use crate::utils::Float;
use std::fmt;

/// A coarse traffic state reported next to an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrafficCondition {
    /// Rush hour congestion.
    Heavy,
    /// Regular daytime load.
    Moderate,
    /// Night and early morning.
    Light,
}

impl TrafficCondition {
    /// Returns a lowercase wire name of the condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficCondition::Heavy => "heavy",
            TrafficCondition::Moderate => "moderate",
            TrafficCondition::Light => "light",
        }
    }
}

impl fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route lifecycle state. Transitions are owned by the backing store, the engine only
/// carries the value through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteStatus {
    /// Planned but not started.
    Scheduled,
    /// Truck is on the road.
    InProgress,
    /// All stops served.
    Completed,
    /// Abandoned route.
    Cancelled,
}

/// A single visit within a planned route with its derived segment figures.
#[derive(Clone, Debug)]
pub struct RouteStop {
    /// A visited site.
    pub location: Location,
    /// Zero based position in the visiting order.
    pub sequence: usize,
    /// Road distance from the previous stop in kilometers.
    pub distance_km: Float,
    /// Travel time from the previous stop in minutes.
    pub duration_min: Float,
    /// Fuel cost of the segment from the previous stop.
    pub fuel_cost: Float,
}

/// Aggregate figures of a route, also the shape of a historical record used for
/// fleet wide comparisons.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteTotals {
    /// Total distance in kilometers.
    pub distance_km: Float,
    /// Total duration in minutes.
    pub duration_min: Float,
    /// Estimated total cost.
    pub cost: Float,
    /// Total amount of cylinders moved.
    pub cylinders: u32,
}

/// An ordered stop list bounded by a fixed start and end location.
#[derive(Clone, Debug)]
pub struct Route {
    /// Ordered stops, start and end included.
    pub stops: Vec<RouteStop>,
    /// Aggregate route figures.
    pub totals: RouteTotals,
    /// Lifecycle state.
    pub status: RouteStatus,
}

/// A cost estimation of an ordered stop list.
#[derive(Clone, Debug)]
pub struct CostEstimate {
    /// Road distance in kilometers, 0.1 km precision.
    pub distance_km: Float,
    /// Duration in whole minutes.
    pub duration_min: i64,
    /// Fuel consumption in liters, 0.01 l precision.
    pub fuel_consumption_l: Float,
    /// Fuel cost, two decimals.
    pub fuel_cost: Float,
    /// Maintenance cost, two decimals.
    pub maintenance_cost: Float,
    /// Fuel plus maintenance.
    pub total_cost: Float,
    /// Traffic state the estimate was made under.
    pub traffic_conditions: TrafficCondition,
    /// Total payload in whole kilograms.
    pub total_weight_kg: i64,
}
