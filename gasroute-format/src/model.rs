//! Serde wire records exchanged with the route repository, UI and analytics layers.

#[cfg(test)]
#[path = "../tests/unit/model_test.rs"]
mod model_test;

use gasroute_core::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A site role on the wire.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ApiLocationType {
    /// A delivery customer.
    Customer,
    /// A storage depot.
    Storage,
    /// A distribution hub.
    Distribution,
}

/// A site record as the backing store serves it.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    /// A unique site id.
    pub id: String,
    /// A human readable site name.
    pub name: String,
    /// A site role.
    #[serde(rename = "type")]
    pub location_type: ApiLocationType,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Amount of full cylinders on site.
    #[serde(default)]
    pub full_cylinders: u32,
    /// Amount of empty cylinders on site.
    #[serde(default)]
    pub empty_cylinders: u32,
    /// Site opening time, e.g. "08:00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    /// Site closing time, e.g. "17:00".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    /// A region used for traffic factors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// A country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A route lifecycle state on the wire.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApiRouteStatus {
    /// Planned but not started.
    Scheduled,
    /// Truck is on the road.
    InProgress,
    /// All stops served.
    Completed,
    /// Abandoned route.
    Cancelled,
}

/// A route record as the backing store serves it, also the shape of a historical record.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoute {
    /// A unique route id.
    pub id: String,
    /// A route display name.
    pub name: String,
    /// A route date in RFC3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Total route distance in kilometers.
    pub total_distance: f64,
    /// Total route duration in minutes.
    pub total_duration: f64,
    /// Estimated route cost.
    pub estimated_cost: f64,
    /// Total cylinders moved.
    pub total_cylinders: u32,
    /// Lifecycle state.
    pub status: ApiRouteStatus,
}

/// Heuristic weighting toggles.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptimizationParams {
    /// Prefer fuel friendly ordering and consumption.
    #[serde(default)]
    pub prioritize_fuel: bool,
    /// Prefer routes which dodge congested segments.
    #[serde(default)]
    pub avoid_traffic: bool,
    /// Use live traffic data adjustments.
    #[serde(default)]
    pub use_real_time_data: bool,
    /// Squeeze total distance at the expense of duration.
    #[serde(default)]
    pub optimize_for_distance: bool,
}

/// User and fleet level configuration, passed by value with every request.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    /// Fuel price per liter, user editable.
    #[serde(default = "default_fuel_cost")]
    pub fuel_cost_per_liter: f64,
    /// Maximum amount of cylinders a truck can carry.
    #[serde(default = "default_max_cylinders")]
    pub max_cylinders: u32,
    /// Weight of a single cylinder in kilograms.
    #[serde(default = "default_cylinder_weight")]
    pub cylinder_weight_kg: f64,
    /// Per region traffic factors, unknown regions default to 1.0.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub region_factors: HashMap<String, f64>,
}

fn default_fuel_cost() -> f64 {
    21.95
}

fn default_max_cylinders() -> u32 {
    80
}

fn default_cylinder_weight() -> f64 {
    22.
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            fuel_cost_per_liter: default_fuel_cost(),
            max_cylinders: default_max_cylinders(),
            cylinder_weight_kg: default_cylinder_weight(),
            region_factors: HashMap::default(),
        }
    }
}

/// A planning request: pinned start and end, stops to order, toggles and configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// A pinned first location.
    pub start: ApiLocation,
    /// A pinned last location.
    pub end: ApiLocation,
    /// Intermediate stops to order.
    pub stops: Vec<ApiLocation>,
    /// Heuristic toggles.
    #[serde(default)]
    pub params: ApiOptimizationParams,
    /// User and fleet configuration.
    #[serde(default)]
    pub config: PlanConfig,
    /// A planned route date in RFC3339.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A visit in the planned order with derived segment figures.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRouteStop {
    /// A visited site id.
    pub id: String,
    /// A visited site name.
    pub name: String,
    /// Zero based position in the visiting order.
    pub sequence: usize,
    /// Road distance from the previous stop in kilometers.
    pub distance_km: f64,
    /// Travel time from the previous stop in minutes.
    pub duration_min: f64,
    /// Fuel cost of the segment from the previous stop.
    pub fuel_cost: f64,
    /// Cylinders handled at the site.
    pub cylinders: u32,
}

/// A running payload snapshot on the wire.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiWeightEntry {
    /// A served site id.
    pub location_id: String,
    /// Full cylinders at the site.
    pub full_cylinders: u32,
    /// Empty cylinders at the site.
    pub empty_cylinders: u32,
    /// Truck payload in kilograms after the stop.
    pub weight_kg: f64,
}

/// Aggregate cost figures on the wire.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCostEstimate {
    /// Road distance in kilometers, 0.1 km precision.
    pub distance: f64,
    /// Duration in whole minutes.
    pub duration: i64,
    /// Fuel consumption in liters, 0.01 l precision.
    pub fuel_consumption: f64,
    /// Fuel cost, two decimals.
    pub fuel_cost: f64,
    /// Maintenance cost, two decimals.
    pub maintenance_cost: f64,
    /// Fuel plus maintenance.
    pub total_cost: f64,
    /// Traffic state the estimate was made under.
    pub traffic_conditions: String,
    /// Total payload in whole kilograms.
    pub total_weight: i64,
}

/// A simulated trip travel summary.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTripTravel {
    /// Simulated road distance in kilometers.
    pub distance_km: f64,
    /// Simulated driving plus service time in minutes.
    pub duration_min: f64,
}

/// Everything the dashboard needs to render a planned route.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Stops in visiting order with segment figures.
    pub ordered_stops: Vec<ApiRouteStop>,
    /// Running payload along the route.
    pub weight_profile: Vec<ApiWeightEntry>,
    /// Aggregate cost estimate.
    pub cost_estimate: ApiCostEstimate,
    /// Coarse traffic state for the route card.
    pub traffic_condition: String,
    /// Simulated travel figures from the traffic model.
    pub trip_travel: ApiTripTravel,
}

/// A precomputed export row for the reporting sink.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    /// A site name.
    pub site_name: String,
    /// Cylinders handled at the site.
    pub cylinders: u32,
    /// Kilometers driven to the site.
    pub kms: f64,
    /// Fuel cost of the segment to the site.
    pub fuel_cost: f64,
}

/// A scoring outcome on the wire.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEfficiency {
    /// Score in [0, 100].
    pub score: f64,
    /// Qualitative bucket of the score.
    pub label: String,
    /// A static advice line.
    pub recommendation: String,
}

/// A single dimension comparison on the wire.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEfficiencyMetric {
    /// Compared dimension name.
    pub dimension: String,
    /// The route's own value.
    pub value: f64,
    /// Fleet average of the dimension.
    pub average: f64,
    /// Fleet best of the dimension.
    pub best: f64,
    /// Scoring outcome.
    pub efficiency: ApiEfficiency,
}

/// A full route comparison for the analytics layer.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEfficiencyReport {
    /// Per dimension metrics: distance, duration, cost, cylinders.
    pub metrics: Vec<ApiEfficiencyMetric>,
    /// Equal weighted mean of the dimension scores.
    pub overall_score: f64,
}

impl ApiLocationType {
    /// Converts the wire role into the core one.
    pub fn to_core(self) -> LocationType {
        match self {
            ApiLocationType::Customer => LocationType::Customer,
            ApiLocationType::Storage => LocationType::Storage,
            ApiLocationType::Distribution => LocationType::Distribution,
        }
    }
}

impl ApiLocation {
    /// Converts the wire record into a core location.
    pub fn to_core(&self) -> Location {
        Location {
            id: self.id.clone(),
            name: self.name.clone(),
            location_type: self.location_type.to_core(),
            latitude: self.latitude,
            longitude: self.longitude,
            full_cylinders: self.full_cylinders,
            empty_cylinders: self.empty_cylinders,
            open_time: self.open_time.clone(),
            close_time: self.close_time.clone(),
            region: self.region.clone(),
            country: self.country.clone(),
        }
    }

}

impl ApiOptimizationParams {
    /// Converts the wire toggles into core ones.
    pub fn to_core(self) -> OptimizationParams {
        OptimizationParams {
            prioritize_fuel: self.prioritize_fuel,
            avoid_traffic: self.avoid_traffic,
            use_real_time_data: self.use_real_time_data,
            optimize_for_distance: self.optimize_for_distance,
        }
    }
}

impl PlanConfig {
    /// Extracts the fleet constants.
    pub fn to_fleet_config(&self) -> FleetConfig {
        FleetConfig { max_cylinders: self.max_cylinders, cylinder_weight_kg: self.cylinder_weight_kg }
    }
}

impl ApiRoute {
    /// Converts the wire record into core route totals.
    pub fn to_totals(&self) -> RouteTotals {
        RouteTotals {
            distance_km: self.total_distance,
            duration_min: self.total_duration,
            cost: self.estimated_cost,
            cylinders: self.total_cylinders,
        }
    }
}

impl From<&CostEstimate> for ApiCostEstimate {
    fn from(cost: &CostEstimate) -> Self {
        Self {
            distance: cost.distance_km,
            duration: cost.duration_min,
            fuel_consumption: cost.fuel_consumption_l,
            fuel_cost: cost.fuel_cost,
            maintenance_cost: cost.maintenance_cost,
            total_cost: cost.total_cost,
            traffic_conditions: cost.traffic_conditions.to_string(),
            total_weight: cost.total_weight_kg,
        }
    }
}
