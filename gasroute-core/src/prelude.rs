//! This module reimports commonly used types.

pub use crate::models::{
    CostEstimate, FleetConfig, Location, LocationType, OptimizationParams, Route, RouteStatus,
    RouteStop, RouteTotals, TrafficCondition,
};

pub use crate::algorithms::geo::distance_km;
pub use crate::analysis::efficiency::{calculate_efficiency_score, score_route, FleetStats};
pub use crate::construction::estimation::estimate_route;
pub use crate::construction::ordering::order_stops;
pub use crate::construction::traffic::{current_condition, TrafficModel};
pub use crate::construction::weight::{total_weight, try_load_cylinders, weight_profile};

// Reimport engine capabilities
pub use crate::utils::compare_floats;
pub use crate::utils::Clock;
pub use crate::utils::DefaultClock;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
