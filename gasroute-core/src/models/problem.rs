use crate::utils::Float;

/// Specifies a site role within the distribution network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationType {
    /// A delivery customer: carries pickup demand as empty cylinders.
    Customer,
    /// A storage depot: carries supply as full cylinders.
    Storage,
    /// A distribution hub: carries supply as full cylinders.
    Distribution,
}

impl LocationType {
    /// Checks whether the site supplies full cylinders.
    pub fn is_supply(&self) -> bool {
        matches!(self, LocationType::Storage | LocationType::Distribution)
    }
}

/// A delivery site record as the backing store hands it over.
///
/// Storage and distribution sites carry supply (`full_cylinders`), customers carry pickup
/// demand (`empty_cylinders`); only one of the two is meaningful per location type.
#[derive(Clone, Debug)]
pub struct Location {
    /// A unique site id.
    pub id: String,
    /// A human readable site name.
    pub name: String,
    /// A site role.
    pub location_type: LocationType,
    /// Latitude in degrees.
    pub latitude: Float,
    /// Longitude in degrees.
    pub longitude: Float,
    /// Amount of full cylinders on site.
    pub full_cylinders: u32,
    /// Amount of empty cylinders on site.
    pub empty_cylinders: u32,
    /// Site opening time, e.g. "08:00".
    pub open_time: Option<String>,
    /// Site closing time, e.g. "17:00".
    pub close_time: Option<String>,
    /// A region the site belongs to, used for traffic factors.
    pub region: Option<String>,
    /// A country the site belongs to.
    pub country: Option<String>,
}

impl Location {
    /// Checks whether site coordinates are usable for distance math.
    pub fn has_valid_coordinates(&self) -> bool {
        crate::algorithms::geo::is_valid_coordinate(self.latitude, self.longitude)
    }

    /// Returns the cylinder count which is meaningful for the site role.
    pub fn handled_cylinders(&self) -> u32 {
        if self.location_type.is_supply() {
            self.full_cylinders
        } else {
            self.empty_cylinders
        }
    }
}

/// Boolean toggles controlling heuristic weighting of the stop ordering and cost model.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimizationParams {
    /// Prefer fuel friendly ordering and consumption.
    pub prioritize_fuel: bool,
    /// Prefer routes which dodge congested segments.
    pub avoid_traffic: bool,
    /// Use live traffic data adjustments.
    pub use_real_time_data: bool,
    /// Squeeze total distance at the expense of duration.
    pub optimize_for_distance: bool,
}

/// Fleet wide constants, passed by value into every computation.
#[derive(Clone, Copy, Debug)]
pub struct FleetConfig {
    /// Maximum amount of cylinders a truck can carry.
    pub max_cylinders: u32,
    /// Weight of a single cylinder in kilograms, applied to full and empty alike.
    pub cylinder_weight_kg: Float,
}

impl FleetConfig {
    /// Returns the maximum payload in kilograms.
    pub fn max_weight_kg(&self) -> Float {
        self.max_cylinders as Float * self.cylinder_weight_kg
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self { max_cylinders: 80, cylinder_weight_kg: 22. }
    }
}
