//! This module provides functionality to validate a planning request for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation_test.rs"]
mod validation_test;

use crate::model::{ApiLocation, PlanRequest};
use crate::{FormatError, MultiFormatError};

mod config;
use self::config::validate_config;

mod stops;
use self::stops::validate_stops;

/// A one request validation scope.
pub struct ValidationContext<'a> {
    /// The validated request.
    pub request: &'a PlanRequest,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a PlanRequest) -> Self {
        Self { request }
    }

    /// Validates the request on the rule set, collecting every broken rule.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_stops(self)
            .err()
            .into_iter()
            .chain(validate_config(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Iterates over every location of the request, start and end included.
    pub(crate) fn all_locations(&self) -> impl Iterator<Item = &ApiLocation> {
        std::iter::once(&self.request.start)
            .chain(self.request.stops.iter())
            .chain(std::iter::once(&self.request.end))
    }
}

pub(crate) fn is_valid_location(location: &ApiLocation) -> bool {
    gasroute_core::algorithms::geo::is_valid_coordinate(location.latitude, location.longitude)
}

pub(crate) use self::error_helpers::*;

mod error_helpers {
    use super::FormatError;

    pub fn no_usable_coordinates(details: String) -> FormatError {
        FormatError::new_with_details(
            "E0001",
            "no stop with usable coordinates",
            "provide at least one location with valid latitude and longitude",
            details,
        )
    }

    pub fn duplicate_ids(details: String) -> FormatError {
        FormatError::new_with_details(
            "E0002",
            "duplicate location ids",
            "make sure all location ids are unique",
            details,
        )
    }

    pub fn invalid_fuel_cost(details: String) -> FormatError {
        FormatError::new_with_details(
            "E0003",
            "fuel cost per liter is not positive",
            "set a positive fuel price in the planning settings",
            details,
        )
    }

    pub fn invalid_date(details: String) -> FormatError {
        FormatError::new_with_details(
            "E0004",
            "cannot parse route date",
            "use an RFC3339 formatted date",
            details,
        )
    }

    pub fn invalid_capacity(details: String) -> FormatError {
        FormatError::new_with_details(
            "E0005",
            "fleet capacity is not positive",
            "set positive max cylinders and cylinder weight",
            details,
        )
    }
}
