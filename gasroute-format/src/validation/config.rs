use super::*;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Checks fuel price, fleet capacity and the optional route date.
pub fn validate_config(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let config = &ctx.request.config;
    let mut errors = vec![];

    if !(config.fuel_cost_per_liter > 0.) {
        errors.push(invalid_fuel_cost(format!("fuelCostPerLiter: {}", config.fuel_cost_per_liter)));
    }

    if config.max_cylinders == 0 || !(config.cylinder_weight_kg > 0.) {
        errors.push(invalid_capacity(format!(
            "maxCylinders: {}, cylinderWeightKg: {}",
            config.max_cylinders, config.cylinder_weight_kg
        )));
    }

    if let Some(date) = &ctx.request.date {
        if OffsetDateTime::parse(date, &Rfc3339).is_err() {
            errors.push(invalid_date(format!("date: {date}")));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
