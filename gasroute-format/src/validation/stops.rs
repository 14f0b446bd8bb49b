use super::*;
use std::collections::HashSet;

/// Checks that the request carries at least one usable coordinate pair and no id is reused.
pub fn validate_stops(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_usable_coordinates(ctx)
        .err()
        .into_iter()
        .chain(check_unique_ids(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_usable_coordinates(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.all_locations().any(is_valid_location) {
        Ok(())
    } else {
        let ids = ctx.all_locations().map(|l| l.id.as_str()).collect::<Vec<_>>().join(", ");
        Err(no_usable_coordinates(ids))
    }
}

fn check_unique_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    let mut seen = HashSet::new();
    let duplicates = ctx
        .all_locations()
        .filter(|location| !seen.insert(location.id.as_str()))
        .map(|location| location.id.as_str())
        .collect::<Vec<_>>();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(duplicate_ids(duplicates.join(", ")))
    }
}
