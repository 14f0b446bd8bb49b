/// Alias to a scalar floating type.
///
/// NOTE: `f64` is kept as the default floating type: the cost figures are money-facing and
/// `f32` rounding drift shows up in the second decimal already on medium routes.
pub type Float = f64;

/// Rounds a value to the given amount of decimal places.
pub fn round_to(value: Float, places: u32) -> Float {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
