use crate::Float;

/// Extension trait for floating point numbers.
pub(crate) trait FloatExt {
    /// The factor for rounding numbers before hashing or equality testing.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// The largest absolute difference between two numbers that are still
    /// considered close enough.
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e10;
    const TOLERANCE: f64 = 1e-6;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const TOLERANCE: f32 = 1e-3;
}

/// Round the number to the given number of digits after the decimal.
///
/// The result never is negative zero.
pub(crate) fn round_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Normalize the hue to `0..360`.
///
/// Values are wrapped modulo 360. A result that rounds up to 360 wraps to
/// zero, and so does negative zero.
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let h = hue.rem_euclid(360.0);
    if h >= 360.0 || h == 0.0 {
        0.0
    } else {
        h
    }
}

/// Clamp the value, treating not-a-number as the lower bound.
#[inline]
pub(crate) fn clamp(value: Float, min: Float, max: Float) -> Float {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
