use super::{ColorSpace, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`close_enough`](crate::close_enough) to compare the
/// two floating point numbers within a small tolerance, treating
/// not-a-numbers as zero.
///
/// # Panics
///
/// This macro panics if the numbers differ by more than the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            $crate::close_enough(f1, f2),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Test macro for asserting that two color coordinate arrays describe the same
/// color.
///
/// Given a color space and two coordinate arrays, this macro normalizes the
/// hue of polar color spaces and then compares the coordinates within a small
/// tolerance.
///
/// # Panics
///
/// This macro panics if the coordinates differ. Its message places the
/// coordinates below each other at the beginning of subsequent lines for easy
/// comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($space:expr , $cs1:expr , $cs2:expr $(,)?) => {
        let (space, cs1, cs2) = ($space, $cs1, $cs2);
        assert!(
            $crate::core::same_coordinates(space, cs1, cs2),
            "color coordinates differ:\n{:?}\n{:?}",
            cs1,
            cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two floats are close enough to be considered equal.
///
/// This function treats not-a-number as zero and considers two numbers equal
/// if their absolute difference is at most 1e-6 (or 1e-3 without the `f64`
/// feature). It **must not** be used for comparing hues; they require
/// normalization, as implemented by `assert_same_coordinates`.
pub fn close_enough(f1: Float, f2: Float) -> bool {
    let f1 = if f1.is_nan() { 0.0 } else { f1 };
    let f2 = if f2.is_nan() { 0.0 } else { f2 };
    (f1 - f2).abs() <= <Float as FloatExt>::TOLERANCE
}

/// Determine whether two coordinate arrays in the same color space are close
/// enough, accounting for the hue's periodicity.
#[cfg(test)]
pub(crate) fn same_coordinates(space: ColorSpace, cs1: &[Float; 3], cs2: &[Float; 3]) -> bool {
    (0..3).all(|index| {
        if space.hue_index() == Some(index) {
            let delta = (cs1[index] - cs2[index]).rem_euclid(360.0);
            delta.min(360.0 - delta) <= <Float as FloatExt>::TOLERANCE
        } else {
            close_enough(cs1[index], cs2[index])
        }
    })
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize optional channel values for equality testing and hashing.
///
/// Missing channels stay missing, while polar hues are wrapped to `0..360`
/// before their precision is reduced.
pub(crate) fn to_eq_channels(space: ColorSpace, channels: &[Option<Float>; 3]) -> [Option<Bits>; 3] {
    let mut bits = [None; 3];
    for (index, channel) in channels.iter().enumerate() {
        bits[index] = channel.map(|c| {
            if space.hue_index() == Some(index) {
                to_eq_bits(super::normalize_hue(c))
            } else {
                to_eq_bits(c)
            }
        });
    }
    bits
}

/// Replace missing channels with zero.
#[inline]
pub(crate) fn normalize(channels: &[Option<Float>; 3]) -> [Float; 3] {
    let [c1, c2, c3] = *channels;
    [c1.unwrap_or(0.0), c2.unwrap_or(0.0), c3.unwrap_or(0.0)]
}
