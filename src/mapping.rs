//! Linear range mapping.
//!
//! Integer re-scaling in the style of the Arduino `map()` helper.

use num_traits::PrimInt;

/// Re-map `value` from `in_min..=in_max` onto `out_min..=out_max`.
///
/// Division truncates toward zero and the result is NOT clamped: inputs
/// outside the source range map to outputs outside the target range.
/// Caller must ensure `in_min != in_max`.
#[inline]
pub fn map_range<T: PrimInt>(value: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Map a raw ADC value within `low..=high` to a 0..100 percentage (unclamped).
#[inline]
pub fn to_percent(value: i32, low: u16, high: u16) -> i32 {
    map_range(value, low as i32, high as i32, 0, 100)
}
