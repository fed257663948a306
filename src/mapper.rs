//! Linear range remapping with clamping.
//!
//! A value expressed in a source interval is clamped into that interval,
//! normalized against the source bounds *in the order they were given*, and
//! re-projected into the target interval.
//!
//! # Examples
//!
//! ```
//! use rangekit::map_range;
//!
//! assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 50.0);
//! // Out-of-range values are clamped first
//! assert_eq!(map_range(15.0, 0.0, 10.0, 0.0, 100.0).unwrap(), 100.0);
//! // An inverted source interval inverts the normalized fraction
//! assert_eq!(map_range(0.0, 10.0, 0.0, 0.0, 100.0).unwrap(), 100.0);
//! ```

use thiserror::Error;

/// Raised when the two bounds of the source interval are equal.
///
/// Normalizing against a zero-width interval would divide by zero, so the
/// check happens before any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("source interval is empty: both bounds are {bound}")]
pub struct InvalidRangeError {
    /// The shared value of both source bounds
    pub bound: f64,
}

/// Maps `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// Both intervals may be given in either order. The value is clamped into
/// the numeric span of the source interval, then normalized with
/// `(clamped - in_min) / (in_max - in_min)`. When `in_min > in_max` that
/// fraction runs from 1 down to 0, which flips the mapping.
///
/// NaN inputs are not rejected; they propagate to a NaN result.
///
/// # Errors
/// Returns [`InvalidRangeError`] when `in_min == in_max`.
pub fn map_range(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
) -> Result<f64, InvalidRangeError> {
    if in_min == in_max {
        return Err(InvalidRangeError { bound: in_min });
    }

    let clamped = clamp_to_span(value, in_min, in_max);
    let t = (clamped - in_min) / (in_max - in_min);
    Ok(out_min + t * (out_max - out_min))
}

/// Clamps into `[min(a, b), max(a, b)]` without panicking on NaN.
///
/// `f64::clamp` asserts `min <= max`, which does not hold once a bound is NaN.
fn clamp_to_span(value: f64, a: f64, b: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    let (lo, hi) = (a.min(b), a.max(b));
    value.max(lo).min(hi)
}

/// A validated source/target interval pair.
///
/// Construction performs the empty-interval check once, after which
/// [`RangeMapper::map`] is infallible. The arithmetic is identical to
/// [`map_range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
}

impl RangeMapper {
    /// Creates a mapper, rejecting an empty source interval.
    pub fn new(in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Result<Self, InvalidRangeError> {
        if in_min == in_max {
            return Err(InvalidRangeError { bound: in_min });
        }
        Ok(Self { in_min, in_max, out_min, out_max })
    }

    /// Returns the source bounds in the order they were given.
    pub fn source(&self) -> (f64, f64) {
        (self.in_min, self.in_max)
    }

    /// Returns the target bounds in the order they were given.
    pub fn target(&self) -> (f64, f64) {
        (self.out_min, self.out_max)
    }

    /// Maps a single value.
    pub fn map(&self, value: f64) -> f64 {
        let clamped = clamp_to_span(value, self.in_min, self.in_max);
        let t = (clamped - self.in_min) / (self.in_max - self.in_min);
        self.out_min + t * (self.out_max - self.out_min)
    }
}
