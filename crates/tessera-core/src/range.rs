//! The [`ValueRange`] min/max pair and its NaN-skipping reduction.

use std::fmt;

/// Observed `(min, max)` extrema of a component or of the tuple magnitude.
///
/// A range with `min > max` is empty. The canonical empty range is
/// [`ValueRange::EMPTY`], produced when there are no tuples or every
/// value is NaN.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    /// Smallest non-NaN value seen.
    pub min: f64,
    /// Largest non-NaN value seen.
    pub max: f64,
}

impl ValueRange {
    /// The inverted `(f64::MAX, -f64::MAX)` sentinel for "no values".
    pub const EMPTY: ValueRange = ValueRange {
        min: f64::MAX,
        max: -f64::MAX,
    };

    /// Create a range from explicit bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fold one value into the range. NaN leaves the range unchanged.
    ///
    /// The first value replaces an empty range outright, so an all-`+inf`
    /// column reduces to `(inf, inf)` rather than `(f64::MAX, inf)`.
    #[inline]
    pub fn including(self, value: f64) -> Self {
        if value.is_nan() {
            return self;
        }
        if self.is_empty() {
            return Self::new(value, value);
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Reduce a sequence of values, skipping NaN.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().fold(Self::EMPTY, Self::including)
    }

    /// Returns `true` if no value has been folded in.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Width of the range, `0.0` when empty.
    pub fn size(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// The range as a `(min, max)` tuple.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[empty]")
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}
