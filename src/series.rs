use std::{
    fmt::{Debug, Display},
    ops::Deref,
};

use crate::Price;

/// Number of decimal places every [`Series`] value is rounded to.
pub const PRECISION: i32 = 4;

const SCALE: f64 = 10_000.0;

/// Rounds `value` to [`PRECISION`] decimal places.
///
/// Midpoints round to even. Non-finite values collapse to `0.0` so that a
/// degenerate intermediate never leaks NaN or infinity into a series.
///
/// ```
/// use ta_series::round;
///
/// assert_eq!(round(6.666_666_7), 6.6667);
/// assert_eq!(round(f64::NAN), 0.0);
/// ```
#[must_use]
#[inline]
pub fn round(value: f64) -> f64 {
    if value.is_finite() {
        (value * SCALE).round_ties_even() / SCALE
    } else {
        0.0
    }
}

/// Divides `numerator` by `denominator`, yielding `0.0` when the denominator
/// is zero or the quotient is not finite.
#[must_use]
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }

    let quotient = numerator / denominator;
    if quotient.is_finite() { quotient } else { 0.0 }
}

/// Value `lag` bars before `index`, or `0.0` when the series has
/// insufficient history.
#[must_use]
#[inline]
pub fn lag(series: &[f64], index: usize, lag: usize) -> f64 {
    index
        .checked_sub(lag)
        .and_then(|i| series.get(i))
        .copied()
        .unwrap_or(0.0)
}

/// An append-only series of per-bar values.
///
/// Values are rounded with [`round`] as they are pushed, so every reader
/// (including the next stage of a chained computation) sees the rounded
/// value. There is no way to insert an unrounded value.
///
/// Dereferences to `[f64]` for read access.
///
/// # Example
///
/// ```
/// use ta_series::Series;
///
/// let mut series = Series::with_capacity(2);
/// series.push(1.234_56);
/// series.push(2.0 / 3.0);
///
/// assert_eq!(series.as_slice(), &[1.2346, 0.6667]);
/// assert_eq!(series.last_or_zero(), 0.6667);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Series {
    values: Vec<Price>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` rounded to [`PRECISION`] decimal places.
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.values.push(round(value));
    }

    /// Value `lag` bars before `index`, `0.0` if out of range.
    #[must_use]
    #[inline]
    pub fn lag(&self, index: usize, lag: usize) -> f64 {
        self::lag(&self.values, index, lag)
    }

    /// Most recently appended value, `0.0` while empty.
    #[must_use]
    #[inline]
    pub fn last_or_zero(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Deref for Series {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut series = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            series.push(value);
        }
        series
    }
}

impl Extend<f64> for Series {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Series> for Vec<f64> {
    fn from(series: Series) -> Self {
        series.values
    }
}

impl IntoIterator for Series {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Debug for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Series({} bars)", self.values.len())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    mod rounding {
        use super::*;

        #[test]
        fn rounds_to_four_places() {
            assert_eq!(round(1.234_56), 1.2346);
            assert_eq!(round(-1.234_56), -1.2346);
        }

        #[test]
        fn midpoint_rounds_to_even() {
            // scaled back up these are exactly 0.5 and 2.5
            assert_eq!(round(0.5 / SCALE), 0.0);
            assert_eq!(round(2.5 / SCALE), 0.0002);
        }

        #[test]
        fn non_finite_becomes_zero() {
            assert_eq!(round(f64::NAN), 0.0);
            assert_eq!(round(f64::INFINITY), 0.0);
            assert_eq!(round(f64::NEG_INFINITY), 0.0);
        }

        #[test]
        fn rounding_is_idempotent() {
            for value in [6.666_666_7, 8.888_888_9, 123.456_789, -0.000_149_9, 1e9 / 7.0] {
                let once = round(value);
                assert_eq!(round(once), once, "value={value}");
            }
        }
    }

    mod safe_division {
        use super::*;

        #[test]
        fn zero_denominator_is_zero() {
            assert_eq!(safe_div(5.0, 0.0), 0.0);
            assert_eq!(safe_div(0.0, 0.0), 0.0);
        }

        #[test]
        fn overflow_is_zero() {
            assert_eq!(safe_div(f64::MAX, 1e-300), 0.0);
        }

        #[test]
        fn regular_division() {
            assert_eq!(safe_div(9.0, 3.0), 3.0);
        }
    }

    mod lagged_access {
        use super::*;

        #[test]
        fn insufficient_history_is_zero() {
            let values = [1.0, 2.0, 3.0];
            assert_eq!(lag(&values, 1, 2), 0.0);
            assert_eq!(lag(&values, 0, 1), 0.0);
        }

        #[test]
        fn reads_lagged_value() {
            let values = [1.0, 2.0, 3.0];
            assert_eq!(lag(&values, 2, 2), 1.0);
            assert_eq!(lag(&values, 2, 0), 3.0);
        }

        #[test]
        fn past_the_end_is_zero() {
            let values = [1.0];
            assert_eq!(lag(&values, 5, 0), 0.0);
        }
    }

    mod series {
        use super::*;

        #[test]
        fn push_rounds() {
            let mut s = Series::new();
            s.push(2.0 / 3.0);
            assert_eq!(s[0], 0.6667);
        }

        #[test]
        fn collect_rounds_every_value() {
            let s: Series = [0.123_45, 0.123_47, f64::NAN].into_iter().collect();
            assert_eq!(s.as_slice(), &[0.1234, 0.1235, 0.0]);
        }

        #[test]
        fn last_or_zero_when_empty() {
            assert_eq!(Series::new().last_or_zero(), 0.0);
        }

        #[test]
        fn lag_through_series() {
            let s = Series::from(vec![1.0, 2.0]);
            assert_eq!(s.lag(1, 1), 1.0);
            assert_eq!(s.lag(1, 2), 0.0);
        }

        #[test]
        fn display_shows_length() {
            let s = Series::from(vec![1.0, 2.0, 3.0]);
            assert_eq!(s.to_string(), "Series(3 bars)");
        }
    }
}
