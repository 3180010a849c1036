//! Trailing-window aggregates.
//!
//! Every function returns one value per input bar. At bar `i` the window
//! covers `[max(0, i - window + 1), i]`: near the start of a series the
//! window is simply shorter, never padded. A `window` of zero is treated as
//! one. All outputs are [`Series`], so values are rounded on append.

use std::{collections::VecDeque, num::NonZero};

use crate::{MovingAverageMethod, Series, safe_div};

#[inline]
fn window_start(index: usize, window: usize) -> usize {
    (index + 1).saturating_sub(window.max(1))
}

/// Trailing slices of `series`, one per bar.
pub(crate) fn windows(series: &[f64], window: usize) -> impl Iterator<Item = &[f64]> {
    (0..series.len()).map(move |i| &series[window_start(i, window)..=i])
}

/// Sum of `values` accumulated oldest to newest.
#[inline]
pub(crate) fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, value| acc + value)
}

/// Rolling maximum.
///
/// ```
/// use ta_series::rolling_max;
///
/// assert_eq!(rolling_max(&[3.0, 1.0, 2.0, 0.0], 2).as_slice(), &[3.0, 3.0, 2.0, 2.0]);
/// ```
#[must_use]
pub fn rolling_max(series: &[f64], window: usize) -> Series {
    monotonic(series, window, |candidate, back| candidate >= back)
}

/// Rolling minimum.
#[must_use]
pub fn rolling_min(series: &[f64], window: usize) -> Series {
    monotonic(series, window, |candidate, back| candidate <= back)
}

/// Monotonic-deque scan. `evicts(candidate, back)` is true when `candidate`
/// dominates the value at the back of the deque.
fn monotonic(series: &[f64], window: usize, evicts: impl Fn(f64, f64) -> bool) -> Series {
    let window = window.max(1);
    let mut out = Series::with_capacity(series.len());
    let mut deque: VecDeque<usize> = VecDeque::with_capacity(window);

    for (i, &value) in series.iter().enumerate() {
        while deque.back().is_some_and(|&j| evicts(value, series[j])) {
            deque.pop_back();
        }
        deque.push_back(i);

        let start = window_start(i, window);
        while deque.front().is_some_and(|&j| j < start) {
            deque.pop_front();
        }

        out.push(deque.front().map_or(value, |&j| series[j]));
    }

    out
}

/// Rolling sum.
#[must_use]
pub fn rolling_sum(series: &[f64], window: usize) -> Series {
    windows(series, window).map(sum).collect()
}

/// Rolling arithmetic mean, divided by the number of values actually in the
/// window.
///
/// ```
/// use ta_series::rolling_average;
///
/// let avg = rolling_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
/// assert_eq!(avg[1], 1.5);
/// assert_eq!(avg[4], 4.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rolling_average(series: &[f64], window: usize) -> Series {
    windows(series, window)
        .map(|values| safe_div(sum(values), values.len() as f64))
        .collect()
}

/// Rolling standard deviation around a moving-average center line.
///
/// The deviation at each bar is measured from `method`'s average of the same
/// window rather than the plain window mean, so the result tracks the
/// indicator's own smoothed line. Squared deviations are averaged over the
/// trailing window and clamped at zero before the square root.
///
/// ```
/// use ta_series::{MovingAverageMethod, rolling_std_dev};
///
/// let flat = rolling_std_dev(&[5.0; 6], MovingAverageMethod::Simple, 3);
/// assert!(flat.iter().all(|&v| v == 0.0));
/// ```
#[must_use]
pub fn rolling_std_dev(series: &[f64], method: MovingAverageMethod, window: usize) -> Series {
    let length = NonZero::new(window).unwrap_or(NonZero::<usize>::MIN);
    let center = method.compute(length, series);

    let squared_deviations: Series = series
        .iter()
        .zip(center.iter())
        .map(|(value, mean)| {
            let deviation = value - mean;
            deviation * deviation
        })
        .collect();

    rolling_average(&squared_deviations, length.get())
        .iter()
        .map(|&variance| variance.max(0.0).sqrt())
        .collect()
}
