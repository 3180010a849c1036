#![allow(clippy::cast_precision_loss)]

use crate::{Series, lag, rolling_sum, safe_div};

/// Fast and slow EMA periods bounding Kaufman's smoothing constant.
const KAMA_FAST: f64 = 2.0;
const KAMA_SLOW: f64 = 30.0;

/// Kaufman adaptive moving average.
///
/// The efficiency ratio `|x - x[n]| / Σ|x - x[1]|` over `length` bars scales
/// the smoothing constant between the fast and slow EMA factors.
pub(super) fn kaufman(series: &[f64], length: usize) -> Series {
    let fast = 2.0 / (KAMA_FAST + 1.0);
    let slow = 2.0 / (KAMA_SLOW + 1.0);

    let abs_changes: Series = series
        .iter()
        .enumerate()
        .map(|(i, &value)| (value - lag(series, i, 1)).abs())
        .collect();
    let volatility = rolling_sum(&abs_changes, length);

    let mut out = Series::with_capacity(series.len());
    for (i, &value) in series.iter().enumerate() {
        let change = (value - lag(series, i, length)).abs();
        let efficiency = safe_div(change, volatility[i]);
        let constant = efficiency * (fast - slow) + slow;
        let constant = constant * constant;

        let previous = out.last_or_zero();
        out.push(previous + constant * (value - previous));
    }

    out
}

/// Variable index dynamic average: an EMA whose factor is scaled by the
/// absolute Chande momentum oscillator (as a fraction) over `length` bars.
pub(super) fn vidya(series: &[f64], length: usize) -> Series {
    let alpha = 2.0 / (length as f64 + 1.0);

    let mut gains = Series::with_capacity(series.len());
    let mut losses = Series::with_capacity(series.len());
    for (i, &value) in series.iter().enumerate() {
        let change = value - lag(series, i, 1);
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }
    let gain_sum = rolling_sum(&gains, length);
    let loss_sum = rolling_sum(&losses, length);

    let mut out = Series::with_capacity(series.len());
    for (i, &value) in series.iter().enumerate() {
        let momentum = safe_div(gain_sum[i] - loss_sum[i], gain_sum[i] + loss_sum[i]);
        let factor = alpha * momentum.abs();

        let previous = out.last_or_zero();
        out.push(previous + factor * (value - previous));
    }

    out
}
