#![allow(clippy::cast_precision_loss)]

use crate::{Series, lag, safe_div};

/// Tillson's volume factor.
const T3_VOLUME_FACTOR: f64 = 0.7;

/// McGinley's tracking constant.
const MCGINLEY_K: f64 = 0.6;

/// Regularization weight on the curvature term.
const REGULARIZATION: f64 = 0.5;

/// `out = prev + α(x - prev)` from a zero previous output.
///
/// The first output is `α·x`, not `x`.
fn smooth(series: &[f64], alpha: f64) -> Series {
    let mut out = Series::with_capacity(series.len());

    for &value in series {
        let previous = out.last_or_zero();
        out.push(previous + alpha * (value - previous));
    }

    out
}

pub(super) fn ema(series: &[f64], length: usize) -> Series {
    smooth(series, 2.0 / (length as f64 + 1.0))
}

pub(super) fn wilder(series: &[f64], length: usize) -> Series {
    smooth(series, 1.0 / length as f64)
}

pub(super) fn double(series: &[f64], length: usize) -> Series {
    let ema1 = ema(series, length);
    let ema2 = ema(&ema1, length);

    ema1.iter()
        .zip(ema2.iter())
        .map(|(e1, e2)| 2.0 * e1 - e2)
        .collect()
}

pub(super) fn triple(series: &[f64], length: usize) -> Series {
    let ema1 = ema(series, length);
    let ema2 = ema(&ema1, length);
    let ema3 = ema(&ema2, length);

    ema1.iter()
        .zip(ema2.iter())
        .zip(ema3.iter())
        .map(|((e1, e2), e3)| 3.0 * e1 - 3.0 * e2 + e3)
        .collect()
}

pub(super) fn tillson_t3(series: &[f64], length: usize) -> Series {
    let a = T3_VOLUME_FACTOR;
    let a2 = a * a;
    let a3 = a2 * a;
    let c1 = -a3;
    let c2 = 3.0 * a2 + 3.0 * a3;
    let c3 = -6.0 * a2 - 3.0 * a - 3.0 * a3;
    let c4 = 1.0 + 3.0 * a + a3 + 3.0 * a2;

    let e1 = ema(series, length);
    let e2 = ema(&e1, length);
    let e3 = ema(&e2, length);
    let e4 = ema(&e3, length);
    let e5 = ema(&e4, length);
    let e6 = ema(&e5, length);

    (0..series.len())
        .map(|i| c1 * e6[i] + c2 * e5[i] + c3 * e4[i] + c4 * e3[i])
        .collect()
}

/// EMA of `x + (x - x[lag])` with `lag = (length - 1) / 2`.
pub(super) fn zero_lag(series: &[f64], length: usize) -> Series {
    let lag_bars = (length - 1) / 2;

    let adjusted: Series = series
        .iter()
        .enumerate()
        .map(|(i, &value)| value + (value - lag(series, i, lag_bars)))
        .collect();

    ema(&adjusted, length)
}

pub(super) fn regularized(series: &[f64], length: usize) -> Series {
    let alpha = 2.0 / (length as f64 + 1.0);
    let mut out = Series::with_capacity(series.len());

    for (i, &value) in series.iter().enumerate() {
        let prev1 = out.lag(i, 1);
        let prev2 = out.lag(i, 2);
        out.push(
            (prev1 + alpha * (value - prev1) + REGULARIZATION * (2.0 * prev1 - prev2))
                / (REGULARIZATION + 1.0),
        );
    }

    out
}

/// McGinley dynamic. Seeds from the first input rather than zero: a zero
/// previous value would pin the ratio term at zero forever.
pub(super) fn mcginley(series: &[f64], length: usize) -> Series {
    let speed = MCGINLEY_K * length as f64;
    let mut out = Series::with_capacity(series.len());

    for (i, &value) in series.iter().enumerate() {
        let previous = if i == 0 { value } else { out[i - 1] };
        let ratio = safe_div(value, previous);
        let ratio2 = ratio * ratio;
        out.push(previous + safe_div(value - previous, speed * (ratio2 * ratio2)));
    }

    out
}
