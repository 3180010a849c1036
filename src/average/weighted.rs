#![allow(clippy::cast_precision_loss)]

use std::f64::consts::PI;

use super::{Recurrence, clamp_length, exponential::ema};
use crate::{Series, rolling::windows, safe_div};

/// ALMA center of mass as a fraction of the window.
const ALMA_OFFSET: f64 = 0.85;

/// ALMA window width divisor.
const ALMA_SIGMA: f64 = 6.0;

/// Weighted mean of each trailing window.
///
/// `weight(k, m)` gives the weight of the `k`-th value counting from the
/// oldest (`k = 0`) in a window holding `m` values. Near the start of the
/// series `m < length` and the weights are recomputed for the short window.
fn weighted_window(series: &[f64], length: usize, weight: impl Fn(usize, usize) -> f64) -> Series {
    windows(series, length)
        .map(|values| {
            let m = values.len();
            let mut numerator = 0.0;
            let mut denominator = 0.0;

            for (k, value) in values.iter().enumerate() {
                let w = weight(k, m);
                numerator += w * value;
                denominator += w;
            }

            safe_div(numerator, denominator)
        })
        .collect()
}

pub(super) fn wma(series: &[f64], length: usize) -> Series {
    weighted_window(series, length, |k, _| (k + 1) as f64)
}

pub(super) fn hull(series: &[f64], length: usize) -> Series {
    hull_with(series, length, wma)
}

pub(super) fn exponential_hull(series: &[f64], length: usize) -> Series {
    hull_with(series, length, ema)
}

fn hull_with(series: &[f64], length: usize, average: Recurrence) -> Series {
    let half = clamp_length(length / 2);
    let root = clamp_length(length.isqrt());

    let fast = average(series, half);
    let slow = average(series, length);
    let raw: Series = fast
        .iter()
        .zip(slow.iter())
        .map(|(f, s)| 2.0 * f - s)
        .collect();

    average(&raw, root)
}

pub(super) fn arnaud_legoux(series: &[f64], length: usize) -> Series {
    weighted_window(series, length, |k, m| {
        let m = m as f64;
        let center = ALMA_OFFSET * (m - 1.0);
        let width = m / ALMA_SIGMA;
        let distance = k as f64 - center;
        (-(distance * distance) / (2.0 * width * width)).exp()
    })
}

pub(super) fn sine(series: &[f64], length: usize) -> Series {
    weighted_window(series, length, |k, m| {
        ((k + 1) as f64 * PI / (m + 1) as f64).sin()
    })
}
