#![allow(clippy::cast_precision_loss)]

use std::f64::consts::PI;

use crate::{Series, lag};

/// Ehlers two-pole super smoother.
///
/// ```text
/// a1 = exp(-1.414π / n), b1 = 2·a1·cos(1.414π / n)
/// c2 = b1, c3 = -a1², c1 = 1 - c2 - c3
/// out = c1·(x + x[1]) / 2 + c2·out[1] + c3·out[2]
/// ```
///
/// Lagged inputs and outputs before the start of the series are zero.
pub(super) fn super_smoother(series: &[f64], length: usize) -> Series {
    let arg = 1.414 * PI / length as f64;
    let a1 = (-arg).exp();
    let b1 = 2.0 * a1 * arg.cos();
    let c2 = b1;
    let c3 = -a1 * a1;
    let c1 = 1.0 - c2 - c3;

    let mut out = Series::with_capacity(series.len());
    for (i, &value) in series.iter().enumerate() {
        let previous_input = lag(series, i, 1);
        out.push(c1 * (value + previous_input) / 2.0 + c2 * out.lag(i, 1) + c3 * out.lag(i, 2));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_have_unit_gain() {
        // a constant input settles at the same constant
        let out = super_smoother(&[25.0; 200], 10);
        assert!((out[199] - 25.0).abs() < 0.001, "{}", out[199]);
    }

    #[test]
    fn first_bar_halves_missing_history() {
        // out[0] = c1 * (x + 0) / 2
        let out = super_smoother(&[10.0], 10);
        assert!(out[0] > 0.0 && out[0] < 5.0, "{}", out[0]);
    }
}
