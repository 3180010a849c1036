#![allow(clippy::cast_precision_loss)]

use crate::{Series, rolling::windows, safe_div};

/// Ordinary least squares of `values` against bar offsets `0..m`.
/// Returns `(intercept, slope)`; a single value has slope zero.
fn fit(values: &[f64]) -> (f64, f64) {
    let m = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);

    for (k, &y) in values.iter().enumerate() {
        let x = k as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = safe_div(m * sum_xy - sum_x * sum_y, m * sum_xx - sum_x * sum_x);
    let intercept = safe_div(sum_y - slope * sum_x, m);

    (intercept, slope)
}

/// Regression line evaluated at `offset` bars past the oldest in the window.
fn project(series: &[f64], length: usize, offset: impl Fn(usize) -> f64) -> Series {
    windows(series, length)
        .map(|values| {
            let (intercept, slope) = fit(values);
            intercept + slope * offset(values.len())
        })
        .collect()
}

/// End point of the regression line: the newest bar.
pub(super) fn least_squares(series: &[f64], length: usize) -> Series {
    project(series, length, |m| (m - 1) as f64)
}

/// One bar beyond the end point.
pub(super) fn forecast(series: &[f64], length: usize) -> Series {
    project(series, length, |m| m as f64)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_line() {
        let (intercept, slope) = fit(&[3.0, 5.0, 7.0, 9.0]);
        assert_eq!(intercept, 3.0);
        assert_eq!(slope, 2.0);
    }

    #[test]
    fn single_value_is_flat() {
        assert_eq!(fit(&[4.0]), (4.0, 0.0));
    }

    #[test]
    fn least_squares_on_a_line_is_the_line() {
        let line = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(least_squares(&line, 3).as_slice(), &line);
    }

    #[test]
    fn forecast_extends_the_line() {
        let line = [1.0, 2.0, 3.0, 4.0, 5.0];
        // first bar has no slope to extend
        assert_eq!(forecast(&line, 3).as_slice(), &[1.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn end_point_of_noisy_window() {
        // y = [2, 1, 3]: slope 0.5, intercept 1.5, end point 2.5
        assert_eq!(least_squares(&[2.0, 1.0, 3.0], 3)[2], 2.5);
    }
}
