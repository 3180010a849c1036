use crate::{Series, rolling_average};

/// Arithmetic mean over the trailing window, short at the start.
pub(super) fn sma(series: &[f64], length: usize) -> Series {
    rolling_average(series, length)
}

pub(super) fn triangular(series: &[f64], length: usize) -> Series {
    sma(&sma(series, length), length)
}
