//! Moving averages, rolling statistics and trade-signal classification over
//! historical price series.
//!
//! Everything here operates on fully materialized history: a slice in, a
//! [`Series`] of the same length out. Index `i` of every derived series refers
//! to bar `i` of the input. Values are rounded to [`PRECISION`] decimal places
//! as they are appended, so chained computations (an average of an average, a
//! deviation around an average) read exactly what an earlier stage stored.
//!
//! - [`compute_moving_average`] runs any [`MovingAverageMethod`].
//! - [`rolling_max`], [`rolling_min`], [`rolling_sum`], [`rolling_average`]
//!   and [`rolling_std_dev`] aggregate trailing windows.
//! - [`compare_signal`] and friends turn per-bar deltas into a [`Signal`].
//!
//! Input comes from any type implementing [`Ohlcv`], collected into a
//! [`StockData`] which also stores named outputs and the signal series.

mod average;
mod config;
mod error;
mod ohlcv;
mod price_source;
mod rolling;
mod series;
mod signal;
mod stock_data;

pub use crate::average::{MovingAverageMethod, compute_moving_average};
pub use crate::config::{AverageConfig, AverageConfigBuilder};
pub use crate::error::Error;
pub use crate::ohlcv::{Ohlcv, Price};
pub use crate::price_source::PriceSource;
pub use crate::rolling::{rolling_average, rolling_max, rolling_min, rolling_std_dev, rolling_sum};
pub use crate::series::{PRECISION, Series, lag, round, safe_div};
pub use crate::signal::{
    Signal, bullish_bearish_signal, compare_signal, condition_signal, rsi_signal,
    volatility_signal,
};
pub use crate::stock_data::StockData;

#[cfg(test)]
mod test_util;
