#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};
use ta_series::{Ohlcv, Price, StockData};

/// OHLCV bar parsed from the reference CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Reference value at a bar index.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub index: usize,
    pub expected: f64,
}

/// Reference band pair and the signal classified from it.
#[derive(Debug, Deserialize)]
pub struct RefBandSignal {
    pub index: usize,
    pub upper: f64,
    pub lower: f64,
    pub signal: String,
}

/// Reference values are rounded to 4 decimal places, so any mismatch is at
/// least 1e-4; the slack only absorbs CSV float formatting.
pub const TOLERANCE: f64 = 1e-9;

const OHLCV_PATH: &str = "tests/fixtures/data/ohlcv.csv";

/// Load the reference bars.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load the reference bars into a [`StockData`].
pub fn load_stock_data() -> StockData {
    StockData::from_bars(&load_reference_ohlcvs())
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load band and signal reference data.
pub fn load_band_signals(path: &str) -> Vec<RefBandSignal> {
    load_records(path, "invalid band reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Assert every bar of `actual` matches the reference file at `path`.
pub fn assert_matches_reference(actual: &[f64], path: &str, context: &str) {
    let reference = load_ref_values(path);

    assert_eq!(
        actual.len(),
        reference.len(),
        "{context}: output has {} bars, reference has {}",
        actual.len(),
        reference.len()
    );

    for row in &reference {
        assert_near(
            actual[row.index],
            row.expected,
            TOLERANCE,
            &format!("{context} at bar {}", row.index),
        );
    }
}

/// Generate a reference test for one moving-average configuration.
///
/// Usage: `reference_test!(sma_14, Simple, 14, Close, "tests/fixtures/data/sma-14-close.csv");`
#[allow(unused_macros)]
macro_rules! reference_test {
    ($name:ident, $method:ident, $length:expr, $source:ident, $ref_path:expr) => {
        #[test]
        fn $name() {
            use std::num::NonZero;
            use ta_series::{MovingAverageMethod, PriceSource, compute_moving_average};

            let data = crate::fixtures::load_stock_data();
            let input = data.series(PriceSource::$source);
            let length = NonZero::new($length).unwrap();
            let out = compute_moving_average(MovingAverageMethod::$method, length, &input);

            crate::fixtures::assert_matches_reference(&out, $ref_path, stringify!($name));
        }
    };
}

#[allow(unused_imports)]
pub(crate) use reference_test;

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
