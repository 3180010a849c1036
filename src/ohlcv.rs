/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// OHLCV bar data, the raw input every series is extracted from.
///
/// Implement this on your own kline/candle type and load a history with
/// [`StockData::from_bars`](crate::StockData::from_bars). Bars must already
/// be time-ordered and gap-free; the crate indexes them by position only.
///
/// # Example
///
/// ```
/// use ta_series::{Ohlcv, Price, StockData};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64, v: f64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn volume(&self) -> f64 { self.v }
/// }
///
/// let bars = [MyKline { o: 1.0, h: 2.0, l: 0.5, c: 1.5, v: 100.0 }];
/// let data = StockData::from_bars(&bars);
/// assert_eq!(data.close(), &[1.5]);
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Trade volume during the bar. Defaults to `0.0`.
    fn volume(&self) -> f64 {
        0.0
    }
}
