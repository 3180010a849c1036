use crate::{Price, Series, StockData, lag};

use std::fmt::{Debug, Display};

use strum::{EnumIter, EnumString};

/// Input series derived from the OHLC fields of a [`StockData`].
///
/// Selects what an indicator computes on: a raw field or a per-bar blend.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PriceSource {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Closing price.
    #[default]
    Close,
    /// Lowest price.
    Low,
    /// Median price: `(high + low) / 2`.
    HL2,
    /// Typical price: `(high + low + close) / 3`.
    HLC3,
    /// Average price: `(open + high + low + close) / 4`.
    OHLC4,
    /// Weighted close: `(high + low + close + close) / 4`.
    HLCC4,
    /// True range: `max(high - low, |high - prev_close|, |low - prev_close|)`.
    ///
    /// On the first bar (no previous close), falls back to `high - low`.
    TrueRange,
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl PriceSource {
    /// Extracts this source for every bar of `data`, rounded on append.
    #[must_use]
    pub fn extract(self, data: &StockData) -> Series {
        (0..data.len()).map(|i| self.at(data, i)).collect()
    }

    #[inline]
    fn at(self, data: &StockData, i: usize) -> Price {
        let (open, high, low, close) = (data.open()[i], data.high()[i], data.low()[i], data.close()[i]);

        match self {
            Self::Open => open,
            Self::High => high,
            Self::Close => close,
            Self::Low => low,
            Self::HL2 => f64::midpoint(high, low),
            Self::HLC3 => (high + low + close) / 3.0,
            Self::OHLC4 => (open + high + low + close) / 4.0,
            Self::HLCC4 => (high + low + close + close) / 4.0,
            Self::TrueRange => {
                let hl = high - low;

                if i == 0 {
                    hl
                } else {
                    let prev_close = lag(data.close(), i, 1);
                    let hc = (high - prev_close).abs();
                    let lc = (low - prev_close).abs();
                    hl.max(hc).max(lc)
                }
            }
        }
    }
}
