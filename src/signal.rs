//! Per-bar trade signal classification.
//!
//! Every classifier is a pure function of the values handed to it. Callers
//! supply the previous bar's values explicitly from already-computed series;
//! nothing is retained between calls.

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Discrete trade signal attached to one bar.
///
/// The strong variants are produced by threshold crossings
/// ([`rsi_signal`], [`volatility_signal`]).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Hash,
    PartialEq,
    Eq,
    AsRefStr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Signal {
    #[default]
    #[strum(to_string = "Neutral", serialize = "None")]
    Neutral,
    Buy,
    Sell,
    StrongBuy,
    StrongSell,
}

impl Signal {
    /// Swaps buy and sell, for oscillators that read inverted.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Neutral => Self::Neutral,
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
            Self::StrongBuy => Self::StrongSell,
            Self::StrongSell => Self::StrongBuy,
        }
    }

    /// Promotes a directional signal to its strong variant.
    #[must_use]
    pub fn strengthened(self) -> Self {
        match self {
            Self::Buy | Self::StrongBuy => Self::StrongBuy,
            Self::Sell | Self::StrongSell => Self::StrongSell,
            Self::Neutral => Self::Neutral,
        }
    }

    #[must_use]
    pub fn is_buy(self) -> bool {
        matches!(self, Self::Buy | Self::StrongBuy)
    }

    #[must_use]
    pub fn is_sell(self) -> bool {
        matches!(self, Self::Sell | Self::StrongSell)
    }
}

#[inline]
fn crossed_above(current: f64, previous: f64) -> bool {
    current > 0.0 && previous <= 0.0
}

#[inline]
fn crossed_below(current: f64, previous: f64) -> bool {
    current < 0.0 && previous >= 0.0
}

/// Zero-line crossover of a delta.
///
/// [`Signal::Buy`] when the delta turns positive (`current > 0` and
/// `previous <= 0`), [`Signal::Sell`] when it turns negative (`current < 0`
/// and `previous >= 0`), otherwise [`Signal::Neutral`].
///
/// ```
/// use ta_series::{Signal, compare_signal};
///
/// assert_eq!(compare_signal(5.0, -3.0), Signal::Buy);
/// assert_eq!(compare_signal(-5.0, 3.0), Signal::Sell);
/// assert_eq!(compare_signal(0.0, 0.0), Signal::Neutral);
/// ```
#[must_use]
pub fn compare_signal(current_delta: f64, previous_delta: f64) -> Signal {
    if crossed_above(current_delta, previous_delta) {
        Signal::Buy
    } else if crossed_below(current_delta, previous_delta) {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Overbought/oversold exits layered over [`compare_signal`].
///
/// [`Signal::StrongBuy`] when the value climbs back through `oversold`
/// (`previous < oversold` and `current >= oversold`), [`Signal::StrongSell`]
/// when it falls back through `overbought` (`previous > overbought` and
/// `current <= overbought`). Otherwise the delta crossover decides.
#[must_use]
pub fn rsi_signal(
    current_delta: f64,
    previous_delta: f64,
    current_value: f64,
    previous_value: f64,
    overbought: f64,
    oversold: f64,
) -> Signal {
    if previous_value < oversold && current_value >= oversold {
        Signal::StrongBuy
    } else if previous_value > overbought && current_value <= overbought {
        Signal::StrongSell
    } else {
        compare_signal(current_delta, previous_delta)
    }
}

/// Delta crossover promoted to a strong signal during a volatility breakout.
///
/// While `volatility >= breakout_level` any crossover is returned as
/// [`Signal::StrongBuy`] / [`Signal::StrongSell`]; below the level this is
/// [`compare_signal`].
#[must_use]
pub fn volatility_signal(
    current_delta: f64,
    previous_delta: f64,
    volatility: f64,
    breakout_level: f64,
) -> Signal {
    let signal = compare_signal(current_delta, previous_delta);

    if volatility >= breakout_level {
        signal.strengthened()
    } else {
        signal
    }
}

/// Two-band breakout.
///
/// `upper_delta` is the distance above an upper bound (resistance, short
/// stop) and `lower_delta` the distance from a lower bound (support, long
/// stop). The upper crossing is checked first: when both bands are crossed on
/// the same bar the result is [`Signal::Buy`].
///
/// ```
/// use ta_series::{Signal, bullish_bearish_signal};
///
/// assert_eq!(bullish_bearish_signal(1.0, -1.0, -1.0, 1.0), Signal::Buy);
/// assert_eq!(bullish_bearish_signal(-1.0, -2.0, -1.0, 1.0), Signal::Sell);
/// ```
#[must_use]
pub fn bullish_bearish_signal(
    upper_delta: f64,
    previous_upper_delta: f64,
    lower_delta: f64,
    previous_lower_delta: f64,
) -> Signal {
    if crossed_above(upper_delta, previous_upper_delta) {
        Signal::Buy
    } else if crossed_below(lower_delta, previous_lower_delta) {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Direct boolean classification; `bullish` wins when both hold.
#[must_use]
pub fn condition_signal(bullish: bool, bearish: bool) -> Signal {
    if bullish {
        Signal::Buy
    } else if bearish {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
