//! Moving-average engine.
//!
//! [`compute_moving_average`] dispatches a [`MovingAverageMethod`] to its
//! recurrence. Every recurrence is a strictly causal single forward pass:
//! output `i` depends only on inputs `0..=i` and outputs `0..i`. Lagged
//! reads before the start of a series are `0.0`, and the recursive families
//! start from a previous output of `0.0`, which gives them a warm-up
//! transient over the first bars.

mod adaptive;
mod exponential;
mod filter;
mod regression;
mod simple;
mod weighted;

use std::num::NonZero;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use tracing::{debug, trace};

use crate::{Error, Series};

/// Recurrence signature shared by every family. `length` is at least 1.
type Recurrence = fn(&[f64], usize) -> Series;

/// Averaging method selector.
///
/// A closed set: each variant maps to exactly one recurrence. Names parse
/// case-insensitively from the full name (`ExponentialMovingAverage`), the
/// variant name (`Exponential`) or a short alias (`ema`).
///
/// ```
/// use ta_series::MovingAverageMethod;
///
/// let method: MovingAverageMethod = "wilder".parse().unwrap();
/// assert_eq!(method, MovingAverageMethod::WildersSmoothing);
/// assert_eq!(method.to_string(), "WildersSmoothingMethod");
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum MovingAverageMethod {
    /// Arithmetic mean of the trailing window.
    #[strum(to_string = "SimpleMovingAverage", serialize = "Simple", serialize = "sma")]
    Simple,
    /// `out = prev + α(x - prev)`, `α = 2 / (length + 1)`.
    #[strum(
        to_string = "ExponentialMovingAverage",
        serialize = "Exponential",
        serialize = "ema"
    )]
    Exponential,
    /// Exponential recurrence with `α = 1 / length`.
    #[strum(
        to_string = "WildersSmoothingMethod",
        serialize = "WildersSmoothing",
        serialize = "wilder",
        serialize = "rma"
    )]
    WildersSmoothing,
    /// Linear weights, newest heaviest.
    #[strum(
        to_string = "WeightedMovingAverage",
        serialize = "Weighted",
        serialize = "wma"
    )]
    Weighted,
    /// Simple average of the simple average.
    #[strum(
        to_string = "TriangularMovingAverage",
        serialize = "Triangular",
        serialize = "tma"
    )]
    Triangular,
    /// `2·EMA - EMA(EMA)`.
    #[strum(
        to_string = "DoubleExponentialMovingAverage",
        serialize = "DoubleExponential",
        serialize = "dema"
    )]
    DoubleExponential,
    /// `3·EMA - 3·EMA² + EMA³`.
    #[strum(
        to_string = "TripleExponentialMovingAverage",
        serialize = "TripleExponential",
        serialize = "tema"
    )]
    TripleExponential,
    /// `WMA(2·WMA(n/2) - WMA(n), √n)`.
    #[strum(to_string = "HullMovingAverage", serialize = "Hull", serialize = "hma")]
    Hull,
    /// Hull construction over exponential averages.
    #[strum(
        to_string = "ExponentialHullMovingAverage",
        serialize = "ExponentialHull",
        serialize = "ehma"
    )]
    ExponentialHull,
    /// EMA of the de-lagged input `2x - x[(n-1)/2]`.
    #[strum(
        to_string = "ZeroLagExponentialMovingAverage",
        serialize = "ZeroLagExponential",
        serialize = "zlema"
    )]
    ZeroLagExponential,
    /// Efficiency-ratio adaptive smoothing.
    #[strum(
        to_string = "KaufmanAdaptiveMovingAverage",
        serialize = "KaufmanAdaptive",
        serialize = "kama"
    )]
    KaufmanAdaptive,
    /// Six chained EMAs with a 0.7 volume factor.
    #[strum(
        to_string = "TillsonT3MovingAverage",
        serialize = "TillsonT3",
        serialize = "t3"
    )]
    TillsonT3,
    /// Linear-regression end point.
    #[strum(
        to_string = "LeastSquaresMovingAverage",
        serialize = "LeastSquares",
        serialize = "lsma"
    )]
    LeastSquares,
    /// Linear-regression projection one bar ahead.
    #[strum(
        to_string = "TimeSeriesForecast",
        serialize = "tsf"
    )]
    TimeSeriesForecast,
    /// Gaussian-weighted window.
    #[strum(
        to_string = "ArnaudLegouxMovingAverage",
        serialize = "ArnaudLegoux",
        serialize = "alma"
    )]
    ArnaudLegoux,
    /// Half-sine weighted window.
    #[strum(
        to_string = "SineWeightedMovingAverage",
        serialize = "SineWeighted",
        serialize = "swma"
    )]
    SineWeighted,
    /// Speed-adjusted recurrence, seeded from the first input.
    #[strum(
        to_string = "McGinleyDynamicIndicator",
        serialize = "McGinleyDynamic",
        serialize = "mcginley"
    )]
    McGinleyDynamic,
    /// EMA scaled by the absolute Chande momentum.
    #[strum(
        to_string = "VariableIndexDynamicAverage",
        serialize = "VariableIndexDynamic",
        serialize = "vidya"
    )]
    VariableIndexDynamic,
    /// Ehlers two-pole super smoother.
    #[strum(
        to_string = "EhlersSuperSmootherFilter",
        serialize = "EhlersSuperSmoother",
        serialize = "supersmoother"
    )]
    EhlersSuperSmoother,
    /// EMA with a curvature penalty.
    #[strum(
        to_string = "RegularizedExponentialMovingAverage",
        serialize = "RegularizedExponential",
        serialize = "rema"
    )]
    RegularizedExponential,
}

impl MovingAverageMethod {
    /// Parses a method name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownMethod`] if `name` matches no variant or alias.
    pub fn parse(name: &str) -> Result<Self, Error> {
        name.parse()
            .map_err(|_| Error::UnknownMethod(name.to_owned()))
    }

    /// Runs this method over `series`. See [`compute_moving_average`].
    #[must_use]
    pub fn compute(self, length: NonZero<usize>, series: &[f64]) -> Series {
        trace!(method = %self, length = length.get(), bars = series.len(), "computing moving average");
        (self.recurrence())(series, length.get())
    }

    fn recurrence(self) -> Recurrence {
        match self {
            Self::Simple => simple::sma,
            Self::Exponential => exponential::ema,
            Self::WildersSmoothing => exponential::wilder,
            Self::Weighted => weighted::wma,
            Self::Triangular => simple::triangular,
            Self::DoubleExponential => exponential::double,
            Self::TripleExponential => exponential::triple,
            Self::Hull => weighted::hull,
            Self::ExponentialHull => weighted::exponential_hull,
            Self::ZeroLagExponential => exponential::zero_lag,
            Self::KaufmanAdaptive => adaptive::kaufman,
            Self::TillsonT3 => exponential::tillson_t3,
            Self::LeastSquares => regression::least_squares,
            Self::TimeSeriesForecast => regression::forecast,
            Self::ArnaudLegoux => weighted::arnaud_legoux,
            Self::SineWeighted => weighted::sine,
            Self::McGinleyDynamic => exponential::mcginley,
            Self::VariableIndexDynamic => adaptive::vidya,
            Self::EhlersSuperSmoother => filter::super_smoother,
            Self::RegularizedExponential => exponential::regularized,
        }
    }
}

/// Computes a moving average of `series`.
///
/// The output has one value per input bar, each rounded on append.
///
/// ```
/// use std::num::NonZero;
/// use ta_series::{MovingAverageMethod, compute_moving_average};
///
/// let ema = compute_moving_average(
///     MovingAverageMethod::Exponential,
///     NonZero::new(2).unwrap(),
///     &[10.0, 10.0, 10.0],
/// );
///
/// // Zero-seeded: 0 + 2/3 * (10 - 0), then 6.6667 + 2/3 * (10 - 6.6667)
/// assert_eq!(&ema[..2], &[6.6667, 8.8889]);
/// ```
#[must_use]
pub fn compute_moving_average(
    method: MovingAverageMethod,
    length: NonZero<usize>,
    series: &[f64],
) -> Series {
    method.compute(length, series)
}

/// Derived sub-lengths (`n / 2`, `√n`) never drop below one bar.
pub(crate) fn clamp_length(length: usize) -> usize {
    if length == 0 {
        debug!(requested = length, "derived length clamped to 1");
        1
    } else {
        length
    }
}
