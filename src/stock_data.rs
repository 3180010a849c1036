use std::collections::BTreeMap;

use crate::{Error, Ohlcv, Price, PriceSource, Series, Signal};

/// Historical OHLCV series plus the outputs computed from them.
///
/// The input fields are fixed at construction and always share one length.
/// Named output series and the per-bar signal series are checked against
/// that length on insertion so that index `i` means the same bar everywhere.
///
/// # Example
///
/// ```
/// use std::num::NonZero;
/// use ta_series::{MovingAverageMethod, PriceSource, StockData, compute_moving_average};
///
/// let mut data = StockData::new(
///     vec![1.0, 2.0, 3.0],
///     vec![1.5, 2.5, 3.5],
///     vec![0.5, 1.5, 2.5],
///     vec![1.0, 2.0, 3.0],
///     vec![10.0, 10.0, 10.0],
/// )
/// .unwrap();
///
/// let close = data.series(PriceSource::Close);
/// let sma = compute_moving_average(MovingAverageMethod::Simple, NonZero::new(2).unwrap(), &close);
/// data.insert_output("Sma", sma).unwrap();
///
/// assert_eq!(data.output("Sma").unwrap().as_slice(), &[1.0, 1.5, 2.5]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StockData {
    open: Vec<Price>,
    high: Vec<Price>,
    low: Vec<Price>,
    close: Vec<Price>,
    volume: Vec<f64>,
    outputs: BTreeMap<String, Series>,
    signals: Vec<Signal>,
}

impl StockData {
    /// Builds a container from per-field series.
    ///
    /// # Errors
    ///
    /// [`Error::MisalignedSeries`] if any field differs in length from `close`.
    pub fn new(
        open: Vec<Price>,
        high: Vec<Price>,
        low: Vec<Price>,
        close: Vec<Price>,
        volume: Vec<f64>,
    ) -> Result<Self, Error> {
        let expected = close.len();

        for (name, field) in [
            ("open", &open),
            ("high", &high),
            ("low", &low),
            ("volume", &volume),
        ] {
            if field.len() != expected {
                return Err(Error::misaligned(name, expected, field.len()));
            }
        }

        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
            outputs: BTreeMap::new(),
            signals: Vec::new(),
        })
    }

    /// Builds a container from time-ordered bars.
    #[must_use]
    pub fn from_bars<'a, B>(bars: impl IntoIterator<Item = &'a B>) -> Self
    where
        B: Ohlcv + 'a,
    {
        let mut data = Self::default();

        for bar in bars {
            data.open.push(bar.open());
            data.high.push(bar.high());
            data.low.push(bar.low());
            data.close.push(bar.close());
            data.volume.push(bar.volume());
        }

        data
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    #[must_use]
    pub fn open(&self) -> &[Price] {
        &self.open
    }

    #[must_use]
    pub fn high(&self) -> &[Price] {
        &self.high
    }

    #[must_use]
    pub fn low(&self) -> &[Price] {
        &self.low
    }

    #[must_use]
    pub fn close(&self) -> &[Price] {
        &self.close
    }

    #[must_use]
    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    /// Extracts an input series. See [`PriceSource::extract`].
    #[must_use]
    pub fn series(&self, source: PriceSource) -> Series {
        source.extract(self)
    }

    /// Stores a named output series, replacing any previous one.
    ///
    /// # Errors
    ///
    /// [`Error::MisalignedSeries`] if `series` is not one value per bar.
    pub fn insert_output(&mut self, name: impl Into<String>, series: Series) -> Result<(), Error> {
        let name = name.into();
        if series.len() != self.len() {
            return Err(Error::misaligned(name, self.len(), series.len()));
        }

        self.outputs.insert(name, series);
        Ok(())
    }

    #[must_use]
    pub fn output(&self, name: &str) -> Option<&Series> {
        self.outputs.get(name)
    }

    /// Named output series in name order.
    pub fn outputs(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.outputs.iter().map(|(name, series)| (name.as_str(), series))
    }

    /// Stores the per-bar signal series.
    ///
    /// # Errors
    ///
    /// [`Error::MisalignedSeries`] if `signals` is not one signal per bar.
    pub fn set_signals(&mut self, signals: Vec<Signal>) -> Result<(), Error> {
        if signals.len() != self.len() {
            return Err(Error::misaligned("signals", self.len(), signals.len()));
        }

        self.signals = signals;
        Ok(())
    }

    #[must_use]
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }
}
