use std::{fmt::Display, num::NonZero};

use crate::{Error, MovingAverageMethod, Series};

/// Method and lookback for one moving-average computation.
///
/// A value type: cheap to copy, compare and hash, so indicator code can keep
/// its averaging parameters in a field and reuse them across series.
///
/// # Example
///
/// ```rust
/// use ta_series::{AverageConfig, MovingAverageMethod};
/// use std::num::NonZero;
///
/// let config = AverageConfig::builder()
///     .method(MovingAverageMethod::Exponential)
///     .length(NonZero::new(20).unwrap())
///     .build();
///
/// assert_eq!(config.length(), 20);
/// assert_eq!(config.to_string(), "AverageConfig(ExponentialMovingAverage, 20)");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct AverageConfig {
    method: MovingAverageMethod,
    length: NonZero<usize>,
}

impl AverageConfig {
    #[must_use]
    pub fn new(method: MovingAverageMethod, length: NonZero<usize>) -> Self {
        Self { method, length }
    }

    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> AverageConfigBuilder {
        AverageConfigBuilder::new()
    }

    /// Simple moving average over `length` bars.
    #[must_use]
    pub fn simple(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    /// Validates untyped parameters, e.g. from a settings file.
    ///
    /// ```rust
    /// use ta_series::{AverageConfig, Error, MovingAverageMethod};
    ///
    /// let config = AverageConfig::parse("hma", 9).unwrap();
    /// assert_eq!(config.method(), MovingAverageMethod::Hull);
    ///
    /// assert_eq!(AverageConfig::parse("hma", 0), Err(Error::InvalidLength(0)));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] if `length < 1`, [`Error::UnknownMethod`] if
    /// `method` names no averaging method.
    pub fn parse(method: &str, length: i64) -> Result<Self, Error> {
        let length = usize::try_from(length)
            .ok()
            .and_then(NonZero::new)
            .ok_or(Error::InvalidLength(length))?;

        Ok(Self::new(MovingAverageMethod::parse(method)?, length))
    }

    #[inline]
    #[must_use]
    pub fn method(&self) -> MovingAverageMethod {
        self.method
    }

    /// Window length (number of bars).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Runs the configured average over `series`.
    #[must_use]
    pub fn compute(&self, series: &[f64]) -> Series {
        self.method.compute(self.length, series)
    }
}

impl Display for AverageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AverageConfig({}, {})", self.method, self.length)
    }
}

/// Builder for [`AverageConfig`].
///
/// Defaults: method = [`MovingAverageMethod::Simple`].
/// Length must be set before calling [`build`](AverageConfigBuilder::build).
#[derive(Debug)]
pub struct AverageConfigBuilder {
    method: MovingAverageMethod,
    length: Option<NonZero<usize>>,
}

impl AverageConfigBuilder {
    fn new() -> Self {
        Self {
            method: MovingAverageMethod::Simple,
            length: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn method(mut self, method: MovingAverageMethod) -> Self {
        self.method = method;
        self
    }

    #[inline]
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length.replace(length);
        self
    }

    /// Builds the config.
    ///
    /// # Panics
    ///
    /// If no length was set.
    #[inline]
    #[must_use]
    pub fn build(self) -> AverageConfig {
        AverageConfig {
            method: self.method,
            length: self.length.expect("length is required"),
        }
    }
}
