use thiserror::Error;

/// Errors raised at the configuration boundary.
///
/// Per-bar numeric edge cases never surface as errors; they resolve to
/// `0.0` inside the computation that detects them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Averaging method name not in [`MovingAverageMethod`](crate::MovingAverageMethod).
    #[error("unknown averaging method: {0}")]
    UnknownMethod(String),

    /// Lookback length below 1.
    #[error("invalid length {0}: must be at least 1")]
    InvalidLength(i64),

    /// A series does not line up bar-for-bar with the input it derives from.
    #[error("series `{name}` has {actual} bars, expected {expected}")]
    MisalignedSeries {
        /// Series name.
        name: String,
        /// Bar count of the input series.
        expected: usize,
        /// Bar count of the offending series.
        actual: usize,
    },
}

impl Error {
    #[must_use]
    pub fn misaligned(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::MisalignedSeries {
            name: name.into(),
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnknownMethod("foo".into()).to_string(),
            "unknown averaging method: foo"
        );
        assert_eq!(
            Error::InvalidLength(0).to_string(),
            "invalid length 0: must be at least 1"
        );
        assert_eq!(
            Error::misaligned("close", 10, 9).to_string(),
            "series `close` has 9 bars, expected 10"
        );
    }
}
