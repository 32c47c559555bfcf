//! Error types for tickwork

use thiserror::Error;

/// The main error type for tickwork operations
#[derive(Debug, Error)]
pub enum TickworkError {
    #[error("Clock unavailable: {0}")]
    ClockUnavailable(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Informational: bounded output was cut to fit its buffer.
    /// `text` holds the truncated result, `len` the untruncated byte length.
    #[error("Formatted output truncated from {len} to {} bytes", .text.len())]
    FormatTruncated { text: String, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),
}

impl TickworkError {
    /// Whether the error is informational only and the caller may keep the output
    pub fn is_informational(&self) -> bool {
        matches!(self, TickworkError::FormatTruncated { .. })
    }
}

/// Result type alias for tickwork operations
pub type Result<T> = std::result::Result<T, TickworkError>;

impl From<toml::de::Error> for TickworkError {
    fn from(err: toml::de::Error) -> Self {
        TickworkError::ConfigParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_is_informational() {
        let err = TickworkError::FormatTruncated {
            text: "abc".into(),
            len: 10,
        };
        assert!(err.is_informational());
        assert_eq!(err.to_string(), "Formatted output truncated from 10 to 3 bytes");
    }

    #[test]
    fn test_clock_error_is_fatal() {
        let err = TickworkError::ClockUnavailable("counter query failed".into());
        assert!(!err.is_informational());
        assert_eq!(err.to_string(), "Clock unavailable: counter query failed");
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: TickworkError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, TickworkError::ConfigParseError(_)));
    }
}
