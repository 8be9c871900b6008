//! Unified error types for chatvibe.
//!
//! This module provides a single [`ChatvibeError`] enum that covers all error
//! cases in the library. Parsing and tagging are all-or-nothing: any error
//! aborts the whole transcript and no partial record set is returned.
//!
//! Aggregations never fail. An aggregation over an empty bucket returns
//! [`Aggregate::Empty`](crate::core::Aggregate::Empty) instead of an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatvibe operations.
///
/// # Example
///
/// ```rust
/// use chatvibe::error::Result;
/// use chatvibe::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatvibeError>;

/// The error type for all chatvibe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatvibeError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or stop-word file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript timestamps match neither supported date order.
    ///
    /// Raised when day-first and month-first parsing both fail for at
    /// least one stamp, or when a forced date order does not fit the file.
    #[error("Unrecognized {format} date format{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Format {
        /// The export format being parsed
        format: &'static str,
        /// Description of the offending stamp
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The sentiment scorer failed for a message.
    ///
    /// Tagging stops at the first failure.
    #[error("Sentiment scorer failed: {message}")]
    Scorer {
        /// Description of what went wrong
        message: String,
    },

    /// An output format or file extension is not supported.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatvibeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatvibeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatvibeError {
    /// Creates a date format error for a WhatsApp transcript.
    pub fn whatsapp_format(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatvibeError::Format {
            format: "WhatsApp TXT",
            message: message.into(),
            path,
        }
    }

    /// Creates a scorer error.
    pub fn scorer(message: impl Into<String>) -> Self {
        ChatvibeError::Scorer {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatvibeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches a file path to a [`Format`](ChatvibeError::Format) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ChatvibeError::Format {
                format, message, ..
            } => ChatvibeError::Format {
                format,
                message,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatvibeError::Io(_))
    }

    /// Returns `true` if this is a date format error.
    pub fn is_format(&self) -> bool {
        matches!(self, ChatvibeError::Format { .. })
    }

    /// Returns `true` if this is a scorer error.
    pub fn is_scorer(&self) -> bool {
        matches!(self, ChatvibeError::Scorer { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatvibeError::InvalidFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatvibeError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_format_error_with_path() {
        let err = ChatvibeError::whatsapp_format(
            "stamp '31/31/23, 10:00 - ' fits neither date order",
            Some(PathBuf::from("/path/to/chat.txt")),
        );
        let display = err.to_string();
        assert!(display.contains("WhatsApp TXT"));
        assert!(display.contains("/path/to/chat.txt"));
        assert!(display.contains("31/31/23"));
    }

    #[test]
    fn test_format_error_without_path() {
        let err = ChatvibeError::whatsapp_format("bad stamp", None);
        let display = err.to_string();
        assert!(display.contains("WhatsApp TXT"));
        assert!(!display.contains("file:"));
    }

    #[test]
    fn test_with_path_only_touches_format_errors() {
        let err = ChatvibeError::whatsapp_format("bad stamp", None).with_path("chat.txt");
        assert!(err.to_string().contains("(file: chat.txt)"));

        let err = ChatvibeError::scorer("boom").with_path("chat.txt");
        assert!(!err.to_string().contains("chat.txt"));
    }

    #[test]
    fn test_scorer_display() {
        let err = ChatvibeError::scorer("lexicon unavailable");
        let display = err.to_string();
        assert!(display.contains("Sentiment scorer failed"));
        assert!(display.contains("lexicon unavailable"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatvibeError::invalid_format("output", "unknown extension 'xml'");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains("xml"));
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatvibeError::Utf8 {
            context: "reading file".into(),
            source: utf8_err,
        };
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("reading file"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatvibeError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatvibeError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_format());
        assert!(!io_err.is_scorer());
        assert!(!io_err.is_invalid_format());

        let fmt_err = ChatvibeError::whatsapp_format("bad", None);
        assert!(fmt_err.is_format());
        assert!(!fmt_err.is_io());

        assert!(ChatvibeError::scorer("x").is_scorer());
        assert!(ChatvibeError::invalid_format("output", "x").is_invalid_format());
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatvibeError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatvibeError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err: ChatvibeError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatvibeError::scorer("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Scorer"));
    }
}
