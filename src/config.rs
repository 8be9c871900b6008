//! Configuration types for parsing and analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`WhatsAppConfig`] - transcript parser settings
//! - [`AnalysisConfig`] - aggregation limits and compatibility switches
//!
//! # Example
//!
//! ```rust
//! use chatvibe::config::{AnalysisConfig, DateOrder, WhatsAppConfig};
//! use chatvibe::parsers::WhatsAppParser;
//!
//! let parser = WhatsAppParser::with_config(
//!     WhatsAppConfig::new().with_date_order(DateOrder::MonthFirst),
//! );
//!
//! let analysis = AnalysisConfig::new().with_top_words(10);
//! ```

use serde::{Deserialize, Serialize};

/// Order of the day and month fields in transcript stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Try day-first for the whole file, fall back to month-first.
    #[default]
    Auto,
    /// `D/M/YY, H:MM - `
    DayFirst,
    /// `M/D/YY, H:MM - `
    MonthFirst,
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::Auto => write!(f, "auto"),
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DateOrder::Auto),
            "day-first" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: auto, day-first, month-first",
                s
            )),
        }
    }
}

/// Configuration for WhatsApp transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatvibe::config::WhatsAppConfig;
///
/// let config = WhatsAppConfig::new()
///     .with_skip_system_messages(false);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Stamp date order (default: auto-detect, day-first preferred)
    pub date_order: DateOrder,

    /// Drop `group_notification` records after parsing (default: true)
    pub skip_system_messages: bool,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::Auto,
            skip_system_messages: true,
        }
    }
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces a date order instead of auto-detection.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets whether to drop system lines.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// How stop words are matched against message words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordMatch {
    /// A word is dropped when it equals one of the listed stop words.
    #[default]
    Exact,
    /// A word is dropped when it occurs anywhere in the stop-word text as
    /// written, so `"he"` is dropped by a list containing `"the"`. The list
    /// text is not lowercased in this mode.
    Substring,
}

/// Which sentiment bucket the monthly timeline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyTimelineMode {
    /// Count records carrying the requested label.
    #[default]
    Matching,
    /// Count records carrying the opposite label (+1 ↔ −1, 0 unchanged),
    /// reproducing the historical dashboard.
    Inverted,
}

/// Configuration for the aggregation functions.
///
/// # Example
///
/// ```rust
/// use chatvibe::config::{AnalysisConfig, StopWordMatch};
///
/// let config = AnalysisConfig::new()
///     .with_top_senders(5)
///     .with_stop_word_match(StopWordMatch::Substring);
/// assert_eq!(config.top_words, 20);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of words returned by the frequency table (default: 20)
    pub top_words: usize,

    /// Number of senders returned per label (default: 10)
    pub top_senders: usize,

    /// Body treated as an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Stop-word matching rule (default: exact)
    pub stop_word_match: StopWordMatch,

    /// Monthly timeline filtering (default: matching)
    pub monthly_timeline: MonthlyTimelineMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_senders: 10,
            media_placeholder: crate::message::MEDIA_OMITTED.to_string(),
            stop_word_match: StopWordMatch::Exact,
            monthly_timeline: MonthlyTimelineMode::Matching,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_stop_word_match(mut self, mode: StopWordMatch) -> Self {
        self.stop_word_match = mode;
        self
    }

    #[must_use]
    pub fn with_monthly_timeline(mut self, mode: MonthlyTimelineMode) -> Self {
        self.monthly_timeline = mode;
        self
    }
}
