//! # Chatvibe
//!
//! A Rust library for turning exported WhatsApp chat transcripts into
//! sentiment-tagged records and sentiment-bucketed statistics.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//! - **Parse** - [`WhatsAppParser`](parsers::WhatsAppParser) splits a transcript
//!   into [`Message`] records with calendar fields derived once
//! - **Tag** - [`sentiment::tag`] scores every message with a
//!   [`SentimentScorer`](sentiment::SentimentScorer) and attaches a
//!   positive / neutral / negative label
//! - **Aggregate** - the functions in [`core`] count activity by weekday,
//!   month, hour and date, rank senders and words, all per label and per
//!   sender
//!
//! Aggregations are pure views over the record set. A bucket with no
//! matching messages comes back as [`Aggregate::Empty`](core::Aggregate::Empty).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatvibe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! 12/5/23, 14:03 - Alice: good morning!
//! 12/5/23, 14:05 - Bob left
//! 12/5/23, 14:07 - Carol: morning, lovely day
//! ";
//!     let messages = WhatsAppParser::new().parse_str(transcript)?;
//!
//!     // Any Fn(&str) -> Polarity works as a scorer; VaderScorer is the default one
//!     let scorer = |text: &str| {
//!         if text.contains("good") || text.contains("lovely") {
//!             Polarity::new(0.6, 0.4, 0.0)
//!         } else {
//!             Polarity::new(0.0, 1.0, 0.0)
//!         }
//!     };
//!     let records = tag(messages, &scorer)?;
//!
//!     let shares = percentage(&SenderFilter::Overall, &records, Sentiment::Positive);
//!     assert_eq!(shares.ready().map(|s| s.len()), Some(2));
//!
//!     let report = Report::build(
//!         &records,
//!         &SenderFilter::Overall,
//!         &StopWords::empty(),
//!         &AnalysisConfig::default(),
//!     );
//!     assert_eq!(report.total_messages, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsers`] - [`ChatParser`](parsers::ChatParser) trait and the WhatsApp parser
//! - [`message`] - [`Message`] records and their [`Calendar`](message::Calendar)
//! - [`sentiment`] - labels, weights, scorers and [`tag`](sentiment::tag)
//! - [`core`] - filters, aggregations, [`Report`](core::Report) and output writers
//! - [`config`] - [`WhatsAppConfig`](config::WhatsAppConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`ChatvibeError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parsers;
pub mod sentiment;

// Re-export the main types at the crate root for convenience
pub use error::{ChatvibeError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatvibe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatvibeError, Result};

    pub use crate::config::{
        AnalysisConfig, DateOrder, MonthlyTimelineMode, StopWordMatch, WhatsAppConfig,
    };

    pub use crate::parsers::{ChatParser, WhatsAppParser};

    pub use crate::sentiment::{Polarity, Sentiment, SentimentScorer, TaggedMessage, tag};
    #[cfg(feature = "vader")]
    pub use crate::sentiment::VaderScorer;

    pub use crate::core::{
        Aggregate, OutputConfig, Report, SenderFilter, StopWords, Tally, activity_heatmap,
        daily_timeline, month_activity, monthly_timeline, most_common_words, percentage,
        top_senders, weekday_activity, wordcloud_text,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
