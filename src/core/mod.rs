//! Aggregations over tagged records, plus record output.
//!
//! This module contains:
//! - [`filter`] - Sender and sentiment selection
//! - [`activity`] - Weekday, month, heatmap and timeline counts
//! - [`contribution`] - Sender shares and top senders
//! - [`words`] - Word frequency, word-cloud text and stop words
//! - [`report`] - Every aggregation for one sender, bundled
//! - [`models`] - Shared result types and output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatvibe::core::{
//!     Aggregate, Report, SenderFilter, StopWords,
//!     activity_heatmap, percentage, most_common_words,
//! };
//! ```

pub mod activity;
pub mod contribution;
pub mod filter;
pub mod models;
pub mod output;
pub mod report;
pub mod words;

pub use activity::{
    DailyCount, Heatmap, MonthlyCount, activity_heatmap, daily_timeline, month_activity,
    monthly_timeline, weekday_activity,
};
pub use contribution::{Share, percentage, top_senders};
pub use filter::{SenderFilter, sender_choices};
pub use models::{Aggregate, Count, OutputConfig, Tally};
pub use report::{Contribution, LabelSection, Report};
pub use words::{StopWords, most_common_words, wordcloud_text};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
