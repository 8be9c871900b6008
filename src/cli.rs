//! Command-line interface definition using clap.
//!
//! [`Args`] maps one-to-one onto the library configuration types:
//! [`Args::whatsapp_config`], [`Args::analysis_config`] and
//! [`Args::sender_filter`] build what the pipeline needs.
//!
//! ```rust
//! use chatvibe::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatvibe", "chat.txt", "-u", "Alice", "--top-words", "5"]);
//! assert_eq!(args.analysis_config().top_words, 5);
//! assert_eq!(args.sender_filter().to_string(), "Alice");
//! ```

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{
    AnalysisConfig, DateOrder, MonthlyTimelineMode, StopWordMatch, WhatsAppConfig,
};
use crate::core::filter::SenderFilter;

/// Sentiment-bucketed activity, contributor and word statistics
/// for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatvibe")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatvibe chat.txt
    chatvibe chat.txt -u Alice -o alice.json
    chatvibe chat.txt --records tagged.csv --scores
    chatvibe chat.txt --stop-words stop_hinglish.txt --substring-stop-words
    chatvibe chat.txt --date-order month-first -vv")]
pub struct Args {
    /// Path to the exported WhatsApp transcript (.txt)
    pub input: String,

    /// Analyse one participant instead of everyone
    #[arg(short, long, value_name = "USER", default_value = "Overall")]
    pub user: String,

    /// Path to the report file (JSON)
    #[arg(short, long, default_value = "chatvibe_report.json")]
    pub output: String,

    /// Also write the tagged records (.csv, .json or .jsonl)
    #[arg(long, value_name = "PATH")]
    pub records: Option<String>,

    /// Include sentiment weights in the records file
    #[arg(long)]
    pub scores: bool,

    /// Include calendar columns in the records file
    #[arg(long)]
    pub calendar: bool,

    /// Stop-word list, whitespace separated
    #[arg(long, value_name = "PATH")]
    pub stop_words: Option<String>,

    /// Day/month order of the stamps
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Keep group notifications in the record set
    #[arg(long)]
    pub keep_system: bool,

    /// Drop any word found inside the stop-word text, not just exact matches
    #[arg(long)]
    pub substring_stop_words: bool,

    /// Count the opposite label in the monthly timeline
    #[arg(long)]
    pub inverted_monthly: bool,

    /// Number of most common words per label
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of top senders per label
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_senders: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Stamp date order as a CLI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateOrderArg {
    Auto,
    #[value(alias = "dmy")]
    DayFirst,
    #[value(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> DateOrder {
        match arg {
            DateOrderArg::Auto => DateOrder::Auto,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

impl Args {
    pub fn whatsapp_config(&self) -> WhatsAppConfig {
        WhatsAppConfig::new()
            .with_date_order(self.date_order.into())
            .with_skip_system_messages(!self.keep_system)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        let stop_word_match = if self.substring_stop_words {
            StopWordMatch::Substring
        } else {
            StopWordMatch::Exact
        };
        let monthly = if self.inverted_monthly {
            MonthlyTimelineMode::Inverted
        } else {
            MonthlyTimelineMode::Matching
        };

        AnalysisConfig::new()
            .with_top_words(self.top_words)
            .with_top_senders(self.top_senders)
            .with_stop_word_match(stop_word_match)
            .with_monthly_timeline(monthly)
    }

    pub fn sender_filter(&self) -> SenderFilter {
        SenderFilter::from(self.user.as_str())
    }

    /// Default log filter for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
