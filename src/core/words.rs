//! Word frequency and word-cloud text.
//!
//! Both functions skip system lines and omitted-media placeholders, apply
//! the sender and sentiment filters, lowercase the remaining bodies, split
//! them on whitespace and drop stop words.
//!
//! # Example
//!
//! ```rust
//! use chatvibe::config::{AnalysisConfig, StopWordMatch};
//! use chatvibe::core::filter::SenderFilter;
//! use chatvibe::core::words::{StopWords, most_common_words};
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use chatvibe::sentiment::{Polarity, Sentiment, tag};
//!
//! let messages = WhatsAppParser::new().parse_str(
//!     "12/5/23, 14:03 - Alice: the pizza is great\n12/5/23, 14:04 - Bob: Pizza again\n",
//! )?;
//! let records = tag(messages, &|_: &str| Polarity::new(0.0, 1.0, 0.0))?;
//! let stop = StopWords::from_text("the is again", StopWordMatch::Exact);
//!
//! let words = most_common_words(
//!     &SenderFilter::Overall,
//!     &records,
//!     Sentiment::Neutral,
//!     &stop,
//!     &AnalysisConfig::default(),
//! );
//! let words = words.ready().unwrap();
//! assert_eq!(words.get("pizza"), 2);
//! assert_eq!(words.get("the"), 0);
//! # Ok::<(), chatvibe::ChatvibeError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::{AnalysisConfig, StopWordMatch};
use crate::core::filter::{SenderFilter, select};
use crate::core::models::{Aggregate, Tally};
use crate::error::Result;
use crate::sentiment::{Sentiment, TaggedMessage};

/// Words excluded from frequency counts.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    raw: String,
    words: HashSet<String>,
    mode: StopWordMatch,
}

impl StopWords {
    /// A list that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the list from flat text, one or more words per line.
    pub fn from_text(text: &str, mode: StopWordMatch) -> Self {
        let words = text
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        Self {
            raw: text.to_string(),
            words,
            mode,
        }
    }

    /// Reads a stop-word file.
    pub fn load(path: impl AsRef<Path>, mode: StopWordMatch) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let stop = Self::from_text(&text, mode);
        tracing::debug!(path = %path.display(), words = stop.len(), "loaded stop words");
        Ok(stop)
    }

    pub fn mode(&self) -> StopWordMatch {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` (already lowercased) is excluded.
    ///
    /// In [`StopWordMatch::Substring`] mode any word occurring anywhere in
    /// the list text as written is excluded, so `"he"` is dropped when the
    /// list holds `"the"`. That test is case-sensitive.
    pub fn contains(&self, word: &str) -> bool {
        match self.mode {
            StopWordMatch::Exact => self.words.contains(word),
            StopWordMatch::Substring => self.raw.contains(word),
        }
    }
}

/// Lowercased, stop-word-free words of every eligible message, in order.
fn kept_words<'a>(
    filter: &'a SenderFilter,
    records: &'a [TaggedMessage],
    label: Sentiment,
    stop_words: &'a StopWords,
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = String> + 'a {
    select(records, filter, label)
        .filter(move |m| !m.is_notification() && m.body() != config.media_placeholder)
        .flat_map(|m| {
            m.body()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |w| !stop_words.contains(w))
}

/// The `config.top_words` most frequent words, highest first.
pub fn most_common_words(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> Aggregate<Tally> {
    let mut tally = Tally::new();
    for word in kept_words(filter, records, label, stop_words, config) {
        tally.increment(&word);
    }
    Aggregate::non_empty(
        tally.sorted_by_count().truncated(config.top_words),
        Tally::is_empty,
    )
}

/// Every kept word joined by single spaces, ready for a word-cloud
/// renderer.
pub fn wordcloud_text(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> Aggregate<String> {
    let text = kept_words(filter, records, label, stop_words, config)
        .collect::<Vec<_>>()
        .join(" ");
    Aggregate::non_empty(text, String::is_empty)
}
