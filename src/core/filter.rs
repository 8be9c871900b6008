//! Sender and sentiment selection shared by every aggregation.
//!
//! | Filter | Value | Selects |
//! |--------|-------|---------|
//! | Sender | [`SenderFilter::Overall`] | every participant |
//! | Sender | [`SenderFilter::Sender`] | one participant, exact name |
//! | Label | [`Sentiment`] | messages carrying that label |
//!
//! # Examples
//!
//! ```
//! use chatvibe::core::filter::SenderFilter;
//!
//! assert_eq!(SenderFilter::from("Overall"), SenderFilter::Overall);
//! assert_eq!(SenderFilter::from("Alice"), SenderFilter::Sender("Alice".into()));
//! ```

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::sentiment::{Sentiment, TaggedMessage};

/// Restricts an aggregation to one participant or to all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SenderFilter {
    #[default]
    Overall,
    Sender(String),
}

impl SenderFilter {
    /// Name that selects every participant.
    pub const OVERALL: &'static str = "Overall";

    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }

    /// Returns `true` if `msg` passes the filter. Sender names match exactly.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => msg.sender() == name,
        }
    }
}

impl From<&str> for SenderFilter {
    fn from(name: &str) -> Self {
        if name == Self::OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(name.to_string())
        }
    }
}

impl From<String> for SenderFilter {
    fn from(name: String) -> Self {
        if name == Self::OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(name)
        }
    }
}

impl From<SenderFilter> for String {
    fn from(filter: SenderFilter) -> String {
        match filter {
            SenderFilter::Overall => SenderFilter::OVERALL.to_string(),
            SenderFilter::Sender(name) => name,
        }
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderFilter::Overall => write!(f, "{}", Self::OVERALL),
            SenderFilter::Sender(name) => write!(f, "{}", name),
        }
    }
}

/// Records passing the sender filter, any label.
pub fn by_sender<'a>(
    records: &'a [TaggedMessage],
    filter: &'a SenderFilter,
) -> impl Iterator<Item = &'a TaggedMessage> + 'a {
    records.iter().filter(move |m| filter.matches(m))
}

/// Records passing the sender filter and carrying `label`.
pub fn select<'a>(
    records: &'a [TaggedMessage],
    filter: &'a SenderFilter,
    label: Sentiment,
) -> impl Iterator<Item = &'a TaggedMessage> + 'a {
    by_sender(records, filter).filter(move |m| m.label() == label)
}

/// Selector choices for a dashboard: `Overall` followed by every sender,
/// sorted and deduplicated.
pub fn sender_choices(records: &[TaggedMessage]) -> Vec<String> {
    let mut senders: Vec<String> = records.iter().map(|m| m.sender().to_string()).collect();
    senders.sort();
    senders.dedup();
    senders.insert(0, SenderFilter::OVERALL.to_string());
    senders
}
