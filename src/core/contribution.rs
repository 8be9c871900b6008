//! Per-sender contribution within a sentiment bucket.

use serde::Serialize;

use crate::core::filter::{SenderFilter, select};
use crate::core::models::{Aggregate, Tally};
use crate::sentiment::{Sentiment, TaggedMessage};

/// One sender's share of a sentiment bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub name: String,
    /// Percentage of the bucket, rounded to two decimals.
    pub percent: f64,
}

/// Share of each sender among messages carrying `label`, largest first.
///
/// Equal counts keep first-seen order. The shares add up to 100 give or
/// take rounding.
pub fn percentage(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
) -> Aggregate<Vec<Share>> {
    let tally: Tally = select(records, filter, label)
        .map(|m| m.sender())
        .collect();
    let total = tally.total();
    if total == 0 {
        return Aggregate::Empty;
    }

    let shares = tally
        .sorted_by_count()
        .into_entries()
        .into_iter()
        .map(|c| Share {
            name: c.key,
            percent: round2(c.count as f64 / total as f64 * 100.0),
        })
        .collect();
    Aggregate::Ready(shares)
}

/// The `limit` most active senders among messages carrying `label`.
pub fn top_senders(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
    limit: usize,
) -> Aggregate<Tally> {
    let tally: Tally = select(records, filter, label)
        .map(|m| m.sender())
        .collect();
    Aggregate::non_empty(tally.sorted_by_count().truncated(limit), Tally::is_empty)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
