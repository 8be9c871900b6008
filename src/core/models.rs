//! Result and configuration types shared by the aggregation functions.

use std::collections::HashMap;

use serde::Serialize;

/// Outcome of an aggregation.
///
/// An aggregation over a bucket with no matching messages is `Empty`
/// rather than an error, so the caller can render a placeholder.
///
/// Serialized as `{"status":"ready","data":...}` or `{"status":"empty"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Aggregate<T> {
    Ready(T),
    Empty,
}

impl<T> Aggregate<T> {
    /// Wraps `value`, or returns `Empty` when `is_empty` holds for it.
    pub fn non_empty(value: T, is_empty: impl FnOnce(&T) -> bool) -> Self {
        if is_empty(&value) {
            Aggregate::Empty
        } else {
            Aggregate::Ready(value)
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Aggregate::Ready(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Aggregate::Empty)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Aggregate::Ready(v) => Some(v),
            Aggregate::Empty => None,
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Aggregate::Ready(v) => Some(v),
            Aggregate::Empty => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Aggregate<U> {
        match self {
            Aggregate::Ready(v) => Aggregate::Ready(f(v)),
            Aggregate::Empty => Aggregate::Empty,
        }
    }
}

/// One key of a [`Tally`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub key: String,
    pub count: usize,
}

/// Counts per key, kept in the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    entries: Vec<Count>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to `key`, appending it if unseen.
    pub fn increment(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push(Count {
                    key: key.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|c| c.count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Count> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.key.as_str())
    }

    /// Reorders by count, highest first. Equal counts keep first-seen order.
    #[must_use]
    pub fn sorted_by_count(mut self) -> Self {
        self.entries.sort_by(|a, b| b.count.cmp(&a.count));
        self.reindex();
        self
    }

    /// Keeps the first `n` entries.
    #[must_use]
    pub fn truncated(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self.reindex();
        self
    }

    pub fn into_entries(self) -> Vec<Count> {
        self.entries
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key.clone(), i))
            .collect();
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.increment(key);
        }
        tally
    }
}

/// Configuration for record output.
/// Controls which derived columns are written next to sender and body.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the three sentiment weights
    pub include_scores: bool,
    /// Include the calendar breakdown (date, weekday, hour, period...)
    pub include_calendar: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scores(mut self) -> Self {
        self.include_scores = true;
        self
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }
}
