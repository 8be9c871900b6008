//! Activity by time bucket: weekday, month, weekday × hour heatmap, and
//! daily / monthly timelines.
//!
//! Every function applies the sender filter, then the sentiment filter, and
//! counts what is left. None of them touches the record set.
//!
//! # Example
//!
//! ```rust
//! use chatvibe::core::activity::weekday_activity;
//! use chatvibe::core::filter::SenderFilter;
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use chatvibe::sentiment::{Polarity, Sentiment, tag};
//!
//! let messages = WhatsAppParser::new().parse_str(
//!     "12/5/23, 14:03 - Alice: good morning!\n13/5/23, 09:00 - Bob: hey\n",
//! )?;
//! let records = tag(messages, &|_: &str| Polarity::new(0.0, 1.0, 0.0))?;
//!
//! let days = weekday_activity(&SenderFilter::Overall, &records, Sentiment::Neutral);
//! let days = days.ready().unwrap();
//! assert_eq!(days.get("Friday"), 1);
//! assert_eq!(days.get("Saturday"), 1);
//! # Ok::<(), chatvibe::ChatvibeError>(())
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::MonthlyTimelineMode;
use crate::core::filter::{SenderFilter, select};
use crate::core::models::{Aggregate, Tally};
use crate::sentiment::{Sentiment, TaggedMessage};

/// Message count per weekday name, in first-seen order.
pub fn weekday_activity(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
) -> Aggregate<Tally> {
    let tally: Tally = select(records, filter, label)
        .map(|m| m.calendar().day_name.as_str())
        .collect();
    Aggregate::non_empty(tally, Tally::is_empty)
}

/// Message count per month name, in first-seen order.
pub fn month_activity(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
) -> Aggregate<Tally> {
    let tally: Tally = select(records, filter, label)
        .map(|m| m.calendar().month.as_str())
        .collect();
    Aggregate::non_empty(tally, Tally::is_empty)
}

/// Weekday × hour-period message counts.
///
/// Rows run Monday to Sunday and columns by hour; only weekdays and
/// periods that occur are present. Missing combinations are 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub periods: Vec<String>,
    /// `counts[row][column]`, one row per entry of `days`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one cell, 0 when the weekday or period is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

pub fn activity_heatmap(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
) -> Aggregate<Heatmap> {
    // keyed by (weekday index, hour) so rows and columns come out ordered
    let mut cells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
    let mut days: BTreeMap<u32, String> = BTreeMap::new();
    let mut periods: BTreeMap<u32, String> = BTreeMap::new();

    for m in select(records, filter, label) {
        let day = m.weekday().num_days_from_monday();
        let cal = m.calendar();
        *cells.entry((day, cal.hour)).or_insert(0) += 1;
        days.entry(day).or_insert_with(|| cal.day_name.clone());
        periods.entry(cal.hour).or_insert_with(|| cal.period.clone());
    }

    if cells.is_empty() {
        return Aggregate::Empty;
    }

    let counts = days
        .keys()
        .map(|day| {
            periods
                .keys()
                .map(|hour| cells.get(&(*day, *hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Aggregate::Ready(Heatmap {
        days: days.into_values().collect(),
        periods: periods.into_values().collect(),
        counts,
    })
}

/// One day of the daily timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Message count per calendar date, oldest first.
pub fn daily_timeline(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
) -> Aggregate<Vec<DailyCount>> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for m in select(records, filter, label) {
        *per_day.entry(m.calendar().date).or_insert(0) += 1;
    }

    let timeline: Vec<DailyCount> = per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect();
    Aggregate::non_empty(timeline, Vec::is_empty)
}

/// One month of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    /// `"MonthName-Year"`, e.g. `"May-2023"`.
    pub label: String,
    pub count: usize,
}

/// Message count per (year, month), oldest first.
///
/// With [`MonthlyTimelineMode::Inverted`] the label filter is flipped:
/// asking for positive counts negative messages and vice versa.
pub fn monthly_timeline(
    filter: &SenderFilter,
    records: &[TaggedMessage],
    label: Sentiment,
    mode: MonthlyTimelineMode,
) -> Aggregate<Vec<MonthlyCount>> {
    let label = match mode {
        MonthlyTimelineMode::Matching => label,
        MonthlyTimelineMode::Inverted => label.opposite(),
    };

    let mut per_month: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();
    for m in select(records, filter, label) {
        let cal = m.calendar();
        per_month
            .entry((cal.year, cal.month_num))
            .or_insert_with(|| (cal.month.clone(), 0))
            .1 += 1;
    }

    let timeline: Vec<MonthlyCount> = per_month
        .into_iter()
        .map(|((year, month_num), (month, count))| MonthlyCount {
            year,
            month_num,
            label: format!("{}-{}", month, year),
            count,
        })
        .collect();
    Aggregate::non_empty(timeline, Vec::is_empty)
}
