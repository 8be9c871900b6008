//! Message records produced by the transcript parser.
//!
//! A [`Message`] is one chat segment: the stamp it started with, the sender
//! and the body text. Every calendar field the aggregations group by is
//! derived once, when the record is built, and stored in [`Calendar`].
//!
//! # Examples
//!
//! ```
//! use chatvibe::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(14, 3, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "good morning!");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.calendar().day_name, "Friday");
//! assert_eq!(msg.calendar().period, "14-15");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Sender assigned to segments without a `name: ` prefix
/// (joins, leaves, admin changes, encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body WhatsApp writes in place of an attachment when media is excluded
/// from the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Calendar breakdown of a message timestamp.
///
/// | Field | Example |
/// |-------|---------|
/// | `date` | `2023-05-12` |
/// | `year` | `2023` |
/// | `month_num` | `5` |
/// | `month` | `May` |
/// | `day` | `12` |
/// | `day_name` | `Friday` |
/// | `hour` | `14` |
/// | `minute` | `3` |
/// | `period` | `14-15` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub date: NaiveDate,
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    /// One-hour bucket label, `"23-00"` wraps past midnight.
    pub period: String,
}

impl Calendar {
    /// Derives every calendar field from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            date: ts.date(),
            year: ts.year(),
            month_num: ts.month(),
            month: ts.format("%B").to_string(),
            day: ts.day(),
            day_name: ts.format("%A").to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            period: hour_period(ts.hour()),
        }
    }
}

/// Formats the one-hour bucket starting at `hour`.
pub fn hour_period(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// One parsed chat segment.
///
/// Fields are private: a record is immutable once the parser has built it,
/// so the calendar breakdown can never drift from the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    #[serde(flatten)]
    calendar: Calendar,
}

impl Message {
    /// Creates a record and derives its calendar fields.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            calendar: Calendar::from_timestamp(timestamp),
        }
    }

    /// Creates a system-line record with the [`GROUP_NOTIFICATION`] sender.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Returns `true` for system lines (no sender prefix).
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` when the body is the omitted-media placeholder.
    pub fn is_media_omitted(&self) -> bool {
        self.body == MEDIA_OMITTED
    }
}
