//! `WhatsApp` TXT export parser.
//!
//! Every message starts with a stamp such as `12/5/23, 14:03 - `. The text
//! between two stamps is one segment; a segment whose text begins with
//! `Name: ` is a chat message, anything else is a system line.
//!
//! Supported stamps:
//! - Day-first: `12/5/23, 14:03 - Alice: good morning!`
//! - Month-first: `5/12/23, 14:03 - Alice: good morning!`
//!
//! Two- and four-digit years are both accepted. The date order is decided
//! once for the whole file: day-first is tried first and month-first is used
//! only when some stamp is not a valid day-first date. A file whose stamps
//! are valid either way is read day-first.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::Message;
use crate::config::{DateOrder, WhatsAppConfig};
use crate::error::ChatvibeError;
use crate::parsers::ChatParser;

/// Stamp at the start of every message, including the ` - ` separator.
const STAMP_PATTERN: &str = r"(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s-\s";

/// Non-greedy sender prefix, up to the first colon followed by whitespace.
const SENDER_PATTERN: &str = r"(?s)^(.+?):\s";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatvibe::parsers::{ChatParser, WhatsAppParser};
///
/// let parser = WhatsAppParser::new();
/// let messages = parser.parse_str(
///     "12/5/23, 14:03 - Alice: good morning!\n12/5/23, 14:05 - Bob left\n",
/// )?;
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].sender(), "Alice");
/// # Ok::<(), chatvibe::ChatvibeError>(())
/// ```
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: WhatsAppConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }
}

impl ChatParser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Message>, ChatvibeError> {
        let content = fs::read_to_string(path)?;
        self.parse_content(&content).map_err(|e| e.with_path(path))
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>, ChatvibeError> {
        self.parse_content(content)
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A stamp and the text that follows it, up to the next stamp.
struct Segment<'a> {
    date: &'a str,
    time: &'a str,
    text: &'a str,
}

/// Chrono format string for a fixed date order and year width.
///
/// Only two- and four-digit years are valid; `%Y` alone would accept any
/// width.
fn date_parse_format(order: DateOrder, year_digits: usize) -> Option<&'static str> {
    let month_first = order == DateOrder::MonthFirst;
    match (month_first, year_digits) {
        (false, 2) => Some("%d/%m/%y, %H:%M"),
        (false, 4) => Some("%d/%m/%Y, %H:%M"),
        (true, 2) => Some("%m/%d/%y, %H:%M"),
        (true, 4) => Some("%m/%d/%Y, %H:%M"),
        _ => None,
    }
}

/// Parses one stamp's date and time with a fixed date order.
fn parse_stamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let year_digits = date_str.rsplit('/').next().map_or(0, str::len);
    let fmt = date_parse_format(order, year_digits)?;

    NaiveDateTime::parse_from_str(&format!("{date_str}, {time_str}"), fmt).ok()
}

/// Parses every stamp with one order. On failure returns the first stamp
/// that does not fit.
fn parse_all(
    segments: &[Segment<'_>],
    order: DateOrder,
) -> Result<Vec<NaiveDateTime>, String> {
    segments
        .iter()
        .map(|seg| {
            parse_stamp(seg.date, seg.time, order)
                .ok_or_else(|| format!("{}, {}", seg.date, seg.time))
        })
        .collect()
}

/// Splits the text into stamped segments. Text before the first stamp is
/// discarded.
fn split_segments<'a>(stamp: &Regex, content: &'a str) -> Vec<Segment<'a>> {
    let matches: Vec<_> = stamp.captures_iter(content).collect();
    let mut segments = Vec::with_capacity(matches.len());

    for (i, caps) in matches.iter().enumerate() {
        let Some(whole) = caps.get(0) else { continue };
        let end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());

        segments.push(Segment {
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            text: &content[whole.end()..end],
        });
    }

    segments
}

/// Splits a segment into `(sender, body)`. Returns `None` as sender for
/// system lines.
fn split_sender<'a>(sender_re: &Regex, text: &'a str) -> (Option<&'a str>, &'a str) {
    match sender_re.captures(text) {
        Some(caps) => {
            let sender = caps.get(1).map_or("", |m| m.as_str());
            let rest = caps.get(0).map_or(text, |m| &text[m.end()..]);
            (Some(sender), rest)
        }
        None => (None, text),
    }
}

impl WhatsAppParser {
    /// Parses content from a string (internal implementation).
    fn parse_content(&self, content: &str) -> Result<Vec<Message>, ChatvibeError> {
        let stamp = Regex::new(STAMP_PATTERN)
            .map_err(|e| ChatvibeError::invalid_format("WhatsApp", e.to_string()))?;
        let sender_re = Regex::new(SENDER_PATTERN)
            .map_err(|e| ChatvibeError::invalid_format("WhatsApp", e.to_string()))?;

        // Step 1: Split at stamp boundaries
        let segments = split_segments(&stamp, content);
        if segments.is_empty() {
            tracing::debug!("no message stamps found");
            return Ok(vec![]);
        }

        // Step 2: Resolve the date order for the whole file
        let timestamps = self.resolve_timestamps(&segments)?;

        // Step 3: Build records in original order
        let mut messages = Vec::with_capacity(segments.len());
        let mut notifications = 0usize;

        for (segment, timestamp) in segments.iter().zip(timestamps) {
            // the separator after the colon may be the line break itself
            let (sender, body) = split_sender(&sender_re, segment.text);
            let body = body.trim_end_matches(['\r', '\n']);
            let msg = match sender {
                Some(sender) => Message::new(timestamp, sender, body),
                None => Message::notification(timestamp, body),
            };

            if msg.is_notification() {
                notifications += 1;
                if self.config.skip_system_messages {
                    continue;
                }
            }

            messages.push(msg);
        }

        tracing::debug!(
            segments = segments.len(),
            notifications,
            kept = messages.len(),
            "parsed WhatsApp transcript"
        );

        Ok(messages)
    }

    fn resolve_timestamps(
        &self,
        segments: &[Segment<'_>],
    ) -> Result<Vec<NaiveDateTime>, ChatvibeError> {
        match self.config.date_order {
            DateOrder::Auto => match parse_all(segments, DateOrder::DayFirst) {
                Ok(ts) => {
                    tracing::debug!("stamps parsed day-first");
                    Ok(ts)
                }
                Err(day_first_stamp) => {
                    tracing::warn!(
                        stamp = %day_first_stamp,
                        "stamp is not day-first, retrying whole file month-first"
                    );
                    parse_all(segments, DateOrder::MonthFirst).map_err(|stamp| {
                        ChatvibeError::whatsapp_format(
                            format!("stamp '{stamp}' fits neither day-first nor month-first"),
                            None,
                        )
                    })
                }
            },
            order => parse_all(segments, order).map_err(|stamp| {
                ChatvibeError::whatsapp_format(format!("stamp '{stamp}' is not {order}"), None)
            }),
        }
    }
}
