//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::message::Calendar;
use crate::sentiment::{Polarity, Sentiment, TaggedMessage};

/// Record structure for JSON and JSONL output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    timestamp: String,
    sender: &'a str,
    body: &'a str,
    label: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calendar: Option<&'a Calendar>,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_tagged(msg: &'a TaggedMessage, config: &OutputConfig) -> Self {
        Self {
            timestamp: msg.timestamp().format("%Y-%m-%dT%H:%M:%S").to_string(),
            sender: msg.sender(),
            body: msg.body(),
            label: msg.label(),
            scores: config.include_scores.then(|| msg.polarity()),
            calendar: config.include_calendar.then(|| msg.calendar()),
        }
    }
}

/// Writes tagged records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-05-12T14:03:00", "sender": "Alice", "body": "Hello", "label": 1},
///   {"timestamp": "2023-05-12T14:05:00", "sender": "Bob", "body": "Hi", "label": 0}
/// ]
/// ```
pub fn write_json(
    records: &[TaggedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts tagged records to a pretty-printed JSON array.
pub fn to_json(records: &[TaggedMessage], config: &OutputConfig) -> Result<String> {
    let json_records: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|m| JsonRecord::from_tagged(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_records)?)
}
