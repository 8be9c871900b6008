//! JSON Lines (JSONL) output writer.
//!
//! One tagged record per line, handy for piping into `jq` or loading into a
//! dataframe without reading the whole array.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::sentiment::TaggedMessage;

/// Writes tagged records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-05-12T14:03:00","sender":"Alice","body":"Hello","label":1}
/// {"timestamp":"2023-05-12T14:05:00","sender":"Bob","body":"Hi","label":0}
/// ```
pub fn write_jsonl(
    records: &[TaggedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts tagged records to a JSONL string.
pub fn to_jsonl(records: &[TaggedMessage], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(records, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(records: &[TaggedMessage], out: &mut W, config: &OutputConfig) -> Result<()> {
    for msg in records {
        let line = serde_json::to_string(&JsonRecord::from_tagged(msg, config))?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}
