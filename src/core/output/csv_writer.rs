//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::sentiment::TaggedMessage;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Writes tagged records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on [`OutputConfig`]
///   - Basic: `Timestamp`, `Sender`, `Body`, `Label`
///   - With scores: `+ Positive`, `Neutral`, `Negative`
///   - With calendar: `+ Date`, `Year`, `Month`, `Day`, `DayName`, `Hour`,
///     `Minute`, `Period`
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[TaggedMessage],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_to(records, file, config)
}

/// Converts tagged records to a CSV string.
///
/// Same format as [`write_csv`], without touching the file system.
pub fn to_csv(records: &[TaggedMessage], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_to(records, &mut buf, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_to<W: Write>(records: &[TaggedMessage], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in records {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Timestamp", "Sender", "Body", "Label"];

    if config.include_scores {
        header.extend(["Positive", "Neutral", "Negative"]);
    }
    if config.include_calendar {
        header.extend([
            "Date", "Year", "Month", "Day", "DayName", "Hour", "Minute", "Period",
        ]);
    }

    header
}

fn build_record(msg: &TaggedMessage, config: &OutputConfig) -> Vec<String> {
    let mut record = vec![
        msg.timestamp().format(TIMESTAMP_FORMAT).to_string(),
        msg.sender().to_string(),
        msg.body().to_string(),
        msg.label().value().to_string(),
    ];

    if config.include_scores {
        let p = msg.polarity();
        record.extend([
            p.positive.to_string(),
            p.neutral.to_string(),
            p.negative.to_string(),
        ]);
    }
    if config.include_calendar {
        let cal = msg.calendar();
        record.extend([
            cal.date.to_string(),
            cal.year.to_string(),
            cal.month.clone(),
            cal.day.to_string(),
            cal.day_name.clone(),
            cal.hour.to_string(),
            cal.minute.to_string(),
            cal.period.clone(),
        ]);
    }

    record
}
