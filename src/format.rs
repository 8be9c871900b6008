//! Output formats for tagged records and reports.
//!
//! The format is usually picked from the output file extension, so the
//! CLI and library callers share one dispatch point.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatvibe::Result<()> {
//! use chatvibe::core::models::OutputConfig;
//! use chatvibe::format::{OutputFormat, to_format_string};
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use chatvibe::sentiment::{Polarity, tag};
//!
//! let messages = WhatsAppParser::new().parse_str("12/5/23, 14:03 - Alice: hi")?;
//! let records = tag(messages, &|_: &str| Polarity::new(0.0, 1.0, 0.0))?;
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! let jsonl = to_format_string(&records, format, &OutputConfig::new())?;
//! assert!(jsonl.contains("\"sender\":\"Alice\""));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatvibeError, Result};
use crate::sentiment::TaggedMessage;

/// Output format for tagged records.
///
/// - [`Csv`](OutputFormat::Csv) - `;`-delimited table, opens in a spreadsheet
/// - [`Json`](OutputFormat::Json) - pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Detects the format from a file extension, case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatvibe::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/records.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("records.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        ext.parse().map_err(|_| {
            ChatvibeError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )
        })
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes tagged records to a file in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[TaggedMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders tagged records as a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[TaggedMessage],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Writes any serializable value, typically a
/// [`Report`](crate::core::Report), as pretty-printed JSON.
#[cfg(feature = "json-output")]
pub fn write_json_value<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn feature_disabled(format: OutputFormat) -> ChatvibeError {
    ChatvibeError::invalid_format(
        "output",
        format!(
            "Output format {} requires the '{}' feature to be enabled",
            format,
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("records.csv").unwrap(),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path("/tmp/out/records.JSONL").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_path("records.ndjson").unwrap(),
            OutputFormat::Jsonl
        );

        let err = OutputFormat::from_path("records").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(OutputFormat::from_path("records.txt").is_err());
    }

    #[test]
    fn test_format_display_and_extension() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_write_json_value() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_json_value(&vec!["a", "b"], file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"a\""));
    }
}
