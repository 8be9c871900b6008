//! Output format writers for tagged records.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatvibe::Result<()> {
//! use chatvibe::core::models::OutputConfig;
//! use chatvibe::core::output::{to_csv, write_json};
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use chatvibe::sentiment::{Polarity, tag};
//!
//! let messages = WhatsAppParser::new().parse(std::path::Path::new("chat.txt"))?;
//! let records = tag(messages, &|_: &str| Polarity::new(0.0, 1.0, 0.0))?;
//!
//! let config = OutputConfig::new().with_scores();
//! write_json(&records, "records.json", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
