//! Chat transcript parsers.
//!
//! Each parser implements the [`ChatParser`] trait and produces [`Message`]
//! records in transcript order.
//!
//! # Available Parsers
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports
//!
//! # Example
//!
//! ```rust,no_run
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use std::path::Path;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse(Path::new("WhatsApp Chat with Friends.txt"))?;
//! # Ok::<(), chatvibe::ChatvibeError>(())
//! ```

mod whatsapp;

pub use whatsapp::WhatsAppParser;

use std::path::Path;

use crate::Message;
use crate::error::ChatvibeError;

/// Trait for turning a chat export into message records.
pub trait ChatParser: Send + Sync {
    /// Returns the name of the parser (e.g., "WhatsApp").
    fn name(&self) -> &'static str;

    /// Parses a transcript file and returns its records.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatvibeError`] if the file cannot be read or its stamps
    /// cannot be parsed.
    fn parse(&self, path: &Path) -> Result<Vec<Message>, ChatvibeError>;

    /// Parses transcript text held in memory.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatvibeError`] if the stamps cannot be parsed.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>, ChatvibeError>;
}
