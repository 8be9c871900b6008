//! Per-message sentiment tagging.
//!
//! A [`SentimentScorer`] turns message text into a [`Polarity`] (positive,
//! neutral and negative weights). [`tag`] runs the scorer over a parsed
//! record set and attaches a discrete [`Sentiment`] label to every message.
//!
//! The scorer is an explicit dependency: build it once and pass it in.
//! With the `vader` feature, [`VaderScorer`] wraps the VADER lexicon
//! analyzer. Any `Fn(&str) -> Polarity` closure is a scorer too.
//!
//! # Example
//!
//! ```rust
//! use chatvibe::parsers::{ChatParser, WhatsAppParser};
//! use chatvibe::sentiment::{Polarity, Sentiment, tag};
//!
//! let messages = WhatsAppParser::new().parse_str("12/5/23, 14:03 - Alice: good morning!")?;
//!
//! let scorer = |text: &str| {
//!     if text.contains("good") {
//!         Polarity::new(0.6, 0.4, 0.0)
//!     } else {
//!         Polarity::new(0.0, 1.0, 0.0)
//!     }
//! };
//!
//! let tagged = tag(messages, &scorer)?;
//! assert_eq!(tagged[0].label(), Sentiment::Positive);
//! # Ok::<(), chatvibe::ChatvibeError>(())
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::{ChatvibeError, Result};

/// Discrete sentiment label.
///
/// Serialized as its numeric value: `1`, `0` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Numeric label: `+1`, `0` or `-1`.
    pub fn value(self) -> i8 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }

    /// Parses a numeric label.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Sentiment::Positive),
            0 => Some(Sentiment::Neutral),
            -1 => Some(Sentiment::Negative),
            _ => None,
        }
    }

    /// The label with the opposite sign. Neutral is its own opposite.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Sentiment::Positive => Sentiment::Negative,
            Sentiment::Neutral => Sentiment::Neutral,
            Sentiment::Negative => Sentiment::Positive,
        }
    }

    /// All labels in display order.
    pub fn all() -> [Sentiment; 3] {
        [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    /// Picks the label with the largest weight.
    ///
    /// Ties go to positive, then negative, then neutral.
    pub fn from_polarity(p: &Polarity) -> Self {
        if p.positive >= p.negative && p.positive >= p.neutral {
            Sentiment::Positive
        } else if p.negative >= p.positive && p.negative >= p.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl From<Sentiment> for i8 {
    fn from(s: Sentiment) -> i8 {
        s.value()
    }
}

impl TryFrom<i8> for Sentiment {
    type Error = String;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        Sentiment::from_value(value)
            .ok_or_else(|| format!("Unknown sentiment label: {}. Expected 1, 0 or -1", value))
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" | "pos" | "1" | "+1" => Ok(Sentiment::Positive),
            "neutral" | "neu" | "0" => Ok(Sentiment::Neutral),
            "negative" | "neg" | "-1" => Ok(Sentiment::Negative),
            _ => Err(format!(
                "Unknown sentiment: '{}'. Expected one of: positive, neutral, negative",
                s
            )),
        }
    }
}

/// Weights returned by a scorer, each in `[0, 1]` and summing to about 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polarity {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl Polarity {
    pub fn new(positive: f64, neutral: f64, negative: f64) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    /// Rejects negative or non-finite weights.
    pub fn validate(self) -> Result<Self> {
        let weights = [self.positive, self.neutral, self.negative];
        if weights.iter().all(|w| w.is_finite() && *w >= 0.0) {
            Ok(self)
        } else {
            Err(ChatvibeError::scorer(format!(
                "invalid weights (pos={}, neu={}, neg={})",
                self.positive, self.neutral, self.negative
            )))
        }
    }

    pub fn label(&self) -> Sentiment {
        Sentiment::from_polarity(self)
    }
}

/// Scores message text.
pub trait SentimentScorer {
    /// Returns the positive, neutral and negative weights for `text`.
    fn polarity(&self, text: &str) -> Result<Polarity>;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> Polarity,
{
    fn polarity(&self, text: &str) -> Result<Polarity> {
        Ok(self(text))
    }
}

/// VADER lexicon scorer.
///
/// # Example
///
/// ```rust
/// use chatvibe::sentiment::{SentimentScorer, VaderScorer};
///
/// let scorer = VaderScorer::new();
/// let p = scorer.polarity("What a wonderful day!")?;
/// assert!(p.positive > p.negative);
/// # Ok::<(), chatvibe::ChatvibeError>(())
/// ```
#[cfg(feature = "vader")]
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

#[cfg(feature = "vader")]
impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

#[cfg(feature = "vader")]
impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "vader")]
impl SentimentScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<Polarity> {
        // the analyzer ties input text to its own lifetime
        let analyzer: &vader_sentiment::SentimentIntensityAnalyzer<'_> = &self.analyzer;
        let scores = analyzer.polarity_scores(text);
        let weight = |key: &str| {
            scores
                .get(key)
                .copied()
                .ok_or_else(|| ChatvibeError::scorer(format!("VADER returned no '{key}' score")))
        };

        Polarity::new(weight("pos")?, weight("neu")?, weight("neg")?).validate()
    }
}

/// A message with its sentiment weights and label.
///
/// Dereferences to the underlying [`Message`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedMessage {
    #[serde(flatten)]
    message: Message,
    #[serde(flatten)]
    polarity: Polarity,
    label: Sentiment,
}

impl TaggedMessage {
    /// Attaches weights to a message and derives its label.
    pub fn new(message: Message, polarity: Polarity) -> Self {
        Self {
            label: polarity.label(),
            message,
            polarity,
        }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn label(&self) -> Sentiment {
        self.label
    }
}

impl Deref for TaggedMessage {
    type Target = Message;

    fn deref(&self) -> &Message {
        &self.message
    }
}

/// Scores every message and attaches its label.
///
/// All-or-nothing: the first scorer failure aborts the batch.
pub fn tag<S>(messages: Vec<Message>, scorer: &S) -> Result<Vec<TaggedMessage>>
where
    S: SentimentScorer + ?Sized,
{
    let total = messages.len();
    let tagged = messages
        .into_iter()
        .map(|msg| {
            let polarity = scorer.polarity(msg.body())?.validate()?;
            Ok(TaggedMessage::new(msg, polarity))
        })
        .collect::<Result<Vec<_>>>()?;

    let counts = Sentiment::all().map(|s| tagged.iter().filter(|m| m.label() == s).count());
    tracing::info!(
        messages = total,
        positive = counts[0],
        neutral = counts[1],
        negative = counts[2],
        "tagged sentiment"
    );

    Ok(tagged)
}
