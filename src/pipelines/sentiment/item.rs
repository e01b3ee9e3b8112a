use std::{fmt::Debug, fmt::Display};

use derive_new::new;

/// A trait for items that can be used for sentiment classification
pub trait Item: Send + Sync + Clone + Debug {
    /// Returns the raw review text for the item
    fn review(&self) -> &str;

    /// Returns the raw sentiment label for the item
    fn label(&self) -> &str;
}

/// A binary sentiment label
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sentiment {
    /// Negative review, class id 0
    Negative,

    /// Positive review, class id 1
    Positive,
}

impl Sentiment {
    /// The class id used as the training target
    pub fn class_id(&self) -> usize {
        match self {
            Sentiment::Negative => 0,
            Sentiment::Positive => 1,
        }
    }
}

impl TryFrom<&str> for Sentiment {
    type Error = LabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "positive" | "pos" | "1" => Ok(Sentiment::Positive),
            "negative" | "neg" | "0" => Ok(Sentiment::Negative),
            _ => Err(LabelError::Unknown(value.to_string())),
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Sentiment::Negative => "negative",
            Sentiment::Positive => "positive",
        };

        write!(f, "{}", name)
    }
}

/// A cleaned and tokenized review with its label
#[derive(Clone, Debug, new)]
pub struct Document {
    /// Tokens of the normalized review text
    pub tokens: Vec<String>,

    /// The sentiment label
    pub sentiment: Sentiment,
}

/// A review encoded to a fixed-length id sequence, ready for batching
#[derive(Clone, Debug, new)]
pub struct Encoded {
    /// Vocabulary ids, exactly `max_seq_length` long
    pub ids: Vec<usize>,

    /// The sentiment label
    pub sentiment: Sentiment,
}

/// Label Error
#[derive(thiserror::Error, Debug)]
pub enum LabelError {
    /// The label isn't a recognized sentiment
    #[error("unknown sentiment label {0:?}")]
    Unknown(String),
}
