use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct DecodeAttempt {
    pub decoder: &'static str,
    pub message: String,
}

impl DecodeAttempt {
    pub fn new(decoder: &'static str, message: impl Into<String>) -> Self {
        Self {
            decoder,
            message: message.into(),
        }
    }
}

impl fmt::Display for DecodeAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.decoder, self.message)
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{decoder} format mismatch: {reason}")]
    FormatMismatch {
        decoder: &'static str,
        reason: String,
    },

    #[error("{decoder} CSV error: {source}")]
    Csv {
        decoder: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{decoder} workbook error: {message}")]
    Workbook {
        decoder: &'static str,
        message: String,
    },

    #[error("no decoder recognized this payload; attempts: {attempts:?}")]
    NoMatchingDecoder { attempts: Vec<DecodeAttempt> },
}
