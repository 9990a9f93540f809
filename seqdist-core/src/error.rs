use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeqDistError {
    /// A deterministic violation of the input contract. The first violation
    /// found aborts the whole operation; nothing partial is returned.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl SeqDistError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SeqDistError::MalformedInput {
            reason: reason.into(),
        }
    }
}

pub type SeqDistResult<T> = Result<T, SeqDistError>;
