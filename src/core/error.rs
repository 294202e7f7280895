//! Engine error type.
//!
//! All errors are precondition failures caught at configuration time or
//! while parsing caller input. Round resolution itself never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),

    #[error("match is already over")]
    MatchOver,
}

impl EngineError {
    /// Whether the caller can fix the input and try again without
    /// starting a new match.
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::InvalidConfiguration(_) => true,
            EngineError::InvalidChoice(_) => true,
            EngineError::MatchOver => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
