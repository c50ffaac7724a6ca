//! Validation and parse errors for the agenda data model.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid time '{0}': expected HH:MM in 24-hour form")]
    InvalidTime(String),

    #[error("subject name cannot be empty")]
    EmptySubject,

    #[error("session {number} exceeds total session count {total}")]
    SessionOutOfRange { number: u32, total: u32 },

    #[error("session numbers start at 1")]
    ZeroSession,

    #[error("unknown appointment status '{0}'")]
    UnknownStatus(String),

    #[error("unknown color tag '{0}'")]
    UnknownColorTag(String),

    #[error("unknown calendar view '{0}'")]
    UnknownView(String),

    #[error("overflow marker count must be at least 1")]
    EmptyOverflow,
}
