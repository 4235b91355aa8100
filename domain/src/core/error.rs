//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No council members configured")]
    NoMembers,

    #[error("Unknown council member: {0}")]
    UnknownMember(String),

    #[error("Duplicate council member id: {0}")]
    DuplicateMember(String),

    #[error("Invalid council member: {0}")]
    InvalidMember(String),

    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("Unknown session mode: {0}")]
    UnknownMode(String),
}

impl DomainError {
    /// Check if this error is a failed member lookup
    pub fn is_unknown_member(&self) -> bool {
        matches!(self, DomainError::UnknownMember(_))
    }
}
