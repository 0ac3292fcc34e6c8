use crate::{Field, UnknownStatus};

/// Structural error in a WLS response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The response does not have the arity of the supported layout.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// The declared protocol version uses a different layout.
    #[error("unsupported protocol version `{0}`")]
    UnsupportedVersion(String),

    /// A required field is empty.
    #[error("missing `{0}` field")]
    MissingField(Field),

    #[error("invalid status `{0}`")]
    InvalidStatus(String),

    #[error("invalid issue date `{0}`")]
    InvalidIssue(String),

    #[error("invalid session lifetime `{0}`")]
    InvalidLife(String),
}

impl From<UnknownStatus> for ParseError {
    fn from(value: UnknownStatus) -> Self {
        Self::InvalidStatus(value.0.to_string())
    }
}
