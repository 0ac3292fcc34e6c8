use chrono::{DateTime, Utc};

use crate::{
    crypto,
    response::{ParseError, Status},
};

/// Reason for rejecting a WLS response.
///
/// Each variant names exactly one failed check. Rejections are expected
/// outcomes: the caller should restart the login with a fresh redirect, and
/// never retry with the same response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("malformed response: {0}")]
    Malformed(#[from] ParseError),

    /// Issue date outside of the accepted window.
    #[error("response issued at {issued} is outside the accepted window (now {now})")]
    Expired {
        issued: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("invalid signature")]
    BadSignature,

    #[error("untrusted key `{found}` (expected `{expected}`)")]
    UnknownKey { found: String, expected: String },

    #[error("URL mismatch: response is for `{found}`, expected `{expected}`")]
    UrlMismatch { expected: String, found: String },

    #[error("invalid authentication type (auth: `{auth}`, sso: `{sso}`)")]
    InvalidAuthMode { auth: String, sso: String },

    /// The WLS did not authenticate the user.
    #[error("authentication denied: {status}")]
    AuthenticationDenied { status: Status, msg: String },
}

/// Validation error.
///
/// Unlike a [`Rejection`], an error means the response could not be checked
/// at all, typically because of a configuration or environment problem. It
/// must never be treated as a mere invalid response.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Crypto(#[from] crypto::Error),
}

impl From<crypto::KeyConversionError> for Error {
    fn from(value: crypto::KeyConversionError) -> Self {
        Self::Crypto(value.into())
    }
}

/// Authentication error.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError<E> {
    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("unknown user `{0}`")]
    UserNotFound(String),

    #[error("identity resolution failed: {0}")]
    Resolver(#[source] E),

    #[error(transparent)]
    Fatal(#[from] Error),
}
