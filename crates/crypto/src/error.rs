use crate::key::KeyConversionError;

/// Signature or verification error.
///
/// An `Error` means the signature could not be produced or checked at all.
/// It is never used to report a forged or mismatching signature, see
/// [`RejectedSignature`](crate::RejectedSignature) for that.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("verifying key not found")]
    KeyNotFound,

    #[error("key conversion failed: {0}")]
    KeyConversion(#[from] KeyConversionError),

    #[error("unsupported key: {0}")]
    KeyUnsupported(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub fn internal(e: impl Into<anyhow::Error>) -> Self {
        Self::Internal(e.into())
    }
}
