use crate::{decode_signature, Error};

/// Outcome of a well-formed verification attempt.
///
/// The surrounding `Result<SignatureVerification, Error>` distinguishes a
/// signature that was checked and rejected (`Ok(Err(_))`) from a signature
/// that could not be checked (`Err(_)`).
pub type SignatureVerification = Result<(), RejectedSignature>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectedSignature {
    /// The response names a key other than the trusted one.
    #[error("untrusted key `{found}` (expected `{expected}`)")]
    UnknownKey { found: String, expected: String },

    /// The signature field could not be decoded into signature bytes.
    #[error("malformed signature")]
    Malformed,

    /// The signature does not match the signed bytes.
    #[error("signature mismatch")]
    Mismatch,
}

pub trait VerifyingKey {
    /// Verifies `signature` over `signing_bytes`.
    fn verify_bytes(
        &self,
        signing_bytes: &[u8],
        signature: &[u8],
    ) -> Result<SignatureVerification, Error>;
}

impl<'a, T: VerifyingKey> VerifyingKey for &'a T {
    fn verify_bytes(
        &self,
        signing_bytes: &[u8],
        signature: &[u8],
    ) -> Result<SignatureVerification, Error> {
        T::verify_bytes(*self, signing_bytes, signature)
    }
}

/// Decodes an encoded signature field and verifies it against
/// `signing_bytes`.
///
/// An undecodable signature is rejected rather than reported as an error:
/// the field comes from the (untrusted) response, not from our own
/// configuration.
pub fn verify_encoded(
    key: &impl VerifyingKey,
    signing_bytes: &[u8],
    encoded_signature: &str,
) -> Result<SignatureVerification, Error> {
    match decode_signature(encoded_signature) {
        Ok(signature) => key.verify_bytes(signing_bytes, &signature),
        Err(_) => Ok(Err(RejectedSignature::Malformed)),
    }
}
