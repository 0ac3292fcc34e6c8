use rsa::{
    pkcs1v15,
    signature::{SignatureEncoding, Signer, Verifier},
    traits::PublicKeyParts,
};
use sha1::Sha1;

use crate::{
    Error, PublicKey, RejectedSignature, SecretKey, SignatureVerification, SigningKey,
    VerifyingKey,
};

/// Length of the DER-encoded SHA-1 `DigestInfo` structure.
const SHA1_DIGEST_INFO_LEN: usize = 35;

/// Minimum PKCS#1 v1.5 padding overhead.
const PKCS1_V15_OVERHEAD: usize = 11;

impl VerifyingKey for PublicKey {
    fn verify_bytes(
        &self,
        signing_bytes: &[u8],
        signature: &[u8],
    ) -> Result<SignatureVerification, Error> {
        // A modulus this small cannot carry any SHA-1 signature; every
        // verification would fail and look like a forgery.
        let size = self.as_rsa().size();
        if size < SHA1_DIGEST_INFO_LEN + PKCS1_V15_OVERHEAD {
            return Err(Error::KeyUnsupported(format!(
                "{}-bit RSA modulus is too small for SHA-1 signatures",
                size * 8
            )));
        }

        let key = pkcs1v15::VerifyingKey::<Sha1>::new(self.as_rsa().clone());
        let signature = match pkcs1v15::Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(Err(RejectedSignature::Malformed)),
        };

        Ok(key
            .verify(signing_bytes, &signature)
            .map_err(|_| RejectedSignature::Mismatch))
    }
}

impl SigningKey for SecretKey {
    fn sign_bytes(&self, signing_bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let key = pkcs1v15::SigningKey::<Sha1>::new(self.as_rsa().clone());
        key.try_sign(signing_bytes)
            .map(|signature| signature.to_vec())
            .map_err(Error::internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn sha1_roundtrip() {
        let secret_key = SecretKey::generate_from(&mut OsRng, 1024).unwrap();
        let signature = secret_key.sign_bytes(b"message").unwrap();
        let public_key = secret_key.to_public_key();
        assert_eq!(
            public_key.verify_bytes(b"message", &signature).unwrap(),
            Ok(())
        )
    }

    #[test]
    fn altered_message_is_rejected() {
        let secret_key = SecretKey::generate_from(&mut OsRng, 1024).unwrap();
        let signature = secret_key.sign_bytes(b"message").unwrap();
        let public_key = secret_key.to_public_key();
        assert_eq!(
            public_key.verify_bytes(b"massage", &signature).unwrap(),
            Err(RejectedSignature::Mismatch)
        )
    }

    #[test]
    fn other_key_is_rejected() {
        let secret_key = SecretKey::generate_from(&mut OsRng, 1024).unwrap();
        let other_key = SecretKey::generate_from(&mut OsRng, 1024).unwrap();
        let signature = secret_key.sign_bytes(b"message").unwrap();
        assert_eq!(
            other_key
                .to_public_key()
                .verify_bytes(b"message", &signature)
                .unwrap(),
            Err(RejectedSignature::Mismatch)
        )
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let secret_key = SecretKey::generate_from(&mut OsRng, 1024).unwrap();
        let signature = secret_key.sign_bytes(b"message").unwrap();
        assert!(secret_key
            .to_public_key()
            .verify_bytes(b"message", &signature[1..])
            .unwrap()
            .is_err())
    }
}
