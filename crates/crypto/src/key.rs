//! WLS key material.
use core::fmt;
use rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    RsaPrivateKey, RsaPublicKey,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{verify_encoded, Error, RejectedSignature, SignatureVerification};

mod r#type;

#[derive(Debug, thiserror::Error)]
pub enum KeyConversionError {
    #[error("invalid key")]
    Invalid,

    #[error("empty key identifier")]
    EmptyKeyId,
}

/// Key identifier (`kid`).
///
/// The WLS publishes each of its keys under a short identifier, typically a
/// small integer such as `901`. Identifiers are compared as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: impl Into<String>) -> Result<Self, KeyConversionError> {
        let id = id.into();
        if id.is_empty() {
            Err(KeyConversionError::EmptyKeyId)
        } else {
            Ok(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for KeyId {
    type Err = KeyConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for KeyId {
    type Error = KeyConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KeyId> for String {
    fn from(value: KeyId) -> Self {
        value.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for KeyId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// RSA public key of the WLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    pub fn new(key: RsaPublicKey) -> Self {
        Self(key)
    }

    /// Parses a PEM-encoded public key.
    ///
    /// Both SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`) and PKCS#1
    /// (`BEGIN RSA PUBLIC KEY`) encodings are accepted.
    pub fn from_pem(pem: &str) -> Result<Self, KeyConversionError> {
        let pem = pem.trim();
        RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map(Self)
            .map_err(|_| KeyConversionError::Invalid)
    }

    /// Deserializes an ASN.1 DER-encoded `RsaPublicKey` (binary format).
    pub fn from_pkcs1_der(bytes: &[u8]) -> Result<Self, KeyConversionError> {
        RsaPublicKey::from_pkcs1_der(bytes)
            .map(Self)
            .map_err(|_| KeyConversionError::Invalid)
    }

    pub fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(value: RsaPublicKey) -> Self {
        Self(value)
    }
}

/// RSA secret key.
///
/// Only a WLS (or a simulator standing in for one) holds a secret key; the
/// WAA side never needs it.
#[derive(Clone)]
pub struct SecretKey(RsaPrivateKey);

impl SecretKey {
    pub fn new(key: RsaPrivateKey) -> Self {
        Self(key)
    }

    /// Parses a PKCS#1 PEM-encoded (`BEGIN RSA PRIVATE KEY`) secret key.
    pub fn from_pkcs1_pem(pem: &str) -> Result<Self, KeyConversionError> {
        RsaPrivateKey::from_pkcs1_pem(pem.trim())
            .map(Self)
            .map_err(|_| KeyConversionError::Invalid)
    }

    /// Parses a PKCS#8 PEM-encoded (`BEGIN PRIVATE KEY`) secret key.
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self, KeyConversionError> {
        RsaPrivateKey::from_pkcs8_pem(pem.trim())
            .map(Self)
            .map_err(|_| KeyConversionError::Invalid)
    }

    pub fn generate_from(
        rng: &mut (impl rsa::rand_core::CryptoRngCore + ?Sized),
        bits: usize,
    ) -> Result<Self, Error> {
        RsaPrivateKey::new(rng, bits)
            .map(Self)
            .map_err(Error::internal)
    }

    pub fn to_public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    pub fn as_rsa(&self) -> &RsaPrivateKey {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Public key currently trusted to sign WLS responses, with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedKey {
    id: KeyId,
    key: PublicKey,
}

impl TrustedKey {
    pub fn new(id: KeyId, key: PublicKey) -> Self {
        Self { id, key }
    }

    pub fn from_pem(id: &str, pem: &str) -> Result<Self, KeyConversionError> {
        Ok(Self::new(KeyId::new(id)?, PublicKey::from_pem(pem)?))
    }

    pub fn id(&self) -> &KeyId {
        &self.id
    }

    pub fn key(&self) -> &PublicKey {
        &self.key
    }

    /// Checks that `kid` names this key.
    pub fn check_id(&self, kid: &str) -> SignatureVerification {
        if self.id == *kid {
            Ok(())
        } else {
            Err(RejectedSignature::UnknownKey {
                found: kid.to_owned(),
                expected: self.id.to_string(),
            })
        }
    }

    /// Verifies the encoded signature of a response claiming to be signed
    /// with the key `kid`.
    ///
    /// No cryptographic operation is attempted when `kid` is not this key's
    /// identifier.
    pub fn verify(
        &self,
        kid: &str,
        signing_bytes: &[u8],
        encoded_signature: &str,
    ) -> Result<SignatureVerification, Error> {
        if let Err(e) = self.check_id(kid) {
            return Ok(Err(e));
        }

        verify_encoded(&self.key, signing_bytes, encoded_signature)
    }
}
