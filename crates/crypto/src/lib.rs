//! Key material and signature handling for the Ucam WebAuth protocol.
//!
//! The Web Login Service signs each response with an RSA key identified by a
//! short key identifier (`kid`). Signatures use RSASSA-PKCS1-v1_5 with SHA-1
//! and travel in a URL-safe variant of base64 (see [`decode_signature`]).
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
pub mod key;
mod signature;
mod verification;

pub use error::*;
pub use key::{KeyConversionError, KeyId, PublicKey, SecretKey, TrustedKey};
pub use signature::*;
pub use verification::*;

pub use rsa;
