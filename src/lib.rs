//! Web Application Agent (WAA) for the Ucam WebAuth single sign-on protocol,
//! as spoken by the University of Cambridge "Raven" Web Login Service (WLS).
//!
//! The protocol is a browser-redirect handshake:
//! 1. the WAA redirects the user to the WLS with an [`AuthRequest`];
//! 2. the WLS authenticates the user and redirects back to the requested
//!    URL with a signed `WLS-Response` query parameter;
//! 3. the WAA validates the response before trusting the identity it
//!    asserts.
//!
//! This library focuses on the last step. A [`Validator`] parses the
//! response, rebuilds the bytes signed by the WLS, verifies the RSA signature
//! with the trusted key and enforces the protocol's freshness, URL binding
//! and authentication type invariants.
//!
//! # Usage
//!
//! ```no_run
//! use ucam_webauth::{crypto::TrustedKey, Callback, Validator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let key = TrustedKey::from_pem("901", include_str!("../tests/keys/wls-901.pub.pem"))?;
//! let validator = Validator::new(key);
//!
//! // URL requested by the browser when coming back from the WLS.
//! let callback = Callback::parse("https://example.com/login?WLS-Response=...")?;
//!
//! match validator.validate(&callback.response, &callback.return_url)? {
//!     Ok(identity) => println!("hello {}", identity.principal),
//!     Err(rejection) => println!("login failed: {rejection}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Validation returns a nested `Result`. The inner one is the outcome of the
//! checks: either an [`Identity`] or a [`Rejection`] naming the failed check.
//! The outer one reports [`Error`]s preventing the checks from running at
//! all (no usable key, cryptographic backend failure). Those are
//! configuration problems and must not be treated as invalid responses.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

/// Key material and signatures.
#[doc(inline)]
pub use ucam_webauth_crypto as crypto;

/// WLS responses.
#[doc(inline)]
pub use ucam_webauth_response as response;

pub mod callback;
pub mod environment;
mod error;
mod options;
pub mod request;
pub mod validation;

pub use callback::{Callback, CallbackError};
pub use environment::{Clock, FixedClock, IdentityResolver, KeySource, SystemClock};
pub use error::*;
pub use options::*;
pub use request::AuthRequest;
pub use response::{AuthType, Status, WlsResponse};
pub use validation::{Authenticated, Check, Identity, Validation, Validator};
