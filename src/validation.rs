//! WLS response validation.
//!
//! A response is accepted only if it passes every [`Check`], run in the
//! order of [`Check::ALL`]. The first failing check determines the
//! [`Rejection`] and no later check is evaluated.
use chrono::{DateTime, Utc};
use core::fmt;
use percent_encoding::percent_decode_str;

use crate::{
    crypto::RejectedSignature,
    environment::{Clock, IdentityResolver, KeySource, SystemClock},
    response::{AuthType, WlsResponse},
    AuthenticationError, Error, Options, Rejection,
};

/// Outcome of a completed validation.
pub type Validation = Result<Identity, Rejection>;

/// Identity asserted by a valid WLS response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Authenticated user name.
    pub principal: String,

    /// Effective authentication type.
    pub auth_type: AuthType,

    /// Whether the user actively authenticated for this request, rather
    /// than relying on a prior session.
    pub active: bool,

    /// Response identifier.
    pub id: String,

    pub issue: DateTime<Utc>,

    /// Remaining session lifetime, in seconds.
    pub life: Option<u64>,

    pub params: String,
}

/// User authenticated with a valid WLS response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticated<U> {
    pub identity: Identity,
    pub user: U,
}

/// Validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    /// The response was issued within the accepted window around now.
    Freshness,

    /// The response is signed with the trusted key.
    ///
    /// Runs before [`Check::Signature`] so that no other key is ever used
    /// to verify a signature.
    KeyIdentity,

    /// The signature matches the signed fields.
    Signature,

    /// The response is for the URL the WAA is serving.
    UrlBinding,

    /// Exactly one of `auth` and `sso` is set, with accepted types only.
    AuthMode,

    /// The WLS reports a successful authentication.
    Status,
}

impl Check {
    /// Every check, in evaluation order.
    pub const ALL: [Self; 6] = [
        Self::Freshness,
        Self::KeyIdentity,
        Self::Signature,
        Self::UrlBinding,
        Self::AuthMode,
        Self::Status,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Freshness => "freshness",
            Self::KeyIdentity => "key identity",
            Self::Signature => "signature",
            Self::UrlBinding => "URL binding",
            Self::AuthMode => "authentication mode",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// WLS response validator.
///
/// Holds no mutable state: a single validator can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Validator<K, C = SystemClock> {
    keys: K,
    clock: C,
    options: Options,
}

impl<K> Validator<K> {
    pub fn new(keys: K) -> Self {
        Self {
            keys,
            clock: SystemClock,
            options: Options::default(),
        }
    }
}

impl<K, C> Validator<K, C> {
    pub fn with_clock<D>(self, clock: D) -> Validator<K, D> {
        Validator {
            keys: self.keys,
            clock,
            options: self.options,
        }
    }

    pub fn with_options(self, options: Options) -> Self {
        Self { options, ..self }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl<K: KeySource, C: Clock> Validator<K, C> {
    /// Validates a raw `WLS-Response` value.
    ///
    /// `request_url` is the URL the WAA believes the user was sent back to,
    /// i.e. the `url` parameter of the original request.
    ///
    /// Returns `Ok(Err(_))` if the response is rejected, and `Err(_)` if it
    /// could not be checked.
    pub fn validate(&self, raw: &str, request_url: &str) -> Result<Validation, Error> {
        log::debug!("testing WLS response");
        match WlsResponse::parse(raw) {
            Ok(response) => self.validate_response(&response, request_url),
            Err(e) => {
                log::warn!("malformed WLS response: {e}");
                Ok(Err(e.into()))
            }
        }
    }

    /// Validates an already parsed response.
    pub fn validate_response(
        &self,
        response: &WlsResponse,
        request_url: &str,
    ) -> Result<Validation, Error> {
        for check in Check::ALL {
            if let Err(rejection) = self.check(check, response, request_url)? {
                log::warn!(
                    "WLS response `{}` failed the {check} check: {rejection}",
                    response.id()
                );
                return Ok(Err(rejection));
            }
        }

        log::debug!("WLS response tests passed");

        let (auth_type, active) = match auth_mode(response, &self.options) {
            Ok(mode) => mode,
            Err(rejection) => return Ok(Err(rejection)),
        };

        Ok(Ok(Identity {
            principal: response.principal().to_owned(),
            auth_type,
            active,
            id: response.id().to_owned(),
            issue: response.issue(),
            life: response.life(),
            params: response.params().to_owned(),
        }))
    }

    /// Runs a single check.
    pub fn check(
        &self,
        check: Check,
        response: &WlsResponse,
        request_url: &str,
    ) -> Result<Result<(), Rejection>, Error> {
        match check {
            Check::Freshness => {
                let now = self.clock.now();
                let issued = response.issue();
                let age = now - issued;
                let max_skew = self.options.max_skew();
                if age > max_skew || -age > max_skew {
                    Ok(Err(Rejection::Expired { issued, now }))
                } else {
                    Ok(Ok(()))
                }
            }
            Check::KeyIdentity => {
                let key = self.keys.trusted_key()?;
                Ok(key.check_id(response.kid()).map_err(Into::into))
            }
            Check::Signature => {
                let key = self.keys.trusted_key()?;
                let verification = key.verify(
                    response.kid(),
                    response.signing_bytes().as_bytes(),
                    response.sig(),
                )?;
                Ok(verification.map_err(Into::into))
            }
            Check::UrlBinding => {
                let decoded: Vec<u8> = percent_decode_str(response.url()).collect();
                if decoded == request_url.as_bytes() {
                    Ok(Ok(()))
                } else {
                    Ok(Err(Rejection::UrlMismatch {
                        expected: request_url.to_owned(),
                        found: String::from_utf8_lossy(&decoded).into_owned(),
                    }))
                }
            }
            Check::AuthMode => Ok(auth_mode(response, &self.options).map(|_| ())),
            Check::Status => {
                let status = response.status();
                if status.is_success() {
                    Ok(Ok(()))
                } else {
                    Ok(Err(Rejection::AuthenticationDenied {
                        status,
                        msg: response.msg().to_owned(),
                    }))
                }
            }
        }
    }

    /// Validates a raw `WLS-Response` value and resolves the asserted
    /// principal into an application user.
    pub fn authenticate<R: IdentityResolver>(
        &self,
        raw: &str,
        request_url: &str,
        resolver: &R,
    ) -> Result<Authenticated<R::User>, AuthenticationError<R::Error>> {
        let identity = self.validate(raw, request_url)??;
        match resolver
            .resolve(&identity.principal)
            .map_err(AuthenticationError::Resolver)?
        {
            Some(user) => Ok(Authenticated { identity, user }),
            None => Err(AuthenticationError::UserNotFound(identity.principal)),
        }
    }
}

impl From<RejectedSignature> for Rejection {
    fn from(value: RejectedSignature) -> Self {
        match value {
            RejectedSignature::UnknownKey { found, expected } => {
                Self::UnknownKey { found, expected }
            }
            RejectedSignature::Malformed | RejectedSignature::Mismatch => Self::BadSignature,
        }
    }
}

/// Returns the effective authentication type and whether the login was
/// active.
fn auth_mode(response: &WlsResponse, options: &Options) -> Result<(AuthType, bool), Rejection> {
    let invalid = || Rejection::InvalidAuthMode {
        auth: response.auth().to_owned(),
        sso: response.sso().to_owned(),
    };

    let accepted = |value: &str| {
        value
            .parse::<AuthType>()
            .ok()
            .filter(|t| options.accepts(*t))
    };

    match (response.auth().is_empty(), response.sso().is_empty()) {
        (false, true) => accepted(response.auth())
            .map(|t| (t, true))
            .ok_or_else(invalid),
        (true, false) => {
            let mut first = None;
            for entry in response.sso_entries() {
                let t = accepted(entry).ok_or_else(invalid)?;
                first.get_or_insert(t);
            }

            first.map(|t| (t, false)).ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
