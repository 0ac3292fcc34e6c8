//! Collaborators injected into the validator.
use chrono::{DateTime, Utc};
use std::{borrow::Cow, collections::HashMap, hash::BuildHasher};

use crate::{crypto::TrustedKey, Error};

/// Environment that provides date and time.
///
/// Used to check the freshness of responses.
pub trait Clock {
    /// Returns the current date and time.
    fn now(&self) -> DateTime<Utc>;
}

impl<'a, T: Clock> Clock for &'a T {
    fn now(&self) -> DateTime<Utc> {
        T::now(*self)
    }
}

/// System clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock stopped at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of the WLS key currently trusted.
///
/// Keys are rotated out of band: a source simply reports the key to use for
/// the current validation. Failing to provide one is fatal.
pub trait KeySource {
    fn trusted_key(&self) -> Result<Cow<TrustedKey>, Error>;
}

impl<'a, T: KeySource> KeySource for &'a T {
    fn trusted_key(&self) -> Result<Cow<TrustedKey>, Error> {
        T::trusted_key(*self)
    }
}

impl KeySource for TrustedKey {
    fn trusted_key(&self) -> Result<Cow<TrustedKey>, Error> {
        Ok(Cow::Borrowed(self))
    }
}

impl KeySource for Option<TrustedKey> {
    fn trusted_key(&self) -> Result<Cow<TrustedKey>, Error> {
        self.as_ref()
            .map(Cow::Borrowed)
            .ok_or(Error::Crypto(crate::crypto::Error::KeyNotFound))
    }
}

/// Resolves a validated principal into an application user.
pub trait IdentityResolver {
    type User;
    type Error;

    /// Returns the user named `principal`, or `None` if there is none.
    fn resolve(&self, principal: &str) -> Result<Option<Self::User>, Self::Error>;
}

impl<'a, T: IdentityResolver> IdentityResolver for &'a T {
    type User = T::User;
    type Error = T::Error;

    fn resolve(&self, principal: &str) -> Result<Option<Self::User>, Self::Error> {
        T::resolve(*self, principal)
    }
}

impl<U: Clone, S: BuildHasher> IdentityResolver for HashMap<String, U, S> {
    type User = U;
    type Error = std::convert::Infallible;

    fn resolve(&self, principal: &str) -> Result<Option<U>, Self::Error> {
        Ok(self.get(principal).cloned())
    }
}
