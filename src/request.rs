//! Authentication requests (WAA to WLS).
use serde::Serialize;

use crate::Options;

/// Yes/no protocol flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Yes,
    No,
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid authentication request: {0}")]
pub struct InvalidRequest(#[from] serde_urlencoded::ser::Error);

/// Authentication request.
///
/// Serialized as the query string of the redirect sending the user to the
/// WLS login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthRequest {
    /// Protocol version.
    pub ver: u32,

    /// URL the WLS must send the user back to.
    pub url: String,

    /// Description of the resource, shown on the login page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Comma-separated list of acceptable authentication types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aauth: Option<String>,

    /// Whether the user must (`yes`) or must not (`no`) be asked to
    /// authenticate interactively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iact: Option<Flag>,

    /// Why authentication is being requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Data echoed back in the response's `params` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,

    /// Whether the WLS should handle failures itself instead of responding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail: Option<Flag>,
}

impl AuthRequest {
    pub fn new(options: &Options, url: impl Into<String>) -> Self {
        let aauth = options
            .auth_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",");

        Self {
            ver: options.version,
            url: url.into(),
            desc: options.description.clone(),
            aauth: (!aauth.is_empty()).then_some(aauth),
            iact: None,
            msg: None,
            params: None,
            fail: None,
        }
    }

    pub fn with_message(self, msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..self
        }
    }

    pub fn with_params(self, params: impl Into<String>) -> Self {
        Self {
            params: Some(params.into()),
            ..self
        }
    }

    pub fn with_interaction(self, interact: bool) -> Self {
        Self {
            iact: Some(interact.into()),
            ..self
        }
    }

    pub fn with_fail(self, fail: bool) -> Self {
        Self {
            fail: Some(fail.into()),
            ..self
        }
    }

    pub fn to_query(&self) -> Result<String, InvalidRequest> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Builds the URL of the WLS login page for this request.
    pub fn to_url(&self, wls_url: &str) -> Result<String, InvalidRequest> {
        let separator = if wls_url.contains('?') { '&' } else { '?' };
        Ok(format!("{wls_url}{separator}{}", self.to_query()?))
    }
}
