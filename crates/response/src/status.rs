use core::fmt;
use serde::{Deserialize, Serialize};

/// Status code of a WLS response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Status {
    /// Successful authentication.
    Success,

    /// The user cancelled the authentication request.
    Cancelled,

    /// No mutually acceptable authentication types available.
    NoAcceptableAuthType,

    /// Unsupported protocol version.
    UnsupportedVersion,

    /// General request parameter error.
    RequestParameterError,

    /// Interaction would be required.
    InteractionRequired,

    /// The WAA is not authorised to use the WLS.
    WaaNotAuthorised,

    /// Authentication declined by the WLS.
    AuthenticationDeclined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown status code {0}")]
pub struct UnknownStatus(pub u16);

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Cancelled => 410,
            Self::NoAcceptableAuthType => 510,
            Self::UnsupportedVersion => 520,
            Self::RequestParameterError => 530,
            Self::InteractionRequired => 540,
            Self::WaaNotAuthorised => 560,
            Self::AuthenticationDeclined => 570,
        }
    }

    pub const fn from_code(code: u16) -> Result<Self, UnknownStatus> {
        match code {
            200 => Ok(Self::Success),
            410 => Ok(Self::Cancelled),
            510 => Ok(Self::NoAcceptableAuthType),
            520 => Ok(Self::UnsupportedVersion),
            530 => Ok(Self::RequestParameterError),
            540 => Ok(Self::InteractionRequired),
            560 => Ok(Self::WaaNotAuthorised),
            570 => Ok(Self::AuthenticationDeclined),
            other => Err(UnknownStatus(other)),
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "successful authentication",
            Self::Cancelled => "authentication cancelled at user's request",
            Self::NoAcceptableAuthType => "no mutually acceptable authentication types available",
            Self::UnsupportedVersion => "unsupported protocol version",
            Self::RequestParameterError => "general request parameter error",
            Self::InteractionRequired => "interaction would be required",
            Self::WaaNotAuthorised => "WAA not authorised",
            Self::AuthenticationDeclined => "authentication declined",
        }
    }
}

impl TryFrom<u16> for Status {
    type Error = UnknownStatus;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl From<Status> for u16 {
    fn from(value: Status) -> Self {
        value.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}
