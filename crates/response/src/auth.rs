use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Authentication type.
///
/// Method the WLS used (or previously used, for single sign-on) to
/// authenticate the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    /// Username and password.
    #[serde(rename = "pwd")]
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown authentication type `{0}`")]
pub struct UnknownAuthType(pub String);

impl AuthType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Password => "pwd",
        }
    }
}

impl FromStr for AuthType {
    type Err = UnknownAuthType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pwd" => Ok(Self::Password),
            other => Err(UnknownAuthType(other.to_owned())),
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
