use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::response::AuthType;

/// Default login page of the University of Cambridge WLS.
pub const DEFAULT_WLS_URL: &str = "https://raven.cam.ac.uk/auth/authenticate.html";

/// Default maximum age of a response, in seconds.
pub const DEFAULT_MAX_SKEW: u64 = 30;

/// Default protocol version requested from the WLS.
pub const DEFAULT_VERSION: u32 = 2;

/// WAA configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Login page of the WLS.
    pub wls_url: String,

    /// Protocol version requested from the WLS.
    pub version: u32,

    /// Maximum distance, in seconds, between a response's issue date and
    /// the current time.
    pub max_skew: u64,

    /// Authentication types accepted from the WLS.
    pub auth_types: Vec<AuthType>,

    /// Description of the resource shown to the user on the login page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Options {
    pub fn max_skew(&self) -> TimeDelta {
        i64::try_from(self.max_skew)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    pub fn accepts(&self, auth_type: AuthType) -> bool {
        self.auth_types.contains(&auth_type)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wls_url: DEFAULT_WLS_URL.to_owned(),
            version: DEFAULT_VERSION,
            max_skew: DEFAULT_MAX_SKEW,
            auth_types: vec![AuthType::Password],
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_with_defaults() {
        let options: Options = serde_json::from_str(r#"{ "max_skew": 10 }"#).unwrap();
        assert_eq!(
            options,
            Options {
                max_skew: 10,
                ..Default::default()
            }
        );
        assert_eq!(options.max_skew(), TimeDelta::seconds(10));
    }

    #[test]
    fn deserialize_auth_types() {
        let options: Options = serde_json::from_str(
            r#"{
                "wls_url": "https://demo.raven.cam.ac.uk/auth/authenticate.html",
                "auth_types": ["pwd"],
                "description": "Example"
            }"#,
        )
        .unwrap();
        assert!(options.accepts(AuthType::Password));
        assert_eq!(options.description.as_deref(), Some("Example"));

        let options: Options = serde_json::from_str(r#"{ "auth_types": [] }"#).unwrap();
        assert!(!options.accepts(AuthType::Password));

        assert!(serde_json::from_str::<Options>(r#"{ "auth_types": ["x509"] }"#).is_err());
    }
}
