//! Responses (WLS to WAA).
//!
//! The WLS sends the user back to the requested URL with the response
//! appended as a `WLS-Response` query parameter.

/// Name of the query parameter carrying the response.
pub const RESPONSE_PARAMETER: &str = "WLS-Response";

#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("missing `WLS-Response` parameter")]
    MissingResponse,

    #[error("duplicate `WLS-Response` parameter")]
    DuplicateResponse,

    #[error("invalid `WLS-Response` parameter: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),
}

/// Request made by the browser when the WLS sends it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callback {
    /// Requested URL, without the `WLS-Response` parameter.
    ///
    /// This is the URL the response must be bound to.
    pub return_url: String,

    /// Query-decoded `WLS-Response` value.
    pub response: String,
}

impl Callback {
    /// Splits the URL requested by the browser.
    ///
    /// Query parameters other than `WLS-Response` are kept verbatim and in
    /// order. The response value is query-decoded exactly once.
    pub fn parse(url: &str) -> Result<Self, CallbackError> {
        let (base, query) = url
            .split_once('?')
            .ok_or(CallbackError::MissingResponse)?;

        let mut kept = Vec::new();
        let mut response = None;
        for pair in query.split('&') {
            let name = pair.split_once('=').map_or(pair, |(name, _)| name);
            if name == RESPONSE_PARAMETER {
                if response.is_some() {
                    return Err(CallbackError::DuplicateResponse);
                }

                let decoded: Vec<(String, String)> = serde_urlencoded::from_str(pair)?;
                response = decoded.into_iter().next().map(|(_, value)| value);
            } else {
                kept.push(pair)
            }
        }

        let response = response.ok_or(CallbackError::MissingResponse)?;

        let mut return_url = base.to_owned();
        if !kept.is_empty() {
            return_url.push('?');
            return_url.push_str(&kept.join("&"));
        }

        Ok(Self {
            return_url,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_only() {
        let callback =
            Callback::parse("http://localhost/secured?WLS-Response=2%21200%21%21x%21http%253A%252F%252Flocalhost%252F")
                .unwrap();
        assert_eq!(callback.return_url, "http://localhost/secured");
        assert_eq!(callback.response, "2!200!!x!http%3A%2F%2Flocalhost%2F");
    }

    #[test]
    fn other_parameters_are_kept() {
        let callback = Callback::parse("http://localhost/?a=1&b=%2F&WLS-Response=r+s&c").unwrap();
        assert_eq!(callback.return_url, "http://localhost/?a=1&b=%2F&c");
        assert_eq!(callback.response, "r s");
    }

    #[test]
    fn missing_response() {
        assert!(matches!(
            Callback::parse("http://localhost/"),
            Err(CallbackError::MissingResponse)
        ));
        assert!(matches!(
            Callback::parse("http://localhost/?a=WLS-Response"),
            Err(CallbackError::MissingResponse)
        ));
    }

    #[test]
    fn duplicate_response() {
        assert!(matches!(
            Callback::parse("http://localhost/?WLS-Response=a&WLS-Response=b"),
            Err(CallbackError::DuplicateResponse)
        ));
    }
}
