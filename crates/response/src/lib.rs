//! WLS responses of the Ucam WebAuth protocol.
//!
//! After authenticating a user, the Web Login Service redirects the browser
//! back to the Web Application Agent with a `WLS-Response` query parameter.
//! Its value is a list of fields separated by `!`:
//!
//! ```text
//! ver!status!msg!issue!id!url!principal!auth!sso!life!params!kid!sig
//! ```
//!
//! This crate parses that string into a [`WlsResponse`] and rebuilds the
//! exact bytes covered by its signature ([`WlsResponse::signing_bytes`]).
//! Field values are kept verbatim: the WLS escapes `%` and `!` inside fields
//! (as `%25` and `%21`) and signs the escaped text, so nothing is decoded
//! here.
use chrono::{DateTime, NaiveDateTime, Utc};
use core::fmt;
use std::str::FromStr;

mod auth;
mod error;
mod field;
mod status;

pub use auth::*;
pub use error::*;
pub use field::*;
pub use status::*;

/// Protocol versions sharing the 13-field response layout.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["1", "2"];

/// Format of the `issue` field, e.g. `20121026T103045Z`.
pub const ISSUE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Separator between response fields.
pub const SEPARATOR: char = '!';

/// Parsed WLS response.
///
/// Immutable once parsed. Every field keeps its raw text; `status`, `issue`
/// and `life` are additionally available in typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlsResponse {
    raw: [String; 13],
    status: Status,
    issue: DateTime<Utc>,
    life: Option<u64>,
}

impl WlsResponse {
    /// Parses a `WLS-Response` value.
    ///
    /// The input must already be extracted from the query string (i.e.
    /// query-decoded once); individual fields are not decoded further.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = input.split(SEPARATOR).collect();

        // `split` always yields at least one item.
        let ver = fields[0];
        if ver.is_empty() {
            return Err(ParseError::MissingField(Field::Ver));
        }

        if !SUPPORTED_VERSIONS.contains(&ver) {
            return Err(ParseError::UnsupportedVersion(ver.to_owned()));
        }

        let found = fields.len();
        let raw: [String; 13] = fields
            .into_iter()
            .map(ToOwned::to_owned)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| ParseError::FieldCount {
                expected: Field::ALL.len(),
                found,
            })?;

        for field in Field::REQUIRED {
            if raw[field.index()].is_empty() {
                return Err(ParseError::MissingField(field));
            }
        }

        let status_text = &raw[Field::Status.index()];
        let status = status_text
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidStatus(status_text.clone()))
            .and_then(|code| Status::from_code(code).map_err(Into::into))?;

        if status.is_success() && raw[Field::Principal.index()].is_empty() {
            return Err(ParseError::MissingField(Field::Principal));
        }

        let issue_text = &raw[Field::Issue.index()];
        let issue = NaiveDateTime::parse_from_str(issue_text, ISSUE_FORMAT)
            .map_err(|_| ParseError::InvalidIssue(issue_text.clone()))?
            .and_utc();

        let life_text = &raw[Field::Life.index()];
        let life = if life_text.is_empty() {
            None
        } else {
            Some(
                life_text
                    .parse()
                    .map_err(|_| ParseError::InvalidLife(life_text.clone()))?,
            )
        };

        Ok(Self {
            raw,
            status,
            issue,
            life,
        })
    }

    /// Returns the raw text of the given field.
    pub fn field(&self, field: Field) -> &str {
        &self.raw[field.index()]
    }

    pub fn ver(&self) -> &str {
        self.field(Field::Ver)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn msg(&self) -> &str {
        self.field(Field::Msg)
    }

    pub fn issue(&self) -> DateTime<Utc> {
        self.issue
    }

    pub fn id(&self) -> &str {
        self.field(Field::Id)
    }

    /// Raw (still escaped) URL the WLS is responding to.
    pub fn url(&self) -> &str {
        self.field(Field::Url)
    }

    /// Authenticated user name. Empty unless the status is `200`.
    pub fn principal(&self) -> &str {
        self.field(Field::Principal)
    }

    /// Authentication type used for an interactive login, or empty.
    pub fn auth(&self) -> &str {
        self.field(Field::Auth)
    }

    /// Comma-separated authentication types of a prior session, or empty.
    pub fn sso(&self) -> &str {
        self.field(Field::Sso)
    }

    /// Entries of the `sso` field.
    ///
    /// Yields nothing when the field is empty.
    pub fn sso_entries(&self) -> impl Iterator<Item = &str> {
        let sso = self.sso();
        sso.split(',').filter(move |_| !sso.is_empty())
    }

    /// Remaining session lifetime, in seconds.
    pub fn life(&self) -> Option<u64> {
        self.life
    }

    /// Parameters echoed back unmodified from the request.
    pub fn params(&self) -> &str {
        self.field(Field::Params)
    }

    pub fn kid(&self) -> &str {
        self.field(Field::Kid)
    }

    /// Encoded signature.
    pub fn sig(&self) -> &str {
        self.field(Field::Sig)
    }

    /// Builds the exact string signed by the WLS.
    ///
    /// This is the `!`-joined raw text of [`Field::SIGNED`]. No field is
    /// normalized in any way: any change here invalidates every signature.
    pub fn signing_bytes(&self) -> String {
        let fields: Vec<&str> = Field::SIGNED.iter().map(|f| self.field(*f)).collect();
        fields.join("!")
    }
}

impl FromStr for WlsResponse {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Re-emits the raw response.
impl fmt::Display for WlsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw.join("!"))
    }
}
