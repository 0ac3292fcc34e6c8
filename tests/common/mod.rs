//! Web Login Service simulator.
//!
//! Builds and signs WLS responses the way the real service does, using a
//! fixed test key published under the identifier `901`.
#![allow(unused)]
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use ucam_webauth::{
    callback::RESPONSE_PARAMETER,
    crypto::{encode_signature, SecretKey, SigningKey, TrustedKey},
    response::ISSUE_FORMAT,
    FixedClock, Validator,
};

pub const KID: &str = "901";

pub const SECRET_KEY_PEM: &str = include_str!("../keys/wls-901.pem");

pub const PUBLIC_KEY_PEM: &str = include_str!("../keys/wls-901.pub.pem");

pub const PKCS1_PUBLIC_KEY_PEM: &str = include_str!("../keys/wls-901.pkcs1.pub.pem");

pub const RETURN_URL: &str = "http://localhost/secured";

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2012, 10, 26, 10, 30, 45).unwrap()
}

pub fn secret_key() -> SecretKey {
    SecretKey::from_pkcs1_pem(SECRET_KEY_PEM).unwrap()
}

pub fn trusted_key() -> TrustedKey {
    TrustedKey::from_pem(KID, PUBLIC_KEY_PEM).unwrap()
}

/// Validator trusting the test key, with its clock stopped at [`now`].
pub fn validator() -> Validator<TrustedKey, FixedClock> {
    Validator::new(trusted_key()).with_clock(FixedClock(now()))
}

/// Simulated WLS response.
#[derive(Debug, Clone)]
pub struct Wls {
    pub ver: String,
    pub status: u16,
    pub msg: String,
    pub issue: DateTime<Utc>,
    pub id: String,

    /// Unescaped URL.
    pub url: String,

    pub principal: String,
    pub auth: String,
    pub sso: String,
    pub life: Option<u64>,
    pub params: String,
    pub kid: String,
    pub key: SecretKey,
}

impl Wls {
    /// Successful active login of `test0001`, issued at [`now`].
    pub fn new(url: &str) -> Self {
        Self {
            ver: "2".to_owned(),
            status: 200,
            msg: String::new(),
            issue: now(),
            id: "1351247047-25829-18".to_owned(),
            url: url.to_owned(),
            principal: "test0001".to_owned(),
            auth: "pwd".to_owned(),
            sso: String::new(),
            life: Some(36000),
            params: String::new(),
            kid: KID.to_owned(),
            key: secret_key(),
        }
    }

    pub fn issued(self, offset: TimeDelta) -> Self {
        Self {
            issue: now() + offset,
            ..self
        }
    }

    /// URL escaped the way the WLS escapes it inside the response.
    pub fn escaped_url(&self) -> String {
        self.url.replace('%', "%25").replace('!', "%21")
    }

    pub fn signing_bytes(&self) -> String {
        [
            self.ver.clone(),
            self.status.to_string(),
            self.msg.clone(),
            self.issue.format(ISSUE_FORMAT).to_string(),
            self.id.clone(),
            self.escaped_url(),
            self.principal.clone(),
            self.auth.clone(),
            self.sso.clone(),
            self.life.map(|l| l.to_string()).unwrap_or_default(),
            self.params.clone(),
        ]
        .join("!")
    }

    pub fn signature(&self) -> String {
        encode_signature(&self.key.sign_bytes(self.signing_bytes().as_bytes()).unwrap())
    }

    /// Signed `WLS-Response` value.
    pub fn response(&self) -> String {
        format!("{}!{}!{}", self.signing_bytes(), self.kid, self.signature())
    }

    /// URL the browser is sent back to.
    pub fn callback_url(&self) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let query = serde_urlencoded::to_string([(RESPONSE_PARAMETER, self.response())]).unwrap();
        format!("{}{separator}{query}", self.url)
    }
}
