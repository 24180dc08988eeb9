use std::fmt;

use base64::{engine::general_purpose, Engine};
use reqwest::header::{HeaderValue, InvalidHeaderValue};

use super::lockfile::Credentials;

/// Basic auth username expected by the client API.
pub const LCU_USERNAME: &str = "riot";
pub const LOOPBACK_HOST: &str = "127.0.0.1";

/// Connection state derived from the lockfile credentials.
///
/// The default session is not ready; fetching with it triggers a lockfile reload.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LcuSession {
    base_url: String,
    auth_header: String,
    ready: bool,
}

impl LcuSession {
    pub fn derive(credentials: &Credentials) -> Self {
        let basic_auth = format!("{}:{}", LCU_USERNAME, credentials.secret());
        let auth_secret = general_purpose::STANDARD.encode(basic_auth.as_bytes());

        Self {
            base_url: format!("{}://{}:{}", credentials.scheme(), LOOPBACK_HOST, credentials.port()),
            auth_header: format!("Basic {}", auth_secret),
            ready: true,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Authorization header value, marked sensitive so it never shows up in debug output.
    pub fn auth_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut auth_value = HeaderValue::from_str(&self.auth_header)?;
        auth_value.set_sensitive(true);
        Ok(auth_value)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Joins an absolute API path onto the base url.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl From<&Credentials> for LcuSession {
    fn from(credentials: &Credentials) -> Self {
        LcuSession::derive(credentials)
    }
}

impl fmt::Debug for LcuSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LcuSession")
            .field("base_url", &self.base_url)
            .field("auth_header", &"<redacted>")
            .field("ready", &self.ready)
            .finish()
    }
}
