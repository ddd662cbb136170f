//! Portal HTTP client: login handshake and session-scoped page fetches.

use crate::error::GatewayError;
use reqwest::header::{ORIGIN, REFERER};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Login endpoint on the portal.
const LOGIN_PATH: &str = "/pages/login/checkUser.php";

/// Page dispatcher; individual pages are selected with `?action=`.
const HOME_PATH: &str = "/home";

/// Referer the login endpoint expects.
const INDEX_PATH: &str = "/index";

/// The portal rejects requests without a browser-shaped User-Agent.
const PORTAL_USER_AGENT: &str = "Mozilla/5.0";

/// Field names of the portal login form. The gateway's own API speaks
/// `username`/`password`; these are what the upstream form actually posts.
const FIELD_USERNAME: &str = "txt_uname";
const FIELD_PASSWORD: &str = "txt_pwd";

/// Value of the login response `status` field on success.
const LOGIN_OK: &str = "1";

/// Factory for authenticated portal sessions.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base: Url,
    timeout: Duration,
}

impl PortalClient {
    pub fn new(base: Url, timeout: Duration) -> Self {
        Self { base, timeout }
    }

    /// Perform the login handshake and return an authenticated session.
    ///
    /// Builds a fresh client with an empty cookie jar, posts the form-encoded
    /// credentials with the Origin/Referer values the portal checks, and
    /// inspects the JSON response: `status == "1"` is the only success shape.
    /// Any other `status` is an explicit rejection; a transport failure or a
    /// body that does not parse as JSON is an upstream failure. No retries.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<PortalSession, GatewayError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .user_agent(PORTAL_USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let login_url = join(&self.base, LOGIN_PATH)?;
        let referer = join(&self.base, INDEX_PATH)?;

        let response = http
            .post(login_url)
            .header(ORIGIN, self.base.origin().ascii_serialization())
            .header(REFERER, referer.as_str())
            .form(&[(FIELD_USERNAME, username), (FIELD_PASSWORD, password)])
            .send()
            .await?;

        debug!(status = %response.status(), "portal login response");

        // The portal answers 200 for both outcomes and signals the result in
        // the body, so the HTTP status is not consulted here.
        let body: Value = response.json().await?;
        match body.get("status").and_then(Value::as_str) {
            Some(LOGIN_OK) => Ok(PortalSession {
                http,
                base: self.base.clone(),
            }),
            _ => Err(GatewayError::InvalidCredentials),
        }
    }
}

/// An authenticated portal session.
///
/// Cloning shares the underlying client and its cookie jar, so every clone
/// replays the same login cookies.
#[derive(Debug, Clone)]
pub struct PortalSession {
    http: reqwest::Client,
    base: Url,
}

impl PortalSession {
    /// Session that never performed the login handshake, for store tests.
    #[cfg(test)]
    pub(crate) fn detached(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Fetch one portal page by its `?action=` name and return the raw HTML.
    pub async fn fetch_page(&self, action: &str) -> Result<String, GatewayError> {
        let mut url = join(&self.base, HOME_PATH)?;
        url.query_pairs_mut().append_pair("action", action);

        let response = self.http.get(url).send().await?;
        debug!(action, status = %response.status(), "portal page fetched");
        Ok(response.text().await?)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, GatewayError> {
    base.join(path)
        .map_err(|e| GatewayError::Upstream(format!("bad portal URL: {e}")))
}
