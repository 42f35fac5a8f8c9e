// src/api/client.rs

//! Core request helper shared by every endpoint wrapper

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::debug;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use url::Url;

/// Name of the session cookie issued by the server at login.
pub const SESSION_COOKIE: &str = "ctf_token";

/// All API routes live under this prefix on the server.
const API_PREFIX: &str = "/api";

/// HTTP client for the CTF platform API.
///
/// Holds the server base URL and a cookie jar so the session cookie set
/// at login is replayed on subsequent requests of the same instance.
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given server, optionally restoring a
    /// previously persisted session cookie into the jar.
    pub fn new(server_url: &str, session: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(server_url)
            .with_context(|| format!("Invalid server URL: {}", server_url))?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session {
            jar.add_cookie_str(cookie, &base_url);
        }

        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .user_agent(concat!("ctfctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(ApiClient {
            http,
            jar,
            base_url,
        })
    }

    /// Serialized session cookie for the server, if one is held.
    /// The CLI persists this into the config file after login.
    pub fn session(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_owned))
    }

    /// Issue a request to `/api` + `path` and decode the response.
    ///
    /// The response body is always read as text and parsed as JSON on a
    /// best-effort basis: an empty or malformed body decodes to `null`,
    /// even for a successful status. A non-2xx status becomes an error
    /// whose message is extracted from the body (see [`error_message`]).
    /// Transport failures propagate to the caller.
    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value> {
        let url = format!(
            "{}{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            API_PREFIX,
            path
        );
        debug!("{} {}", method, url);

        let mut req = self.http.request(method, &url);
        if let Some(body) = body {
            let payload =
                serde_json::to_string(body).context("Failed to serialize request body")?;
            req = req.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = req
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        let data = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        if !status.is_success() {
            return Err(anyhow!(error_message(&data, &text, status)));
        }

        Ok(data)
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::POST, path, body).await
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::PUT, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None).await
    }
}

/// Pick the most useful message out of a failed response: the body's
/// `error` field, then its `message` field, then the raw body text, then
/// a synthesized `HTTP <status>` string.
fn error_message(data: &Value, text: &str, status: StatusCode) -> String {
    for key in ["error", "message"] {
        if let Some(msg) = data.get(key).and_then(Value::as_str) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    if !text.is_empty() {
        return text.to_string();
    }
    format!("HTTP {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_error_field() {
        let data = json!({"error": "not found", "message": "ignored"});
        assert_eq!(
            error_message(&data, "{...}", StatusCode::NOT_FOUND),
            "not found"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_message_field() {
        let data = json!({"message": "bad request"});
        assert_eq!(
            error_message(&data, "{...}", StatusCode::BAD_REQUEST),
            "bad request"
        );
    }

    #[test]
    fn test_error_message_skips_empty_and_non_string_fields() {
        let data = json!({"error": "", "message": 42});
        assert_eq!(
            error_message(&data, "raw body", StatusCode::BAD_REQUEST),
            "raw body"
        );
    }

    #[test]
    fn test_error_message_uses_raw_text_for_non_json_body() {
        assert_eq!(
            error_message(&Value::Null, "upstream exploded", StatusCode::BAD_GATEWAY),
            "upstream exploded"
        );
    }

    #[test]
    fn test_error_message_synthesizes_status_line() {
        assert_eq!(
            error_message(&Value::Null, "", StatusCode::INTERNAL_SERVER_ERROR),
            "HTTP 500"
        );
    }

    #[test]
    fn test_client_rejects_invalid_server_url() {
        assert!(ApiClient::new("not a url", None).is_err());
    }
}
