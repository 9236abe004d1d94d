//! Request gateway
//!
//! Defines the [`RequestGateway`] trait every caller goes through for
//! outbound JSON calls, plus [`HttpGateway`], the reqwest-backed
//! implementation. The gateway performs one exchange per call: no retries,
//! no backoff, no UI side effects.

use crate::error::{failure_message, ApiError};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const APP_USER_AGENT: &str = concat!("manuscript-desk/", env!("CARGO_PKG_VERSION"));
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs the gateway accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// GET requests never carry a payload
    pub fn sends_body(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            other => Err(ApiError::request_failed(format!(
                "Unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// JSON-in/JSON-out exchange with a uniform error contract
///
/// Implementations must be `Send + Sync` so one gateway can be shared by
/// every async task that talks to the server.
///
/// # Contract
///
/// * success status: resolves with exactly the parsed response body
/// * failure status: rejects with [`ApiError::RequestFailed`] whose message is
///   the body's `error` field, else its `message` field, else the status text
/// * no response at all: rejects with the transport's error text
#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// Perform a single call against `url`
    ///
    /// `url` is an endpoint path (resolved against the server base URL) or an
    /// absolute URL. `body` is ignored for [`Method::Get`].
    async fn call(&self, url: &str, method: Method, body: Option<Value>)
        -> Result<Value, ApiError>;
}

/// Gateway backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Create a gateway relying on the transport's default timeout behavior
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a gateway with an optional overall request timeout
    ///
    /// An expired timeout surfaces as a transport failure.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ApiError::request_failed(format!("Invalid server URL '{}': {}", base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut builder = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// The server base URL endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, url: &str) -> Result<Url, ApiError> {
        if url.trim().is_empty() {
            return Err(ApiError::request_failed("endpoint must not be empty"));
        }
        self.base_url
            .join(url)
            .map_err(|e| ApiError::request_failed(format!("Invalid endpoint '{}': {}", url, e)))
    }
}

#[async_trait]
impl RequestGateway for HttpGateway {
    async fn call(
        &self,
        url: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let target = self.resolve(url)?;
        debug!("{} {}", method, target);

        let mut request = self
            .client
            .request(method.into(), target.clone())
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(payload) = body.filter(|_| method.sends_body()) {
            request = request.json(&payload);
        }

        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed before a response: {}", method, target, e);
            ApiError::from(e)
        })?;

        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&text).map_err(|e| {
                warn!("{} {} returned invalid JSON: {}", method, target, e);
                ApiError::request_failed(format!("Invalid JSON in response: {}", e))
            });
        }

        // The status text is still usable when the body can't be read
        let text = response.text().await.unwrap_or_default();
        let message = failure_message(&text, status.canonical_reason());
        warn!(
            "{} {} failed with status {}: {}",
            method,
            target,
            status.as_u16(),
            message
        );
        Err(ApiError::RequestFailed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing_is_case_insensitive() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
        assert!("TRACE".parse::<Method>().is_err());
    }

    #[test]
    fn test_default_method_is_get() {
        assert_eq!(Method::default(), Method::Get);
        assert!(!Method::Get.sends_body());
        assert!(Method::Delete.sends_body());
    }

    #[test]
    fn test_resolve_joins_paths_against_base() {
        let gateway = HttpGateway::new("http://127.0.0.1:5000").unwrap();
        let url = gateway.resolve("/api/projects/3").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/projects/3");
    }

    #[test]
    fn test_resolve_rejects_empty_endpoint() {
        let gateway = HttpGateway::new("http://127.0.0.1:5000").unwrap();
        let err = gateway.resolve("  ").unwrap_err();
        assert_eq!(err.message(), "endpoint must not be empty");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(HttpGateway::new("not a url").is_err());
    }
}
