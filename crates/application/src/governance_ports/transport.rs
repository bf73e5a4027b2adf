use async_trait::async_trait;
use http::{Method, StatusCode};
use serde_json::Value;
use warden_core::AppResult;

/// One request to the governance API, relative to its base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Unencoded path segments appended to the base URL.
    pub path_segments: Vec<String>,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a body-less request.
    #[must_use]
    pub fn new(method: Method, path_segments: &[&str]) -> Self {
        Self {
            method,
            path_segments: path_segments
                .iter()
                .map(|segment| (*segment).to_owned())
                .collect(),
            body: None,
        }
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the slash-joined path for logs and fakes.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.path_segments.join("/"))
    }
}

/// Status and body of a governance API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

/// Port for sending governance API requests.
///
/// Errors are reserved for transport failures; any HTTP status, including
/// errors, is returned as a [`RawResponse`].
#[async_trait]
pub trait GovernanceTransport: Send + Sync {
    /// Sends one request and returns the raw response.
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse>;
}
