use std::marker::PhantomData;
use std::sync::Arc;

use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use warden_core::{AppError, AppResult};

use super::transport::{ApiRequest, GovernanceTransport};
use super::wire::{AccessRuleDetail, AccessRuleReference, AccessRuleRequestBody};

const ACCESS_RULES_PATH: [&str; 3] = ["gov", "v1", "access-rules"];

/// Governance API response tied to the success status of its endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// HTTP status.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
    expected: StatusCode,
    payload: PhantomData<fn() -> T>,
}

impl<T> ApiResponse<T> {
    fn new(status: StatusCode, body: String, expected: StatusCode) -> Self {
        Self {
            status,
            body,
            expected,
            payload: PhantomData,
        }
    }

    /// Returns whether the status is the endpoint's success status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == self.expected
    }

    /// Returns the status line, for example `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {reason}", self.status.as_u16()),
            None => self.status.as_u16().to_string(),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decodes the body when the status is the endpoint's success status.
    ///
    /// `None` means the status did not match; `Some(Err(_))` means it matched
    /// but the body is not the expected document.
    #[must_use]
    pub fn payload(&self) -> Option<AppResult<T>> {
        self.is_success().then(|| {
            serde_json::from_str::<T>(self.body.as_str()).map_err(|error| {
                AppError::Internal(format!(
                    "failed to parse governance API response body: {error}"
                ))
            })
        })
    }
}

/// Typed client for the governance access rule endpoints.
#[derive(Clone)]
pub struct GovernanceClient {
    transport: Arc<dyn GovernanceTransport>,
}

impl GovernanceClient {
    /// Creates a client over a transport.
    #[must_use]
    pub fn new(transport: Arc<dyn GovernanceTransport>) -> Self {
        Self { transport }
    }

    /// Creates an access rule; succeeds on `201 Created`.
    pub async fn create_access_rule(
        &self,
        body: &AccessRuleRequestBody,
    ) -> AppResult<ApiResponse<AccessRuleReference>> {
        let request = ApiRequest::new(Method::POST, &ACCESS_RULES_PATH).with_body(encode(body)?);
        self.execute(request, StatusCode::CREATED).await
    }

    /// Fetches an access rule; succeeds on `200 OK`.
    pub async fn get_access_rule(&self, rule_id: &str) -> AppResult<ApiResponse<AccessRuleDetail>> {
        let request = ApiRequest::new(Method::GET, &rule_path(rule_id));
        self.execute(request, StatusCode::OK).await
    }

    /// Replaces an access rule; succeeds on `200 OK`.
    pub async fn update_access_rule(
        &self,
        rule_id: &str,
        body: &AccessRuleRequestBody,
    ) -> AppResult<ApiResponse<AccessRuleDetail>> {
        let request = ApiRequest::new(Method::PUT, &rule_path(rule_id)).with_body(encode(body)?);
        self.execute(request, StatusCode::OK).await
    }

    /// Archives an access rule; succeeds on `200 OK`.
    pub async fn archive_access_rule(
        &self,
        rule_id: &str,
    ) -> AppResult<ApiResponse<AccessRuleDetail>> {
        let mut segments = rule_path(rule_id).to_vec();
        segments.push("archive");
        let request = ApiRequest::new(Method::POST, &segments);
        self.execute(request, StatusCode::OK).await
    }

    async fn execute<T>(
        &self,
        request: ApiRequest,
        expected: StatusCode,
    ) -> AppResult<ApiResponse<T>> {
        let response = self.transport.send(request).await?;
        Ok(ApiResponse::new(response.status, response.body, expected))
    }
}

fn rule_path(rule_id: &str) -> [&str; 4] {
    let [gov, version, collection] = ACCESS_RULES_PATH;
    [gov, version, collection, rule_id]
}

fn encode<T: Serialize>(body: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|error| {
        AppError::Internal(format!("failed to encode governance API request body: {error}"))
    })
}
