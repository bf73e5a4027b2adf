use async_trait::async_trait;
use tracing::debug;
use url::Url;
use warden_application::{ApiRequest, GovernanceTransport, RawResponse};
use warden_core::{AppError, AppResult};

/// HTTP transport for the governance API.
pub struct ReqwestGovernanceTransport {
    http_client: reqwest::Client,
    base_url: Url,
    api_token: Option<String>,
}

impl ReqwestGovernanceTransport {
    /// Creates a transport rooted at `base_url`.
    ///
    /// When `api_token` is set every request carries it as a bearer token.
    pub fn new(
        http_client: reqwest::Client,
        base_url: Url,
        api_token: Option<String>,
    ) -> AppResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "governance API URL '{base_url}' cannot be used as a base URL"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            api_token: api_token.filter(|token| !token.trim().is_empty()),
        })
    }

    fn endpoint(&self, path_segments: &[String]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!(
                    "governance API URL '{}' cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(path_segments);

        Ok(url)
    }
}

#[async_trait]
impl GovernanceTransport for ReqwestGovernanceTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse> {
        let url = self.endpoint(&request.path_segments)?;
        let path = request.path();
        let mut builder = self.http_client.request(request.method.clone(), url);

        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to call governance API {} {path}: {error}",
                request.method
            ))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to read governance API response body for {} {path}: {error}",
                request.method
            ))
        })?;

        debug!(
            method = %request.method,
            path = %path,
            status = status.as_u16(),
            "governance API call completed"
        );

        Ok(RawResponse { status, body })
    }
}
