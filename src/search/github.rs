//! `reqwest`-backed [`SearchGateway`] for the GitHub repository search API.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, warn};

use super::gateway::{GatewayError, ResultPage, SearchGateway};
use crate::query::SearchRequest;
use crate::schemas::SearchResponse;

const SEARCH_PATH: &str = "/search/repositories";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Sent as `Authorization: token <value>` when present.
    pub token: Option<String>,
    pub user_agent: String,
}

impl GatewayConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: concat!("reposcout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Error body returned by GitHub for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GithubGateway {
    search_url: String,
    http: reqwest::Client,
}

impl GithubGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .context("API token contains characters not allowed in a header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            search_url: format!("{}{SEARCH_PATH}", config.base_url.trim_end_matches('/')),
            http,
        })
    }

    /// Query string for `request`. Sort parameters are omitted entirely when
    /// no sort is set so the server falls back to its relevance ranking.
    pub fn query_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", request.query.clone())];
        if let Some(sort) = request.sort {
            params.push(("sort", sort.field.as_str().to_string()));
            params.push(("order", sort.direction.as_str().to_string()));
        }
        params.push(("per_page", request.page_size.get().to_string()));
        params.push(("page", (request.page_index + 1).to_string()));
        params
    }

    async fn execute(&self, request: &SearchRequest) -> Result<ResultPage, GatewayError> {
        let params = Self::query_params(request);
        debug!(url = %self.search_url, ?params, "requesting search page");

        let response = self
            .http
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(status, response.text().await);
            let error = classify_failure(status, &body);
            warn!(%status, error = %error, "search request failed");
            return Err(error);
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Other(format!("Failed to parse search response: {e}")))?;

        Ok(ResultPage {
            items: body.items,
            total_count: body.total_count,
        })
    }
}

impl SearchGateway for GithubGateway {
    fn fetch_page<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<ResultPage, GatewayError>> {
        Box::pin(self.execute(request))
    }
}

/// Map a non-2xx status and its body onto the gateway error taxonomy.
pub fn classify_failure(status: StatusCode, body: &str) -> GatewayError {
    match status {
        StatusCode::FORBIDDEN => GatewayError::RateLimited,
        StatusCode::UNPROCESSABLE_ENTITY => GatewayError::Unprocessable,
        _ => GatewayError::Other(server_message(status, body)),
    }
}

/// Body of a failed response; an unreadable body classifies by status alone.
fn error_body<E: std::fmt::Display>(status: StatusCode, body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        warn!(%status, error = %e, "failed to read error response body");
        String::new()
    })
}

fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(ApiErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ApiErrorBody>(body)
    {
        return message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}
