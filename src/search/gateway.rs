//! The boundary between the search core and the remote search API.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::query::SearchRequest;
use crate::schemas::RepositorySummary;

pub const RATE_LIMITED_MESSAGE: &str =
    "API rate limit exceeded. Please wait a moment and try again.";
pub const UNPROCESSABLE_MESSAGE: &str =
    "The search query could not be processed. Try a different query.";

/// Classified gateway failure. The gateway never retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// HTTP 403 from the search API.
    #[error("rate limited by the search API")]
    RateLimited,
    /// HTTP 422: the server rejects this query/parameter combination.
    #[error("search API could not process the request")]
    Unprocessable,
    /// Anything else; carries the server or transport message verbatim.
    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    /// Text shown to the user in place of results.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::RateLimited => RATE_LIMITED_MESSAGE.to_string(),
            GatewayError::Unprocessable => UNPROCESSABLE_MESSAGE.to_string(),
            GatewayError::Other(message) => message.clone(),
        }
    }
}

/// One page of results for exactly one [`SearchRequest`], in server ranking order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPage {
    pub items: Vec<RepositorySummary>,
    pub total_count: u64,
}

impl ResultPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages needed to show `total_count` items.
    pub fn page_count(&self, page_size: usize) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(page_size as u64)
    }
}

/// Performs one search call. Implementations must be cheap to share across tasks.
pub trait SearchGateway: Send + Sync {
    fn fetch_page<'a>(
        &'a self,
        request: &'a SearchRequest,
    ) -> BoxFuture<'a, Result<ResultPage, GatewayError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(GatewayError::RateLimited.user_message(), RATE_LIMITED_MESSAGE);
        assert_eq!(
            GatewayError::Unprocessable.user_message(),
            UNPROCESSABLE_MESSAGE
        );
        assert_eq!(
            GatewayError::Other("Server Error".to_string()).user_message(),
            "Server Error"
        );
    }

    #[test]
    fn test_page_count() {
        let page = ResultPage {
            items: Vec::new(),
            total_count: 57,
        };
        assert_eq!(page.page_count(10), 6);
        assert_eq!(page.page_count(25), 3);
        assert_eq!(page.page_count(50), 2);
        assert_eq!(ResultPage::empty().page_count(10), 0);
    }
}
