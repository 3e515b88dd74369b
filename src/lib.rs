pub mod interactive_ratatui;
pub mod logging;
pub mod query;
pub mod schemas;
pub mod search;

pub use interactive_ratatui::InteractiveSearch;
pub use query::{PageSize, SearchRequest, SortDirection, SortField, SortOrder};
pub use schemas::RepositorySummary;
pub use search::{GatewayConfig, GatewayError, GithubGateway, ResultPage, SearchGateway};
