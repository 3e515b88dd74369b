pub mod format;
pub mod gateway;
pub mod github;

pub use format::format_repository;
pub use gateway::{
    GatewayError, RATE_LIMITED_MESSAGE, ResultPage, SearchGateway, UNPROCESSABLE_MESSAGE,
};
pub use github::{GatewayConfig, GithubGateway};
