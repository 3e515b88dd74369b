pub mod repository;

pub use repository::{License, RepositorySummary, SearchResponse};
