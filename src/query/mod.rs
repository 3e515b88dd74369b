pub mod normalize;
pub mod request;

#[cfg(test)]
mod normalize_test;

pub use normalize::{normalize_page, normalize_page_size, normalize_search, normalize_sort};
pub use request::{ParseError, PageSize, SearchRequest, SortDirection, SortField, SortOrder};
