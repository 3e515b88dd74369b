//! Turns raw user intents into canonical [`SearchRequest`]s.
//!
//! Every function here is pure: it takes the current request by reference
//! and returns the next one. The tie-break rules (a fresh search or a new
//! sort always lands on the first page, a newly chosen field always starts
//! ascending) live here and nowhere else.

use super::request::{PageSize, SearchRequest, SortDirection, SortField, SortOrder};

/// Canonicalise a submitted query.
///
/// Whitespace-only input yields the reset form (empty query, no sort, page 0).
/// Otherwise the trimmed query starts a fresh search on page 0 without any
/// sort. Page size is kept in both cases.
pub fn normalize_search(raw_query: &str, current: &SearchRequest) -> SearchRequest {
    SearchRequest {
        query: raw_query.trim().to_string(),
        sort: None,
        page_index: 0,
        page_size: current.page_size,
    }
}

/// Apply a click on a sortable column.
///
/// Only the same field currently sorted ascending flips to descending; any
/// other prior state (no sort, same field descending, different field)
/// starts at ascending.
pub fn normalize_sort(current: &SearchRequest, field: SortField) -> SearchRequest {
    let direction = match current.sort {
        Some(SortOrder {
            field: current_field,
            direction: SortDirection::Asc,
        }) if current_field == field => SortDirection::Desc,
        _ => SortDirection::Asc,
    };

    SearchRequest {
        sort: Some(SortOrder { field, direction }),
        page_index: 0,
        ..current.clone()
    }
}

/// Jump to a page. Indices past the last page are allowed; the API returns an empty page.
pub fn normalize_page(current: &SearchRequest, page_index: usize) -> SearchRequest {
    SearchRequest {
        page_index,
        ..current.clone()
    }
}

pub fn normalize_page_size(current: &SearchRequest, page_size: PageSize) -> SearchRequest {
    SearchRequest {
        page_size,
        page_index: 0,
        ..current.clone()
    }
}
