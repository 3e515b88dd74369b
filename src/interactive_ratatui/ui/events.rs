use crate::interactive_ratatui::domain::models::PageResponse;
use crate::query::{PageSize, SortField};
use crate::schemas::RepositorySummary;

#[derive(Clone, Debug)]
pub enum Message {
    // Search intents
    QueryChanged(String),
    SubmitSearch(String),
    ChangeSort(SortField),
    ChangePage(usize),
    ChangePageSize(PageSize),
    SelectItem(RepositorySummary),
    ClearSearch,

    // Gateway events
    FetchCompleted(PageResponse),

    // Result list highlight
    SelectResult(usize),

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
