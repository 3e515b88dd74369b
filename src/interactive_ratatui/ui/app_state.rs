use tracing::debug;

use crate::interactive_ratatui::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive_ratatui::domain::models::{FetchStatus, PageRequest, PageResponse};
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::query::{
    SearchRequest, normalize_page, normalize_page_size, normalize_search, normalize_sort,
};
use crate::schemas::RepositorySummary;
use crate::search::ResultPage;

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub const SEARCHING_MESSAGE: &str = "[searching...]";

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub ui: UiState,
}

/// Single source of truth for the search: the latest request, its fetch
/// lifecycle, the page it produced, and the user's selected repository.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw contents of the search bar, not yet normalized.
    pub input: String,
    pub request: SearchRequest,
    pub status: FetchStatus,
    /// Empty while idle or failed.
    pub page: ResultPage,
    pub error: Option<String>,
    /// Independent of `request`/`status`; a new search does not clear it.
    pub selected: Option<RepositorySummary>,
    /// Generation token of the latest issued request.
    pub current_search_id: u64,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub message: Option<String>,
    pub highlighted_index: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState::default(),
            ui: UiState::default(),
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.input = q;
                Command::None
            }
            Message::SubmitSearch(raw) => {
                let next = normalize_search(&raw, &self.search.request);
                self.search.input = raw;
                if next.is_empty() {
                    // Empty queries never reach the gateway.
                    self.search.request = next;
                    self.reset_results();
                    Command::None
                } else {
                    self.start_fetch(next)
                }
            }
            Message::ChangeSort(field) => {
                let next = normalize_sort(&self.search.request, field);
                self.start_fetch(next)
            }
            Message::ChangePage(index) => {
                let next = normalize_page(&self.search.request, index);
                self.start_fetch(next)
            }
            Message::ChangePageSize(size) => {
                let next = normalize_page_size(&self.search.request, size);
                self.start_fetch(next)
            }
            Message::SelectItem(repo) => {
                self.search.selected = Some(repo);
                Command::None
            }
            Message::ClearSearch => {
                let next_id = self.search.current_search_id + 1;
                self.search = SearchState {
                    current_search_id: next_id,
                    ..SearchState::default()
                };
                self.ui.highlighted_index = 0;
                self.ui.message = None;
                Command::None
            }
            Message::FetchCompleted(response) => self.apply_response(response),
            Message::SelectResult(index) => {
                if index < self.search.page.items.len() {
                    self.ui.highlighted_index = index;
                }
                Command::None
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    /// Make `request` the latest one and ask for it to be fetched. Any
    /// response still in flight for an earlier request becomes stale.
    fn start_fetch(&mut self, request: SearchRequest) -> Command {
        self.search.current_search_id += 1;
        self.search.request = request.clone();
        self.search.status = FetchStatus::Loading;
        self.ui.message = Some(SEARCHING_MESSAGE.to_string());

        Command::FetchPage(PageRequest {
            id: self.search.current_search_id,
            request,
        })
    }

    fn apply_response(&mut self, response: PageResponse) -> Command {
        if response.id != self.search.current_search_id {
            debug!(
                response_id = response.id,
                current_id = self.search.current_search_id,
                query = %response.request.query,
                page = response.request.page_index,
                "dropping stale search response"
            );
            return Command::None;
        }

        match response.outcome {
            Ok(page) => {
                self.search.status = FetchStatus::Succeeded;
                self.search.page = page;
                self.search.error = None;
            }
            Err(e) => {
                self.search.status = FetchStatus::Failed;
                self.search.page = ResultPage::empty();
                self.search.error = Some(e.user_message());
            }
        }
        self.ui.highlighted_index = 0;
        self.ui.message = None;
        Command::None
    }

    fn reset_results(&mut self) {
        // Bumping the id turns any in-flight response into a stale one.
        self.search.current_search_id += 1;
        self.search.status = FetchStatus::Idle;
        self.search.page = ResultPage::empty();
        self.search.error = None;
        self.ui.highlighted_index = 0;
        self.ui.message = None;
    }
}
