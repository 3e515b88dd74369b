use crate::interactive_ratatui::constants::{DETAIL_PANE_PERCENT, SEARCH_BAR_HEIGHT};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, help_dialog::HelpDialog, result_detail::ResultDetail, result_list::ResultList,
    search_bar::SearchBar,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    result_detail: ResultDetail,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Results + details
            ])
            .split(f.area());

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - DETAIL_PANE_PERCENT),
                Constraint::Percentage(DETAIL_PANE_PERCENT),
            ])
            .split(chunks[1]);

        self.sync(state);

        self.search_bar.render(f, chunks[0]);
        self.result_list.render(f, panes[0]);
        self.result_detail.render(f, panes[1]);
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.render_search_mode(f, state);
        self.help_dialog.render(f, f.area());
    }

    /// Push controller state into the components before drawing.
    fn sync(&mut self, state: &AppState) {
        // Only overwrite the line editor when the state disagrees, so the
        // cursor position survives ordinary redraws.
        if self.search_bar.get_query() != state.search.input {
            self.search_bar.set_query(state.search.input.clone());
        }
        self.search_bar.set_loading(state.search.status.is_loading());
        self.search_bar.set_message(state.ui.message.clone());

        self.result_list.set_request(state.search.request.clone());
        self.result_list.set_status(state.search.status);
        self.result_list.set_error(state.search.error.clone());
        self.result_list.set_page(state.search.page.clone());
        self.result_list
            .set_highlighted_index(state.ui.highlighted_index);

        self.result_detail
            .set_repository(state.search.selected.clone());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_result_detail_mut(&mut self) -> &mut ResultDetail {
        &mut self.result_detail
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive_ratatui::domain::models::FetchStatus;
    use crate::interactive_ratatui::test_helpers::{test_page, test_repo};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }

    fn draw(renderer: &mut Renderer, state: &AppState) -> String {
        let backend = TestBackend::new(160, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| renderer.render(f, state)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_screen() {
        let mut renderer = Renderer::new();
        let state = AppState::new();

        let content = draw(&mut renderer, &state);
        assert!(content.contains("Search repositories"));
        assert!(content.contains("No data to display"));
        assert!(content.contains("Select a repository"));
    }

    #[test]
    fn test_results_and_selection_side_by_side() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.search.input = "redux".to_string();
        state.search.status = FetchStatus::Succeeded;
        state.search.page = test_page(&["redux", "redux-saga"], 2);
        state.search.selected = Some(test_repo(9, "zustand"));

        let content = draw(&mut renderer, &state);
        assert!(content.contains("owner/redux-saga"));
        assert!(content.contains("owner/zustand"));
        assert!(content.contains("Stars: 900"));
        assert_eq!(renderer.get_search_bar_mut().get_query(), "redux");
    }

    #[test]
    fn test_help_overlay() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.mode = Mode::Help;

        let content = draw(&mut renderer, &state);
        assert!(content.contains("Press any key to close this help"));
    }
}
