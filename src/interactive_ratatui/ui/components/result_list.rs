use crate::interactive_ratatui::constants::{
    COUNT_COLUMN_WIDTH, DATE_COLUMN_WIDTH, LANGUAGE_COLUMN_WIDTH,
};
use crate::interactive_ratatui::domain::models::FetchStatus;
use crate::interactive_ratatui::ui::components::{Component, styles::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crate::query::{SearchRequest, SortDirection, SortField};
use crate::schemas::RepositorySummary;
use crate::search::ResultPage;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

pub const EMPTY_TEXT: &str = "No data to display";
pub const NO_LANGUAGE: &str = "Not specified";

#[derive(Default)]
pub struct ResultList {
    page: ResultPage,
    request: SearchRequest,
    status: FetchStatus,
    error: Option<String>,
    highlighted_index: usize,
    table_state: TableState,
}

impl ResultList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&mut self, page: ResultPage) {
        self.page = page;
        self.clamp_highlight();
    }

    pub fn set_request(&mut self, request: SearchRequest) {
        self.request = request;
    }

    pub fn set_status(&mut self, status: FetchStatus) {
        self.status = status;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_highlighted_index(&mut self, index: usize) {
        self.highlighted_index = index;
        self.clamp_highlight();
    }

    pub fn highlighted_item(&self) -> Option<&RepositorySummary> {
        self.page.items.get(self.highlighted_index)
    }

    fn clamp_highlight(&mut self) {
        let len = self.page.items.len();
        if len == 0 {
            self.highlighted_index = 0;
        } else if self.highlighted_index >= len {
            self.highlighted_index = len - 1;
        }
    }

    /// Header label for a sortable column, marked when it is the active sort.
    fn sort_header(&self, label: &str, field: SortField) -> String {
        if self.request.sort_field() != Some(field) {
            return label.to_string();
        }
        match self.request.sort_direction() {
            Some(SortDirection::Asc) => format!("{label} ▲"),
            Some(SortDirection::Desc) => format!("{label} ▼"),
            None => label.to_string(),
        }
    }

    /// `Page N of M · T results · S per page`
    pub fn footer_text(&self) -> String {
        let page_size = self.request.page_size.get();
        let page_count = self.page.page_count(page_size).max(1);
        format!(
            "Page {} of {} · {} results · {} per page",
            self.request.page_index + 1,
            page_count,
            self.page.total_count,
            page_size
        )
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            Cell::from("Name"),
            Cell::from("Language"),
            Cell::from(self.sort_header("Forks", SortField::Forks)),
            Cell::from(self.sort_header("Stars", SortField::Stars)),
            Cell::from(self.sort_header("Updated", SortField::Updated)),
        ])
        .style(Styles::header());

        let rows: Vec<Row> = self
            .page
            .items
            .iter()
            .map(|repo| {
                Row::new(vec![
                    Cell::from(repo.display_name().to_string()),
                    Cell::from(Span::styled(
                        repo.primary_language
                            .clone()
                            .unwrap_or_else(|| NO_LANGUAGE.to_string()),
                        Styles::language(),
                    )),
                    Cell::from(repo.fork_count.to_string()),
                    Cell::from(Span::styled(repo.star_count.to_string(), Styles::stars())),
                    Cell::from(repo.last_updated.format("%Y-%m-%d").to_string()),
                ])
                .style(Styles::normal())
            })
            .collect();

        let widths = [
            Constraint::Min(20),
            Constraint::Length(LANGUAGE_COLUMN_WIDTH),
            Constraint::Length(COUNT_COLUMN_WIDTH),
            Constraint::Length(COUNT_COLUMN_WIDTH),
            Constraint::Length(DATE_COLUMN_WIDTH),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Styles::selected())
            .highlight_symbol("> ");

        self.table_state.select(Some(self.highlighted_index));
        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut title = " Repositories ".to_string();
        if self.status.is_loading() {
            title = " Repositories (loading...) ".to_string();
        }
        let block = Block::default()
            .title(Span::styled(title, Styles::title()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Table
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        if let Some(error) = &self.error {
            let error_text = Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Styles::error(),
            )))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(error_text, chunks[0]);
        } else if self.page.is_empty() {
            let empty = Paragraph::new(EMPTY_TEXT)
                .style(Styles::dimmed())
                .alignment(Alignment::Center);
            f.render_widget(empty, chunks[0]);
        } else {
            self.render_table(f, chunks[0]);
        }

        let footer = Paragraph::new(self.footer_text())
            .style(Styles::label())
            .alignment(Alignment::Right);
        f.render_widget(footer, chunks[1]);

        let hints = "↑/↓: Navigate | Tab: Select | F2/F3/F4: Sort | PgUp/PgDn: Page | F5: Page size | ?: Help";
        let hints = Paragraph::new(hints)
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.page.is_empty() {
            return None;
        }

        match key.code {
            KeyCode::Up => self.move_highlight(-1),
            KeyCode::Down => self.move_highlight(1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.move_highlight(-1)
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.move_highlight(1)
            }
            KeyCode::Home => self.jump_to(0),
            KeyCode::End => self.jump_to(self.page.items.len() - 1),
            KeyCode::Tab => self.highlighted_item().cloned().map(Message::SelectItem),
            _ => None,
        }
    }
}

impl ResultList {
    fn move_highlight(&mut self, delta: isize) -> Option<Message> {
        let target = self.highlighted_index.checked_add_signed(delta)?;
        if target >= self.page.items.len() {
            return None;
        }
        self.jump_to(target)
    }

    fn jump_to(&mut self, index: usize) -> Option<Message> {
        if index == self.highlighted_index {
            return None;
        }
        self.highlighted_index = index;
        Some(Message::SelectResult(index))
    }
}
