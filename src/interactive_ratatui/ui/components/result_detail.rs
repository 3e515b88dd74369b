use crate::interactive_ratatui::ui::components::{Component, styles::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::RepositorySummary;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const PLACEHOLDER_TEXT: &str = "Select a repository";
pub const NO_LICENSE: &str = "License not specified";
pub const NO_DESCRIPTION: &str = "No description";

/// Right-hand pane showing the repository chosen with Tab.
#[derive(Default)]
pub struct ResultDetail {
    repository: Option<RepositorySummary>,
    scroll_offset: usize,
}

impl ResultDetail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_repository(&mut self, repository: Option<RepositorySummary>) {
        if self.repository.as_ref().map(|r| r.id) != repository.as_ref().map(|r| r.id) {
            self.scroll_offset = 0;
        }
        self.repository = repository;
    }

    fn field<'a>(label: &'a str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label}: "), Styles::label()),
            Span::styled(value, Styles::normal()),
        ])
    }

    fn lines(repo: &RepositorySummary) -> Vec<Line<'_>> {
        let topics = if repo.topics().is_empty() {
            "-".to_string()
        } else {
            repo.topics().join(", ")
        };

        let mut lines = vec![
            Line::from(Span::styled(repo.display_name(), Styles::title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Language: ", Styles::label()),
                Span::styled(
                    repo.primary_language.as_deref().unwrap_or("Not specified"),
                    Styles::language(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Stars: ", Styles::label()),
                Span::styled(repo.star_count.to_string(), Styles::stars()),
            ]),
            Self::field("Forks", repo.fork_count.to_string()),
            Self::field(
                "Updated",
                repo.last_updated.format("%Y-%m-%d").to_string(),
            ),
            Self::field("Topics", topics),
            Self::field(
                "License",
                repo.license_name().unwrap_or(NO_LICENSE).to_string(),
            ),
            Line::from(""),
            Line::from(Span::styled("Description:", Styles::label())),
            Line::from(repo.description.as_deref().unwrap_or(NO_DESCRIPTION)),
        ];

        if let Some(url) = &repo.html_url {
            lines.push(Line::from(""));
            lines.push(Self::field("URL", url.clone()));
        }

        lines
    }
}

impl Component for ResultDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" Details ", Styles::title()))
            .borders(Borders::ALL);

        let Some(repo) = &self.repository else {
            let placeholder = Paragraph::new(PLACEHOLDER_TEXT)
                .style(Styles::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, area);
            return;
        };

        let paragraph = Paragraph::new(Self::lines(repo))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.repository.is_none() {
            return None;
        }
        // Shift+arrows scroll the pane; plain arrows belong to the result list.
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset += 1;
                None
            }
            _ => None,
        }
    }
}
