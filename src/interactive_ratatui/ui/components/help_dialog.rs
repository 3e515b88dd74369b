use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::{Component, styles::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "GitHub Repository Search - Interactive Mode",
                Styles::title(),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled("Search:", Styles::header())]),
            Line::from("  Enter       - Run the search"),
            Line::from("  Ctrl+L      - Clear search and results"),
            Line::from("  Ctrl+A/E    - Move to line start/end"),
            Line::from("  Ctrl+W/U/K  - Delete word / to start / to end"),
            Line::from(""),
            Line::from(vec![Span::styled("Results:", Styles::header())]),
            Line::from("  ↑/↓         - Move highlight"),
            Line::from("  Tab         - Show highlighted repository in details"),
            Line::from("  F2          - Sort by forks (again to flip order)"),
            Line::from("  F3          - Sort by stars (again to flip order)"),
            Line::from("  F4          - Sort by last update (again to flip order)"),
            Line::from("  PgDn/PgUp   - Next / previous page"),
            Line::from("  F5          - Cycle page size (10, 25, 50)"),
            Line::from(""),
            Line::from(vec![Span::styled("General:", Styles::header())]),
            Line::from("  ?           - Show this help"),
            Line::from("  Esc         - Quit"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 4).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(super::styles::ColorScheme::PRIMARY)),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();
        let msg = dialog.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::CloseHelp)));
    }

    #[test]
    fn test_render_lists_sort_keys() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Help"));
        assert!(content.contains("Sort by stars"));
        assert!(content.contains("Cycle page size"));
    }
}
