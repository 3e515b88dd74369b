use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt, styles::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.cursor_position = self.query.chars().count();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    /// Byte offset of the character at `char_pos`.
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let len = chars.len();
        let mut pos = from;

        while pos < len && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < len && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Delete the characters in `start..end` and report whether the query changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let input_text = if self.cursor_position < self.char_count() {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let under: String = self
                .query
                .chars()
                .nth(self.cursor_position)
                .map(String::from)
                .unwrap_or_default();
            let after: String = self.query.chars().skip(self.cursor_position + 1).collect();

            vec![
                Span::raw(before),
                Span::styled(under, cursor_style),
                Span::raw(after),
            ]
        } else {
            vec![Span::raw(self.query.clone()), Span::styled(" ", cursor_style)]
        };

        let mut title = vec![Span::raw("Search repositories")];
        if self.is_loading {
            title.push(Span::raw(" (loading)"));
        }
        if let Some(msg) = &self.message {
            // The quit prompt stands out from ordinary status text.
            let style = if is_exit_prompt(&self.message) {
                Styles::error()
            } else {
                Style::default()
            };
            title.push(Span::raw(" - "));
            title.push(Span::styled(msg.clone(), style));
        }

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title(Line::from(title)).borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+A / Ctrl+E - line start / end
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                // Ctrl+B / Ctrl+F - one character back / forward
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => {
                    let pos = self.cursor_position;
                    if pos > 0 && self.delete_range(pos - 1, pos) {
                        self.changed()
                    } else {
                        None
                    }
                }
                KeyCode::Char('d') => {
                    let pos = self.cursor_position;
                    if self.delete_range(pos, pos + 1) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+W - delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+U / Ctrl+K - delete to line start / end
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                KeyCode::Char('k') => {
                    let len = self.char_count();
                    if self.delete_range(self.cursor_position, len) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Message::SubmitSearch(self.query.clone())),
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => {
                let pos = self.cursor_position;
                if pos > 0 && self.delete_range(pos - 1, pos) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                let pos = self.cursor_position;
                if self.delete_range(pos, pos + 1) {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
