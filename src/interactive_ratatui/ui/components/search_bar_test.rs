#[cfg(test)]
mod tests {
    use super::super::{Component, EXIT_PROMPT};
    use super::super::search_bar::*;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_search_bar_creation() {
        let search_bar = SearchBar::new();

        assert_eq!(search_bar.get_query(), "");
        assert!(!search_bar.is_loading());
    }

    #[test]
    fn test_character_input() {
        let mut search_bar = SearchBar::new();

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('r')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "r"));

        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('x')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "rx"));
    }

    #[test]
    fn test_enter_submits_raw_query() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("  redux ".to_string());

        let msg = search_bar.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SubmitSearch(q)) if q == "  redux "));
    }

    #[test]
    fn test_backspace() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("redux".to_string());

        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "redu"));

        search_bar.set_query(String::new());
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(msg.is_none());
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("redux".to_string());

        assert!(search_bar.handle_key(create_key_event(KeyCode::Home)).is_none());
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('@')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "@redux"));

        search_bar.handle_key(create_key_event(KeyCode::End));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('!')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "@redux!"));
    }

    #[test]
    fn test_delete_key() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("redux".to_string());

        search_bar.handle_key(create_key_event(KeyCode::Home));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Delete));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "edux"));

        search_bar.handle_key(create_key_event(KeyCode::End));
        assert!(search_bar.handle_key(create_key_event(KeyCode::Delete)).is_none());
    }

    #[test]
    fn test_unicode_input() {
        let mut search_bar = SearchBar::new();

        search_bar.handle_key(create_key_event(KeyCode::Char('é')));
        search_bar.handle_key(create_key_event(KeyCode::Char('日')));
        search_bar.handle_key(create_key_event(KeyCode::Left));
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));

        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "日"));
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("state management".to_string());

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "state "));
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("hello world".to_string());
        search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('b'),
            KeyModifiers::ALT,
        ));

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "hello "));

        let msg = search_bar.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        ));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q.is_empty()));
    }

    #[test]
    fn test_render_shows_loading_and_message() {
        let mut search_bar = SearchBar::new();
        search_bar.set_query("redux".to_string());
        search_bar.set_loading(true);
        search_bar.set_message(Some("[searching...]".to_string()));

        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| search_bar.render(f, f.area())).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Search repositories (loading) - [searching...]"));
        assert!(content.contains("redux"));
    }

    #[test]
    fn test_exit_prompt_rendered_in_error_color() {
        let mut search_bar = SearchBar::new();
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        search_bar.set_message(Some(EXIT_PROMPT.to_string()));
        terminal.draw(|f| search_bar.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let column = (0..buffer.area.width)
            .find(|&x| buffer[(x, 0)].symbol() == "P")
            .unwrap();
        assert_eq!(buffer[(column, 0)].fg, Color::Red);

        search_bar.set_message(Some("[searching...]".to_string()));
        terminal.draw(|f| search_bar.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        let column = (0..buffer.area.width)
            .find(|&x| buffer[(x, 0)].symbol() == "[")
            .unwrap();
        assert_ne!(buffer[(column, 0)].fg, Color::Red);
    }
}
