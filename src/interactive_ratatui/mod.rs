use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use crate::query::SortField;
use crate::search::SearchGateway;

mod application;
pub mod constants;
mod domain;
pub mod ui;

#[cfg(test)]
mod test_helpers;

use self::application::search_service::SearchService;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use self::domain::models::{Mode, PageResponse};
use self::ui::{
    app_state::AppState,
    commands::Command,
    components::{Component, EXIT_PROMPT},
    events::Message,
    renderer::Renderer,
};

pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    search_service: SearchService,
    response_rx: UnboundedReceiver<PageResponse>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    /// `runtime` executes gateway calls; the UI loop itself stays synchronous.
    pub fn new(gateway: Arc<dyn SearchGateway>, runtime: Handle) -> Self {
        let (search_service, response_rx) = SearchService::new(gateway, runtime);

        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            search_service,
            response_rx,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: constants::MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self, initial_query: Option<String>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        if let Some(query) = initial_query {
            self.handle_message(Message::QueryChanged(query.clone()));
            self.handle_message(Message::SubmitSearch(query));
        }

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            self.drain_responses();

            self.expire_status_message(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_input(key) {
                        info!("leaving interactive mode");
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Clear the status line once its scheduled delay has passed at `now`.
    fn expire_status_message(&mut self, now: Instant) {
        if let Some(timer) = self.message_timer {
            if now.duration_since(timer) >= Duration::from_millis(self.message_clear_delay) {
                self.message_timer = None;
                self.handle_message(Message::ClearStatus);
            }
        }
    }

    /// Feed every response that has arrived so far into the controller.
    fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.handle_message(Message::FetchCompleted(response));
        }
    }

    /// Returns true when the user asked to quit.
    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return false;
        }

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Search => {
                if key.code == KeyCode::Esc {
                    return true;
                }
                self.handle_search_mode_input(key)
            }
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        false
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let request = &self.state.search.request;
        // Sort and paging keys act on an existing search only.
        let has_query = !request.is_empty();

        match key.code {
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::ClearSearch)
            }
            KeyCode::F(2) if has_query => Some(Message::ChangeSort(SortField::Forks)),
            KeyCode::F(3) if has_query => Some(Message::ChangeSort(SortField::Stars)),
            KeyCode::F(4) if has_query => Some(Message::ChangeSort(SortField::Updated)),
            KeyCode::F(5) if has_query => {
                Some(Message::ChangePageSize(request.page_size.next()))
            }
            KeyCode::F(_) | KeyCode::PageDown | KeyCode::PageUp if !has_query => None,
            KeyCode::PageDown => {
                let next = request.page_index + 1;
                let page_count = self.state.search.page.page_count(request.page_size.get());
                ((next as u64) < page_count).then_some(Message::ChangePage(next))
            }
            KeyCode::PageUp => request
                .page_index
                .checked_sub(1)
                .map(Message::ChangePage),
            KeyCode::Up | KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.renderer.get_result_detail_mut().handle_key(key)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Char('p') | KeyCode::Char('n')
                if key.modifiers == KeyModifiers::CONTROL =>
            {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    pub(crate) fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchPage(page_request) => {
                self.search_service.dispatch(page_request);
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    /// Wait for the next gateway response and apply it.
    #[cfg(test)]
    pub(crate) async fn pump_next_response(&mut self) -> bool {
        match self.response_rx.recv().await {
            Some(response) => {
                self.handle_message(Message::FetchCompleted(response));
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }
}
