//! TUI rendering and terminal management (impure shell).

pub mod constants;

mod cards;
mod detail;
mod help;
mod layout;
mod search_input;
mod styles;

pub use detail::render_detail_overlay;
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchBar;
pub use styles::{ColorConfig, Palette};

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing::{debug, info};

use crate::api::{AttractionSource, FetchWorker};
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{search_input_handler, AppState, SearchState, SearchTerm};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Resolved launch parameters handed to the TUI.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Starting server page (1-based).
    pub page: u32,
    /// Locale segment passed to the API.
    pub lang: String,
    /// Optional search term applied before the first render.
    pub search: Option<String>,
}

impl CliArgs {
    /// Bundle launch parameters.
    pub fn new(page: u32, lang: String, search: Option<String>) -> Self {
        Self { page, lang, search }
    }
}

/// Main TUI application.
///
/// Generic over the terminal backend and the attraction source so tests
/// can drive it without a real terminal or network.
pub struct TuiApp<B, S>
where
    B: ratatui::backend::Backend,
    S: AttractionSource + 'static,
{
    terminal: Terminal<B>,
    state: AppState,
    worker: FetchWorker<S>,
    key_bindings: KeyBindings,
    lang: String,
}

impl<S: AttractionSource + 'static> TuiApp<CrosstermBackend<Stdout>, S> {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up the terminal in raw mode with the alternate screen.
    pub fn new(source: S, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut state = AppState::new(args.page);
        if let Some(term) = args.search.and_then(SearchTerm::new) {
            state.search = SearchState::Active { term };
        }

        Ok(Self {
            terminal,
            state,
            worker: FetchWorker::new(source),
            key_bindings: KeyBindings::default(),
            lang: args.lang,
        })
    }

    /// Run the main event loop.
    ///
    /// Fires the initial page fetch, then alternates between user events
    /// and timer ticks; fetch outcomes are polled on the tick, the same
    /// cadence the fetch worker reports on. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK: Duration = Duration::from_millis(250);

        self.start_load();
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.poll_fetch() {
                self.draw()?;
            }
        }
    }
}

impl<B, S> TuiApp<B, S>
where
    B: ratatui::backend::Backend,
    S: AttractionSource + 'static,
{
    /// Enter `Loading` and hand the allocated sequence number to a
    /// background fetch for the current page.
    fn start_load(&mut self) {
        let seq = self.state.load_started();
        info!(seq, page = self.state.page(), "starting page load");
        self.worker.spawn_fetch(seq, self.state.page(), &self.lang);
    }

    /// Drain completed fetch outcomes into the state machine.
    ///
    /// Returns true when any outcome changed the state (stale outcomes
    /// from superseded requests do not).
    fn poll_fetch(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.worker.poll() {
            debug!(
                seq = outcome.seq,
                page = outcome.page,
                ok = outcome.result.is_ok(),
                "fetch outcome received"
            );
            if self.state.apply_fetch(outcome.seq, outcome.result) {
                changed = true;
            } else {
                debug!(seq = outcome.seq, "dropped stale fetch outcome");
            }
        }
        changed
    }

    /// Handle a single keyboard event. Returns true if the app should
    /// quit.
    ///
    /// Routing order: Ctrl+C, Esc (dismiss topmost surface), the open
    /// detail overlay, search text entry, then the key-binding map.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, regardless of bindings or overlays.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Esc dismisses the topmost surface: help, then detail, then search.
        if key.code == KeyCode::Esc {
            if self.state.help_visible {
                self.state.help_visible = false;
            } else if self.state.selected().is_some() {
                self.state.clear_selection();
            } else if !matches!(self.state.search, SearchState::Inactive) {
                self.state.search = search_input_handler::cancel_search(self.state.search.clone());
                self.state.reset_cursor();
            }
            return false;
        }

        // The detail overlay swallows keys while open.
        if self.state.selected().is_some() {
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Enter => self.state.clear_selection(),
                _ => {}
            }
            return false;
        }

        // Text entry while the search bar is open.
        if let SearchState::Typing { .. } = self.state.search {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.search =
                        search_input_handler::handle_char_input(self.state.search.clone(), ch);
                }
                KeyCode::Backspace => {
                    self.state.search =
                        search_input_handler::handle_backspace(self.state.search.clone());
                }
                KeyCode::Left => {
                    self.state.search =
                        search_input_handler::handle_cursor_left(self.state.search.clone());
                }
                KeyCode::Right => {
                    self.state.search =
                        search_input_handler::handle_cursor_right(self.state.search.clone());
                }
                KeyCode::Enter => {
                    self.state.search =
                        search_input_handler::submit_search(self.state.search.clone());
                    self.state.reset_cursor();
                }
                _ => {}
            }
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // While help is up, only Help and Quit pass through.
        if self.state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::CursorUp => self.state.cursor_up(),
            KeyAction::CursorDown => self.state.cursor_down(),
            KeyAction::CursorFirst => self.state.cursor_to_first(),
            KeyAction::CursorLast => self.state.cursor_to_last(),
            KeyAction::OpenDetail => self.state.select_under_cursor(),
            KeyAction::StartSearch => {
                self.state.search =
                    search_input_handler::activate_search_input(self.state.search.clone());
            }
            KeyAction::NextPage => {
                if self.state.next_page() {
                    self.start_load();
                }
            }
            KeyAction::PrevPage => {
                if self.state.prev_page() {
                    self.start_load();
                }
            }
            KeyAction::Retry => self.start_load(),
            KeyAction::HardReload => {
                self.state.hard_reload();
                self.start_load();
            }
        }
        false
    }

    /// Draw the current state.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        self.terminal.draw(|frame| layout::render_layout(frame, state))?;
        Ok(())
    }

    /// Read-only view of the state, for tests.
    #[cfg(test)]
    fn state(&self) -> &AppState {
        &self.state
    }
}

/// Run the TUI against an attraction source.
///
/// Restores the terminal even when the event loop errors.
pub fn run_with_client<S: AttractionSource + 'static>(
    source: S,
    args: CliArgs,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(source, args)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Leave the alternate screen and disable raw mode.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
