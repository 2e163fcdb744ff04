//! TUI application state and logic

use crate::dictionary::Dictionary;
use crate::game::{GameSession, Rejection, Submission};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: Dictionary + ?Sized> {
    pub session: GameSession<'a, D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal rejection notice, dismissed with Enter or Esc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl From<&Rejection> for Alert {
    fn from(rejection: &Rejection) -> Self {
        Self {
            title: rejection.title(),
            message: rejection.message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, D: Dictionary + ?Sized> App<'a, D> {
    /// Wrap a session, starting a game if it has not been started yet
    pub fn new(mut session: GameSession<'a, D>) -> Self {
        if !session.is_active() {
            session.reset();
        }

        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Spell words using the letters of the root word!".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit(&self.input_buffer) {
            Ok(Submission::Accepted { word, score }) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("+1 for '{word}' (score {score})"),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Ignored) => {}
            Err(rejection) => {
                self.add_message(&rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert::from(&rejection));
            }
        }
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Root word as shown in the title
    #[must_use]
    pub fn title(&self) -> String {
        self.session
            .root_word()
            .map(|root| root.text().to_uppercase())
            .unwrap_or_default()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            // Alert is modal: only OK (Enter) or cancel (Esc) close it
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(5) => self.restart(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary + ?Sized>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
