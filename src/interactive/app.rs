//! TUI application state and logic

use crate::commands::split_clues;
use crate::core::{Input, Word, parse_input};
use crate::output::formatters::sample_words;
use crate::solver::{GameSession, RoundOutcome, Scored};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    /// How many words and suggestions to show
    pub limit: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub history: Vec<HistoryEntry>,
    pub suggestions: Vec<Scored<'a>>,
    /// Sampled view of the current pool
    pub pool_view: Vec<&'a Word>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

/// One submitted line of the current game
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub input: String,
    pub before: usize,
    pub after: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_solved: usize,
    pub games_exhausted: usize,
    pub games_abandoned: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>, limit: usize, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            limit,
            input_buffer: String::new(),
            messages: Vec::new(),
            history: Vec::new(),
            suggestions: Vec::new(),
            pool_view: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! Enter clues like '--A-E, cnt' and press Enter.",
            MessageStyle::Info,
        );
        app.add_message(
            "Green is UPPERCASE, yellow is lowercase, '!' forces positional.",
            MessageStyle::Info,
        );
        app.refresh_fresh_game();
        app
    }

    fn refresh_fresh_game(&mut self) {
        self.history.clear();
        self.suggestions = self.session.opening().to_vec();
        self.refresh_pool_view();
    }

    fn refresh_pool_view(&mut self) {
        self.pool_view = sample_words(self.session.pool(), self.limit, &mut self.rng);
    }

    /// Submit the contents of the input buffer
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        match parse_input(&line) {
            Input::Exit => self.should_quit = true,
            Input::NewGame => self.new_game(),
            Input::Clues(raw) => {
                let (clues, rejected) = split_clues(raw);
                for (token, error) in &rejected {
                    self.add_message(&format!("'{token}' ignored: {error}"), MessageStyle::Error);
                }
                if clues.is_empty() {
                    if rejected.is_empty() {
                        self.add_message("Enter at least one clue", MessageStyle::Error);
                    }
                    return;
                }

                let outcome = self.session.apply_round(&clues);
                self.handle_outcome(line.trim(), outcome);
            }
        }
    }

    fn handle_outcome(&mut self, input: &str, outcome: RoundOutcome<'a>) {
        match outcome {
            RoundOutcome::Narrowed(report) => {
                self.history.push(HistoryEntry {
                    input: input.to_string(),
                    before: report.before,
                    after: report.after,
                });
                self.add_message(
                    &format!(
                        "Reduced pool by {:.2}%, {} words remain",
                        report.reduction_percent, report.after
                    ),
                    MessageStyle::Info,
                );
                self.suggestions = report.suggestions;
                self.refresh_pool_view();
            }
            RoundOutcome::Solved(report) => {
                self.stats.games_solved += 1;
                let answers: Vec<&str> = report.survivors.iter().map(|w| w.text()).collect();
                self.add_message(
                    &format!("🎉 Solved! Answer: {}", answers.join(" or ").to_uppercase()),
                    MessageStyle::Success,
                );
                self.add_message("New game started!", MessageStyle::Info);
                self.refresh_fresh_game();
            }
            RoundOutcome::Exhausted { before } => {
                self.stats.games_exhausted += 1;
                self.add_message(
                    &format!("No more valid words remain out of {before}. Restarting game..."),
                    MessageStyle::Error,
                );
                self.refresh_fresh_game();
            }
        }
    }

    pub fn new_game(&mut self) {
        if !self.history.is_empty() {
            self.stats.games_abandoned += 1;
        }
        self.session.new_game();
        self.input_buffer.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh_fresh_game();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
