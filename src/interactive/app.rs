//! TUI application state and logic

use crate::core::{Word, parse_guess};
use crate::game::{Game, GameConfig, GameError, GuessResult};
use crate::output::formatters::result_message;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// How long to wait for a key before checking on the word list load
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    /// `None` until the word list has loaded
    pub game: Option<Game>,
    pub config: GameConfig,
    pending_words: Option<Receiver<Vec<Word>>>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Loading,
    Guess,
    RoundComplete,
    GameOver,
    /// No word left to start a round with
    OutOfWords,
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

/// Per-run statistics, kept across resets
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_won: usize,
    pub games_lost: usize,
    pub best_score: i64,
}

impl App {
    /// Create an app that waits for the word list on `words`
    #[must_use]
    pub fn new(config: GameConfig, words: Receiver<Vec<Word>>) -> Self {
        let mut app = Self::empty(config);
        app.pending_words = Some(words);
        app.add_message("Loading words...", MessageStyle::Info);
        app
    }

    /// Create an app around an existing game and start its first round
    #[must_use]
    pub fn with_game(game: Game) -> Self {
        let mut app = Self::empty(*game.config());
        app.install(game);
        app
    }

    fn empty(config: GameConfig) -> Self {
        Self {
            game: None,
            config,
            pending_words: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Loading,
        }
    }

    /// Take the word list if the loader has delivered it
    pub fn poll_words(&mut self) {
        let Some(rx) = &self.pending_words else {
            return;
        };

        let words = match rx.try_recv() {
            Ok(words) => words,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                log::error!("word loader exited without a result");
                Vec::new()
            }
        };

        self.pending_words = None;
        self.install(Game::new(words, self.config));
    }

    fn install(&mut self, game: Game) {
        let word_count = game.pool().len();
        self.game = Some(game);
        if word_count == 0 {
            self.input_mode = InputMode::OutOfWords;
            self.add_message(
                "No words loaded - check the word list.",
                MessageStyle::Error,
            );
            return;
        }
        self.add_message(
            &format!("Welcome! {word_count} words to guess."),
            MessageStyle::Info,
        );
        self.start_round();
    }

    pub fn start_round(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        self.input_buffer.clear();

        match game.start_round().map(|word| word.len()) {
            Ok(word_len) => {
                let text = format!("New word: {word_len} letters. Type a letter.");
                self.input_mode = InputMode::Guess;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(GameError::EmptyWordPool) if game.pool().original().is_empty() => {
                self.input_mode = InputMode::OutOfWords;
                self.add_message(
                    "No words loaded - check the word list.",
                    MessageStyle::Error,
                );
            }
            Err(GameError::EmptyWordPool) => {
                self.input_mode = InputMode::OutOfWords;
                self.add_message(
                    "🏆 You solved every word! Ctrl-R to start over.",
                    MessageStyle::Success,
                );
            }
            Err(e) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let character = match parse_guess(&input) {
            Ok(character) => character,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let result = match game.submit(character) {
            Ok(result) => result,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let word = game
            .current_word()
            .map(|w| w.text().to_string())
            .unwrap_or_default();
        let score = game.counters().score;
        let (_, text) = result_message(result, character, &word);

        match result {
            GuessResult::RoundComplete => {
                self.stats.rounds_won += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.input_mode = InputMode::RoundComplete;
                self.add_message(&format!("🎉 {text}"), MessageStyle::Success);
                self.add_message("Press Enter for the next word.", MessageStyle::Info);
            }
            GuessResult::GameOver => {
                self.stats.games_lost += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(&format!("💀 {text}"), MessageStyle::Error);
                self.add_message("Press Ctrl-R to reset.", MessageStyle::Info);
            }
            _ if result.is_wrong() => self.add_message(&text, MessageStyle::Error),
            _ => self.add_message(&text, MessageStyle::Info),
        }
    }

    /// Zero the counters, restore the word pool and start a new round
    pub fn reset(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        game.reset();
        self.messages.clear();
        self.add_message("Game reset!", MessageStyle::Info);
        self.start_round();
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

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return;
        }

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::Guess, KeyCode::Char(c)) => self.input_buffer.push(c),
            (InputMode::Guess, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guess, KeyCode::Enter) => self.submit_input(),
            (InputMode::RoundComplete, KeyCode::Enter) => self.start_round(),
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_words();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::sync::mpsc;

    fn app(words: &[&str], config: GameConfig) -> App {
        App::with_game(Game::with_seed(words_from_slice(words), config, 1))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn mask(app: &App) -> String {
        app.game.as_ref().unwrap().render_mask().unwrap().to_string()
    }

    #[test]
    fn starts_first_round() {
        let app = app(&["cat"], GameConfig::default());
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(mask(&app), "???");
    }

    #[test]
    fn typed_guesses_update_game() {
        let mut app = app(&["cat"], GameConfig::default());
        type_guess(&mut app, "a");
        assert_eq!(mask(&app), "?A?");
        assert!(app.input_buffer.is_empty());

        type_guess(&mut app, "t");
        type_guess(&mut app, "c");
        assert_eq!(app.input_mode, InputMode::RoundComplete);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.best_score, 3);
    }

    #[test]
    fn multi_character_input_is_rejected() {
        let mut app = app(&["cat"], GameConfig::default());
        type_guess(&mut app, "ca");
        assert_eq!(mask(&app), "???");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert_eq!(app.game.as_ref().unwrap().counters().wrong_tries, 0);
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut app = app(&["cat"], GameConfig::default());
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(mask(&app), "?A?");
    }

    #[test]
    fn enter_after_round_starts_next() {
        let mut app = app(&["ox", "bee"], GameConfig::default());
        let word = app.game.as_ref().unwrap().current_word().unwrap().clone();
        for c in word.letters().clone() {
            type_guess(&mut app, &c.to_string());
        }
        assert_eq!(app.input_mode, InputMode::RoundComplete);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.game.as_ref().unwrap().counters().round, 2);
    }

    #[test]
    fn game_over_then_reset() {
        let mut app = app(&["cat"], GameConfig::default().with_threshold(Some(1)));
        type_guess(&mut app, "z");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_lost, 1);

        // Letters are ignored once the game is over
        type_guess(&mut app, "c");
        assert_eq!(mask(&app), "???");

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.input_mode, InputMode::Guess);
        let counters = app.game.as_ref().unwrap().counters();
        assert_eq!(counters.round, 1);
        assert_eq!(counters.wrong_tries, 0);
        assert_eq!(counters.score, 0);
    }

    #[test]
    fn pool_exhausted() {
        let mut app = app(&["ox"], GameConfig::default());
        type_guess(&mut app, "o");
        type_guess(&mut app, "x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::OutOfWords);
    }

    #[test]
    fn quit_keys() {
        let app_fn = app;
        let mut app = app_fn(&["cat"], GameConfig::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut second = app_fn(&["cat"], GameConfig::default());
        second.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(second.should_quit);
    }

    #[test]
    fn waits_for_background_words() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(GameConfig::default(), rx);
        assert_eq!(app.input_mode, InputMode::Loading);

        app.poll_words();
        assert!(app.game.is_none());

        tx.send(words_from_slice(&["cat"])).unwrap();
        app.poll_words();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(mask(&app), "???");
    }

    #[test]
    fn empty_word_list_is_reported() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(GameConfig::default(), rx);
        tx.send(Vec::new()).unwrap();
        app.poll_words();

        assert_eq!(app.input_mode, InputMode::OutOfWords);
        assert!(app.game.is_some());
    }

    #[test]
    fn reset_with_empty_word_list_is_not_a_win() {
        let mut app = app(&[], GameConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        let last = app.messages.last().unwrap();
        assert_eq!(app.input_mode, InputMode::OutOfWords);
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("No words loaded"));
        assert!(app.messages.iter().all(|m| !m.text.contains("solved")));
    }

    #[test]
    fn exhausted_pool_is_a_win() {
        let mut app = app(&["cat"], GameConfig::default());
        type_guess(&mut app, "c");
        type_guess(&mut app, "a");
        type_guess(&mut app, "t");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::OutOfWords);
        assert!(app.messages.last().unwrap().text.contains("solved every word"));
    }

    #[test]
    fn keeps_last_five_messages() {
        let mut app = app(&["cat"], GameConfig::default());
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
