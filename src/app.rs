use crate::{
    config::Config,
    game::{GameSession, GameStatus, GuessOutcome},
    language::{DifficultyTier, SupplierError, WordSupplier},
    timer::TurnTimer,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::{info, instrument};

/// Whether the event loop should keep going after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// waiting for the first game to be started
    Ready,
    Playing,
    Finished(GameStatus),
}

/// Short message for the player about what just happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid,
    Repeated(char),
    TimeUp,
    Victory(String),
    GameOver(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Invalid => "Invalid",
            Notice::Repeated(_) => "Repeated",
            Notice::TimeUp => "Time's up!",
            Notice::Victory(_) => "Victory!",
            Notice::GameOver(_) => "Game Over",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Invalid => "Enter a single alphabetic letter.".to_string(),
            Notice::Repeated(c) => format!("You already guessed '{c}'."),
            Notice::TimeUp => "Lost 1 life.".to_string(),
            Notice::Victory(answer) => format!("You found it! The answer was: {answer}"),
            Notice::GameOver(answer) => format!("Out of lives! The answer was: {answer}"),
        }
    }
}

/// Drives game sessions for the terminal: owns the turn timer and decides
/// when a round is over.
pub struct App {
    supplier: Box<dyn WordSupplier>,
    pub config: Config,
    pub tier: DifficultyTier,
    pub session: Option<GameSession>,
    pub timer: TurnTimer,
    pub state: AppState,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(config: Config, supplier: Box<dyn WordSupplier>) -> Self {
        Self {
            supplier,
            tier: config.tier,
            timer: TurnTimer::new(config.turn_secs),
            config,
            session: None,
            state: AppState::Ready,
            notice: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == AppState::Playing
    }

    /// Replaces any previous session with a brand new one
    #[instrument(skip(self), fields(tier = %self.tier))]
    pub fn start_game(&mut self) -> Result<(), SupplierError> {
        let session =
            GameSession::with_max_lives(self.tier, self.supplier.as_ref(), self.config.max_lives)?;
        self.session = Some(session);
        self.notice = None;
        self.timer.reset();
        self.state = AppState::Playing;
        self.check_endgame();
        Ok(())
    }

    /// Next tier for the next game; ignored mid-game
    pub fn cycle_tier(&mut self) {
        if !self.is_playing() {
            self.tier = self.tier.next();
        }
    }

    /// Returns the outcome, or None when no game is in progress
    pub fn guess(&mut self, c: char) -> Option<GuessOutcome> {
        if !self.is_playing() {
            return None;
        }
        let session = self.session.as_mut()?;

        let outcome = session.guess_letter(&c.to_string());
        self.notice = match outcome {
            GuessOutcome::Invalid => Some(Notice::Invalid),
            GuessOutcome::Repeated => Some(Notice::Repeated(
                c.to_lowercase().next().unwrap_or(c),
            )),
            GuessOutcome::Correct | GuessOutcome::Incorrect => None,
        };

        // every attempt gets a fresh turn, malformed ones included
        self.timer.reset();
        self.check_endgame();
        Some(outcome)
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<Flow, SupplierError> {
        let ctrl_c =
            key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
        if key.code == KeyCode::Esc || ctrl_c {
            return Ok(Flow::Quit);
        }

        match self.state {
            AppState::Playing => {
                // chords like ctrl+z or alt+x are not letters
                let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
                if let (KeyCode::Char(c), true) = (key.code, plain) {
                    self.guess(c);
                }
            }
            AppState::Ready | AppState::Finished(_) => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.start_game()?,
                KeyCode::Tab => self.cycle_tier(),
                _ => {}
            },
        }
        Ok(Flow::Continue)
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if !self.is_playing() {
            return;
        }
        self.timer.on_tick(elapsed);
        if !self.timer.has_expired() {
            return;
        }

        if let Some(session) = self.session.as_mut() {
            session.time_out();
        }
        self.notice = Some(Notice::TimeUp);
        if !self.check_endgame() {
            self.timer.reset();
        }
    }

    /// Moves to Finished when the session is decided. Returns true if it did.
    fn check_endgame(&mut self) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };

        let status = session.status();
        let notice = match status {
            GameStatus::Active => return false,
            GameStatus::Won => Notice::Victory(session.answer().to_string()),
            GameStatus::Lost => Notice::GameOver(session.answer().to_string()),
        };
        info!(?status, lives = session.lives(), "game over");
        self.notice = Some(notice);
        self.state = AppState::Finished(status);
        true
    }
}
