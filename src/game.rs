use crate::language::{DifficultyTier, SupplierError, WordSupplier};
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Character shown in place of an unrevealed letter
pub const MASK_CHAR: char = '_';

pub const DEFAULT_MAX_LIVES: i32 = 6;

/// Classification of a single guess attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    Repeated,
    Invalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

/// One round of hangman: a fixed answer, the letters tried so far and the lives left.
///
/// A session is never reset. Starting another round means building a new one.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: String,
    tier: DifficultyTier,
    max_lives: i32,
    lives: i32,
    guessed: BTreeSet<char>,
}

impl GameSession {
    pub fn new(tier: DifficultyTier, supplier: &dyn WordSupplier) -> Result<Self, SupplierError> {
        Self::with_max_lives(tier, supplier, DEFAULT_MAX_LIVES)
    }

    /// Asks `supplier` for exactly one answer and lower-cases it.
    #[instrument(skip(supplier))]
    pub fn with_max_lives(
        tier: DifficultyTier,
        supplier: &dyn WordSupplier,
        max_lives: i32,
    ) -> Result<Self, SupplierError> {
        let answer = supplier.pick_word(tier)?.to_lowercase();
        info!(len = answer.chars().count(), "new game session");

        Ok(Self {
            answer,
            tier,
            max_lives,
            lives: max_lives,
            guessed: BTreeSet::new(),
        })
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    /// Remaining lives. Not clamped, so repeated timeouts after a loss go below zero.
    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn max_lives(&self) -> i32 {
        self.max_lives
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Guessed letters in order, comma separated, or `_` when nothing was tried yet
    pub fn guessed_display(&self) -> String {
        if self.guessed.is_empty() {
            return MASK_CHAR.to_string();
        }
        self.guessed.iter().join(", ")
    }

    pub fn masked(&self) -> String {
        self.answer
            .chars()
            .map(|ch| {
                if is_letter(ch) && !self.guessed.contains(&ch) {
                    MASK_CHAR
                } else {
                    ch
                }
            })
            .collect()
    }

    pub fn valid_guess(&self, input: &str) -> bool {
        single_letter(&input.to_lowercase()).is_some()
    }

    #[instrument(skip(self), fields(lives = self.lives))]
    pub fn guess_letter(&mut self, input: &str) -> GuessOutcome {
        let folded = input.to_lowercase();
        let Some(letter) = single_letter(&folded) else {
            debug!("invalid guess");
            return GuessOutcome::Invalid;
        };

        if !self.guessed.insert(letter) {
            debug!(%letter, "repeated guess");
            return GuessOutcome::Repeated;
        }

        if self.answer.contains(letter) {
            debug!(%letter, "correct guess");
            GuessOutcome::Correct
        } else {
            self.lives -= 1;
            debug!(%letter, lives = self.lives, "incorrect guess");
            GuessOutcome::Incorrect
        }
    }

    pub fn is_won(&self) -> bool {
        self.answer
            .chars()
            .filter(|ch| is_letter(*ch))
            .all(|ch| self.guessed.contains(&ch))
    }

    pub fn is_lost(&self) -> bool {
        self.lives <= 0 && !self.is_won()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Costs one life for a turn that ran out of time. Letters are untouched.
    #[instrument(skip(self))]
    pub fn time_out(&mut self) {
        self.lives -= 1;
        debug!(lives = self.lives, "turn timed out");
    }
}

/// The only character of `s` if it is a single letter
fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_letter(c) => Some(c),
        _ => None,
    }
}

/// Alphabetic but not a letter number such as roman numeral `Ⅷ`
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}
