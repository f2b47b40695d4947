// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds the CLI and terminal setup.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod game;
pub mod language;
pub mod logging;
pub mod runtime;
pub mod timer;
pub mod ui;

pub use game::{GameSession, GameStatus, GuessOutcome};
pub use language::{DifficultyTier, SupplierError, WordSupplier};
