use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use gallows::{
    app::{App, Flow},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    language::{CorpusSupplier, DifficultyTier, WordSupplier},
    logging::init_file_logging,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::info;

const TICK_RATE_MS: u64 = 100;

/// terminal hangman with a countdown on every turn
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// difficulty level to start with
    #[clap(short = 't', long, value_enum)]
    tier: Option<DifficultyTier>,

    /// number of incorrect attempts allowed
    #[clap(short = 'l', long, value_parser = clap::value_parser!(i32).range(1..))]
    lives: Option<i32>,

    /// seconds allowed for each guess
    #[clap(short = 's', long, value_parser = clap::value_parser!(u64).range(1..))]
    turn_secs: Option<u64>,

    /// newline separated word file used instead of the bundled basic words
    #[clap(short = 'w', long)]
    word_list: Option<PathBuf>,

    /// store the resulting settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Flags win over stored settings
    fn merge_into(&self, stored: Config) -> Config {
        Config {
            tier: self.tier.unwrap_or(stored.tier),
            max_lives: self.lives.unwrap_or(stored.max_lives),
            turn_secs: self.turn_secs.unwrap_or(stored.turn_secs),
            word_list: self.word_list.clone().or(stored.word_list),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    match AppDirs::log_path() {
        Some(log_path) => {
            // the game still runs without a log
            if let Err(e) = init_file_logging(&log_path) {
                eprintln!("gallows: logging disabled ({}): {e}", log_path.display());
            }
        }
        None => eprintln!("gallows: logging disabled: no state directory found"),
    }

    let store = FileConfigStore::new();
    let config = cli.merge_into(store.load());
    if cli.save_config {
        store.save(&config)?;
        info!(path = %store.path().display(), "saved config");
    }

    let supplier: Box<dyn WordSupplier> = match &config.word_list {
        Some(path) => Box::new(CorpusSupplier::with_basic_word_file(path)?),
        None => Box::new(CorpusSupplier::new()?),
    };
    let mut app = App::new(config, supplier);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;

        match runner.step() {
            GameEvent::Tick => app.on_tick(runner.tick_interval()),
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if app.on_key(key)? == Flow::Quit {
                    info!("quit");
                    return Ok(());
                }
            }
        }
    }
}
