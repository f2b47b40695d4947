use crate::{game::DEFAULT_MAX_LIVES, language::DifficultyTier, timer::DEFAULT_TURN_SECS};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Player preferences kept between runs. Game progress is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tier: DifficultyTier,
    pub max_lives: i32,
    pub turn_secs: u64,
    /// newline separated words replacing the bundled basic corpus
    pub word_list: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: DifficultyTier::Basic,
            max_lives: DEFAULT_MAX_LIVES,
            turn_secs: DEFAULT_TURN_SECS,
            word_list: None,
        }
    }
}

impl Config {
    /// Lives and turn length must both be positive to play at all
    pub fn is_playable(&self) -> bool {
        self.max_lives >= 1 && self.turn_secs >= 1
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "gallows") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("gallows_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) if cfg.is_playable() => cfg,
            Ok(cfg) => {
                warn!(
                    path = %self.path.display(),
                    max_lives = cfg.max_lives,
                    turn_secs = cfg.turn_secs,
                    "ignoring config with non-positive lives or turn length"
                );
                Config::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
