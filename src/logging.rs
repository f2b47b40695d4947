use std::error::Error;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Sends tracing output to `path`; the terminal itself belongs to the UI.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Fails if the file cannot be
/// created or a global subscriber is already installed.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()?;

    Ok(())
}
