use derive_more::{Display, Error};
use std::path::PathBuf;

/// Reasons a word supplier cannot produce an answer
#[derive(Debug, Display, Error)]
pub enum SupplierError {
    #[display("unsupported difficulty tier: {tier}")]
    UnsupportedTier { tier: String },

    #[display("unable to load corpus {name}: {reason}")]
    Corpus { name: String, reason: String },

    #[display("unable to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
