use super::{core::Corpus, error::SupplierError, tier::DifficultyTier};
use std::path::Path;
use tracing::{debug, instrument};

/// Something that can hand out an answer for a difficulty tier
pub trait WordSupplier {
    fn pick_word(&self, tier: DifficultyTier) -> Result<String, SupplierError>;
}

/// Draws uniformly at random from one corpus per tier.
///
/// Built once at startup and shared by every game.
#[derive(Debug, Clone)]
pub struct CorpusSupplier {
    basic: Corpus,
    intermediate: Corpus,
}

impl CorpusSupplier {
    /// Uses the corpora bundled into the binary
    pub fn new() -> Result<Self, SupplierError> {
        Ok(Self {
            basic: Corpus::embedded(DifficultyTier::Basic)?,
            intermediate: Corpus::embedded(DifficultyTier::Intermediate)?,
        })
    }

    /// Like [`CorpusSupplier::new`] but basic words come from a newline separated file
    pub fn with_basic_word_file<P: AsRef<Path>>(path: P) -> Result<Self, SupplierError> {
        Ok(Self {
            basic: Corpus::from_word_file(path)?,
            intermediate: Corpus::embedded(DifficultyTier::Intermediate)?,
        })
    }

    pub fn from_corpora(basic: Corpus, intermediate: Corpus) -> Self {
        Self {
            basic,
            intermediate,
        }
    }

    fn corpus(&self, tier: DifficultyTier) -> &Corpus {
        match tier {
            DifficultyTier::Basic => &self.basic,
            DifficultyTier::Intermediate => &self.intermediate,
        }
    }
}

impl WordSupplier for CorpusSupplier {
    #[instrument(skip(self))]
    fn pick_word(&self, tier: DifficultyTier) -> Result<String, SupplierError> {
        let corpus = self.corpus(tier);
        let word = corpus
            .choose()
            .ok_or_else(|| SupplierError::UnsupportedTier {
                tier: tier.to_string(),
            })?;
        debug!(corpus = %corpus.name, "picked answer");
        Ok(word.to_string())
    }
}

/// Always answers with the same word, whatever the tier
#[derive(Debug, Clone)]
pub struct FixedWordSupplier {
    word: String,
}

impl FixedWordSupplier {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

impl WordSupplier for FixedWordSupplier {
    fn pick_word(&self, _tier: DifficultyTier) -> Result<String, SupplierError> {
        Ok(self.word.clone())
    }
}
