use super::{error::SupplierError, tier::DifficultyTier};
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;
use tracing::debug;

static LANG_DIR: Dir = include_dir!("src/lang");

/// A named list of candidate answers
#[derive(Deserialize, Clone, Debug)]
pub struct Corpus {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Corpus {
    /// The corpus bundled into the binary for `tier`
    pub fn embedded(tier: DifficultyTier) -> Result<Self, SupplierError> {
        read_corpus_from_dir(&format!("{tier}.json"))
    }

    pub fn from_words<S: Into<String>>(name: &str, words: Vec<S>) -> Self {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self {
            name: name.to_string(),
            size: words.len() as u32,
            words,
        }
    }

    /// One entry per non-blank line, surrounding whitespace trimmed
    pub fn from_word_file<P: AsRef<Path>>(path: P) -> Result<Self, SupplierError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SupplierError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(path = %path.display(), count = words.len(), "loaded word list");

        Ok(Self::from_words(&path.display().to_string(), words))
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn choose(&self) -> Option<&str> {
        self.words
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
    }
}

fn read_corpus_from_dir(file_name: &str) -> Result<Corpus, SupplierError> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| SupplierError::Corpus {
            name: file_name.to_string(),
            reason: "file not found".to_string(),
        })?;

    let file_as_str = file.contents_utf8().ok_or_else(|| SupplierError::Corpus {
        name: file_name.to_string(),
        reason: "not valid utf-8".to_string(),
    })?;

    from_str(file_as_str).map_err(|e| SupplierError::Corpus {
        name: file_name.to_string(),
        reason: e.to_string(),
    })
}
