use super::error::SupplierError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which corpus a new answer is drawn from
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyTier {
    /// single words
    #[default]
    Basic,
    /// short technical phrases
    Intermediate,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 2] = [DifficultyTier::Basic, DifficultyTier::Intermediate];

    /// The tier after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            DifficultyTier::Basic => DifficultyTier::Intermediate,
            DifficultyTier::Intermediate => DifficultyTier::Basic,
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = SupplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(DifficultyTier::Basic),
            "intermediate" => Ok(DifficultyTier::Intermediate),
            _ => Err(SupplierError::UnsupportedTier {
                tier: s.to_string(),
            }),
        }
    }
}
