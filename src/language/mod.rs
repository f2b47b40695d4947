pub mod core;
pub mod error;
pub mod supplier;
pub mod tier;

pub use self::core::Corpus;
pub use error::SupplierError;
pub use supplier::{CorpusSupplier, FixedWordSupplier, WordSupplier};
pub use tier::DifficultyTier;
