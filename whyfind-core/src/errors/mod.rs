//! Error types, one enum per subsystem, wrapped by [`WhyfindError`].

mod extraction_error;
mod index_error;
mod lexicon_error;
mod tagger_error;

pub use extraction_error::ExtractionError;
pub use index_error::IndexError;
pub use lexicon_error::LexiconError;
pub use tagger_error::TaggerError;

/// Top-level error for the whyfind workspace.
#[derive(Debug, thiserror::Error)]
pub enum WhyfindError {
    #[error(transparent)]
    ExtractionError(#[from] ExtractionError),

    #[error(transparent)]
    IndexError(#[from] IndexError),

    #[error(transparent)]
    TaggerError(#[from] TaggerError),

    #[error(transparent)]
    LexiconError(#[from] LexiconError),
}

pub type WhyfindResult<T> = Result<T, WhyfindError>;
