use crate::models::PartOfSpeech;

/// Lexical knowledge base errors.
///
/// Relatedness scoring failures are NOT errors; they surface as
/// `Relatedness::Incomparable` at the trait boundary.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexical knowledge base unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("no canonical sense for {word:?} ({pos:?}, index {index})")]
    NoCanonicalSense {
        word: String,
        pos: PartOfSpeech,
        index: usize,
    },
}
