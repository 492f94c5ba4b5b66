use crate::errors::WhyfindResult;
use crate::models::{PageId, Sentence};

/// One candidate document fetched from the index.
///
/// The engine drives analysis in a strict two-step order: `preprocess`
/// completes before `segment_sentences`, and both run before any sentence
/// is read. Preprocessing must be idempotent; segmentation populates the
/// sentence list once.
pub trait IDocument: Send + Sync + std::fmt::Debug {
    fn id(&self) -> PageId;

    /// Rank-derived similarity score, attached by the engine after the
    /// index has ranked the document.
    fn similarity(&self) -> Option<f64>;

    fn set_similarity(&mut self, score: f64);

    /// Text cleanup ahead of segmentation. Idempotent.
    fn preprocess(&mut self) -> WhyfindResult<()>;

    /// Populate the ordered sentence list from the preprocessed text.
    fn segment_sentences(&mut self) -> WhyfindResult<()>;

    /// Sentences in document order; empty until `segment_sentences` ran.
    fn sentences(&self) -> &[Sentence];
}
