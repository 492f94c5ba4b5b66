use crate::errors::WhyfindResult;
use crate::models::{PartOfSpeech, SenseId};

/// Outcome of a pairwise sense-relatedness computation.
///
/// Some sense pairs cannot be scored at all (senses from incompatible
/// categories share no taxonomy). That is an expected negative signal for
/// matching, not an error, so it is a variant rather than an `Err`:
/// implementations fold any internal scoring failure into `Incomparable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relatedness {
    /// Semantic closeness of the two senses; bounded above by a
    /// taxonomy-depth-based maximum.
    Score(f64),
    /// The pair cannot be scored.
    Incomparable,
}

impl Relatedness {
    /// Whether the score exists and clears `threshold`.
    pub fn clears(&self, threshold: f64) -> bool {
        matches!(self, Relatedness::Score(score) if *score >= threshold)
    }
}

/// The lexical knowledge base supplying word senses and pairwise
/// sense-similarity scores.
pub trait ILexicon: Send + Sync {
    /// All senses of `word`, filtered to `pos` when given, across all
    /// parts of speech when `None`. An unknown word yields an empty set,
    /// not an error; `Err` is reserved for the knowledge base itself
    /// being unreachable.
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> WhyfindResult<Vec<SenseId>>;

    /// Pairwise relatedness of two senses.
    fn relatedness(&self, a: &SenseId, b: &SenseId) -> Relatedness;

    /// The canonical sense of `word` at `index` within `pos`
    /// (e.g. `("cause", Verb, 0)` → `cause.v.01`). Used once per engine
    /// run to pin the implicit causal term's fixed sense.
    fn canonical_sense(
        &self,
        word: &str,
        pos: PartOfSpeech,
        index: usize,
    ) -> WhyfindResult<SenseId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_clears_threshold_inclusively() {
        assert!(Relatedness::Score(2.16).clears(2.16));
        assert!(Relatedness::Score(3.0).clears(2.16));
        assert!(!Relatedness::Score(2.15).clears(2.16));
    }

    #[test]
    fn incomparable_never_clears() {
        assert!(!Relatedness::Incomparable.clears(0.0));
        assert!(!Relatedness::Incomparable.clears(f64::MIN));
    }
}
