//! Query analysis: POS-tag the normalized query tokens, attach candidate
//! sense sets, and append the implicit causal term.

use tracing::debug;
use whyfind_core::constants::{CAUSAL_SENSE_INDEX, CAUSAL_SENSE_POS, CAUSAL_TERM};
use whyfind_core::errors::WhyfindResult;
use whyfind_core::models::{PartOfSpeech, TaggedQuery, TaggedTerm};
use whyfind_core::traits::{ILexicon, ITagger};

/// Turns a normalized query token sequence into a [`TaggedQuery`].
pub struct QueryAnalyzer<'a> {
    tagger: &'a dyn ITagger,
    lexicon: &'a dyn ILexicon,
}

impl<'a> QueryAnalyzer<'a> {
    pub fn new(tagger: &'a dyn ITagger, lexicon: &'a dyn ILexicon) -> Self {
        Self { tagger, lexicon }
    }

    /// Analyze the query tokens.
    ///
    /// Each token's raw tagger label is coarsened to a category; senses
    /// are looked up filtered by that category, or unfiltered when the
    /// label is unrecognized. Unknown words get an empty sense set rather
    /// than failing. The fixed causal term is appended last, bypassing the
    /// tagging path entirely: its single sense is pinned via the lexicon's
    /// canonical-sense lookup.
    pub fn analyze(&self, tokens: &[String]) -> WhyfindResult<TaggedQuery> {
        let tagged = self.tagger.tag(tokens)?;

        let mut terms = Vec::with_capacity(tagged.len());
        for (word, label) in tagged {
            let pos = PartOfSpeech::from_tag_label(&label);
            let senses = self.lexicon.senses(&word, pos)?;
            debug!(%word, ?pos, senses = senses.len(), "tagged query term");
            terms.push(TaggedTerm::new(word, senses));
        }

        let causal_sense =
            self.lexicon
                .canonical_sense(CAUSAL_TERM, CAUSAL_SENSE_POS, CAUSAL_SENSE_INDEX)?;
        let causal = TaggedTerm::new(CAUSAL_TERM, vec![causal_sense]);

        Ok(TaggedQuery::new(terms, causal))
    }
}
