//! Sentence matching: does a sentence satisfy every term of the tagged
//! query?
//!
//! Satisfaction is conjunctive across query terms and disjunctive within a
//! term: any sentence token can satisfy it, by exact string equality or by
//! any sense pair clearing the relatedness threshold.

use tracing::trace;
use whyfind_core::errors::WhyfindResult;
use whyfind_core::models::{Sentence, TaggedQuery, TaggedTerm};
use whyfind_core::traits::{ILexicon, ITokenizer};

/// Decides whether one sentence matches the tagged query.
pub struct SentenceMatcher<'a> {
    lexicon: &'a dyn ILexicon,
    tokenizer: &'a dyn ITokenizer,
    threshold: f64,
}

impl<'a> SentenceMatcher<'a> {
    pub fn new(lexicon: &'a dyn ILexicon, tokenizer: &'a dyn ITokenizer, threshold: f64) -> Self {
        Self {
            lexicon,
            tokenizer,
            threshold,
        }
    }

    /// True when every query term (including the implicit causal term) is
    /// satisfied by some token of `sentence`.
    ///
    /// Sentence tokens are normalized with the same function applied to
    /// the query, so the exact-equality fast path is sound. The sense
    /// search is brute force over tokens × term senses × token senses;
    /// sense sets are small, and per-token sense lookups are deliberately
    /// not cached across sentences.
    pub fn matches(&self, sentence: &Sentence, query: &TaggedQuery) -> WhyfindResult<bool> {
        let tokens = self.tokenizer.normalize(sentence);
        for term in query.terms() {
            if !self.term_satisfied(term, &tokens)? {
                trace!(term = %term.term, "term unsatisfied, rejecting sentence");
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn term_satisfied(&self, term: &TaggedTerm, tokens: &[String]) -> WhyfindResult<bool> {
        for token in tokens {
            if *token == term.term || self.related(term, token)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether any of the term's senses relates to any sense of `token`
    /// at or above the threshold. Incomparable pairs are skipped, never
    /// fatal.
    fn related(&self, term: &TaggedTerm, token: &str) -> WhyfindResult<bool> {
        if term.senses.is_empty() {
            return Ok(false);
        }
        // Unfiltered lookup: the sentence side carries no POS information.
        let token_senses = self.lexicon.senses(token, None)?;
        for term_sense in &term.senses {
            for token_sense in &token_senses {
                if self
                    .lexicon
                    .relatedness(term_sense, token_sense)
                    .clears(self.threshold)
                {
                    trace!(term = %term.term, %token, %term_sense, %token_sense, "related");
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{SimpleTokenizer, ToyLexicon};
    use whyfind_core::models::{SenseId, TaggedTerm};

    fn sentence(words: &[&str]) -> Sentence {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn query_of(terms: Vec<TaggedTerm>) -> TaggedQuery {
        // Tests drive the matcher directly; pin the causal sense by hand.
        let causal = TaggedTerm::new("cause", vec![SenseId::from("cause.v.01")]);
        TaggedQuery::new(terms, causal)
    }

    #[test]
    fn exact_match_ignores_threshold() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        // Threshold far above any score: only exact equality can satisfy.
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, f64::MAX);

        let query = query_of(vec![TaggedTerm::new("cause", vec![])]);
        let matched = matcher
            .matches(&sentence(&["the", "cause", "is", "known"]), &query)
            .unwrap();
        assert!(matched);
    }

    #[test]
    fn normalization_applies_to_sentence_side() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, f64::MAX);

        let query = query_of(vec![]);
        // "Cause" normalizes to "cause" and satisfies the causal term.
        assert!(matcher.matches(&sentence(&["Cause"]), &query).unwrap());
    }

    #[test]
    fn related_sense_satisfies_term() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        // dispute.n.01 ↔ cause.v.01 scores 2.5 in the toy lexicon.
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, 2.16);

        let query = query_of(vec![]);
        assert!(matcher
            .matches(&sentence(&["a", "border", "dispute"]), &query)
            .unwrap());
    }

    #[test]
    fn threshold_is_inclusive() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, 2.5);

        let query = query_of(vec![]);
        assert!(matcher.matches(&sentence(&["dispute"]), &query).unwrap());

        let stricter = SentenceMatcher::new(&lexicon, &tokenizer, 2.51);
        assert!(!stricter.matches(&sentence(&["dispute"]), &query).unwrap());
    }

    #[test]
    fn one_unsatisfied_term_rejects_the_sentence() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, 2.16);

        let query = query_of(vec![
            TaggedTerm::new("cause", vec![]),
            TaggedTerm::new("zyzzogeton", vec![]),
        ]);
        assert!(!matcher
            .matches(&sentence(&["the", "cause", "is", "known"]), &query)
            .unwrap());
    }

    #[test]
    fn incomparable_pairs_are_skipped_not_fatal() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, 0.0);

        // "swiftly" only has an adverb sense, incomparable with cause.v.01
        // in the toy lexicon; evaluation continues and simply fails the
        // causal term.
        let query = query_of(vec![]);
        assert!(!matcher.matches(&sentence(&["swiftly"]), &query).unwrap());
    }

    #[test]
    fn empty_sense_set_never_relates() {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, 0.0);

        let query = query_of(vec![TaggedTerm::new("unknownword", vec![])]);
        assert!(!matcher
            .matches(&sentence(&["war", "dispute", "cause"]), &query)
            .unwrap());
    }
}
