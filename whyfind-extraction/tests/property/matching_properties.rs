//! Property tests for sentence matching and query analysis.

use proptest::prelude::*;

use test_fixtures::{RuleTagger, SimpleTokenizer, ToyLexicon};
use whyfind_core::models::{TaggedQuery, TaggedTerm};
use whyfind_extraction::{QueryAnalyzer, SentenceMatcher};

/// Lowercase words drawn from the fixture vocabulary plus filler.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "war", "start", "cause", "dispute", "border", "conflict", "treaty", "reason", "why",
        "begin", "swiftly", "the", "a", "did", "over", "filler", "noise",
    ])
    .prop_map(String::from)
}

fn sentence_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..12)
}

proptest! {
    // A term present verbatim in the sentence is satisfied no matter how
    // high the threshold is.
    #[test]
    fn verbatim_terms_ignore_the_threshold(
        sentence in sentence_strategy(),
        term_idx in any::<prop::sample::Index>(),
        causal_idx in any::<prop::sample::Index>(),
        threshold in 0.0_f64..1e6,
    ) {
        let lexicon = ToyLexicon::with_war_corpus();
        let tokenizer = SimpleTokenizer::new();
        let matcher = SentenceMatcher::new(&lexicon, &tokenizer, threshold);

        // Both the user term and the causal slot pick words straight from
        // the sentence, so every term has a verbatim satisfier.
        let term = sentence[term_idx.index(sentence.len())].clone();
        let causal = sentence[causal_idx.index(sentence.len())].clone();
        let query = TaggedQuery::new(
            vec![TaggedTerm::new(term, Vec::new())],
            TaggedTerm::new(causal, Vec::new()),
        );

        prop_assert!(matcher.matches(&sentence, &query).unwrap());
    }

    // Raising the threshold can only reject more: a sentence that matches
    // at the higher threshold also matches at any lower one.
    #[test]
    fn matching_is_monotone_in_the_threshold(
        sentence in sentence_strategy(),
        query_words in prop::collection::vec(word_strategy(), 0..4),
        lo in 0.0_f64..5.0,
        delta in 0.0_f64..5.0,
    ) {
        let lexicon = ToyLexicon::with_war_corpus();
        let tagger = RuleTagger::new();
        let tokenizer = SimpleTokenizer::new();
        let analyzer = QueryAnalyzer::new(&tagger, &lexicon);
        let query = analyzer.analyze(&query_words).unwrap();

        let hi = lo + delta;
        let matched_hi = SentenceMatcher::new(&lexicon, &tokenizer, hi)
            .matches(&sentence, &query)
            .unwrap();
        let matched_lo = SentenceMatcher::new(&lexicon, &tokenizer, lo)
            .matches(&sentence, &query)
            .unwrap();

        if matched_hi {
            prop_assert!(matched_lo);
        }
    }

    // The tagged query always carries the causal term, whatever the input.
    #[test]
    fn tagged_query_is_never_empty(tokens in prop::collection::vec(word_strategy(), 0..8)) {
        let lexicon = ToyLexicon::with_war_corpus();
        let tagger = RuleTagger::new();
        let analyzer = QueryAnalyzer::new(&tagger, &lexicon);

        let query = analyzer.analyze(&tokens).unwrap();

        prop_assert_eq!(query.len(), tokens.len() + 1);
        prop_assert_eq!(query.causal_term().term.as_str(), "cause");
    }
}
