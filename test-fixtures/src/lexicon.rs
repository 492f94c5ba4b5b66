use std::collections::HashMap;

use whyfind_core::errors::{LexiconError, WhyfindResult};
use whyfind_core::models::{PartOfSpeech, SenseId};
use whyfind_core::traits::{ILexicon, Relatedness};

/// Floor score for same-category sense pairs with no explicit table entry.
const FLOOR_SCORE: f64 = 0.5;

/// Score a sense gets against itself (the depth-based maximum in a real
/// taxonomy).
const IDENTITY_SCORE: f64 = 3.6;

/// Hand-built lexical knowledge base.
///
/// Sense ids follow the `word.p.NN` convention. Relatedness is only
/// defined within one part-of-speech taxonomy: cross-category pairs are
/// `Incomparable`, same-category pairs score from an explicit symmetric
/// table or fall back to a low floor.
pub struct ToyLexicon {
    senses: HashMap<(String, PartOfSpeech), Vec<SenseId>>,
    scores: HashMap<(SenseId, SenseId), f64>,
}

impl ToyLexicon {
    pub fn new() -> Self {
        Self {
            senses: HashMap::new(),
            scores: HashMap::new(),
        }
    }

    /// Lexicon covering the "war" corpus and the canonical end-to-end
    /// scenario.
    pub fn with_war_corpus() -> Self {
        let mut lex = Self::new();
        lex.insert_senses("war", PartOfSpeech::Noun, &["war.n.01"]);
        lex.insert_senses("war", PartOfSpeech::Verb, &["war.v.01"]);
        lex.insert_senses("start", PartOfSpeech::Noun, &["start.n.01"]);
        lex.insert_senses("start", PartOfSpeech::Verb, &["start.v.01"]);
        lex.insert_senses("cause", PartOfSpeech::Noun, &["cause.n.01"]);
        lex.insert_senses("cause", PartOfSpeech::Verb, &["cause.v.01"]);
        lex.insert_senses("dispute", PartOfSpeech::Noun, &["dispute.n.01"]);
        lex.insert_senses("dispute", PartOfSpeech::Verb, &["dispute.v.01"]);
        lex.insert_senses("border", PartOfSpeech::Noun, &["border.n.01"]);
        lex.insert_senses("conflict", PartOfSpeech::Noun, &["conflict.n.01"]);
        lex.insert_senses("treaty", PartOfSpeech::Noun, &["treaty.n.01"]);
        lex.insert_senses("reason", PartOfSpeech::Noun, &["reason.n.01"]);
        lex.insert_senses("why", PartOfSpeech::Noun, &["why.n.01"]);
        lex.insert_senses("begin", PartOfSpeech::Verb, &["begin.v.01"]);
        lex.insert_senses("swiftly", PartOfSpeech::Adverb, &["swiftly.r.01"]);

        lex.insert_score("cause.v.01", "dispute.v.01", 2.5);
        lex.insert_score("cause.v.01", "start.v.01", 1.8);
        lex.insert_score("why.n.01", "dispute.n.01", 2.3);
        lex.insert_score("why.n.01", "reason.n.01", 3.1);
        lex.insert_score("war.n.01", "conflict.n.01", 2.8);
        lex.insert_score("begin.v.01", "start.v.01", 3.0);
        lex
    }

    pub fn insert_senses(&mut self, word: &str, pos: PartOfSpeech, ids: &[&str]) {
        self.senses.insert(
            (word.to_string(), pos),
            ids.iter().map(|id| SenseId::from(*id)).collect(),
        );
    }

    pub fn insert_score(&mut self, a: &str, b: &str, score: f64) {
        self.scores
            .insert((SenseId::from(a), SenseId::from(b)), score);
        self.scores
            .insert((SenseId::from(b), SenseId::from(a)), score);
    }

    /// The `p` of `word.p.NN`.
    fn pos_key(sense: &SenseId) -> Option<&str> {
        sense.as_str().split('.').nth(1)
    }
}

impl Default for ToyLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ILexicon for ToyLexicon {
    fn senses(&self, word: &str, pos: Option<PartOfSpeech>) -> WhyfindResult<Vec<SenseId>> {
        let all_pos = [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
        ];
        let mut out = Vec::new();
        for p in all_pos {
            if pos.is_some() && pos != Some(p) {
                continue;
            }
            if let Some(ids) = self.senses.get(&(word.to_string(), p)) {
                out.extend(ids.iter().cloned());
            }
        }
        Ok(out)
    }

    fn relatedness(&self, a: &SenseId, b: &SenseId) -> Relatedness {
        match (Self::pos_key(a), Self::pos_key(b)) {
            (Some(ka), Some(kb)) if ka == kb => {
                if a == b {
                    return Relatedness::Score(IDENTITY_SCORE);
                }
                let score = self
                    .scores
                    .get(&(a.clone(), b.clone()))
                    .copied()
                    .unwrap_or(FLOOR_SCORE);
                Relatedness::Score(score)
            }
            // Different taxonomies, or a malformed sense id.
            _ => Relatedness::Incomparable,
        }
    }

    fn canonical_sense(
        &self,
        word: &str,
        pos: PartOfSpeech,
        index: usize,
    ) -> WhyfindResult<SenseId> {
        self.senses
            .get(&(word.to_string(), pos))
            .and_then(|ids| ids.get(index))
            .cloned()
            .ok_or_else(|| {
                LexiconError::NoCanonicalSense {
                    word: word.to_string(),
                    pos,
                    index,
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn senses_filter_by_pos() {
        let lex = ToyLexicon::with_war_corpus();
        let nouns = lex.senses("war", Some(PartOfSpeech::Noun)).unwrap();
        assert_eq!(nouns, vec![SenseId::from("war.n.01")]);
        let all = lex.senses("war", None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn unknown_word_is_empty_not_an_error() {
        let lex = ToyLexicon::with_war_corpus();
        assert!(lex.senses("zyzzogeton", None).unwrap().is_empty());
    }

    #[test]
    fn cross_category_is_incomparable() {
        let lex = ToyLexicon::with_war_corpus();
        let rel = lex.relatedness(&SenseId::from("cause.v.01"), &SenseId::from("war.n.01"));
        assert_eq!(rel, Relatedness::Incomparable);
    }

    #[test]
    fn table_scores_are_symmetric() {
        let lex = ToyLexicon::with_war_corpus();
        let a = SenseId::from("cause.v.01");
        let b = SenseId::from("dispute.v.01");
        assert_eq!(lex.relatedness(&a, &b), Relatedness::Score(2.5));
        assert_eq!(lex.relatedness(&b, &a), Relatedness::Score(2.5));
    }

    #[test]
    fn canonical_sense_pins_cause() {
        let lex = ToyLexicon::with_war_corpus();
        let sense = lex.canonical_sense("cause", PartOfSpeech::Verb, 0).unwrap();
        assert_eq!(sense, SenseId::from("cause.v.01"));
    }

    #[test]
    fn missing_canonical_sense_is_typed() {
        let lex = ToyLexicon::with_war_corpus();
        let err = lex
            .canonical_sense("cause", PartOfSpeech::Verb, 5)
            .unwrap_err();
        assert!(err.to_string().contains("no canonical sense"));
    }
}
