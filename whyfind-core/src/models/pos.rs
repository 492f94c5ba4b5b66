use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category used to filter sense lookups.
///
/// Raw tagger labels are coarsened to one of these four categories; a label
/// that fits none of them is the "unknown" case, represented as `None` at
/// the call site, which makes the lexicon return senses across all
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Coarsen a raw tagger label (Penn Treebank style) by its leading
    /// letter: N* → noun, V* → verb, J* → adjective, R* → adverb.
    pub fn from_tag_label(label: &str) -> Option<Self> {
        match label.chars().next() {
            Some('N') => Some(PartOfSpeech::Noun),
            Some('V') => Some(PartOfSpeech::Verb),
            Some('J') => Some(PartOfSpeech::Adjective),
            Some('R') => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// Single-letter key used in canonical sense identifiers
    /// (e.g. the `v` in `cause.v.01`).
    pub fn key(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }
}
