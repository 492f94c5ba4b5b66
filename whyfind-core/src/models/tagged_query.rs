use serde::{Deserialize, Serialize};

use super::SenseId;

/// One query term with its disjunctive set of candidate senses.
///
/// The pipeline never disambiguates a single sense per word; a term is
/// satisfied if *any* of its senses relates to *any* sense of a sentence
/// token, so the full set is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTerm {
    pub term: String,
    pub senses: Vec<SenseId>,
}

impl TaggedTerm {
    pub fn new(term: impl Into<String>, senses: Vec<SenseId>) -> Self {
        Self {
            term: term.into(),
            senses,
        }
    }
}

/// The analyzed query: its tokens enriched with candidate senses, plus the
/// implicit causal term always in final position.
///
/// Constructed only through [`TaggedQuery::new`], which appends the causal
/// term, so the sequence is never empty even for an empty input query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedQuery {
    terms: Vec<TaggedTerm>,
}

impl TaggedQuery {
    /// Build from the user-derived terms and the fixed causal term.
    pub fn new(mut terms: Vec<TaggedTerm>, causal: TaggedTerm) -> Self {
        terms.push(causal);
        Self { terms }
    }

    pub fn terms(&self) -> &[TaggedTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: the causal term is always present.
        false
    }

    /// The implicit causal term (always the last entry).
    pub fn causal_term(&self) -> &TaggedTerm {
        self.terms
            .last()
            .unwrap_or_else(|| unreachable!("tagged query always holds the causal term"))
    }
}
