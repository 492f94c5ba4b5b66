use std::collections::HashSet;

use whyfind_core::errors::{IndexError, WhyfindResult};
use whyfind_core::models::PageId;
use whyfind_core::traits::{IDocument, IIndex};

use crate::document::TextDocument;

/// Token-overlap IR index over a fixed in-memory corpus.
///
/// Ranks every document by the number of distinct query tokens it
/// contains, descending, with ascending-id tie-break for determinism.
pub struct MemoryIndex {
    docs: Vec<(PageId, String)>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self { docs: Vec::new() }
    }

    pub fn add(&mut self, id: PageId, text: impl Into<String>) {
        self.docs.push((id, text.into()));
    }

    /// Three-document corpus for the canonical end-to-end scenario.
    pub fn with_war_corpus() -> Self {
        let mut index = Self::new();
        index.add(
            PageId(1),
            "Why did the war start? The war did start over a border dispute. \
             The treaty was signed later.",
        );
        index.add(
            PageId(2),
            "The second war did start over a fishing dispute.",
        );
        index.add(PageId(3), "Swiftly the cold autumn came.");
        index
    }

    fn doc_tokens(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl IIndex for MemoryIndex {
    fn ranked(&self, tokens: &[String]) -> WhyfindResult<Vec<(PageId, f64)>> {
        let query: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        let mut scored: Vec<(PageId, f64)> = self
            .docs
            .iter()
            .map(|(id, text)| {
                let doc = Self::doc_tokens(text);
                let overlap = query.iter().filter(|t| doc.contains(**t)).count();
                (*id, overlap as f64)
            })
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        Ok(scored)
    }

    fn get_page(&self, ids: &[PageId]) -> WhyfindResult<Vec<Box<dyn IDocument>>> {
        ids.iter()
            .map(|id| {
                self.docs
                    .iter()
                    .find(|(doc_id, _)| doc_id == id)
                    .map(|(doc_id, text)| {
                        Box::new(TextDocument::new(*doc_id, text.clone())) as Box<dyn IDocument>
                    })
                    .ok_or_else(|| IndexError::PageNotFound { id: *id }.into())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn ranks_by_overlap_then_id() {
        let index = MemoryIndex::with_war_corpus();
        let ranked = index
            .ranked(&tokens(&["why", "did", "the", "war", "start"]))
            .unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].0, PageId(1));
        assert_eq!(ranked[1].0, PageId(2));
        assert_eq!(ranked[2].0, PageId(3));
        assert!(ranked[0].1 > ranked[1].1);
    }

    #[test]
    fn get_page_preserves_requested_order() {
        let index = MemoryIndex::with_war_corpus();
        let pages = index.get_page(&[PageId(2), PageId(1)]).unwrap();
        assert_eq!(pages[0].id(), PageId(2));
        assert_eq!(pages[1].id(), PageId(1));
    }

    #[test]
    fn missing_page_is_a_typed_error() {
        let index = MemoryIndex::with_war_corpus();
        let err = index.get_page(&[PageId(99)]).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
