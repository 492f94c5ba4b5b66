use crate::errors::WhyfindResult;
use crate::models::PageId;
use crate::traits::IDocument;

/// The IR index that has already ranked documents by lexical similarity.
pub trait IIndex: Send + Sync {
    /// Rank every indexed document against the normalized query tokens.
    /// Returns (page id, similarity score) pairs, strictly descending by
    /// score.
    fn ranked(&self, tokens: &[String]) -> WhyfindResult<Vec<(PageId, f64)>>;

    /// Fetch full page objects for the given ids, in an order
    /// corresponding to the requested ids.
    fn get_page(&self, ids: &[PageId]) -> WhyfindResult<Vec<Box<dyn IDocument>>>;
}
