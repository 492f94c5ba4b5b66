//! Candidate page analysis: drive each page's own preprocessing and
//! sentence segmentation, in that order. No semantic work happens here.

use tracing::debug;
use whyfind_core::errors::WhyfindResult;
use whyfind_core::traits::IDocument;

/// Analyze every page in the window. Pages are still uniquely owned at
/// this point; the engine only shares them once analysis is done.
pub fn analyze_pages(pages: &mut [Box<dyn IDocument>]) -> WhyfindResult<()> {
    for page in pages {
        page.preprocess()?;
        page.segment_sentences()?;
        debug!(page = %page.id(), sentences = page.sentences().len(), "page analyzed");
    }
    Ok(())
}
