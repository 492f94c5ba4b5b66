use crate::models::PageId;

/// IR index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("IR index unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("page {id} not found in index")]
    PageNotFound { id: PageId },

    #[error("index returned {returned} pages for {requested} requested ids")]
    PageCountMismatch { requested: usize, returned: usize },
}
