use std::fmt;
use std::sync::Arc;

use crate::traits::IDocument;

/// One extracted answer: a matched sentence paired with its source page.
///
/// The page handle is shared, not exclusive — several answers may come from
/// the same page. Immutable after construction.
#[derive(Clone)]
pub struct Answer {
    page: Arc<dyn IDocument>,
    text: String,
}

impl Answer {
    pub fn new(page: Arc<dyn IDocument>, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }

    pub fn page(&self) -> &Arc<dyn IDocument> {
        &self.page
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// Equality by source page id and text, so extraction idempotence is
// observable without comparing allocation identity.
impl PartialEq for Answer {
    fn eq(&self, other: &Self) -> bool {
        self.page.id() == other.page.id() && self.text == other.text
    }
}

impl Eq for Answer {}

impl fmt::Debug for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Answer")
            .field("page", &self.page.id())
            .field("text", &self.text)
            .finish()
    }
}

/// Ordered answers: page rank order, then sentence order within each page.
pub type AnswerSet = Vec<Answer>;
