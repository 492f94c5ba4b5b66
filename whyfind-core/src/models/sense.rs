use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of one word sense in the lexical knowledge base,
/// e.g. `cause.v.01`. The extraction pipeline never inspects the contents;
/// it only passes senses back to the lexicon for relatedness scoring.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SenseId(pub String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        SenseId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SenseId {
    fn from(id: &str) -> Self {
        SenseId(id.to_string())
    }
}
