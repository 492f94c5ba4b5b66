//! Data model for the extraction pipeline.

mod answer;
mod page;
mod pos;
mod sense;
mod tagged_query;

pub use answer::{Answer, AnswerSet};
pub use page::{PageId, Sentence};
pub use pos::PartOfSpeech;
pub use sense::SenseId;
pub use tagged_query::{TaggedQuery, TaggedTerm};
