//! # whyfind-core
//!
//! Foundation crate for the whyfind answer-extraction system.
//! Defines the data model, the call-boundary traits for the external
//! collaborators (IR index, tokenizer, POS tagger, lexical knowledge base,
//! document), errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ExtractionConfig, WindowMode};
pub use errors::{WhyfindError, WhyfindResult};
pub use models::{
    Answer, AnswerSet, PageId, PartOfSpeech, SenseId, Sentence, TaggedQuery, TaggedTerm,
};
pub use traits::{IDocument, IIndex, ILexicon, ITagger, ITokenizer, Relatedness};
