//! Call-boundary traits for the external collaborators.
//!
//! The extraction pipeline consumes these services; it implements none of
//! them. All traits are object-safe and `Send + Sync` so a fully built
//! engine can be handed to a worker.

mod document;
mod index;
mod lexicon;
mod tagger;
mod tokenizer;

pub use document::IDocument;
pub use index::IIndex;
pub use lexicon::{ILexicon, Relatedness};
pub use tagger::ITagger;
pub use tokenizer::ITokenizer;
