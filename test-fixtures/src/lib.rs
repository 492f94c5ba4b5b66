//! In-memory implementations of the whyfind collaborator traits, used by
//! unit, integration, and property tests across the workspace.
//!
//! Everything here is deterministic and does no I/O. `ToyLexicon` and
//! `MemoryIndex` ship a small "war" corpus mirroring the canonical
//! end-to-end scenario (query "why did the war start", answer sentence
//! "the war did start over a border dispute").

mod document;
mod index;
mod lexicon;
mod tagger;
mod tokenizer;

pub use document::TextDocument;
pub use index::MemoryIndex;
pub use lexicon::ToyLexicon;
pub use tagger::RuleTagger;
pub use tokenizer::SimpleTokenizer;
