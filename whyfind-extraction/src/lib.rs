//! # whyfind-extraction
//!
//! Answer extraction for why-questions. Sits downstream of an IR index
//! that has already ranked documents by lexical similarity and re-examines
//! the top-ranked pages at sentence granularity:
//!
//! query → tagged query (POS + candidate senses + implicit causal term)
//!       → page preprocessing + sentence segmentation
//!       → per-sentence conjunctive matching (exact or sense-related)
//!       → ordered answer list.

pub mod engine;
pub mod matcher;
pub mod pages;
pub mod query;
pub mod worker;

pub use engine::AnswerEngine;
pub use matcher::SentenceMatcher;
pub use query::QueryAnalyzer;
pub use worker::{extract_all, extract_answers};
