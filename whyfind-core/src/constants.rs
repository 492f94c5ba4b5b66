//! Fixed constants for the extraction pipeline.

use crate::models::PartOfSpeech;

/// Surface form of the implicit causal query term. It is appended to every
/// tagged query and biases extraction toward causal content regardless of
/// the user's literal query text.
pub const CAUSAL_TERM: &str = "cause";

/// Part of speech of the pinned causal sense.
pub const CAUSAL_SENSE_POS: PartOfSpeech = PartOfSpeech::Verb;

/// Canonical-sense index of the pinned causal sense (the first verb sense
/// of "cause" in the knowledge base).
pub const CAUSAL_SENSE_INDEX: usize = 0;
