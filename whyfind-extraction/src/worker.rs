//! Worker entry points for running engines off-thread.
//!
//! An [`AnswerEngine`] is self-contained and its collaborators are `Sync`,
//! so a fully built engine can be handed to a worker and driven to
//! completion there. These free functions are the hand-off surface: no
//! partial or streaming results, no cancellation — a run completes or
//! propagates an error from the external services.

use rayon::prelude::*;
use whyfind_core::errors::WhyfindResult;
use whyfind_core::models::AnswerSet;

use crate::engine::AnswerEngine;

/// Drive one engine to completion. Plain forwarder to
/// [`AnswerEngine::get_answers`], usable as a task closure.
pub fn extract_answers(engine: &mut AnswerEngine<'_>) -> WhyfindResult<AnswerSet> {
    engine.get_answers()
}

/// Drive several independent engines to completion on the rayon pool,
/// one worker per engine. Results keep the input order.
pub fn extract_all(engines: &mut [AnswerEngine<'_>]) -> Vec<WhyfindResult<AnswerSet>> {
    engines.par_iter_mut().map(extract_answers).collect()
}
