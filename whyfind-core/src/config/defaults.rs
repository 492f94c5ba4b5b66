//! Default configuration values.

/// Offset into the ranked page list.
pub const DEFAULT_START: usize = 0;

/// Number of top-ranked pages to extract answers from.
pub const DEFAULT_NUM_TOP: usize = 10;

/// Relatedness cutoff for sense pairs. Calibrated empirically against a
/// Leacock-Chodorow-style measure; scores at or above it count as related.
pub const DEFAULT_RELATEDNESS_THRESHOLD: f64 = 2.16;
