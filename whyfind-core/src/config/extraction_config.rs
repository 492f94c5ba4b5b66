use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ExtractionError, WhyfindResult};

/// How the pagination window over the ranked page list is bounded.
///
/// The historical behavior treated `num_top` as an absolute end index,
/// which silently shrinks the effective page size as `start` grows. That
/// reading is preserved behind [`WindowMode::TopClamped`]; the corrected
/// offset-width reading is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Window is `ranked[start .. start + num_top]`.
    #[default]
    Offset,
    /// Window is `ranked[start .. num_top]` (legacy semantics).
    TopClamped,
}

/// Extraction pipeline configuration. Fixed for the lifetime of one
/// engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Offset into the ranked page list.
    pub start: usize,
    /// Number of pages to extract answers from. Combined with `start`,
    /// this pages through the ranked results.
    pub num_top: usize,
    /// Sense pairs scoring at or above this are considered related.
    /// Applies uniformly to every term/sentence comparison in a run.
    pub relatedness_threshold: f64,
    /// Boundary semantics of the pagination window.
    pub window_mode: WindowMode,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            start: defaults::DEFAULT_START,
            num_top: defaults::DEFAULT_NUM_TOP,
            relatedness_threshold: defaults::DEFAULT_RELATEDNESS_THRESHOLD,
            window_mode: WindowMode::default(),
        }
    }
}

impl ExtractionConfig {
    /// Parse from a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Resolve the pagination window `[start, end)` over `available`
    /// ranked results.
    ///
    /// Errors when `start` lies beyond the ranked list or the resolved
    /// window is empty; a window extending past the list is clamped, so a
    /// final partial page is served rather than rejected.
    pub fn window(&self, available: usize) -> WhyfindResult<(usize, usize)> {
        let end = match self.window_mode {
            WindowMode::Offset => self.start.saturating_add(self.num_top),
            WindowMode::TopClamped => self.num_top,
        };
        let end = end.min(available);
        if self.start >= available || self.start >= end {
            return Err(ExtractionError::PaginationOutOfRange {
                start: self.start,
                num_top: self.num_top,
                available,
            }
            .into());
        }
        Ok((self.start, end))
    }
}
