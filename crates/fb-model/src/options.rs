//! Configuration options for column resolution.

use serde::{Deserialize, Serialize};

/// Default similarity cutoff for fuzzy header matches.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.84;

/// Options controlling how target columns are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Minimum similarity (0.0-1.0) for a fuzzy match to be accepted.
    ///
    /// Used as given; values outside the range simply accept everything
    /// (below 0) or nothing (above 1).
    pub fuzzy_cutoff: f64,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: DEFAULT_FUZZY_CUTOFF,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuzzy_cutoff(mut self, cutoff: f64) -> Self {
        self.fuzzy_cutoff = cutoff;
        self
    }
}
