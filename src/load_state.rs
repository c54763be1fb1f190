//! Per-instance record of which icon slots have finished loading.
//!
//! Entries are keyed by (icon kind, slot index). The set only ever grows:
//! a new submission reuses the same indices for the same kind, so a load
//! that completes after a resubmit still marks the right slot.
//!
//! # Key Structure
//! - `IconKind`: which image the slot shows
//! - `usize`: zero-based position inside that kind's grid

use crate::slots::IconKind;
use std::collections::HashSet;

/// Load key: (icon kind, slot index)
pub type LoadKey = (IconKind, usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconLoadState {
    loaded: HashSet<LoadKey>,
}

impl IconLoadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished load. Returns `false` when the slot was already loaded.
    pub fn mark_loaded(&mut self, kind: IconKind, index: usize) -> bool {
        self.loaded.insert((kind, index))
    }

    pub fn is_loaded(&self, kind: IconKind, index: usize) -> bool {
        self.loaded.contains(&(kind, index))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
