//! Derived views over a state snapshot.
//!
//! Pure functions only: nothing here stores state, and everything is
//! recomputed per call from the snapshot it is given. Callers that want
//! memoization can key a cache on `Store::version()`.

use crate::types::{ChecklistItem, Filter, UiState};

/// Item counts for the summary line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total number of items
    pub total: usize,
    /// Number of checked items
    pub done: usize,
    /// Number of unchecked items (`total - done`)
    pub active: usize,
}

/// The subset of items visible under the active filter
///
/// Relative order from `state.items` is preserved; the snapshot is borrowed,
/// never mutated.
#[must_use]
pub fn visible_items(state: &UiState) -> Vec<&ChecklistItem> {
    state
        .items
        .iter()
        .filter(|item| match state.filter {
            Filter::All => true,
            Filter::Done => item.checked,
            Filter::Active => !item.checked,
        })
        .collect()
}

/// The three summary counts
///
/// `done + active == total` always holds.
#[must_use]
pub fn summary(state: &UiState) -> Summary {
    let total = state.items.len();
    let done = state.items.iter().filter(|item| item.checked).count();

    Summary {
        total,
        done,
        active: total - done,
    }
}
