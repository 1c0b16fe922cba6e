//! Checklist example of the Uniflow architecture.
//!
//! A single-screen checklist state container: add, toggle, delete, filter,
//! and summarize items, with a free-text error slot for rejected adds. It
//! demonstrates:
//!
//! - A pure reducer over a tagged event union
//! - Environment injection for time and identifier generation
//! - Derived views (`visible_items`, `summary`) recomputed from snapshots
//! - Testing with `ReducerTest` and property tests
//!
//! The UI layer is an external collaborator: it renders a snapshot, forwards
//! user events through [`uniflow_runtime::Store::dispatch`], and never
//! mutates `UiState` itself.
//!
//! # Quick Start
//!
//! ```
//! use checklist::{ChecklistEnvironment, ChecklistReducer, UiEvent, UiState, view};
//! use uniflow_core::environment::{RandomIdGenerator, SystemClock};
//! use uniflow_runtime::Store;
//! use std::sync::Arc;
//!
//! // Create environment and store
//! let env = ChecklistEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
//! let store = Store::new(UiState::new(), ChecklistReducer::new(), env);
//!
//! // Add an item
//! store.dispatch(UiEvent::InputChanged("Buy milk".to_string()));
//! store.dispatch(UiEvent::AddClicked);
//!
//! // Read derived views from the latest snapshot
//! let snapshot = store.snapshot();
//! let counts = view::summary(&snapshot);
//! assert_eq!(counts.total, 1);
//! assert_eq!(view::visible_items(&snapshot).len(), 1);
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{ChecklistEnvironment, ChecklistReducer, ValidationError};
pub use types::{ChecklistItem, Filter, ItemId, UiEvent, UiState};
pub use view::{Summary, summary, visible_items};
