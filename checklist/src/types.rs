//! Domain types for the checklist screen.
//!
//! The checklist is the simplest possible Uniflow feature: one screen of
//! items that can be added, toggled, deleted, filtered, and summarized. This
//! module holds the data model; transition logic lives in [`crate::reducer`]
//! and derived views in [`crate::view`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a checklist item
///
/// Stable and immutable after creation; generated once per accepted add.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Creates a new random `ItemId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `ItemId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single checklist item
///
/// Only `checked` ever changes after creation; everything else is frozen at
/// add time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier
    pub id: ItemId,
    /// Title of the item (non-empty, trimmed)
    pub title: String,
    /// Whether the item is checked off
    pub checked: bool,
    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl ChecklistItem {
    /// Creates a new unchecked item
    #[must_use]
    pub const fn new(id: ItemId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            checked: false,
            created_at,
        }
    }

    /// Flips the checked flag
    pub const fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// Which subset of items is visible
///
/// A pure selector value with no lifecycle of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Show every item
    #[default]
    All,
    /// Show only checked items
    Done,
    /// Show only unchecked items
    Active,
}

/// The single source of truth for the checklist screen
///
/// Owned exclusively by the Store and replaced wholesale on every reduction.
/// Invariants: no two items share an id; `input` holds only unconsumed draft
/// text (cleared exactly on a successful add); `error` is set only right
/// after a rejected operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// All items, in insertion order (new items always append last)
    pub items: Vec<ChecklistItem>,
    /// Current draft text for the add field
    pub input: String,
    /// Active visibility filter
    pub filter: Filter,
    /// Last validation error message (if any)
    pub error: Option<String>,
}

impl UiState {
    /// Creates a new empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Checks whether an item with the given id exists
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }
}

/// Events the screen can produce
///
/// Stateless commands carrying only the minimal identifying payload - no
/// derived data ever travels in an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// The draft text changed (a keystroke); no validation happens here
    InputChanged(String),
    /// The add button was clicked; the current draft is validated and consumed
    AddClicked,
    /// Flip the checked flag of the item with this id
    ToggleDone(ItemId),
    /// Remove the item with this id
    Delete(ItemId),
    /// Switch the visibility filter
    FilterChanged(Filter),
    /// The host acknowledged the error; clear it
    ErrorConsumed,
}
