//! Reducer logic for the checklist screen.
//!
//! Every event maps to exactly one state transition; reductions are pure and
//! total. The only rejectable operation is an add with a blank draft, and
//! the rejection surfaces as state (`UiState.error`), never as a panic or a
//! propagated error.

use crate::types::{ChecklistItem, ItemId, UiEvent, UiState};
use std::sync::Arc;
use thiserror::Error;
use uniflow_core::{
    environment::{Clock, IdGenerator},
    reducer::Reducer,
};

/// Validation failures surfaced in `UiState.error`
///
/// The `Display` output is the fixed, user-facing message the screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The draft text was empty after trimming
    #[error("Checklist item title cannot be empty")]
    EmptyTitle,
}

/// Environment dependencies for the checklist reducer
///
/// The clock is read exactly once per accepted add (to stamp `created_at`);
/// identifiers come from a generator that is collision-resistant
/// independently of clock resolution.
#[derive(Clone)]
pub struct ChecklistEnvironment {
    /// Clock for `created_at` timestamps
    pub clock: Arc<dyn Clock>,
    /// Generator for fresh item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl ChecklistEnvironment {
    /// Creates a new `ChecklistEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

impl std::fmt::Debug for ChecklistEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChecklistEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the checklist screen
#[derive(Clone, Copy, Debug, Default)]
pub struct ChecklistReducer;

impl ChecklistReducer {
    /// Creates a new `ChecklistReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates the draft text for an add
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] when the draft is empty after
    /// trimming.
    fn validate_title(input: &str) -> Result<String, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(trimmed.to_string())
    }
}

impl Reducer for ChecklistReducer {
    type State = UiState;
    type Event = UiEvent;
    type Environment = ChecklistEnvironment;

    fn reduce(&self, state: &mut UiState, event: UiEvent, env: &ChecklistEnvironment) {
        match event {
            UiEvent::InputChanged(value) => {
                state.input = value;
                state.error = None;
            }

            UiEvent::AddClicked => match Self::validate_title(&state.input) {
                Ok(title) => {
                    let item = ChecklistItem::new(
                        ItemId::from_uuid(env.ids.next_id()),
                        title,
                        env.clock.now(),
                    );
                    // New items always append last: insertion order is the
                    // display order.
                    state.items.push(item);
                    state.input.clear();
                    state.error = None;
                }
                // Rejected: items and draft stay untouched, only the error
                // slot changes.
                Err(error) => state.error = Some(error.to_string()),
            },

            UiEvent::ToggleDone(id) => {
                // Stale ids (item already deleted) are tolerated as no-ops.
                if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
                    item.toggle();
                }
            }

            UiEvent::Delete(id) => {
                state.items.retain(|item| item.id != id);
            }

            UiEvent::FilterChanged(filter) => {
                state.filter = filter;
            }

            UiEvent::ErrorConsumed => {
                state.error = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Filter;
    use chrono::Utc;
    use uniflow_core::environment::Clock;
    use uniflow_testing::{ReducerTest, test_clock, test_id_generator};

    fn create_test_env() -> ChecklistEnvironment {
        ChecklistEnvironment::new(Arc::new(test_clock()), Arc::new(test_id_generator()))
    }

    fn state_with_items(titles: &[(&str, bool)]) -> UiState {
        let mut state = UiState::new();
        for (title, checked) in titles {
            let mut item = ChecklistItem::new(ItemId::new(), (*title).to_string(), Utc::now());
            item.checked = *checked;
            state.items.push(item);
        }
        state
    }

    #[test]
    fn test_input_changed_replaces_draft() {
        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState::new())
            .when_event(UiEvent::InputChanged("buy mi".to_string()))
            .when_event(UiEvent::InputChanged("buy milk".to_string()))
            .then_state(|state| {
                assert_eq!(state.input, "buy milk");
                assert!(state.items.is_empty());
            })
            .run();
    }

    #[test]
    fn test_input_changed_clears_error() {
        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState {
                error: Some(ValidationError::EmptyTitle.to_string()),
                ..UiState::new()
            })
            .when_event(UiEvent::InputChanged("fixed".to_string()))
            .then_state(|state| {
                assert!(state.error.is_none());
            })
            .run();
    }

    #[test]
    fn test_add_appends_trimmed_item() {
        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState::new())
            .when_event(UiEvent::InputChanged("  buy milk  ".to_string()))
            .when_event(UiEvent::AddClicked)
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.items[0].title, "buy milk");
                assert!(!state.items[0].checked);
                assert_eq!(state.input, "");
                assert!(state.error.is_none());
            })
            .run();
    }

    #[test]
    fn test_add_stamps_created_at_from_env_clock() {
        let expected = test_clock().now();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState::new())
            .when_event(UiEvent::InputChanged("buy milk".to_string()))
            .when_event(UiEvent::AddClicked)
            .then_state(move |state| {
                assert_eq!(state.items[0].created_at, expected);
            })
            .run();
    }

    #[test]
    fn test_add_rejects_blank_input() {
        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState::new())
            .when_event(UiEvent::InputChanged("  ".to_string()))
            .when_event(UiEvent::AddClicked)
            .then_state(|state| {
                assert!(state.items.is_empty());
                // The rejected draft is NOT consumed.
                assert_eq!(state.input, "  ");
                assert_eq!(
                    state.error.as_deref(),
                    Some("Checklist item title cannot be empty")
                );
            })
            .run();
    }

    #[test]
    fn test_adds_in_same_clock_tick_get_distinct_ids() {
        // FixedClock never advances, so this is the same-tick case.
        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState::new())
            .when_event(UiEvent::InputChanged("first".to_string()))
            .when_event(UiEvent::AddClicked)
            .when_event(UiEvent::InputChanged("second".to_string()))
            .when_event(UiEvent::AddClicked)
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                assert_ne!(state.items[0].id, state.items[1].id);
                assert_eq!(state.items[0].created_at, state.items[1].created_at);
            })
            .run();
    }

    #[test]
    fn test_toggle_flips_only_the_matching_item() {
        let state = state_with_items(&[("A", false), ("B", false)]);
        let target = state.items[1].id.clone();
        let untouched = state.items[0].clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_event(UiEvent::ToggleDone(target.clone()))
            .then_state(move |state| {
                assert!(state.get(&target).is_some_and(|item| item.checked));
                // Items other than the target stay byte-identical.
                assert_eq!(state.items[0], untouched);
            })
            .run();
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let state = state_with_items(&[("A", false), ("B", true)]);
        let before = state.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_event(UiEvent::ToggleDone(ItemId::new()))
            .then_state(move |state| {
                assert_eq!(*state, before);
            })
            .run();
    }

    #[test]
    fn test_double_toggle_is_identity_on_items() {
        let state = state_with_items(&[("A", false), ("B", true)]);
        let target = state.items[0].id.clone();
        let before = state.items.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_event(UiEvent::ToggleDone(target.clone()))
            .when_event(UiEvent::ToggleDone(target))
            .then_state(move |state| {
                assert_eq!(state.items, before);
            })
            .run();
    }

    #[test]
    fn test_delete_removes_matching_item() {
        let state = state_with_items(&[("A", false), ("B", true)]);
        let target = state.items[1].id.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_event(UiEvent::Delete(target.clone()))
            .then_state(move |state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.items[0].title, "A");
                assert!(!state.contains(&target));
            })
            .run();
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let state = state_with_items(&[("A", false)]);
        let before = state.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(state)
            .when_event(UiEvent::Delete(ItemId::new()))
            .then_state(move |state| {
                assert_eq!(*state, before);
            })
            .run();
    }

    #[test]
    fn test_filter_changed_touches_only_the_filter() {
        let state = state_with_items(&[("A", false)]);
        let items_before = state.items.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState {
                input: "draft".to_string(),
                ..state
            })
            .when_event(UiEvent::FilterChanged(Filter::Done))
            .then_state(move |state| {
                assert_eq!(state.filter, Filter::Done);
                assert_eq!(state.items, items_before);
                assert_eq!(state.input, "draft");
            })
            .run();
    }

    #[test]
    fn test_error_consumed_clears_only_the_error() {
        let state = state_with_items(&[("A", false)]);
        let items_before = state.items.clone();

        ReducerTest::new(ChecklistReducer::new())
            .with_env(create_test_env())
            .given_state(UiState {
                input: "  ".to_string(),
                error: Some(ValidationError::EmptyTitle.to_string()),
                ..state
            })
            .when_event(UiEvent::ErrorConsumed)
            .then_state(move |state| {
                assert!(state.error.is_none());
                assert_eq!(state.input, "  ");
                assert_eq!(state.items, items_before);
            })
            .run();
    }

    mod properties {
        use super::*;
        use crate::view::summary;
        use proptest::prelude::*;
        use std::collections::HashSet;
        use uuid::Uuid;

        fn apply_all(events: Vec<UiEvent>) -> UiState {
            let reducer = ChecklistReducer::new();
            let env = create_test_env();
            let mut state = UiState::new();
            for event in events {
                reducer.reduce(&mut state, event, &env);
            }
            state
        }

        /// Ids from a small pool so toggles and deletes sometimes hit items
        /// created by the sequential test generator.
        fn arb_pool_id() -> impl Strategy<Value = ItemId> {
            (1u128..=8).prop_map(|n| ItemId::from_uuid(Uuid::from_u128(n)))
        }

        fn arb_event() -> impl Strategy<Value = UiEvent> {
            prop_oneof![
                "[ a-z]{0,8}".prop_map(UiEvent::InputChanged),
                Just(UiEvent::AddClicked),
                arb_pool_id().prop_map(UiEvent::ToggleDone),
                arb_pool_id().prop_map(UiEvent::Delete),
                prop_oneof![Just(Filter::All), Just(Filter::Done), Just(Filter::Active)]
                    .prop_map(UiEvent::FilterChanged),
                Just(UiEvent::ErrorConsumed),
            ]
        }

        proptest! {
            #[test]
            fn adds_preserve_dispatch_order(titles in proptest::collection::vec("[a-z]{1,10}", 1..20)) {
                let events = titles
                    .iter()
                    .flat_map(|t| [UiEvent::InputChanged(t.clone()), UiEvent::AddClicked])
                    .collect();
                let state = apply_all(events);

                let ordered: Vec<_> = state.items.iter().map(|i| i.title.clone()).collect();
                prop_assert_eq!(ordered, titles);
            }

            #[test]
            fn summary_invariant_holds_for_any_event_sequence(
                events in proptest::collection::vec(arb_event(), 0..60)
            ) {
                let state = apply_all(events);
                let counts = summary(&state);

                prop_assert_eq!(counts.done + counts.active, counts.total);
                prop_assert_eq!(counts.total, state.count());
            }

            #[test]
            fn ids_stay_unique_for_any_event_sequence(
                events in proptest::collection::vec(arb_event(), 0..60)
            ) {
                let state = apply_all(events);

                let ids: HashSet<_> = state.items.iter().map(|i| i.id.clone()).collect();
                prop_assert_eq!(ids.len(), state.count());
            }

            #[test]
            fn stale_ids_never_change_state(
                titles in proptest::collection::vec("[a-z]{1,10}", 0..10)
            ) {
                let events = titles
                    .iter()
                    .flat_map(|t| [UiEvent::InputChanged(t.clone()), UiEvent::AddClicked])
                    .collect();
                let state = apply_all(events);

                // A random v4 id cannot be in the sequential pool.
                let stale = ItemId::new();
                let reducer = ChecklistReducer::new();
                let env = create_test_env();

                let mut toggled = state.clone();
                reducer.reduce(&mut toggled, UiEvent::ToggleDone(stale.clone()), &env);
                prop_assert_eq!(&toggled, &state);

                let mut deleted = state.clone();
                reducer.reduce(&mut deleted, UiEvent::Delete(stale), &env);
                prop_assert_eq!(&deleted, &state);
            }
        }
    }
}
