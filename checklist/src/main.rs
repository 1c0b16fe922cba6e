//! Simple CLI demo for the checklist.
//!
//! Drives the Store through the full add/toggle/filter/delete flow and
//! renders each published snapshot, the way a UI collaborator would.

use checklist::{ChecklistEnvironment, ChecklistReducer, Filter, UiEvent, UiState, view};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniflow_core::environment::{RandomIdGenerator, SystemClock};
use uniflow_runtime::Store;

fn render(state: &UiState) {
    let counts = view::summary(state);
    println!("  {} total / {} done / {} active", counts.total, counts.done, counts.active);
    for item in view::visible_items(state) {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{mark}] {}", item.title);
    }
    if let Some(error) = &state.error {
        println!("  ! {error}");
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checklist=debug,uniflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Checklist Example ===\n");

    // Create environment and store
    let env = ChecklistEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
    let store = Store::new(UiState::new(), ChecklistReducer::new(), env);

    // A render-on-change observer, like a UI surface would attach
    let _subscription = store.subscribe(|state| {
        tracing::debug!(items = state.items.len(), "snapshot published");
    });

    println!("Adding items...");
    for title in ["Buy milk", "Write documentation", "Water the plants"] {
        store.dispatch(UiEvent::InputChanged(title.to_string()));
        store.dispatch(UiEvent::AddClicked);
    }
    render(&store.snapshot());

    println!("\nTrying to add a blank item...");
    store.dispatch(UiEvent::InputChanged("   ".to_string()));
    store.dispatch(UiEvent::AddClicked);
    render(&store.snapshot());
    store.dispatch(UiEvent::ErrorConsumed);

    println!("\nChecking off 'Buy milk'...");
    let milk_id = store.state(|s| s.items[0].id.clone());
    store.dispatch(UiEvent::ToggleDone(milk_id));
    render(&store.snapshot());

    println!("\nShowing only done items...");
    store.dispatch(UiEvent::FilterChanged(Filter::Done));
    render(&store.snapshot());

    println!("\nShowing only active items...");
    store.dispatch(UiEvent::FilterChanged(Filter::Active));
    render(&store.snapshot());

    println!("\nDeleting 'Water the plants'...");
    let plants_id = store.state(|s| s.items[2].id.clone());
    store.dispatch(UiEvent::Delete(plants_id));
    store.dispatch(UiEvent::FilterChanged(Filter::All));
    render(&store.snapshot());

    println!("\n=== Demo Complete ===");
}
