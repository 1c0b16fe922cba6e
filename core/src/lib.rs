//! # Uniflow Core
//!
//! Core traits and types for the Uniflow unidirectional-data-flow architecture.
//!
//! This crate provides the fundamental abstractions for building UI state
//! containers around the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: The single source of truth for a screen
//! - **Event**: All possible inputs to a reducer (user intents, acknowledgements)
//! - **Reducer**: Pure function `(State, Event, Environment) → State`
//! - **Environment**: Injected dependencies via traits (clock, id generation)
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Pure, total reductions (no event may panic or leave the state undefined)
//! - All non-determinism enters through the Environment
//! - State is replaced wholesale, never mutated behind an observer's back
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterEvent {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Event = CounterEvent;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, event: CounterEvent, _env: &()) {
//!         match event {
//!             CounterEvent::Increment => state.count += 1,
//!             CounterEvent::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(State, Event, Environment) → State`.
///
/// They contain all transition logic and are deterministic given the
/// environment, which is what makes them trivially testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state this reducer operates on
    /// - `Event`: The event type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Purity
    ///
    /// `reduce` must be total: every event, applied to any valid state, yields
    /// a valid state. Reducers must not perform I/O, must not panic, and must
    /// only observe time or generate identifiers through the environment.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ChecklistReducer {
    ///     type State = UiState;
    ///     type Event = UiEvent;
    ///     type Environment = ChecklistEnvironment;
    ///
    ///     fn reduce(&self, state: &mut UiState, event: UiEvent, env: &ChecklistEnvironment) {
    ///         match event {
    ///             UiEvent::ErrorConsumed => state.error = None,
    ///             // ...
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The event type this reducer processes
        type Event;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an event into the next state
        ///
        /// The runtime hands the reducer a private clone of the current state;
        /// mutating it in place here is what produces the next published
        /// snapshot. Previously published snapshots are never touched.
        fn reduce(&self, state: &mut Self::State, event: Self::Event, env: &Self::Environment);
    }
}

/// Environment module - Dependency injection traits
///
/// All external non-determinism (wall-clock time, identifier generation) is
/// abstracted behind traits and injected via the Environment parameter, so
/// production code uses the real implementations below and tests substitute
/// deterministic ones.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use uniflow_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system clock
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - abstracts identifier generation
    ///
    /// Identifiers must be collision-resistant independently of clock
    /// resolution: two ids generated within the same clock tick must still be
    /// distinct.
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh, unique identifier
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator backed by random (v4) UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
