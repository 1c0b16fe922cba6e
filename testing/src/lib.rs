//! # Uniflow Testing
//!
//! Testing utilities and helpers for the Uniflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given/When/Then harness for reducers
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_testing::{ReducerTest, test_clock, test_id_generator};
//!
//! ReducerTest::new(ChecklistReducer::new())
//!     .with_env(test_environment())
//!     .given_state(UiState::new())
//!     .when_event(UiEvent::InputChanged("buy milk".to_string()))
//!     .when_event(UiEvent::AddClicked)
//!     .then_state(|state| {
//!         assert_eq!(state.items.len(), 1);
//!     })
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use uniflow_core::environment::{Clock, IdGenerator};


/// Mock implementations of Environment traits
///
/// Deterministic stand-ins for the production environment: a clock that never
/// moves and an id generator that counts.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use uniflow_testing::mocks::FixedClock;
    /// use uniflow_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Sequential id generator for predictable identifiers
    ///
    /// Yields `00000000-...-0001`, `...-0002`, and so on. Distinct ids with
    /// no dependence on the clock, so two generations within the same test
    /// tick never collide.
    ///
    /// # Example
    ///
    /// ```
    /// use uniflow_testing::mocks::SequentialIdGenerator;
    /// use uniflow_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a new generator starting at 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(n))
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Create a fresh sequential id generator for tests
    #[must_use]
    pub const fn test_id_generator() -> SequentialIdGenerator {
        SequentialIdGenerator::new()
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock, test_id_generator};
pub use reducer_test::ReducerTest;
