//! # Uniflow Runtime
//!
//! Runtime implementation for the Uniflow architecture.
//!
//! This crate provides the Store runtime that owns the state, applies the
//! reducer, and publishes new snapshots to observers.
//!
//! ## Core Components
//!
//! - **Store**: the long-lived runtime that owns the single state instance
//! - **Subscription**: the unsubscribe handle returned by [`Store::subscribe`]
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Dispatch an event
//! store.dispatch(Event::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use uniflow_core::reducer::Reducer;

pub use store::{Store, Subscription};

/// Lock a mutex, recovering from poisoning.
///
/// A poisoned lock means another thread panicked while holding it; the data
/// is still structurally valid (observers are shared closures, state is a
/// published `Arc`), so we take the guard and continue rather than propagate
/// the panic into every subsequent dispatch.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Store module - the runtime for reducers
///
/// The Store serializes dispatches, applies the reducer to a private clone of
/// the current state, swaps the published snapshot, and notifies observers.
pub mod store {
    use super::{Arc, AtomicU64, Mutex, Ordering, Reducer, Weak, lock};

    /// Observer callback invoked with each newly published snapshot.
    type Observer<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

    /// Registered observers, keyed by subscription id.
    type ObserverList<S> = Mutex<Vec<(u64, Observer<S>)>>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. The single state instance (published as an `Arc<S>` snapshot)
    /// 2. The reducer (transition logic)
    /// 3. The environment (injected dependencies)
    /// 4. Observer notification on every state change
    ///
    /// # Snapshot semantics
    ///
    /// State is immutable-by-replacement: every dispatch produces a new
    /// snapshot and swaps it in; a previously published snapshot is never
    /// mutated, so an observer holding an old `Arc` never sees it change
    /// underfoot. This is the single-source-of-truth invariant — hosts must
    /// route every write through [`Store::dispatch`] and never keep their own
    /// independently mutable copy of the state.
    ///
    /// # Lifetime
    ///
    /// The Store is an explicit long-lived object: the host that owns the UI
    /// surface holds it (or a clone — clones share the same interior) across
    /// render passes and configuration changes, re-subscribing new surfaces
    /// to the same instance.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(UiState::new(), ChecklistReducer::new(), env);
    ///
    /// let subscription = store.subscribe(|state| render(state));
    /// store.dispatch(UiEvent::AddClicked);
    /// ```
    pub struct Store<S, E, R>
    where
        R: Reducer<State = S, Environment = E>,
    {
        reducer: Arc<R>,
        environment: Arc<E>,
        /// Serializes reduce-then-publish across dispatching threads.
        dispatch_lock: Arc<Mutex<()>>,
        /// Latest published snapshot. Swapped wholesale, never mutated.
        state: Arc<Mutex<Arc<S>>>,
        subscribers: Arc<ObserverList<S>>,
        /// Count of applied events; bumped once per dispatch.
        version: Arc<AtomicU64>,
        next_subscriber_id: Arc<AtomicU64>,
    }

    impl<S, E, R> Store<S, E, R>
    where
        R: Reducer<State = S, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (transition logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process events
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                dispatch_lock: Arc::new(Mutex::new(())),
                state: Arc::new(Mutex::new(Arc::new(initial_state))),
                subscribers: Arc::new(Mutex::new(Vec::new())),
                version: Arc::new(AtomicU64::new(0)),
                next_subscriber_id: Arc::new(AtomicU64::new(0)),
            }
        }

        /// Dispatch an event to the store
        ///
        /// This is the sole write path:
        /// 1. Acquires the dispatch lock (concurrent dispatchers serialize
        ///    here; events apply strictly in lock-acquisition order)
        /// 2. Clones the current snapshot and runs the reducer on the clone
        /// 3. Publishes the clone as the new snapshot and bumps the version
        /// 4. Notifies every subscriber with the new snapshot
        ///
        /// The call is fully synchronous: when it returns, the event has been
        /// applied and all observers have run. No event is ever dropped,
        /// coalesced, or reordered relative to its dispatch order.
        ///
        /// # Re-entrancy
        ///
        /// Observers are invoked on the dispatching thread while the dispatch
        /// lock is held. They may read [`Store::snapshot`] and manage
        /// subscriptions, but must not call `dispatch` from inside a
        /// notification — that would deadlock.
        #[tracing::instrument(skip(self, event), name = "store_dispatch")]
        pub fn dispatch(&self, event: R::Event) {
            let _guard = lock(&self.dispatch_lock);

            let mut next = S::clone(&lock(&self.state));
            self.reducer.reduce(&mut next, event, &self.environment);
            let next = Arc::new(next);

            *lock(&self.state) = Arc::clone(&next);
            let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::trace!(version, "state published");

            // Snapshot the observer list so observers can subscribe or
            // unsubscribe from inside a notification.
            let observers: Vec<_> = lock(&self.subscribers)
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            for observer in observers {
                observer(&next);
            }
        }

        /// Get the latest published snapshot
        ///
        /// Cheap (`Arc` clone) and never null: before the first dispatch this
        /// is the initial state.
        #[must_use]
        pub fn snapshot(&self) -> Arc<S> {
            Arc::clone(&lock(&self.state))
        }

        /// Read a projection of the latest snapshot
        ///
        /// # Example
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.snapshot())
        }

        /// Number of events applied so far
        ///
        /// Monotonically increasing; hosts can use it as a cheap change
        /// detector or as a memoization key for derived views.
        #[must_use]
        pub fn version(&self) -> u64 {
            self.version.load(Ordering::SeqCst)
        }

        /// Register an observer for state changes
        ///
        /// The observer is called with each snapshot published after this
        /// call (it is not called with the current snapshot — read
        /// [`Store::snapshot`] for that).
        ///
        /// # Returns
        ///
        /// A [`Subscription`] handle; the observer stays registered until the
        /// handle is dropped or [`Subscription::unsubscribe`] is called.
        #[must_use = "dropping the Subscription immediately unsubscribes the observer"]
        pub fn subscribe<F>(&self, observer: F) -> Subscription<S>
        where
            F: Fn(&Arc<S>) + Send + Sync + 'static,
        {
            let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);
            lock(&self.subscribers).push((id, Arc::new(observer)));
            tracing::debug!(subscription_id = id, "observer subscribed");

            Subscription {
                id,
                subscribers: Arc::downgrade(&self.subscribers),
            }
        }
    }

    // Manual Clone: clones share the same interior, so a cloned Store is the
    // same logical store (same state, same subscribers).
    impl<S, E, R> Clone for Store<S, E, R>
    where
        R: Reducer<State = S, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                dispatch_lock: Arc::clone(&self.dispatch_lock),
                state: Arc::clone(&self.state),
                subscribers: Arc::clone(&self.subscribers),
                version: Arc::clone(&self.version),
                next_subscriber_id: Arc::clone(&self.next_subscriber_id),
            }
        }
    }

    impl<S, E, R> std::fmt::Debug for Store<S, E, R>
    where
        R: Reducer<State = S, Environment = E>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("version", &self.version.load(Ordering::SeqCst))
                .field("subscribers", &lock(&self.subscribers).len())
                .finish_non_exhaustive()
        }
    }

    /// Handle for an active observer registration
    ///
    /// Returned by [`Store::subscribe`]. The observer is removed when this
    /// handle is dropped, so hosts keep it alive for as long as they want
    /// notifications.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let subscription = store.subscribe(|state| render(state));
    /// // ... later, when the surface goes away:
    /// subscription.unsubscribe();
    /// ```
    #[derive(Debug)]
    pub struct Subscription<S> {
        id: u64,
        subscribers: Weak<ObserverList<S>>,
    }

    impl<S> Subscription<S> {
        /// Remove the observer from the store
        ///
        /// Equivalent to dropping the handle; provided for call-site clarity.
        pub fn unsubscribe(self) {
            drop(self);
        }
    }

    impl<S> Drop for Subscription<S> {
        fn drop(&mut self) {
            // The store may already be gone; nothing to remove then.
            if let Some(subscribers) = self.subscribers.upgrade() {
                lock(&subscribers).retain(|(id, _)| *id != self.id);
                tracing::debug!(subscription_id = self.id, "observer unsubscribed");
            }
        }
    }
}
