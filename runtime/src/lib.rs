//! # Niko Free Runtime
//!
//! The Store runtime that owns page state, runs the reducer and executes
//! the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, serializes reducer calls, executes effects
//! - **`EffectHandle`**: Lets callers wait for the effects of one action
//! - **Feedback loop**: Actions produced by effects are sent back into the store
//!
//! ## Example
//!
//! ```ignore
//! use nikofree_runtime::Store;
//!
//! let store = Store::new(WizardState::default(), WizardReducer::new(), env);
//!
//! store.send(WizardAction::SetBusinessName("Acme".into())).await?;
//! let step = store.state(|s| s.step).await;
//! ```

use nikofree_core::{effect::Effect, reducer::Reducer};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, watch, RwLock};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// Returned when `send()` is called after `shutdown()` started,
        /// e.g. once the user navigated away from the page.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`]. Waiting on it resolves once every effect
/// started directly by that action has finished, including the reducer run
/// for any action those effects fed back.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(DetailAction::CopyLink).await?;
/// handle.wait().await;
/// // The clipboard write finished and its outcome was reduced
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create a handle and the tracking context that feeds it
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: Arc::new(tx),
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    #[must_use]
    pub fn completed() -> Self {
        let (handle, _tracking) = Self::new();
        handle
    }

    /// Number of tracked effects still running
    #[must_use]
    pub fn pending(&self) -> usize {
        self.effects.load(Ordering::SeqCst)
    }

    /// Wait for all tracked effects to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            if self.completion.changed().await.is_err() {
                break;
            }
        }
    }

    /// Wait for all tracked effects to complete with a timeout
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if the timeout expires before all effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), ()> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| ())
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending())
            .finish_non_exhaustive()
    }
}

/// Internal: effect tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: Arc<watch::Sender<()>>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Keeps the counter correct even if the effect task panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        broadcast, Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration,
        Effect, EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreError,
    };

    /// The Store - runtime coordinator for a page reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, so reducer calls are serialized)
    /// 2. Reducer (page logic)
    /// 3. Environment (injected collaborators)
    /// 4. Effect execution (with feedback loop)
    ///
    /// Cloning a Store yields another handle onto the same state.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Actions produced by effects, for observers such as a renderer
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
        A: Send + Clone + std::fmt::Debug + 'static,
        S: Send + Sync + 'static,
        E: Clone + Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
        }

        /// Create a store with a custom action broadcast capacity
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Starts the returned effects in background tasks
        ///
        /// Returns after effects have been started, not finished; wait on the
        /// returned [`EffectHandle`] to observe completion.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError> {
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!(?action, "Rejected action: store is shutting down");
                metrics::counter!("store.shutdown.rejected_actions").increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;

                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut *state, action, &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            for effect in effects {
                self.execute_effect(effect, tracking.clone());
            }

            Ok(handle)
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let can_advance = store.state(WizardState::can_advance).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Subscribe to actions produced by effects
        ///
        /// Only feedback actions are broadcast, not the actions passed to
        /// [`Store::send`].
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Number of effects currently running across all actions
        #[must_use]
        pub fn pending_effects(&self) -> usize {
            self.pending_effects.load(Ordering::Acquire)
        }

        /// Stop accepting actions and wait for running effects to finish
        ///
        /// Used when the shell navigates away from a page: the page state is
        /// discarded, but in-flight effects (a pending label reset, a
        /// clipboard write) are allowed to settle first.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires before
        /// all pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            self.shutdown.store(true, Ordering::Release);

            let start = tokio::time::Instant::now();
            let poll_interval = Duration::from_millis(10);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(pending_effects = pending, "Shutdown timeout");
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Start one background task, tracked both per-action and globally
        fn spawn_tracked<F>(&self, tracking: &EffectTracking, task: F)
        where
            F: std::future::Future<Output = ()> + Send + 'static,
        {
            tracking.increment();
            self.pending_effects.fetch_add(1, Ordering::SeqCst);

            let guard = DecrementGuard(tracking.clone());
            let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

            tokio::spawn(async move {
                let _guard = guard;
                let _pending_guard = pending_guard;
                task.await;
            });
        }

        /// Feed an effect's action back into the store
        async fn feed_back(&self, action: A) {
            let _ = self.action_broadcast.send(action.clone());
            if let Err(error) = self.send(action).await {
                tracing::debug!(%error, "Dropped feedback action");
            }
        }

        /// Execute an effect with tracking
        ///
        /// - `None`: No-op
        /// - `Future`: Runs the computation, sends the resulting action if `Some`
        /// - `Delay`: Waits for the duration, then sends the action
        /// - `Parallel`: Starts every child effect at once
        /// - `Sequential`: Runs child effects in order, each to completion
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned into tasks
        fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
            match effect {
                Effect::None => {
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(future) => {
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    let store = self.clone();
                    self.spawn_tracked(&tracking, async move {
                        if let Some(action) = future.await {
                            tracing::trace!("Effect::Future produced an action");
                            store.feed_back(action).await;
                        }
                    });
                },
                Effect::Delay { duration, action } => {
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    tracing::trace!(?duration, "Scheduling delayed action");
                    let store = self.clone();
                    self.spawn_tracked(&tracking, async move {
                        tokio::time::sleep(duration).await;
                        store.feed_back(*action).await;
                    });
                },
                Effect::Parallel(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);
                    for effect in effects {
                        self.execute_effect(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "sequential")
                        .increment(1);
                    let store = self.clone();
                    self.spawn_tracked(&tracking, async move {
                        for effect in effects {
                            let (mut step, step_tracking) = EffectHandle::new();
                            store.execute_effect(effect, step_tracking);
                            step.wait().await;
                        }
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
