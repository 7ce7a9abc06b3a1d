//! # Niko Free Core
//!
//! Core traits and types shared by the storefront state machines.
//!
//! Every interactive page of the storefront is modelled as a reducer:
//!
//! - **State**: everything the page renders from (form fields, toggles, selections)
//! - **Action**: every input the page reacts to (keystrokes, clicks, timer expiries)
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: description of side work (clipboard writes, navigation, timers)
//! - **Environment**: injected collaborators (clock, navigator, clipboard, browser)
//!
//! Reducers never touch the outside world directly. They return effect
//! descriptions, and the runtime `Store` executes them and feeds any
//! resulting action back in.
//!
//! ## Example
//!
//! ```
//! use nikofree_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Debug, Default)]
//! struct ModalState {
//!     open: bool,
//! }
//!
//! enum ModalAction {
//!     Open,
//!     Close,
//! }
//!
//! struct ModalReducer;
//!
//! impl Reducer for ModalReducer {
//!     type State = ModalState;
//!     type Action = ModalAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ModalState,
//!         action: ModalAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ModalAction>; 4]> {
//!         state.open = matches!(action, ModalAction::Open);
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = ModalState::default();
//! ModalReducer.reduce(&mut state, ModalAction::Open, &());
//! assert!(state.open);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer composition (focusing a child reducer on part of a parent)
pub mod composition;

/// Injected collaborators: clock, navigator, clipboard, browser
pub mod environment;

/// Page identifiers understood by the navigation callback
pub mod navigation;

/// Reducer module - the core trait for page logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all of a page's behaviour and are deterministic and testable
/// without a runtime.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for page logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The page state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for WizardReducer {
    ///     type State = WizardState;
    ///     type Action = WizardAction;
    ///     type Environment = WizardEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut WizardState,
    ///         action: WizardAction,
    ///         env: &WizardEnvironment,
    ///     ) -> SmallVec<[Effect<WizardAction>; 4]> {
    ///         match action {
    ///             WizardAction::Next => { /* gate and advance */ }
    ///             _ => {}
    ///         }
    ///         SmallVec::new()
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Implementations update `state` in place and return descriptions of
        /// any side work. They must not perform I/O themselves.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects are values, not execution. The runtime decides when and where to
/// run them; tests can inspect them without running anything.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Arc;
    use std::time::Duration;

    /// Boxed future produced by an [`Effect::Future`]
    pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// Returned from reducers and executed by the `Store` runtime. Any action
    /// an effect yields is fed back into the same reducer.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects concurrently
        Parallel(Vec<Effect<Action>>),

        /// Run effects one after another
        Sequential(Vec<Effect<Action>>),

        /// Dispatch an action after a delay (transient UI feedback, timeouts)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after the delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Resolves to `Option<Action>`; `Some` is fed back into the reducer.
        Future(EffectFuture<Action>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Dispatch `action` after `duration`
        #[must_use]
        pub fn delay(duration: Duration, action: Action) -> Effect<Action> {
            Effect::Delay {
                duration,
                action: Box::new(action),
            }
        }

        /// Wrap an async computation
        #[must_use]
        pub fn future<F>(future: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(future))
        }

        /// Returns `true` for [`Effect::None`]
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }

        /// Transform the actions this effect produces
        ///
        /// Used when a parent reducer embeds a child: the child's effects
        /// yield child actions, which the parent wraps into its own action type.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            F: Fn(Action) -> B + Send + Sync + 'static,
            Action: Send + 'static,
            B: Send + 'static,
        {
            self.map_shared(&Arc::new(f))
        }

        fn map_shared<B, F>(self, f: &Arc<F>) -> Effect<B>
        where
            F: Fn(Action) -> B + Send + Sync + 'static,
            Action: Send + 'static,
            B: Send + 'static,
        {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map_shared(f)).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map_shared(f)).collect())
                },
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new((**f)(*action)),
                },
                Effect::Future(future) => {
                    let f = Arc::clone(f);
                    Effect::Future(Box::pin(async move { future.await.map(|a| (*f)(a)) }))
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    enum Child {
        Tick(u32),
    }

    #[derive(Debug, PartialEq)]
    enum Parent {
        Child(Child),
    }

    #[test]
    fn map_wraps_delayed_action() {
        let effect = Effect::delay(Duration::from_secs(2), Child::Tick(7)).map(Parent::Child);

        match effect {
            Effect::Delay { duration, action } => {
                assert_eq!(duration, Duration::from_secs(2));
                assert_eq!(*action, Parent::Child(Child::Tick(7)));
            },
            other => panic!("expected delay, got {other:?}"),
        }
    }

    #[test]
    fn map_preserves_structure() {
        let effect = Effect::merge(vec![
            Effect::None,
            Effect::chain(vec![Effect::delay(Duration::ZERO, Child::Tick(1))]),
        ])
        .map(Parent::Child);

        let Effect::Parallel(effects) = effect else {
            panic!("expected parallel");
        };
        assert_eq!(effects.len(), 2);
        assert!(effects[0].is_none());
        assert!(matches!(&effects[1], Effect::Sequential(inner) if inner.len() == 1));
    }

    #[tokio::test]
    async fn map_wraps_future_output() {
        let effect = Effect::future(async { Some(Child::Tick(3)) }).map(Parent::Child);

        let Effect::Future(future) = effect else {
            panic!("expected future");
        };
        assert_eq!(future.await, Some(Parent::Child(Child::Tick(3))));
    }
}
