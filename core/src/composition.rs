//! Reducer composition utilities
//!
//! A page is often built from smaller components with their own state and
//! actions. [`scope_reducer`] lets a parent reuse a child reducer by telling
//! it three things:
//!
//! - where the child's state lives inside the parent state
//! - how to recognise child actions among parent actions
//! - how to wrap the child's feedback actions back into parent actions
//!
//! # Examples
//!
//! ```
//! use nikofree_core::composition::scope_reducer;
//! use nikofree_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Default)]
//! struct Toggle {
//!     on: bool,
//! }
//!
//! enum ToggleAction {
//!     Flip,
//! }
//!
//! struct ToggleReducer;
//!
//! impl Reducer for ToggleReducer {
//!     type State = Toggle;
//!     type Action = ToggleAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Toggle, _action: ToggleAction, _env: &()) -> SmallVec<[Effect<ToggleAction>; 4]> {
//!         state.on = !state.on;
//!         SmallVec::new()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Page {
//!     toggle: Toggle,
//!     title: String,
//! }
//!
//! enum PageAction {
//!     Toggle(ToggleAction),
//!     Rename(String),
//! }
//!
//! let scoped = scope_reducer(
//!     ToggleReducer,
//!     |page: &mut Page| &mut page.toggle,
//!     |action| match action {
//!         PageAction::Toggle(inner) => Some(inner),
//!         PageAction::Rename(_) => None,
//!     },
//!     PageAction::Toggle,
//!     |_: &()| &(),
//! );
//!
//! let mut page = Page::default();
//! scoped.reduce(&mut page, PageAction::Toggle(ToggleAction::Flip), &());
//! assert!(page.toggle.on);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Focuses a child reducer on part of a parent's state and actions.
///
/// Parent actions that `extract` does not recognise are ignored and produce
/// no effects. Effects returned by the child are mapped through `embed`
/// so their feedback lands back in the parent.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `A`: The parent action type
/// - `E`: The parent environment type
/// - `R`: The child reducer
#[must_use]
pub fn scope_reducer<S, A, E, R>(
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
) -> ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        state,
        extract,
        embed,
        environment,
    }
}

/// A child reducer lifted into a parent's state and action space.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    reducer: R,
    state: fn(&mut S) -> &mut R::State,
    extract: fn(A) -> Option<R::Action>,
    embed: fn(R::Action) -> A,
    environment: fn(&E) -> &R::Environment,
}

impl<S, A, E, R> ScopedReducer<S, A, E, R>
where
    R: Reducer,
{
    /// The wrapped child reducer
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.reducer
    }
}

impl<S, A, E, R> Reducer for ScopedReducer<S, A, E, R>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract)(action) else {
            return SmallVec::new();
        };

        let child_state = (self.state)(state);
        let child_env = (self.environment)(env);

        let embed = self.embed;
        self.reducer
            .reduce(child_state, child_action, child_env)
            .into_iter()
            .map(|effect| effect.map(embed))
            .collect()
    }
}

impl<S, A, E, R> Clone for ScopedReducer<S, A, E, R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            state: self.state,
            extract: self.extract,
            embed: self.embed,
            environment: self.environment,
        }
    }
}

impl<S, A, E, R> std::fmt::Debug for ScopedReducer<S, A, E, R>
where
    R: Reducer + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}
