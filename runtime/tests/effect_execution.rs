//! Integration tests for Store effect execution and action broadcasting
//!
//! Exercises the feedback loop the pages rely on: futures whose actions are
//! reduced again, delays that fire later, and observers that see every
//! feedback action in order.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use nikofree_core::composition::scope_reducer;
use nikofree_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use nikofree_runtime::{Store, StoreError};
use nikofree_testing::init_test_tracing;
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum BannerAction {
    /// Show the banner, hide it after a delay
    Show,
    /// Banner hidden
    Hide,
    /// Fan out two independent lookups
    Lookup,
    /// One lookup finished
    Found(u32),
}

#[derive(Debug, Clone, Default)]
struct BannerState {
    visible: bool,
    found: Vec<u32>,
}

#[derive(Clone)]
struct BannerEnvironment {
    hide_after: Duration,
}

#[derive(Clone)]
struct BannerReducer;

impl Reducer for BannerReducer {
    type State = BannerState;
    type Action = BannerAction;
    type Environment = BannerEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            BannerAction::Show => {
                state.visible = true;
                smallvec![Effect::delay(env.hide_after, BannerAction::Hide)]
            },
            BannerAction::Hide => {
                state.visible = false;
                SmallVec::new()
            },
            BannerAction::Lookup => smallvec![Effect::merge(vec![
                Effect::future(async { Some(BannerAction::Found(1)) }),
                Effect::future(async { Some(BannerAction::Found(2)) }),
            ])],
            BannerAction::Found(n) => {
                state.found.push(n);
                SmallVec::new()
            },
        }
    }
}

fn env() -> BannerEnvironment {
    BannerEnvironment {
        hide_after: Duration::from_secs(2),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn delayed_action_is_reduced_after_its_delay() {
    init_test_tracing();
    let store = Store::new(BannerState::default(), BannerReducer, env());

    let _ = store.send(BannerAction::Show).await.unwrap();
    assert!(store.state(|s| s.visible).await);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(store.state(|s| s.visible).await);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!store.state(|s| s.visible).await);
}

#[tokio::test]
async fn parallel_futures_all_feed_back() {
    let store = Store::new(BannerState::default(), BannerReducer, env());

    let mut handle = store.send(BannerAction::Lookup).await.unwrap();
    handle.wait().await;

    let mut found = store.state(|s| s.found.clone()).await;
    found.sort_unstable();
    assert_eq!(found, vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn observers_see_feedback_actions_only() {
    let store = Store::new(BannerState::default(), BannerReducer, env());
    let mut observer = store.subscribe_actions();

    let mut handle = store.send(BannerAction::Show).await.unwrap();
    handle.wait().await;

    assert_eq!(observer.recv().await.unwrap(), BannerAction::Hide);
    assert!(observer.try_recv().is_err());
}

#[tokio::test]
async fn wait_with_timeout_reports_slow_effects() {
    let store = Store::new(
        BannerState::default(),
        BannerReducer,
        BannerEnvironment {
            hide_after: Duration::from_secs(60),
        },
    );

    let mut handle = store.send(BannerAction::Show).await.unwrap();
    assert!(handle.wait_with_timeout(Duration::from_millis(20)).await.is_err());
    assert_eq!(handle.pending(), 1);
}

#[tokio::test]
async fn shutdown_times_out_on_long_delays() {
    let store = Store::new(
        BannerState::default(),
        BannerReducer,
        BannerEnvironment {
            hide_after: Duration::from_secs(60),
        },
    );

    let _ = store.send(BannerAction::Show).await.unwrap();
    let result = store.shutdown(Duration::from_millis(30)).await;
    assert_eq!(result, Err(StoreError::ShutdownTimeout(1)));
}

// ============================================================================
// Scoped child reducers
// ============================================================================

#[derive(Debug, Clone, Default)]
struct Page {
    banner: BannerState,
    title: String,
}

#[derive(Debug, Clone, PartialEq)]
enum PageAction {
    Banner(BannerAction),
    Rename(String),
}

#[tokio::test(start_paused = true)]
async fn scoped_child_effects_return_to_parent() {
    let scoped = scope_reducer(
        BannerReducer,
        |page: &mut Page| &mut page.banner,
        |action| match action {
            PageAction::Banner(inner) => Some(inner),
            PageAction::Rename(_) => None,
        },
        PageAction::Banner,
        |env: &BannerEnvironment| env,
    );
    let store = Store::new(Page::default(), scoped, env());
    let mut observer = store.subscribe_actions();

    let mut handle = store.send(PageAction::Banner(BannerAction::Show)).await.unwrap();
    let _ = store.send(PageAction::Rename("Jazz Night".to_string())).await.unwrap();
    handle.wait().await;

    assert_eq!(
        observer.recv().await.unwrap(),
        PageAction::Banner(BannerAction::Hide)
    );
    let (visible, title) = store.state(|p| (p.banner.visible, p.title.clone())).await;
    assert!(!visible);
    // Rename is not a banner action, so the scoped reducer ignores it
    assert_eq!(title, "");
}
