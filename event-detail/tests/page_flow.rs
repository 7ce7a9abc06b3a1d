//! Event detail page driven through the `Store` runtime

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use event_detail::fixtures;
use event_detail::{
    CopyLabel, DetailAction, DetailEnvironment, DetailReducer, DetailState, SelectorAction,
    TicketType,
};
use nikofree_core::navigation::Page;
use nikofree_runtime::Store;
use nikofree_testing::{init_test_tracing, RecordingBrowser, RecordingNavigator, ScriptedClipboard};
use std::sync::Arc;
use std::time::Duration;

const URL: &str = "http://localhost:5173/events/nairobi-tech-summit-2025";

type DetailStore = Store<DetailState, DetailAction, DetailEnvironment, DetailReducer>;

struct Harness {
    store: DetailStore,
    navigator: RecordingNavigator,
    browser: RecordingBrowser,
    clipboard: ScriptedClipboard,
}

fn harness(ticket_type: TicketType) -> Harness {
    init_test_tracing();
    let navigator = RecordingNavigator::new();
    let browser = RecordingBrowser::new();
    let clipboard = ScriptedClipboard::working();
    let env = DetailEnvironment::new(
        Arc::new(navigator.clone()),
        Arc::new(browser.clone()),
        Arc::new(clipboard.clone()),
        Arc::new(ScriptedClipboard::broken()),
    );
    let state = DetailState::new(fixtures::nairobi_tech_summit_with(ticket_type), URL);
    Harness {
        store: Store::new(state, DetailReducer::new(), env),
        navigator,
        browser,
        clipboard,
    }
}

async fn send(store: &DetailStore, action: DetailAction) {
    let mut handle = store.send(action).await.unwrap();
    handle.wait().await;
}

#[tokio::test(start_paused = true)]
async fn copy_label_reverts_after_feedback() {
    let h = harness(TicketType::Uniform);

    send(&h.store, DetailAction::CopyLink).await;
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Copied);
    assert_eq!(h.clipboard.writes(), vec![URL.to_string()]);

    tokio::time::sleep(Duration::from_millis(1900)).await;
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Copied);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Idle);
}

#[tokio::test(start_paused = true)]
async fn copying_twice_keeps_label_until_last_copy_expires() {
    let h = harness(TicketType::Uniform);
    let mut feedback = h.store.subscribe_actions();

    send(&h.store, DetailAction::CopyLink).await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    send(&h.store, DetailAction::CopyLink).await;

    // The first copy's expiry fires at 2s and must not revert the label.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Copied);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Idle);
    assert_eq!(h.store.state(|s| s.copy_generation).await, 2);

    let mut seen = Vec::new();
    while let Ok(action) = feedback.try_recv() {
        seen.push(action);
    }
    assert_eq!(
        seen,
        vec![
            DetailAction::LinkCopied,
            DetailAction::LinkCopied,
            DetailAction::CopyLabelExpired { generation: 1 },
            DetailAction::CopyLabelExpired { generation: 2 },
        ]
    );
}

#[tokio::test]
async fn failed_copy_leaves_label_alone() {
    let navigator = RecordingNavigator::new();
    let env = DetailEnvironment::new(
        Arc::new(navigator),
        Arc::new(RecordingBrowser::new()),
        Arc::new(ScriptedClipboard::broken()),
        Arc::new(ScriptedClipboard::broken()),
    );
    let store = Store::new(
        DetailState::new(fixtures::nairobi_tech_summit(), URL),
        DetailReducer::new(),
        env,
    );

    send(&store, DetailAction::CopyLink).await;
    assert_eq!(store.state(|s| s.copy_label).await, CopyLabel::Idle);
    assert_eq!(store.state(|s| s.copy_generation).await, 0);
}

#[tokio::test]
async fn share_buttons_open_intents() {
    let h = harness(TicketType::Class);

    send(&h.store, DetailAction::ShareOnWhatsApp).await;
    send(&h.store, DetailAction::ShareOnLinkedIn).await;
    send(&h.store, DetailAction::OpenInMaps).await;

    let opened = h.browser.opened();
    assert_eq!(opened.len(), 3);
    assert!(opened[0].starts_with("https://wa.me/?text=Check%20out%20this%20event%3A%20Nairobi"));
    assert!(opened[0].ends_with("%0Ahttp%3A%2F%2Flocalhost%3A5173%2Fevents%2Fnairobi-tech-summit-2025"));
    assert_eq!(
        opened[1],
        "https://www.linkedin.com/sharing/share-offsite/?url=http%3A%2F%2Flocalhost%3A5173%2Fevents%2Fnairobi-tech-summit-2025"
    );
    assert_eq!(
        opened[2],
        "https://www.google.com/maps/search/?api=1&query=Kenyatta+International+Convention+Centre+Nairobi"
    );
}

#[tokio::test]
async fn back_to_events_navigates_to_landing() {
    let h = harness(TicketType::Timeslot);
    send(&h.store, DetailAction::BackToEvents).await;
    assert_eq!(h.navigator.pages(), vec![Page::Landing]);
}

#[tokio::test]
async fn buying_a_slot_hits_the_login_gate() {
    let h = harness(TicketType::Timeslot);

    send(&h.store, DetailAction::Tickets(SelectorAction::SelectTimeSlot("slot6".into()))).await;
    send(&h.store, DetailAction::Tickets(SelectorAction::BuyTicket)).await;
    assert!(h.store.state(|s| s.login_modal_open).await);

    send(&h.store, DetailAction::CloseLoginModal).await;
    let state = h.store.state(Clone::clone).await;
    assert!(!state.login_modal_open);
    assert_eq!(state.tickets.selected_time_slot, Some("slot6".into()));
}

#[tokio::test(start_paused = true)]
async fn shutdown_waits_for_pending_expiry() {
    let h = harness(TicketType::Uniform);
    send(&h.store, DetailAction::CopyLink).await;

    h.store.shutdown(Duration::from_secs(5)).await.unwrap();
    assert_eq!(h.store.pending_effects(), 0);
    assert_eq!(h.store.state(|s| s.copy_label).await, CopyLabel::Copied);
}
