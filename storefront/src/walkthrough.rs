//! Scripted sessions that drive each page through its `Store`.
//!
//! Each function replays a typical visitor session and returns the rendered
//! page after every interesting step.

use crate::render;
use event_detail::{DetailAction, DetailEnvironment, DetailReducer, DetailState, DetailView};
use event_detail::{EventRecord, SelectorAction, TicketCatalog};
use nikofree_runtime::{error::StoreError, Store};
use partner_onboarding::{City, WizardAction, WizardEnvironment, WizardReducer, WizardState};
use partner_onboarding::{SelectedFile, WizardView};
use std::time::Duration;

/// How long to wait for effects when a page is closed
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

async fn send_and_settle<S, A, E, R>(store: &Store<S, A, E, R>, action: A) -> Result<(), StoreError>
where
    R: nikofree_core::reducer::Reducer<State = S, Action = A, Environment = E>
        + Clone
        + Send
        + Sync
        + 'static,
    A: Send + Clone + std::fmt::Debug + 'static,
    S: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    let mut handle = store.send(action).await?;
    handle.wait().await;
    Ok(())
}

/// Walk a new partner through the onboarding wizard
///
/// # Errors
///
/// Returns [`StoreError`] if the store stops accepting actions.
pub async fn onboarding(env: WizardEnvironment) -> Result<Vec<String>, StoreError> {
    let store = Store::new(WizardState::new(), WizardReducer::new(), env);
    let mut frames = vec![store.state(|s| render::wizard(&WizardView::from_state(s))).await];

    let steps: [Vec<WizardAction>; 4] = [
        vec![
            WizardAction::SetBusinessName("Acme".to_string()),
            WizardAction::AttachLogo(Some(
                SelectedFile::new("acme-logo.png", 48_213).with_content_type("image/png"),
            )),
            WizardAction::SelectLocation(Some(City::Nairobi)),
            WizardAction::Next,
        ],
        vec![
            WizardAction::ToggleCategory("travel".into()),
            WizardAction::SetInterests("Weekend hiking trips".to_string()),
            WizardAction::Next,
        ],
        vec![
            WizardAction::SetEmail("a@b.com".to_string()),
            WizardAction::SetPhone("0700000000".to_string()),
            WizardAction::Next,
        ],
        vec![
            WizardAction::SetSignature("Acme Owner".to_string()),
            WizardAction::SetAcceptTerms(true),
            WizardAction::Submit,
        ],
    ];

    for actions in steps {
        for action in actions {
            send_and_settle(&store, action).await?;
        }
        frames.push(store.state(|s| render::wizard(&WizardView::from_state(s))).await);
    }

    send_and_settle(&store, WizardAction::ReturnHome).await?;
    store.shutdown(SHUTDOWN_TIMEOUT).await?;
    Ok(frames)
}

fn first_tier(event: &EventRecord) -> Option<SelectorAction> {
    let id = event.tickets.summaries().first()?.id.clone();
    match event.tickets {
        TicketCatalog::Uniform(_) => None,
        TicketCatalog::Timeslot(_) => Some(SelectorAction::SelectTimeSlot(id)),
        _ => Some(SelectorAction::SelectTicket(id)),
    }
}

/// Browse the event page: pick a ticket, hit the login gate, share and copy
///
/// # Errors
///
/// Returns [`StoreError`] if the store stops accepting actions.
pub async fn event_detail(
    event: EventRecord,
    page_url: String,
    env: DetailEnvironment,
) -> Result<Vec<String>, StoreError> {
    let copy_feedback = env.copy_feedback;
    let selection = first_tier(&event);
    let store = Store::new(DetailState::new(event, page_url), DetailReducer::new(), env);
    let frame = |s: &DetailState| render::detail(&DetailView::from_state(s));

    let mut frames = vec![store.state(frame).await];

    if let Some(select) = selection {
        send_and_settle(&store, DetailAction::Tickets(select)).await?;
    }
    send_and_settle(&store, DetailAction::Tickets(SelectorAction::BuyTicket)).await?;
    frames.push(store.state(frame).await);
    send_and_settle(&store, DetailAction::CloseLoginModal).await?;

    for action in [
        DetailAction::ShareOnWhatsApp,
        DetailAction::ShareOnLinkedIn,
        DetailAction::OpenInMaps,
        DetailAction::CopyLink,
    ] {
        send_and_settle(&store, action).await?;
    }
    frames.push(store.state(frame).await);

    tokio::time::sleep(copy_feedback + Duration::from_millis(50)).await;
    frames.push(store.state(frame).await);

    send_and_settle(&store, DetailAction::BackToEvents).await?;
    store.shutdown(SHUTDOWN_TIMEOUT).await?;
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_detail::{fixtures, TicketType};
    use nikofree_core::navigation::Page;
    use nikofree_testing::{
        test_clock, RecordingBrowser, RecordingNavigator, ScriptedClipboard,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn onboarding_ends_on_confirmation() {
        let navigator = RecordingNavigator::new();
        let env = WizardEnvironment::new(Arc::new(test_clock()), Arc::new(navigator.clone()));

        let frames = onboarding(env).await.unwrap();

        assert_eq!(frames.len(), 5);
        assert!(frames[1].contains("== Categories & Interests =="));
        assert!(frames[4].contains("Application Submitted!"));
        assert!(frames[4].contains("an email at a@b.com with the approval status"));
        assert_eq!(navigator.pages(), vec![Page::Landing]);
    }

    #[tokio::test(start_paused = true)]
    async fn event_detail_session_shares_and_copies() {
        let navigator = RecordingNavigator::new();
        let browser = RecordingBrowser::new();
        let clipboard = ScriptedClipboard::working();
        let env = DetailEnvironment::new(
            Arc::new(navigator.clone()),
            Arc::new(browser.clone()),
            Arc::new(clipboard.clone()),
            Arc::new(ScriptedClipboard::broken()),
        );

        let frames = event_detail(
            fixtures::nairobi_tech_summit_with(TicketType::Loyalty),
            "http://localhost:5173/events/x".to_string(),
            env,
        )
        .await
        .unwrap();

        assert!(frames[1].contains("Log in to continue"));
        assert!(frames[2].contains("[Link Copied!]"));
        assert!(frames[3].contains("[Copy Link]"));
        assert_eq!(browser.opened().len(), 3);
        assert_eq!(clipboard.writes(), vec!["http://localhost:5173/events/x".to_string()]);
        assert_eq!(navigator.pages(), vec![Page::Landing]);
    }
}
