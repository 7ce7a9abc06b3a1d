//! The event detail page reducer.
//!
//! Owns UI-local state only: the ticket selection (through the embedded
//! [`SelectorReducer`]), login modal visibility and the copy-link label.
//! Everything that leaves the page (navigation, new tabs, clipboard writes)
//! is returned as an effect.

use crate::record::EventRecord;
use crate::selector::{SelectorAction, SelectorReducer, SelectorState};
use crate::share;
use nikofree_core::composition::{scope_reducer, ScopedReducer};
use nikofree_core::environment::{Browser, Clipboard, Navigator};
use nikofree_core::navigation::Page;
use nikofree_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// How long "Link Copied!" stays up by default
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// State of the copy-link button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyLabel {
    /// "Copy Link"
    #[default]
    Idle,
    /// "Link Copied!"
    Copied,
}

impl CopyLabel {
    /// Button text
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Idle => share::COPY_LINK_LABEL,
            Self::Copied => share::LINK_COPIED_LABEL,
        }
    }
}

/// State of the event detail page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailState {
    /// The event on display
    pub event: EventRecord,
    /// URL of this page, used for sharing and copying
    pub page_url: String,
    /// Ticket menu selection
    pub tickets: SelectorState,
    /// Whether the login modal is open
    pub login_modal_open: bool,
    /// Copy button label
    pub copy_label: CopyLabel,
    /// Bumped on each successful copy; expiries from older copies are stale
    pub copy_generation: u64,
}

impl DetailState {
    /// Fresh page for `event` served at `page_url`
    #[must_use]
    pub fn new(event: EventRecord, page_url: impl Into<String>) -> Self {
        let tickets = SelectorState::new(event.tickets.clone());
        Self {
            event,
            page_url: page_url.into(),
            tickets,
            login_modal_open: false,
            copy_label: CopyLabel::Idle,
            copy_generation: 0,
        }
    }
}

/// Inputs of the event detail page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailAction {
    /// Ticket menu input
    Tickets(SelectorAction),
    /// "See All" next to the attendee avatars
    SeeAllAttendees,
    /// "Load More Reviews"
    LoadMoreReviews,
    /// Login modal dismissed
    CloseLoginModal,
    /// "Back to Events"
    BackToEvents,
    /// "Share on WhatsApp"
    ShareOnWhatsApp,
    /// "Share on LinkedIn"
    ShareOnLinkedIn,
    /// "Open in Maps"
    OpenInMaps,
    /// "Copy Link"
    CopyLink,
    /// A clipboard accepted the page URL
    LinkCopied,
    /// The copied label's display time ran out
    CopyLabelExpired {
        /// Generation of the copy that scheduled this expiry
        generation: u64,
    },
}

/// Collaborators the detail page needs
#[derive(Clone)]
pub struct DetailEnvironment {
    /// Page switching
    pub navigator: Arc<dyn Navigator>,
    /// New-tab opener for share intents and maps
    pub browser: Arc<dyn Browser>,
    /// First clipboard tried
    pub clipboard: Arc<dyn Clipboard>,
    /// Clipboard tried when the first one fails
    pub fallback_clipboard: Arc<dyn Clipboard>,
    /// How long "Link Copied!" stays up
    pub copy_feedback: Duration,
}

impl DetailEnvironment {
    /// Creates an environment with the default feedback duration
    #[must_use]
    pub fn new(
        navigator: Arc<dyn Navigator>,
        browser: Arc<dyn Browser>,
        clipboard: Arc<dyn Clipboard>,
        fallback_clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            navigator,
            browser,
            clipboard,
            fallback_clipboard,
            copy_feedback: DEFAULT_COPY_FEEDBACK,
        }
    }

    /// Override how long "Link Copied!" stays up
    #[must_use]
    pub const fn with_copy_feedback(mut self, copy_feedback: Duration) -> Self {
        self.copy_feedback = copy_feedback;
        self
    }
}

impl std::fmt::Debug for DetailEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailEnvironment")
            .field("copy_feedback", &self.copy_feedback)
            .finish_non_exhaustive()
    }
}

type TicketsReducer = ScopedReducer<DetailState, DetailAction, DetailEnvironment, SelectorReducer>;

/// Reducer for the event detail page
#[derive(Clone, Debug)]
pub struct DetailReducer {
    tickets: TicketsReducer,
}

impl Default for DetailReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailReducer {
    /// Creates the reducer
    #[must_use]
    pub fn new() -> Self {
        Self {
            tickets: scope_reducer(
                SelectorReducer::new(),
                |state: &mut DetailState| &mut state.tickets,
                |action| match action {
                    DetailAction::Tickets(inner) => Some(inner),
                    _ => None,
                },
                DetailAction::Tickets,
                |_: &DetailEnvironment| &(),
            ),
        }
    }

    fn open_login_modal(state: &mut DetailState, reason: &'static str) {
        tracing::debug!(reason, "Login required");
        state.login_modal_open = true;
    }

    fn open_in_new_tab(env: &DetailEnvironment, url: String) -> Effect<DetailAction> {
        let browser = Arc::clone(&env.browser);
        Effect::future(async move {
            if let Err(error) = browser.open_in_new_tab(&url) {
                tracing::warn!(%error, "Failed to open link");
            }
            None
        })
    }

    fn copy_link(state: &DetailState, env: &DetailEnvironment) -> Effect<DetailAction> {
        let url = state.page_url.clone();
        let clipboard = Arc::clone(&env.clipboard);
        let fallback = Arc::clone(&env.fallback_clipboard);
        Effect::future(async move {
            match clipboard.write_text(&url) {
                Ok(()) => return Some(DetailAction::LinkCopied),
                Err(error) => tracing::warn!(%error, "Failed to copy link, trying fallback"),
            }
            match fallback.write_text(&url) {
                Ok(()) => Some(DetailAction::LinkCopied),
                Err(error) => {
                    tracing::error!(%error, "Fallback copy failed");
                    None
                },
            }
        })
    }
}

impl Reducer for DetailReducer {
    type State = DetailState;
    type Action = DetailAction;
    type Environment = DetailEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // Buying requires an account; show the login gate instead.
            DetailAction::Tickets(SelectorAction::BuyTicket) => {
                if state.tickets.can_buy() {
                    Self::open_login_modal(state, "buy ticket");
                } else {
                    tracing::debug!("Buy pressed without a purchasable selection");
                }
                SmallVec::new()
            },
            action @ DetailAction::Tickets(_) => self.tickets.reduce(state, action, env),

            DetailAction::SeeAllAttendees => {
                Self::open_login_modal(state, "see all attendees");
                SmallVec::new()
            },
            DetailAction::LoadMoreReviews => {
                Self::open_login_modal(state, "load more reviews");
                SmallVec::new()
            },
            DetailAction::CloseLoginModal => {
                state.login_modal_open = false;
                SmallVec::new()
            },

            DetailAction::BackToEvents => {
                let navigator = Arc::clone(&env.navigator);
                smallvec![Effect::future(async move {
                    navigator.navigate(Page::Landing);
                    None
                })]
            },

            DetailAction::ShareOnWhatsApp => {
                let url = share::whatsapp_url(&state.event.title, &state.page_url);
                smallvec![Self::open_in_new_tab(env, url)]
            },
            DetailAction::ShareOnLinkedIn => {
                let url = share::linkedin_url(&state.page_url);
                smallvec![Self::open_in_new_tab(env, url)]
            },
            DetailAction::OpenInMaps => match share::maps_url(&state.event.venue_query) {
                Ok(url) => smallvec![Self::open_in_new_tab(env, url)],
                Err(error) => {
                    tracing::warn!(%error, "Cannot build maps link");
                    SmallVec::new()
                },
            },

            DetailAction::CopyLink => smallvec![Self::copy_link(state, env)],

            DetailAction::LinkCopied => {
                state.copy_generation += 1;
                state.copy_label = CopyLabel::Copied;
                smallvec![Effect::delay(
                    env.copy_feedback,
                    DetailAction::CopyLabelExpired {
                        generation: state.copy_generation,
                    },
                )]
            },

            DetailAction::CopyLabelExpired { generation } => {
                if generation == state.copy_generation {
                    state.copy_label = CopyLabel::Idle;
                } else {
                    tracing::trace!(
                        generation,
                        current = state.copy_generation,
                        "Stale copy label expiry"
                    );
                }
                SmallVec::new()
            },
        }
    }
}
