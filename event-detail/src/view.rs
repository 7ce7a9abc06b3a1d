//! What the detail page renders.

use crate::detail::DetailState;
use crate::record::{Host, Review};
use crate::selector::TicketMenu;
use serde::Serialize;

/// The detail page as rendered
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Event title
    pub title: String,
    /// Category badge
    pub category: String,
    /// Date, time and venue lines
    pub facts: Vec<(&'static str, String)>,
    /// Attendee count line
    pub attendees: String,
    /// Summary and long description
    pub about: Vec<String>,
    /// Interest tags
    pub interests: Vec<String>,
    /// Organiser
    pub host: Host,
    /// Reviews in display order
    pub reviews: Vec<Review>,
    /// Promotion headline and terms
    pub special_offer: Option<(String, String)>,
    /// Ticket menu
    pub tickets: TicketMenu,
    /// Copy button text
    pub copy_label: &'static str,
    /// Whether the login modal covers the page
    pub login_modal_open: bool,
}

impl DetailView {
    /// Build the view for `state`
    #[must_use]
    pub fn from_state(state: &DetailState) -> Self {
        let event = &state.event;
        Self {
            title: event.title.clone(),
            category: event.category.clone(),
            facts: vec![
                ("Date", event.date.clone()),
                ("Time", event.time.clone()),
                ("Location", event.location.clone()),
            ],
            attendees: format!("{} attending", event.attendees),
            about: vec![event.description.clone(), event.full_description.clone()],
            interests: event.interests.clone(),
            host: event.host.clone(),
            reviews: event.reviews.clone(),
            special_offer: event
                .special_offer
                .as_ref()
                .map(|offer| (offer.headline(), offer.terms.clone())),
            tickets: TicketMenu::from_state(&state.tickets),
            copy_label: state.copy_label.text(),
            login_modal_open: state.login_modal_open,
        }
    }
}
