//! Ticket selector: the menu beside the event details.
//!
//! A child reducer embedded in the detail page. It tracks which tier or time
//! slot is highlighted and emits [`SelectorAction::BuyTicket`], which it does
//! not handle itself: the parent decides what buying means.

use crate::catalog::{Kes, TicketCatalog, TicketTierId, TicketType};
use nikofree_core::{effect::Effect, reducer::Reducer, SmallVec};
use serde::{Deserialize, Serialize};

/// Selection state of the ticket menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorState {
    /// Tiers on sale
    pub catalog: TicketCatalog,
    /// Highlighted tier (uniform, class, loyalty, season)
    pub selected_ticket: Option<TicketTierId>,
    /// Highlighted slot (timeslot)
    pub selected_time_slot: Option<TicketTierId>,
    /// Whether the visitor already holds a place
    pub is_rsvped: bool,
}

impl SelectorState {
    /// Nothing selected, not RSVPed
    #[must_use]
    pub const fn new(catalog: TicketCatalog) -> Self {
        Self {
            catalog,
            selected_ticket: None,
            selected_time_slot: None,
            is_rsvped: false,
        }
    }

    /// Mark the visitor as already attending
    #[must_use]
    pub const fn rsvped(mut self) -> Self {
        self.is_rsvped = true;
        self
    }

    /// The selection relevant to this catalog's shape
    #[must_use]
    pub const fn selection(&self) -> Option<&TicketTierId> {
        if self.catalog.uses_time_slots() {
            self.selected_time_slot.as_ref()
        } else {
            self.selected_ticket.as_ref()
        }
    }

    /// Whether the buy button is live
    ///
    /// A uniform catalog has nothing to choose, so it can always be bought.
    #[must_use]
    pub fn can_buy(&self) -> bool {
        if self.is_rsvped {
            return false;
        }
        match self.catalog {
            TicketCatalog::Uniform(_) => true,
            _ => self.selection().is_some(),
        }
    }
}

/// Inputs of the ticket menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorAction {
    /// A tier card was clicked
    SelectTicket(TicketTierId),
    /// A time slot was clicked
    SelectTimeSlot(TicketTierId),
    /// The buy button was pressed; handled by the parent
    BuyTicket,
}

/// Reducer for the ticket menu
#[derive(Clone, Debug, Default)]
pub struct SelectorReducer;

impl SelectorReducer {
    /// Creates the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for SelectorReducer {
    type State = SelectorState;
    type Action = SelectorAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SelectorAction::SelectTicket(id) => {
                if state.catalog.uses_time_slots() || !state.catalog.contains(&id) {
                    tracing::warn!(%id, ticket_type = %state.catalog.ticket_type(), "Unknown ticket tier, ignoring");
                } else {
                    state.selected_ticket = Some(id);
                }
            },
            SelectorAction::SelectTimeSlot(id) => {
                if state.catalog.uses_time_slots() && state.catalog.contains(&id) {
                    state.selected_time_slot = Some(id);
                } else {
                    tracing::warn!(%id, ticket_type = %state.catalog.ticket_type(), "Unknown time slot, ignoring");
                }
            },
            SelectorAction::BuyTicket => {
                tracing::trace!("BuyTicket left to the parent");
            },
        }
        SmallVec::new()
    }
}

// ============================================================================
// View
// ============================================================================

/// Shape-specific fields of a menu row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TierDetails {
    /// Nothing beyond name and price
    Uniform,
    /// Class perks
    Class {
        /// Perks
        features: Vec<String>,
    },
    /// Early-purchase badges and perks
    Loyalty {
        /// Discount badge
        discount: String,
        /// Deadline badge
        deadline: String,
        /// Perks
        features: Vec<String>,
    },
    /// Pass dates and badges
    Season {
        /// Covered date(s)
        date: String,
        /// Savings badge
        discount: Option<String>,
        /// Most-popular ribbon
        popular: bool,
    },
    /// Time label only
    Timeslot,
}

/// One row of the ticket menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TicketRow {
    /// Tier id to send back on click
    pub id: TicketTierId,
    /// Display name (time label for slots)
    pub name: String,
    /// Price
    pub price: Kes,
    /// Tickets left
    pub available: u32,
    /// Whether the row is highlighted
    pub selected: bool,
    /// Shape-specific fields
    pub details: TierDetails,
}

/// The buy button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuyButton {
    /// Button text
    pub label: &'static str,
    /// Whether it can be pressed
    pub enabled: bool,
}

/// The ticket menu as rendered
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TicketMenu {
    /// Active discriminator
    pub ticket_type: TicketType,
    /// Menu heading
    pub heading: &'static str,
    /// Rows in catalog order
    pub rows: Vec<TicketRow>,
    /// Price of the current selection (the only tier, for uniform catalogs)
    pub total: Option<Kes>,
    /// Buy button
    pub buy: BuyButton,
}

/// Menu heading for a discriminator
#[must_use]
pub const fn heading(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::Uniform => "Get Your Ticket",
        TicketType::Class => "Select Ticket Class",
        TicketType::Loyalty => "Choose Your Ticket",
        TicketType::Season => "Select Your Pass",
        TicketType::Timeslot => "Select Time Slot",
    }
}

impl TicketMenu {
    /// Build the menu for `state`
    #[must_use]
    pub fn from_state(state: &SelectorState) -> Self {
        let selection = state.selection();
        let row = |id: &TicketTierId, name: &str, price: Kes, available: u32, details| TicketRow {
            id: id.clone(),
            name: name.to_string(),
            price,
            available,
            selected: selection == Some(id),
            details,
        };

        let rows: Vec<TicketRow> = match &state.catalog {
            TicketCatalog::Uniform(tiers) => tiers
                .iter()
                .map(|t| row(&t.id, &t.name, t.price, t.available, TierDetails::Uniform))
                .collect(),
            TicketCatalog::Class(tiers) => tiers
                .iter()
                .map(|t| {
                    row(&t.id, &t.name, t.price, t.available, TierDetails::Class {
                        features: t.features.clone(),
                    })
                })
                .collect(),
            TicketCatalog::Loyalty(tiers) => tiers
                .iter()
                .map(|t| {
                    row(&t.id, &t.name, t.price, t.available, TierDetails::Loyalty {
                        discount: t.discount.clone(),
                        deadline: t.deadline.clone(),
                        features: t.features.clone(),
                    })
                })
                .collect(),
            TicketCatalog::Season(tiers) => tiers
                .iter()
                .map(|t| {
                    row(&t.id, &t.name, t.price, t.available, TierDetails::Season {
                        date: t.date.clone(),
                        discount: t.discount.clone(),
                        popular: t.popular,
                    })
                })
                .collect(),
            TicketCatalog::Timeslot(tiers) => tiers
                .iter()
                .map(|t| row(&t.id, &t.name, t.price, t.available, TierDetails::Timeslot))
                .collect(),
        };

        let total = match &state.catalog {
            TicketCatalog::Uniform(_) => rows.first().map(|r| r.price),
            _ => rows.iter().find(|r| r.selected).map(|r| r.price),
        };

        let label = if state.is_rsvped {
            "You're Attending"
        } else if state.can_buy() {
            "Buy Ticket"
        } else {
            "Select a Ticket"
        };

        Self {
            ticket_type: state.catalog.ticket_type(),
            heading: heading(state.catalog.ticket_type()),
            rows,
            total,
            buy: BuyButton {
                label,
                enabled: state.can_buy(),
            },
        }
    }
}
