//! # Event Detail
//!
//! The event detail page as a reducer: a read-only [`EventRecord`], a ticket
//! menu embedded as a child reducer, and the share actions beside it.
//!
//! - [`catalog`]: the [`TicketCatalog`] sum type, one variant per ticket shape
//! - [`selector`]: the ticket menu reducer and its [`TicketMenu`] view
//! - [`share`]: WhatsApp, LinkedIn and maps link builders
//! - [`detail`]: the page reducer (login gate, navigation, copy-link feedback)
//!
//! Copying the page link shows "Link Copied!" for a configurable duration.
//! Each successful copy bumps a generation counter, and an expiry from an
//! older copy is ignored, so the label reverts only once the duration has
//! passed since the most recent copy.

pub mod catalog;
pub mod detail;
pub mod fixtures;
pub mod record;
pub mod selector;
pub mod share;
pub mod view;

pub use catalog::{Kes, TicketCatalog, TicketTierId, TicketType};
pub use detail::{CopyLabel, DetailAction, DetailEnvironment, DetailReducer, DetailState};
pub use record::EventRecord;
pub use selector::{SelectorAction, SelectorReducer, SelectorState, TicketMenu};
pub use share::ShareError;
pub use view::DetailView;
