//! Ticket catalogs.
//!
//! An event sells tickets in exactly one of five shapes. Each shape is a
//! variant of [`TicketCatalog`] carrying only the tier fields it needs, so an
//! event cannot hold, say, loyalty tiers and time slots at once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Kenyan shillings
// ============================================================================

/// A price in whole Kenyan shillings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kes(u32);

impl Kes {
    /// Creates a price from whole shillings
    #[must_use]
    pub const fn new(shillings: u32) -> Self {
        Self(shillings)
    }

    /// Returns the amount in shillings
    #[must_use]
    pub const fn shillings(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Kes {
    /// Formats as `KES 2,500`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "KES {grouped}")
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a ticket tier or time slot (e.g. `"vip"`, `"slot3"`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketTierId(String);

impl TicketTierId {
    /// Creates a `TicketTierId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TicketTierId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TicketTierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ticket discriminator: which catalog shape an event uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    /// One price for everyone
    Uniform,
    /// VVIP / VIP / Regular classes
    Class,
    /// Price drops for early buyers
    Loyalty,
    /// Day passes and a season pass
    Season,
    /// Hourly slots
    #[default]
    Timeslot,
}

impl TicketType {
    /// All discriminators
    pub const ALL: [Self; 5] = [
        Self::Uniform,
        Self::Class,
        Self::Loyalty,
        Self::Season,
        Self::Timeslot,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Class => "class",
            Self::Loyalty => "loyalty",
            Self::Season => "season",
            Self::Timeslot => "timeslot",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no ticket discriminator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ticket type: {0:?} (expected uniform, class, loyalty, season or timeslot)")]
pub struct ParseTicketTypeError(pub String);

impl FromStr for TicketType {
    type Err = ParseTicketTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTicketTypeError(s.to_string()))
    }
}

// ============================================================================
// Tiers
// ============================================================================

/// A single-price ticket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformTier {
    /// Tier id
    pub id: TicketTierId,
    /// Display name
    pub name: String,
    /// Price
    pub price: Kes,
    /// Tickets left
    pub available: u32,
}

/// A seating or perks class
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTier {
    /// Tier id
    pub id: TicketTierId,
    /// Display name
    pub name: String,
    /// Price
    pub price: Kes,
    /// Tickets left
    pub available: u32,
    /// Perks listed under the class
    pub features: Vec<String>,
}

/// An early-purchase tier
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyTier {
    /// Tier id
    pub id: TicketTierId,
    /// Display name
    pub name: String,
    /// Price
    pub price: Kes,
    /// Tickets left
    pub available: u32,
    /// Discount badge (e.g. `40% OFF`)
    pub discount: String,
    /// Deadline badge (e.g. `15 days left`)
    pub deadline: String,
    /// Perks
    pub features: Vec<String>,
}

/// A day pass or multi-day pass
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTier {
    /// Tier id
    pub id: TicketTierId,
    /// Display name
    pub name: String,
    /// Price
    pub price: Kes,
    /// Covered date(s)
    pub date: String,
    /// Tickets left
    pub available: u32,
    /// Savings badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    /// Highlighted as most popular
    #[serde(default)]
    pub popular: bool,
}

/// An hourly slot; `name` is the time range label
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotTier {
    /// Slot id
    pub id: TicketTierId,
    /// Time range, e.g. `9:00 AM - 10:00 AM`
    pub name: String,
    /// Price
    pub price: Kes,
    /// Places left
    pub available: u32,
}

// ============================================================================
// Catalog
// ============================================================================

/// The tiers an event sells, keyed by its discriminator
///
/// Serialized adjacently tagged: `{"ticketType": "class", "tickets": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ticketType", content = "tickets", rename_all = "lowercase")]
pub enum TicketCatalog {
    /// Single price
    Uniform(Vec<UniformTier>),
    /// Seating classes
    Class(Vec<ClassTier>),
    /// Early-purchase tiers
    Loyalty(Vec<LoyaltyTier>),
    /// Day and season passes
    Season(Vec<SeasonTier>),
    /// Hourly slots
    Timeslot(Vec<TimeslotTier>),
}

/// Fields shared by every tier shape
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierSummary<'a> {
    /// Tier id
    pub id: &'a TicketTierId,
    /// Display name
    pub name: &'a str,
    /// Price
    pub price: Kes,
    /// Tickets left
    pub available: u32,
}

impl TicketCatalog {
    /// The discriminator of this catalog
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        match self {
            Self::Uniform(_) => TicketType::Uniform,
            Self::Class(_) => TicketType::Class,
            Self::Loyalty(_) => TicketType::Loyalty,
            Self::Season(_) => TicketType::Season,
            Self::Timeslot(_) => TicketType::Timeslot,
        }
    }

    /// Whether selection goes through time slots rather than tiers
    #[must_use]
    pub const fn uses_time_slots(&self) -> bool {
        matches!(self, Self::Timeslot(_))
    }

    /// Shared fields of every tier, in catalog order
    #[must_use]
    pub fn summaries(&self) -> Vec<TierSummary<'_>> {
        macro_rules! summarize {
            ($tiers:expr) => {
                $tiers
                    .iter()
                    .map(|t| TierSummary {
                        id: &t.id,
                        name: &t.name,
                        price: t.price,
                        available: t.available,
                    })
                    .collect()
            };
        }

        match self {
            Self::Uniform(tiers) => summarize!(tiers),
            Self::Class(tiers) => summarize!(tiers),
            Self::Loyalty(tiers) => summarize!(tiers),
            Self::Season(tiers) => summarize!(tiers),
            Self::Timeslot(tiers) => summarize!(tiers),
        }
    }

    /// Look up a tier by id
    #[must_use]
    pub fn find(&self, id: &TicketTierId) -> Option<TierSummary<'_>> {
        self.summaries().into_iter().find(|t| t.id == id)
    }

    /// Whether `id` names a tier of this catalog
    #[must_use]
    pub fn contains(&self, id: &TicketTierId) -> bool {
        self.find(id).is_some()
    }

    /// Number of tiers
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Uniform(tiers) => tiers.len(),
            Self::Class(tiers) => tiers.len(),
            Self::Loyalty(tiers) => tiers.len(),
            Self::Season(tiers) => tiers.len(),
            Self::Timeslot(tiers) => tiers.len(),
        }
    }

    /// Whether the catalog has no tiers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
