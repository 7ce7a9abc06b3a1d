//! The read-only event record shown on the detail page.

use crate::catalog::TicketCatalog;
use serde::{Deserialize, Serialize};

/// Who organises the event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Organiser name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Short description, e.g. `Technology Community`
    pub role: String,
}

/// An attendee review
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer name
    pub reviewer: String,
    /// Reviewer avatar URL
    pub avatar: String,
    /// Relative age label, e.g. `2 weeks ago`
    pub posted: String,
    /// Stars, 1 to 5
    pub rating: u8,
    /// Review text
    pub body: String,
}

impl Review {
    /// Star rating clamped to the 1-5 scale
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

/// A promotion advertised next to the ticket menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialOffer {
    /// Promo code
    pub code: String,
    /// What the code gives
    pub benefit: String,
    /// Restriction line
    pub terms: String,
}

impl SpecialOffer {
    /// The headline, e.g. `Use code EARLY25 for 20% off`
    #[must_use]
    pub fn headline(&self) -> String {
        format!("Use code {} for {}", self.code, self.benefit)
    }
}

/// Everything the detail page displays about one event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Event title
    pub title: String,
    /// Hero image URL
    pub image: String,
    /// Summary paragraph
    pub description: String,
    /// Long-form description, newlines preserved
    pub full_description: String,
    /// Date label
    pub date: String,
    /// Time label
    pub time: String,
    /// Venue label
    pub location: String,
    /// Query used for the "Open in Maps" link
    pub venue_query: String,
    /// Category badge
    pub category: String,
    /// Interest tags
    pub interests: Vec<String>,
    /// Attendee count
    pub attendees: u32,
    /// Avatars shown next to the attendee count
    pub attendee_avatars: Vec<String>,
    /// Organiser
    pub host: Host,
    /// Reviews shown before "Load More Reviews"
    pub reviews: Vec<Review>,
    /// Promotion, if any
    pub special_offer: Option<SpecialOffer>,
    /// Tiers on sale
    #[serde(flatten)]
    pub tickets: TicketCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn stars_are_clamped() {
        let mut review = fixtures::nairobi_tech_summit().reviews[0].clone();
        review.rating = 9;
        assert_eq!(review.stars(), 5);
        review.rating = 0;
        assert_eq!(review.stars(), 1);
    }

    #[test]
    fn record_flattens_ticket_catalog() {
        let json = serde_json::to_value(fixtures::nairobi_tech_summit()).unwrap();
        assert_eq!(json["ticketType"], "timeslot");
        assert_eq!(json["tickets"].as_array().map(Vec::len), Some(8));
        assert_eq!(json["fullDescription"].as_str().map(|s| s.is_empty()), Some(false));
    }

    #[test]
    fn offer_headline() {
        let offer = fixtures::nairobi_tech_summit().special_offer.unwrap();
        assert_eq!(offer.headline(), "Use code EARLY25 for 20% off");
    }
}
