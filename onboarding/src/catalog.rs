//! Static choices offered by the wizard: cities, event categories and the
//! partner agreement text.

use crate::types::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Cities a partner can operate from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum City {
    /// Nairobi
    Nairobi,
    /// Mombasa
    Mombasa,
    /// Kisumu
    Kisumu,
    /// Nakuru
    Nakuru,
    /// Eldoret
    Eldoret,
    /// Thika
    Thika,
    /// Malindi
    Malindi,
    /// Meru
    Meru,
}

impl City {
    /// All cities in the order they are offered
    pub const ALL: [Self; 8] = [
        Self::Nairobi,
        Self::Mombasa,
        Self::Kisumu,
        Self::Nakuru,
        Self::Eldoret,
        Self::Thika,
        Self::Malindi,
        Self::Meru,
    ];

    /// Display name, also the option value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nairobi => "Nairobi",
            Self::Mombasa => "Mombasa",
            Self::Kisumu => "Kisumu",
            Self::Nakuru => "Nakuru",
            Self::Eldoret => "Eldoret",
            Self::Thika => "Thika",
            Self::Malindi => "Malindi",
            Self::Meru => "Meru",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an option value names no known city
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown city: {0:?}")]
pub struct ParseCityError(pub String);

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| ParseCityError(s.to_string()))
    }
}

/// Parse a location `<select>` value; the empty placeholder means "not chosen"
///
/// # Errors
///
/// Returns [`ParseCityError`] for a non-empty value that is not a known city.
pub fn parse_location(value: &str) -> Result<Option<City>, ParseCityError> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// An event category a partner can organise
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier stored in the form
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Emoji shown on the tile
    pub icon: &'static str,
}

impl Category {
    /// The identifier as stored in the form
    #[must_use]
    pub fn category_id(&self) -> CategoryId {
        CategoryId::from(self.id)
    }
}

/// Categories offered in step 2, in display order
pub const CATEGORIES: [Category; 12] = [
    Category { id: "travel", name: "Travel", icon: "✈️" },
    Category { id: "sports", name: "Sports & Fitness", icon: "🏋️" },
    Category { id: "social", name: "Social Activities", icon: "👥" },
    Category { id: "music", name: "Music & Culture", icon: "🎵" },
    Category { id: "health", name: "Health & Wellbeing", icon: "❤️" },
    Category { id: "pets", name: "Pets & Animals", icon: "🐕" },
    Category { id: "autofest", name: "Autofest", icon: "🚗" },
    Category { id: "hobbies", name: "Hobbies & Interests", icon: "✨" },
    Category { id: "gaming", name: "Gaming", icon: "🎮" },
    Category { id: "shopping", name: "Shopping", icon: "🛍️" },
    Category { id: "religious", name: "Religious", icon: "⛪" },
    Category { id: "dance", name: "Dance", icon: "🎯" },
];

/// Look up a category by id
#[must_use]
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Clauses a partner agrees to by signing
pub const PARTNER_TERMS: [&str; 9] = [
    "Pay a 7% commission on all ticket sales processed through Niko Free",
    "Ensure all events comply with local laws and regulations",
    "Maintain high quality standards and attendee satisfaction",
    "Provide accurate event information and timely updates",
    "Respond to attendee inquiries within 24 hours",
    "Accept that Niko Free reserves the right to remove events that violate guidelines",
    "Understand that payment processing takes 2-3 business days",
    "Maintain ownership of your event content and data",
    "Comply with our data protection and privacy policies",
];

/// Cancellation and refund clauses
pub const REFUND_POLICY: [&str; 2] = [
    "Refunds must be processed according to your stated event policy",
    "Partners are responsible for communicating cancellations to attendees",
];

/// Text next to the terms checkbox
pub const ACCEPT_TERMS_TEXT: &str = "I have read and agree to the Partner Terms & Conditions and \
Privacy Policy. I understand that my digital signature above constitutes a legally binding agreement.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_names_parse_back() {
        for city in City::ALL {
            assert_eq!(city.as_str().parse::<City>(), Ok(city));
        }
        assert_eq!(
            "Atlantis".parse::<City>(),
            Err(ParseCityError("Atlantis".to_string()))
        );
    }

    #[test]
    fn placeholder_location_is_none() {
        assert_eq!(parse_location(""), Ok(None));
        assert_eq!(parse_location("Kisumu"), Ok(Some(City::Kisumu)));
        assert!(parse_location("kisumu").is_err());
    }

    #[test]
    fn category_lookup() {
        assert_eq!(CATEGORIES.len(), 12);
        assert_eq!(category("pets").map(|c| c.name), Some("Pets & Animals"));
        assert!(category("astronomy").is_none());
    }

    #[test]
    fn category_ids_are_unique() {
        let mut ids: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORIES.len());
    }
}
