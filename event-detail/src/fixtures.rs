//! The sample event shown on the detail page.
//!
//! The storefront has no event backend; the detail page renders this static
//! record. All five ticket catalogs are kept so any discriminator can be
//! previewed with [`nairobi_tech_summit_with`].

use crate::catalog::{
    ClassTier, Kes, LoyaltyTier, SeasonTier, TicketCatalog, TicketType, TimeslotTier, UniformTier,
};
use crate::record::{EventRecord, Host, Review, SpecialOffer};

const FULL_DESCRIPTION: &str = "\
The Nairobi Tech Summit 2025 brings together the brightest minds in technology for three days of innovation, learning, and networking.

What to Expect:
• Keynote speeches from global tech leaders
• Interactive workshops on emerging technologies
• Startup pitch competitions with prizes
• Networking sessions with investors and industry experts
• Exhibition hall featuring the latest tech innovations
• Panel discussions on Africa's digital future

Who Should Attend:
• Software developers and engineers
• Entrepreneurs and startup founders
• Technology students and researchers
• Investors and venture capitalists
• Anyone passionate about technology and innovation

Don't miss this opportunity to be part of Africa's tech revolution!";

/// The Nairobi Tech Summit with its default time-slot catalog
#[must_use]
pub fn nairobi_tech_summit() -> EventRecord {
    nairobi_tech_summit_with(TicketType::default())
}

/// The Nairobi Tech Summit selling tickets as `ticket_type`
#[must_use]
pub fn nairobi_tech_summit_with(ticket_type: TicketType) -> EventRecord {
    EventRecord {
        title: "Nairobi Tech Summit 2025".to_string(),
        image: "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg?auto=compress&cs=tinysrgb&w=1200".to_string(),
        description: "Join us for the biggest tech summit in East Africa! Connect with industry leaders, \
            innovative startups, and tech enthusiasts. Experience keynote speeches, panel discussions, \
            networking sessions, and hands-on workshops covering AI, blockchain, cloud computing, and more. \
            This is your opportunity to shape the future of technology in Africa."
            .to_string(),
        full_description: FULL_DESCRIPTION.to_string(),
        date: "Saturday, November 2, 2025".to_string(),
        time: "9:00 AM - 6:00 PM".to_string(),
        location: "Kenyatta International Convention Centre, Nairobi".to_string(),
        venue_query: "Kenyatta International Convention Centre Nairobi".to_string(),
        category: "Technology".to_string(),
        interests: strings(&[
            "AI & Machine Learning",
            "Blockchain",
            "Cloud Computing",
            "Startups",
            "Innovation",
        ]),
        attendees: 847,
        attendee_avatars: strings(&[
            "https://i.pravatar.cc/150?img=15",
            "https://i.pravatar.cc/150?img=22",
            "https://i.pravatar.cc/150?img=35",
        ]),
        host: Host {
            name: "Tech Hub Africa".to_string(),
            avatar: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=100".to_string(),
            role: "Technology Community".to_string(),
        },
        reviews: reviews(),
        special_offer: Some(SpecialOffer {
            code: "EARLY25".to_string(),
            benefit: "20% off".to_string(),
            terms: "Valid for the first 100 tickets only".to_string(),
        }),
        tickets: catalog(ticket_type),
    }
}

/// The sample catalog for `ticket_type`
#[must_use]
pub fn catalog(ticket_type: TicketType) -> TicketCatalog {
    match ticket_type {
        TicketType::Uniform => TicketCatalog::Uniform(vec![UniformTier {
            id: "standard".into(),
            name: "Standard Ticket".to_string(),
            price: Kes::new(2500),
            available: 300,
        }]),
        TicketType::Class => TicketCatalog::Class(vec![
            class(
                "vvip",
                "VVIP",
                5000,
                20,
                &[
                    "Front row seating",
                    "VIP lounge access",
                    "Meet & greet with speakers",
                    "Exclusive networking dinner",
                    "Event swag bag",
                ],
            ),
            class(
                "vip",
                "VIP",
                3500,
                50,
                &["Premium seating", "VIP lounge access", "Lunch included", "Event swag bag"],
            ),
            class(
                "regular",
                "Regular",
                2500,
                200,
                &["General admission", "Access to all sessions", "Coffee breaks included"],
            ),
        ]),
        TicketType::Loyalty => TicketCatalog::Loyalty(vec![
            loyalty("diehard", "Die Hard Fan", 1800, 30, "40% OFF", "15 days left", &["Exclusive fan perks", "Priority seating"]),
            loyalty("earlybird", "Early Bird", 2000, 100, "33% OFF", "30 days left", &["Early access", "Discounted rate"]),
            loyalty("advance", "Advance", 2300, 150, "15% OFF", "7 days left", &["Pre-event access"]),
            loyalty("gate", "Gate Ticket", 3000, 50, "Regular Price", "At the door", &["Walk-in admission"]),
        ]),
        TicketType::Season => TicketCatalog::Season(vec![
            day_pass("day1", "Day 1 Only", "Nov 2, 2025"),
            day_pass("day2", "Day 2 Only", "Nov 3, 2025"),
            day_pass("day3", "Day 3 Only", "Nov 4, 2025"),
            SeasonTier {
                id: "season".into(),
                name: "3-Day Season Pass".to_string(),
                price: Kes::new(4000),
                date: "Nov 2-4, 2025".to_string(),
                available: 80,
                discount: Some("Save KES 500!".to_string()),
                popular: true,
            },
        ]),
        TicketType::Timeslot => TicketCatalog::Timeslot(vec![
            slot("slot1", "9:00 AM - 10:00 AM", 10),
            slot("slot2", "10:00 AM - 11:00 AM", 10),
            slot("slot3", "11:00 AM - 12:00 PM", 8),
            slot("slot4", "2:00 PM - 3:00 PM", 10),
            slot("slot5", "3:00 PM - 4:00 PM", 10),
            slot("slot6", "4:00 PM - 5:00 PM", 5),
            slot("slot7", "5:00 PM - 6:00 PM", 10),
            slot("slot8", "6:00 PM - 7:00 PM", 10),
        ]),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn class(id: &str, name: &str, price: u32, available: u32, features: &[&str]) -> ClassTier {
    ClassTier {
        id: id.into(),
        name: name.to_string(),
        price: Kes::new(price),
        available,
        features: strings(features),
    }
}

fn loyalty(
    id: &str,
    name: &str,
    price: u32,
    available: u32,
    discount: &str,
    deadline: &str,
    features: &[&str],
) -> LoyaltyTier {
    LoyaltyTier {
        id: id.into(),
        name: name.to_string(),
        price: Kes::new(price),
        available,
        discount: discount.to_string(),
        deadline: deadline.to_string(),
        features: strings(features),
    }
}

fn day_pass(id: &str, name: &str, date: &str) -> SeasonTier {
    SeasonTier {
        id: id.into(),
        name: name.to_string(),
        price: Kes::new(1500),
        date: date.to_string(),
        available: 100,
        discount: None,
        popular: false,
    }
}

fn slot(id: &str, name: &str, available: u32) -> TimeslotTier {
    TimeslotTier {
        id: id.into(),
        name: name.to_string(),
        price: Kes::new(500),
        available,
    }
}

fn reviews() -> Vec<Review> {
    vec![
        Review {
            reviewer: "Sarah Johnson".to_string(),
            avatar: "https://i.pravatar.cc/150?img=12".to_string(),
            posted: "2 weeks ago".to_string(),
            rating: 5,
            body: "Amazing event! The speakers were incredibly insightful and the networking \
                   opportunities were fantastic. Learned so much about AI and blockchain \
                   applications in Africa."
                .to_string(),
        },
        Review {
            reviewer: "Michael Omondi".to_string(),
            avatar: "https://i.pravatar.cc/150?img=33".to_string(),
            posted: "1 month ago".to_string(),
            rating: 4,
            body: "Great summit with lots of valuable content. The venue was perfect and \
                   well-organized. Would have loved more hands-on workshop time though."
                .to_string(),
        },
        Review {
            reviewer: "Amina Hassan".to_string(),
            avatar: "https://i.pravatar.cc/150?img=27".to_string(),
            posted: "3 weeks ago".to_string(),
            rating: 5,
            body: "Exceeded my expectations! Made valuable connections with investors and \
                   fellow entrepreneurs. The pitch competition was particularly inspiring. \
                   Definitely attending next year!"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_discriminator_has_a_catalog() {
        for ticket_type in TicketType::ALL {
            let event = nairobi_tech_summit_with(ticket_type);
            assert_eq!(event.tickets.ticket_type(), ticket_type);
            assert!(!event.tickets.is_empty());
        }
    }

    #[test]
    fn default_sample_uses_time_slots() {
        let event = nairobi_tech_summit();
        assert_eq!(event.tickets.ticket_type(), TicketType::Timeslot);
        assert_eq!(event.tickets.len(), 8);
        assert_eq!(event.attendees, 847);
    }

    #[test]
    fn only_the_season_pass_is_popular() {
        let TicketCatalog::Season(tiers) = catalog(TicketType::Season) else {
            panic!("expected season catalog");
        };
        let popular: Vec<_> = tiers.iter().filter(|t| t.popular).map(|t| t.id.as_str()).collect();
        assert_eq!(popular, vec!["season"]);
    }
}
