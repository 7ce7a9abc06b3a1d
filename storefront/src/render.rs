//! Plain-text rendering of the page views.

use event_detail::selector::{TicketMenu, TierDetails};
use event_detail::DetailView;
use partner_onboarding::view::{ConfirmationView, MarkerState, StepBody, StepView};
use partner_onboarding::WizardView;
use std::fmt::Write as _;

/// Render the onboarding wizard
#[must_use]
pub fn wizard(view: &WizardView) -> String {
    match view {
        WizardView::Editing(step) => step_view(step),
        WizardView::Confirmation(confirmation) => format!(
            "== {} ==\n{}\n-- {} --\n{}\n[Back to Home]\n",
            ConfirmationView::HEADING,
            ConfirmationView::THANK_YOU,
            ConfirmationView::WHATS_NEXT,
            confirmation.next_steps()
        ),
    }
}

fn step_view(view: &StepView) -> String {
    let mut out = String::new();

    let progress: Vec<String> = view
        .progress
        .iter()
        .map(|marker| {
            let dot = match marker.state {
                MarkerState::Reached => format!("({})", marker.step.number()),
                MarkerState::Upcoming => format!(" {} ", marker.step.number()),
            };
            let connector = if marker.step.is_final() {
                ""
            } else if marker.connector_filled {
                "==="
            } else {
                "---"
            };
            format!("{dot}{connector}")
        })
        .collect();
    let _ = writeln!(out, "{}", progress.concat());
    let _ = writeln!(out, "== {} ==\n{}", view.title, view.subtitle);

    match &view.body {
        StepBody::BasicInfo {
            business_name,
            logo_name,
            location,
            ..
        } => {
            let _ = writeln!(out, "Business name: {business_name}");
            let _ = writeln!(out, "Logo: {}", logo_name.as_deref().unwrap_or("(none)"));
            let _ = writeln!(
                out,
                "Location: {}",
                location.map_or("Select your location", |c| c.as_str())
            );
        },
        StepBody::Categories {
            options,
            chosen,
            interests,
        } => {
            for option in options {
                let mark = if option.selected { "x" } else { " " };
                let _ = writeln!(out, "[{mark}] {} {}", option.icon, option.name);
            }
            if !chosen.is_empty() {
                let _ = writeln!(out, "Selected: {}", chosen.join(", "));
            }
            let _ = writeln!(out, "Interests: {interests}");
        },
        StepBody::Contact { email, phone } => {
            let _ = writeln!(out, "Email: {email}\nPhone: {phone}");
        },
        StepBody::Agreement {
            terms,
            refund_policy,
            signature,
            accept_terms,
            accept_terms_text,
        } => {
            for term in terms {
                let _ = writeln!(out, "  - {term}");
            }
            let _ = writeln!(out, "Cancellation & refunds:");
            for clause in refund_policy {
                let _ = writeln!(out, "  - {clause}");
            }
            let _ = writeln!(out, "Signature: {signature}");
            let mark = if *accept_terms { "x" } else { " " };
            let _ = writeln!(out, "[{mark}] {accept_terms_text}");
        },
    }

    let back = if view.show_back { "[Back] " } else { "" };
    let primary = if view.primary.enabled {
        format!("[{}]", view.primary.label)
    } else {
        format!("({} disabled)", view.primary.label)
    };
    let _ = writeln!(out, "{back}{primary}");
    out
}

/// Render the event detail page
#[must_use]
pub fn detail(view: &DetailView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} == [{}]", view.title, view.category);
    for (label, value) in &view.facts {
        let _ = writeln!(out, "{label}: {value}");
    }
    let _ = writeln!(out, "Attendees: {}", view.attendees);
    let _ = writeln!(out, "Hosted by {} ({})", view.host.name, view.host.role);
    let _ = writeln!(out, "Tags: {}", view.interests.join(", "));

    for review in &view.reviews {
        let stars = "*".repeat(usize::from(review.stars()));
        let _ = writeln!(out, "  {stars:<5} {} ({})", review.reviewer, review.posted);
    }

    out.push_str(&ticket_menu(&view.tickets));

    if let Some((headline, terms)) = &view.special_offer {
        let _ = writeln!(out, "Special Offer: {headline} ({terms})");
    }
    let _ = writeln!(
        out,
        "[Share on WhatsApp] [Share on LinkedIn] [{}]",
        view.copy_label
    );
    if view.login_modal_open {
        let _ = writeln!(out, ">> Log in to continue <<");
    }
    out
}

fn ticket_menu(menu: &TicketMenu) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-- {} --", menu.heading);
    for row in &menu.rows {
        let mark = if row.selected { ">" } else { " " };
        let extra = match &row.details {
            TierDetails::Uniform | TierDetails::Timeslot => String::new(),
            TierDetails::Class { features } => format!(" [{}]", features.join(", ")),
            TierDetails::Loyalty {
                discount, deadline, ..
            } => format!(" [{discount}, {deadline}]"),
            TierDetails::Season {
                date,
                discount,
                popular,
            } => {
                let mut badges = vec![date.clone()];
                badges.extend(discount.clone());
                if *popular {
                    badges.push("Most Popular".to_string());
                }
                format!(" [{}]", badges.join(", "))
            },
        };
        let _ = writeln!(
            out,
            "{mark} {:<22} {:>10} ({} left){extra}",
            row.name, row.price.to_string(), row.available
        );
    }
    if let Some(total) = menu.total {
        let _ = writeln!(out, "Total: {total}");
    }
    let buy = if menu.buy.enabled {
        format!("[{}]", menu.buy.label)
    } else {
        format!("({} disabled)", menu.buy.label)
    };
    let _ = writeln!(out, "{buy}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_detail::{fixtures, DetailState, TicketType};
    use chrono::{DateTime, Utc};
    use partner_onboarding::{City, Submission, WizardState, WizardStep};

    #[test]
    fn first_step_renders_disabled_next() {
        let text = wizard(&WizardView::from_state(&WizardState::new()));
        assert!(text.starts_with("(1)--- 2 --- 3 --- 4 \n"));
        assert!(text.contains("== Basic Information =="));
        assert!(text.contains("Location: Select your location"));
        assert!(text.ends_with("(Next disabled)\n"));
    }

    #[test]
    fn completed_step_renders_live_buttons() {
        let mut state = WizardState::new();
        state.step = WizardStep::Categories;
        state.form.business_name = "Acme".to_string();
        state.form.location = Some(City::Nairobi);
        state.form.toggle_category("travel".into());

        let text = wizard(&WizardView::from_state(&state));
        assert!(text.contains("[x] ✈️ Travel"));
        assert!(text.contains("[ ] 🎮 Gaming"));
        assert!(text.contains("Selected: Travel\n"));
        assert!(text.ends_with("[Back] [Next]\n"));
    }

    #[test]
    fn confirmation_renders_next_steps() {
        let mut state = WizardState::new();
        state.form.email = "a@b.com".to_string();
        state.submission = Some(Submission {
            submitted_at: DateTime::<Utc>::UNIX_EPOCH,
        });

        assert_eq!(
            wizard(&WizardView::from_state(&state)),
            "== Application Submitted! ==\n\
             Thank you for your interest in becoming a partner.\n\
             -- What's Next? --\n\
             Our admin team will review your application within 24 hours. \
             You'll receive an email at a@b.com with the approval status.\n\
             [Back to Home]\n"
        );
    }

    #[test]
    fn detail_page_shows_menu_and_copy_label() {
        let state = DetailState::new(
            fixtures::nairobi_tech_summit_with(TicketType::Season),
            "http://localhost/e",
        );
        let text = detail(&DetailView::from_state(&state));
        assert!(text.contains("== Nairobi Tech Summit 2025 == [Technology]"));
        assert!(text.contains("-- Select Your Pass --"));
        assert!(text.contains("Most Popular"));
        assert!(text.contains("[Copy Link]"));
        assert!(text.contains("(Select a Ticket disabled)"));
        assert!(!text.contains("Log in to continue"));
    }
}
