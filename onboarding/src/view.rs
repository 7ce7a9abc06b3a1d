//! View models derived from [`WizardState`].
//!
//! Renderers never look at the form directly: everything a screen shows,
//! including which buttons are live, comes from [`WizardView::from_state`].

use crate::catalog::{self, City, CATEGORIES};
use crate::types::{WizardState, WizardStep};
use serde::Serialize;

/// Label of the primary button on steps 1-3
pub const NEXT_LABEL: &str = "Next";

/// Label of the primary button on step 4
pub const SUBMIT_LABEL: &str = "Submit Application";

/// What the wizard page shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum WizardView {
    /// One of the four form steps
    Editing(StepView),
    /// The thank-you screen after submission
    Confirmation(ConfirmationView),
}

impl WizardView {
    /// Build the view for `state`
    #[must_use]
    pub fn from_state(state: &WizardState) -> Self {
        if state.is_submitted() {
            return Self::Confirmation(ConfirmationView {
                email: state.form.email.clone(),
            });
        }
        Self::Editing(StepView::from_state(state))
    }
}

/// The thank-you screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    /// Where the review outcome will be sent
    pub email: String,
}

impl ConfirmationView {
    /// Heading of the screen
    pub const HEADING: &'static str = "Application Submitted!";

    /// Line under the heading
    pub const THANK_YOU: &'static str = "Thank you for your interest in becoming a partner.";

    /// Heading of the next-steps box
    pub const WHATS_NEXT: &'static str = "What's Next?";

    /// Next-steps text naming the email
    #[must_use]
    pub fn next_steps(&self) -> String {
        format!(
            "Our admin team will review your application within 24 hours. \
             You'll receive an email at {} with the approval status.",
            self.email
        )
    }
}

/// Progress marker state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MarkerState {
    /// Current or already passed
    Reached,
    /// Not reached yet
    Upcoming,
}

/// One marker in the progress bar
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProgressMarker {
    /// Step this marker stands for
    pub step: WizardStep,
    /// Whether it is lit
    pub state: MarkerState,
    /// Whether the connector to the next marker is filled
    pub connector_filled: bool,
}

/// The primary (Next / Submit) button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PrimaryButton {
    /// Button text
    pub label: &'static str,
    /// Whether it can be pressed
    pub enabled: bool,
}

/// A category tile in step 2
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    /// Identifier sent with `ToggleCategory`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Emoji
    pub icon: &'static str,
    /// Whether the tile is highlighted
    pub selected: bool,
}

/// Step-specific content
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum StepBody {
    /// Step 1
    BasicInfo {
        /// Current business name
        business_name: String,
        /// Name of the attached logo, if any
        logo_name: Option<String>,
        /// Chosen city
        location: Option<City>,
        /// Options of the location select
        cities: Vec<City>,
    },
    /// Step 2
    Categories {
        /// All tiles with their highlight
        options: Vec<CategoryOption>,
        /// Names of the chosen categories, ordered by id; unknown ids are skipped
        chosen: Vec<&'static str>,
        /// Current interests text
        interests: String,
    },
    /// Step 3
    Contact {
        /// Current email
        email: String,
        /// Current phone
        phone: String,
    },
    /// Step 4
    Agreement {
        /// Agreement clauses
        terms: Vec<&'static str>,
        /// Refund clauses
        refund_policy: Vec<&'static str>,
        /// Current signature
        signature: String,
        /// Checkbox state
        accept_terms: bool,
        /// Checkbox caption
        accept_terms_text: &'static str,
    },
}

/// Everything shown while the form is being filled in
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepView {
    /// Current step
    pub step: WizardStep,
    /// Card heading
    pub title: &'static str,
    /// Card subheading
    pub subtitle: &'static str,
    /// One marker per step
    pub progress: Vec<ProgressMarker>,
    /// Whether Back is shown
    pub show_back: bool,
    /// Next or Submit
    pub primary: PrimaryButton,
    /// Step content
    pub body: StepBody,
}

impl StepView {
    /// Build the step view for `state`
    #[must_use]
    pub fn from_state(state: &WizardState) -> Self {
        let step = state.step;
        let progress = WizardStep::ALL
            .into_iter()
            .map(|marker| ProgressMarker {
                step: marker,
                state: if marker <= step {
                    MarkerState::Reached
                } else {
                    MarkerState::Upcoming
                },
                connector_filled: marker < step,
            })
            .collect();

        let primary = if step.is_final() {
            PrimaryButton {
                label: SUBMIT_LABEL,
                enabled: state.can_submit(),
            }
        } else {
            PrimaryButton {
                label: NEXT_LABEL,
                enabled: state.can_advance(),
            }
        };

        Self {
            step,
            title: step.title(),
            subtitle: step.subtitle(),
            progress,
            show_back: state.can_go_back(),
            primary,
            body: body(state),
        }
    }
}

fn body(state: &WizardState) -> StepBody {
    let form = &state.form;
    match state.step {
        WizardStep::BasicInfo => StepBody::BasicInfo {
            business_name: form.business_name.clone(),
            logo_name: form.logo.as_ref().map(|file| file.name.clone()),
            location: form.location,
            cities: City::ALL.to_vec(),
        },
        WizardStep::Categories => StepBody::Categories {
            options: CATEGORIES
                .iter()
                .map(|category| CategoryOption {
                    id: category.id,
                    name: category.name,
                    icon: category.icon,
                    selected: form.categories.contains(&category.category_id()),
                })
                .collect(),
            chosen: form
                .categories
                .iter()
                .filter_map(|id| catalog::category(id.as_str()))
                .map(|category| category.name)
                .collect(),
            interests: form.interests.clone(),
        },
        WizardStep::Contact => StepBody::Contact {
            email: form.email.clone(),
            phone: form.phone.clone(),
        },
        WizardStep::SignAndSubmit => StepBody::Agreement {
            terms: catalog::PARTNER_TERMS.to_vec(),
            refund_policy: catalog::REFUND_POLICY.to_vec(),
            signature: form.signature.clone(),
            accept_terms: form.accept_terms,
            accept_terms_text: catalog::ACCEPT_TERMS_TEXT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryId, Submission};
    use chrono::{DateTime, Utc};

    #[test]
    fn first_step_has_no_back_and_disabled_next() {
        let WizardView::Editing(view) = WizardView::from_state(&WizardState::new()) else {
            panic!("expected editing view");
        };
        assert_eq!(view.step, WizardStep::BasicInfo);
        assert!(!view.show_back);
        assert_eq!(view.primary, PrimaryButton { label: NEXT_LABEL, enabled: false });
        assert_eq!(view.progress[0].state, MarkerState::Reached);
        assert!(view.progress[1..].iter().all(|m| m.state == MarkerState::Upcoming));
        assert!(view.progress.iter().all(|m| !m.connector_filled));
    }

    #[test]
    fn progress_fills_up_to_current_step() {
        let state = WizardState {
            step: WizardStep::Contact,
            ..WizardState::new()
        };
        let view = StepView::from_state(&state);
        let reached: Vec<_> = view.progress.iter().map(|m| m.state).collect();
        assert_eq!(
            reached,
            vec![
                MarkerState::Reached,
                MarkerState::Reached,
                MarkerState::Reached,
                MarkerState::Upcoming
            ]
        );
        let filled: Vec<_> = view.progress.iter().map(|m| m.connector_filled).collect();
        assert_eq!(filled, vec![true, true, false, false]);
        assert!(view.show_back);
    }

    #[test]
    fn category_tiles_reflect_selection() {
        let mut state = WizardState {
            step: WizardStep::Categories,
            ..WizardState::new()
        };
        state.form.toggle_category(CategoryId::from("gaming"));

        state.form.toggle_category(CategoryId::from("astronomy"));

        let StepBody::Categories { options, chosen, .. } = StepView::from_state(&state).body else {
            panic!("expected categories body");
        };
        assert_eq!(options.len(), 12);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).map(|o| o.id).collect();
        assert_eq!(selected, vec!["gaming"]);
        assert_eq!(chosen, vec!["Gaming"]);
    }

    #[test]
    fn final_step_shows_submit() {
        let mut state = WizardState {
            step: WizardStep::SignAndSubmit,
            ..WizardState::new()
        };
        state.form.signature = "Acme Owner".to_string();
        state.form.accept_terms = true;

        let view = StepView::from_state(&state);
        assert_eq!(view.primary, PrimaryButton { label: SUBMIT_LABEL, enabled: true });
        assert!(matches!(view.body, StepBody::Agreement { ref terms, .. } if terms.len() == 9));
    }

    #[test]
    fn submitted_state_shows_confirmation() {
        let mut state = WizardState::new();
        state.form.email = "a@b.com".to_string();
        state.submission = Some(Submission {
            submitted_at: DateTime::<Utc>::UNIX_EPOCH,
        });

        let WizardView::Confirmation(confirmation) = WizardView::from_state(&state) else {
            panic!("expected confirmation");
        };
        assert_eq!(confirmation.email, "a@b.com");
        assert_eq!(
            confirmation.next_steps(),
            "Our admin team will review your application within 24 hours. \
             You'll receive an email at a@b.com with the approval status."
        );
    }
}
