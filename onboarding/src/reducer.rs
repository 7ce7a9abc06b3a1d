//! The onboarding wizard reducer.

use crate::handoff::{DiscardingHandoff, SubmissionHandoff};
use crate::types::{PartnerApplication, Submission, WizardAction, WizardState};
use nikofree_core::environment::{Clock, Navigator, SystemClock};
use nikofree_core::navigation::Page;
use nikofree_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use std::sync::Arc;

/// Collaborators the wizard needs
#[derive(Clone)]
pub struct WizardEnvironment {
    /// Source of `submitted_at`
    pub clock: Arc<dyn Clock>,
    /// Page switching for `ReturnHome`
    pub navigator: Arc<dyn Navigator>,
    /// Receiver of completed applications
    pub handoff: Arc<dyn SubmissionHandoff>,
}

impl WizardEnvironment {
    /// Creates an environment whose submissions are discarded
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            clock,
            navigator,
            handoff: Arc::new(DiscardingHandoff),
        }
    }

    /// Route submissions to `handoff`
    #[must_use]
    pub fn with_handoff(mut self, handoff: Arc<dyn SubmissionHandoff>) -> Self {
        self.handoff = handoff;
        self
    }

    /// Wall clock with the given navigator
    #[must_use]
    pub fn system(navigator: Arc<dyn Navigator>) -> Self {
        Self::new(Arc::new(SystemClock), navigator)
    }
}

impl std::fmt::Debug for WizardEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the partner onboarding wizard
#[derive(Clone, Debug, Default)]
pub struct WizardReducer;

impl WizardReducer {
    /// Creates the reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn edit(state: &mut WizardState, action: WizardAction) {
        let form = &mut state.form;
        match action {
            WizardAction::SetBusinessName(name) => form.business_name = name,
            WizardAction::AttachLogo(file) => form.logo = file,
            WizardAction::SelectLocation(city) => form.location = city,
            WizardAction::ToggleCategory(id) => form.toggle_category(id),
            WizardAction::SetInterests(text) => form.interests = text,
            WizardAction::SetEmail(email) => form.email = email,
            WizardAction::SetPhone(phone) => form.phone = phone,
            WizardAction::SetSignature(signature) => form.signature = signature,
            WizardAction::SetAcceptTerms(accepted) => form.accept_terms = accepted,
            WizardAction::Next
            | WizardAction::Back
            | WizardAction::Submit
            | WizardAction::ReturnHome => {},
        }
    }
}

impl Reducer for WizardReducer {
    type State = WizardState;
    type Action = WizardAction;
    type Environment = WizardEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        if state.is_submitted() && action != WizardAction::ReturnHome {
            tracing::debug!(?action, "Application already submitted, ignoring");
            return SmallVec::new();
        }

        match action {
            WizardAction::Next => {
                if state.can_advance() {
                    state.step = state.step.next();
                    tracing::debug!(step = %state.step, "Advanced");
                } else {
                    tracing::debug!(step = %state.step, "Step incomplete, Next ignored");
                }
                SmallVec::new()
            },

            WizardAction::Back => {
                state.step = state.step.previous();
                SmallVec::new()
            },

            WizardAction::Submit => {
                if !state.can_submit() {
                    tracing::debug!(step = %state.step, "Cannot submit yet");
                    return SmallVec::new();
                }

                let submitted_at = env.clock.now();
                state.submission = Some(Submission { submitted_at });

                let application = PartnerApplication {
                    form: state.form.clone(),
                    submitted_at,
                };
                tracing::info!(
                    business_name = %application.form.business_name,
                    %submitted_at,
                    "Partner application submitted"
                );

                let handoff = Arc::clone(&env.handoff);
                smallvec![Effect::future(async move {
                    if let Err(error) = handoff.hand_off(&application) {
                        tracing::error!(%error, "Failed to hand off partner application");
                    }
                    None
                })]
            },

            WizardAction::ReturnHome => {
                if !state.is_submitted() {
                    tracing::debug!("ReturnHome outside the confirmation view, ignoring");
                    return SmallVec::new();
                }
                let navigator = Arc::clone(&env.navigator);
                smallvec![Effect::future(async move {
                    navigator.navigate(Page::Landing);
                    None
                })]
            },

            edit => {
                Self::edit(state, edit);
                SmallVec::new()
            },
        }
    }
}
