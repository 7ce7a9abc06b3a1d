//! # Partner Onboarding
//!
//! The "Become a Partner" wizard as a reducer.
//!
//! A prospective event organiser walks through four gated steps:
//!
//! 1. **Basic Info**: business name, optional logo, location
//! 2. **Categories**: at least one event category, optional interests
//! 3. **Contact**: email and phone
//! 4. **Sign**: typed signature and acceptance of the partner terms
//!
//! `Next` only advances when the current step is complete; `Back` is always
//! allowed. Submitting from step 4 records the submission time, hands the
//! application to a [`SubmissionHandoff`] and switches to a confirmation
//! screen. No backend exists yet: the default [`DiscardingHandoff`] only logs.
//!
//! ## Example
//!
//! ```
//! use partner_onboarding::{City, WizardAction, WizardReducer, WizardState, WizardStep};
//! use partner_onboarding::WizardEnvironment;
//! use nikofree_core::environment::{Navigator, SystemClock};
//! use nikofree_core::navigation::Page;
//! use nikofree_core::reducer::Reducer;
//! use std::sync::Arc;
//!
//! struct Stay;
//! impl Navigator for Stay {
//!     fn navigate(&self, _page: Page) {}
//! }
//!
//! let env = WizardEnvironment::new(Arc::new(SystemClock), Arc::new(Stay));
//! let mut state = WizardState::new();
//!
//! WizardReducer.reduce(&mut state, WizardAction::SetBusinessName("Acme".into()), &env);
//! WizardReducer.reduce(&mut state, WizardAction::SelectLocation(Some(City::Nairobi)), &env);
//! WizardReducer.reduce(&mut state, WizardAction::Next, &env);
//!
//! assert_eq!(state.step, WizardStep::Categories);
//! ```

pub mod catalog;
pub mod handoff;
pub mod reducer;
pub mod types;
pub mod view;

pub use catalog::{parse_location, Category, City, ParseCityError, CATEGORIES};
pub use handoff::{DiscardingHandoff, HandoffError, SubmissionHandoff};
pub use reducer::{WizardEnvironment, WizardReducer};
pub use types::{
    CategoryId, PartnerApplication, PartnerForm, SelectedFile, Submission, WizardAction,
    WizardState, WizardStep,
};
pub use view::{StepView, WizardView};
