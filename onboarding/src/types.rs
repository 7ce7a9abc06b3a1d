//! Domain types for the partner onboarding wizard.
//!
//! The wizard owns one [`PartnerForm`] and one [`WizardStep`]. Each step has
//! a gating predicate over the form; forward navigation and submission are
//! only possible while the current step's predicate holds.

use crate::catalog::City;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Identifiers and field values
// ============================================================================

/// Identifier of an event category (e.g. `"travel"`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a `CategoryId`
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

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file the user picked for their logo
///
/// Only the reference is held; the file is never read, checked or uploaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as reported by the picker
    pub name: String,
    /// Size in bytes as reported by the picker
    pub size_bytes: u64,
    /// MIME type, if the picker reported one
    pub content_type: Option<String>,
}

impl SelectedFile {
    /// Creates a file reference
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: None,
        }
    }

    /// Attach the reported MIME type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

// ============================================================================
// Form
// ============================================================================

/// Everything the partner has typed or picked so far
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerForm {
    /// Business or brand name (step 1, required)
    pub business_name: String,
    /// Logo file reference (step 1, optional)
    pub logo: Option<SelectedFile>,
    /// Operating city (step 1, required)
    pub location: Option<City>,
    /// Selected categories (step 2, at least one)
    pub categories: BTreeSet<CategoryId>,
    /// Additional interests (step 2, optional)
    pub interests: String,
    /// Email for RSVPs (step 3, required)
    pub email: String,
    /// Contact phone (step 3, required)
    pub phone: String,
    /// Typed signature (step 4, required)
    pub signature: String,
    /// Terms checkbox (step 4, required)
    pub accept_terms: bool,
}

impl PartnerForm {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the category if absent, remove it if present
    pub fn toggle_category(&mut self, id: CategoryId) {
        if !self.categories.remove(&id) {
            self.categories.insert(id);
        }
    }

    /// Step 1: business name and location given
    #[must_use]
    pub fn basic_info_complete(&self) -> bool {
        !self.business_name.is_empty() && self.location.is_some()
    }

    /// Step 2: at least one category selected
    #[must_use]
    pub fn categories_complete(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Step 3: email and phone given
    #[must_use]
    pub fn contact_complete(&self) -> bool {
        !self.email.is_empty() && !self.phone.is_empty()
    }

    /// Step 4: signed and terms accepted
    #[must_use]
    pub fn agreement_complete(&self) -> bool {
        !self.signature.is_empty() && self.accept_terms
    }

    /// Gating predicate of `step`
    #[must_use]
    pub fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::BasicInfo => self.basic_info_complete(),
            WizardStep::Categories => self.categories_complete(),
            WizardStep::Contact => self.contact_complete(),
            WizardStep::SignAndSubmit => self.agreement_complete(),
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

/// A visible wizard step, numbered 1 to 4
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// 1. Business name, logo, location
    #[default]
    BasicInfo,
    /// 2. Categories and interests
    Categories,
    /// 3. Email and phone
    Contact,
    /// 4. Agreement, signature, submit
    SignAndSubmit,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [Self; 4] = [
        Self::BasicInfo,
        Self::Categories,
        Self::Contact,
        Self::SignAndSubmit,
    ];

    /// 1-based position
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Categories => 2,
            Self::Contact => 3,
            Self::SignAndSubmit => 4,
        }
    }

    /// Step at a 1-based position
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::BasicInfo),
            2 => Some(Self::Categories),
            3 => Some(Self::Contact),
            4 => Some(Self::SignAndSubmit),
            _ => None,
        }
    }

    /// Following step, capped at the last one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::BasicInfo => Self::Categories,
            Self::Categories => Self::Contact,
            Self::Contact | Self::SignAndSubmit => Self::SignAndSubmit,
        }
    }

    /// Preceding step, floored at the first one
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::BasicInfo | Self::Categories => Self::BasicInfo,
            Self::Contact => Self::Categories,
            Self::SignAndSubmit => Self::Contact,
        }
    }

    /// Whether this is the submit step
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::SignAndSubmit)
    }

    /// Short label under the progress marker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Info",
            Self::Categories => "Categories",
            Self::Contact => "Contact",
            Self::SignAndSubmit => "Sign",
        }
    }

    /// Heading of the step card
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::Categories => "Categories & Interests",
            Self::Contact => "Contact Details",
            Self::SignAndSubmit => "Partner Agreement",
        }
    }

    /// Line under the heading
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::BasicInfo => "Tell us about your business",
            Self::Categories => "What type of events will you organize?",
            Self::Contact => "How can we reach you?",
            Self::SignAndSubmit => "Review and sign the partner contract",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}

// ============================================================================
// State
// ============================================================================

/// Record of a completed submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// When the partner pressed Submit
    pub submitted_at: DateTime<Utc>,
}

/// What gets handed off when the partner submits
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerApplication {
    /// The form as it was at submission
    pub form: PartnerForm,
    /// When the partner pressed Submit
    pub submitted_at: DateTime<Utc>,
}

/// State of the onboarding wizard
///
/// Created empty when the page mounts and dropped when it unmounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    /// Current step
    pub step: WizardStep,
    /// Collected answers
    pub form: PartnerForm,
    /// Set once the application was submitted; terminal
    pub submission: Option<Submission>,
}

impl WizardState {
    /// Creates a fresh wizard at step 1 with an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the application has been submitted
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// Whether `Next` is enabled
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_submitted() && !self.step.is_final() && self.form.step_complete(self.step)
    }

    /// Whether `Back` is shown
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_submitted() && self.step != WizardStep::BasicInfo
    }

    /// Whether `Submit Application` is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.step.is_final() && self.form.agreement_complete()
    }
}

// ============================================================================
// Actions
// ============================================================================

/// Everything the wizard reacts to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Business name input changed
    SetBusinessName(String),
    /// Logo picker changed (`None` when the selection was cleared)
    AttachLogo(Option<SelectedFile>),
    /// Location select changed (`None` for the placeholder option)
    SelectLocation(Option<City>),
    /// Category tile clicked
    ToggleCategory(CategoryId),
    /// Interests textarea changed
    SetInterests(String),
    /// Email input changed
    SetEmail(String),
    /// Phone input changed
    SetPhone(String),
    /// Signature input changed
    SetSignature(String),
    /// Terms checkbox changed
    SetAcceptTerms(bool),
    /// Next button
    Next,
    /// Back button
    Back,
    /// Submit Application button
    Submit,
    /// Back to Home button on the confirmation view
    ReturnHome,
}

impl WizardAction {
    /// Whether this action edits a form field
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        !matches!(
            self,
            Self::Next | Self::Back | Self::Submit | Self::ReturnHome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
    }

    #[test]
    fn navigation_is_clamped() {
        assert_eq!(WizardStep::SignAndSubmit.next(), WizardStep::SignAndSubmit);
        assert_eq!(WizardStep::BasicInfo.previous(), WizardStep::BasicInfo);
        assert_eq!(WizardStep::Categories.next(), WizardStep::Contact);
        assert_eq!(WizardStep::Contact.previous(), WizardStep::Categories);
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut form = PartnerForm::new();
        form.toggle_category("travel".into());
        assert!(form.categories.contains(&CategoryId::from("travel")));
        form.toggle_category("travel".into());
        assert!(form.categories.is_empty());
    }

    #[test]
    fn basic_info_needs_both_fields() {
        let mut form = PartnerForm::new();
        form.business_name = "Acme".to_string();
        assert!(!form.basic_info_complete());
        form.location = Some(City::Nairobi);
        assert!(form.basic_info_complete());
        form.business_name.clear();
        assert!(!form.basic_info_complete());
    }

    #[test]
    fn whitespace_counts_as_non_empty() {
        let mut form = PartnerForm::new();
        form.email = " ".to_string();
        form.phone = " ".to_string();
        assert!(form.contact_complete());
    }

    #[test]
    fn agreement_needs_signature_and_terms() {
        let mut form = PartnerForm::new();
        form.signature = "Acme Owner".to_string();
        assert!(!form.agreement_complete());
        form.accept_terms = true;
        assert!(form.agreement_complete());
    }

    #[test]
    fn fresh_state_is_empty() {
        let state = WizardState::new();
        assert_eq!(state.step, WizardStep::BasicInfo);
        assert_eq!(state.form, PartnerForm::default());
        assert!(!state.is_submitted());
        assert!(!state.can_advance());
        assert!(!state.can_go_back());
        assert!(!state.can_submit());
    }

    #[test]
    fn form_serializes_categories_as_strings() {
        let mut form = PartnerForm::new();
        form.toggle_category("music".into());
        form.location = Some(City::Mombasa);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["categories"], serde_json::json!(["music"]));
        assert_eq!(json["location"], serde_json::json!("Mombasa"));
    }
}
