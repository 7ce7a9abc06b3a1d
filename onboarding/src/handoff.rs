//! Where a submitted application goes.
//!
//! There is no onboarding backend yet. The reducer hands the completed
//! application to a [`SubmissionHandoff`]; the default implementation only
//! logs that the application was dropped.

use crate::types::PartnerApplication;
use thiserror::Error;

/// Errors raised while handing off an application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandoffError {
    /// The receiving side refused or could not be reached
    #[error("application handoff rejected: {0}")]
    Rejected(String),
}

/// Receives completed partner applications
pub trait SubmissionHandoff: Send + Sync {
    /// Accept `application`
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError`] if the application could not be delivered.
    fn hand_off(&self, application: &PartnerApplication) -> Result<(), HandoffError>;
}

/// Handoff that drops every application after logging it
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardingHandoff;

impl SubmissionHandoff for DiscardingHandoff {
    fn hand_off(&self, application: &PartnerApplication) -> Result<(), HandoffError> {
        tracing::warn!(
            business_name = %application.form.business_name,
            email = %application.form.email,
            categories = application.form.categories.len(),
            "No onboarding backend configured, application discarded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartnerForm;
    use chrono::{DateTime, Utc};

    #[test]
    fn discarding_handoff_accepts_everything() {
        let application = PartnerApplication {
            form: PartnerForm::default(),
            submitted_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        assert_eq!(DiscardingHandoff.hand_off(&application), Ok(()));
    }
}
