//! Page identifiers passed to the navigation callback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A page the shell can switch to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Event listing / home page
    Landing,
    /// Single event page
    EventDetail,
    /// Partner onboarding wizard
    BecomePartner,
}

impl Page {
    /// Identifier understood by `onNavigate`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::EventDetail => "event-detail",
            Self::BecomePartner => "become-partner",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown page identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page identifier: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing" => Ok(Self::Landing),
            "event-detail" => Ok(Self::EventDetail),
            "become-partner" => Ok(Self::BecomePartner),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}
