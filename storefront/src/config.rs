//! Configuration management for the storefront shell.
//!
//! Loads configuration from environment variables with sensible defaults.

use event_detail::catalog::ParseTicketTypeError;
use event_detail::share;
use event_detail::TicketType;
use nikofree_core::navigation::{Page, UnknownPage};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default base URL of the storefront
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Default path of the sample event page
pub const DEFAULT_EVENT_PATH: &str = "/events/nairobi-tech-summit-2025";

/// Default copy-link feedback, in milliseconds
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

/// Errors raised by [`Config::try_from_env`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration variable is not a whole number of milliseconds
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidDuration {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// The ticket discriminator is unknown
    #[error("{var}: {source}")]
    InvalidTicketType {
        /// Variable name
        var: &'static str,
        /// Parse failure
        #[source]
        source: ParseTicketTypeError,
    },

    /// The page identifier is unknown
    #[error("{var}: {source}")]
    InvalidPage {
        /// Variable name
        var: &'static str,
        /// Parse failure
        #[source]
        source: UnknownPage,
    },

    /// The base URL is set but empty
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for page links (`STOREFRONT_BASE_URL`)
    pub base_url: String,
    /// Path of the sample event page (`STOREFRONT_EVENT_PATH`)
    pub event_path: String,
    /// How long "Link Copied!" stays up (`STOREFRONT_COPY_FEEDBACK_MS`)
    pub copy_feedback: Duration,
    /// Catalog shape of the sample event (`STOREFRONT_TICKET_TYPE`)
    pub ticket_type: TicketType,
    /// Only walk through this page (`STOREFRONT_PAGE`); every page when unset
    pub page: Option<Page>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            event_path: DEFAULT_EVENT_PATH.to_string(),
            copy_feedback: Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS),
            ticket_type: TicketType::default(),
            page: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are logged and replaced by their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|key| env::var(key).ok())
    }

    /// Load configuration from environment variables, rejecting invalid values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a malformed duration, an unknown ticket
    /// type or an empty base URL.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// URL of the sample event page
    #[must_use]
    pub fn event_url(&self) -> String {
        share::page_url(&self.base_url, &self.event_path)
    }

    /// Whether the walkthrough of `page` should run
    #[must_use]
    pub fn runs(&self, page: Page) -> bool {
        self.page.is_none_or(|only| only == page)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = lookup("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);
        if base_url.trim().is_empty() {
            return Err(ConfigError::Empty("STOREFRONT_BASE_URL"));
        }

        let copy_feedback = match lookup("STOREFRONT_COPY_FEEDBACK_MS") {
            Some(value) => value
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDuration {
                    var: "STOREFRONT_COPY_FEEDBACK_MS",
                    value,
                })?,
            None => defaults.copy_feedback,
        };

        let ticket_type = match lookup("STOREFRONT_TICKET_TYPE") {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidTicketType {
                    var: "STOREFRONT_TICKET_TYPE",
                    source,
                })?,
            None => defaults.ticket_type,
        };

        let page = lookup("STOREFRONT_PAGE")
            .map(|value| {
                value.parse().map_err(|source| ConfigError::InvalidPage {
                    var: "STOREFRONT_PAGE",
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            base_url,
            event_path: lookup("STOREFRONT_EVENT_PATH").unwrap_or(defaults.event_path),
            copy_feedback,
            ticket_type,
            page,
        })
    }

    fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("STOREFRONT_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.base_url);

        let copy_feedback = lookup("STOREFRONT_COPY_FEEDBACK_MS")
            .and_then(|value| match value.trim().parse() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(_) => {
                    tracing::warn!(%value, "Invalid STOREFRONT_COPY_FEEDBACK_MS, using default");
                    None
                },
            })
            .unwrap_or(defaults.copy_feedback);

        let ticket_type = lookup("STOREFRONT_TICKET_TYPE")
            .and_then(|value| match value.parse() {
                Ok(ticket_type) => Some(ticket_type),
                Err(error) => {
                    tracing::warn!(%error, "Invalid STOREFRONT_TICKET_TYPE, using default");
                    None
                },
            })
            .unwrap_or(defaults.ticket_type);

        let page = lookup("STOREFRONT_PAGE").and_then(|value| match value.parse() {
            Ok(page) => Some(page),
            Err(error) => {
                tracing::warn!(%error, "Invalid STOREFRONT_PAGE, walking through every page");
                None
            },
        });

        Self {
            base_url,
            event_path: lookup("STOREFRONT_EVENT_PATH").unwrap_or(defaults.event_path),
            copy_feedback,
            ticket_type,
            page,
        }
    }
}
