//! Environment module - dependency injection traits
//!
//! Everything a page reducer needs from the outside world is abstracted
//! behind a trait here and injected through the reducer's `Environment`.
//! Production implementations live in the application binary; recording
//! and scripted versions live in `nikofree-testing`.

use crate::navigation::Page;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Clock trait - abstracts time operations for testability
///
/// # Examples
///
/// ```
/// use nikofree_core::environment::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let before = clock.now();
/// assert!(clock.now() >= before);
/// ```
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Page switching, the `onNavigate(page)` callback of the shell
///
/// The core has no opinion on routing; it only requests a page by identifier.
pub trait Navigator: Send + Sync {
    /// Request a switch to `page`
    fn navigate(&self, page: Page);
}

/// Errors raised while writing to a clipboard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this process
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// A text clipboard
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] when the clipboard cannot be reached or
    /// refuses the write.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Errors raised while opening a URL
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// The URL could not be handed to a browser
    #[error("failed to open {url}: {reason}")]
    OpenFailed {
        /// URL that was being opened
        url: String,
        /// Why it failed
        reason: String,
    },
}

/// Opens share intents and map links in a new browser tab
pub trait Browser: Send + Sync {
    /// Open `url` in a new tab
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::OpenFailed`] if the URL could not be opened.
    fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError>;
}
