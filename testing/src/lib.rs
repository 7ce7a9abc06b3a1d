//! # Niko Free Testing
//!
//! Testing utilities for the storefront state machines.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Effect assertion helpers
//! - Recording and scripted implementations of the environment traits
//!
//! ## Example
//!
//! ```ignore
//! use nikofree_testing::{mocks::RecordingNavigator, ReducerTest};
//!
//! ReducerTest::new(WizardReducer::new())
//!     .with_env(test_environment())
//!     .given_state(WizardState::default())
//!     .when_action(WizardAction::SetBusinessName("Acme".into()))
//!     .then_state(|state| assert_eq!(state.form.business_name, "Acme"))
//!     .run();
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Recording and scripted environment implementations
pub mod mocks {
    use chrono::{DateTime, Utc};
    use nikofree_core::environment::{
        Browser, BrowserError, Clipboard, ClipboardError, Clock, Navigator,
    };
    use nikofree_core::navigation::Page;
    use std::sync::{Arc, Mutex};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use nikofree_testing::mocks::FixedClock;
    /// use nikofree_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-11-02 09:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-11-02T09:00:00Z")
                .map_or(DateTime::<Utc>::UNIX_EPOCH, |t| t.with_timezone(&Utc)),
        )
    }

    fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
        mutex
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Navigator that records every requested page
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNavigator {
        pages: Arc<Mutex<Vec<Page>>>,
    }

    impl RecordingNavigator {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Pages requested so far, oldest first
        #[must_use]
        pub fn pages(&self) -> Vec<Page> {
            lock(&self.pages).clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, page: Page) {
            lock(&self.pages).push(page);
        }
    }

    /// Clipboard that either accepts or refuses writes, recording what it got
    #[derive(Debug, Clone)]
    pub struct ScriptedClipboard {
        available: bool,
        writes: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedClipboard {
        /// A clipboard that accepts every write
        #[must_use]
        pub fn working() -> Self {
            Self {
                available: true,
                writes: Arc::default(),
            }
        }

        /// A clipboard that refuses every write
        #[must_use]
        pub fn broken() -> Self {
            Self {
                available: false,
                writes: Arc::default(),
            }
        }

        /// Text successfully written so far
        #[must_use]
        pub fn writes(&self) -> Vec<String> {
            lock(&self.writes).clone()
        }
    }

    impl Clipboard for ScriptedClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if !self.available {
                return Err(ClipboardError::Unavailable("scripted failure".to_string()));
            }
            lock(&self.writes).push(text.to_string());
            Ok(())
        }
    }

    /// Browser that records opened URLs instead of opening them
    #[derive(Debug, Clone, Default)]
    pub struct RecordingBrowser {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingBrowser {
        /// Create an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// URLs opened so far, oldest first
        #[must_use]
        pub fn opened(&self) -> Vec<String> {
            lock(&self.opened).clone()
        }
    }

    impl Browser for RecordingBrowser {
        fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError> {
            lock(&self.opened).push(url.to_string());
            Ok(())
        }
    }
}

/// Install a test-friendly tracing subscriber once per test binary
///
/// Honours `RUST_LOG`; output is captured by the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, RecordingBrowser, RecordingNavigator, ScriptedClipboard};

#[cfg(test)]
mod tests {
    use super::*;
    use nikofree_core::environment::{Browser, Clipboard, Clock, Navigator};
    use nikofree_core::navigation::Page;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().to_rfc3339(), "2025-11-02T09:00:00+00:00");
    }

    #[test]
    fn navigator_records_pages() {
        let navigator = RecordingNavigator::new();
        let shared = navigator.clone();

        navigator.navigate(Page::Landing);
        navigator.navigate(Page::EventDetail);

        assert_eq!(shared.pages(), vec![Page::Landing, Page::EventDetail]);
    }

    #[test]
    fn scripted_clipboard_modes() {
        let working = ScriptedClipboard::working();
        assert!(working.write_text("https://example.test").is_ok());
        assert_eq!(working.writes(), vec!["https://example.test".to_string()]);

        let broken = ScriptedClipboard::broken();
        assert!(broken.write_text("x").is_err());
        assert!(broken.writes().is_empty());
    }

    #[test]
    fn browser_records_urls() {
        let browser = RecordingBrowser::new();
        browser.open_in_new_tab("https://wa.me/?text=hi").unwrap();
        assert_eq!(browser.opened(), vec!["https://wa.me/?text=hi".to_string()]);
    }
}
