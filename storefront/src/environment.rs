//! Production implementations of the environment traits.

use base64::{engine::general_purpose, Engine as _};
use nikofree_core::environment::{Browser, BrowserError, Clipboard, ClipboardError, Navigator};
use nikofree_core::navigation::Page;
use std::io::{IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

/// The desktop clipboard
///
/// A fresh handle is opened for every write, so a missing display server
/// only fails the write that needed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Creates the clipboard
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Copies through the terminal with an OSC 52 escape sequence
///
/// Works over SSH and in terminals without a display server, as long as
/// the terminal honours OSC 52.
pub struct TerminalClipboard {
    out: Mutex<Box<dyn Write + Send>>,
    require_tty: bool,
}

impl TerminalClipboard {
    /// Writes the escape sequence to stdout; fails when stdout is not a terminal
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(Box::new(std::io::stdout())),
            require_tty: true,
        }
    }

    /// Writes the escape sequence to `out` unconditionally
    #[must_use]
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            require_tty: false,
        }
    }

    /// The OSC 52 sequence that sets the clipboard to `text`
    #[must_use]
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", general_purpose::STANDARD.encode(text))
    }
}

impl std::fmt::Debug for TerminalClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalClipboard")
            .field("require_tty", &self.require_tty)
            .finish_non_exhaustive()
    }
}

impl Clipboard for TerminalClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.require_tty && !std::io::stdout().is_terminal() {
            return Err(ClipboardError::Unavailable("stdout is not a terminal".to_string()));
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(Self::sequence(text).as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Logs the URL instead of launching a browser
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBrowser;

impl Browser for LoggingBrowser {
    fn open_in_new_tab(&self, url: &str) -> Result<(), BrowserError> {
        tracing::info!(%url, "Opening in new tab");
        Ok(())
    }
}

/// Remembers the most recently requested page
#[derive(Debug, Default)]
pub struct ShellNavigator {
    current: Mutex<Option<Page>>,
}

impl ShellNavigator {
    /// Creates a navigator with no page requested yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last page requested
    #[must_use]
    pub fn current(&self) -> Option<Page> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for ShellNavigator {
    fn navigate(&self, page: Page) {
        tracing::info!(%page, "Navigating");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(page);
    }
}
