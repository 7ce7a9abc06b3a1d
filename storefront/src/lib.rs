//! # Storefront
//!
//! The shell that hosts the Niko Free pages: it loads configuration, wires
//! production implementations of the environment traits, and renders page
//! views as plain text.
//!
//! Copy-link writes go to the desktop clipboard first and fall back to an
//! OSC 52 escape sequence on the terminal. Share intents and map links are
//! logged rather than opened.

pub mod config;
pub mod environment;
pub mod render;
pub mod walkthrough;

pub use config::{Config, ConfigError};
