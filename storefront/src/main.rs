//! Storefront walkthrough
//!
//! Replays a visitor session on both pages and prints every rendered frame.
//!
//! # Usage
//!
//! ```bash
//! STOREFRONT_TICKET_TYPE=class cargo run --bin storefront
//! STOREFRONT_PAGE=become-partner cargo run --bin storefront
//! ```

use event_detail::fixtures;
use event_detail::DetailEnvironment;
use nikofree_core::environment::SystemClock;
use nikofree_core::navigation::Page;
use partner_onboarding::WizardEnvironment;
use std::sync::Arc;
use storefront::environment::{LoggingBrowser, ShellNavigator, SystemClipboard, TerminalClipboard};
use storefront::{walkthrough, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,storefront=debug,partner_onboarding=debug,event_detail=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(
        event_url = %config.event_url(),
        snapshot = %serde_json::to_string(&config)?,
        "Configuration loaded"
    );

    let navigator = Arc::new(ShellNavigator::new());

    if config.runs(Page::BecomePartner) {
        tracing::info!(page = %Page::BecomePartner, "Opening page");
        let wizard_env = WizardEnvironment::new(Arc::new(SystemClock), navigator.clone());
        for frame in walkthrough::onboarding(wizard_env).await? {
            println!("{frame}");
        }
    }

    if !config.runs(Page::EventDetail) {
        tracing::info!(page = ?navigator.current(), "Walkthrough finished");
        return Ok(());
    }

    tracing::info!(page = %Page::EventDetail, "Opening page");
    let event = fixtures::nairobi_tech_summit_with(config.ticket_type);
    tracing::debug!(snapshot = %serde_json::to_string(&event.tickets)?, "Ticket catalog");
    let detail_env = DetailEnvironment::new(
        navigator.clone(),
        Arc::new(LoggingBrowser),
        Arc::new(SystemClipboard::new()),
        Arc::new(TerminalClipboard::stdout()),
    )
    .with_copy_feedback(config.copy_feedback);
    for frame in walkthrough::event_detail(event, config.event_url(), detail_env).await? {
        println!("{frame}");
    }

    tracing::info!(page = ?navigator.current(), "Walkthrough finished");
    Ok(())
}
