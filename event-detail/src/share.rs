//! Share-intent and map link builders.
//!
//! Pure string functions; opening the result is the environment's job.

use thiserror::Error;

/// WhatsApp share intent prefix
pub const WHATSAPP_SHARE: &str = "https://wa.me/?text=";

/// LinkedIn share intent prefix
pub const LINKEDIN_SHARE: &str = "https://www.linkedin.com/sharing/share-offsite/?url=";

/// Google Maps search prefix
pub const MAPS_SEARCH: &str = "https://www.google.com/maps/search/";

/// Label of the copy button at rest
pub const COPY_LINK_LABEL: &str = "Copy Link";

/// Label of the copy button after a successful copy
pub const LINK_COPIED_LABEL: &str = "Link Copied!";

/// Errors raised while building share links
#[derive(Error, Debug)]
pub enum ShareError {
    /// The query could not be form-encoded
    #[error("failed to encode map query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Text that precedes the link in a share message
#[must_use]
pub fn share_text(title: &str) -> String {
    format!("Check out this event: {title}")
}

/// WhatsApp share intent carrying the share text and the page URL
#[must_use]
pub fn whatsapp_url(title: &str, page_url: &str) -> String {
    let message = format!("{}\n{page_url}", share_text(title));
    format!("{WHATSAPP_SHARE}{}", urlencoding::encode(&message))
}

/// LinkedIn share intent for the page URL
#[must_use]
pub fn linkedin_url(page_url: &str) -> String {
    format!("{LINKEDIN_SHARE}{}", urlencoding::encode(page_url))
}

/// Google Maps search link for a venue
///
/// # Errors
///
/// Returns [`ShareError::Encode`] if the query cannot be form-encoded.
pub fn maps_url(venue_query: &str) -> Result<String, ShareError> {
    let query = serde_urlencoded::to_string([("api", "1"), ("query", venue_query)])?;
    Ok(format!("{MAPS_SEARCH}?{query}"))
}

/// Join a base URL and a path into a page URL
#[must_use]
pub fn page_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost:5173/events/nairobi-tech-summit-2025";

    #[test]
    fn whatsapp_encodes_text_and_newline() {
        assert_eq!(
            whatsapp_url("Nairobi Tech Summit 2025", URL),
            "https://wa.me/?text=Check%20out%20this%20event%3A%20Nairobi%20Tech%20Summit%202025\
             %0Ahttp%3A%2F%2Flocalhost%3A5173%2Fevents%2Fnairobi-tech-summit-2025"
        );
    }

    #[test]
    fn linkedin_encodes_url() {
        assert_eq!(
            linkedin_url(URL),
            "https://www.linkedin.com/sharing/share-offsite/?url=\
             http%3A%2F%2Flocalhost%3A5173%2Fevents%2Fnairobi-tech-summit-2025"
        );
    }

    #[test]
    fn maps_link_matches_venue_link() {
        assert_eq!(
            maps_url("Kenyatta International Convention Centre Nairobi").unwrap(),
            "https://www.google.com/maps/search/?api=1&query=Kenyatta+International+Convention+Centre+Nairobi"
        );
    }

    #[test]
    fn maps_query_escapes_reserved_characters() {
        assert_eq!(
            maps_url("Arts & Crafts Hall").unwrap(),
            "https://www.google.com/maps/search/?api=1&query=Arts+%26+Crafts+Hall"
        );
    }

    #[test]
    fn page_url_joins_cleanly() {
        assert_eq!(page_url("http://localhost:5173/", "/events/x"), "http://localhost:5173/events/x");
        assert_eq!(page_url("http://localhost:5173", "events/x"), "http://localhost:5173/events/x");
    }
}
