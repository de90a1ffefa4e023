//! Inquiry text and chat deep links for the outbound messaging
//! collaborator.
//!
//! The core only supplies the data a message quotes; opening the link is
//! the UI's job.

use url::Url;

use idbazaar_core::Item;

/// Preformatted inquiry quoting the listing's title and price.
pub fn inquiry_message(item: &Item) -> String {
    format!("Hi! I'm interested in {} (₹{})", item.title, item.price)
}

/// `https://wa.me/{phone}?text=...` deep link; the URL builder handles
/// percent-encoding of the payload.
pub fn chat_link(phone: &str, text: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(&format!("https://wa.me/{phone}"), [("text", text)])
}
