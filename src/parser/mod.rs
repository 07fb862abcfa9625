//! Listing-page parsers. Most competitors go through the naive link scraper;
//! Southbank Centre has card markup predictable enough for a structured parser.

pub mod generic;
pub mod southbank;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

use crate::constants::SOUTHBANK_CENTRE;
use crate::types::EventRecord;

pub use generic::parse_generic_list;
pub use southbank::parse_southbank_events;

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("absolute url pattern must compile"));

/// Picks the parser for a competitor by exact name.
pub fn parse_for(competitor_name: &str, doc: Option<&Html>) -> Vec<EventRecord> {
    if competitor_name == SOUTHBANK_CENTRE {
        parse_southbank_events(doc)
    } else {
        parse_generic_list(doc, competitor_name)
    }
}

/// Text content of an element with whitespace runs collapsed.
pub(crate) fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn is_absolute_url(href: &str) -> bool {
    ABSOLUTE_URL.is_match(href)
}
