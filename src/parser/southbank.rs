use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::constants::{
    SOUTHBANK_CARD_SELECTOR, SOUTHBANK_CATEGORY_KEYWORDS, SOUTHBANK_CATEGORY_SELECTOR,
    SOUTHBANK_CENTRE, SOUTHBANK_DATE_SELECTOR, SOUTHBANK_ORIGIN, SOUTHBANK_TITLE_SELECTOR,
};
use crate::parser::{is_absolute_url, visible_text};
use crate::speaker::guess_speaker;
use crate::types::EventRecord;

static CARD: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SOUTHBANK_CARD_SELECTOR).expect("card selector"));
static CATEGORY: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SOUTHBANK_CATEGORY_SELECTOR).expect("category selector"));
static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SOUTHBANK_TITLE_SELECTOR).expect("title selector"));
static DATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(SOUTHBANK_DATE_SELECTOR).expect("date selector"));

/// Structured parser for the Southbank Centre "what's on" cards.
///
/// Only talk-like categories are kept. The card date is carried through as raw
/// text; it is not parsed.
pub fn parse_southbank_events(doc: Option<&Html>) -> Vec<EventRecord> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let mut events = Vec::new();
    let mut cards = 0usize;

    for card in doc.select(&CARD) {
        cards += 1;
        let category = card
            .select(&CATEGORY)
            .next()
            .map(|el| visible_text(el).to_lowercase())
            .unwrap_or_default();
        if !SOUTHBANK_CATEGORY_KEYWORDS
            .iter()
            .any(|kw| category.contains(kw))
        {
            continue;
        }

        let Some(title_el) = card.select(&TITLE).next() else {
            continue;
        };
        let title = visible_text(title_el);
        if title.is_empty() {
            continue;
        }

        let href = title_el.value().attr("href").unwrap_or("");
        let url = if is_absolute_url(href) {
            href.to_string()
        } else {
            format!("{SOUTHBANK_ORIGIN}{href}")
        };

        let date_raw = card.select(&DATE).next().map(visible_text).unwrap_or_default();

        events.push(EventRecord {
            competitor_name: SOUTHBANK_CENTRE.to_string(),
            speaker_name: guess_speaker(&title),
            date_raw: Some(date_raw),
            url: Some(url),
            title,
        });
    }

    debug!(cards, kept = events.len(), "southbank parse finished");
    events
}
