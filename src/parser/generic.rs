use std::collections::HashSet;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::constants::{EVENT_PATH_FILTERED, EVENT_PATH_MARKERS, MIN_TITLE_WORDS};
use crate::parser::{is_absolute_url, visible_text};
use crate::speaker::guess_speaker;
use crate::types::EventRecord;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("anchor selector"));

/// Naive fallback: every sufficiently wordy link on the page is a candidate event.
///
/// Relative hrefs are not resolved, so those records carry no URL. Dates are
/// never inferred here.
pub fn parse_generic_list(doc: Option<&Html>, competitor_name: &str) -> Vec<EventRecord> {
    let Some(doc) = doc else {
        return Vec::new();
    };

    let event_paths_only = EVENT_PATH_FILTERED.iter().any(|c| *c == competitor_name);
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut events = Vec::new();
    let mut anchors = 0usize;

    for anchor in doc.select(&ANCHOR) {
        anchors += 1;
        let text = visible_text(anchor);
        if text.split_whitespace().count() < MIN_TITLE_WORDS {
            continue;
        }

        let href = anchor.value().attr("href").unwrap_or("");
        if event_paths_only && !EVENT_PATH_MARKERS.iter().any(|m| href.contains(m)) {
            continue;
        }

        if !seen.insert((text.clone(), href.to_string())) {
            continue;
        }

        events.push(EventRecord {
            competitor_name: competitor_name.to_string(),
            speaker_name: guess_speaker(&text),
            date_raw: None,
            url: is_absolute_url(href).then(|| href.to_string()),
            title: text,
        });
    }

    debug!(
        competitor = competitor_name,
        anchors,
        kept = events.len(),
        "generic parse finished"
    );
    events
}
