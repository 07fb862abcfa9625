//! Static configuration: the competitor registry and the per-site constants the
//! parsers key off.

use crate::types::Competitor;

// Competitor display names (consistent across the application)
pub const LIVE_NATION: &str = "Live Nation";
pub const AEG_PRESENTS: &str = "AEG Presents";
pub const INTELLIGENCE_SQUARED: &str = "Intelligence Squared";
pub const GOALHANGER: &str = "Goalhanger";
pub const NO_THIRD_ENTERTAINMENT: &str = "No Third Entertainment";
pub const PHIL_MCINTYRE: &str = "Phil McIntyre Entertainments";
pub const SOUTHBANK_CENTRE: &str = "Southbank Centre";

/// Every competitor scraped by a run, in the order they are visited.
pub const COMPETITORS: &[Competitor] = &[
    Competitor::new(LIVE_NATION, "https://www.livenation.co.uk/events"),
    Competitor::new(AEG_PRESENTS, "https://www.aegpresents.co.uk/events"),
    Competitor::new(INTELLIGENCE_SQUARED, "https://www.intelligencesquared.com/events/"),
    Competitor::new(GOALHANGER, "https://goalhangerpodcasts.com/live/"),
    // placeholder URL, not yet validated against the live site
    Competitor::new(NO_THIRD_ENTERTAINMENT, "https://nothirdentertainment.com/events"),
    Competitor::new(PHIL_MCINTYRE, "https://www.philmcintyreentertainments.com/tour-dates"),
    Competitor::new(SOUTHBANK_CENTRE, "https://www.southbankcentre.co.uk/whats-on"),
];

/// Competitors whose generic pass only keeps links into an event detail path.
pub const EVENT_PATH_FILTERED: &[&str] = &[LIVE_NATION, AEG_PRESENTS];
pub const EVENT_PATH_MARKERS: &[&str] = &["/event/", "/events/"];

/// Anchors with fewer words than this are navigation or buttons.
pub const MIN_TITLE_WORDS: usize = 3;

// Southbank Centre card markup
pub const SOUTHBANK_ORIGIN: &str = "https://www.southbankcentre.co.uk";
pub const SOUTHBANK_CARD_SELECTOR: &str = "div.card--event";
pub const SOUTHBANK_CATEGORY_SELECTOR: &str = ".card__meta-category";
pub const SOUTHBANK_TITLE_SELECTOR: &str = ".card__title a";
pub const SOUTHBANK_DATE_SELECTOR: &str = ".card__date";
pub const SOUTHBANK_CATEGORY_KEYWORDS: &[&str] = &["talk", "literature", "ideas", "spoken"];

// HTTP
// NOTE: replace the contact address with a real one before running against live sites.
pub const USER_AGENT: &str = "ProducerAIBot/0.1 (+contact: your-email@example.com)";
pub const REQUEST_TIMEOUT_SECS: u64 = 25;

// Pacing
pub const REQUEST_DELAY_ENV: &str = "COMPETITOR_SCRAPE_DELAY";
pub const DEFAULT_REQUEST_DELAY_SECS: f64 = 1.5;
