use serde::Serialize;

/// One candidate event pulled from a competitor listing page.
///
/// Records only live for the duration of a run; persisting them is left to
/// whatever consumes the vector returned by [`crate::pipeline::Pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub competitor_name: String,
    pub title: String,
    pub speaker_name: Option<String>,
    /// Date text exactly as shown on the page; never normalized.
    pub date_raw: Option<String>,
    pub url: Option<String>,
}

/// A registry entry: display name plus listing page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competitor {
    pub name: &'static str,
    pub url: &'static str,
}

impl Competitor {
    pub const fn new(name: &'static str, url: &'static str) -> Self {
        Self { name, url }
    }
}
