use std::io::Write;
use std::time::Duration;

use scraper::Html;
use tracing::warn;

use crate::error::Result;
use crate::metrics::ScrapeMetrics;

/// Fetches a listing page and hands back the parsed document.
pub trait PageFetcher {
    /// One GET; transport, status and body errors all surface as `Err`.
    fn try_fetch(&self, url: &str) -> Result<Html>;

    /// Fetch boundary used by the pipeline: failures are reported on `out` and
    /// collapse to `None`, so a broken site only costs its own records.
    fn fetch(&self, url: &str, out: &mut dyn Write) -> Option<Html> {
        match self.try_fetch(url) {
            Ok(doc) => {
                ScrapeMetrics::record_request_success();
                Some(doc)
            }
            Err(e) => {
                ScrapeMetrics::record_request_error();
                warn!(url, error = %e, "fetch failed");
                // Best effort; the fetch outcome is already settled.
                let _ = writeln!(out, "[WARN] Failed to fetch {url}: {e}");
                None
            }
        }
    }
}

/// Blocks between competitors to bound the outbound request rate.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}
