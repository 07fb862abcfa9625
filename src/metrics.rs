//! Scrape counters recorded through the `metrics` facade.
//!
//! No recorder is installed by this crate, so these are no-ops unless an
//! embedding application installs one before calling the pipeline.

pub struct ScrapeMetrics;

impl ScrapeMetrics {
    pub fn record_request_success() {
        ::metrics::counter!("scrape_requests_success_total").increment(1);
    }

    pub fn record_request_error() {
        ::metrics::counter!("scrape_requests_error_total").increment(1);
    }

    pub fn record_records_extracted(competitor: &str, count: usize) {
        ::metrics::counter!("scrape_records_extracted_total", "competitor" => competitor.to_string())
            .increment(count as u64);
    }
}
