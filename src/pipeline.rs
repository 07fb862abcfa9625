use std::io::Write;
use std::time::Duration;

use tracing::{info, info_span};

use crate::app::ports::{PageFetcher, Pacer};
use crate::error::Result;
use crate::metrics::ScrapeMetrics;
use crate::parser::parse_for;
use crate::types::{Competitor, EventRecord};

/// One sequential pass over the competitor registry.
pub struct Pipeline<F, P> {
    competitors: Vec<Competitor>,
    fetcher: F,
    pacer: P,
    request_delay: Duration,
}

impl<F: PageFetcher, P: Pacer> Pipeline<F, P> {
    pub fn new(competitors: &[Competitor], fetcher: F, pacer: P, request_delay: Duration) -> Self {
        Self {
            competitors: competitors.to_vec(),
            fetcher,
            pacer,
            request_delay,
        }
    }

    /// Fetches and parses every competitor in registry order, prints the count
    /// summary to `out` and returns every record for downstream persistence.
    ///
    /// A failed fetch yields no records for that competitor and nothing else;
    /// the pacing delay still follows it.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Vec<EventRecord>> {
        info!(competitors = self.competitors.len(), "starting scrape run");
        let mut all_events = Vec::new();

        for competitor in &self.competitors {
            let span = info_span!("competitor", name = %competitor.name);
            let _enter = span.enter();

            writeln!(out, "[INFO] Fetching {}: {}", competitor.name, competitor.url)?;
            let doc = self.fetcher.fetch(competitor.url, out);
            let events = parse_for(competitor.name, doc.as_ref());

            info!(records = events.len(), "parsed listing");
            ScrapeMetrics::record_records_extracted(competitor.name, events.len());
            all_events.extend(events);

            self.pacer.pause(self.request_delay);
        }

        print_summary(out, &all_events)?;
        info!(records = all_events.len(), "scrape run finished");
        Ok(all_events)
    }
}

/// Record counts per competitor, highest first. Equal counts keep the order in
/// which the competitor first appeared.
pub fn summarize(events: &[EventRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for event in events {
        match counts.iter_mut().find(|(name, _)| *name == event.competitor_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((event.competitor_name.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn print_summary(out: &mut dyn Write, events: &[EventRecord]) -> Result<()> {
    writeln!(out, "Collected {} raw events.", events.len())?;
    for (competitor, count) in summarize(events) {
        writeln!(out, "  {competitor}: {count}")?;
    }
    Ok(())
}
