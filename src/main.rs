use std::io;

use competitor_scraper::config::Config;
use competitor_scraper::constants::COMPETITORS;
use competitor_scraper::infra::{ReqwestFetcher, ThreadPacer};
use competitor_scraper::logging;
use competitor_scraper::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::load()?;
    let fetcher = ReqwestFetcher::new(&config)?;
    let mut pipeline = Pipeline::new(COMPETITORS, fetcher, ThreadPacer, config.request_delay);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Persisting the records is handled by a separate loader.
    let _events = pipeline.run(&mut out)?;
    Ok(())
}
