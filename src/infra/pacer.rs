use std::thread;
use std::time::Duration;

use crate::app::ports::Pacer;

/// Sleeps the calling thread; not cancellable.
#[derive(Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}
