//! Polling clock backed by `setInterval`.

use std::future::Future;

use futures_util::StreamExt;
use gloo_timers::future::IntervalStream;
use terrarium_app::ports::Ticker;

/// [`Ticker`] firing every `millis` milliseconds, first after one full period.
pub struct IntervalTicker {
    stream: IntervalStream,
}

impl IntervalTicker {
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self {
            stream: IntervalStream::new(millis),
        }
    }
}

impl Ticker for IntervalTicker {
    fn tick(&mut self) -> impl Future<Output = ()> {
        async move {
            // The stream never ends while the interval is alive.
            self.stream.next().await;
        }
    }
}
