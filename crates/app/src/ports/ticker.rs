//! Ticker port — the polling clock.

use std::future::Future;

/// Source of periodic ticks.
///
/// `tick` resolves once per interval. The first call must wait a full
/// interval: the poller issues its immediate startup poll on its own.
///
/// The poller may drop a pending `tick` future when a poll completes first,
/// so dropping it must not lose the tick.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = ()>;
}
