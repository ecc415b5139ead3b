//! Status poller — periodic synchronization with the server.

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tokio::sync::watch;

use crate::error::DashboardError;
use crate::ports::{DisplaySurface, TerrariumApi, Ticker};
use crate::services::dashboard::Dashboard;
use crate::services::renderer::{RenderReport, render_snapshot};

impl<A, D> Dashboard<A, D>
where
    A: TerrariumApi,
    D: DisplaySurface,
{
    /// Fetch one snapshot, mirror its control data and render it.
    ///
    /// On failure the error is logged and returned; the control store and
    /// the page keep their previous content.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API port.
    pub async fn poll_once(&self) -> Result<RenderReport, DashboardError> {
        let snapshot = match self.api.fetch_status().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(error = %err, "error fetching status");
                return Err(err);
            }
        };

        self.store.replace(snapshot.control_data.clone());
        let report = render_snapshot(
            &self.display,
            &self.layout,
            &snapshot,
            &self.store.snapshot(),
            &self.active_class,
        );
        tracing::debug!(
            written = report.written,
            skipped = report.skipped.len(),
            "dashboard refreshed"
        );
        Ok(report)
    }
}

/// Poll immediately, then once per tick, until `shutdown` turns `true`.
///
/// Every tick starts a new poll even when earlier ones have not answered yet,
/// so a slow server never delays the schedule. Dropping the sender side of
/// `shutdown` stops the loop as well. Polls already in flight are allowed to
/// finish; poll errors never end the loop.
pub async fn run_polling<A, D, T>(
    dashboard: &Dashboard<A, D>,
    mut ticker: T,
    mut shutdown: watch::Receiver<bool>,
) where
    A: TerrariumApi,
    D: DisplaySurface,
    T: Ticker,
{
    if *shutdown.borrow_and_update() {
        return;
    }

    tracing::info!("status polling started");
    let mut in_flight = FuturesUnordered::new();
    in_flight.push(dashboard.poll_once());

    loop {
        tokio::select! {
            biased;
            _ = shutdown.wait_for(|stop| *stop) => break,
            () = ticker.tick() => {
                if !in_flight.is_empty() {
                    tracing::debug!(in_flight = in_flight.len(), "previous poll still pending");
                }
                in_flight.push(dashboard.poll_once());
            }
            Some(_) = in_flight.next(), if !in_flight.is_empty() => {}
        }
    }

    while in_flight.next().await.is_some() {}
    tracing::info!("status polling stopped");
}
