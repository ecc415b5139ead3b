//! Server API port — the two HTTP calls the dashboard makes.

use std::future::Future;

use terrarium_domain::control::ControlCommand;
use terrarium_domain::snapshot::StatusSnapshot;

use crate::error::DashboardError;

/// Access to the terrarium server.
///
/// Implemented by the browser adapter on top of `fetch`; tests provide
/// in-memory fakes.
pub trait TerrariumApi {
    /// `GET` the status endpoint and decode the snapshot.
    ///
    /// Transport failures, non-2xx responses and undecodable bodies are all
    /// reported as a [`DashboardError`].
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DashboardError>>;

    /// `POST` a command as JSON to the control endpoint.
    ///
    /// Returns the decoded response body, whatever its shape.
    fn update_control(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<serde_json::Value, DashboardError>>;
}

impl<T: TerrariumApi + ?Sized> TerrariumApi for &T {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DashboardError>> {
        (**self).fetch_status()
    }

    fn update_control(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<serde_json::Value, DashboardError>> {
        (**self).update_control(command)
    }
}
