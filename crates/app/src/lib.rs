//! # terrarium-app
//!
//! Application layer — dashboard use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `TerrariumApi` — fetch the status snapshot, post control commands
//!   - `DisplaySurface` — write text and the active marker into page elements
//!   - `Ticker` — fire once per polling interval
//! - Define the **use-cases**, all hanging off [`services::Dashboard`]:
//!   - status poller — fetch, mirror control state, render
//!   - button renderer — reflect an actuator state on its button
//!   - command dispatcher — toggle an actuator from the cached state
//! - Hold the client-side [`store::ControlStore`]
//! - Load the dashboard [`config::DashboardConfig`]
//!
//! ## Dependency rule
//! Depends on `terrarium-domain` only (plus `tokio::sync` for the shutdown
//! signal and `toml` for the config). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod config;
pub mod error;
pub mod ports;
pub mod services;
pub mod store;

#[cfg(test)]
pub(crate) mod fakes;
