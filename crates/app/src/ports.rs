//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world
//! (the HTTP server, the page, the timer). The client runs on a single
//! cooperative thread, so none of the futures here are required to be `Send`.

pub mod api;
pub mod display;
pub mod ticker;

pub use api::TerrariumApi;
pub use display::DisplaySurface;
pub use ticker::Ticker;
