//! Application services (use-cases).

pub mod dashboard;
pub mod dispatcher;
pub mod poller;
pub mod renderer;

pub use dashboard::Dashboard;
pub use poller::run_polling;
pub use renderer::{RenderReport, render_button};
