//! Control data — the actuator states the server reports and the commands the
//! client sends back.

mod command;
mod state;

pub use command::ControlCommand;
pub use state::ControlState;
