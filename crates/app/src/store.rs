//! Control store — the client's single-owner cache of actuator states.

use std::cell::RefCell;

use terrarium_domain::actuator::ActuatorState;
use terrarium_domain::control::ControlState;

/// Last control state received from the server.
///
/// Overwritten wholesale by every successful poll and read by the command
/// dispatcher to compute toggles. Between a click and the next poll the cached
/// value is stale; that is expected.
///
/// Borrows never outlive a single method call, so they can't be held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct ControlStore {
    state: RefCell<ControlState>,
}

impl ControlStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cached state.
    pub fn replace(&self, state: ControlState) {
        *self.state.borrow_mut() = state;
    }

    /// Cached state of one actuator.
    #[must_use]
    pub fn get(&self, actuator: &str) -> Option<ActuatorState> {
        self.state.borrow().get(actuator)
    }

    /// Copy of the whole cached state.
    #[must_use]
    pub fn snapshot(&self) -> ControlState {
        self.state.borrow().clone()
    }
}
