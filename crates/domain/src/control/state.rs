//! Control state — the client-side mirror of the server's `control_data`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::actuator::ActuatorState;

/// Last known actuator states, as reported by the server.
///
/// The server keeps non-actuator settings (e.g. the soil `threshold`) in the
/// same JSON object. Any entry whose value is not exactly `"ON"` or `"OFF"`
/// lands in [`settings`](Self::settings) and is never treated as an actuator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, Value>")]
pub struct ControlState {
    actuators: BTreeMap<String, ActuatorState>,
    settings: BTreeMap<String, Value>,
}

impl ControlState {
    /// Build a state holding only the given actuators.
    pub fn from_actuators<I, K>(actuators: I) -> Self
    where
        I: IntoIterator<Item = (K, ActuatorState)>,
        K: Into<String>,
    {
        Self {
            actuators: actuators
                .into_iter()
                .map(|(name, state)| (name.into(), state))
                .collect(),
            settings: BTreeMap::new(),
        }
    }

    /// State of a single actuator, if the server reported it.
    #[must_use]
    pub fn get(&self, actuator: &str) -> Option<ActuatorState> {
        self.actuators.get(actuator).copied()
    }

    /// All known actuators and their states.
    #[must_use]
    pub fn actuators(&self) -> &BTreeMap<String, ActuatorState> {
        &self.actuators
    }

    /// Non-actuator entries of `control_data`.
    #[must_use]
    pub fn settings(&self) -> &BTreeMap<String, Value> {
        &self.settings
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actuators.is_empty() && self.settings.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for ControlState {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut state = Self::default();
        for (name, value) in raw {
            match value.as_str().and_then(|s| s.parse::<ActuatorState>().ok()) {
                Some(actuator) => {
                    state.actuators.insert(name, actuator);
                }
                None => {
                    state.settings.insert(name, value);
                }
            }
        }
        state
    }
}

impl From<ControlState> for BTreeMap<String, Value> {
    fn from(state: ControlState) -> Self {
        let mut raw = state.settings;
        for (name, actuator) in state.actuators {
            raw.insert(name, Value::String(actuator.as_str().to_string()));
        }
        raw
    }
}
