//! Actuator state — the two-valued `ON` / `OFF` setting of a controllable output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of the lamp actuator.
pub const LAMP: &str = "lamp";
/// Name of the watering/feeding servo actuator.
pub const SERVO: &str = "servo";

/// Discrete state of an actuator as exchanged with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActuatorState {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl ActuatorState {
    /// The logical complement of this state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// State to request when the user toggles an actuator whose last known
    /// state is `cached`.
    ///
    /// Only a known `On` turns into `Off`; an `Off` or missing state asks for `On`.
    #[must_use]
    pub fn next_requested(cached: Option<Self>) -> Self {
        cached.map_or(Self::On, Self::toggled)
    }

    /// Whether the actuator is currently switched on.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Wire representation (`"ON"` / `"OFF"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }
}

impl std::fmt::Display for ActuatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActuatorState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON" => Ok(Self::On),
            "OFF" => Ok(Self::Off),
            other => Err(DomainError::UnknownActuatorState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_toggle_on_to_off_and_back() {
        assert_eq!(ActuatorState::On.toggled(), ActuatorState::Off);
        assert_eq!(ActuatorState::Off.toggled(), ActuatorState::On);
    }

    #[test]
    fn should_request_off_when_cached_on() {
        assert_eq!(
            ActuatorState::next_requested(Some(ActuatorState::On)),
            ActuatorState::Off
        );
    }

    #[test]
    fn should_request_on_when_cached_off() {
        assert_eq!(
            ActuatorState::next_requested(Some(ActuatorState::Off)),
            ActuatorState::On
        );
    }

    #[test]
    fn should_request_on_when_state_unknown() {
        assert_eq!(ActuatorState::next_requested(None), ActuatorState::On);
    }

    #[test]
    fn should_serialize_as_uppercase_string() {
        assert_eq!(serde_json::to_string(&ActuatorState::On).unwrap(), "\"ON\"");
        assert_eq!(
            serde_json::to_string(&ActuatorState::Off).unwrap(),
            "\"OFF\""
        );
    }

    #[test]
    fn should_reject_lowercase_on_parse() {
        let result = "on".parse::<ActuatorState>();
        assert_eq!(
            result,
            Err(DomainError::UnknownActuatorState("on".to_string()))
        );
    }

    #[test]
    fn should_parse_wire_values() {
        assert_eq!("ON".parse::<ActuatorState>(), Ok(ActuatorState::On));
        assert_eq!("OFF".parse::<ActuatorState>(), Ok(ActuatorState::Off));
    }

    #[test]
    fn should_display_wire_value() {
        assert_eq!(ActuatorState::Off.to_string(), "OFF");
    }
}
