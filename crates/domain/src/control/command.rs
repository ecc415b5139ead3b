//! Control command — the partial actuator update posted to the server.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::actuator::ActuatorState;
use crate::error::DomainError;

/// Desired states for one or more actuators.
///
/// Serializes as a flat JSON object, e.g. `{"lamp":"ON"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ControlCommand(BTreeMap<String, ActuatorState>);

impl ControlCommand {
    /// Command for a single actuator.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyActuatorName`] if `actuator` is empty.
    pub fn single(actuator: impl Into<String>, state: ActuatorState) -> Result<Self, DomainError> {
        Self::new([(actuator, state)])
    }

    /// Command for several actuators at once.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCommand`] when no pair is given, or
    /// [`DomainError::EmptyActuatorName`] when a name is empty.
    pub fn new<I, K>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, ActuatorState)>,
        K: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (name, state) in pairs {
            let name = name.into();
            if name.is_empty() {
                return Err(DomainError::EmptyActuatorName);
            }
            entries.insert(name, state);
        }
        if entries.is_empty() {
            return Err(DomainError::EmptyCommand);
        }
        Ok(Self(entries))
    }

    /// Requested state for `actuator`, if part of this command.
    #[must_use]
    pub fn get(&self, actuator: &str) -> Option<ActuatorState> {
        self.0.get(actuator).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ActuatorState)> {
        self.0.iter().map(|(name, state)| (name.as_str(), *state))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: construction rejects empty commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_single_actuator_as_flat_object() {
        let cmd = ControlCommand::single("lamp", ActuatorState::On).unwrap();
        assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"{"lamp":"ON"}"#);
    }

    #[test]
    fn should_serialize_multiple_actuators() {
        let cmd = ControlCommand::new([
            ("servo", ActuatorState::Off),
            ("lamp", ActuatorState::On),
        ])
        .unwrap();
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            serde_json::json!({"lamp": "ON", "servo": "OFF"})
        );
        assert_eq!(cmd.len(), 2);
    }

    #[test]
    fn should_reject_empty_command() {
        let result = ControlCommand::new(Vec::<(String, ActuatorState)>::new());
        assert_eq!(result, Err(DomainError::EmptyCommand));
    }

    #[test]
    fn should_reject_empty_actuator_name() {
        let result = ControlCommand::single("", ActuatorState::On);
        assert_eq!(result, Err(DomainError::EmptyActuatorName));
    }

    #[test]
    fn should_expose_requested_state() {
        let cmd = ControlCommand::single("servo", ActuatorState::On).unwrap();
        assert_eq!(cmd.get("servo"), Some(ActuatorState::On));
        assert_eq!(cmd.get("lamp"), None);
        assert_eq!(cmd.iter().collect::<Vec<_>>(), vec![("servo", ActuatorState::On)]);
    }
}
