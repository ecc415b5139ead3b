//! Domain error types.

/// Errors raised while building or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A control command must carry at least one actuator.
    #[error("control command has no actuators")]
    EmptyCommand,

    /// An actuator name was empty.
    #[error("actuator name must not be empty")]
    EmptyActuatorName,

    /// A string that is neither `ON` nor `OFF`.
    #[error("unknown actuator state {0:?}")]
    UnknownActuatorState(String),

    /// A snapshot field name that the layout does not know about.
    #[error("unknown snapshot field {0:?}")]
    UnknownField(String),
}
