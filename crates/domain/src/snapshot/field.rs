//! Names of the displayable snapshot fields.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A single value of a [`StatusSnapshot`](super::StatusSnapshot) that can be
/// bound to a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotField {
    TerrariumCondition,
    TerrariumMessage,
    SoilMoisturePercent,
    SoilStatus,
    Humidity,
    HumidityStatus,
    Temperature,
    TempStatus,
    Lux,
    LightStatus,
}

impl SnapshotField {
    /// Every field, in page order.
    pub const ALL: [Self; 10] = [
        Self::TerrariumCondition,
        Self::TerrariumMessage,
        Self::SoilMoisturePercent,
        Self::SoilStatus,
        Self::Humidity,
        Self::HumidityStatus,
        Self::Temperature,
        Self::TempStatus,
        Self::Lux,
        Self::LightStatus,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TerrariumCondition => "terrarium_condition",
            Self::TerrariumMessage => "terrarium_message",
            Self::SoilMoisturePercent => "soil_moisture_percent",
            Self::SoilStatus => "soil_status",
            Self::Humidity => "humidity",
            Self::HumidityStatus => "humidity_status",
            Self::Temperature => "temperature",
            Self::TempStatus => "temp_status",
            Self::Lux => "lux",
            Self::LightStatus => "light_status",
        }
    }
}

impl std::fmt::Display for SnapshotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
