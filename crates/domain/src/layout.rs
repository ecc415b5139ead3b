//! Display layout — which snapshot value or actuator is shown in which page
//! element.
//!
//! Adding a sensor or actuator to the page is a change to this data, not to
//! the rendering code.

use serde::{Deserialize, Serialize};

use crate::actuator::{LAMP, SERVO};
use crate::snapshot::SnapshotField;

/// Element that shows the text of one snapshot field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBinding {
    pub element_id: String,
    pub field: SnapshotField,
    /// Unit appended to the value (e.g. `%`, `°C`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl TextBinding {
    #[must_use]
    pub fn new(element_id: impl Into<String>, field: SnapshotField) -> Self {
        Self {
            element_id: element_id.into(),
            field,
            suffix: None,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Button that mirrors and toggles one actuator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBinding {
    pub element_id: String,
    pub actuator: String,
}

impl ButtonBinding {
    #[must_use]
    pub fn new(element_id: impl Into<String>, actuator: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            actuator: actuator.into(),
        }
    }
}

/// Complete mapping between snapshot data and page elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub text: Vec<TextBinding>,
    pub buttons: Vec<ButtonBinding>,
}

impl DashboardLayout {
    /// Button bound to `element_id`, if any.
    #[must_use]
    pub fn button(&self, element_id: &str) -> Option<&ButtonBinding> {
        self.buttons.iter().find(|b| b.element_id == element_id)
    }

    /// Text bindings shipped with the stock dashboard page.
    #[must_use]
    pub fn default_text() -> Vec<TextBinding> {
        use SnapshotField as F;

        vec![
            TextBinding::new("terrarium-condition", F::TerrariumCondition),
            TextBinding::new("terrarium-message", F::TerrariumMessage),
            TextBinding::new("soil-moisture-percent", F::SoilMoisturePercent).with_suffix("%"),
            TextBinding::new("soil-status", F::SoilStatus),
            TextBinding::new("humidity-value", F::Humidity).with_suffix("%"),
            TextBinding::new("humidity-status", F::HumidityStatus),
            TextBinding::new("temp-value", F::Temperature).with_suffix("°C"),
            TextBinding::new("temp-status", F::TempStatus),
            TextBinding::new("light-value", F::Lux).with_suffix(" Lux"),
            TextBinding::new("light-status", F::LightStatus),
        ]
    }

    /// Button bindings shipped with the stock dashboard page.
    ///
    /// Watering and feeding both drive the same servo.
    #[must_use]
    pub fn default_buttons() -> Vec<ButtonBinding> {
        vec![
            ButtonBinding::new("all-lamp-btn", LAMP),
            ButtonBinding::new("manual-water-btn", SERVO),
            ButtonBinding::new("feed-btn", SERVO),
        ]
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            text: Self::default_text(),
            buttons: Self::default_buttons(),
        }
    }
}
