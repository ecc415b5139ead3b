//! Status snapshot — the full payload returned by one `GET /status` poll.

mod field;

pub use field::SnapshotField;

use serde::{Deserialize, Serialize};

use crate::control::ControlState;

/// Raw sensor readings reported by the terrarium.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    /// Relative air humidity in percent.
    pub humidity: f64,
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Light intensity in lux.
    pub lux: f64,
    /// Raw soil ADC reading, when the server forwards it. Integer or float.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<f64>,
}

/// Sensor readings, derived status labels and actuator states of one poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub terrarium_condition: String,
    pub terrarium_message: String,
    /// Soil moisture in percent, `0..=100`.
    pub soil_moisture_percent: f64,
    pub soil_status: String,
    pub sensor_data: SensorReadings,
    pub humidity_status: String,
    pub temp_status: String,
    pub light_status: String,
    pub control_data: ControlState,
}

impl StatusSnapshot {
    /// Display text for one field, without any unit suffix.
    #[must_use]
    pub fn field_text(&self, field: SnapshotField) -> String {
        match field {
            SnapshotField::TerrariumCondition => self.terrarium_condition.clone(),
            SnapshotField::TerrariumMessage => self.terrarium_message.clone(),
            SnapshotField::SoilMoisturePercent => format_number(self.soil_moisture_percent),
            SnapshotField::SoilStatus => self.soil_status.clone(),
            SnapshotField::Humidity => format_number(self.sensor_data.humidity),
            SnapshotField::HumidityStatus => self.humidity_status.clone(),
            SnapshotField::Temperature => format_number(self.sensor_data.temperature),
            SnapshotField::TempStatus => self.temp_status.clone(),
            SnapshotField::Lux => format_number(self.sensor_data.lux),
            SnapshotField::LightStatus => self.light_status.clone(),
        }
    }
}

/// Shortest representation of a reading: `45` rather than `45.0`.
fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::ActuatorState;

    const STATUS_BODY: &str = r#"{
        "sensor_data": {"temperature": 24.5, "humidity": 72.0, "lux": 350.0, "soil": 2300},
        "control_data": {"lamp": "ON", "servo": "OFF", "threshold": 2500},
        "soil_status": "Optimal",
        "soil_moisture_percent": 43.8,
        "humidity_status": "Optimal",
        "temp_status": "Optimal",
        "light_status": "Optimal",
        "terrarium_condition": "Optimal",
        "terrarium_message": "Terrarium Anda dalam kondisi baik."
    }"#;

    #[test]
    fn should_parse_server_status_body() {
        let snapshot: StatusSnapshot = serde_json::from_str(STATUS_BODY).unwrap();
        assert_eq!(snapshot.terrarium_condition, "Optimal");
        assert_eq!(snapshot.sensor_data.soil, Some(2300.0));
        assert_eq!(
            snapshot.control_data.get("lamp"),
            Some(ActuatorState::On)
        );
    }

    #[test]
    fn should_parse_body_without_raw_soil_reading() {
        let body = STATUS_BODY.replace(r#", "soil": 2300"#, "");
        let snapshot: StatusSnapshot = serde_json::from_str(&body).unwrap();
        assert_eq!(snapshot.sensor_data.soil, None);
    }

    #[test]
    fn should_parse_fractional_raw_soil_reading() {
        let body = STATUS_BODY.replace(r#""soil": 2300"#, r#""soil": 2300.0"#);
        let snapshot: StatusSnapshot = serde_json::from_str(&body).unwrap();
        assert_eq!(snapshot.sensor_data.soil, Some(2300.0));
        assert_eq!(snapshot.control_data.get("lamp"), Some(ActuatorState::On));
    }

    #[test]
    fn should_reject_body_missing_control_data() {
        let result = serde_json::from_str::<StatusSnapshot>(r#"{"terrarium_condition": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_format_whole_numbers_without_fraction() {
        let snapshot: StatusSnapshot = serde_json::from_str(STATUS_BODY).unwrap();
        assert_eq!(snapshot.field_text(SnapshotField::Humidity), "72");
        assert_eq!(snapshot.field_text(SnapshotField::Lux), "350");
    }

    #[test]
    fn should_format_fractional_numbers() {
        let snapshot: StatusSnapshot = serde_json::from_str(STATUS_BODY).unwrap();
        assert_eq!(snapshot.field_text(SnapshotField::Temperature), "24.5");
        assert_eq!(
            snapshot.field_text(SnapshotField::SoilMoisturePercent),
            "43.8"
        );
    }

    #[test]
    fn should_return_labels_verbatim() {
        let snapshot: StatusSnapshot = serde_json::from_str(STATUS_BODY).unwrap();
        assert_eq!(
            snapshot.field_text(SnapshotField::TerrariumMessage),
            "Terrarium Anda dalam kondisi baik."
        );
        assert_eq!(snapshot.field_text(SnapshotField::LightStatus), "Optimal");
    }
}
