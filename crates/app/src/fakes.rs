//! In-memory port implementations shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::future::Future;
use std::time::Duration;

use terrarium_domain::actuator::ActuatorState;
use terrarium_domain::control::{ControlCommand, ControlState};
use terrarium_domain::layout::DashboardLayout;
use terrarium_domain::snapshot::{SensorReadings, StatusSnapshot};

use crate::error::{DashboardError, RenderError};
use crate::ports::{DisplaySurface, TerrariumApi, Ticker};

/// Snapshot with healthy readings and the given lamp/servo states.
pub fn sample_snapshot(lamp: ActuatorState, servo: ActuatorState) -> StatusSnapshot {
    StatusSnapshot {
        terrarium_condition: "Optimal".to_string(),
        terrarium_message: "Terrarium Anda dalam kondisi baik.".to_string(),
        soil_moisture_percent: 43.8,
        soil_status: "Optimal".to_string(),
        sensor_data: SensorReadings {
            humidity: 72.0,
            temperature: 24.5,
            lux: 350.0,
            soil: Some(2300.0),
        },
        humidity_status: "Optimal".to_string(),
        temp_status: "Optimal".to_string(),
        light_status: "Optimal".to_string(),
        control_data: ControlState::from_actuators([("lamp", lamp), ("servo", servo)]),
    }
}

/// Scripted server.
#[derive(Default)]
pub struct FakeApi {
    statuses: RefCell<VecDeque<Result<StatusSnapshot, DashboardError>>>,
    fallback: RefCell<Option<StatusSnapshot>>,
    status_calls: Cell<usize>,
    status_delay: Cell<Option<Duration>>,
    commands: RefCell<Vec<serde_json::Value>>,
    command_failure: RefCell<Option<DashboardError>>,
}

impl FakeApi {
    /// Queue the answer to one status request.
    pub fn push_status(&self, result: Result<StatusSnapshot, DashboardError>) {
        self.statuses.borrow_mut().push_back(result);
    }

    /// Answer every status request with `snapshot` once the queue is empty.
    pub fn repeat_status(&self, snapshot: StatusSnapshot) {
        *self.fallback.borrow_mut() = Some(snapshot);
    }

    /// Answer status requests only after `delay` of (tokio) time.
    pub fn delay_status(&self, delay: Duration) {
        self.status_delay.set(Some(delay));
    }

    /// Make every control request fail with `err`.
    pub fn fail_commands(&self, err: DashboardError) {
        *self.command_failure.borrow_mut() = Some(err);
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.get()
    }

    /// Bodies of every control request, as JSON.
    pub fn commands(&self) -> Vec<serde_json::Value> {
        self.commands.borrow().clone()
    }
}

impl TerrariumApi for FakeApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DashboardError>> {
        self.status_calls.set(self.status_calls.get() + 1);
        let queued = self.statuses.borrow_mut().pop_front();
        let result = queued.unwrap_or_else(|| {
            self.fallback
                .borrow()
                .clone()
                .ok_or_else(|| DashboardError::Transport("no response scripted".to_string()))
        });
        let delay = self.status_delay.get();
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            result
        }
    }

    fn update_control(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<serde_json::Value, DashboardError>> {
        self.commands
            .borrow_mut()
            .push(serde_json::to_value(command).unwrap());
        let result = match self.command_failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(serde_json::json!({"status": "success"})),
        };
        async move { result }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeElement {
    pub text: String,
    pub classes: BTreeSet<String>,
}

/// Page holding a fixed set of elements.
#[derive(Default)]
pub struct FakeDisplay {
    elements: RefCell<BTreeMap<String, FakeElement>>,
}

impl FakeDisplay {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), FakeElement::default()))
            .collect();
        Self {
            elements: RefCell::new(elements),
        }
    }

    /// Page containing every element of `layout`.
    pub fn for_layout(layout: &DashboardLayout) -> Self {
        let text = layout.text.iter().map(|b| b.element_id.clone());
        let buttons = layout.buttons.iter().map(|b| b.element_id.clone());
        Self::with_elements(text.chain(buttons))
    }

    pub fn remove(&self, element_id: &str) {
        self.elements.borrow_mut().remove(element_id);
    }

    pub fn text(&self, element_id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(element_id)
            .map(|el| el.text.clone())
    }

    pub fn classes(&self, element_id: &str) -> Option<BTreeSet<String>> {
        self.elements
            .borrow()
            .get(element_id)
            .map(|el| el.classes.clone())
    }

    pub fn has_class(&self, element_id: &str, class: &str) -> bool {
        self.classes(element_id)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn snapshot(&self) -> BTreeMap<String, FakeElement> {
        self.elements.borrow().clone()
    }
}

impl DisplaySurface for FakeDisplay {
    fn set_text(&self, element_id: &str, text: &str) -> Result<(), RenderError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(element_id)
            .ok_or_else(|| RenderError::MissingElement(element_id.to_string()))?;
        element.text = text.to_string();
        Ok(())
    }

    fn set_class(&self, element_id: &str, class: &str, present: bool) -> Result<(), RenderError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(element_id)
            .ok_or_else(|| RenderError::MissingElement(element_id.to_string()))?;
        if present {
            element.classes.insert(class.to_string());
        } else {
            element.classes.remove(class);
        }
        Ok(())
    }
}

/// Ticker backed by a tokio interval whose first tick is one period away.
pub struct TokioTicker(tokio::time::Interval);

impl TokioTicker {
    pub fn new(period: Duration) -> Self {
        let start = tokio::time::Instant::now() + period;
        Self(tokio::time::interval_at(start, period))
    }
}

impl Ticker for TokioTicker {
    fn tick(&mut self) -> impl Future<Output = ()> {
        async move {
            self.0.tick().await;
        }
    }
}
