//! Rendering of a snapshot onto the page.

use terrarium_domain::actuator::ActuatorState;
use terrarium_domain::control::ControlState;
use terrarium_domain::layout::DashboardLayout;
use terrarium_domain::snapshot::StatusSnapshot;

use crate::error::RenderError;
use crate::ports::DisplaySurface;

/// Outcome of rendering one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Number of text elements updated.
    pub written: usize,
    /// Ids of text elements that could not be updated.
    pub skipped: Vec<String>,
}

/// Reflect an actuator state on its button.
///
/// The `active_class` is present exactly when `state` is `On`. A button
/// missing from the page is silently ignored. Applying the same state twice
/// leaves the element as after the first call.
pub fn render_button<D: DisplaySurface>(
    display: &D,
    element_id: &str,
    active_class: &str,
    state: Option<ActuatorState>,
) {
    let active = state.is_some_and(ActuatorState::is_on);
    match display.set_class(element_id, active_class, active) {
        Ok(()) | Err(RenderError::MissingElement(_)) => {}
        Err(err) => tracing::warn!(element_id, error = %err, "failed to update button"),
    }
}

/// Write every text binding, then every button, for one snapshot.
///
/// A text element that cannot be written is logged and skipped; the
/// remaining bindings are still rendered.
pub fn render_snapshot<D: DisplaySurface>(
    display: &D,
    layout: &DashboardLayout,
    snapshot: &StatusSnapshot,
    controls: &ControlState,
    active_class: &str,
) -> RenderReport {
    let mut report = RenderReport::default();

    for binding in &layout.text {
        let mut text = snapshot.field_text(binding.field);
        if let Some(suffix) = &binding.suffix {
            text.push_str(suffix);
        }
        match display.set_text(&binding.element_id, &text) {
            Ok(()) => report.written += 1,
            Err(err) => {
                tracing::warn!(
                    element_id = %binding.element_id,
                    field = %binding.field,
                    error = %err,
                    "skipping dashboard element"
                );
                report.skipped.push(binding.element_id.clone());
            }
        }
    }

    for button in &layout.buttons {
        render_button(
            display,
            &button.element_id,
            active_class,
            controls.get(&button.actuator),
        );
    }

    report
}
