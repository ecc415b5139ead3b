//! Click listeners for the actuator buttons.

use std::rc::Rc;

use terrarium_app::ports::{DisplaySurface, TerrariumApi};
use terrarium_app::services::Dashboard;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::DomSurface;

type ClickHandler = Closure<dyn FnMut(web_sys::Event)>;

/// Guard that removes the click listeners on drop.
pub struct ClickListeners {
    attached: Vec<(Element, ClickHandler)>,
}

impl Drop for ClickListeners {
    fn drop(&mut self) {
        for (element, handler) in &self.attached {
            let _ = element
                .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
        }
    }
}

/// Attach a click handler to every bound button found on the page.
///
/// Each click toggles the button's actuator from the cached control state.
/// Buttons missing from the page are logged and skipped.
pub fn attach<A, D>(surface: &DomSurface, dashboard: &Rc<Dashboard<A, D>>) -> ClickListeners
where
    A: TerrariumApi + 'static,
    D: DisplaySurface + 'static,
{
    let mut attached = Vec::new();

    for binding in &dashboard.layout().buttons {
        let element = match surface.element(&binding.element_id) {
            Ok(element) => element,
            Err(err) => {
                tracing::warn!(error = %err, "button not on page, click handler skipped");
                continue;
            }
        };

        let dash = Rc::clone(dashboard);
        let element_id = binding.element_id.clone();
        let handler = ClickHandler::new(move |_: web_sys::Event| {
            let dash = Rc::clone(&dash);
            let element_id = element_id.clone();
            spawn_local(async move {
                // Failures are already logged by the dispatcher.
                let _ = dash.click(&element_id).await;
            });
        });

        match element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref()) {
            Ok(()) => attached.push((element, handler)),
            Err(err) => {
                tracing::warn!(
                    element_id = %binding.element_id,
                    error = ?err,
                    "failed to add click listener"
                );
            }
        }
    }

    ClickListeners { attached }
}
