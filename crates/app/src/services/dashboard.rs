//! Dashboard service — owns the ports, the control store and the layout.
//!
//! The poller lives in [`poller`](super::poller), the command dispatcher in
//! [`dispatcher`](super::dispatcher); both are `impl` blocks on [`Dashboard`].

use terrarium_domain::control::ControlState;
use terrarium_domain::layout::DashboardLayout;

use crate::config::DashboardConfig;
use crate::ports::{DisplaySurface, TerrariumApi};
use crate::store::ControlStore;

/// The dashboard client.
///
/// Share it between the poll loop and click handlers behind an `Rc`; every
/// method takes `&self`.
pub struct Dashboard<A, D> {
    pub(super) api: A,
    pub(super) display: D,
    pub(super) store: ControlStore,
    pub(super) layout: DashboardLayout,
    pub(super) active_class: String,
}

impl<A, D> Dashboard<A, D>
where
    A: TerrariumApi,
    D: DisplaySurface,
{
    /// Create a dashboard with an empty control store.
    #[must_use]
    pub fn new(api: A, display: D, layout: DashboardLayout, active_class: impl Into<String>) -> Self {
        Self {
            api,
            display,
            store: ControlStore::new(),
            layout,
            active_class: active_class.into(),
        }
    }

    /// Create a dashboard from the layout and styling of `config`.
    #[must_use]
    pub fn from_config(api: A, display: D, config: &DashboardConfig) -> Self {
        Self::new(api, display, config.layout(), config.display.active_class.clone())
    }

    /// Page bindings in use.
    #[must_use]
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Copy of the cached control state.
    #[must_use]
    pub fn control_state(&self) -> ControlState {
        self.store.snapshot()
    }
}
