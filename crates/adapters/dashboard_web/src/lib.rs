//! # terrarium-dashboard-web
//!
//! Browser composition root. Binds the dashboard use-cases to the server page:
//! `gloo-net` for HTTP, `web-sys` for the DOM, `gloo-timers` for the polling
//! clock.

use std::cell::RefCell;
use std::rc::Rc;

use terrarium_app::services::{Dashboard, run_polling};
use tokio::sync::watch;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

pub mod api;
pub mod controls;
pub mod dom;
pub mod timer;

use api::HttpApi;
use controls::ClickListeners;
use dom::DomSurface;
use timer::IntervalTicker;

/// The dashboard wired to the live page.
pub type WebDashboard = Dashboard<HttpApi, DomSurface>;

/// Keeps a running dashboard alive. Dropping it stops polling and detaches
/// the click handlers; requests already in flight still complete.
pub struct DashboardHandle {
    stop: watch::Sender<bool>,
    _listeners: ClickListeners,
}

impl Drop for DashboardHandle {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

thread_local! {
    static RUNNING: RefCell<Option<DashboardHandle>> = const { RefCell::new(None) };
}

/// Build the dashboard for `document` and start polling.
pub fn start(document: &Document) -> DashboardHandle {
    let config = dom::load_config(document);
    let surface = DomSurface::new(document.clone());
    let dashboard: Rc<WebDashboard> = Rc::new(Dashboard::from_config(
        HttpApi::new(&config.api),
        surface.clone(),
        &config,
    ));

    let listeners = controls::attach(&surface, &dashboard);

    let (stop, shutdown) = watch::channel(false);
    let ticker = IntervalTicker::new(config.polling.interval_ms);
    spawn_local(async move {
        run_polling(dashboard.as_ref(), ticker, shutdown).await;
    });

    DashboardHandle {
        stop,
        _listeners: listeners,
    }
}

/// Entry point: set up console logging and start the dashboard once the
/// document has been parsed.
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available, dashboard not started");
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || install(&doc));
        if let Err(err) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("failed to wait for DOMContentLoaded: {err:?}");
        }
    } else {
        install(&document);
    }
}

fn install(document: &Document) {
    let handle = start(document);
    RUNNING.with(|running| {
        *running.borrow_mut() = Some(handle);
    });
}

/// Stop polling and detach the click handlers.
#[wasm_bindgen]
pub fn stop_dashboard() {
    let handle = RUNNING.with(|running| running.borrow_mut().take());
    drop(handle);
}
