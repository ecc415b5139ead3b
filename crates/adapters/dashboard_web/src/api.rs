//! HTTP API client wrapping `gloo-net` for calls to the terrarium server.

use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use terrarium_app::config::ApiConfig;
use terrarium_app::error::DashboardError;
use terrarium_app::ports::TerrariumApi;
use terrarium_domain::control::ControlCommand;
use terrarium_domain::snapshot::StatusSnapshot;

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Map a `gloo-net` failure onto the dashboard error kinds.
fn classify(err: gloo_net::Error) -> DashboardError {
    match err {
        gloo_net::Error::SerdeError(err) => DashboardError::Decode(err.to_string()),
        other => DashboardError::Transport(other.to_string()),
    }
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, DashboardError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {status}"),
    };
    Err(DashboardError::Status { status, message })
}

/// Decode the answer to a control request.
///
/// A non-2xx answer with a JSON body becomes [`DashboardError::Rejected`] so
/// the dispatcher logs what the server said.
async fn control_response(resp: Response) -> Result<serde_json::Value, DashboardError> {
    if resp.ok() {
        return resp.json::<serde_json::Value>().await.map_err(classify);
    }
    let status = resp.status();
    match resp.json::<serde_json::Value>().await {
        Ok(body) => Err(DashboardError::Rejected { status, body }),
        Err(_) => Err(DashboardError::Status {
            status,
            message: format!("HTTP {status}"),
        }),
    }
}

/// [`TerrariumApi`] backed by the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    status_url: String,
    control_url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            status_url: config.status_url.clone(),
            control_url: config.control_url.clone(),
        }
    }
}

impl TerrariumApi for HttpApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, DashboardError>> {
        async move {
            let resp = Request::get(&self.status_url)
                .send()
                .await
                .map_err(classify)?;
            let resp = check_response(resp).await?;
            resp.json::<StatusSnapshot>().await.map_err(classify)
        }
    }

    fn update_control(
        &self,
        command: &ControlCommand,
    ) -> impl Future<Output = Result<serde_json::Value, DashboardError>> {
        let request = Request::post(&self.control_url)
            .json(command)
            .map_err(|err| DashboardError::Encode(err.to_string()));
        async move {
            let resp = request?.send().await.map_err(classify)?;
            control_response(resp).await
        }
    }
}
