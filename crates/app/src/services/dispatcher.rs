//! Command dispatcher — turns button clicks into control commands.

use terrarium_domain::actuator::ActuatorState;
use terrarium_domain::control::ControlCommand;

use crate::error::DashboardError;
use crate::ports::{DisplaySurface, TerrariumApi};
use crate::services::dashboard::Dashboard;

impl<A, D> Dashboard<A, D>
where
    A: TerrariumApi,
    D: DisplaySurface,
{
    /// Post a command to the server and log the outcome.
    ///
    /// Nothing is retried and the page is not updated; the next poll shows
    /// whether the server applied the command.
    ///
    /// # Errors
    ///
    /// Returns the [`DashboardError`] reported by the API port.
    pub async fn send_command(
        &self,
        command: &ControlCommand,
    ) -> Result<serde_json::Value, DashboardError> {
        match self.api.update_control(command).await {
            Ok(body) => {
                tracing::info!(%body, "control success");
                Ok(body)
            }
            Err(err) => {
                tracing::error!(error = %err, "control error");
                Err(err)
            }
        }
    }

    /// Request the complement of the cached state of `actuator`.
    ///
    /// The cached state only changes on the next successful poll, so toggling
    /// twice in between requests the same state twice.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Domain`] for an empty actuator name, or the
    /// error reported by the API port.
    pub async fn toggle(&self, actuator: &str) -> Result<ControlCommand, DashboardError> {
        let current = self.store.get(actuator);
        let next = ActuatorState::next_requested(current);
        tracing::info!(
            actuator,
            current = current.map_or("unknown", ActuatorState::as_str),
            next = %next,
            "toggling actuator"
        );

        let command = ControlCommand::single(actuator, next)?;
        self.send_command(&command).await?;
        Ok(command)
    }

    /// Handle a click on the button with id `element_id`.
    ///
    /// Returns `None` when the id is not bound to any actuator.
    ///
    /// # Errors
    ///
    /// See [`toggle`](Self::toggle).
    pub async fn click(&self, element_id: &str) -> Result<Option<ControlCommand>, DashboardError> {
        let Some(actuator) = self
            .layout
            .button(element_id)
            .map(|binding| binding.actuator.clone())
        else {
            tracing::warn!(element_id, "click on unbound button ignored");
            return Ok(None);
        };
        self.toggle(&actuator).await.map(Some)
    }
}
