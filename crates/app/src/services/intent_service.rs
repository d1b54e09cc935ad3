//! Intent service — dispatch for the four assistant-platform intents.

use indexmap::IndexMap;

use homelink_domain::command::DeviceCommand;
use homelink_domain::intent::{
    CommandGroup, ExecuteRequestPayload, ExecuteResponsePayload, ExecuteResultEntry,
    QueryRequestPayload, QueryResponsePayload, SyncResponsePayload,
};

use crate::devices::Appliance;
use crate::ports::{HardwareOutput, StateReport, StateReporter};
use crate::registry::DeviceRegistry;

/// Dispatches intents onto the device registry and drives the downstream
/// state-report call.
///
/// Errors are always resolved to the smallest possible scope — one device
/// within a batch; one device's failure never aborts processing of its
/// siblings.
pub struct IntentService<H, R> {
    registry: DeviceRegistry<H>,
    reporter: R,
    agent_user_id: String,
}

impl<H, R> IntentService<H, R>
where
    H: HardwareOutput + Clone + Send + Sync + 'static,
    R: StateReporter,
{
    /// Create a service over a fixed registry and reporter.
    pub fn new(registry: DeviceRegistry<H>, reporter: R, agent_user_id: impl Into<String>) -> Self {
        Self {
            registry,
            reporter,
            agent_user_id: agent_user_id.into(),
        }
    }

    /// SYNC: enumerate every registry entry's discovery descriptor, in
    /// insertion order.
    #[must_use]
    pub fn sync(&self) -> SyncResponsePayload {
        SyncResponsePayload {
            agent_user_id: self.agent_user_id.clone(),
            devices: self.registry.iter().map(Appliance::sync).collect(),
        }
    }

    /// QUERY: resolve each requested id; unknown ids are logged and omitted
    /// from the response, never fabricated.
    pub async fn query(&self, payload: &QueryRequestPayload) -> QueryResponsePayload {
        let mut devices = IndexMap::new();
        for target in &payload.devices {
            match self.registry.get(&target.id) {
                Some(appliance) => {
                    devices.insert(target.id.clone(), appliance.state().await);
                }
                None => {
                    tracing::warn!(device = %target.id, "query for unknown device");
                }
            }
        }
        QueryResponsePayload { devices }
    }

    /// EXECUTE: process each command group sequentially, one device at a
    /// time; assemble the success bucket followed by per-device errors.
    #[tracing::instrument(skip_all, fields(groups = payload.commands.len()))]
    pub async fn execute(&self, payload: &ExecuteRequestPayload) -> ExecuteResponsePayload {
        let mut commands = Vec::new();
        for group in &payload.commands {
            self.execute_group(group, &mut commands).await;
        }
        ExecuteResponsePayload { commands }
    }

    /// DISCONNECT: no-op acknowledgment.
    pub fn disconnect(&self) {
        tracing::debug!("agent disconnected");
    }

    async fn execute_group(&self, group: &CommandGroup, commands: &mut Vec<ExecuteResultEntry>) {
        // Each group carries one command/params pair; only the first
        // execution entry is applied.
        let command = match group.execution.first() {
            Some(request) => match DeviceCommand::from_request(request) {
                Ok(command) => command,
                Err(err) => {
                    tracing::warn!(
                        command = %err.command,
                        reason = %err.reason,
                        "malformed command params"
                    );
                    let code = err.to_string();
                    commands.extend(
                        group
                            .devices
                            .iter()
                            .map(|target| ExecuteResultEntry::error(target.id.clone(), &code)),
                    );
                    return;
                }
            },
            None => None,
        };

        let mut success = ExecuteResultEntry::success_bucket();
        let mut errors = Vec::new();

        // Strictly sequential: one device's execute-then-report completes
        // before the next device begins.
        for target in &group.devices {
            let Some(appliance) = self.registry.get(&target.id) else {
                // Known skip: no success entry, no error entry.
                tracing::warn!(device = %target.id, "execute for unknown device");
                continue;
            };
            match appliance.execute(command.as_ref()).await {
                Ok(()) => {
                    let state = appliance.state().await;
                    success.ids.push(target.id.clone());
                    // The bucket carries one shared states payload; the
                    // most recently processed device wins.
                    success.states = Some(state.clone());

                    let report = StateReport::single(
                        self.agent_user_id.clone(),
                        uuid::Uuid::new_v4().to_string(),
                        target.id.clone(),
                        state,
                    );
                    if let Err(err) = self.reporter.report(report).await {
                        tracing::warn!(device = %target.id, error = %err, "state report failed");
                    }
                }
                Err(err) => {
                    tracing::warn!(device = %target.id, error = %err, "execute failed");
                    errors.push(ExecuteResultEntry::error(target.id.clone(), &err.to_string()));
                }
            }
        }

        if !success.ids.is_empty() {
            commands.push(success);
        }
        commands.extend(errors);
    }
}
