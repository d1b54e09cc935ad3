//! Fulfillment handler — `POST /smarthome`.
//!
//! Unwraps the platform envelope, dispatches the first input's intent, and
//! wraps the service result back into a response envelope.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use homelink_app::ports::{HardwareOutput, StateReporter};
use homelink_domain::intent::{ExecuteRequestPayload, QueryRequestPayload};

use crate::error::ApiError;
use crate::state::AppState;

/// Request envelope sent by the platform: one intent call per request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentRequest {
    pub request_id: String,
    pub inputs: Vec<IntentInput>,
}

/// One intent input, dispatched on its `intent` tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "intent", content = "payload")]
pub enum IntentInput {
    #[serde(rename = "action.devices.SYNC")]
    Sync,
    #[serde(rename = "action.devices.QUERY")]
    Query(QueryRequestPayload),
    #[serde(rename = "action.devices.EXECUTE")]
    Execute(ExecuteRequestPayload),
    #[serde(rename = "action.devices.DISCONNECT")]
    Disconnect,
}

/// Response envelope: the request id echoed back plus the intent payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentResponse {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// `POST /smarthome`
pub async fn handle<H, R>(
    State(state): State<AppState<H, R>>,
    Json(request): Json<FulfillmentRequest>,
) -> Result<Json<FulfillmentResponse>, ApiError>
where
    H: HardwareOutput + Clone + Send + Sync + 'static,
    R: StateReporter + Send + Sync + 'static,
{
    // The platform sends exactly one input per request; mirror that.
    let Some(input) = request.inputs.into_iter().next() else {
        return Err(ApiError("request carries no intent inputs".to_string()));
    };

    let service = &state.intent_service;
    let payload = match input {
        IntentInput::Sync => {
            let payload = service.sync();
            Some(to_value(&payload)?)
        }
        IntentInput::Query(query) => {
            let payload = service.query(&query).await;
            Some(to_value(&payload)?)
        }
        IntentInput::Execute(execute) => {
            let payload = service.execute(&execute).await;
            Some(to_value(&payload)?)
        }
        IntentInput::Disconnect => {
            service.disconnect();
            None
        }
    };

    Ok(Json(FulfillmentResponse {
        request_id: request.request_id,
        payload,
    }))
}

fn to_value<T: Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| ApiError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_sync_input_without_payload() {
        let request: FulfillmentRequest = serde_json::from_value(serde_json::json!({
            "requestId": "req-1",
            "inputs": [{"intent": "action.devices.SYNC"}],
        }))
        .unwrap();
        assert_eq!(request.request_id, "req-1");
        assert!(matches!(request.inputs[0], IntentInput::Sync));
    }

    #[test]
    fn should_deserialize_execute_input_with_payload() {
        let request: FulfillmentRequest = serde_json::from_value(serde_json::json!({
            "requestId": "req-2",
            "inputs": [{
                "intent": "action.devices.EXECUTE",
                "payload": {
                    "commands": [{
                        "devices": [{"id": "sw1"}],
                        "execution": [{
                            "command": "action.devices.commands.OnOff",
                            "params": {"on": true},
                        }],
                    }],
                },
            }],
        }))
        .unwrap();
        let IntentInput::Execute(payload) = &request.inputs[0] else {
            panic!("expected execute input");
        };
        assert_eq!(payload.commands.len(), 1);
    }

    #[test]
    fn should_reject_unknown_intent() {
        let result: Result<FulfillmentRequest, _> = serde_json::from_value(serde_json::json!({
            "requestId": "req-3",
            "inputs": [{"intent": "action.devices.REBOOT"}],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn should_omit_payload_field_when_none() {
        let response = FulfillmentResponse {
            request_id: "req-4".to_string(),
            payload: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"requestId": "req-4"}));
    }
}
