//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use homelink_app::ports::{HardwareOutput, StateReporter};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Exposes `/health` and the fulfillment endpoint at `/smarthome`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<H, R>(state: AppState<H, R>) -> Router
where
    H: HardwareOutput + Clone + Send + Sync + 'static,
    R: StateReporter + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/smarthome", post(crate::api::fulfillment::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homelink_app::devices::{Appliance, Switch};
    use homelink_app::registry::DeviceRegistry;
    use homelink_app::reporter::LogStateReporter;
    use homelink_app::services::IntentService;
    use homelink_domain::error::HardwareError;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[derive(Clone)]
    struct StubHardware;

    impl homelink_app::ports::HardwareOutput for StubHardware {
        fn write(&self, _channel: u8, _level: bool) -> Result<(), HardwareError> {
            Ok(())
        }
    }

    fn test_state() -> AppState<StubHardware, LogStateReporter> {
        let fleet: Vec<Appliance<StubHardware>> =
            vec![Switch::new("sw1", 0, StubHardware).into()];
        let registry = DeviceRegistry::new(fleet).unwrap();
        AppState::new(IntentService::new(registry, LogStateReporter, "1234"))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_envelope_without_inputs() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smarthome")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"requestId": "req-1", "inputs": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_acknowledge_disconnect() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smarthome")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"requestId": "req-1", "inputs": [{"intent": "action.devices.DISCONNECT"}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
