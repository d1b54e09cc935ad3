//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON error body returned by the fulfillment endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// A request the adapter could not dispatch (bad envelope, no inputs).
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "rejecting fulfillment request");
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: self.0 })).into_response()
    }
}
