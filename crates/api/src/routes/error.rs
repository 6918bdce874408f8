//! Error responses.
//!
//! Every failure is answered with `{"error": ..., "message": ...}`. Invalid
//! entries additionally name the table, row and field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use laba_core::tracker::TrackerError;
use laba_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// A 400 response with a machine-readable code.
pub fn bad_request(code: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Maps a pipeline error to its HTTP response.
pub fn tracker_error(err: TrackerError) -> Response {
    let code = err.error_code();

    let details = match &err {
        TrackerError::Validation(e) => {
            warn!(error = %e, code, "Rejected invalid entry");
            Some(json!({
                "table": e.dataset,
                "row": e.row,
                "field": e.field,
            }))
        }
        TrackerError::Report(e) => {
            warn!(error = %e, code, "Rejected report request");
            None
        }
        TrackerError::Store(e) => {
            error!(error = %e, code, "Record store request failed");
            None
        }
    };

    let app: AppError = err.into();
    let status =
        StatusCode::from_u16(app.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut body = json!({
        "error": app.error_code(),
        "code": code,
        "message": app.to_string(),
    });
    if let (Some(fields), Some(serde_json::Value::Object(details))) =
        (body.as_object_mut(), details)
    {
        fields.extend(details);
    }

    (status, Json(body)).into_response()
}
