use crate::utils::error::{CaseMaintenanceError, ErrorCategory};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

impl IntoResponse for CaseMaintenanceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.category() {
            ErrorCategory::Client => tracing::info!("↩️ {} ({})", self, status),
            ErrorCategory::Authentication => tracing::warn!("🔒 {} ({})", self, status),
            _ => tracing::error!("❌ {} ({})", self, status),
        }

        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

/// 200 with the value, or `absent` when there is none.
pub fn found_or<T: Serialize>(value: Option<T>, absent: StatusCode) -> Response {
    match value {
        Some(value) => (StatusCode::OK, Json(value)).into_response(),
        None => absent.into_response(),
    }
}
