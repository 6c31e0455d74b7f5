use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// JSON error body for the admin API: a stable `error` code plus an
/// optional human-readable `detail`.
#[derive(Debug)]
pub struct JsonApiError {
    status: StatusCode,
    code: &'static str,
    detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, code: &'static str, detail: Option<String>) -> Self {
        Self { status, code, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(code = self.code, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.code, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<service::errors::ServiceError> for JsonApiError {
    fn from(e: service::errors::ServiceError) -> Self {
        use models::errors::ModelError;
        use service::errors::ServiceError as E;
        let detail = Some(e.to_string());
        match e {
            E::Model(ModelError::Validation(_)) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", detail),
            E::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", detail),
            E::Db(_) | E::Model(ModelError::Db(_)) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", detail),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
