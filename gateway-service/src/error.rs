use crate::models::responses::ErrorResponse;
use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use thiserror::Error;

/// Failure modes of the two gateway services. Provider internals stay in
/// the operator log; clients only ever see the generic message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    UpstreamUnavailable(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn client_message(&self) -> String {
        match self {
            ServiceError::InvalidInput(msg) => msg.clone(),
            ServiceError::UpstreamUnavailable(_) => "Upstream service failed".to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorResponse {
                error: self.client_message(),
            }),
        )
            .into_response()
    }
}
