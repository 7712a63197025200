use crate::domain::MarketplaceError;
use crate::transport::http::types::MessageResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(MessageResponse {
            message: format!("Invalid JSON body: {} (expected: {})", err.body_text(), expected),
        }),
    )
}

impl MarketplaceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Duplicate registration is reported as a plain bad request.
            MarketplaceError::Conflict => StatusCode::BAD_REQUEST,
            MarketplaceError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(MessageResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
