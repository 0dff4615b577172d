//! Handler errors rendered as `ApiResponse` failure envelopes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::ApiResponse;
use client::util::auth::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error(transparent)]
    InvalidSession(#[from] SessionError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated | Self::InvalidSession(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}
