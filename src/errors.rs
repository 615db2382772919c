use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Failures a handler does not recover from
///
/// Everything except the login endpoint funnels store failures through here,
/// which turns them into an opaque 500. The login endpoint reports its own
/// errors in the response body instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        ::tracing::error!(error = %self, "Request failed");

        HttpResponse::build(self.status_code()).json(json!({
            "error": "Internal server error",
        }))
    }
}
