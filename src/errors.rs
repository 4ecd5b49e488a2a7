use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");

        let body = Html(
            "<!DOCTYPE html><html><body><h1>Something went wrong</h1>\
             <p>Please try again later.</p></body></html>",
        );
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
