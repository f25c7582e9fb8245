//! Error types and axum `IntoResponse` implementation.
//!
//! Validation failures never reach this type: the submission handler turns
//! them into an error-page redirect itself. What remains is the per-request
//! persistence failure surfaced by the read API.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Store(e) => {
        // Detail stays in the server log; callers get a generic body.
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "internal error" })),
        )
          .into_response()
      }
    }
  }
}
