//! HTTP error surface.
//!
//! Any failure that reaches the edge is rendered as a JSON body carrying the
//! message, the stable client code, and the HTTP status (defaulting to 500
//! for panics and other internal failures).

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use msgrelay_core::error::{ClientCode, RelayError};

/// `RelayError` wrapper with an HTTP rendering. The core crate stays
/// transport-free, so the `IntoResponse` impl lives here.
pub struct ApiError(pub RelayError);

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        let body = Json(json!({
            "error": self.0.to_string(),
            "code": code.as_str(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

/// Unmatched routes get a JSON 404 instead of an empty body.
pub async fn not_found() -> ApiError {
    ApiError(RelayError::NotFound)
}

/// Panicking handlers are converted into the generic JSON 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %msg, "request handler panicked");
    ApiError(RelayError::Internal("internal server error".into())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_client_code_has_a_status() {
        assert_eq!(status_for(ClientCode::BadRequest), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(ClientCode::RateLimited),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_for(ClientCode::PayloadTooLarge),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(status_for(ClientCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ClientCode::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
