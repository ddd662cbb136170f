//! Gateway error kinds and their HTTP mapping.
//!
//! Every failure the API can report is one of these variants; handlers
//! return them directly and the `IntoResponse` impl renders the
//! `{ok:false, error:<code>}` body with the matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("username and password are required")]
    MissingCredentials,

    #[error("portal rejected the credentials")]
    InvalidCredentials,

    /// Transport failure or unparseable portal response.
    #[error("portal request failed: {0}")]
    Upstream(String),

    #[error("missing or invalid bearer token")]
    Unauthorized,
}

impl GatewayError {
    /// Machine-readable code carried in the response `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Upstream(_) => "server_error",
            Self::Unauthorized => "unauthorized",
        }
    }

    /// HTTP status for this error.
    ///
    /// Upstream failures share 401 with explicit rejections; the login
    /// contract exposes exactly two failure outcomes, `invalid_credentials`
    /// and `server_error`, and data endpoints follow the same table.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Upstream(_) | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "ok": false,
            "error": self.code(),
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(GatewayError::MissingCredentials.code(), "missing_credentials");
        assert_eq!(GatewayError::InvalidCredentials.code(), "invalid_credentials");
        assert_eq!(GatewayError::Upstream("timed out".into()).code(), "server_error");
        assert_eq!(GatewayError::Unauthorized.code(), "unauthorized");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::MissingCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::Upstream("connection refused".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(GatewayError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let resp = GatewayError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "unauthorized");
    }
}
