use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use playbook_core::PlaybookError;

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(PlaybookError::InvalidSlug(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<PlaybookError>() {
            match e {
                PlaybookError::PersonaNotFound(_)
                | PlaybookError::StageNotFound(_)
                | PlaybookError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
                PlaybookError::PersonaExists(_) => StatusCode::CONFLICT,
                PlaybookError::NotInitialized
                | PlaybookError::InvalidSlug(_)
                | PlaybookError::InvalidResourceType(_)
                | PlaybookError::InvalidListKind(_)
                | PlaybookError::AssistKeyMissing => StatusCode::BAD_REQUEST,
                PlaybookError::Assist { .. } => StatusCode::BAD_GATEWAY,
                PlaybookError::Io(_) | PlaybookError::Yaml(_) | PlaybookError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
