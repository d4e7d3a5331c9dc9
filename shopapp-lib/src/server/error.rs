use axum::{http::StatusCode, response::IntoResponse, Json};
use shopapp_proto::dto::FieldViolation;

use crate::{error::Error, ingest::IngestError};

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Ingest(e) => e.status_code(),
            Error::Multipart(e) => e.status(),
            Error::Validation(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IngestError {
    fn status_code(&self) -> StatusCode {
        match self {
            IngestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            IngestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            IngestError::Io(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Ingest(e) => e.into_response(),
            Error::Multipart(e) => (e.status(), e.body_text()).into_response(),
            Error::Validation(ref violations) => (
                self.status_code(),
                Json(FieldViolation::messages(violations)),
            )
                .into_response(),
            _ => (self.status_code(), self.to_string()).into_response(),
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
