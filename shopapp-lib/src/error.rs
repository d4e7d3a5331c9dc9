use axum::extract::multipart::MultipartError;
use shopapp_proto::dto::FieldViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ingest(#[from] crate::ingest::IngestError),
    #[error(transparent)]
    Multipart(#[from] MultipartError),
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    BadRequest(String),
}
