use thiserror::Error;

mod image_ingestor;
mod stored_file;
mod upload_request;

pub use image_ingestor::*;
pub use stored_file::*;
pub use upload_request::*;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("File is too big! Maximum size is {}MB", .max_size / 1024 / 1024)]
    PayloadTooLarge {
        file_name: String,
        size: u64,
        max_size: u64,
    },
    #[error("File must be an image")]
    UnsupportedMediaType {
        file_name: String,
        content_type: Option<String>,
    },
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
