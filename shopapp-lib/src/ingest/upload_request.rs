use std::io::Cursor;

use axum::body::Bytes;

/// One submitted file, alive for the duration of a single request.
#[derive(Debug)]
pub struct UploadRequest<R> {
    /// Client supplied, may contain path separators or traversal segments.
    pub original_name: String,
    pub declared_content_type: Option<String>,
    pub size_bytes: u64,
    pub content: R,
}

impl<R> UploadRequest<R> {
    pub fn new(
        original_name: impl ToString,
        declared_content_type: Option<String>,
        size_bytes: u64,
        content: R,
    ) -> Self {
        Self {
            original_name: original_name.to_string(),
            declared_content_type,
            size_bytes,
            content,
        }
    }
}

impl UploadRequest<Cursor<Bytes>> {
    pub fn from_bytes(
        original_name: impl ToString,
        declared_content_type: Option<String>,
        data: Bytes,
    ) -> Self {
        let size_bytes = data.len() as u64;
        Self::new(
            original_name,
            declared_content_type,
            size_bytes,
            Cursor::new(data),
        )
    }
}
