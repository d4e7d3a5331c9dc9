use std::path::{Path, PathBuf};

use shopapp_proto::IMAGE_CONTENT_TYPE_PREFIX;
use tokio::{
    fs::File,
    io::{AsyncRead, AsyncWriteExt, BufWriter},
};
use uuid::Uuid;

use crate::Settings;

use super::{IngestError, StoredFileName, UploadRequest};

const BUF_SIZE: usize = 1024 * 8;
// leaves room for the `{uuid}_` prefix under the usual 255 byte limit
const MAX_FILE_NAME_BYTES: usize = 200;
const FALLBACK_FILE_NAME: &'static str = "file";

/// Stores product images under a single upload directory.
///
/// Holds no per-request state, a single instance is shared by all handlers.
/// Policy checks run before any filesystem access, and every stored file gets
/// a fresh random prefix so concurrent uploads never share a path.
#[derive(Debug, Clone)]
pub struct ImageIngestor {
    upload_dir: PathBuf,
    max_file_size: u64,
}

impl ImageIngestor {
    pub fn new(settings: &Settings) -> Self {
        Self {
            upload_dir: settings.upload_dir.clone(),
            max_file_size: settings.max_file_size,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn check<R>(&self, request: &UploadRequest<R>) -> Result<(), IngestError> {
        if request.size_bytes > self.max_file_size {
            log::warn!(
                "Rejected {:?}: {} bytes exceeds {}",
                request.original_name,
                request.size_bytes,
                self.max_file_size
            );
            return Err(IngestError::PayloadTooLarge {
                file_name: request.original_name.clone(),
                size: request.size_bytes,
                max_size: self.max_file_size,
            });
        }

        let is_image = request
            .declared_content_type
            .as_deref()
            .map_or(false, |ct| ct.starts_with(IMAGE_CONTENT_TYPE_PREFIX));
        if !is_image {
            log::warn!(
                "Rejected {:?}: content type {:?} is not an image",
                request.original_name,
                request.declared_content_type
            );
            return Err(IngestError::UnsupportedMediaType {
                file_name: request.original_name.clone(),
                content_type: request.declared_content_type.clone(),
            });
        }

        Ok(())
    }

    pub async fn ingest<R>(&self, request: UploadRequest<R>) -> Result<StoredFileName, IngestError>
    where
        R: AsyncRead + Unpin,
    {
        self.check(&request)?;
        self.store(request).await
    }

    /// Checks every request before storing any of them, stops at the first
    /// failure. Files stored before an I/O failure are kept.
    pub async fn ingest_all<R>(
        &self,
        requests: Vec<UploadRequest<R>>,
    ) -> Result<Vec<StoredFileName>, IngestError>
    where
        R: AsyncRead + Unpin,
    {
        for request in &requests {
            self.check(request)?;
        }

        let mut stored = Vec::with_capacity(requests.len());
        for request in requests {
            stored.push(self.store(request).await?);
        }
        Ok(stored)
    }

    async fn store<R>(&self, request: UploadRequest<R>) -> Result<StoredFileName, IngestError>
    where
        R: AsyncRead + Unpin,
    {
        let stored = StoredFileName {
            unique_name: unique_file_name(&request.original_name),
        };

        // concurrent first uploads may race here, create_dir_all tolerates that
        if !self.upload_dir.exists() {
            tokio::fs::create_dir_all(&self.upload_dir).await?;
        }

        let path = stored.path_in(&self.upload_dir);
        log::info!("Saving {:?} to {:?}", request.original_name, path);

        let file = File::create(&path).await?;
        let mut file_buf = BufWriter::with_capacity(BUF_SIZE, file);
        let mut content = request.content;

        let copied = match tokio::io::copy(&mut content, &mut file_buf).await {
            Ok(len) => file_buf.flush().await.map(|_| len),
            Err(e) => Err(e),
        };

        match copied {
            Ok(len) => {
                log::info!("File {} has been saved ({} bytes)", stored, len);
                Ok(stored)
            }
            Err(e) => {
                log::error!("Failed to save file {}: {:?}", stored, e);
                tokio::fs::remove_file(&path).await.ok();
                Err(e.into())
            }
        }
    }
}

/// Reduces a client supplied name to a single safe path segment.
pub fn sanitize_file_name(original_name: &str) -> String {
    let base = original_name
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .last()
        .unwrap_or_default();

    let mut sanitized = String::new();
    let chars = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .skip_while(|c| *c == '.');
    for c in chars {
        if sanitized.len() + c.len_utf8() > MAX_FILE_NAME_BYTES {
            break;
        }
        sanitized.push(c);
    }

    if sanitized.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        sanitized
    }
}

/// `{uuid}_{sanitized name}`
pub fn unique_file_name(original_name: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_file_name(original_name))
}
