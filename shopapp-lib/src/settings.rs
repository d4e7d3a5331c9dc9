use std::path::PathBuf;

use shopapp_proto::{DEFAULT_UPLOAD_DIR, MAX_FILE_SIZE, MAX_REQUEST_SIZE};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory product images are stored in, relative to the working directory.
    pub upload_dir: PathBuf,
    pub max_file_size: u64,
    /// Upper bound for a whole request body, multipart included.
    pub max_request_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_file_size: MAX_FILE_SIZE,
            max_request_size: MAX_REQUEST_SIZE,
        }
    }
}
