pub const API_PREFIX: &'static str = "/api/v1";

pub const DEFAULT_HOST: &'static str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8088;

pub const DEFAULT_UPLOAD_DIR: &'static str = "uploads";

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10 MiB
pub const MAX_REQUEST_SIZE: usize = 64 * 1024 * 1024;

pub const IMAGE_CONTENT_TYPE_PREFIX: &'static str = "image/";
