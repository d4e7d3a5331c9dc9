mod error;
pub mod ingest;
pub mod server;
mod settings;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use error::*;
pub use settings::*;
