use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Name of an ingested file inside the upload directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoredFileName {
    pub unique_name: String,
}

impl StoredFileName {
    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(&self.unique_name)
    }
}

impl fmt::Display for StoredFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unique_name)
    }
}
