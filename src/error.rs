use std::{
    io,
    path::{Path, PathBuf},
};

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// The file could not be opened, usually because it does not exist or is
    /// not accessible
    #[error("error opening file '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// The read itself failed, as opposed to returning too few bytes
    #[error("error reading from file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// Fewer than four bytes came back from the file
    #[error("file '{}' is too small; expected at least 4 bytes, got {len}", path.display())]
    TooSmall { path: PathBuf, len: usize },
}

impl SignatureError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            SignatureError::Open { path, .. }
            | SignatureError::Read { path, .. }
            | SignatureError::TooSmall { path, .. } => path,
        }
    }
}
