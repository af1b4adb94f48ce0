//! Board repository port.

use std::future::Future;
use std::path::Path;

use meridian_domain::BoardManifest;

/// Error type for board storage operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// No board exists at the given path.
    #[error("board not found at: {0}")]
    NotFound(String),

    /// The stored board was written by a newer schema.
    #[error("schema version mismatch: expected {expected}, found {found}")]
    SchemaMismatch {
        /// Highest schema version this build understands.
        expected: u32,
        /// Schema version found in the file.
        found: u32,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File system error.
    #[error("file system error: {0}")]
    FileSystem(String),
}

/// Repository for the persisted board manifest.
pub trait BoardRepository: Send + Sync {
    /// Loads the board manifest stored at `board_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is missing, unreadable, or newer than
    /// this build's schema.
    fn load(
        &self,
        board_path: &Path,
    ) -> impl Future<Output = Result<BoardManifest, BoardError>> + Send;

    /// Saves the board manifest to `board_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be serialized or written.
    fn save(
        &self,
        board_path: &Path,
        manifest: &BoardManifest,
    ) -> impl Future<Output = Result<(), BoardError>> + Send;

    /// Checks whether a board exists at `board_path`.
    fn exists(&self, board_path: &Path) -> impl Future<Output = bool> + Send;
}
