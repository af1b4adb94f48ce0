//! File system based board repository implementation.
//!
//! The board lives in one JSON file, by default in the platform config
//! directory:
//! - Linux/macOS: `~/.config/meridian/board.json`
//! - Windows: `%APPDATA%/meridian/board.json`

use std::path::{Path, PathBuf};

use tokio::fs;

use meridian_application::ports::{BoardError, BoardRepository};
use meridian_domain::{BoardManifest, CURRENT_SCHEMA_VERSION};

use crate::serialization::{from_json, to_json_stable};

/// File system based implementation of `BoardRepository`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemBoardRepository;

impl FileSystemBoardRepository {
    /// Creates a new repository.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BoardRepository for FileSystemBoardRepository {
    async fn load(&self, board_path: &Path) -> Result<BoardManifest, BoardError> {
        if fs::metadata(board_path).await.is_err() {
            return Err(BoardError::NotFound(board_path.display().to_string()));
        }

        let content = fs::read_to_string(board_path)
            .await
            .map_err(|e| BoardError::FileSystem(e.to_string()))?;

        let manifest: BoardManifest =
            from_json(&content).map_err(|e| BoardError::Serialization(e.to_string()))?;

        // Validate schema version
        if manifest.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(BoardError::SchemaMismatch {
                expected: CURRENT_SCHEMA_VERSION,
                found: manifest.schema_version,
            });
        }

        Ok(manifest)
    }

    async fn save(&self, board_path: &Path, manifest: &BoardManifest) -> Result<(), BoardError> {
        let json =
            to_json_stable(manifest).map_err(|e| BoardError::Serialization(e.to_string()))?;

        if let Some(parent) = board_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BoardError::FileSystem(e.to_string()))?;
        }

        fs::write(board_path, json)
            .await
            .map_err(|e| BoardError::FileSystem(e.to_string()))
    }

    async fn exists(&self, board_path: &Path) -> bool {
        fs::metadata(board_path).await.is_ok()
    }
}

/// Returns the default board path in the platform config directory.
#[must_use]
pub fn default_board_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("meridian").join("board.json"))
}
