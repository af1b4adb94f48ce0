//! Test doubles for the port traits.
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use meridian_domain::BoardManifest;

use crate::ports::{BoardError, BoardRepository, TimeSource};

/// A time source pinned to one instant.
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A board repository backed by a map, for exercising use cases without a
/// file system.
#[derive(Default)]
pub struct InMemoryBoardRepository {
    boards: Mutex<HashMap<PathBuf, BoardManifest>>,
}

impl InMemoryBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(path: impl Into<PathBuf>, manifest: BoardManifest) -> Self {
        let repo = Self::new();
        repo.boards.lock().unwrap().insert(path.into(), manifest);
        repo
    }

    /// Returns the stored manifest, if any.
    pub fn board(&self, path: &Path) -> Option<BoardManifest> {
        self.boards.lock().unwrap().get(path).cloned()
    }
}

impl BoardRepository for InMemoryBoardRepository {
    async fn load(&self, board_path: &Path) -> Result<BoardManifest, BoardError> {
        self.boards
            .lock()
            .unwrap()
            .get(board_path)
            .cloned()
            .ok_or_else(|| BoardError::NotFound(board_path.display().to_string()))
    }

    async fn save(&self, board_path: &Path, manifest: &BoardManifest) -> Result<(), BoardError> {
        self.boards
            .lock()
            .unwrap()
            .insert(board_path.to_path_buf(), manifest.clone());
        Ok(())
    }

    async fn exists(&self, board_path: &Path) -> bool {
        self.boards.lock().unwrap().contains_key(board_path)
    }
}
