//! Set primary clock use case.

use std::path::Path;

use crate::ApplicationError;
use crate::ports::BoardRepository;

/// Use case for marking one clock as the board's primary.
pub struct SetPrimary<R: BoardRepository> {
    board_repo: R,
}

impl<R: BoardRepository> SetPrimary<R> {
    /// Creates a new `SetPrimary` use case.
    #[must_use]
    pub const fn new(board_repo: R) -> Self {
        Self { board_repo }
    }

    /// Marks the clock with `clock_id` primary and clears the flag on every
    /// other entry, so the board holds exactly one primary clock.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no entry has `clock_id`,
    /// or a board error if the manifest cannot be read or written.
    pub async fn execute(&self, board_path: &Path, clock_id: &str) -> Result<(), ApplicationError> {
        let mut manifest = self.board_repo.load(board_path).await?;

        if !manifest
            .clocks
            .iter()
            .any(|record| record.id.as_deref() == Some(clock_id))
        {
            return Err(ApplicationError::NotFound(clock_id.to_string()));
        }

        for record in &mut manifest.clocks {
            record.primary = record.id.as_deref() == Some(clock_id);
        }

        self.board_repo.save(board_path, &manifest).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryBoardRepository;
    use meridian_domain::{BoardManifest, SavedClock};
    use pretty_assertions::assert_eq;

    fn board() -> BoardManifest {
        let mut first = SavedClock::new("UTC").with_primary(true);
        first.id = Some("utc".to_string());
        let mut second = SavedClock::new("Asia/Tokyo");
        second.id = Some("tokyo".to_string());

        BoardManifest {
            clocks: vec![first, second],
            ..BoardManifest::new()
        }
    }

    #[tokio::test]
    async fn moves_the_primary_flag() {
        let repo = InMemoryBoardRepository::with_board("board.json", board());
        let use_case = SetPrimary::new(repo);

        use_case
            .execute(Path::new("board.json"), "tokyo")
            .await
            .unwrap();

        let saved = use_case
            .board_repo
            .board(Path::new("board.json"))
            .unwrap();
        let primaries: Vec<&str> = saved
            .clocks
            .iter()
            .filter(|record| record.primary)
            .filter_map(|record| record.id.as_deref())
            .collect();
        assert_eq!(primaries, vec!["tokyo"]);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = InMemoryBoardRepository::with_board("board.json", board());
        let use_case = SetPrimary::new(repo);

        let result = use_case.execute(Path::new("board.json"), "missing").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));

        // Board untouched on failure
        let saved = use_case
            .board_repo
            .board(Path::new("board.json"))
            .unwrap();
        assert!(saved.clocks[0].primary);
    }
}
