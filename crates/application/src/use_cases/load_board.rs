//! Load board use case.

use std::path::Path;

use meridian_domain::Clock;

use crate::ApplicationError;
use crate::ports::{BoardRepository, TimeSource};

/// Output from loading a board.
#[derive(Debug, Clone)]
pub struct LoadBoardOutput {
    /// The board's clocks in display order.
    pub clocks: Vec<Clock>,
}

/// Use case for loading the board and building its clocks.
pub struct LoadBoard<R: BoardRepository, T: TimeSource> {
    board_repo: R,
    time_source: T,
}

impl<R: BoardRepository, T: TimeSource> LoadBoard<R, T> {
    /// Creates a new `LoadBoard` use case.
    #[must_use]
    pub const fn new(board_repo: R, time_source: T) -> Self {
        Self {
            board_repo,
            time_source,
        }
    }

    /// Loads the manifest at `board_path` and constructs every clock
    /// against a single time-source reading, so all offset snapshots on the
    /// board describe the same instant.
    ///
    /// Clocks are sorted for display: primary first, then ascending UTC
    /// offset, then display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be loaded or any entry carries
    /// an unknown timezone.
    pub async fn execute(&self, board_path: &Path) -> Result<LoadBoardOutput, ApplicationError> {
        let manifest = self.board_repo.load(board_path).await?;
        let now = self.time_source.now();

        let mut clocks = manifest
            .clocks
            .iter()
            .map(|record| Clock::from_saved(record, now))
            .collect::<Result<Vec<_>, _>>()?;

        clocks.sort_by(|a, b| {
            b.primary
                .cmp(&a.primary)
                .then_with(|| a.offset().minutes().cmp(&b.offset().minutes()))
                .then_with(|| a.display_name().cmp(&b.display_name()))
        });

        Ok(LoadBoardOutput { clocks })
    }
}
