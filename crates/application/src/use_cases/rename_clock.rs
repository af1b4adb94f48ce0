//! Rename clock use case.

use std::path::PathBuf;

use meridian_domain::Id;

use crate::ApplicationError;
use crate::ports::BoardRepository;

/// Input for renaming a clock.
#[derive(Debug, Clone)]
pub struct RenameClockInput {
    /// Path to the board file.
    pub board_path: PathBuf,
    /// Id of the clock to rename.
    pub clock_id: Id,
    /// New override name; `None` clears the override so the display name
    /// falls back to location/timezone rules.
    pub name: Option<String>,
}

/// Use case for setting or clearing a clock's override name.
pub struct RenameClock<R: BoardRepository> {
    board_repo: R,
}

impl<R: BoardRepository> RenameClock<R> {
    /// Creates a new `RenameClock` use case.
    #[must_use]
    pub const fn new(board_repo: R) -> Self {
        Self { board_repo }
    }

    /// Updates the override name of one board entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if no entry has the id, or a
    /// board error if the manifest cannot be read or written.
    pub async fn execute(&self, input: RenameClockInput) -> Result<(), ApplicationError> {
        let mut manifest = self.board_repo.load(&input.board_path).await?;

        let record = manifest
            .clocks
            .iter_mut()
            .find(|record| record.id.as_deref() == Some(input.clock_id.as_str()))
            .ok_or(ApplicationError::NotFound(input.clock_id))?;

        record.name = input.name;

        self.board_repo.save(&input.board_path, &manifest).await?;
        Ok(())
    }
}
