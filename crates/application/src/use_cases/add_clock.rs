//! Add clock use case.

use std::path::PathBuf;

use meridian_domain::{BoardManifest, Clock, SavedClock, generate_id};

use crate::ApplicationError;
use crate::ports::{BoardRepository, TimeSource};

/// Input for adding a clock to the board.
#[derive(Debug, Clone)]
pub struct AddClockInput {
    /// Path to the board file.
    pub board_path: PathBuf,
    /// The record to add.
    pub clock: SavedClock,
}

/// Output from adding a clock.
#[derive(Debug, Clone)]
pub struct AddClockOutput {
    /// The constructed clock, with its assigned id and offset snapshot.
    pub clock: Clock,
}

/// Use case for appending a clock record to the board.
pub struct AddClock<R: BoardRepository, T: TimeSource> {
    board_repo: R,
    time_source: T,
}

impl<R: BoardRepository, T: TimeSource> AddClock<R, T> {
    /// Creates a new `AddClock` use case.
    #[must_use]
    pub const fn new(board_repo: R, time_source: T) -> Self {
        Self {
            board_repo,
            time_source,
        }
    }

    /// Adds the record to the board, creating an empty board if none exists
    /// at the path yet.
    ///
    /// A record without an id gets a generated one before it is persisted.
    /// The clock is constructed before the board is touched, so a record
    /// with an unknown timezone never reaches disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the record's timezone is unknown or the board
    /// cannot be read or written.
    pub async fn execute(&self, input: AddClockInput) -> Result<AddClockOutput, ApplicationError> {
        let mut record = input.clock;
        if record.id.is_none() {
            record.id = Some(generate_id());
        }

        let clock = Clock::from_saved(&record, self.time_source.now())?;

        let mut manifest = if self.board_repo.exists(&input.board_path).await {
            self.board_repo.load(&input.board_path).await?
        } else {
            BoardManifest::new()
        };

        manifest.clocks.push(record);
        self.board_repo.save(&input.board_path, &manifest).await?;

        Ok(AddClockOutput { clock })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{FixedTimeSource, InMemoryBoardRepository};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn winter_noon() -> FixedTimeSource {
        FixedTimeSource(Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap())
    }

    fn input(clock: SavedClock) -> AddClockInput {
        AddClockInput {
            board_path: PathBuf::from("board.json"),
            clock,
        }
    }

    #[tokio::test]
    async fn creates_the_board_on_first_add() {
        let use_case = AddClock::new(InMemoryBoardRepository::new(), winter_noon());

        let output = use_case
            .execute(input(SavedClock::new("Europe/Paris").with_location("Paris")))
            .await
            .unwrap();

        assert_eq!(output.clock.display_name(), "Paris");
        assert_eq!(output.clock.offset().label(), "+01:00");

        let board = use_case
            .board_repo
            .board(Path::new("board.json"))
            .unwrap();
        assert_eq!(board.clocks.len(), 1);
        assert_eq!(board.clocks[0].id.as_deref(), Some(output.clock.id.as_str()));
    }

    #[tokio::test]
    async fn appends_to_an_existing_board() {
        let board = BoardManifest {
            clocks: vec![SavedClock::new("UTC")],
            ..BoardManifest::new()
        };
        let repo = InMemoryBoardRepository::with_board("board.json", board);
        let use_case = AddClock::new(repo, winter_noon());

        use_case
            .execute(input(SavedClock::new("Asia/Tokyo")))
            .await
            .unwrap();

        let board = use_case
            .board_repo
            .board(Path::new("board.json"))
            .unwrap();
        assert_eq!(board.clocks.len(), 2);
        assert_eq!(board.clocks[1].timezone, "Asia/Tokyo");
    }

    #[tokio::test]
    async fn keeps_a_supplied_id() {
        let use_case = AddClock::new(InMemoryBoardRepository::new(), winter_noon());

        let mut record = SavedClock::new("UTC");
        record.id = Some("clock-1".to_string());
        let output = use_case.execute(input(record)).await.unwrap();

        assert_eq!(output.clock.id, "clock-1");
    }

    #[tokio::test]
    async fn unknown_timezone_is_rejected_before_saving() {
        let use_case = AddClock::new(InMemoryBoardRepository::new(), winter_noon());

        let result = use_case.execute(input(SavedClock::new("Not/AZone"))).await;

        assert!(matches!(result, Err(ApplicationError::Domain(_))));
        assert!(use_case.board_repo.board(Path::new("board.json")).is_none());
    }
}
