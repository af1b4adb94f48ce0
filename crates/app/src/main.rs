//! Meridian World Clock Board - Main Entry Point
//!
//! Loads the saved board, seeding a starter board on first run, and renders
//! one line per clock.

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use meridian_application::ports::BoardRepository;
use meridian_application::use_cases::{AddClock, AddClockInput, LoadBoard};
use meridian_domain::SavedClock;
use meridian_infrastructure::{FileSystemBoardRepository, SystemTimeSource, default_board_path};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Board path from environment, falling back to the platform config dir
    let board_path = std::env::var("MERIDIAN_BOARD")
        .map(PathBuf::from)
        .ok()
        .or_else(default_board_path)
        .ok_or("could not determine a board path")?;

    let board_repo = FileSystemBoardRepository::new();

    if !board_repo.exists(&board_path).await {
        tracing::info!(
            "no board at {}, seeding a starter board",
            board_path.display()
        );
        let add_clock = AddClock::new(board_repo, SystemTimeSource::new());
        add_clock
            .execute(AddClockInput {
                board_path: board_path.clone(),
                clock: SavedClock::new("UTC").with_primary(true),
            })
            .await?;
    }

    tracing::info!("loading board from {}", board_path.display());

    let load_board = LoadBoard::new(board_repo, SystemTimeSource::new());
    let output = load_board.execute(&board_path).await?;

    for clock in &output.clocks {
        let marker = if clock.primary { '*' } else { ' ' };
        println!(
            "{marker} {:<28} UTC{}",
            clock.display_name(),
            clock.offset().label()
        );
    }

    Ok(())
}
