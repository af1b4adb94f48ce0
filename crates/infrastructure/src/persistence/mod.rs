//! Board persistence.

mod board_repository;

pub use board_repository::{FileSystemBoardRepository, default_board_path};
