//! Meridian Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the system time source and file-based board storage.

pub mod adapters;
pub mod persistence;
pub mod serialization;

pub use adapters::SystemTimeSource;
pub use persistence::{FileSystemBoardRepository, default_board_path};
pub use serialization::{SerializationError, from_json, to_json_stable};
