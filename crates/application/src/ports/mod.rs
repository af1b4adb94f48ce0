//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod board_repository;
mod time_source;

pub use board_repository::{BoardError, BoardRepository};
pub use time_source::TimeSource;
