//! Meridian Domain - Core clock board types
//!
//! This crate defines the domain model for the Meridian world clock board.
//! All types here are pure Rust with no I/O dependencies; the current time
//! is always supplied by the caller.

pub mod clock;
pub mod coordinates;
pub mod display;
pub mod error;
pub mod id;
pub mod offset;
pub mod persistence;

pub use clock::Clock;
pub use coordinates::Coordinates;
pub use display::DisplayNameRule;
pub use error::{DomainError, DomainResult};
pub use id::generate_id;
pub use offset::UtcOffset;
pub use persistence::{BoardManifest, CURRENT_SCHEMA_VERSION, Id, SavedClock};
