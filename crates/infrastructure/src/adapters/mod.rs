//! Port adapters.

mod system_time;

pub use system_time::SystemTimeSource;
