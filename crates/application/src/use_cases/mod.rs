//! Application use cases (board orchestration).

mod add_clock;
mod load_board;
mod rename_clock;
mod set_primary;

pub use add_clock::{AddClock, AddClockInput, AddClockOutput};
pub use load_board::{LoadBoard, LoadBoardOutput};
pub use rename_clock::{RenameClock, RenameClockInput};
pub use set_primary::SetPrimary;
