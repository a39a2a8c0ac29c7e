mod conflicts;
mod grid;
mod modals;
mod navigation;

pub use conflicts::ConflictPanel;
pub use grid::WeekGrid;
pub use modals::{CopyWeekDialog, ShiftDialog};
pub use navigation::WeekNavigation;
