pub mod controls;
pub mod objects;
pub mod presence;
pub mod summary;

mod clock;

pub use clock::{Clock, WorkTimer};
pub use controls::ManualControls;
pub use objects::ObjectPicker;
pub use presence::{AutomaticInfo, PresencePanel};
pub use summary::HoursSummary;
