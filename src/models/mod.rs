pub mod note;
pub mod week;
pub mod year;

pub use note::{NoteMap, WeekNote};
pub use week::{WeekInterval, WeekStart, WeekStatus};
pub use year::Year;
