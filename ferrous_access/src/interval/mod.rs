pub mod range;
pub mod recurrence;
pub mod rrule;
pub mod join_window;

pub use self::{
    range::{TimeRange, DateRange, CalClockRange},
    recurrence::{RecurrencePattern, RecurrenceRule, Frequency},
    rrule::{ROption, RRulePlus, ByDay, Observance, RrIncType},
    join_window::{JoinWindow, JoinWindows},
};
