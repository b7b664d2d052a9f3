pub mod day_of_week;
pub mod month_of_year;
pub mod ordinal;
pub mod time_unit;

pub use self::{
    day_of_week::DayOfWeek,
    month_of_year::MonthOfYear,
    ordinal::OrdinalEnglish,
    time_unit::TimeUnit,
};
