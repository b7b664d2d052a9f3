pub mod date;
pub mod year;
pub mod month;
pub mod day;
pub mod duration;
pub mod interval;
pub mod incrementor;
pub mod period;
pub mod system;
pub mod holiday_engines;
pub mod business_day_engine;
pub mod registry;

pub use self::{
    date::CalendarDate,
    year::CalendarYear,
    month::CalendarMonth,
    day::CalendarDay,
    duration::CalendarDuration,
    interval::CalendarInterval,
    incrementor::DayIncrementor,
    period::{
        MonthPeriod,
        YearPeriod,
    },
    system::CalendarSystem,
    holiday_engines::{HolidayEngine, HolidayType, HolidayDefinition, WeekendAdjustment},
    business_day_engine::{BusinessDayEngine, BusinessWeek, BusinessDayAdjustment, BusinessDayStats},
    registry::{Calendar, CalendarRegistry, EngineCalendar, DEFAULT_REGISTRY},
};
