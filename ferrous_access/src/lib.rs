//! An access-control and recurrence engine.
//!
//! **ferrous_access** provides calendar-aware recurrence and permission
//! modelling with:
//! - A Gregorian calendar/clock stack with full IANA TZif timezone support.
//! - An RFC 5545-flavoured recurrence engine (`ROption`/`RRulePlus`) layered
//!   with holiday, business-day, and weekend-observance adjustments.
//! - Allow/deny rules (`RuleExtend`/`RuleBuilder`) arbitrated by priority in
//!   a `RuleStack`, with join windows and pluggable geo filters.
//! - A bitwise permission model (`PermValue`/`Perm`/`PermSet`) and role
//!   composition (`Role`/`RoleMulti`/`RoleFactory`).
//!
//! # Example
//! ```rust,ignore
//! use ferrous_core::prelude::*;
//! use ferrous_access::prelude::*;
//!
//! let zone = res!(CalClockZone::new("UTC"));
//! let date = res!(CalendarDate::new(2025, 4, 15, zone));
//! let rule = res!(RuleBuilder::specific_date("tax-day", &date)).build();
//! ```
//!
#![forbid(unsafe_code)]

pub mod calendar;
pub mod clock;
pub mod constant;
pub mod core;
pub mod format;
pub mod interval;
pub mod perm;
pub mod rule;
pub mod time;

pub mod prelude {
    pub use crate::{
        calendar::{
            BusinessDayAdjustment,
            BusinessDayEngine,
            BusinessDayStats,
            BusinessWeek,
            Calendar,
            CalendarDate,
            CalendarDay,
            CalendarDuration,
            CalendarInterval,
            CalendarMonth,
            CalendarRegistry,
            CalendarSystem,
            CalendarYear,
            DayIncrementor,
            EngineCalendar,
            HolidayDefinition,
            HolidayEngine,
            HolidayType,
            MonthPeriod,
            WeekendAdjustment,
            YearPeriod,
            DEFAULT_REGISTRY,
        },
        clock::{
            ClockDuration,
            ClockFields,
            ClockHour,
            ClockInterval,
            ClockMicroSecond,
            ClockMilliSecond,
            ClockMinute,
            ClockNanoSecond,
            ClockSecond,
            ClockTime,
            HourPeriod,
            MinutePeriod,
            PerSecondRated,
            SecondPeriod,
        },
        constant::{
            DayOfWeek,
            MonthOfYear,
            OrdinalEnglish,
            TimeUnit,
        },
        core::{
            AbstractInterval,
            AbstractPeriod,
            AbstractTime,
            Duration,
            Interval,
            IntervalList,
            KnownDay,
            KnownHour,
            KnownMinute,
            KnownMonth,
            KnownNanoSecond,
            KnownSecond,
            KnownYear,
            Time,
            TimeField,
            TimeList,
            TimeValidation,
        },
        format::{
            parse_rfc3339,
            Rfc9557Format,
            Rfc9557Config,
            PrecisionLevel,
        },
        interval::{
            ByDay,
            CalClockRange,
            DateRange,
            Frequency,
            JoinWindow,
            JoinWindows,
            Observance,
            ROption,
            RRulePlus,
            RecurrencePattern,
            RecurrenceRule,
            RrIncType,
            TimeRange,
        },
        perm::{
            Perm,
            PermSet,
            PermValue,
            Role,
            RoleFactory,
            RoleMulti,
        },
        rule::{
            Decision,
            GeoFilter,
            GeoInfo,
            PreAllow,
            RuleBuilder,
            RuleEvaluator,
            RuleExtend,
            RuleOccurrence,
            RuleStack,
        },
        time::{
            CalClock,
            CalClockConverter,
            CalClockDuration,
            CalClockInterval,
            CalClockZone,
            StopWatch,
            StopWatchMillis,
        },
    };
}
