pub mod time;
pub mod duration;
pub mod interval;
pub mod period;
pub mod field;
pub mod validation;
pub mod known;
pub mod list;

pub use self::{
    time::{
        AbstractTime,
        Time,
    },
    duration::{
        AbstractDuration,
        Duration,
    },
    interval::{
        AbstractInterval,
        Interval,
        IntervalList,
    },
    period::{
        AbstractPeriod,
    },
    field::{
        TimeField,
        TimeFieldHolder,
    },
    validation::{
        TimeValidation,
    },
    known::{
        KnownDay,
        KnownHour,
        KnownMinute,
        KnownMonth,
        KnownNanoSecond,
        KnownSecond,
        KnownYear,
    },
    list::{
        TimeList,
    },
};