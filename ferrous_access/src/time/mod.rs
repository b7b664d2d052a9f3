pub mod zone;
pub mod calclock;
pub mod duration;
pub mod interval;
pub mod converter;
pub mod stopwatch;
pub mod system;
pub mod tzif;

pub use self::{
    zone::CalClockZone,
    calclock::CalClock,
    duration::CalClockDuration,
    interval::CalClockInterval,
    converter::CalClockConverter,
    stopwatch::{
        StopWatch,
        StopWatchMillis,
    },
    system::{
        SystemTimezoneManager,
        SystemTimezoneConfig,
        SystemTimezoneExt,
        TimezoneConflict,
        TimezoneStats,
        LeapSecondCapability,
    },
    tzif::{
        TZifParser,
        TZifData,
        LocalTimeResult,
        LocalTimeType,
        LeapSecond,
    },
};