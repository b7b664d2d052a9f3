use ferrous_core::{
    prelude::*,
    test::test_it,
};
use ferrous_access::{
    calendar::{CalendarDate, CalendarSystem, HolidayEngine, BusinessDayEngine},
    constant::DayOfWeek,
    time::CalClockZone,
};

/// Exercises the Gregorian calendar stack, the holiday engine, and the
/// business-day engine that back the recurrence/rule subsystem.
pub fn test_calendar(filter: &str) -> Outcome<()> {

    res!(test_it(filter, &["calendar_date_creation", "all", "calendar", "comprehensive"], || {
        let zone = CalClockZone::utc();
        let date = res!(CalendarDate::new(2024, 1, 15, zone.clone()));
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
        assert!(date.calendar_system().is_gregorian());
        Ok(())
    }));

    res!(test_it(filter, &["calendar_leap_years", "all", "calendar", "comprehensive"], || {
        let gregorian = CalendarSystem::Gregorian;
        assert!(gregorian.is_leap_year(2024)); // Divisible by 4
        assert!(!gregorian.is_leap_year(1900)); // Century not divisible by 400
        assert!(gregorian.is_leap_year(2000)); // Century divisible by 400
        assert!(!gregorian.is_leap_year(2023)); // Not divisible by 4
        Ok(())
    }));

    res!(test_it(filter, &["calendar_month_days", "all", "calendar", "comprehensive"], || {
        let gregorian = CalendarSystem::Gregorian;
        assert_eq!(gregorian.days_in_month(2024, ferrous_access::constant::MonthOfYear::February), 29);
        assert_eq!(gregorian.days_in_month(2023, ferrous_access::constant::MonthOfYear::February), 28);
        assert_eq!(gregorian.days_in_month(2024, ferrous_access::constant::MonthOfYear::April), 30);
        Ok(())
    }));

    res!(test_it(filter, &["day_of_week", "all", "calendar", "comprehensive"], || {
        let zone = CalClockZone::utc();
        let date1 = res!(CalendarDate::new(2024, 1, 1, zone.clone())); // Monday
        assert_eq!(date1.day_of_week(), DayOfWeek::Monday);

        let date2 = res!(CalendarDate::new(2024, 3, 15, zone.clone())); // Friday
        assert_eq!(date2.day_of_week(), DayOfWeek::Friday);
        Ok(())
    }));

    res!(test_it(filter, &["date_arithmetic", "all", "calendar", "comprehensive"], || {
        let zone = CalClockZone::utc();
        let date1 = res!(CalendarDate::new(2024, 1, 31, zone.clone()));
        let date2 = res!(date1.add_days(1));
        assert_eq!((date2.year(), date2.month(), date2.day()), (2024, 2, 1));
        Ok(())
    }));

    res!(test_it(filter, &["date_comparison", "all", "calendar", "comprehensive"], || {
        let zone = CalClockZone::utc();
        let date1 = res!(CalendarDate::new(2024, 1, 15, zone.clone()));
        let date2 = res!(CalendarDate::new(2024, 1, 16, zone.clone()));
        let date3 = res!(CalendarDate::new(2024, 1, 15, zone.clone()));

        assert!(date1 < date2);
        assert!(date2 > date1);
        assert_eq!(date1, date3);
        Ok(())
    }));

    res!(test_it(filter, &["holiday_engine_us_federal", "all", "calendar", "holiday"], || {
        let engine = HolidayEngine::us_federal();
        let zone = CalClockZone::utc();

        // Independence Day 2026 falls on a Saturday; the US federal
        // calendar observes it the preceding Friday.
        let july_3 = res!(CalendarDate::new(2026, 7, 3, zone.clone()));
        assert!(res!(engine.is_holiday(&july_3)));

        let name = res!(engine.holiday_name_on(&july_3));
        assert_eq!(name.as_deref(), Some("Independence Day"));
        Ok(())
    }));

    res!(test_it(filter, &["business_day_engine_skips_weekends", "all", "calendar", "business"], || {
        let engine = BusinessDayEngine::new();
        let zone = CalClockZone::utc();

        // 2024-01-13 is a Saturday.
        let saturday = res!(CalendarDate::new(2024, 1, 13, zone.clone()));
        assert!(!res!(engine.is_business_day(&saturday)));

        let next = res!(engine.following_business_day(&saturday));
        assert_eq!(next.day_of_week(), DayOfWeek::Monday);
        Ok(())
    }));

    Ok(())
}
