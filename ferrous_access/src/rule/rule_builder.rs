//! A fluent builder producing `RuleExtend` for common recurrence patterns,
//! so callers don't hand-assemble BY-filters for things like "nth weekday
//! of month" or "tax day, shifted off weekends and holidays".

use crate::{
	calendar::CalendarDate,
	constant::{DayOfWeek, TimeUnit},
	interval::{ByDay, JoinWindow, Observance, ROption},
	rule::rule_extend::RuleExtend,
	time::{CalClock, CalClockZone},
};

use ferrous_core::prelude::*;

pub struct RuleBuilder {
	name: String,
	options: ROption,
	is_deny: bool,
	priority: i64,
	duration: i64,
	duration_unit: Option<TimeUnit>,
	start_date: Option<CalendarDate>,
	end_date: Option<CalendarDate>,
	join_windows: Vec<JoinWindow>,
	is_any_time: bool,
}

impl RuleBuilder {
	fn from_options(name: impl Into<String>, options: ROption) -> Self {
		Self {
			name: name.into(),
			options,
			is_deny: false,
			priority: 0,
			duration: 0,
			duration_unit: None,
			start_date: None,
			end_date: None,
			join_windows: Vec::new(),
			is_any_time: false,
		}
	}

	/// Builds an `IsAnyTime` rule: matches every instant.
	pub fn any_time(name: impl Into<String>) -> Self {
		let mut builder = Self::from_options(name, ROption::new(TimeUnit::Daily));
		builder.is_any_time = true;
		builder
	}

	/// Anchors on the month/day of `anchor`, recurring at `freq`.
	pub fn month_day(name: impl Into<String>, anchor: &CalendarDate, freq: TimeUnit) -> Outcome<Self> {
		let begin = res!(CalClock::new(anchor.year(), anchor.month(), anchor.day(), 0, 0, 0, 0, anchor.zone().clone()));
		let mut options = ROption::new(freq).with_begin_time(begin);
		options.by_month = vec![anchor.month()];
		options.by_month_day = vec![anchor.day() as i32];
		Ok(Self::from_options(name, options))
	}

	/// A single specific calendar date, recurring yearly on that month/day.
	pub fn specific_date(name: impl Into<String>, date: &CalendarDate) -> Outcome<Self> {
		Self::month_day(name, date, TimeUnit::Yearly)
	}

	/// Daily recurrence restricted to `weekdays`, within the hour range
	/// `[hour_from, hour_to)`; `hour_to = -1` produces a single anchor at
	/// `hour_from` instead of a range.
	pub fn weekday(name: impl Into<String>, year: i32, weekdays: &[DayOfWeek], hour_from: u8, hour_to: i32, zone: CalClockZone) -> Outcome<Self> {
		let begin = res!(CalClock::new(year, 1, 1, hour_from, 0, 0, 0, zone));
		let mut options = ROption::new(TimeUnit::Daily).with_begin_time(begin);
		options.by_day = weekdays.iter().map(|w| ByDay::new(*w)).collect();
		options.by_hour = if hour_to >= 0 {
			(hour_from as i32..hour_to).map(|h| h as u8).collect()
		} else {
			vec![hour_from]
		};
		Ok(Self::from_options(name, options))
	}

	/// The nth occurrence (negative counts from the month's end) of
	/// `weekday` within `year`.
	pub fn nth_weekday(name: impl Into<String>, year: i32, n: i32, weekday: DayOfWeek, zone: CalClockZone) -> Outcome<Self> {
		let begin = res!(CalClock::new(year, 1, 1, 0, 0, 0, 0, zone));
		let mut options = ROption::new(TimeUnit::Yearly).with_begin_time(begin);
		options.by_day = vec![ByDay::with_ordinal(weekday, n)];
		Ok(Self::from_options(name, options))
	}

	/// Starting point for a fiscal-cycle rule: chain `on_month`,
	/// `on_day_of_month`, `with_interval`, `with_count`,
	/// `with_shift_off_holidays`, `with_shift_off_weekend`,
	/// `with_observance`, `with_iso_code` to complete it.
	pub fn fiscal_cycle(name: impl Into<String>, begin: CalClock) -> Self {
		Self::from_options(name, ROption::new(TimeUnit::Yearly).with_begin_time(begin))
	}

	pub fn on_month(mut self, month: u8) -> Self {
		self.options.by_month = vec![month];
		self
	}

	pub fn on_day_of_month(mut self, day: i32) -> Self {
		self.options.by_month_day = vec![day];
		self
	}

	pub fn with_interval(mut self, interval: u32) -> Self {
		self.options.interval = interval.max(1);
		self
	}

	pub fn with_count(mut self, count: u32) -> Self {
		self.options.count = Some(count);
		self
	}

	pub fn with_shift_off_holidays(mut self, shift: bool) -> Self {
		self.options.shift_off_holidays = shift;
		self
	}

	pub fn with_shift_off_weekend(mut self, shift: bool) -> Self {
		self.options.shift_off_weekend = shift;
		self
	}

	pub fn with_observance(mut self, observance: Observance) -> Self {
		self.options.observance = observance;
		self
	}

	pub fn with_iso_code(mut self, iso: impl Into<String>) -> Self {
		self.options.iso_code = Some(iso.into());
		self
	}

	pub fn allow(mut self) -> Self {
		self.is_deny = false;
		self
	}

	pub fn deny(mut self) -> Self {
		self.is_deny = true;
		self
	}

	pub fn with_priority(mut self, priority: i64) -> Self {
		self.priority = priority;
		self
	}

	pub fn with_duration(mut self, duration: i64, unit: TimeUnit) -> Self {
		self.duration = duration;
		self.duration_unit = Some(unit);
		self
	}

	pub fn with_begin_time(mut self, t: CalClock) -> Self {
		self.options.begin_time = Some(t);
		self
	}

	pub fn with_start_date(mut self, date: CalendarDate) -> Self {
		self.start_date = Some(date);
		self
	}

	pub fn with_end_date(mut self, date: CalendarDate) -> Self {
		self.end_date = Some(date);
		self
	}

	/// Re-anchors the recurrence's `begin_time` into the named IANA/fixed
	/// offset zone, so local hour/day arithmetic happens there before
	/// conversion back to UTC.
	pub fn with_time_zone(mut self, iso: &str) -> Outcome<Self> {
		let zone = res!(CalClockZone::new(iso));
		if let Some(begin) = self.options.begin_time.take() {
			self.options.begin_time = Some(res!(begin.with_zone(zone)));
		}
		Ok(self)
	}

	pub fn with_hour_range(mut self, from: u8, to: u8) -> Self {
		self.options.by_hour = (from..to).collect();
		self
	}

	/// Adds one lead `JoinWindow` per entry in `days_before`, all sharing `tag`.
	pub fn add_jw_before_daily(mut self, tag: impl Into<String>, days_before: &[i64]) -> Self {
		let tag = tag.into();
		for &days in days_before {
			let label = format!("{}-day reminder", days);
			self.join_windows.push(JoinWindow::new(true, days, TimeUnit::Daily, label, tag.clone()));
		}
		self
	}

	pub fn build(self) -> Outcome<RuleExtend> {
		let mut rule = if self.is_any_time {
			RuleExtend::any_time(self.name)
		} else {
			RuleExtend::new(self.name, self.options)
		};
		rule = rule.with_deny(self.is_deny).with_priority(self.priority);
		if let Some(unit) = self.duration_unit {
			rule = rule.with_duration(self.duration, unit);
		}
		if let Some(start) = self.start_date {
			rule = rule.with_start_date(start);
		}
		if let Some(end) = self.end_date {
			rule = rule.with_end_date(end);
		}
		for window in self.join_windows {
			rule = rule.add_join_window(window);
		}
		res!(rule.validate());
		Ok(rule)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::calendar::CalendarSystem;

	#[test]
	fn tax_day_builder_shifts_off_weekends_and_holidays() {
		let anchor = CalendarDate::new(2025, 4, 15, CalClockZone::utc()).unwrap();
		let _ = CalendarSystem::Gregorian;
		let rule = RuleBuilder::month_day("tax-day", &anchor, TimeUnit::Yearly)
			.unwrap()
			.with_shift_off_weekend(true)
			.with_shift_off_holidays(true)
			.with_observance(Observance::NextBusinessDay)
			.with_iso_code("us")
			.with_count(12)
			.with_duration(1, TimeUnit::Daily)
			.allow()
			.build()
			.unwrap();
		assert_eq!(rule.name(), "tax-day");
		assert!(!rule.is_deny());
	}
}
