use crate::time::CalClock;

use ferrous_core::prelude::*;

use std::fmt::{self, Display};

/// The frequency unit of a recurrence, and the step used to advance an
/// occurrence by `n` of that unit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeUnit {
	Secondly,
	Minutely,
	Hourly,
	Daily,
	Weekly,
	Monthly,
	Yearly,
}

impl TimeUnit {
	/// Canonical lowercase string form, as used in `ROption.freq` and
	/// `JoinWindow.durationUnit` JSON.
	pub fn canonical(&self) -> &'static str {
		match self {
			Self::Secondly	=> "secondly",
			Self::Minutely	=> "minutely",
			Self::Hourly	=> "hourly",
			Self::Daily		=> "daily",
			Self::Weekly	=> "weekly",
			Self::Monthly	=> "monthly",
			Self::Yearly	=> "yearly",
		}
	}

	/// Parses the canonical string form. Case-insensitive.
	pub fn from_canonical(s: &str) -> Outcome<Self> {
		match s.to_lowercase().as_str() {
			"secondly"	=> Ok(Self::Secondly),
			"minutely"	=> Ok(Self::Minutely),
			"hourly"	=> Ok(Self::Hourly),
			"daily"		=> Ok(Self::Daily),
			"weekly"	=> Ok(Self::Weekly),
			"monthly"	=> Ok(Self::Monthly),
			"yearly"	=> Ok(Self::Yearly),
			_ => Err(err!("Unrecognised time unit '{}'", s; Invalid, Input)),
		}
	}

	/// Advances `t` by `n` of this unit. Sub-monthly units are fixed
	/// duration arithmetic; monthly and yearly are calendar-step
	/// arithmetic (date arithmetic, not a fixed number of seconds), so
	/// they stay correct across variable month lengths, leap years, and
	/// DST boundaries. `n` is floored to 1 for monthly/yearly per the
	/// "advance at least one step" contract.
	pub fn calc_duration(&self, t: &CalClock, n: i64) -> Outcome<CalClock> {
		match self {
			Self::Secondly	=> t.add_seconds(n as i32),
			Self::Minutely	=> t.add_minutes(n as i32),
			Self::Hourly	=> t.add_hours(n as i32),
			Self::Daily		=> t.add_days(n as i32),
			Self::Weekly	=> t.add_weeks(n as i32),
			Self::Monthly	=> t.add_months(n.max(1) as i32),
			Self::Yearly	=> t.add_years(n.max(1) as i32),
		}
	}
}

impl Display for TimeUnit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::time::CalClockZone;

	#[test]
	fn monthly_step_is_calendar_correct_across_month_lengths() {
		let t = CalClock::new(2024, 1, 31, 0, 0, 0, 0, CalClockZone::utc()).unwrap();
		let next = TimeUnit::Monthly.calc_duration(&t, 1).unwrap();
		// January 31 + 1 month clamps into February, not a fixed 30 days.
		assert_eq!(next.month(), 2);
	}

	#[test]
	fn canonical_round_trips() {
		for unit in [
			TimeUnit::Secondly, TimeUnit::Minutely, TimeUnit::Hourly, TimeUnit::Daily,
			TimeUnit::Weekly, TimeUnit::Monthly, TimeUnit::Yearly,
		] {
			assert_eq!(TimeUnit::from_canonical(unit.canonical()).unwrap(), unit);
		}
	}
}
