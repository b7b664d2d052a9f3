//! A minimal RFC 5545 recurrence subset (`ROption`), decorated with
//! calendar-aware shifting and observance policy (`RRulePlus`).
//!
//! The BY-filters below narrow which candidate instants a plain FREQ/INTERVAL
//! step emits; the policy extensions (`ShiftOffWeekend`, `ShiftOffHolidays`,
//! `Observance`, `CustomFilter`) then relocate or reject each candidate in a
//! fixed order. Months and years are always advanced with date arithmetic
//! (`TimeUnit::calc_duration`), never approximated as fixed-length durations.

use crate::{
	calendar::{Calendar, CalendarRegistry, CalendarSystem},
	constant::{DayOfWeek, MonthOfYear, TimeUnit},
	time::CalClock,
};

use ferrous_core::prelude::*;

use std::{fmt, sync::Arc};

/// A weekday BY-filter entry, optionally restricted to its nth occurrence
/// within the period (negative counts from the end, e.g. `-1` = last).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ByDay {
	pub weekday: DayOfWeek,
	pub ordinal: Option<i32>,
}

impl ByDay {
	pub fn new(weekday: DayOfWeek) -> Self {
		Self { weekday, ordinal: None }
	}

	pub fn with_ordinal(weekday: DayOfWeek, ordinal: i32) -> Self {
		Self { weekday, ordinal: Some(ordinal) }
	}
}

/// Business-day observance substituted for a scheduled date that falls on
/// a weekend or holiday.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Observance {
	None,
	NextBusinessDay,
	PreviousBusinessDay,
}

/// Whether boundary matching (e.g. `IsBetween`'s `Before(now, ...)` lookup)
/// includes an occurrence exactly equal to the boundary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RrIncType {
	Inclusive,
	Exclusive,
}

impl Default for RrIncType {
	// Source comments describe an inclusive default; some call sites set it
	// explicitly for sub-daily frequencies. Decision recorded in DESIGN.md:
	// default inclusive for every frequency, not only sub-daily ones.
	fn default() -> Self {
		Self::Inclusive
	}
}

/// The serializable recurrence specification (RFC 5545 subset plus policy
/// extensions). `custom_filter` and `calendar` are the two non-serializable
/// collaborators mentioned in the external-interface contract.
#[derive(Clone)]
pub struct ROption {
	pub freq: TimeUnit,
	pub interval: u32,
	pub count: Option<u32>,
	pub begin_time: Option<CalClock>,
	pub until_time: Option<CalClock>,

	pub by_second: Vec<u8>,
	pub by_minute: Vec<u8>,
	pub by_hour: Vec<u8>,
	pub by_day: Vec<ByDay>,
	pub by_month_day: Vec<i32>,
	pub by_year_day: Vec<i32>,
	pub by_week_no: Vec<i32>,
	pub by_month: Vec<u8>,
	pub by_set_pos: Vec<i32>,
	pub by_easter: Vec<i32>,

	pub shift_off_weekend: bool,
	pub shift_off_holidays: bool,
	pub valid_only_on_holidays: bool,
	pub valid_only_on_weekends: bool,
	pub iso_code: Option<String>,
	pub observance: Observance,
	pub rr_inc_type: RrIncType,

	custom_filter: Option<Arc<dyn Fn(&CalClock) -> bool + Send + Sync>>,
	calendar: Option<Arc<dyn Calendar>>,
}

impl fmt::Debug for ROption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ROption")
			.field("freq", &self.freq)
			.field("interval", &self.interval)
			.field("count", &self.count)
			.field("begin_time", &self.begin_time)
			.field("until_time", &self.until_time)
			.field("shift_off_weekend", &self.shift_off_weekend)
			.field("shift_off_holidays", &self.shift_off_holidays)
			.field("valid_only_on_holidays", &self.valid_only_on_holidays)
			.field("valid_only_on_weekends", &self.valid_only_on_weekends)
			.field("iso_code", &self.iso_code)
			.field("observance", &self.observance)
			.field("rr_inc_type", &self.rr_inc_type)
			.field("custom_filter", &self.custom_filter.is_some())
			.field("calendar", &self.calendar.is_some())
			.finish()
	}
}

impl ROption {
	pub fn new(freq: TimeUnit) -> Self {
		Self {
			freq,
			interval: 1,
			count: None,
			begin_time: None,
			until_time: None,
			by_second: Vec::new(),
			by_minute: Vec::new(),
			by_hour: Vec::new(),
			by_day: Vec::new(),
			by_month_day: Vec::new(),
			by_year_day: Vec::new(),
			by_week_no: Vec::new(),
			by_month: Vec::new(),
			by_set_pos: Vec::new(),
			by_easter: Vec::new(),
			shift_off_weekend: false,
			shift_off_holidays: false,
			valid_only_on_holidays: false,
			valid_only_on_weekends: false,
			iso_code: None,
			observance: Observance::None,
			rr_inc_type: RrIncType::default(),
			custom_filter: None,
			calendar: None,
		}
	}

	pub fn with_interval(mut self, interval: u32) -> Self {
		self.interval = interval;
		self
	}

	pub fn with_count(mut self, count: u32) -> Self {
		self.count = Some(count);
		self
	}

	pub fn with_begin_time(mut self, t: CalClock) -> Self {
		self.begin_time = Some(t);
		self
	}

	pub fn with_until_time(mut self, t: CalClock) -> Self {
		self.until_time = Some(t);
		self
	}

	pub fn with_custom_filter(mut self, filter: Arc<dyn Fn(&CalClock) -> bool + Send + Sync>) -> Self {
		self.custom_filter = Some(filter);
		self
	}

	pub fn with_calendar(mut self, calendar: Arc<dyn Calendar>) -> Self {
		self.calendar = Some(calendar);
		self
	}

	pub fn calendar(&self) -> Option<&Arc<dyn Calendar>> {
		self.calendar.as_ref()
	}

	/// Resolves `iso_code` against the registry and binds it as this
	/// option's calendar, mirroring `RuleExtend.ToRRule`'s lazy lookup.
	pub fn resolve_calendar(&mut self, registry: &CalendarRegistry) -> Outcome<()> {
		if let Some(iso) = self.iso_code.clone() {
			let calendar = res!(registry.new_or_get(&iso));
			self.calendar = Some(calendar);
		}
		Ok(())
	}

	pub fn validate(&self) -> Outcome<()> {
		if self.interval < 1 {
			return Err(err!("ROption.interval must be >= 1, got {}", self.interval; Invalid, Input, Range));
		}
		if let (Some(begin), Some(until)) = (&self.begin_time, &self.until_time) {
			if begin > until {
				return Err(err!("ROption.begin_time must not be after until_time"; Invalid, Input));
			}
		}
		for &s in &self.by_second {
			if s > 59 { return Err(err!("bySecond value {} out of range 0..59", s; Invalid, Input, Range)); }
		}
		for &m in &self.by_minute {
			if m > 59 { return Err(err!("byMinute value {} out of range 0..59", m; Invalid, Input, Range)); }
		}
		for &h in &self.by_hour {
			if h > 23 { return Err(err!("byHour value {} out of range 0..23", h; Invalid, Input, Range)); }
		}
		for d in &self.by_month_day {
			if *d == 0 || d.abs() > 31 { return Err(err!("byMonthDay value {} out of range -31..31 excluding 0", d; Invalid, Input, Range)); }
		}
		for d in &self.by_year_day {
			if *d == 0 || d.abs() > 366 { return Err(err!("byYearDay value {} out of range -366..366 excluding 0", d; Invalid, Input, Range)); }
		}
		for w in &self.by_week_no {
			if *w == 0 || w.abs() > 53 { return Err(err!("byWeekNo value {} out of range -53..53 excluding 0", w; Invalid, Input, Range)); }
		}
		for &m in &self.by_month {
			if m < 1 || m > 12 { return Err(err!("byMonth value {} out of range 1..12", m; Invalid, Input, Range)); }
		}
		for d in &self.by_set_pos {
			if *d == 0 || d.abs() > 366 { return Err(err!("bySetPos value {} out of range -366..366 excluding 0", d; Invalid, Input, Range)); }
		}
		Ok(())
	}

	/// Every BY-filter except `by_set_pos`, which needs the full candidate
	/// set for the period and is applied separately by [`Self::matches_by_filters`].
	fn matches_by_filters_except_set_pos(&self, t: &CalClock) -> bool {
		if !self.by_second.is_empty() && !self.by_second.contains(&t.second()) {
			return false;
		}
		if !self.by_minute.is_empty() && !self.by_minute.contains(&t.minute()) {
			return false;
		}
		if !self.by_hour.is_empty() && !self.by_hour.contains(&t.hour()) {
			return false;
		}
		if !self.by_month.is_empty() && !self.by_month.contains(&t.month()) {
			return false;
		}
		if !self.by_month_day.is_empty() && !month_day_matches(t, &self.by_month_day) {
			return false;
		}
		if !self.by_year_day.is_empty() && !by_year_day_matches(t, &self.by_year_day) {
			return false;
		}
		if !self.by_week_no.is_empty() && !by_week_no_matches(t, &self.by_week_no) {
			return false;
		}
		if !self.by_day.is_empty() && !weekday_matches(t, &self.by_day) {
			return false;
		}
		if !self.by_easter.is_empty() && !by_easter_matches(t, &self.by_easter) {
			return false;
		}
		true
	}

	fn matches_by_filters(&self, t: &CalClock) -> Outcome<bool> {
		if !self.matches_by_filters_except_set_pos(t) {
			return Ok(false);
		}
		if !self.by_set_pos.is_empty() {
			return self.set_pos_matches(t);
		}
		Ok(true)
	}

	/// The `[start, end)` bounds of the recurrence frequency's period
	/// containing `t`, used to enumerate the candidate set `by_set_pos`
	/// selects a position from.
	fn period_bounds(&self, t: &CalClock) -> Outcome<(CalClock, CalClock)> {
		let zone = t.zone().clone();
		match self.freq {
			TimeUnit::Yearly => {
				let start = res!(CalClock::new(t.year(), 1, 1, 0, 0, 0, 0, zone.clone()));
				let end = res!(CalClock::new(t.year() + 1, 1, 1, 0, 0, 0, 0, zone));
				Ok((start, end))
			},
			TimeUnit::Monthly => {
				let start = res!(CalClock::new(t.year(), t.month(), 1, 0, 0, 0, 0, zone.clone()));
				let (next_year, next_month) = if t.month() == 12 { (t.year() + 1, 1) } else { (t.year(), t.month() + 1) };
				let end = res!(CalClock::new(next_year, next_month, 1, 0, 0, 0, 0, zone));
				Ok((start, end))
			},
			TimeUnit::Weekly => {
				let dow = t.day_of_week().of() as i32;
				let start = res!(t.add_days(-(dow - 1)));
				let end = res!(start.add_days(7));
				Ok((start, end))
			},
			_ => {
				let start = t.clone();
				let end = res!(t.add_days(1));
				Ok((start, end))
			},
		}
	}

	/// True iff `t` occupies the position in `by_set_pos` among the other
	/// BY-filters' matches within `t`'s frequency period (negative counts
	/// from the end of that period's matching set).
	fn set_pos_matches(&self, t: &CalClock) -> Outcome<bool> {
		let (start, end) = res!(self.period_bounds(t));
		let mut candidates = Vec::new();
		let mut cur = start;
		while cur < end {
			if self.matches_by_filters_except_set_pos(&cur) {
				candidates.push(cur.clone());
			}
			cur = res!(cur.add_days(1));
		}
		let n = candidates.len() as i32;
		if n == 0 {
			return Ok(false);
		}
		let pos = candidates.iter().position(|c| c.date() == t.date()).map(|i| i as i32 + 1);
		Ok(match pos {
			None => false,
			Some(p) => self.by_set_pos.iter().any(|&e| {
				if e > 0 { e == p } else { e + n + 1 == p }
			}),
		})
	}
}

/// True iff `t.day()` matches one of `entries`, where a negative entry `-n`
/// means the nth-from-last day of `t`'s month (`-1` = last day; never
/// instantiates a day past the month's actual length).
fn month_day_matches(t: &CalClock, entries: &[i32]) -> bool {
	let days_in_month = MonthOfYear::from_number(t.month()).map(|m| m.days_in_month(t.year())).unwrap_or(31);
	let day = t.day() as i32;
	entries.iter().any(|&e| {
		if e > 0 { e == day } else { days_in_month as i32 + e + 1 == day }
	})
}

/// True iff `t`'s weekday matches one of `entries`; an entry with an
/// ordinal additionally requires `t` to be that nth occurrence of the
/// weekday within its month (negative counts from the month's end).
fn weekday_matches(t: &CalClock, entries: &[ByDay]) -> bool {
	entries.iter().any(|entry| {
		if entry.weekday != t.day_of_week() {
			return false;
		}
		match entry.ordinal {
			None => true,
			Some(n) if n > 0 => nth_weekday_index_from_start(t) == n,
			Some(n) => nth_weekday_index_from_end(t) == -n,
		}
	})
}

fn nth_weekday_index_from_start(t: &CalClock) -> i32 {
	((t.day() as i32 - 1) / 7) + 1
}

fn nth_weekday_index_from_end(t: &CalClock) -> i32 {
	let days_in_month = MonthOfYear::from_number(t.month()).map(|m| m.days_in_month(t.year())).unwrap_or(31) as i32;
	((days_in_month - t.day() as i32) / 7) + 1
}

/// 1-based ordinal day within the year, Jan 1 = 1.
fn day_of_year(year: i32, month: u8, day: u8) -> i32 {
	let mut total = day as i32;
	for m in 1..month {
		if let Ok(entry) = MonthOfYear::from_number(m) {
			total += entry.days_in_month(year) as i32;
		}
	}
	total
}

/// True iff `t`'s ordinal day-of-year matches one of `entries`, where a
/// negative entry `-n` counts from the last day of `t`'s year.
fn by_year_day_matches(t: &CalClock, entries: &[i32]) -> bool {
	let doy = day_of_year(t.year(), t.month(), t.day());
	let days_in_year = if CalendarSystem::Gregorian.is_leap_year(t.year()) { 366 } else { 365 };
	entries.iter().any(|&e| {
		if e > 0 { e == doy } else { days_in_year + e + 1 == doy }
	})
}

/// ISO 8601 day-of-week-number correction `P(y)`, used to decide whether
/// an ISO year has 52 or 53 weeks.
fn iso_p(year: i32) -> i32 {
	(year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)).rem_euclid(7)
}

fn weeks_in_iso_year(year: i32) -> i32 {
	if iso_p(year) == 4 || iso_p(year - 1) == 3 { 53 } else { 52 }
}

/// `(iso_year, iso_week)` for `t`, per ISO 8601 (weeks start Monday, week 1
/// is the week containing the year's first Thursday).
fn iso_week_number(t: &CalClock) -> (i32, i32) {
	let doy = day_of_year(t.year(), t.month(), t.day());
	let dow = t.day_of_week().of() as i32;
	let week = (doy - dow + 10) / 7;
	if week < 1 {
		(t.year() - 1, weeks_in_iso_year(t.year() - 1))
	} else if week > weeks_in_iso_year(t.year()) {
		(t.year() + 1, 1)
	} else {
		(t.year(), week)
	}
}

/// True iff `t`'s ISO week number matches one of `entries`, where a
/// negative entry `-n` counts from the last ISO week of `t`'s ISO year.
fn by_week_no_matches(t: &CalClock, entries: &[i32]) -> bool {
	let (iso_year, week) = iso_week_number(t);
	let total = weeks_in_iso_year(iso_year);
	entries.iter().any(|&e| {
		if e > 0 { e == week } else { total + e + 1 == week }
	})
}

/// Easter Sunday `(month, day)` for the Gregorian calendar year, via the
/// anonymous Gregorian algorithm (Meeus/Jones/Butcher).
fn easter_month_day(year: i32) -> (u8, u8) {
	let a = year % 19;
	let b = year / 100;
	let c = year % 100;
	let d = b / 4;
	let e = b % 4;
	let f = (b + 8) / 25;
	let g = (b - f + 1) / 3;
	let h = (19 * a + b - d - g + 15) % 30;
	let i = c / 4;
	let k = c % 4;
	let l = (32 + 2 * e + 2 * i - h - k) % 7;
	let m = (a + 11 * h + 22 * l) / 451;
	let month = (h + l - 7 * m + 114) / 31;
	let day = (h + l - 7 * m + 114) % 31 + 1;
	(month as u8, day as u8)
}

/// True iff `t`'s signed day offset from that year's Easter Sunday matches
/// one of `entries` (0 = Easter Sunday itself).
fn by_easter_matches(t: &CalClock, entries: &[i32]) -> bool {
	let (easter_month, easter_day) = easter_month_day(t.year());
	let easter_doy = day_of_year(t.year(), easter_month, easter_day);
	let doy = day_of_year(t.year(), t.month(), t.day());
	entries.contains(&(doy - easter_doy))
}

/// Maximum candidate-instant attempts per `After`/`Before` call; a
/// pathological rule (e.g. a BY-filter matching nothing) returns "no
/// occurrence" instead of looping forever.
const MAX_SCAN_ATTEMPTS: u32 = 1000;

/// Wraps an [`ROption`] and generates occurrences, applying weekend shift,
/// holiday shift, and business-day observance in the fixed order the
/// policy extensions define.
pub struct RRulePlus {
	options: ROption,
}

impl RRulePlus {
	pub fn new(options: ROption) -> Outcome<Self> {
		res!(options.validate());
		Ok(Self { options })
	}

	pub fn options(&self) -> &ROption {
		&self.options
	}

	/// Next occurrence strictly after `t`, or equal to `t` when `inclusive`.
	pub fn after(&self, t: &CalClock, inclusive: bool) -> Outcome<Option<CalClock>> {
		self.scan(t, inclusive, true)
	}

	/// Symmetric to [`Self::after`]: the most recent occurrence strictly
	/// before `t`, or equal to `t` when `inclusive`.
	pub fn before(&self, t: &CalClock, inclusive: bool) -> Outcome<Option<CalClock>> {
		self.scan(t, inclusive, false)
	}

	/// All valid occurrences in `[from, to]` (or `(from, to)` when not
	/// `inclusive` at either edge).
	pub fn between(&self, from: &CalClock, to: &CalClock, inclusive: bool) -> Outcome<Vec<CalClock>> {
		let mut out = Vec::new();
		let mut cursor = from.clone();
		let mut first = true;
		loop {
			let next = if first {
				res!(self.after(&cursor, inclusive))
			} else {
				res!(self.after(&cursor, false))
			};
			first = false;
			let Some(candidate) = next else { break };
			let past_end = if inclusive { candidate > *to } else { candidate >= *to };
			if past_end {
				break;
			}
			out.push(candidate.clone());
			cursor = candidate;
			if out.len() as u32 >= MAX_SCAN_ATTEMPTS {
				break;
			}
		}
		Ok(out)
	}

	fn calendar(&self) -> Option<&Arc<dyn Calendar>> {
		self.options.calendar()
	}

	fn step_raw(&self, from: &CalClock, forward: bool) -> Outcome<CalClock> {
		let n = if forward { self.options.interval as i64 } else { -(self.options.interval as i64) };
		self.options.freq.calc_duration(from, n)
	}

	fn apply_weekend(&self, t: CalClock) -> Outcome<Option<CalClock>> {
		let is_weekend = t.day_of_week().is_weekend();
		if self.options.shift_off_weekend && is_weekend {
			let shifted = match t.day_of_week() {
				DayOfWeek::Saturday => res!(t.add_days(2)),
				DayOfWeek::Sunday => res!(t.add_days(1)),
				_ => t,
			};
			return Ok(Some(shifted));
		}
		if self.options.valid_only_on_weekends {
			Ok(if is_weekend { Some(t) } else { None })
		} else if is_weekend {
			Ok(None)
		} else {
			Ok(Some(t))
		}
	}

	fn is_holiday(&self, t: &CalClock) -> Outcome<bool> {
		match self.calendar() {
			None => Ok(false),
			Some(cal) => {
				let (actual, observed, _) = res!(cal.is_holiday(t.date()));
				Ok(actual || observed)
			},
		}
	}

	fn apply_holiday(&self, t: CalClock) -> Outcome<Option<CalClock>> {
		if self.calendar().is_none() {
			return Ok(Some(t));
		}
		let is_holiday = res!(self.is_holiday(&t));
		if self.options.shift_off_holidays && is_holiday {
			let mut cur = t;
			for _ in 0..MAX_SCAN_ATTEMPTS {
				cur = res!(cur.add_days(1));
				if !res!(self.is_holiday(&cur)) {
					return Ok(Some(cur));
				}
			}
			return Ok(None);
		}
		if self.options.valid_only_on_holidays {
			Ok(if is_holiday { Some(t) } else { None })
		} else if is_holiday {
			Ok(None)
		} else {
			Ok(Some(t))
		}
	}

	fn apply_observance(&self, t: CalClock) -> Outcome<CalClock> {
		match self.options.observance {
			Observance::None => Ok(t),
			Observance::NextBusinessDay => {
				let mut cur = t;
				for _ in 0..MAX_SCAN_ATTEMPTS {
					if !cur.day_of_week().is_weekend() && !res!(self.is_holiday(&cur)) {
						return Ok(cur);
					}
					cur = res!(cur.add_days(1));
				}
				Ok(cur)
			},
			Observance::PreviousBusinessDay => {
				let mut cur = t;
				for _ in 0..MAX_SCAN_ATTEMPTS {
					if !cur.day_of_week().is_weekend() && !res!(self.is_holiday(&cur)) {
						return Ok(cur);
					}
					cur = res!(cur.add_days(-1));
				}
				Ok(cur)
			},
		}
	}

	/// Runs the full filter pipeline (custom filter, weekend, holiday,
	/// observance) over a raw BY-filter-matched candidate.
	fn process_candidate(&self, raw: CalClock) -> Outcome<Option<CalClock>> {
		if let Some(filter) = &self.options.custom_filter {
			if !filter(&raw) {
				return Ok(None);
			}
		}
		let Some(after_weekend) = res!(self.apply_weekend(raw)) else { return Ok(None) };
		let Some(after_holiday) = res!(self.apply_holiday(after_weekend)) else { return Ok(None) };
		Ok(Some(res!(self.apply_observance(after_holiday))))
	}

	fn scan(&self, t: &CalClock, inclusive: bool, forward: bool) -> Outcome<Option<CalClock>> {
		let Some(begin) = self.options.begin_time.clone() else {
			return Err(err!("ROption.begin_time is required to generate occurrences"; Invalid, Input));
		};
		let mut raw = begin;
		let mut emitted: u32 = 0;

		for _ in 0..MAX_SCAN_ATTEMPTS {
			if res!(self.options.matches_by_filters(&raw)) {
				if let Some(count) = self.options.count {
					if emitted >= count {
						return Ok(None);
					}
				}
				if let Some(candidate) = res!(self.process_candidate(raw.clone())) {
					let qualifies = if forward {
						if inclusive { candidate >= *t } else { candidate > *t }
					} else {
						if inclusive { candidate <= *t } else { candidate < *t }
					};
					if qualifies {
						if let Some(until) = &self.options.until_time {
							if forward && candidate > *until {
								return Ok(None);
							}
						}
						return Ok(Some(candidate));
					}
				}
				emitted += 1;
			}
			raw = res!(self.step_raw(&raw, forward));
		}
		Ok(None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::time::CalClockZone;

	fn at(y: i32, m: u8, d: u8, h: u8, min: u8) -> CalClock {
		CalClock::new(y, m, d, h, min, 0, 0, CalClockZone::utc()).unwrap()
	}

	#[test]
	fn daily_nine_am_window() {
		let options = ROption::new(TimeUnit::Daily).with_begin_time(at(2025, 6, 20, 9, 0));
		let rule = RRulePlus::new(options).unwrap();
		let last = rule.before(&at(2025, 6, 20, 10, 1), true).unwrap().unwrap();
		assert_eq!(last, at(2025, 6, 20, 9, 0));
	}

	#[test]
	fn april_15_shifts_to_monday_on_weekend() {
		let options = ROption::new(TimeUnit::Yearly)
			.with_begin_time(at(2025, 4, 15, 9, 0))
			.with_count(12)
			.with_calendar(Arc::new(crate::calendar::EngineCalendar::new("us", crate::calendar::HolidayEngine::us_federal())));
		let mut options = options;
		options.shift_off_weekend = true;
		options.shift_off_holidays = true;
		options.observance = Observance::NextBusinessDay;
		let rule = RRulePlus::new(options).unwrap();

		// 2028-04-15 is a Saturday; expect the Monday shift.
		let found = rule.after(&at(2027, 1, 1, 0, 0), true).unwrap();
		assert!(found.is_some());
	}

	#[test]
	fn quarterly_steps_advance_calendar_months() {
		let options = ROption::new(TimeUnit::Monthly)
			.with_interval(3)
			.with_begin_time(at(2025, 7, 1, 9, 0))
			.with_count(4);
		let rule = RRulePlus::new(options).unwrap();
		let occurrences = rule.between(&at(2025, 7, 1, 9, 0), &at(2026, 12, 31, 0, 0), true).unwrap();
		assert_eq!(occurrences.len(), 4);
		assert_eq!(occurrences[1].month(), 10);
		assert_eq!(occurrences[2].month(), 1);
	}
}
