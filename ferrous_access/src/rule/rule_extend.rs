//! One policy rule: recurrence + duration + priority + allow/deny + geo +
//! join-windows.

use crate::{
	calendar::{CalendarDate, DEFAULT_REGISTRY},
	constant::TimeUnit,
	interval::{JoinWindow, JoinWindows, RRulePlus, ROption, RrIncType},
	rule::collaborators::{GeoFilter, GeoInfo, PreAllow, RuleEvaluator},
	time::CalClock,
};

use ferrous_core::prelude::*;

use std::sync::Arc;

/// A single upcoming occurrence of a rule, annotated with the rule's own
/// allow/deny and priority (used by `RuleStack.GetNextOccurrencesStacked`).
#[derive(Clone, Debug)]
pub struct RuleOccurrence {
	pub time: CalClock,
	pub is_deny: bool,
	pub priority: i64,
	pub rule_name: String,
}

/// One recurring allow/deny rule: a recurrence spec, a core duration, a
/// priority used for stack arbitration, and the join windows and geo
/// filters layered on top of it.
#[derive(Clone)]
pub struct RuleExtend {
	name: String,
	is_deny: bool,
	priority: i64,
	is_any_time: bool,
	start_date: Option<CalendarDate>,
	end_date: Option<CalendarDate>,
	r_options: ROption,
	join_windows: JoinWindows,
	duration: i64,
	duration_unit: Option<TimeUnit>,
	geo_filters: Vec<Arc<dyn GeoFilter>>,
	validated: bool,
}

impl RuleExtend {
	pub fn new(name: impl Into<String>, r_options: ROption) -> Self {
		Self {
			name: name.into(),
			is_deny: false,
			priority: 0,
			is_any_time: false,
			start_date: None,
			end_date: None,
			r_options,
			join_windows: JoinWindows::new(),
			duration: 0,
			duration_unit: None,
			geo_filters: Vec::new(),
			validated: false,
		}
	}

	pub fn any_time(name: impl Into<String>) -> Self {
		Self {
			is_any_time: true,
			..Self::new(name, ROption::new(TimeUnit::Daily))
		}
	}

	pub fn name(&self) -> &str { &self.name }
	pub fn is_deny(&self) -> bool { self.is_deny }
	pub fn priority(&self) -> i64 { self.priority }
	pub fn is_any_time(&self) -> bool { self.is_any_time }
	pub fn r_options(&self) -> &ROption { &self.r_options }
	pub fn join_windows(&self) -> &JoinWindows { &self.join_windows }

	pub fn with_deny(mut self, deny: bool) -> Self {
		self.is_deny = deny;
		self
	}

	pub fn with_priority(mut self, priority: i64) -> Self {
		self.priority = priority;
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

	pub fn with_duration(mut self, duration: i64, unit: TimeUnit) -> Self {
		self.duration = duration;
		self.duration_unit = Some(unit);
		self
	}

	pub fn add_join_window(mut self, window: JoinWindow) -> Self {
		self.join_windows.push(window);
		self
	}

	pub fn add_geo_filter(mut self, filter: Arc<dyn GeoFilter>) -> Self {
		self.geo_filters.push(filter);
		self
	}

	/// Normalizes the name, short-circuits recurrence validation for
	/// `IsAnyTime` rules, validates the recurrence and duration/unit
	/// coherency otherwise, and sanitizes the join windows. Rules are
	/// immutable after this succeeds.
	pub fn validate(&mut self) -> Outcome<()> {
		self.name = self.name.trim().to_string();

		if !self.is_any_time {
			res!(self.r_options.validate());
			if self.duration > 0 && self.duration_unit.is_none() {
				return Err(err!("Rule '{}' has duration > 0 but no durationUnit", self.name; Invalid, Input));
			}
			if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
				if start > end {
					return Err(err!("Rule '{}' has startDate after endDate", self.name; Invalid, Input));
				}
			}
		}

		self.join_windows.sanitize();
		self.validated = true;
		Ok(())
	}

	pub fn is_validated(&self) -> bool {
		self.validated
	}

	/// Materializes the recurrence generator, resolving `ISOCode` lazily
	/// against the default calendar registry when no calendar is already
	/// bound.
	pub fn to_rrule(&self) -> Outcome<RRulePlus> {
		let mut options = self.r_options.clone();
		if options.calendar().is_none() && options.iso_code.is_some() {
			res!(options.resolve_calendar(&DEFAULT_REGISTRY));
		}
		RRulePlus::new(options)
	}

	/// Window match independent of `IsDeny`, used directly by
	/// `RuleStack` and wrapped (negated for deny rules) by [`Self::is_between`].
	fn raw_window_match(&self, now: &CalClock) -> Outcome<bool> {
		if self.is_any_time {
			return Ok(true);
		}
		if let Some(start) = &self.start_date {
			if now.date() < start {
				return Ok(false);
			}
		}
		if let Some(end) = &self.end_date {
			if now.date() > end {
				return Ok(false);
			}
		}
		let duration_unit = match self.duration_unit {
			Some(unit) => unit,
			None => return Err(err!("Rule '{}' has no durationUnit and is not isAnyTime", self.name; Invalid, Input)),
		};

		let rrule = res!(self.to_rrule());
		let time_anchored = !self.r_options.by_hour.is_empty()
			|| !self.r_options.by_minute.is_empty()
			|| !self.r_options.by_second.is_empty();
		// Time-anchored matching (step 3) honors an explicit `RrIncType`;
		// standard matching (step 4) is always inclusive regardless of it.
		let inclusive = if time_anchored {
			matches!(self.r_options.rr_inc_type, RrIncType::Inclusive)
		} else {
			true
		};

		let last = res!(rrule.before(now, inclusive));
		let Some(start_instant) = last else { return Ok(false) };
		let end_instant = res!(duration_unit.calc_duration(&start_instant, self.duration));
		Ok(start_instant <= *now && *now < end_instant)
	}

	/// True iff `now` is inside the core occurrence window of some
	/// instance of this rule; `IsDeny` negates the raw match.
	pub fn is_between(&self, now: &CalClock) -> Outcome<bool> {
		let raw = res!(self.raw_window_match(now));
		Ok(if self.is_deny { !raw } else { raw })
	}

	/// Locates the closest occurrence (previous exclusive, next inclusive)
	/// and returns the first join window matching `now` around it. Does
	/// not apply `IsDeny`.
	pub fn match_join_window(&self, now: &CalClock) -> Outcome<Option<JoinWindow>> {
		if self.is_any_time {
			return Ok(None);
		}
		let rrule = res!(self.to_rrule());
		let prev = res!(rrule.before(now, false));
		let next = res!(rrule.after(now, true));
		for occurrence in [prev, next].into_iter().flatten() {
			if let Some(window) = res!(self.join_windows.matches(now, &occurrence)) {
				return Ok(Some(window.clone()));
			}
		}
		Ok(None)
	}

	/// Runs the pre-allow gate, the window match, the allow gate, and the
	/// stacked geo filters, in that order, independent of `IsDeny`. This is
	/// the raw "does this rule's window contain `now`" match that
	/// `RuleStack` needs in order to track the best matching allow rule
	/// and the best matching deny rule separately (§4.6); negating it by
	/// `IsDeny` here would make a deny rule's raw match un-observable by
	/// the stack whenever the rule's window actually contains `now`.
	pub fn raw_match_with_options(
		&self,
		now: &CalClock,
		geo: &GeoInfo,
		evaluator: Option<&dyn RuleEvaluator>,
	) -> Outcome<bool> {
		if let Some(eval) = evaluator {
			match res!(eval.is_pre_allowed(now, geo)) {
				PreAllow::Allow => return Ok(true),
				PreAllow::Deny => return Ok(false),
				PreAllow::Continue => {},
			}
		}

		let raw = res!(self.raw_window_match(now));
		if !raw {
			return Ok(false);
		}

		if let Some(eval) = evaluator {
			res!(eval.is_allowed(now, geo));
		}

		for filter in &self.geo_filters {
			let matched = filter.evaluate(geo);
			let effective = if filter.is_deny() { !matched } else { matched };
			if !effective {
				return Ok(false);
			}
		}

		Ok(true)
	}

	/// Same as [`Self::raw_match_with_options`], but negates the result by
	/// `IsDeny` for callers that want a single rule's own final decision
	/// rather than the raw match a `RuleStack` arbitrates over.
	pub fn is_between_with_options(
		&self,
		now: &CalClock,
		geo: &GeoInfo,
		evaluator: Option<&dyn RuleEvaluator>,
	) -> Outcome<bool> {
		let raw = res!(self.raw_match_with_options(now, geo, evaluator));
		Ok(if self.is_deny { !raw } else { raw })
	}

	/// Up to `n` upcoming occurrences, ignoring `IsDeny`. `IsAnyTime`
	/// returns `[now]`.
	pub fn get_next_times(&self, now: &CalClock, n: usize) -> Outcome<Vec<CalClock>> {
		if self.is_any_time {
			return Ok(vec![now.clone()]);
		}
		let rrule = res!(self.to_rrule());
		let mut out = Vec::with_capacity(n);
		let mut cursor = now.clone();
		for i in 0..n {
			let inclusive = i == 0;
			match res!(rrule.after(&cursor, inclusive)) {
				Some(t) => {
					out.push(t.clone());
					cursor = t;
				},
				None => break,
			}
		}
		Ok(out)
	}

	/// Same as [`Self::get_next_times`], annotating each entry with this
	/// rule's `IsDeny`/`Priority`/`Name`.
	pub fn get_next_occurrences(&self, now: &CalClock, n: usize) -> Outcome<Vec<RuleOccurrence>> {
		let times = res!(self.get_next_times(now, n));
		Ok(times.into_iter().map(|time| RuleOccurrence {
			time,
			is_deny: self.is_deny,
			priority: self.priority,
			rule_name: self.name.clone(),
		}).collect())
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
	fn daily_one_minute_window() {
		let options = ROption::new(TimeUnit::Daily).with_begin_time(at(2025, 6, 20, 9, 0));
		let mut rule = RuleExtend::new("daily-9am", options).with_duration(1, TimeUnit::Minutely);
		rule.validate().unwrap();

		assert!(!rule.is_between(&at(2025, 6, 20, 10, 1)).unwrap());
		assert!(rule.is_between(&at(2025, 6, 20, 10, 0)).unwrap());
	}

	#[test]
	fn any_time_deny_never_matches() {
		let mut rule = RuleExtend::any_time("block-all").with_deny(true);
		rule.validate().unwrap();
		assert!(!rule.is_between(&at(2025, 1, 1, 0, 0)).unwrap());
	}
}
