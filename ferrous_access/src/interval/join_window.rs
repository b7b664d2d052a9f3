//! Lead/lag windows around a recurrence occurrence, used for reminders and
//! grace periods — independent of a rule's core allow/deny window.

use crate::{constant::TimeUnit, time::CalClock};

use ferrous_core::prelude::*;

/// A half-open window either immediately before or immediately after an
/// occurrence, tagged for later identification (e.g. "30-day reminder").
#[derive(Clone, Debug)]
pub struct JoinWindow {
	is_before: bool,
	duration: i64,
	duration_unit: TimeUnit,
	label: String,
	tag: String,
}

impl JoinWindow {
	pub fn new(is_before: bool, duration: i64, duration_unit: TimeUnit, label: impl Into<String>, tag: impl Into<String>) -> Self {
		Self {
			is_before,
			// Negative durations are meaningless for a lead/lag window; clamp.
			duration: duration.max(0),
			duration_unit,
			label: label.into(),
			tag: tag.into(),
		}
	}

	pub fn is_before(&self) -> bool { self.is_before }
	pub fn duration(&self) -> i64 { self.duration }
	pub fn duration_unit(&self) -> TimeUnit { self.duration_unit }
	pub fn label(&self) -> &str { &self.label }
	pub fn tag(&self) -> &str { &self.tag }

	/// `Sanitize` drops any join window that fails validation once attached
	/// to a rule; this reports whether `self` would survive that check.
	pub fn is_valid(&self) -> bool {
		self.duration >= 0
	}

	/// The half-open `[start, end)` range this window occupies around
	/// `occurrence`: `[occurrence - d, occurrence)` when `is_before`, else
	/// `[occurrence, occurrence + d)`.
	pub fn window_range(&self, occurrence: &CalClock) -> Outcome<(CalClock, CalClock)> {
		if self.is_before {
			let start = res!(self.duration_unit.calc_duration(occurrence, -self.duration));
			Ok((start, occurrence.clone()))
		} else {
			let end = res!(self.duration_unit.calc_duration(occurrence, self.duration));
			Ok((occurrence.clone(), end))
		}
	}

	/// True iff `now` lies in `[start, end)` for this window around `occurrence`.
	pub fn matches(&self, now: &CalClock, occurrence: &CalClock) -> Outcome<bool> {
		let (start, end) = res!(self.window_range(occurrence));
		Ok(*now >= start && *now < end)
	}
}

/// An ordered collection of [`JoinWindow`]s attached to one rule.
#[derive(Clone, Debug, Default)]
pub struct JoinWindows {
	windows: Vec<JoinWindow>,
}

impl JoinWindows {
	pub fn new() -> Self {
		Self { windows: Vec::new() }
	}

	pub fn push(&mut self, window: JoinWindow) {
		self.windows.push(window);
	}

	pub fn windows(&self) -> &[JoinWindow] {
		&self.windows
	}

	/// Drops any window that fails validation, matching `RuleExtend`'s
	/// `Sanitize` step.
	pub fn sanitize(&mut self) {
		self.windows.retain(JoinWindow::is_valid);
	}

	/// Returns the tightest-bound matching window for `now` around
	/// `occurrence` — the one whose range is shortest; ties break toward
	/// the alphabetically smallest tag.
	pub fn matches(&self, now: &CalClock, occurrence: &CalClock) -> Outcome<Option<&JoinWindow>> {
		let mut best: Option<(&JoinWindow, i64)> = None;
		for window in &self.windows {
			if !res!(window.matches(now, occurrence)) {
				continue;
			}
			let (start, end) = res!(window.window_range(occurrence));
			let duration = res!(end.duration_since(&start));
			let span = duration.days() as i64 * 86_400_000_000_000 + duration.nanoseconds();
			match &best {
				None => best = Some((window, span)),
				Some((current, current_span)) => {
					if span < *current_span || (span == *current_span && window.tag() < current.tag()) {
						best = Some((window, span));
					}
				},
			}
		}
		Ok(best.map(|(w, _)| w))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::time::CalClockZone;

	fn at(y: i32, m: u8, d: u8, h: u8) -> CalClock {
		CalClock::new(y, m, d, h, 0, 0, 0, CalClockZone::utc()).unwrap()
	}

	#[test]
	fn half_open_boundary() {
		let occurrence = at(2025, 12, 12, 0);
		let window = JoinWindow::new(true, 1, TimeUnit::Daily, "1-day", "1d");
		let (start, end) = window.window_range(&occurrence).unwrap();
		assert!(window.matches(&start, &occurrence).unwrap());
		assert!(!window.matches(&end, &occurrence).unwrap());
	}

	#[test]
	fn tightest_window_wins() {
		let occurrence = at(2025, 12, 12, 0);
		let mut windows = JoinWindows::new();
		windows.push(JoinWindow::new(true, 30, TimeUnit::Daily, "30-day", "30d"));
		windows.push(JoinWindow::new(true, 15, TimeUnit::Daily, "15-day", "15d"));
		windows.push(JoinWindow::new(true, 1, TimeUnit::Daily, "1-day", "1d"));

		let now = at(2025, 11, 30, 0);
		let matched = windows.matches(&now, &occurrence).unwrap().unwrap();
		assert_eq!(matched.tag(), "15d");
	}
}
