//! Process-wide registry of holiday calendars, keyed by normalized ISO code.

use crate::calendar::{CalendarDate, HolidayEngine, HolidayDefinition};

use ferrous_core::prelude::*;

use std::{
	collections::HashMap,
	sync::{Arc, RwLock},
};

/// A calendar that can classify a date as a holiday and accept custom
/// holiday definitions.
///
/// `is_holiday` reports both the unadjusted ("actual") holiday date and the
/// weekend-adjusted ("observed") date, since a rule's `ShiftOffHolidays`
/// policy and a calendar's own weekend adjustment are independent concerns.
pub trait Calendar: Send + Sync {
	/// Returns `(actual, observed, holiday_name)` for `date`: `actual` is
	/// true when `date` is a holiday's unadjusted calendar date; `observed`
	/// is true when `date` is the (possibly weekend-shifted) date on which
	/// the holiday is observed.
	fn is_holiday(&self, date: &CalendarDate) -> Outcome<(bool, bool, Option<String>)>;

	/// Registers an additional holiday definition.
	fn add_holiday(&mut self, holiday: HolidayDefinition) -> Outcome<()>;

	/// The ISO code this calendar was constructed for.
	fn iso_code(&self) -> &str;
}

/// Default `Calendar` implementation backed by a [`HolidayEngine`].
#[derive(Clone, Debug)]
pub struct EngineCalendar {
	iso_code: String,
	engine: HolidayEngine,
}

impl EngineCalendar {
	pub fn new(iso_code: impl Into<String>, engine: HolidayEngine) -> Self {
		Self { iso_code: iso_code.into(), engine }
	}
}

impl Calendar for EngineCalendar {
	fn is_holiday(&self, date: &CalendarDate) -> Outcome<(bool, bool, Option<String>)> {
		let observed_name = res!(self.engine.holiday_name_on(date));
		let actual_name = res!(self.engine.actual_holiday_name_on(date));
		let name = observed_name.clone().or_else(|| actual_name.clone());
		Ok((actual_name.is_some(), observed_name.is_some(), name))
	}

	fn add_holiday(&mut self, holiday: HolidayDefinition) -> Outcome<()> {
		// HolidayEngine::add_holiday is a consuming builder method; rebuild
		// in place to preserve the mutable-reference contract of the trait.
		let engine = std::mem::replace(&mut self.engine, HolidayEngine::new(""));
		self.engine = engine.add_holiday(holiday);
		Ok(())
	}

	fn iso_code(&self) -> &str {
		&self.iso_code
	}
}

/// Normalizes an ISO code for registry lookups: trims whitespace, lowercases.
fn normalize(iso: &str) -> String {
	iso.trim().to_lowercase()
}

/// Builds the built-in calendar for a normalized ISO code, or fails with
/// "not supported" for anything the catalog does not recognise.
fn new_builtin(normalized: &str) -> Outcome<EngineCalendar> {
	let engine = match normalized {
		"us" => HolidayEngine::us_federal(),
		"uk" | "gb" => HolidayEngine::uk(),
		"ecb" | "eu" => HolidayEngine::ecb(),
		_ => return Err(err!("Calendar ISO code '{}' is not supported", normalized; Invalid, Input)),
	};
	Ok(EngineCalendar::new(normalized, engine))
}

/// Thread-safe, process-wide map from normalized ISO code to `Calendar`.
///
/// Reads take a reader lock; writes (including lazy construction on a
/// registry miss) take a writer lock with a double-checked re-read so a
/// racing pair of misses never overwrites each other's registration.
pub struct CalendarRegistry {
	calendars: RwLock<HashMap<String, Arc<dyn Calendar>>>,
}

impl CalendarRegistry {
	pub fn new() -> Self {
		Self { calendars: RwLock::new(HashMap::new()) }
	}

	/// Returns the calendar registered for `iso`, if any. Does not
	/// construct a built-in on miss; use [`Self::new_or_get`] for that.
	pub fn get(&self, iso: &str) -> Outcome<Option<Arc<dyn Calendar>>> {
		let key = normalize(iso);
		let guard = lock_read!(self.calendars);
		Ok(guard.get(&key).cloned())
	}

	/// Registers (or replaces) the calendar for `iso`.
	pub fn set(&self, iso: &str, calendar: Arc<dyn Calendar>) -> Outcome<()> {
		let key = normalize(iso);
		let mut guard = lock_write!(self.calendars);
		guard.insert(key, calendar);
		Ok(())
	}

	/// Returns the calendar for `iso`, lazily constructing it from the
	/// built-in catalog on a miss. Fails with "not supported" when `iso`
	/// names neither a registered nor a built-in calendar.
	pub fn new_or_get(&self, iso: &str) -> Outcome<Arc<dyn Calendar>> {
		let key = normalize(iso);
		if let Some(existing) = res!(self.get(&key)) {
			return Ok(existing);
		}
		let mut guard = lock_write!(self.calendars);
		// Re-check under the write lock in case another writer raced us.
		if let Some(existing) = guard.get(&key) {
			return Ok(existing.clone());
		}
		let built = res!(new_builtin(&key));
		let built: Arc<dyn Calendar> = Arc::new(built);
		guard.insert(key.clone(), built.clone());
		Ok(built)
	}
}

impl Default for CalendarRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// The conventional process-wide default registry, used by `RuleExtend`
/// when resolving an `isoCode` that wasn't bound to an explicit calendar.
pub static DEFAULT_REGISTRY: once_cell::sync::Lazy<CalendarRegistry> =
	once_cell::sync::Lazy::new(CalendarRegistry::new);
