//! A small RFC 3339 parser.
//!
//! The rest of the format module (`rfc9557`) only formats timestamps; nothing
//! in this crate parses one back. Rule timestamps (`RuleExtend.startDate`,
//! `ROption.beginTime`, ...) and `CalClock`'s own `serde` impl both need that
//! direction, so it lives here rather than duplicated at each call site.

use crate::time::{CalClock, CalClockZone};

use ferrous_core::prelude::*;

/// Parses an RFC 3339 timestamp such as "2025-06-20T10:00:00Z" or
/// "2025-06-20T10:00:00.123+05:30" into a `CalClock` anchored in UTC or the
/// stated offset.
///
/// Only the UTC offset is honoured; named zones ("America/New_York") are not
/// accepted here (use `CalClockZone::new` plus `CalClock::from_date_time` for
/// that; this parser exists for the wire format, which only ever carries
/// numeric offsets or "Z").
pub fn parse_rfc3339(input: &str) -> Outcome<CalClock> {
	let input = input.trim();
	let t_pos = input.find(['T', 't']).ok_or_else(|| err!(
		"RFC 3339 timestamp '{}' is missing the 'T' date/time separator", input; Invalid, Input))?;
	let (date_part, rest) = input.split_at(t_pos);
	let time_and_offset = &rest[1..];

	let date_fields: Vec<&str> = date_part.split('-').collect();
	if date_fields.len() != 3 {
		return Err(err!("Invalid RFC 3339 date '{}'", date_part; Invalid, Input));
	}
	let year: i32 = res!(date_fields[0].parse().map_err(|_| err!(
		"Invalid year in '{}'", input; Invalid, Input)));
	let month: u8 = res!(date_fields[1].parse().map_err(|_| err!(
		"Invalid month in '{}'", input; Invalid, Input)));
	let day: u8 = res!(date_fields[2].parse().map_err(|_| err!(
		"Invalid day in '{}'", input; Invalid, Input)));

	let (offset_millis, time_part) = res!(split_offset(time_and_offset));

	let time_fields: Vec<&str> = time_part.split(':').collect();
	if time_fields.len() != 3 {
		return Err(err!("Invalid RFC 3339 time '{}'", time_part; Invalid, Input));
	}
	let hour: u8 = res!(time_fields[0].parse().map_err(|_| err!(
		"Invalid hour in '{}'", input; Invalid, Input)));
	let minute: u8 = res!(time_fields[1].parse().map_err(|_| err!(
		"Invalid minute in '{}'", input; Invalid, Input)));

	let (whole_secs, nanos) = match time_fields[2].split_once('.') {
		Some((s, frac)) => {
			let mut frac = frac.to_string();
			while frac.len() < 9 {
				frac.push('0');
			}
			frac.truncate(9);
			let s: u8 = res!(s.parse().map_err(|_| err!(
				"Invalid seconds in '{}'", input; Invalid, Input)));
			let n: u32 = res!(frac.parse().map_err(|_| err!(
				"Invalid fractional seconds in '{}'", input; Invalid, Input)));
			(s, n)
		},
		None => {
			let s: u8 = res!(time_fields[2].parse().map_err(|_| err!(
				"Invalid seconds in '{}'", input; Invalid, Input)));
			(s, 0)
		},
	};

	// Build the wall-clock reading in UTC, then subtract the stated offset to
	// land on the true UTC instant (never reinterpret UTC in another zone).
	let wall_clock = res!(CalClock::new(
		year, month, day, hour, minute, whole_secs, nanos, CalClockZone::utc()));
	if offset_millis == 0 {
		Ok(wall_clock)
	} else {
		wall_clock.add_millis(-(offset_millis as i64))
	}
}

/// Splits trailing "Z"/"+HH:MM"/"-HH:MM" off a time-of-day string, returning
/// the offset in milliseconds east of UTC and the bare time string.
fn split_offset(s: &str) -> Outcome<(i32, &str)> {
	if let Some(stripped) = s.strip_suffix(['Z', 'z']) {
		return Ok((0, stripped));
	}
	// Scan from the end for a sign character that isn't part of the
	// fractional-seconds/time body (there is none there, so the first
	// '+' or '-' found is the offset separator).
	if let Some(idx) = s.rfind(['+', '-']) {
		let (time_str, offset_str) = s.split_at(idx);
		let sign = if offset_str.starts_with('-') { -1 } else { 1 };
		let offset_str = &offset_str[1..];
		let parts: Vec<&str> = offset_str.split(':').collect();
		if parts.is_empty() || parts.len() > 2 {
			return Err(err!("Invalid UTC offset '{}'", offset_str; Invalid, Input));
		}
		let hours: i32 = res!(parts[0].parse().map_err(|_| err!(
			"Invalid offset hours '{}'", offset_str; Invalid, Input)));
		let minutes: i32 = if parts.len() == 2 {
			res!(parts[1].parse().map_err(|_| err!(
				"Invalid offset minutes '{}'", offset_str; Invalid, Input)))
		} else {
			0
		};
		let millis = sign * (hours * 60 + minutes) * 60 * 1000;
		return Ok((millis, time_str));
	}
	Err(err!("RFC 3339 timestamp '{}' is missing a UTC offset", s; Invalid, Input))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_utc_z() {
		let c = parse_rfc3339("2025-06-20T10:00:00Z").unwrap();
		assert_eq!(c.year(), 2025);
		assert_eq!(c.month(), 6);
		assert_eq!(c.day(), 20);
		assert_eq!(c.hour(), 10);
		assert_eq!(c.minute(), 0);
		assert_eq!(c.second(), 0);
	}

	#[test]
	fn parses_fractional_seconds() {
		let c = parse_rfc3339("2025-01-02T03:04:05.25Z").unwrap();
		assert_eq!(c.second(), 5);
		assert_eq!(c.nanosecond(), 250_000_000);
	}

	#[test]
	fn parses_positive_offset_and_normalizes_to_utc() {
		let c = parse_rfc3339("2025-06-20T12:00:00+02:00").unwrap();
		assert_eq!(c.hour(), 10);
		assert_eq!(c.zone().id(), "UTC");
	}

	#[test]
	fn rejects_missing_offset() {
		assert!(parse_rfc3339("2025-06-20T10:00:00").is_err());
	}
}
