//! A bitwise permission value: up to six independent flag bits
//! (`eXecute`, `List`, `Create`, `Read`, `Update`, `Delete`) packed into a
//! single byte, with a canonical letter string as its human-readable form.

use ferrous_core::prelude::*;

use std::fmt::{self, Display};
use std::str::FromStr;

/// A bitwise permission value. The canonical letter order is fixed as
/// "XLCRUD", independent of the order bits were set in.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PermValue(u8);

impl PermValue {
	pub const EXECUTE: u8 = 0x10;
	pub const LIST:    u8 = 0x20;
	pub const CREATE:  u8 = 0x01;
	pub const READ:    u8 = 0x02;
	pub const UPDATE:  u8 = 0x04;
	pub const DELETE:  u8 = 0x08;

	const CANONICAL: [(u8, char); 6] = [
		(Self::EXECUTE, 'X'),
		(Self::LIST,    'L'),
		(Self::CREATE,  'C'),
		(Self::READ,    'R'),
		(Self::UPDATE,  'U'),
		(Self::DELETE,  'D'),
	];

	pub fn empty() -> Self {
		Self(0)
	}

	pub fn from_bits(bits: u8) -> Self {
		Self(bits)
	}

	pub fn bits(&self) -> u8 {
		self.0
	}

	/// Parses a case-insensitive string of permission letters, setting every
	/// bit recognized; unknown characters are ignored silently rather than
	/// rejected. Distinct from [`Self::from_canonical_str`]'s stricter
	/// all-or-nothing validation, which backs `"key:VALUE"` permission-string
	/// parsing.
	pub fn set_values(&mut self, s: &str) {
		for ch in s.chars() {
			let upper = ch.to_ascii_uppercase();
			if let Some((bit, _)) = Self::CANONICAL.iter().find(|(_, letter)| *letter == upper) {
				self.set_by_bit(*bit);
			}
		}
	}

	pub fn set_by_bit(&mut self, bit: u8) {
		self.0 |= bit;
	}

	pub fn remove_by_bit(&mut self, bit: u8) {
		self.0 &= !bit;
	}

	pub fn has_bit(&self, bit: u8) -> bool {
		self.0 & bit == bit
	}

	pub fn is_empty_value(&self) -> bool {
		self.0 == 0
	}

	/// Bitwise OR of both values' bits.
	pub fn merge_perms_by_bits(&self, other: &Self) -> Self {
		Self(self.0 | other.0)
	}

	/// Clears every bit set in `other`.
	pub fn subtract_perms_by_bits(&self, other: &Self) -> Self {
		Self(self.0 & !other.0)
	}

	/// True iff `self` holds any bit not present in `allowed`.
	pub fn has_excessive_bits(&self, allowed: &Self) -> bool {
		self.0 & !allowed.0 != 0
	}

	/// Clears every bit not present in `allowed`.
	pub fn replace_excessive_bits(&self, allowed: &Self) -> Self {
		Self(self.0 & allowed.0)
	}

	/// True iff `self` and `other` share at least one set bit.
	pub fn match_one_by_bit(&self, other: &Self) -> bool {
		self.0 & other.0 != 0
	}

	pub fn to_canonical_string(&self) -> String {
		Self::CANONICAL.iter()
			.filter(|(bit, _)| self.has_bit(*bit))
			.map(|(_, letter)| *letter)
			.collect()
	}

	pub fn from_canonical_str(s: &str) -> Outcome<Self> {
		let mut value = Self::empty();
		for ch in s.chars() {
			let upper = ch.to_ascii_uppercase();
			match Self::CANONICAL.iter().find(|(_, letter)| *letter == upper) {
				Some((bit, _)) => value.set_by_bit(*bit),
				None => return Err(err!(
					"Unknown permission letter '{}' in '{}'", ch, s; Invalid, Input)),
			}
		}
		Ok(value)
	}
}

impl Display for PermValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_canonical_string())
	}
}

impl FromStr for PermValue {
	type Err = ferrous_core::error::Error<ferrous_core::error::ErrTag>;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// A bare integer ("decimal form") is accepted alongside the
		// canonical letter form, so round-tripping survives either spelling.
		if let Ok(bits) = s.parse::<u16>() {
			return Ok(Self::from_bits(bits as u8));
		}
		Self::from_canonical_str(s)
	}
}

impl serde::Serialize for PermValue {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_canonical_string())
	}
}

impl<'de> serde::Deserialize<'de> for PermValue {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		Self::from_str(&s).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canonical_order_is_fixed_regardless_of_set_order() {
		let mut a = PermValue::empty();
		a.set_by_bit(PermValue::DELETE);
		a.set_by_bit(PermValue::EXECUTE);
		a.set_by_bit(PermValue::READ);
		assert_eq!(a.to_canonical_string(), "XRD");
	}

	#[test]
	fn decimal_and_letter_forms_round_trip_to_same_value() {
		let from_letters = PermValue::from_str("CRUD").unwrap();
		let from_decimal = PermValue::from_str(&from_letters.bits().to_string()).unwrap();
		assert_eq!(from_letters, from_decimal);
	}

	#[test]
	fn excessive_bits_are_detected_and_trimmed() {
		let requested = PermValue::from_canonical_str("XLCRUD").unwrap();
		let allowed = PermValue::from_canonical_str("CR").unwrap();
		assert!(requested.has_excessive_bits(&allowed));
		assert_eq!(requested.replace_excessive_bits(&allowed).to_canonical_string(), "CR");
	}

	#[test]
	fn set_values_ignores_unknown_characters() {
		let mut value = PermValue::empty();
		value.set_values("cr?ud!");
		assert_eq!(value.to_canonical_string(), "CRUD");
	}

	#[test]
	fn from_canonical_str_rejects_unknown_characters() {
		assert!(PermValue::from_canonical_str("cr?ud").is_err());
	}
}
