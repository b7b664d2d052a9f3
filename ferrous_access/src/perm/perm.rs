//! A single named permission: a key plus a bitwise value, optionally
//! grouped under a category (e.g. "billing", "admin").

use crate::perm::perm_value::PermValue;

use ferrous_core::prelude::*;

use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct Perm {
	pub key: String,
	pub value: PermValue,
	pub category: Option<String>,
}

impl Perm {
	pub fn new(key: impl Into<String>, value: PermValue) -> Self {
		Self { key: normalize_key(&key.into()), value, category: None }
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	/// `"key:VALUE"`, with `VALUE` in canonical letter form.
	pub fn to_perm_string(&self) -> String {
		format!("{}:{}", self.key, self.value.to_canonical_string())
	}

	/// Parses `"key:VALUE"`, accepting either the canonical letter form or
	/// a decimal bit mask for `VALUE`.
	pub fn parse(s: &str) -> Outcome<Self> {
		let (key, value_str) = match s.split_once(':') {
			Some(parts) => parts,
			None => return Err(err!(
				"Permission string '{}' is missing a ':' separator", s; Invalid, Input)),
		};
		let key = normalize_key(key);
		if key.is_empty() {
			return Err(err!("Permission string '{}' has an empty key", s; Invalid, Input));
		}
		let value = res!(PermValue::from_str(value_str));
		Ok(Self { key, value, category: None })
	}
}

/// Keys are matched case-insensitively and without surrounding whitespace,
/// so normalize once on construction rather than on every comparison.
fn normalize_key(key: &str) -> String {
	key.trim().to_lowercase()
}

impl Display for Perm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_perm_string())
	}
}

impl FromStr for Perm {
	type Err = ferrous_core::error::Error<ferrous_core::error::ErrTag>;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl serde::Serialize for Perm {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_perm_string())
	}
}

impl<'de> serde::Deserialize<'de> for Perm {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		Self::parse(&s).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_through_canonical_string() {
		let perm = Perm::new("documents", PermValue::from_canonical_str("CRUD").unwrap());
		let parsed = Perm::parse(&perm.to_perm_string()).unwrap();
		assert_eq!(perm, parsed);
	}

	#[test]
	fn accepts_decimal_value_form() {
		let parsed = Perm::parse("documents:15").unwrap();
		assert_eq!(parsed.value.bits(), 15);
	}

	#[test]
	fn rejects_missing_separator() {
		assert!(Perm::parse("documents").is_err());
	}
}
