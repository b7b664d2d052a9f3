//! A named collection of [`Perm`]s, keyed by permission key.

use crate::perm::{perm::Perm, perm_value::PermValue};

use ferrous_core::prelude::*;

use serde::Serialize as _;

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PermSet {
	perms: BTreeMap<String, Perm>,
}

impl PermSet {
	pub fn new() -> Self {
		Self { perms: BTreeMap::new() }
	}

	pub fn len(&self) -> usize {
		self.perms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.perms.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&Perm> {
		self.perms.get(key)
	}

	pub fn set_perm(&mut self, perm: Perm) {
		self.perms.insert(perm.key.clone(), perm);
	}

	/// OR's matching keys' bits together; keys only present in `other` are
	/// copied across.
	pub fn merge_perm(&mut self, other: &PermSet) {
		for (key, perm) in &other.perms {
			self.perms.entry(key.clone())
				.and_modify(|existing| {
					existing.value = existing.value.merge_perms_by_bits(&perm.value);
				})
				.or_insert_with(|| perm.clone());
		}
	}

	/// Clears `other`'s bits from matching keys; keys left with no bits
	/// set are dropped.
	pub fn subtract_perm(&mut self, other: &PermSet) {
		for (key, perm) in &other.perms {
			if let Some(existing) = self.perms.get_mut(key) {
				existing.value = existing.value.subtract_perms_by_bits(&perm.value);
			}
		}
		self.perms.retain(|_, perm| !perm.value.is_empty_value());
	}

	/// True iff `key` is present and shares at least one bit with `required`.
	pub fn matches_perm(&self, key: &str, required: &PermValue) -> bool {
		self.perms.get(key).map_or(false, |perm| perm.value.match_one_by_bit(required))
	}

	/// True iff `key` is present and holds every bit in `required`.
	pub fn has_perm_set(&self, key: &str, required: &PermValue) -> bool {
		self.perms.get(key).map_or(false, |perm| !required.has_excessive_bits(&perm.value))
	}

	/// True iff every permission in `self` is fully covered by the matching
	/// key in `other`; a key absent from `other` fails the check.
	pub fn is_subset_of(&self, other: &PermSet) -> bool {
		self.perms.iter().all(|(key, perm)| {
			other.perms.get(key).map_or(false, |allowed| !perm.value.has_excessive_bits(&allowed.value))
		})
	}

	/// Trims every key's bits down to what `allowed` grants for that key;
	/// keys absent from `allowed`, or left with zero bits after trimming,
	/// are dropped entirely.
	pub fn replace_excessive_perm_set(&self, allowed: &PermSet) -> PermSet {
		let mut out = PermSet::new();
		for (key, perm) in &self.perms {
			if let Some(allowed_perm) = allowed.perms.get(key) {
				let trimmed = perm.value.replace_excessive_bits(&allowed_perm.value);
				if !trimmed.is_empty_value() {
					out.set_perm(Perm { key: key.clone(), value: trimmed, category: perm.category.clone() });
				}
			}
		}
		out
	}

	pub fn to_string_array(&self) -> Vec<String> {
		self.perms.values().map(Perm::to_perm_string).collect()
	}

	pub fn from_string_array(entries: &[String]) -> Outcome<Self> {
		let mut set = Self::new();
		for entry in entries {
			set.set_perm(res!(Perm::parse(entry)));
		}
		Ok(set)
	}

	/// The decimal bit mask for every key, for compact storage formats.
	pub fn marshal_as_int(&self) -> BTreeMap<String, u8> {
		self.perms.iter().map(|(key, perm)| (key.clone(), perm.value.bits())).collect()
	}

	pub fn marshal_json(&self) -> Outcome<String> {
		match serde_json::to_string(&self.to_string_array()) {
			Ok(s) => Ok(s),
			Err(e) => Err(err!("Failed to marshal PermSet to JSON: {}", e; Invalid, Input)),
		}
	}

	pub fn unmarshal_json(bytes: &[u8]) -> Outcome<Self> {
		let entries: Vec<String> = match serde_json::from_slice(bytes) {
			Ok(entries) => entries,
			Err(e) => return Err(err!("Failed to unmarshal PermSet from JSON: {}", e; Invalid, Input)),
		};
		Self::from_string_array(&entries)
	}
}

impl serde::Serialize for PermSet {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_string_array().serialize(serializer)
	}
}

impl<'de> serde::Deserialize<'de> for PermSet {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let entries = <Vec<String> as serde::Deserialize>::deserialize(deserializer)?;
		Self::from_string_array(&entries).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn perm(key: &str, letters: &str) -> Perm {
		Perm::new(key, PermValue::from_canonical_str(letters).unwrap())
	}

	#[test]
	fn merge_ors_matching_keys_and_copies_new_ones() {
		let mut a = PermSet::new();
		a.set_perm(perm("documents", "CR"));
		let mut b = PermSet::new();
		b.set_perm(perm("documents", "UD"));
		b.set_perm(perm("billing", "R"));

		a.merge_perm(&b);
		assert_eq!(a.get("documents").unwrap().value.to_canonical_string(), "CRUD");
		assert_eq!(a.get("billing").unwrap().value.to_canonical_string(), "R");
	}

	#[test]
	fn subtract_drops_keys_left_with_no_bits() {
		let mut a = PermSet::new();
		a.set_perm(perm("documents", "CR"));
		let mut b = PermSet::new();
		b.set_perm(perm("documents", "CR"));

		a.subtract_perm(&b);
		assert!(a.get("documents").is_none());
	}

	#[test]
	fn replace_excessive_drops_unlisted_keys_and_trims_listed_ones() {
		let mut requested = PermSet::new();
		requested.set_perm(perm("documents", "XLCRUD"));
		requested.set_perm(perm("secrets", "R"));

		let mut allowed = PermSet::new();
		allowed.set_perm(perm("documents", "CR"));

		let trimmed = requested.replace_excessive_perm_set(&allowed);
		assert_eq!(trimmed.get("documents").unwrap().value.to_canonical_string(), "CR");
		assert!(trimmed.get("secrets").is_none());
	}

	#[test]
	fn string_array_round_trips() {
		let mut set = PermSet::new();
		set.set_perm(perm("documents", "CRUD"));
		let array = set.to_string_array();
		let restored = PermSet::from_string_array(&array).unwrap();
		assert_eq!(set, restored);
	}
}
