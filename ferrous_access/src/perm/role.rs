//! Named bundles of permissions (`Role`), grouping of several named bundles
//! (`RoleMulti`), and a registry that composes them into a `PermSet`
//! (`RoleFactory`).
//!
//! A `Role`/`RoleMulti` does not carry permissions directly; it names one or
//! more base roles registered in a `RoleFactory` and layers a `PermsPlus`/
//! `PermsMinus` delta on top: the factory's base set for the name(s) is
//! unioned with `PermsPlus`, then has `PermsMinus` subtracted.

use crate::perm::{perm::Perm, perm_set::PermSet};

use ferrous_core::prelude::*;

use std::collections::HashMap;
use std::sync::RwLock;

/// A request to build a `PermSet` from the base role `name` registered in a
/// `RoleFactory`, plus an additive and a subtractive delta.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Role {
	name: String,
	perms_plus: PermSet,
	perms_minus: PermSet,
}

impl Role {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), perms_plus: PermSet::new(), perms_minus: PermSet::new() }
	}

	pub fn with_perm_plus(mut self, perm: Perm) -> Self {
		self.perms_plus.set_perm(perm);
		self
	}

	pub fn with_perm_minus(mut self, perm: Perm) -> Self {
		self.perms_minus.set_perm(perm);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn perms_plus(&self) -> &PermSet {
		&self.perms_plus
	}

	pub fn perms_minus(&self) -> &PermSet {
		&self.perms_minus
	}
}

/// A request to build a `PermSet` from several base role names registered in
/// a `RoleFactory`, merged together, with a single additive and subtractive
/// delta applied on top of the merged result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoleMulti {
	names: Vec<String>,
	perms_plus: PermSet,
	perms_minus: PermSet,
}

impl RoleMulti {
	pub fn new() -> Self {
		Self { names: Vec::new(), perms_plus: PermSet::new(), perms_minus: PermSet::new() }
	}

	pub fn add_name(mut self, name: impl Into<String>) -> Self {
		self.names.push(name.into());
		self
	}

	pub fn with_perm_plus(mut self, perm: Perm) -> Self {
		self.perms_plus.set_perm(perm);
		self
	}

	pub fn with_perm_minus(mut self, perm: Perm) -> Self {
		self.perms_minus.set_perm(perm);
		self
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn perms_plus(&self) -> &PermSet {
		&self.perms_plus
	}

	pub fn perms_minus(&self) -> &PermSet {
		&self.perms_minus
	}
}

/// A named registry of base `PermSet`s, used to materialize an effective
/// `PermSet` for a `Role` or `RoleMulti` request without the caller handling
/// the base sets directly.
#[derive(Default)]
pub struct RoleFactory {
	bases: RwLock<HashMap<String, PermSet>>,
}

impl RoleFactory {
	pub fn new() -> Self {
		Self { bases: RwLock::new(HashMap::new()) }
	}

	pub fn register(&self, name: impl Into<String>, base: PermSet) -> Outcome<()> {
		let mut guard = lock_write!(self.bases);
		guard.insert(name.into(), base);
		Ok(())
	}

	pub fn base(&self, name: &str) -> Outcome<Option<PermSet>> {
		let guard = lock_read!(self.bases);
		Ok(guard.get(name).cloned())
	}

	fn require_base(&self, name: &str) -> Outcome<PermSet> {
		match res!(self.base(name)) {
			Some(base) => Ok(base),
			None => Err(err!("Unknown role '{}'", name; Invalid, Input)),
		}
	}

	/// The base set for `role`'s name, with `role`'s `PermsPlus` merged in
	/// and `role`'s `PermsMinus` subtracted out.
	pub fn build_perm_set(&self, role: &Role) -> Outcome<PermSet> {
		let mut out = res!(self.require_base(&role.name));
		out.merge_perm(&role.perms_plus);
		out.subtract_perm(&role.perms_minus);
		Ok(out)
	}

	pub fn build_perm_set_with_limit(&self, role: &Role, limit: &PermSet) -> Outcome<PermSet> {
		let built = res!(self.build_perm_set(role));
		Ok(built.replace_excessive_perm_set(limit))
	}

	/// The union of the base sets for every name in `multi`, with `multi`'s
	/// `PermsPlus` merged in and `PermsMinus` subtracted from the combined
	/// result.
	pub fn build_perm_set_multi(&self, multi: &RoleMulti) -> Outcome<PermSet> {
		let mut out = PermSet::new();
		for name in &multi.names {
			let base = res!(self.require_base(name));
			out.merge_perm(&base);
		}
		out.merge_perm(&multi.perms_plus);
		out.subtract_perm(&multi.perms_minus);
		Ok(out)
	}

	pub fn build_perm_set_with_limit_multi(&self, multi: &RoleMulti, limit: &PermSet) -> Outcome<PermSet> {
		let built = res!(self.build_perm_set_multi(multi));
		Ok(built.replace_excessive_perm_set(limit))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::perm::perm_value::PermValue;

	fn perm(key: &str, letters: &str) -> Perm {
		Perm::new(key, PermValue::from_canonical_str(letters).unwrap())
	}

	fn base_set(entries: &[(&str, &str)]) -> PermSet {
		let mut set = PermSet::new();
		for (key, letters) in entries {
			set.set_perm(perm(key, letters));
		}
		set
	}

	#[test]
	fn build_perm_set_returns_the_registered_base() {
		let factory = RoleFactory::new();
		factory.register("editor", base_set(&[("documents", "CRUD")])).unwrap();

		let perms = factory.build_perm_set(&Role::new("editor")).unwrap();
		assert_eq!(perms.get("documents").unwrap().value.to_canonical_string(), "CRUD");
	}

	#[test]
	fn unknown_role_is_an_error() {
		let factory = RoleFactory::new();
		assert!(factory.build_perm_set(&Role::new("ghost")).is_err());
	}

	#[test]
	fn role_applies_plus_and_minus_deltas_over_the_base() {
		let factory = RoleFactory::new();
		factory.register("reader", base_set(&[("documents", "R")])).unwrap();

		let role = Role::new("reader")
			.with_perm_plus(perm("documents", "U"))
			.with_perm_minus(perm("documents", "R"));
		let perms = factory.build_perm_set(&role).unwrap();
		assert_eq!(perms.get("documents").unwrap().value.to_canonical_string(), "U");
	}

	/// End-to-end scenario: an admin role and a more limited user role are
	/// merged, topped up with a `reports` grant and trimmed of `dash:L`,
	/// then clamped against a caller-supplied ceiling.
	#[test]
	fn role_multi_merges_named_bases_and_applies_deltas_then_limit() {
		let factory = RoleFactory::new();
		factory.register("admin", base_set(&[
			("self", "XLCRUD"), ("dash", "XLCRUD"), ("bills", "XLCRUD"),
		])).unwrap();
		factory.register("user", base_set(&[
			("self", "XR"), ("dash", "XLR"),
		])).unwrap();

		let multi = RoleMulti::new()
			.add_name("admin")
			.add_name("user")
			.with_perm_plus(perm("reports", "CRUD"))
			.with_perm_minus(perm("dash", "L"));

		let limit = base_set(&[
			("self", "XR"), ("dash", "XR"), ("bills", "XL"), ("reports", "R"),
		]);

		let limited = factory.build_perm_set_with_limit_multi(&multi, &limit).unwrap();
		assert_eq!(limited.get("self").unwrap().value.to_canonical_string(), "XR");
		assert_eq!(limited.get("dash").unwrap().value.to_canonical_string(), "XR");
		assert_eq!(limited.get("bills").unwrap().value.to_canonical_string(), "XL");
		assert_eq!(limited.get("reports").unwrap().value.to_canonical_string(), "R");
	}
}
