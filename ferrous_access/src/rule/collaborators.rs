//! Collaborator interfaces consumed by `RuleExtend`/`RuleStack` but
//! implemented elsewhere (session layer, FTP/TLS adapters, ...). Only the
//! interfaces matter here, not the implementations.

use crate::time::CalClock;

use ferrous_core::prelude::*;

/// Minimal geographic context passed alongside `now` to a rule evaluation.
/// The surrounding connection-adapter framework is out of scope; this is
/// deliberately just enough shape for a `GeoFilter` to act on.
#[derive(Clone, Debug, Default)]
pub struct GeoInfo {
	pub region: Option<String>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

/// A single stacked geo predicate. `is_deny` inverts its match the same
/// way `RuleExtend.IsDeny` inverts a window match.
pub trait GeoFilter: Send + Sync {
	fn evaluate(&self, geo: &GeoInfo) -> bool;
	fn is_deny(&self) -> bool {
		false
	}
}

/// Outcome of `RuleEvaluator::is_pre_allowed`: a chance to short-circuit
/// before the rule's own window matching runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreAllow {
	Allow,
	Deny,
	Continue,
}

/// An optional external gate consulted by `RuleExtend.IsBetweenWithOptions`.
pub trait RuleEvaluator: Send + Sync {
	fn is_pre_allowed(&self, now: &CalClock, geo: &GeoInfo) -> Outcome<PreAllow>;
	fn is_allowed(&self, now: &CalClock, geo: &GeoInfo) -> Outcome<()>;
}
