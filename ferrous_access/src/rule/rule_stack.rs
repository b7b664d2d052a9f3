//! Ordered collection of rules, arbitrated by descending priority.

use crate::{
	rule::{
		collaborators::{GeoInfo, RuleEvaluator},
		rule_extend::{RuleExtend, RuleOccurrence},
	},
	time::CalClock,
};

use ferrous_core::prelude::*;

use std::collections::HashMap;

/// The outcome of evaluating a `RuleStack` against an instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
	Allow,
	Deny,
}

impl Decision {
	pub fn is_allow(&self) -> bool {
		matches!(self, Self::Allow)
	}
}

/// An ordered set of [`RuleExtend`]s. No invariant on storage order;
/// evaluation derives its own order via a stable sort on `priority`
/// descending (ties preserve insertion order).
#[derive(Clone, Default)]
pub struct RuleStack {
	rules: Vec<RuleExtend>,
}

impl RuleStack {
	pub fn new() -> Self {
		Self { rules: Vec::new() }
	}

	pub fn push(&mut self, rule: RuleExtend) {
		self.rules.push(rule);
	}

	pub fn rules(&self) -> &[RuleExtend] {
		&self.rules
	}

	fn sorted_indices(&self) -> Vec<usize> {
		let mut indices: Vec<usize> = (0..self.rules.len()).collect();
		// `sort_by` is stable: ties preserve original (insertion) order.
		indices.sort_by(|&a, &b| self.rules[b].priority().cmp(&self.rules[a].priority()));
		indices
	}

	/// Sorts by priority descending, tracks the best (highest-priority)
	/// matching allow rule and the best matching deny rule, and decides:
	/// deny wins when its priority is at least the best allow's; allow
	/// wins only when it strictly outranks every matching deny; otherwise
	/// default deny.
	pub fn evaluate(&self, now: &CalClock) -> Outcome<Decision> {
		self.evaluate_with_options(now, &GeoInfo::default(), None)
	}

	pub fn evaluate_with_options(
		&self,
		now: &CalClock,
		geo: &GeoInfo,
		evaluator: Option<&dyn RuleEvaluator>,
	) -> Outcome<Decision> {
		let mut best_allow: Option<i64> = None;
		let mut best_deny: Option<i64> = None;

		for &idx in &self.sorted_indices() {
			let rule = &self.rules[idx];
			let matched = res!(rule.raw_match_with_options(now, geo, evaluator));
			if !matched {
				continue;
			}
			if rule.is_deny() {
				best_deny = Some(best_deny.map_or(rule.priority(), |p| p.max(rule.priority())));
			} else {
				best_allow = Some(best_allow.map_or(rule.priority(), |p| p.max(rule.priority())));
			}
		}

		let decision = match (best_allow, best_deny) {
			(Some(allow_p), Some(deny_p)) if deny_p >= allow_p => Decision::Deny,
			(Some(_), _) => Decision::Allow,
			_ => Decision::Deny,
		};
		Ok(decision)
	}

	/// Upcoming occurrences for every rule in priority order, keyed by
	/// evaluation index (the rule's position in the priority-sorted order,
	/// not its storage index).
	pub fn get_next_occurrences_stacked(&self, now: &CalClock, n: usize) -> Outcome<HashMap<usize, Vec<RuleOccurrence>>> {
		let mut out = HashMap::new();
		for (eval_index, &idx) in self.sorted_indices().iter().enumerate() {
			let occurrences = res!(self.rules[idx].get_next_occurrences(now, n));
			out.insert(eval_index, occurrences);
		}
		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		constant::TimeUnit,
		interval::ROption,
		time::CalClockZone,
	};

	fn at(y: i32, m: u8, d: u8, h: u8, min: u8) -> CalClock {
		CalClock::new(y, m, d, h, min, 0, 0, CalClockZone::utc()).unwrap()
	}

	#[test]
	fn deny_wins_at_equal_or_higher_priority() {
		let now = at(2025, 6, 20, 10, 5);

		let allow_options = ROption::new(TimeUnit::Daily).with_begin_time(at(2025, 6, 20, 9, 0));
		let mut allow_rule = RuleExtend::new("allow", allow_options).with_priority(5).with_duration(120, TimeUnit::Minutely);
		allow_rule.validate().unwrap();

		let deny_options = ROption::new(TimeUnit::Daily).with_begin_time(at(2025, 6, 20, 9, 0));
		let mut deny_rule = RuleExtend::new("deny", deny_options).with_priority(10).with_deny(true).with_duration(120, TimeUnit::Minutely);
		deny_rule.validate().unwrap();

		let mut stack = RuleStack::new();
		stack.push(allow_rule);
		stack.push(deny_rule);

		assert_eq!(stack.evaluate(&now).unwrap(), Decision::Deny);
	}

	#[test]
	fn unmatched_defaults_to_deny() {
		let stack = RuleStack::new();
		let now = at(2025, 6, 20, 10, 5);
		assert_eq!(stack.evaluate(&now).unwrap(), Decision::Deny);
	}
}
