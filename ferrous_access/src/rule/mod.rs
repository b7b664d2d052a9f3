//! Allow/deny rules: a recurrence-backed occurrence window, duration,
//! priority, join windows, and geo filters, arbitrated in a stack.

pub mod collaborators;
pub mod rule_builder;
pub mod rule_extend;
pub mod rule_stack;

pub use self::{
	collaborators::{GeoFilter, GeoInfo, PreAllow, RuleEvaluator},
	rule_builder::RuleBuilder,
	rule_extend::{RuleExtend, RuleOccurrence},
	rule_stack::{Decision, RuleStack},
};
