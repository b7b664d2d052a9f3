//! Bitwise permission modelling: a single bit-packed value, a named
//! permission carrying one, a keyed set of those, and role composition on
//! top.

pub mod perm;
pub mod perm_set;
pub mod perm_value;
pub mod role;

pub use self::{
	perm::Perm,
	perm_set::PermSet,
	perm_value::PermValue,
	role::{Role, RoleFactory, RoleMulti},
};
