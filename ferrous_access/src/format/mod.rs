pub mod rfc3339;
pub mod rfc9557;

pub use self::{
	rfc3339::parse_rfc3339,
	rfc9557::{Rfc9557Format, Rfc9557Config, PrecisionLevel},
};
