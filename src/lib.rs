//! The zz crate is an arbitrary-precision signed integer engine.
//!
//! It provides the [`BigInt`] type and a set of operations on it that never
//! abort the process when memory runs out. Every operation writes into a
//! caller-supplied destination and returns a [`Result`], reporting
//! [`Error::OutOfMemory`] if storage could not be obtained, even when that
//! happens deep inside the numeric [`kernel`].
//!
//! # Usage
//!
//! ```
//! use zz::{BigInt, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let _info = zz::setup();
//! let u     = BigInt::from_str_radix("123456789012345678901234567890", 10)?;
//! let v     = BigInt::from(-7_i64);
//! let mut q = BigInt::new();
//! let mut r = BigInt::new();
//! zz::div(&u, &v, Some(&mut q), Some(&mut r))?;
//! assert_eq!(r.to_string(), "-5");
//! zz::finish();
//! # Ok(())
//! # }
//! ```
//!
//! Division rounds towards negative infinity, and the bitwise operations
//! behave as if values were stored in infinite-precision two's complement.
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod arith;
mod bitwise;
mod convert;
mod errors;
mod int;
pub mod kernel;
pub mod memory;
mod theory;



//		Packages

pub use arith::{
	abs,
	abs_assign,
	add,
	add_assign,
	add_i64,
	add_i64_assign,
	div,
	div_assign,
	div_i64,
	i64_div,
	i64_sub,
	mul,
	mul_assign,
	mul_i64,
	mul_i64_assign,
	neg,
	neg_assign,
	rem_assign,
	sub,
	sub_assign,
	sub_i64,
	sub_i64_assign,
};
pub use bitwise::{
	MAX_BITS,
	and,
	and_assign,
	invert,
	invert_assign,
	mul_2exp,
	mul_2exp_assign,
	or,
	or_assign,
	quo_2exp,
	quo_2exp_assign,
	xor,
	xor_assign,
};
pub use convert::{Endian, Layout, Order};
pub use errors::Error;
pub use int::BigInt;
pub use kernel::{BitCount, Limb, SignedLimb};
pub use memory::{
	Config,
	Info,
	MemoryCeiling,
	MemoryFunctions,
	SystemMemory,
	finish,
	set_memory_functions,
	setup,
	setup_with,
};
pub use theory::{bin, fac, gcd, gcdext, lcm, mod_inverse, pow, powm, sqrtrem};
