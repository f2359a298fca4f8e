//! Contains the error type used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		Error																	
/// Represents the ways an integer operation can fail.
/// 
/// Every fallible operation guarantees that when it returns one of these, its
/// destination arguments have either been left unchanged or reset to zero.
/// 
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
	/// Memory could not be obtained, either for a result or for temporary
	/// working storage.
	#[error("Out of memory")]
	OutOfMemory,
	
	/// An argument was outside the operation's domain, e.g. division by zero
	/// or a radix outside `2..=36`.
	#[error("Invalid argument")]
	InvalidArgument,
	
	/// The result does not fit the requested representation, e.g. a value that
	/// is too large for a fixed-width byte buffer.
	#[error("Result not representable")]
	Unrepresentable,
}
