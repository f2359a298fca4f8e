//! Arbitrary-precision signed integer type.

//	Limb bookkeeping is index arithmetic over lengths this module maintains
//	itself: `size` never exceeds `digits.len()`, which is checked on every
//	resize, so the indexing here cannot go out of bounds.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Size is always within capacity"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Limb counts are bounded by MAX_LIMBS")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	arith,
	bitwise,
	errors::Error,
	kernel::{self, BitCount, Limb, MAX_LIMBS},
	memory,
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error as StdError,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	mem,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	ptr,
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
	ser::Error as SerError,
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Structs

//		BigInt																	
/// An arbitrary-precision signed integer.
/// 
/// The value is stored in sign-magnitude form: a sign flag, and a magnitude
/// held as a vector of 64-bit limbs, least-significant limb first. The vector's
/// length is the allocated capacity, and `size` is the number of significant
/// limbs within it, so a value can shrink and grow again without reallocating.
/// 
/// # Invariants
/// 
/// Every operation leaves its results normalised:
/// 
///   1. When `size` is non-zero, the limb at `size - 1` is non-zero.
///   2. Zero has `size` 0 and is never negative.
///   3. `size` never exceeds the capacity.
/// 
/// # Operations
/// 
/// The engine's operations are free functions that read their inputs by
/// reference and write into a caller-supplied destination, e.g.
/// [`add()`](crate::add()). Each returns a [`Result`], and on failure the
/// destination is either unchanged or zero. There are `_assign` forms for
/// operating in place.
/// 
/// For convenience the standard operator traits are implemented too, on both
/// owned values and references. Like the standard integer types these panic
/// when the operation cannot be carried out, e.g. division by zero. Note that
/// division and remainder round towards negative infinity, not towards zero.
/// 
/// # Conversion
/// 
/// Values can be converted to and from native integers, strings in any base
/// from 2 to 36, big-endian byte strings, arbitrary limb layouts, and [`f64`].
/// They can also be serialised with Serde, and stored in PostgreSQL via
/// `tokio-postgres`.
/// 
pub struct BigInt {
	/// Whether the value is below zero.
	pub(crate) negative: bool,
	
	/// The number of significant limbs.
	pub(crate) size:     usize,
	
	/// The limb storage. Its length is the capacity.
	pub(crate) digits:   Vec<Limb>,
}

//󰭅		BigInt																	
impl BigInt {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`BigInt`] with the value zero. This does not allocate.
	#[must_use]
	pub const fn new() -> Self {
		Self { negative: false, size: 0, digits: Vec::new() }
	}
	
	//		from_i64															
	/// Creates a new [`BigInt`] from a native signed integer.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to create the [`BigInt`] from.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if the limb storage cannot be allocated.
	/// 
	pub fn from_i64(value: i64) -> Result<Self, Error> {
		let mut int = Self::new();
		int.set_i64(value)?;
		Ok(int)
	}
	
	//		from_json															
	/// Creates a new [`BigInt`] from a JSON string.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the JSON string is not a valid integer.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		Public methods														
	
	//		capacity															
	/// Returns the number of limbs allocated.
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.digits.len()
	}
	
	//		clear																
	/// Releases the limb storage, leaving the value as zero.
	pub fn clear(&mut self) {
		memory::release_limbs(self.digits.len());
		self.digits   = Vec::new();
		self.size     = 0;
		self.negative = false;
	}
	
	//		cmp_i64																
	/// Compares the value with a native signed integer.
	#[must_use]
	pub fn cmp_i64(&self, value: i64) -> Ordering {
		let negative = value < 0;
		if self.negative != negative {
			return if self.negative { Ordering::Less } else { Ordering::Greater };
		}
		let magnitude = if self.size > 1 {
			Ordering::Greater
		} else {
			let own = if self.size == 1 { self.digits[0] } else { 0 };
			own.cmp(&value.unsigned_abs())
		};
		if negative { magnitude.reverse() } else { magnitude }
	}
	
	//		copy_from															
	/// Sets the value to a copy of another [`BigInt`].
	/// 
	/// # Parameters
	/// 
	/// * `source` - The value to copy.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if the limb storage cannot be grown, in
	/// which case the value is unchanged.
	/// 
	pub fn copy_from(&mut self, source: &Self) -> Result<(), Error> {
		self.resize(source.size)?;
		self.digits[..source.size].copy_from_slice(source.limbs());
		self.negative = source.negative;
		Ok(())
	}
	
	//		count_ones															
	/// Counts the set bits in the magnitude.
	#[must_use]
	pub fn count_ones(&self) -> BitCount {
		kernel::popcount(self.limbs())
	}
	
	//		bit_length															
	/// Returns the number of bits in the magnitude, or 0 for zero.
	#[must_use]
	pub fn bit_length(&self) -> BitCount {
		kernel::bit_length(self.limbs())
	}
	
	//		is_negative															
	/// Determines if the value is below zero.
	#[must_use]
	pub const fn is_negative(&self) -> bool {
		self.negative
	}
	
	//		is_odd																
	/// Determines if the value is odd.
	#[must_use]
	pub fn is_odd(&self) -> bool {
		self.size > 0 && self.digits[0] & 1 == 1
	}
	
	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		self.size == 0
	}
	
	//		limbs																
	/// Returns the significant limbs of the magnitude, least significant first.
	#[must_use]
	pub fn limbs(&self) -> &[Limb] {
		&self.digits[..self.size]
	}
	
	//		lowest_set_bit														
	/// Returns the index of the lowest set bit of the magnitude, or 0 for zero.
	#[must_use]
	pub fn lowest_set_bit(&self) -> BitCount {
		kernel::scan1(self.limbs())
	}
	
	//		normalize															
	/// Drops high-order zero limbs, and clears the sign if the value is zero.
	pub fn normalize(&mut self) {
		self.size = kernel::normalized_len(&self.digits[..self.size]);
		if self.size == 0 {
			self.negative = false;
		}
	}
	
	//		resize																
	/// Makes room for `size` limbs, and sets the significant size to it.
	/// 
	/// If the capacity is already sufficient this only adjusts the size (and
	/// clears the sign when it becomes zero). Otherwise the storage is grown to
	/// exactly `size` limbs; new limbs are zero, but the contents of any
	/// existing limbs beyond the old size are unspecified.
	/// 
	/// Every operation that writes limbs calls this first, so it is the one
	/// place where running out of memory is detected.
	/// 
	/// # Parameters
	/// 
	/// * `size` - The number of limbs needed.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if `size` exceeds [`MAX_LIMBS`], or if
	/// storage cannot be obtained. The value is unchanged on failure.
	/// 
	pub fn resize(&mut self, size: usize) -> Result<(), Error> {
		if size <= self.digits.len() {
			self.size = size;
			if size == 0 {
				self.negative = false;
			}
			return Ok(());
		}
		if size > MAX_LIMBS {
			return Err(Error::OutOfMemory);
		}
		memory::grow_limbs(&mut self.digits, size)?;
		self.size = size;
		Ok(())
	}
	
	//		set_i64																
	/// Sets the value from a native signed integer.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if the limb storage cannot be allocated,
	/// in which case the value is unchanged.
	/// 
	pub fn set_i64(&mut self, value: i64) -> Result<(), Error> {
		self.set_magnitude(value < 0, u128::from(value.unsigned_abs()))
	}
	
	//		set_zero															
	/// Sets the value to zero, keeping the limb storage.
	pub fn set_zero(&mut self) {
		self.size     = 0;
		self.negative = false;
	}
	
	//		to_i64																
	/// Converts the value to a native signed integer.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::InvalidArgument`] if the value is outside the range of
	/// an [`i64`].
	/// 
	#[expect(clippy::cast_possible_wrap, reason = "Magnitude verified to be at most 2^63 first")]
	pub fn to_i64(&self) -> Result<i64, Error> {
		match self.size {
			0 => Ok(0),
			1 => {
				let magnitude = self.digits[0];
				if !self.negative {
					i64::try_from(magnitude).map_err(|_| Error::InvalidArgument)
				} else if magnitude <= i64::MIN.unsigned_abs() {
					Ok((magnitude as i64).wrapping_neg())
				} else {
					Err(Error::InvalidArgument)
				}
			},
			_ => Err(Error::InvalidArgument),
		}
	}
	
	//		to_json																
	/// Serialises the value to a JSON string.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the value cannot be serialised.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		try_clone															
	/// Creates an independent copy of the value.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if the limb storage cannot be allocated.
	/// 
	pub fn try_clone(&self) -> Result<Self, Error> {
		let mut copy = Self::new();
		copy.copy_from(self)?;
		Ok(copy)
	}
	
	//		Private methods														
	
	//		in_place															
	/// Runs a destination-form operation with this value as both source and
	/// destination.
	/// 
	/// The current value is moved out and passed as the source, and the result
	/// is built in fresh storage. If the operation fails, the original value is
	/// put back untouched.
	/// 
	pub(crate) fn in_place<F>(&mut self, operation: F) -> Result<(), Error>
	where
		F: FnOnce(&Self, &mut Self) -> Result<(), Error>,
	{
		let source = mem::take(self);
		match operation(&source, self) {
			Ok(())   => Ok(()),
			Err(err) => {
				*self = source;
				Err(err)
			},
		}
	}
	
	//		set_magnitude														
	/// Sets the value from a sign and a magnitude of up to two limbs.
	#[expect(clippy::cast_possible_truncation, reason = "Splitting into limbs")]
	pub(crate) fn set_magnitude(&mut self, negative: bool, magnitude: u128) -> Result<(), Error> {
		let (low, high) = (magnitude as Limb, (magnitude >> kernel::LIMB_BITS) as Limb);
		let size        = if high != 0 { 2 } else { usize::from(low != 0) };
		self.resize(size)?;
		if size > 0 {
			self.digits[0] = low;
		}
		if size > 1 {
			self.digits[1] = high;
		}
		self.negative = negative && size > 0;
		Ok(())
	}
	
	//		render																
	/// Renders the magnitude for a formatting trait.
	fn render(&self, f: &mut Formatter<'_>, base: i32, prefix: &str) -> fmt::Result {
		let digits = self.magnitude_str(base).map_err(|_| fmt::Error)?;
		f.pad_integral(!self.negative, prefix, &digits)
	}
}

//󰭅		Binary																	
impl Binary for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.render(f, 2, "0b")
	}
}

//󰭅		Clone																	
impl Clone for BigInt {
	//		clone																
	#[expect(clippy::expect_used, reason = "Mirrors the standard collections, which abort on allocation failure")]
	fn clone(&self) -> Self {
		self.try_clone().expect("Allocation for clone failed")
	}
	
	//		clone_from															
	#[expect(clippy::expect_used, reason = "Mirrors the standard collections, which abort on allocation failure")]
	fn clone_from(&mut self, source: &Self) {
		self.copy_from(source).expect("Allocation for clone failed");
	}
}

//󰭅		Debug																	
impl Debug for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - BigInt(value)
		write!(f, "BigInt({self})")?;
		
		//	For alternate formatting (#), show the limbs and capacity
		if f.alternate() {
			write!(f, " [")?;
			for (i, limb) in self.limbs().iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{limb:016x}")?;
			}
			write!(f, "] of {}", self.capacity())?;
		}
		
		Ok(())
	}
}

//󰭅		Default																	
impl Default for BigInt {
	//		default																
	fn default() -> Self {
		Self::new()
	}
}

//󰭅		Deserialize																
impl<'de> Deserialize<'de> for BigInt {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(BigIntVisitor)
		} else {
			//	For binary formats, expect two's-complement bytes
			deserializer.deserialize_bytes(BytesVisitor)
		}
	}
}

//󰭅		Display																	
impl Display for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.render(f, 10, "")
	}
}

//󰭅		Drop																	
impl Drop for BigInt {
	//		drop																
	fn drop(&mut self) {
		memory::release_limbs(self.digits.len());
	}
}

//󰭅		Eq																		
impl Eq for BigInt {}

//󰭅		From<i32>																
impl From<i32> for BigInt {
	//		from																
	fn from(value: i32) -> Self {
		Self::from(i64::from(value))
	}
}

//󰭅		From<i64>																
impl From<i64> for BigInt {
	//		from																
	#[expect(clippy::expect_used, reason = "Mirrors the standard collections, which abort on allocation failure")]
	fn from(value: i64) -> Self {
		Self::from_i64(value).expect("Allocation for conversion failed")
	}
}

//󰭅		From<u64>																
impl From<u64> for BigInt {
	//		from																
	#[expect(clippy::expect_used, reason = "Mirrors the standard collections, which abort on allocation failure")]
	fn from(value: u64) -> Self {
		let mut int = Self::new();
		int.set_magnitude(false, u128::from(value)).expect("Allocation for conversion failed");
		int
	}
}

//󰭅		FromSql																	
impl<'a> FromSql<'a> for BigInt {
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn StdError + Sync + Send>> {
		match ty {
			&Type::INT2                 => Ok(Self::from(i32::from(i16::from_sql(ty, raw)?))),
			&Type::INT4                 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8                 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT | &Type::VARCHAR => Ok(<&str>::from_sql(ty, raw)?.parse::<Self>()?),
			unknown                     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
}

//󰭅		FromStr																	
impl FromStr for BigInt {
	type Err = Error;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(s, 10)
	}
}

//󰭅		Hash																	
impl Hash for BigInt {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.negative.hash(state);
		self.limbs().hash(state);
	}
}

//󰭅		LowerHex																
impl LowerHex for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.render(f, 16, "0x")
	}
}

//󰭅		Octal																	
impl Octal for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.render(f, 8, "0o")
	}
}

//󰭅		Ord																		
impl Ord for BigInt {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		if ptr::eq(self, other) {
			return Ordering::Equal;
		}
		if self.negative != other.negative {
			return if self.negative { Ordering::Less } else { Ordering::Greater };
		}
		let magnitude = self.size.cmp(&other.size)
			.then_with(|| kernel::cmp(self.limbs(), other.limbs()));
		if self.negative { magnitude.reverse() } else { magnitude }
	}
}

//󰭅		PartialEq																
impl PartialEq for BigInt {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.negative == other.negative && self.limbs() == other.limbs()
	}
}

//󰭅		PartialEq<i64>															
impl PartialEq<i64> for BigInt {
	//		eq																	
	fn eq(&self, other: &i64) -> bool {
		self.cmp_i64(*other) == Ordering::Equal
	}
}

//󰭅		PartialOrd																
impl PartialOrd for BigInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		PartialOrd<i64>															
impl PartialOrd<i64> for BigInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.cmp_i64(*other))
	}
}

//󰭅		Product																	
impl Product for BigInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::from(1_i64), |acc, x| acc * x)
	}
}

//󰭅		Product<&>																
impl<'a> Product<&'a Self> for BigInt {
	//		product																
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::from(1_i64), |acc, x| acc * x)
	}
}

//󰭅		Serialize																
impl Serialize for BigInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it fits
			if let Ok(v) = self.to_i64() {
				return serializer.serialize_i64(v);
			}
			//	Fall back to a string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise two's-complement bytes
			serializer.serialize_bytes(&self.to_signed_bytes().map_err(<S::Error as SerError>::custom)?)
		}
	}
}

//󰭅		Sum																		
impl Sum for BigInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>																	
impl<'a> Sum<&'a Self> for BigInt {
	//		sum																	
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::new(), |acc, x| acc + x)
	}
}

//󰭅		ToSql																	
impl ToSql for BigInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn StdError + Sync + Send>> {
		match ty {
			&Type::INT2                 => i16::try_from(self)?.to_sql(ty, out),
			&Type::INT4                 => i32::try_from(self)?.to_sql(ty, out),
			&Type::INT8                 => i64::try_from(self)?.to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_str_radix(10)?.to_sql(ty, out),
			unknown                     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for BigInt: {unknown}"),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}

//󰭅		TryFrom: &BigInt -> i16													
impl TryFrom<&BigInt> for i16 {
	type Error = Error;
	
	//		try_from															
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(value.to_i64()?).map_err(|_| Error::InvalidArgument)
	}
}

//󰭅		TryFrom: &BigInt -> i32													
impl TryFrom<&BigInt> for i32 {
	type Error = Error;
	
	//		try_from															
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(value.to_i64()?).map_err(|_| Error::InvalidArgument)
	}
}

//󰭅		TryFrom: &BigInt -> i64													
impl TryFrom<&BigInt> for i64 {
	type Error = Error;
	
	//		try_from															
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		value.to_i64()
	}
}

//󰭅		TryFrom: &BigInt -> u64													
impl TryFrom<&BigInt> for u64 {
	type Error = Error;
	
	//		try_from															
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		match (value.negative, value.size) {
			(_, 0)     => Ok(0),
			(false, 1) => Ok(value.digits[0]),
			_          => Err(Error::InvalidArgument),
		}
	}
}

//󰭅		UpperHex																
impl UpperHex for BigInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.render(f, -16, "0x")
	}
}

//		BigIntVisitor															
/// A visitor for parsing integers from numbers and strings.
struct BigIntVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BigIntVisitor {
	type Value = BigInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer or a string of decimal digits")
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigInt::from_i64(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		let mut int = BigInt::new();
		int.set_magnitude(false, u128::from(v)).map_err(E::custom)?;
		Ok(int)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigInt::from_bytes(v, true).map_err(E::custom)
	}
}

//		BytesVisitor															
/// A visitor for parsing integers from two's-complement bytes.
struct BytesVisitor;

//󰭅		Visitor																	
impl Visitor<'_> for BytesVisitor {
	type Value = BigInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "bytes representing a signed integer")
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		BigInt::from_bytes(v, true).map_err(E::custom)
	}
}



//		Macros

/// Implements a binary operator trait, and its assigning counterpart, for all
/// combinations of owned and borrowed operands, in terms of a destination-form
/// operation.
macro_rules! binary_operator {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $operation:expr, $message:literal) => {
		impl $trait<&BigInt> for &BigInt {
			type Output = BigInt;
			
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn $method(self, rhs: &BigInt) -> Self::Output {
				let mut out = BigInt::new();
				($operation)(self, rhs, &mut out).expect($message);
				out
			}
		}
		
		impl $trait<BigInt> for &BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: BigInt) -> Self::Output {
				self.$method(&rhs)
			}
		}
		
		impl $trait<&BigInt> for BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: &BigInt) -> Self::Output {
				(&self).$method(rhs)
			}
		}
		
		impl $trait for BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: BigInt) -> Self::Output {
				(&self).$method(&rhs)
			}
		}
		
		impl $assign_trait<&BigInt> for BigInt {
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn $assign_method(&mut self, rhs: &BigInt) {
				self.in_place(|source, out| ($operation)(source, rhs, out)).expect($message);
			}
		}
		
		impl $assign_trait for BigInt {
			fn $assign_method(&mut self, rhs: BigInt) {
				self.$assign_method(&rhs);
			}
		}
	};
}

/// Implements a shift operator trait, and its assigning counterpart, for a
/// [`BitCount`] shift amount.
macro_rules! shift_operator {
	($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $operation:path, $message:literal) => {
		impl $trait<BitCount> for &BigInt {
			type Output = BigInt;
			
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn $method(self, rhs: BitCount) -> Self::Output {
				let mut out = BigInt::new();
				$operation(self, rhs, &mut out).expect($message);
				out
			}
		}
		
		impl $trait<BitCount> for BigInt {
			type Output = BigInt;
			
			fn $method(self, rhs: BitCount) -> Self::Output {
				(&self).$method(rhs)
			}
		}
		
		impl $assign_trait<BitCount> for BigInt {
			#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
			fn $assign_method(&mut self, rhs: BitCount) {
				self.in_place(|source, out| $operation(source, rhs, out)).expect($message);
			}
		}
	};
}

binary_operator!(Add,    add,    AddAssign,    add_assign,    arith::add,    "Attempt to add failed");
binary_operator!(Sub,    sub,    SubAssign,    sub_assign,    arith::sub,    "Attempt to subtract failed");
binary_operator!(Mul,    mul,    MulAssign,    mul_assign,    arith::mul,    "Attempt to multiply failed");
binary_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, bitwise::and,  "Attempt to AND failed");
binary_operator!(BitOr,  bitor,  BitOrAssign,  bitor_assign,  bitwise::or,   "Attempt to OR failed");
binary_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitwise::xor,  "Attempt to XOR failed");
binary_operator!(
	Div, div, DivAssign, div_assign,
	|u, v, q| arith::div(u, v, Some(q), None),
	"Attempt to divide by zero"
);
binary_operator!(
	Rem, rem, RemAssign, rem_assign,
	|u, v, r| arith::div(u, v, None, Some(r)),
	"Attempt to calculate remainder with a divisor of zero"
);
shift_operator!(Shl, shl, ShlAssign, shl_assign, bitwise::mul_2exp, "Attempt to shift left failed");
shift_operator!(Shr, shr, ShrAssign, shr_assign, bitwise::quo_2exp, "Attempt to shift right failed");

//󰭅		Neg																		
impl Neg for &BigInt {
	type Output = BigInt;
	
	//		neg																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn neg(self) -> Self::Output {
		let mut out = BigInt::new();
		arith::neg(self, &mut out).expect("Attempt to negate failed");
		out
	}
}

//󰭅		Neg																		
impl Neg for BigInt {
	type Output = Self;
	
	//		neg																	
	fn neg(mut self) -> Self::Output {
		if self.size > 0 {
			self.negative = !self.negative;
		}
		self
	}
}

//󰭅		Not																		
impl Not for &BigInt {
	type Output = BigInt;
	
	//		not																	
	#[expect(clippy::expect_used, reason = "Needs to emulate Rust standard library behaviour")]
	fn not(self) -> Self::Output {
		let mut out = BigInt::new();
		bitwise::invert(self, &mut out).expect("Attempt to invert failed");
		out
	}
}

//󰭅		Not																		
impl Not for BigInt {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}
