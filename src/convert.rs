//! Conversions between [`BigInt`] and external representations.
//!
//! Values can be converted to and from:
//!
//!   - Strings, in any base from 2 to 36.
//!   - Fixed-width big-endian byte strings, either unsigned or in
//!     two's-complement.
//!   - Arbitrary packed limb layouts, described by a [`Layout`].
//!   - Floating-point numbers, with correct rounding.
//!

#![allow(
	clippy::indexing_slicing,
	clippy::arithmetic_side_effects,
	reason = "Buffer positions are derived from lengths checked on entry"
)]



//		Modules

#[cfg(test)]
#[path = "tests/convert.rs"]
mod tests;



//		Packages

use crate::{
	errors::Error,
	int::BigInt,
	kernel::{self, BitCount, LIMB_BITS, LIMB_BYTES, Limb},
	memory::recover,
};
use serde::{Deserialize, Serialize};



//		Constants

/// Digit glyphs for lowercase rendering.
const LOWER: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Digit glyphs for uppercase rendering.
const UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The largest limb count that can be converted to a finite [`f64`].
#[expect(clippy::cast_sign_loss, reason = "MAX_EXP is positive")]
const F64_MAX_LIMBS: usize = f64::MAX_EXP as usize / LIMB_BITS as usize + 1;



//		Structs

//		Layout																	
/// Describes a packed binary encoding of a magnitude, for [`BigInt::import()`]
/// and [`BigInt::export()`].
/// 
/// The encoding is a sequence of fixed-size words, each holding
/// `bits_per_limb` significant bits of the magnitude in its low bits. Any
/// unused high bits are ignored on import and written as zero on export.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Layout {
	/// The number of significant bits in each word.
	pub bits_per_limb:   u8,
	
	/// The size of each word in bytes, from 1 to 8.
	pub limb_size:       u8,
	
	/// The order of the words.
	pub limbs_order:     Order,
	
	/// The byte order within each word.
	pub limb_endianness: Endian,
}

//󰭅		Layout																	
impl Layout {
	//		Public constants													
	
	/// Plain bytes, least significant first.
	pub const BYTES: Self = Self {
		bits_per_limb:   8,
		limb_size:       1,
		limbs_order:     Order::LeastSignificantFirst,
		limb_endianness: Endian::Native,
	};
	
	/// The digit layout of `CPython` integers: 30 bits in 32-bit words, least
	/// significant first.
	pub const PYINT: Self = Self {
		bits_per_limb:   30,
		limb_size:       4,
		limbs_order:     Order::LeastSignificantFirst,
		limb_endianness: Endian::Native,
	};
	
	//		Private methods														
	
	//		check																
	/// Verifies that the layout is usable.
	fn check(self) -> Result<(), Error> {
		if !(1..=8).contains(&self.limb_size) || self.bits_per_limb == 0 || self.bits_per_limb > self.limb_size * 8 {
			return Err(Error::InvalidArgument);
		}
		Ok(())
	}
	
	//		mask																
	/// Returns the mask of significant bits in a word.
	fn mask(self) -> Limb {
		Limb::MAX >> (LIMB_BITS - u32::from(self.bits_per_limb))
	}
	
	//		read_word															
	/// Reads one word from its bytes.
	fn read_word(self, bytes: &[u8]) -> Limb {
		let fold = |word: Limb, &byte: &u8| (word << 8) | Limb::from(byte);
		let word = if self.limb_endianness.is_big() {
			bytes.iter().fold(0, fold)
		} else {
			bytes.iter().rev().fold(0, fold)
		};
		word & self.mask()
	}
	
	//		write_word															
	/// Writes one word to its bytes.
	#[expect(clippy::cast_possible_truncation, reason = "Extracting single bytes")]
	fn write_word(self, bytes: &mut [u8], word: Limb) {
		let count = bytes.len();
		for (idx, byte) in bytes.iter_mut().enumerate() {
			let shift = if self.limb_endianness.is_big() { count - 1 - idx } else { idx };
			*byte     = (word >> (8 * shift)) as u8;
		}
	}
	
	//		slot																
	/// Returns the position in the buffer of word `idx`, counting from the
	/// least significant.
	const fn slot(self, idx: usize, len: usize) -> usize {
		match self.limbs_order {
			Order::LeastSignificantFirst => idx,
			Order::MostSignificantFirst  => len - 1 - idx,
		}
	}
}



//		Enums

//		Order																	
/// The order of words in a [`Layout`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Order {
	/// The most significant word comes first.
	MostSignificantFirst,
	
	/// The least significant word comes first.
	LeastSignificantFirst,
}

//		Endian																	
/// The byte order within each word of a [`Layout`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Endian {
	/// Most significant byte first.
	Big,
	
	/// Least significant byte first.
	Little,
	
	/// The byte order of the host.
	Native,
}

//󰭅		Endian																	
impl Endian {
	//		is_big																
	/// Resolves [`Endian::Native`] and reports whether the order is big-endian.
	const fn is_big(self) -> bool {
		match self {
			Self::Big    => true,
			Self::Little => false,
			Self::Native => cfg!(target_endian = "big"),
		}
	}
}



//		Implementations

//󰭅		BigInt																	
impl BigInt {
	//		Constructors														
	
	//		from_str_radix														
	/// Parses a string in the given base.
	/// 
	/// The string may have surrounding ASCII whitespace and a single leading
	/// `+` or `-`. Digits are case-insensitive, and may be grouped with single
	/// underscores between them.
	/// 
	/// # Errors
	/// 
	///   - [`Error::InvalidArgument`] if `radix` is outside `2..=36`, or the
	///     string is not a valid number in that base.
	///   - [`Error::OutOfMemory`] if storage cannot be obtained.
	/// 
	/// # Examples
	/// 
	/// ```
	/// use zz::BigInt;
	/// 
	/// let value = BigInt::from_str_radix(" -ff_ff ", 16).unwrap();
	/// assert_eq!(value.to_string(), "-65535");
	/// ```
	/// 
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
		let mut value = Self::new();
		value.set_str_radix(text, radix)?;
		Ok(value)
	}
	
	//		from_bytes															
	/// Creates a value from a big-endian byte string.
	/// 
	/// With `signed` set, the bytes are read as a two's-complement number of
	/// their full width, so a set top bit makes the value negative. An empty
	/// byte string is zero.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if storage cannot be obtained.
	/// 
	pub fn from_bytes(bytes: &[u8], signed: bool) -> Result<Self, Error> {
		let mut value = Self::new();
		value.set_bytes(bytes, signed)?;
		Ok(value)
	}
	
	//		import																
	/// Creates a non-negative value from `len` words packed according to
	/// `layout`.
	/// 
	/// # Errors
	/// 
	///   - [`Error::InvalidArgument`] if the layout is invalid, or `bytes` is
	///     shorter than `len` words.
	///   - [`Error::OutOfMemory`] if storage cannot be obtained.
	/// 
	pub fn import(bytes: &[u8], len: usize, layout: Layout) -> Result<Self, Error> {
		let mut value = Self::new();
		value.set_import(bytes, len, layout)?;
		Ok(value)
	}
	
	//		Public methods														
	
	//		set_str_radix														
	/// Sets the value by parsing a string. See [`from_str_radix()`](Self::from_str_radix()).
	/// 
	/// # Errors
	/// 
	/// As for [`from_str_radix()`](Self::from_str_radix()). The value is
	/// unchanged on failure.
	/// 
	pub fn set_str_radix(&mut self, text: &str, radix: u32) -> Result<(), Error> {
		if !(2..=36).contains(&radix) {
			return Err(Error::InvalidArgument);
		}
		let text             = text.trim_ascii();
		let (negative, body) = match text.strip_prefix('-') {
			Some(rest) => (true,  rest),
			None       => (false, text.strip_prefix('+').unwrap_or(text)),
		};
		if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
			return Err(Error::InvalidArgument);
		}
		
		let mut digits = Vec::new();
		digits.try_reserve_exact(body.len()).map_err(|_| Error::OutOfMemory)?;
		for ch in body.chars().filter(|&ch| ch != '_') {
			let digit = ch.to_digit(radix).ok_or(Error::InvalidArgument)?;
			digits.push(u8::try_from(digit).map_err(|_| Error::InvalidArgument)?);
		}
		
		let per_digit = BitCount::from(u32::BITS - (radix - 1).leading_zeros());
		let limbs     = BitCount::try_from(digits.len())
			.ok()
			.and_then(|count| count.checked_mul(per_digit))
			.and_then(|bits| usize::try_from(bits.div_ceil(BitCount::from(LIMB_BITS)) + 1).ok())
			.ok_or(Error::OutOfMemory)?;
		self.resize(limbs)?;
		self.digits[..limbs].fill(0);
		self.size     = kernel::set_str(&mut self.digits[..limbs], &digits, radix);
		self.negative = negative;
		self.normalize();
		Ok(())
	}
	
	//		size_in_base														
	/// Returns the number of digits needed to write the magnitude in `base`,
	/// excluding any sign.
	/// 
	/// This is exact for powers of two, and otherwise at most one too large.
	/// Zero needs one digit. A negative `base` is treated as its magnitude.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::InvalidArgument`] if `|base|` is outside `2..=36`.
	/// 
	pub fn size_in_base(&self, base: i32) -> Result<usize, Error> {
		Ok(kernel::size_in_base(self.limbs(), radix_of(base)?))
	}
	
	//		to_str_radix														
	/// Renders the value as a string in the given base.
	/// 
	/// A negative `base` selects uppercase digits, so `-16` gives uppercase
	/// hexadecimal.
	/// 
	/// # Errors
	/// 
	///   - [`Error::InvalidArgument`] if `|base|` is outside `2..=36`.
	///   - [`Error::OutOfMemory`] if storage cannot be obtained.
	/// 
	pub fn to_str_radix(&self, base: i32) -> Result<String, Error> {
		self.render_digits(base, self.negative)
	}
	
	//		write_str_radix														
	/// Renders the value as ASCII into a buffer, returning the number of bytes
	/// written. See [`to_str_radix()`](Self::to_str_radix()).
	/// 
	/// # Errors
	/// 
	///   - [`Error::InvalidArgument`] if `|base|` is outside `2..=36`.
	///   - [`Error::Unrepresentable`] if `out` is shorter than
	///     [`size_in_base()`](Self::size_in_base()) plus one for a minus sign.
	///   - [`Error::OutOfMemory`] if working storage cannot be obtained.
	/// 
	pub fn write_str_radix(&self, base: i32, out: &mut [u8]) -> Result<usize, Error> {
		let radix  = radix_of(base)?;
		let sign   = usize::from(self.negative);
		let needed = kernel::size_in_base(self.limbs(), radix) + sign;
		if out.len() < needed {
			return Err(Error::Unrepresentable);
		}
		let count    = recover(|| kernel::get_str(&mut out[sign..needed], radix, self.limbs()))?;
		let alphabet = if base < 0 { UPPER } else { LOWER };
		for digit in &mut out[sign..sign + count] {
			*digit = alphabet[usize::from(*digit)];
		}
		if self.negative {
			out[0] = b'-';
		}
		Ok(sign + count)
	}
	
	//		set_bytes															
	/// Sets the value from a big-endian byte string. See [`from_bytes()`](Self::from_bytes()).
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::OutOfMemory`] if storage cannot be obtained, in which
	/// case the value is unchanged.
	/// 
	pub fn set_bytes(&mut self, bytes: &[u8], signed: bool) -> Result<(), Error> {
		let size = bytes.len().div_ceil(LIMB_BYTES);
		self.resize(size)?;
		self.digits[..size].fill(0);
		for (idx, &byte) in bytes.iter().rev().enumerate() {
			self.digits[idx / LIMB_BYTES] |= Limb::from(byte) << (8 * (idx % LIMB_BYTES));
		}
		self.negative = false;
		
		//	Negate within the full width of the input
		if signed && bytes.first().is_some_and(|&byte| byte & 0x80 != 0) {
			kernel::com_in_place(&mut self.digits[..size]);
			let used = bytes.len() % LIMB_BYTES;
			if used > 0 {
				self.digits[size - 1] &= (1 << (8 * used)) - 1;
			}
			let _         = kernel::add_1_in_place(&mut self.digits[..size], 1);
			self.negative = true;
		}
		self.normalize();
		Ok(())
	}
	
	//		to_bytes															
	/// Renders the value as a big-endian byte string of exactly `len` bytes.
	/// 
	/// With `signed` set, negative values use a two's-complement encoding;
	/// otherwise only non-negative values can be rendered.
	/// 
	/// # Errors
	/// 
	///   - [`Error::Unrepresentable`] if the value does not fit in `len` bytes
	///     (including the sign bit when signed), or is negative and `signed`
	///     is not set.
	///   - [`Error::OutOfMemory`] if the buffer cannot be allocated.
	/// 
	pub fn to_bytes(&self, len: usize, signed: bool) -> Result<Vec<u8>, Error> {
		if !self.fits_bytes(len, signed) {
			return Err(Error::Unrepresentable);
		}
		let mut bytes = Vec::new();
		bytes.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
		bytes.resize(len, 0);
		self.write_bytes(&mut bytes, signed)?;
		Ok(bytes)
	}
	
	//		write_bytes															
	/// Renders the value as a big-endian byte string filling `out`. See
	/// [`to_bytes()`](Self::to_bytes()).
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::Unrepresentable`] as for [`to_bytes()`](Self::to_bytes()),
	/// in which case `out` is unchanged.
	/// 
	#[expect(clippy::cast_possible_truncation, reason = "Extracting single bytes")]
	pub fn write_bytes(&self, out: &mut [u8], signed: bool) -> Result<(), Error> {
		if !self.fits_bytes(out.len(), signed) {
			return Err(Error::Unrepresentable);
		}
		out.fill(0);
		for (idx, byte) in out.iter_mut().rev().enumerate().take(self.size * LIMB_BYTES) {
			*byte = (self.digits[idx / LIMB_BYTES] >> (8 * (idx % LIMB_BYTES))) as u8;
		}
		if self.negative {
			let mut carry = true;
			for byte in out.iter_mut().rev() {
				let (value, over) = (!*byte).overflowing_add(u8::from(carry));
				*byte             = value;
				carry             = over;
			}
		}
		Ok(())
	}
	
	//		set_import															
	/// Sets the value from packed words. See [`import()`](Self::import()).
	/// 
	/// # Errors
	/// 
	/// As for [`import()`](Self::import()). The value is unchanged on failure.
	/// 
	pub fn set_import(&mut self, bytes: &[u8], len: usize, layout: Layout) -> Result<(), Error> {
		layout.check()?;
		let stride = usize::from(layout.limb_size);
		if len.checked_mul(stride).is_none_or(|needed| bytes.len() < needed) {
			return Err(Error::InvalidArgument);
		}
		let per_word = BitCount::from(layout.bits_per_limb);
		let size     = BitCount::try_from(len)
			.ok()
			.and_then(|len| len.checked_mul(per_word))
			.and_then(|bits| usize::try_from(bits.div_ceil(BitCount::from(LIMB_BITS))).ok())
			.ok_or(Error::OutOfMemory)?;
		self.resize(size)?;
		self.digits[..size].fill(0);
		
		for idx in 0..len {
			let slot = layout.slot(idx, len) * stride;
			let word = layout.read_word(&bytes[slot..slot + stride]);
			deposit(&mut self.digits[..size], idx as BitCount * per_word, word);
		}
		self.negative = false;
		self.normalize();
		Ok(())
	}
	
	//		export																
	/// Writes the magnitude as `len` words packed according to `layout`. The
	/// sign is ignored.
	/// 
	/// Words beyond those needed for the magnitude are written as zero.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::InvalidArgument`] if the layout is invalid, `len` is
	/// less than [`export_len()`](Self::export_len()), or `out` is shorter
	/// than `len` words.
	/// 
	pub fn export(&self, layout: Layout, len: usize, out: &mut [u8]) -> Result<(), Error> {
		if len < self.export_len(layout)? {
			return Err(Error::InvalidArgument);
		}
		let stride = usize::from(layout.limb_size);
		if len.checked_mul(stride).is_none_or(|needed| out.len() < needed) {
			return Err(Error::InvalidArgument);
		}
		let per_word = BitCount::from(layout.bits_per_limb);
		for idx in 0..len {
			let slot = layout.slot(idx, len) * stride;
			let word = extract(self.limbs(), idx as BitCount * per_word) & layout.mask();
			layout.write_word(&mut out[slot..slot + stride], word);
		}
		Ok(())
	}
	
	//		export_len															
	/// Returns the number of words needed to export the magnitude with
	/// `layout`. Zero needs none.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::InvalidArgument`] if the layout is invalid.
	/// 
	pub fn export_len(&self, layout: Layout) -> Result<usize, Error> {
		layout.check()?;
		let words = self.bit_length().div_ceil(BitCount::from(layout.bits_per_limb));
		usize::try_from(words).map_err(|_| Error::InvalidArgument)
	}
	
	//		to_f64																
	/// Converts the value to the nearest [`f64`], with ties going to even.
	/// 
	/// # Errors
	/// 
	/// Returns [`Error::Unrepresentable`] if the magnitude is too large for a
	/// finite [`f64`]. Use [`to_f64_lossy()`](Self::to_f64_lossy()) to get the
	/// correctly-signed infinity instead.
	/// 
	pub fn to_f64(&self) -> Result<f64, Error> {
		match self.nearest_f64() {
			(value, None)      => Ok(value),
			(_,     Some(err)) => Err(err),
		}
	}
	
	//		to_f64_lossy														
	/// Converts the value to the nearest [`f64`], giving an infinity if it is
	/// too large.
	#[must_use]
	pub fn to_f64_lossy(&self) -> f64 {
		self.nearest_f64().0
	}
	
	//		Private methods														
	
	//		magnitude_str														
	/// Renders the magnitude without a sign. See [`to_str_radix()`](Self::to_str_radix()).
	pub(crate) fn magnitude_str(&self, base: i32) -> Result<String, Error> {
		self.render_digits(base, false)
	}
	
	//		to_signed_bytes														
	/// Renders the value in the shortest two's-complement byte string that
	/// holds it. Zero is a single zero byte.
	pub(crate) fn to_signed_bytes(&self) -> Result<Vec<u8>, Error> {
		let bits  = usize::try_from(self.bit_length()).map_err(|_| Error::Unrepresentable)?;
		let bytes = if self.negative { bits.div_ceil(8) } else { bits / 8 + 1 };
		let bytes = if self.fits_bytes(bytes, true) { bytes } else { bytes + 1 };
		self.to_bytes(bytes, true)
	}
	
	//		fits_bytes															
	/// Determines if the value can be rendered in `len` bytes.
	fn fits_bytes(&self, len: usize, signed: bool) -> bool {
		if self.size == 0 {
			return true;
		}
		if self.negative && !signed {
			return false;
		}
		let width = BitCount::try_from(len).map_or(BitCount::MAX, |len| len.saturating_mul(8));
		let bits  = self.bit_length();
		if !signed {
			return bits <= width;
		}
		//	-2^(width-1) is the one value that needs every bit
		bits < width || (self.negative && bits == width && self.lowest_set_bit() + 1 == bits)
	}
	
	//		render_digits														
	/// Renders the magnitude in `base`, with a leading minus sign if asked.
	fn render_digits(&self, base: i32, minus: bool) -> Result<String, Error> {
		let radix      = radix_of(base)?;
		let len        = kernel::size_in_base(self.limbs(), radix);
		let mut digits = Vec::new();
		digits.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
		digits.resize(len, 0);
		let count      = recover(|| kernel::get_str(&mut digits, radix, self.limbs()))?;
		
		let alphabet = if base < 0 { UPPER } else { LOWER };
		let mut text = String::new();
		text.try_reserve_exact(count + usize::from(minus)).map_err(|_| Error::OutOfMemory)?;
		if minus {
			text.push('-');
		}
		text.extend(digits[..count].iter().map(|&digit| char::from(alphabet[usize::from(digit)])));
		Ok(text)
	}
	
	//		nearest_f64															
	/// Converts to the nearest [`f64`], also reporting whether it overflowed.
	#[expect(clippy::cast_precision_loss, reason = "Mantissa is at most 53 bits, so exact")]
	fn nearest_f64(&self) -> (f64, Option<Error>) {
		let infinity = if self.negative { f64::NEG_INFINITY } else { f64::INFINITY };
		if self.size > F64_MAX_LIMBS {
			return (infinity, Some(Error::Unrepresentable));
		}
		let bits      = self.bit_length();
		let precision = BitCount::from(f64::MANTISSA_DIGITS);
		let magnitude = if bits <= precision {
			extract(self.limbs(), 0) as f64
		} else {
			//	Truncate to 53 bits, then round half to even on what was cut off
			let shift        = bits - precision;
			let mut mantissa = extract(self.limbs(), shift) & (Limb::MAX >> (LIMB_BITS - f64::MANTISSA_DIGITS));
			let half         = kernel::test_bit(self.limbs(), shift - 1);
			let sticky       = self.lowest_set_bit() < shift - 1;
			if half && (sticky || mantissa & 1 == 1) {
				mantissa += 1;
			}
			mantissa as f64 * power_of_two(shift)
		};
		let value = if self.negative { -magnitude } else { magnitude };
		if value.is_infinite() {
			return (value, Some(Error::Unrepresentable));
		}
		(value, None)
	}
}



//		Functions

//		radix_of																
/// Validates a rendering base, whose sign selects the digit case.
fn radix_of(base: i32) -> Result<u32, Error> {
	let radix = base.unsigned_abs();
	if !(2..=36).contains(&radix) {
		return Err(Error::InvalidArgument);
	}
	Ok(radix)
}

//		extract																	
/// Reads the limb's worth of bits of `a` starting at bit `pos`, treating `a`
/// as zero-extended.
fn extract(a: &[Limb], pos: BitCount) -> Limb {
	let Ok(limb) = usize::try_from(pos / BitCount::from(LIMB_BITS)) else {
		return 0;
	};
	#[expect(clippy::cast_possible_truncation, reason = "Remainder of a division by LIMB_BITS")]
	let shift = (pos % BitCount::from(LIMB_BITS)) as u32;
	let low   = a.get(limb).map_or(0, |&value| value >> shift);
	let high  = match shift {
		0 => 0,
		_ => a.get(limb + 1).map_or(0, |&value| value << (LIMB_BITS - shift)),
	};
	low | high
}

//		deposit																	
/// ORs `value` into `w` at bit `pos`, dropping any bits beyond the end.
fn deposit(w: &mut [Limb], pos: BitCount, value: Limb) {
	let Ok(limb) = usize::try_from(pos / BitCount::from(LIMB_BITS)) else {
		return;
	};
	#[expect(clippy::cast_possible_truncation, reason = "Remainder of a division by LIMB_BITS")]
	let shift = (pos % BitCount::from(LIMB_BITS)) as u32;
	if let Some(target) = w.get_mut(limb) {
		*target |= value << shift;
	}
	if shift > 0 {
		if let Some(target) = w.get_mut(limb + 1) {
			*target |= value >> (LIMB_BITS - shift);
		}
	}
}

//		power_of_two															
/// Returns `2^exp` as an [`f64`], or infinity if it is too large.
fn power_of_two(exp: BitCount) -> f64 {
	let bias = BitCount::from(f64::MAX_EXP.unsigned_abs()) - 1;
	if exp > bias {
		return f64::INFINITY;
	}
	f64::from_bits((exp + bias) << (f64::MANTISSA_DIGITS - 1))
}
