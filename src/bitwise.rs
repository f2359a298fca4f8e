//! Bitwise logic and shifts.
//!
//! Values are stored in sign-magnitude form, but the logical operations behave
//! as if both operands were infinite-precision two's-complement numbers. A
//! negative `x` has the two's-complement pattern `!(|x| - 1)`, so each operation
//! works on the magnitudes of its operands, less one for negative operands,
//! and then derives the sign of the result and whether it needs un-complementing
//! from the sign pair.
//!

#![allow(
	clippy::indexing_slicing,
	clippy::arithmetic_side_effects,
	reason = "Every limb write follows a resize to the required size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/bitwise.rs"]
mod tests;



//		Packages

use crate::{
	errors::Error,
	int::BigInt,
	kernel::{self, BitCount, LIMB_BITS, Limb, MAX_LIMBS},
};
use core::iter::repeat;



//		Constants

/// The largest bit length a value can have.
#[allow(clippy::cast_possible_truncation, reason = "MAX_LIMBS is below u64::MAX on every platform")]
pub const MAX_BITS: BitCount = (MAX_LIMBS as BitCount).saturating_mul(LIMB_BITS as BitCount);



//		Enums

//		Logic																	
/// The logical operations that share the two's-complement case table.
#[derive(Clone, Copy)]
enum Logic {
	And,
	Or,
	Xor,
}



//		Functions

//		invert																	
/// Sets `w = !u`, i.e. `-(u + 1)`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn invert(u: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	if u.negative {
		w.resize(u.size)?;
		let _ = kernel::sub_1(&mut w.digits[..u.size], u.limbs(), 1);
		w.negative = false;
	} else {
		w.resize(u.size + 1)?;
		w.digits[u.size] = kernel::add_1(&mut w.digits[..u.size], u.limbs(), 1);
		w.negative       = true;
	}
	w.normalize();
	Ok(())
}

//		invert_assign															
/// Sets `u = !u`.
/// 
/// # Errors
/// 
/// As for [`invert()`]. `u` is unchanged on failure.
/// 
pub fn invert_assign(u: &mut BigInt) -> Result<(), Error> {
	u.in_place(invert)
}

//		and																		
/// Sets `w = u & v` under two's-complement semantics.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn and(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	logical(Logic::And, u, v, w)
}

//		and_assign																
/// Sets `u = u & v`.
/// 
/// # Errors
/// 
/// As for [`and()`]. `u` is unchanged on failure.
/// 
pub fn and_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| and(source, v, w))
}

//		or																		
/// Sets `w = u | v` under two's-complement semantics.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn or(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	logical(Logic::Or, u, v, w)
}

//		or_assign																
/// Sets `u = u | v`.
/// 
/// # Errors
/// 
/// As for [`or()`]. `u` is unchanged on failure.
/// 
pub fn or_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| or(source, v, w))
}

//		xor																		
/// Sets `w = u ^ v` under two's-complement semantics.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn xor(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	logical(Logic::Xor, u, v, w)
}

//		xor_assign																
/// Sets `u = u ^ v`.
/// 
/// # Errors
/// 
/// As for [`xor()`]. `u` is unchanged on failure.
/// 
pub fn xor_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| xor(source, v, w))
}

//		mul_2exp																
/// Sets `w = u · 2^shift`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if the result would be too large to
/// represent, or if `w` cannot be grown. `w` is unchanged on failure.
/// 
pub fn mul_2exp(u: &BigInt, shift: BitCount, w: &mut BigInt) -> Result<(), Error> {
	if u.size == 0 {
		w.set_zero();
		return Ok(());
	}
	if shift > MAX_BITS - u.count_ones() {
		return Err(Error::OutOfMemory);
	}
	let whole = usize::try_from(shift / BitCount::from(LIMB_BITS)).map_err(|_| Error::OutOfMemory)?;
	let part  = u32::try_from(shift % BitCount::from(LIMB_BITS)).map_err(|_| Error::OutOfMemory)?;
	let size  = u.size.checked_add(whole).and_then(|size| size.checked_add(1)).ok_or(Error::OutOfMemory)?;
	w.resize(size)?;
	
	let top = &mut w.digits[whole..size];
	if part == 0 {
		top[..u.size].copy_from_slice(u.limbs());
		top[u.size] = 0;
	} else {
		top[u.size] = kernel::lshift(&mut top[..u.size], u.limbs(), part);
	}
	w.digits[..whole].fill(0);
	w.negative = u.negative;
	w.normalize();
	Ok(())
}

//		mul_2exp_assign															
/// Sets `u = u · 2^shift`.
/// 
/// # Errors
/// 
/// As for [`mul_2exp()`]. `u` is unchanged on failure.
/// 
pub fn mul_2exp_assign(u: &mut BigInt, shift: BitCount) -> Result<(), Error> {
	u.in_place(|source, w| mul_2exp(source, shift, w))
}

//		quo_2exp																
/// Sets `w = ⌊u / 2^shift⌋`, an arithmetic right shift.
/// 
/// Negative values round towards negative infinity, so shifting a negative
/// value past its top bit gives `-1`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn quo_2exp(u: &BigInt, shift: BitCount, w: &mut BigInt) -> Result<(), Error> {
	let whole = usize::try_from(shift / BitCount::from(LIMB_BITS)).unwrap_or(usize::MAX);
	if whole >= u.size {
		if u.negative {
			return w.set_i64(-1);
		}
		w.set_zero();
		return Ok(());
	}
	#[expect(clippy::cast_possible_truncation, reason = "Remainder of a division by LIMB_BITS")]
	let part     = (shift % BitCount::from(LIMB_BITS)) as u32;
	let size     = u.size - whole;
	let kept     = &u.digits[whole..u.size];
	let mut lost = u.negative && u.digits[..whole].iter().any(|&limb| limb != 0);
	w.resize(size + usize::from(u.negative))?;
	
	if part == 0 {
		w.digits[..size].copy_from_slice(kept);
	} else {
		let out = kernel::rshift(&mut w.digits[..size], kept, part);
		lost    = lost || (u.negative && out != 0);
	}
	if u.negative {
		w.digits[size] = if lost { kernel::add_1_in_place(&mut w.digits[..size], 1) } else { 0 };
	}
	w.negative = u.negative;
	w.normalize();
	Ok(())
}

//		quo_2exp_assign															
/// Sets `u = ⌊u / 2^shift⌋`.
/// 
/// # Errors
/// 
/// As for [`quo_2exp()`]. `u` is unchanged on failure.
/// 
pub fn quo_2exp_assign(u: &mut BigInt, shift: BitCount) -> Result<(), Error> {
	u.in_place(|source, w| quo_2exp(source, shift, w))
}

//		logical																	
/// Applies a logical operation under two's-complement semantics.
/// 
/// With `u'` and `v'` standing for a negative operand's magnitude less one,
/// the results by sign pair are:
/// 
///   - `+`, `+`: `u & v`, `u | v` and `u ^ v` directly.
///   - `-`, `+`: AND is `!u' & v`. OR is `-((u' & !v) + 1)`, and XOR is
///     `-((u' ^ v) + 1)`.
///   - `+`, `-`: the mirror image of the above.
///   - `-`, `-`: AND is `-((u' | v') + 1)`. OR is `-((u' & v') + 1)`, and XOR
///     is `u' ^ v'`.
/// 
fn logical(logic: Logic, u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	let combine: fn(Limb, Limb) -> Limb = match (logic, u.negative, v.negative) {
		(Logic::And, false, false) => |x, y| x & y,
		(Logic::And, true,  false) => |x, y| !x & y,
		(Logic::And, false, true)  => |x, y| x & !y,
		(Logic::And, true,  true)  => |x, y| x | y,
		(Logic::Or,  false, false) => |x, y| x | y,
		(Logic::Or,  true,  false) => |x, y| x & !y,
		(Logic::Or,  false, true)  => |x, y| !x & y,
		(Logic::Or,  true,  true)  => |x, y| x & y,
		(Logic::Xor, _,     _)     => |x, y| x ^ y,
	};
	let negative = match logic {
		Logic::And => u.negative && v.negative,
		Logic::Or  => u.negative || v.negative,
		Logic::Xor => u.negative != v.negative,
	};
	let size = u.size.max(v.size);
	w.resize(size + usize::from(negative))?;
	
	for ((out, x), y) in w.digits[..size].iter_mut().zip(operand(u)).zip(operand(v)) {
		*out = combine(x, y);
	}
	if negative {
		w.digits[size] = kernel::add_1_in_place(&mut w.digits[..size], 1);
	}
	w.negative = negative;
	w.normalize();
	Ok(())
}

//		operand																	
/// Yields the limbs of `|x|`, or of `|x| - 1` when `x` is negative, followed
/// by zeros.
fn operand(x: &BigInt) -> impl Iterator<Item = Limb> + '_ {
	let mut borrow = x.negative;
	x.limbs()
		.iter()
		.map(move |&limb| {
			let (value, under) = limb.overflowing_sub(Limb::from(borrow));
			borrow             = under;
			value
		})
		.chain(repeat(0))
}
