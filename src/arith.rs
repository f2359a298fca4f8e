//! Signed arithmetic.
//!
//! Each operation reads its inputs by reference and writes the result into a
//! destination, returning [`Error::OutOfMemory`] if the destination cannot be
//! grown. Division rounds the quotient towards negative infinity, so that the
//! remainder always takes the sign of the divisor.
//!
//! The `_assign` forms update their first operand in place.
//!

#![allow(
	clippy::indexing_slicing,
	clippy::arithmetic_side_effects,
	reason = "Every limb write follows a resize to the required size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/arith.rs"]
mod tests;



//		Packages

use crate::{
	errors::Error,
	int::BigInt,
	kernel::{self, Limb},
	memory::recover,
};
use core::{cmp::Ordering, mem::swap};



//		Functions

//		abs																		
/// Sets `v` to the absolute value of `u`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `v` cannot be grown.
/// 
pub fn abs(u: &BigInt, v: &mut BigInt) -> Result<(), Error> {
	v.copy_from(u)?;
	v.negative = false;
	Ok(())
}

//		abs_assign																
/// Replaces `u` with its absolute value.
pub fn abs_assign(u: &mut BigInt) {
	u.negative = false;
}

//		neg																		
/// Sets `v` to the negation of `u`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `v` cannot be grown.
/// 
pub fn neg(u: &BigInt, v: &mut BigInt) -> Result<(), Error> {
	v.copy_from(u)?;
	v.negative = !u.negative && u.size > 0;
	Ok(())
}

//		neg_assign																
/// Negates `u` in place.
pub fn neg_assign(u: &mut BigInt) {
	u.negative = !u.negative && u.size > 0;
}

//		add																		
/// Sets `w = u + v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn add(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	add_or_sub(u, v, false, w)
}

//		add_assign																
/// Sets `u = u + v`.
/// 
/// # Errors
/// 
/// As for [`add()`]. `u` is unchanged on failure.
/// 
pub fn add_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| add(source, v, w))
}

//		sub																		
/// Sets `w = u - v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn sub(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	add_or_sub(u, v, true, w)
}

//		sub_assign																
/// Sets `u = u - v`.
/// 
/// # Errors
/// 
/// As for [`sub()`]. `u` is unchanged on failure.
/// 
pub fn sub_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| sub(source, v, w))
}

//		add_i64																	
/// Sets `w = u + v` for a native `v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn add_i64(u: &BigInt, v: i64, w: &mut BigInt) -> Result<(), Error> {
	add_or_sub_limb(u, v.unsigned_abs(), v < 0, w)
}

//		add_i64_assign															
/// Sets `u = u + v` for a native `v`.
/// 
/// # Errors
/// 
/// As for [`add_i64()`]. `u` is unchanged on failure.
/// 
pub fn add_i64_assign(u: &mut BigInt, v: i64) -> Result<(), Error> {
	u.in_place(|source, w| add_i64(source, v, w))
}

//		sub_i64																	
/// Sets `w = u - v` for a native `v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn sub_i64(u: &BigInt, v: i64, w: &mut BigInt) -> Result<(), Error> {
	add_or_sub_limb(u, v.unsigned_abs(), v >= 0, w)
}

//		sub_i64_assign															
/// Sets `u = u - v` for a native `v`.
/// 
/// # Errors
/// 
/// As for [`sub_i64()`]. `u` is unchanged on failure.
/// 
pub fn sub_i64_assign(u: &mut BigInt, v: i64) -> Result<(), Error> {
	u.in_place(|source, w| sub_i64(source, v, w))
}

//		i64_sub																	
/// Sets `w = u - v` for a native `u`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown.
/// 
pub fn i64_sub(u: i64, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	let mut negated = BigInt::new();
	neg(v, &mut negated)?;
	add_i64(&negated, u, w)
}

//		mul																		
/// Sets `w = u · v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn mul(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	let (u, v) = if u.size < v.size { (v, u) } else { (u, v) };
	if v.size == 0 {
		w.set_zero();
		return Ok(());
	}
	let size = u.size + v.size;
	w.resize(size)?;
	w.negative = u.negative != v.negative;
	if v.size == 1 {
		w.digits[size - 1] = kernel::mul_1(&mut w.digits[..u.size], u.limbs(), v.digits[0]);
	} else if u.size == v.size && kernel::cmp(u.limbs(), v.limbs()) == Ordering::Equal {
		kernel::sqr(&mut w.digits[..size], u.limbs());
	} else {
		kernel::mul(&mut w.digits[..size], u.limbs(), v.limbs());
	}
	w.size -= usize::from(w.digits[size - 1] == 0);
	Ok(())
}

//		mul_assign																
/// Sets `u = u · v`.
/// 
/// # Errors
/// 
/// As for [`mul()`]. `u` is unchanged on failure.
/// 
pub fn mul_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, w| mul(source, v, w))
}

//		mul_i64																	
/// Sets `w = u · v` for a native `v`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `w` cannot be grown, in which case it is
/// unchanged.
/// 
pub fn mul_i64(u: &BigInt, v: i64, w: &mut BigInt) -> Result<(), Error> {
	if u.size == 0 || v == 0 {
		w.set_zero();
		return Ok(());
	}
	w.resize(u.size + 1)?;
	w.negative            = u.negative != (v < 0);
	w.digits[u.size]      = kernel::mul_1(&mut w.digits[..u.size], u.limbs(), v.unsigned_abs());
	w.size               -= usize::from(w.digits[u.size] == 0);
	Ok(())
}

//		mul_i64_assign															
/// Sets `u = u · v` for a native `v`.
/// 
/// # Errors
/// 
/// As for [`mul_i64()`]. `u` is unchanged on failure.
/// 
pub fn mul_i64_assign(u: &mut BigInt, v: i64) -> Result<(), Error> {
	u.in_place(|source, w| mul_i64(source, v, w))
}

//		div																		
/// Floor division: sets `q = ⌊u / v⌋` and `r = u - q·v`.
/// 
/// Either destination may be omitted, but not both. The remainder is zero or
/// has the sign of `v`, and `|r| < |v|`.
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `v` is zero, or neither destination is
///     given.
///   - [`Error::OutOfMemory`] if a destination cannot be grown, or the kernel
///     runs out of scratch space. Both destinations are zero on failure.
/// 
pub fn div(u: &BigInt, v: &BigInt, q: Option<&mut BigInt>, r: Option<&mut BigInt>) -> Result<(), Error> {
	if v.size == 0 {
		return Err(Error::InvalidArgument);
	}
	match (q, r) {
		(None, None)       => Err(Error::InvalidArgument),
		(Some(q), Some(r)) => div_qr(u, v, q, r),
		(Some(q), None)    => div_qr(u, v, q, &mut BigInt::new()),
		(None, Some(r))    => div_qr(u, v, &mut BigInt::new(), r),
	}
}

//		div_assign																
/// Sets `u = ⌊u / v⌋`.
/// 
/// # Errors
/// 
/// As for [`div()`]. `u` is unchanged on failure.
/// 
pub fn div_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, q| div(source, v, Some(q), None))
}

//		rem_assign																
/// Sets `u` to the remainder of `⌊u / v⌋`.
/// 
/// # Errors
/// 
/// As for [`div()`]. `u` is unchanged on failure.
/// 
pub fn rem_assign(u: &mut BigInt, v: &BigInt) -> Result<(), Error> {
	u.in_place(|source, r| div(source, v, None, Some(r)))
}

//		div_i64																	
/// Floor division by a native `v`. See [`div()`].
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `v` is zero, or neither destination is
///     given.
///   - [`Error::OutOfMemory`] if a destination cannot be grown. Both
///     destinations are zero on failure.
/// 
pub fn div_i64(u: &BigInt, v: i64, q: Option<&mut BigInt>, r: Option<&mut BigInt>) -> Result<(), Error> {
	if v == 0 || (q.is_none() && r.is_none()) {
		return Err(Error::InvalidArgument);
	}
	let (mut q, mut r) = (q, r);
	let outcome        = div_i64_inner(u, v, q.as_deref_mut(), r.as_deref_mut());
	if outcome.is_err() {
		if let Some(q) = q {
			q.set_zero();
		}
		if let Some(r) = r {
			r.set_zero();
		}
	}
	outcome
}

//		i64_div																	
/// Floor division of a native `u` by `v`. See [`div()`].
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `v` is zero, or neither destination is
///     given.
///   - [`Error::OutOfMemory`] if a destination cannot be grown. Both
///     destinations are zero on failure.
/// 
pub fn i64_div(u: i64, v: &BigInt, q: Option<&mut BigInt>, r: Option<&mut BigInt>) -> Result<(), Error> {
	if v.size == 0 || (q.is_none() && r.is_none()) {
		return Err(Error::InvalidArgument);
	}
	let (mut q, mut r) = (q, r);
	let outcome        = match v.to_i64() {
		//	Both fit natively, so divide natively
		Ok(divisor) => {
			let (dividend, divisor) = (i128::from(u), i128::from(divisor));
			let quotient            = dividend.div_euclid(divisor)
				- i128::from(divisor < 0 && dividend.rem_euclid(divisor) != 0);
			let remainder           = dividend - quotient * divisor;
			q.as_deref_mut()
				.map_or(Ok(()), |q| q.set_magnitude(quotient < 0, quotient.unsigned_abs()))
				.and_then(|()| r.as_deref_mut().map_or(Ok(()), |r| {
					r.set_magnitude(remainder < 0, remainder.unsigned_abs())
				}))
		},
		//	|v| exceeds any native dividend, so the quotient is 0 or -1
		Err(_)      => {
			let truncates = u == 0 || (u < 0) == v.negative;
			q.as_deref_mut()
				.map_or(Ok(()), |q| q.set_i64(if truncates { 0 } else { -1 }))
				.and_then(|()| r.as_deref_mut().map_or(Ok(()), |r| {
					if truncates { r.set_i64(u) } else { add_i64(v, u, r) }
				}))
		},
	};
	if outcome.is_err() {
		if let Some(q) = q {
			q.set_zero();
		}
		if let Some(r) = r {
			r.set_zero();
		}
	}
	outcome
}

//		div_i64_inner															
/// The body of [`div_i64()`], which resets the destinations if this fails.
fn div_i64_inner(u: &BigInt, v: i64, q: Option<&mut BigInt>, r: Option<&mut BigInt>) -> Result<(), Error> {
	let divisor    = v.unsigned_abs();
	let same_signs = u.negative == (v < 0);
	if u.size == 0 {
		if let Some(q) = q {
			q.set_zero();
		}
		if let Some(r) = r {
			r.set_zero();
		}
		return Ok(());
	}
	if let Some(q) = q {
		q.resize(u.size)?;
		let rem = kernel::divrem_1(&mut q.digits[..u.size], u.limbs(), divisor);
		if rem != 0 && !same_signs {
			let _ = kernel::add_1_in_place(&mut q.digits[..u.size], 1);
		}
		q.negative = !same_signs;
		q.normalize();
	}
	if let Some(r) = r {
		let mut rem = kernel::mod_1(u.limbs(), divisor);
		if rem != 0 && !same_signs {
			rem = divisor - rem;
		}
		r.set_magnitude(v < 0, u128::from(rem))?;
	}
	Ok(())
}

//		add_or_sub																
/// Sets `w = u ± v`.
fn add_or_sub(u: &BigInt, v: &BigInt, subtract: bool, w: &mut BigInt) -> Result<(), Error> {
	let (mut u, mut v)         = (u, v);
	let (mut neg_u, mut neg_v) = (u.negative, v.negative != subtract);
	if u.size < v.size {
		swap(&mut u, &mut v);
		swap(&mut neg_u, &mut neg_v);
	}
	let same_sign = neg_u == neg_v;
	w.resize(u.size + usize::from(same_sign))?;
	w.negative    = neg_u;
	
	if same_sign {
		w.digits[u.size] = kernel::add(&mut w.digits[..u.size], u.limbs(), v.limbs());
	} else if u.size != v.size {
		let _ = kernel::sub(&mut w.digits[..u.size], u.limbs(), v.limbs());
	} else {
		match kernel::cmp(u.limbs(), v.limbs()) {
			Ordering::Less    => {
				let _      = kernel::sub_n(&mut w.digits[..u.size], v.limbs(), u.limbs());
				w.negative = neg_v;
			},
			Ordering::Greater => {
				let _ = kernel::sub_n(&mut w.digits[..u.size], u.limbs(), v.limbs());
			},
			Ordering::Equal   => w.set_zero(),
		}
	}
	w.normalize();
	Ok(())
}

//		add_or_sub_limb															
/// Sets `w = u + v`, where `v` is a single limb with sign `neg_v`.
fn add_or_sub_limb(u: &BigInt, v: Limb, neg_v: bool, w: &mut BigInt) -> Result<(), Error> {
	let v_size = usize::from(v != 0);
	if u.size == 0 {
		w.resize(v_size)?;
		if v_size > 0 {
			w.digits[0] = v;
			w.negative  = neg_v;
		}
		return Ok(());
	}
	let same_sign = u.negative == neg_v;
	w.resize(u.size + usize::from(same_sign))?;
	w.negative    = u.negative;
	
	if same_sign {
		w.digits[u.size] = kernel::add_1(&mut w.digits[..u.size], u.limbs(), v);
	} else if u.size > 1 {
		let _ = kernel::sub_1(&mut w.digits[..u.size], u.limbs(), v);
	} else if u.digits[0] < v {
		w.digits[0] = v - u.digits[0];
		w.negative  = neg_v;
	} else {
		w.digits[0] = u.digits[0] - v;
	}
	w.normalize();
	Ok(())
}

//		div_qr																	
/// Floor division with both destinations present.
fn div_qr(u: &BigInt, v: &BigInt, q: &mut BigInt, r: &mut BigInt) -> Result<(), Error> {
	let outcome = div_qr_inner(u, v, q, r);
	if outcome.is_err() {
		q.set_zero();
		r.set_zero();
	}
	outcome
}

//		div_qr_inner															
/// The body of [`div_qr()`], which resets the destinations if this fails.
fn div_qr_inner(u: &BigInt, v: &BigInt, q: &mut BigInt, r: &mut BigInt) -> Result<(), Error> {
	if u.size == 0 {
		q.set_zero();
		r.set_zero();
		return Ok(());
	}
	
	//	|u| < |v|, so the quotient is 0 or -1
	if u.size < v.size {
		if u.negative == v.negative {
			q.set_zero();
			return r.copy_from(u);
		}
		q.set_i64(-1)?;
		return add(u, v, r);
	}
	
	let q_negative = u.negative != v.negative;
	let q_size     = u.size - v.size + 1;
	q.resize(q_size + usize::from(q_negative))?;
	r.resize(v.size)?;
	if q_negative {
		q.digits[q_size] = 0;
	}
	recover(|| kernel::tdiv_qr(&mut q.digits[..q_size], &mut r.digits[..v.size], u.limbs(), v.limbs()))?;
	q.negative = q_negative;
	r.negative = v.negative;
	r.normalize();
	
	//	Truncation rounded towards zero, so step the quotient down
	if q_negative && r.size > 0 {
		r.size = v.size;
		let _  = kernel::rsub_in_place(&mut r.digits[..v.size], v.limbs());
		let _  = kernel::add_1_in_place(&mut q.digits[..q.size], 1);
		r.normalize();
	}
	q.normalize();
	Ok(())
}
