//! Number-theoretic operations.
//!
//! These build on the kernel's magnitude routines, which allocate working
//! storage of their own. Each kernel call runs under [`recover()`], so that
//! running out of that storage surfaces as [`Error::OutOfMemory`].
//!

#![allow(
	clippy::indexing_slicing,
	clippy::arithmetic_side_effects,
	reason = "Every limb write follows a resize to the required size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/theory.rs"]
mod tests;



//		Packages

use crate::{
	arith::{self, abs_assign},
	bitwise,
	errors::Error,
	int::BigInt,
	kernel::{self, BitCount, LIMB_BITS, MAX_LIMBS},
	memory::recover,
};
use core::mem::swap;



//		Functions

//		gcd																		
/// Sets `w` to the greatest common divisor of `u` and `v`.
/// 
/// The result is never negative. `gcd(x, 0)` is `|x|`, so `gcd(0, 0)` is zero.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if storage cannot be obtained, in which case
/// `w` is unchanged.
/// 
pub fn gcd(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	if u.size == 0 {
		return arith::abs(v, w);
	}
	if v.size == 0 {
		return arith::abs(u, w);
	}
	
	//	Common factors of two are stripped here, and restored at the end
	let shift          = u.lowest_set_bit().min(v.lowest_set_bit());
	let (mut a, mut b) = (BigInt::new(), BigInt::new());
	bitwise::quo_2exp(u, shift, &mut a)?;
	bitwise::quo_2exp(v, shift, &mut b)?;
	abs_assign(&mut a);
	abs_assign(&mut b);
	if a.size < b.size {
		swap(&mut a, &mut b);
	}
	
	let mut g = BigInt::new();
	g.resize(b.size)?;
	g.size    = recover(|| kernel::gcd(&mut g.digits[..b.size], a.limbs(), b.limbs()))?;
	g.normalize();
	bitwise::mul_2exp(&g, shift, w)
}

//		gcdext																	
/// Extended greatest common divisor.
/// 
/// Computes `g = gcd(u, v)` and Bézout coefficients `s` and `t` such that
/// `s·u + t·v = g`. Any of the destinations may be omitted. If neither `s`
/// nor `t` is wanted this is just [`gcd()`].
/// 
/// The coefficient signs follow the signs of the original operands, e.g.
/// `gcdext(-2, 6)` gives `g = 2`, `s = -1`, and `t = 0`. When one operand is
/// zero the coefficients are given directly: `g = |u|`, `s = sign(u)`, `t = 0`.
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if no destination is given.
///   - [`Error::OutOfMemory`] if storage cannot be obtained. The destinations
///     are unchanged on failure.
/// 
pub fn gcdext(
	u: &BigInt,
	v: &BigInt,
	g: Option<&mut BigInt>,
	s: Option<&mut BigInt>,
	t: Option<&mut BigInt>,
) -> Result<(), Error> {
	if s.is_none() && t.is_none() {
		return g.map_or(Err(Error::InvalidArgument), |g| gcd(u, v, g));
	}
	let (mut u, mut v) = (u, v);
	let (mut s, mut t) = (s, t);
	if u.size < v.size {
		swap(&mut u, &mut v);
		swap(&mut s, &mut t);
	}
	
	let mut gg = BigInt::new();
	let mut ss = BigInt::new();
	let mut tt = BigInt::new();
	if v.size == 0 {
		arith::abs(u, &mut gg)?;
		ss.set_i64(if u.size == 0 { 0 } else if u.negative { -1 } else { 1 })?;
	} else {
		gg.resize(v.size)?;
		ss.resize(v.size + 1)?;
		let (g_size, s_size) = recover(|| {
			kernel::gcdext(&mut gg.digits[..v.size], &mut ss.digits[..=v.size], u.limbs(), v.limbs())
		})?;
		gg.size     = g_size;
		ss.size     = s_size.unsigned_abs();
		ss.negative = (s_size < 0) != u.negative;
		gg.normalize();
		ss.normalize();
		
		//	t = (g - s·u) / v, which divides exactly
		let mut product = BigInt::new();
		arith::mul(&ss, u, &mut product)?;
		arith::sub_assign(&mut product, &gg)?;
		arith::neg_assign(&mut product);
		arith::div(&product, v, Some(&mut tt), None)?;
	}
	
	if let Some(g) = g {
		*g = gg;
	}
	if let Some(s) = s {
		*s = ss;
	}
	if let Some(t) = t {
		*t = tt;
	}
	Ok(())
}

//		lcm																		
/// Sets `w` to the least common multiple of `u` and `v`.
/// 
/// The result is never negative, and is zero when either operand is zero.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if storage cannot be obtained, in which case
/// `w` is unchanged.
/// 
pub fn lcm(u: &BigInt, v: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	if u.size == 0 || v.size == 0 {
		w.set_zero();
		return Ok(());
	}
	let mut g = BigInt::new();
	let mut q = BigInt::new();
	gcd(u, v, &mut g)?;
	arith::div(u, &g, Some(&mut q), None)?;
	arith::mul(&q, v, w)?;
	abs_assign(w);
	Ok(())
}

//		mod_inverse																
/// Sets `w` to the inverse of `u` modulo `m`, in the range `0..|m|`.
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `m` is zero, or `u` has no inverse
///     because it shares a factor with `m`.
///   - [`Error::OutOfMemory`] if storage cannot be obtained.
/// 
/// `w` is unchanged on failure.
/// 
pub fn mod_inverse(u: &BigInt, m: &BigInt, w: &mut BigInt) -> Result<(), Error> {
	if m.size == 0 {
		return Err(Error::InvalidArgument);
	}
	let mut g = BigInt::new();
	let mut s = BigInt::new();
	gcdext(u, m, Some(&mut g), Some(&mut s), None)?;
	if g.cmp_i64(1).is_ne() {
		return Err(Error::InvalidArgument);
	}
	let mut modulus = BigInt::new();
	arith::abs(m, &mut modulus)?;
	let mut inverse = BigInt::new();
	arith::div(&s, &modulus, None, Some(&mut inverse))?;
	*w = inverse;
	Ok(())
}

//		powm																	
/// Modular exponentiation: sets `r = u^v mod w`.
/// 
/// A negative exponent raises the modular inverse of `u` instead. The result
/// takes the sign of the modulus, as for [`div()`](crate::div()).
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `w` is zero, or `v` is negative and `u`
///     has no inverse modulo `w`.
///   - [`Error::OutOfMemory`] if storage cannot be obtained. `r` is zero on
///     failure.
/// 
pub fn powm(u: &BigInt, v: &BigInt, w: &BigInt, r: &mut BigInt) -> Result<(), Error> {
	if w.size == 0 {
		return Err(Error::InvalidArgument);
	}
	let mut inverse = BigInt::new();
	let base        = if v.negative {
		mod_inverse(u, w, &mut inverse)?;
		&inverse
	} else {
		u
	};
	
	let outcome = powm_magnitude(base, v, w, r);
	if outcome.is_err() {
		r.set_zero();
		return outcome;
	}
	if base.negative && v.is_odd() && r.size > 0 {
		r.digits[r.size..w.size].fill(0);
		r.size = w.size;
		let _  = kernel::rsub_in_place(&mut r.digits[..w.size], w.limbs());
		r.normalize();
	}
	if w.negative && r.size > 0 {
		arith::add_assign(r, w).inspect_err(|_| r.set_zero())?;
	}
	Ok(())
}

//		pow																		
/// Sets `w = u^exp`. `0^0` is 1.
/// 
/// # Errors
/// 
///   - [`Error::Unrepresentable`] if the result would exceed the largest
///     possible size.
///   - [`Error::OutOfMemory`] if storage cannot be obtained. `w` is zero on
///     failure.
/// 
pub fn pow(u: &BigInt, exp: u64, w: &mut BigInt) -> Result<(), Error> {
	let negative = u.negative && exp % 2 == 1;
	if exp == 0 {
		return w.set_i64(1);
	}
	if u.size == 0 {
		w.set_zero();
		return Ok(());
	}
	if u.size == 1 && u.digits[0] == 1 {
		return w.set_i64(if negative { -1 } else { 1 });
	}
	
	let limbs = u.bit_length()
		.checked_mul(exp)
		.map(|bits| bits.div_ceil(BitCount::from(LIMB_BITS)) + 1)
		.and_then(|limbs| usize::try_from(limbs).ok())
		.filter(|&limbs| limbs <= MAX_LIMBS)
		.ok_or(Error::Unrepresentable)?;
	w.resize(limbs)?;
	match recover(|| kernel::pow(&mut w.digits[..limbs], u.limbs(), exp)) {
		Ok(size) => {
			w.size     = size;
			w.negative = negative;
			w.normalize();
			Ok(())
		},
		Err(err) => {
			w.set_zero();
			Err(err)
		},
	}
}

//		sqrtrem																	
/// Sets `root = ⌊√u⌋`, and optionally `rem = u - root²`.
/// 
/// # Errors
/// 
///   - [`Error::InvalidArgument`] if `u` is negative.
///   - [`Error::OutOfMemory`] if storage cannot be obtained. The destinations
///     are zero on failure.
/// 
pub fn sqrtrem(u: &BigInt, root: &mut BigInt, rem: Option<&mut BigInt>) -> Result<(), Error> {
	if u.negative {
		return Err(Error::InvalidArgument);
	}
	let mut rem = rem;
	let outcome = sqrtrem_magnitude(u, root, rem.as_deref_mut());
	if outcome.is_err() {
		root.set_zero();
		if let Some(rem) = rem {
			rem.set_zero();
		}
	}
	outcome
}

//		fac																		
/// Sets `w = n!`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if storage cannot be obtained, in which case
/// `w` is unchanged.
/// 
pub fn fac(n: u64, w: &mut BigInt) -> Result<(), Error> {
	let (limbs, size) = recover(|| kernel::fac(n))?;
	w.resize(size)?;
	w.digits[..size].copy_from_slice(&limbs[..size]);
	w.negative = false;
	Ok(())
}

//		bin																		
/// Sets `w` to the binomial coefficient `n` choose `k`, which is zero when
/// `k > n`.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if storage cannot be obtained, in which case
/// `w` is unchanged.
/// 
pub fn bin(n: u64, k: u64, w: &mut BigInt) -> Result<(), Error> {
	let (limbs, size) = recover(|| kernel::bin(n, k))?;
	w.resize(size)?;
	w.digits[..size].copy_from_slice(&limbs[..size]);
	w.negative = false;
	Ok(())
}

//		powm_magnitude															
/// Sets `r = |base|^|exp| mod |m|`.
fn powm_magnitude(base: &BigInt, exp: &BigInt, m: &BigInt, r: &mut BigInt) -> Result<(), Error> {
	r.resize(m.size)?;
	r.size     = recover(|| kernel::powm(&mut r.digits[..m.size], base.limbs(), exp.limbs(), m.limbs()))?;
	r.negative = false;
	r.normalize();
	Ok(())
}

//		sqrtrem_magnitude														
/// The body of [`sqrtrem()`], which resets the destinations if this fails.
fn sqrtrem_magnitude(u: &BigInt, root: &mut BigInt, rem: Option<&mut BigInt>) -> Result<(), Error> {
	if u.size == 0 {
		root.set_zero();
		if let Some(rem) = rem {
			rem.set_zero();
		}
		return Ok(());
	}
	let half = u.size.div_ceil(2);
	root.resize(half)?;
	root.negative = false;
	match rem {
		Some(rem) => {
			rem.resize(u.size)?;
			rem.negative = false;
			rem.size     = recover(|| {
				kernel::sqrtrem(&mut root.digits[..half], Some(&mut rem.digits[..u.size]), u.limbs())
			})?;
			rem.normalize();
		},
		None      => {
			let _ = recover(|| kernel::sqrtrem(&mut root.digits[..half], None, u.limbs()))?;
		},
	}
	root.normalize();
	Ok(())
}
