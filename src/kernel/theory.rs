//! Number-theoretic kernel routines.

#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	reason = "Limb-level arithmetic with caller-checked bounds"
)]



//		Packages

use super::{
	BitCount,
	LIMB_BITS,
	Limb,
	MAX_LIMBS,
	Scratch,
	ScratchError,
	add,
	bit_length,
	cmp,
	divrem_1_in_place,
	mod_1,
	mul,
	mul_1_in_place,
	normalized_len,
	rshift,
	sqr,
	sub,
	tdiv_qr,
	test_bit,
};
use core::{cmp::Ordering, mem::swap};



//		Functions

//		gcd																		
/// Writes the greatest common divisor of `a` and `b` to `w`, returning its
/// length.
/// 
/// Both inputs must be normalised and non-zero, with `a` at least as long as
/// `b`. `w` must be at least as long as `b`.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if working storage cannot be allocated.
/// 
pub fn gcd(w: &mut [Limb], a: &[Limb], b: &[Limb]) -> Result<usize, ScratchError> {
	debug_assert!(a.len() >= b.len() && !b.is_empty());
	let n                    = a.len();
	let (mut x, mut xs)      = (Scratch::from_slice(a)?, n);
	let (mut y, mut ys)      = (Scratch::zeroed(n)?, b.len());
	let mut r                = Scratch::zeroed(n)?;
	let mut q                = Scratch::zeroed(n + 1)?;
	y[..ys].copy_from_slice(b);
	
	while ys > 1 {
		tdiv_qr(&mut q, &mut r[..ys], &x[..xs], &y[..ys])?;
		let rs = normalized_len(&r[..ys]);
		swap(&mut x, &mut y);
		swap(&mut y, &mut r);
		xs = ys;
		ys = rs;
		if ys == 0 {
			w[..xs].copy_from_slice(&x[..xs]);
			return Ok(xs);
		}
	}
	
	//	Down to a single limb, so finish natively
	let mut small = y[0];
	let mut other = mod_1(&x[..xs], small);
	while other != 0 {
		let next = small % other;
		small    = other;
		other    = next;
	}
	w[0] = small;
	Ok(1)
}

//		gcdext																	
/// Computes the greatest common divisor `g` of `a` and `b`, together with a
/// cofactor `s` such that `a·s ≡ g (mod b)`.
/// 
/// Returns the length of `g` and the signed length of `s` (negative when the
/// cofactor is negative). Both inputs must be normalised and non-zero. `g` must
/// be at least as long as the shorter input, and `s` one limb longer than that.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if working storage cannot be allocated.
/// 
pub fn gcdext(g: &mut [Limb], s: &mut [Limb], a: &[Limb], b: &[Limb]) -> Result<(usize, isize), ScratchError> {
	debug_assert!(!a.is_empty() && !b.is_empty());
	let n      = a.len().max(b.len());
	let cofact = a.len() + b.len() + 2;
	
	//	Remainder sequence: x is r[i-1], y is r[i]
	let (mut x, mut xs) = (Scratch::zeroed(n)?, a.len());
	let (mut y, mut ys) = (Scratch::zeroed(n)?, b.len());
	let mut r           = Scratch::zeroed(n)?;
	let mut q           = Scratch::zeroed(n + 1)?;
	x[..xs].copy_from_slice(a);
	y[..ys].copy_from_slice(b);
	
	//	Cofactor magnitudes: sp is s[i-1], sc is s[i]. Their signs alternate.
	let (mut sp, mut sps) = (Scratch::zeroed(cofact)?, 1);
	let (mut sc, mut scs) = (Scratch::zeroed(cofact)?, 0);
	let mut sn            = Scratch::zeroed(cofact)?;
	let mut prod          = Scratch::zeroed(cofact + n)?;
	sp[0]                 = 1;
	let mut step: usize   = 1;
	
	while ys > 0 {
		//	q, r = divmod(x, y)
		let qs = if xs >= ys {
			tdiv_qr(&mut q, &mut r[..ys], &x[..xs], &y[..ys])?;
			normalized_len(&q[..=xs - ys])
		} else {
			r[..xs].copy_from_slice(&x[..xs]);
			r[xs..ys].fill(0);
			0
		};
		let rs = normalized_len(&r[..ys]);
		
		//	s[i+1] = s[i-1] + q·s[i]
		let ps = if qs == 0 || scs == 0 {
			0
		} else {
			mul(&mut prod[..qs + scs], &q[..qs], &sc[..scs]);
			normalized_len(&prod[..qs + scs])
		};
		let sns = if ps >= sps {
			let carry = add(&mut sn, &prod[..ps], &sp[..sps]);
			sn[ps]    = carry;
			ps + 1
		} else {
			let carry = add(&mut sn, &sp[..sps], &prod[..ps]);
			sn[sps]   = carry;
			sps + 1
		};
		let sns = normalized_len(&sn[..sns]);
		
		swap(&mut x, &mut y);
		swap(&mut y, &mut r);
		xs = ys;
		ys = rs;
		swap(&mut sp, &mut sc);
		swap(&mut sc, &mut sn);
		sps   = scs;
		scs   = sns;
		step += 1;
	}
	
	//	x is now the gcd, and sp its cofactor at index step - 1
	g[..xs].copy_from_slice(&x[..xs]);
	s[..sps].copy_from_slice(&sp[..sps]);
	let size = sps as isize;
	Ok((xs, if (step - 1) % 2 == 1 { -size } else { size }))
}

//		sqrtrem																	
/// Writes the integer square root of the normalised, non-zero `a` to `root`,
/// and optionally the remainder `a - root²` to `rem`. Returns the length of the
/// remainder.
/// 
/// `root` must hold `a.len().div_ceil(2)` limbs, and `rem` `a.len()`.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if working storage cannot be allocated.
/// 
pub fn sqrtrem(root: &mut [Limb], rem: Option<&mut [Limb]>, a: &[Limb]) -> Result<usize, ScratchError> {
	let n     = a.len();
	let bits  = bit_length(a);
	let width = n.div_ceil(2) + 1;
	
	//	Newton's iteration from a power of two no smaller than the root
	let k            = bits.div_ceil(2);
	let mut x        = Scratch::zeroed(width)?;
	let mut y        = Scratch::zeroed(n + 2)?;
	let mut halved   = Scratch::zeroed(n + 2)?;
	let mut q        = Scratch::zeroed(n + 1)?;
	let mut r        = Scratch::zeroed(n)?;
	x[limb_index(k)] = 1 << (k % BitCount::from(LIMB_BITS));
	let mut xs       = limb_index(k) + 1;
	loop {
		//	y = (x + a/x) / 2
		let qs = if xs > n {
			0
		} else {
			tdiv_qr(&mut q, &mut r[..xs], a, &x[..xs])?;
			normalized_len(&q[..=n - xs])
		};
		let ys = if qs > xs {
			let carry = add(&mut y, &q[..qs], &x[..xs]);
			y[qs]     = carry;
			qs + 1
		} else {
			let carry = add(&mut y, &x[..xs], &q[..qs]);
			y[xs]     = carry;
			xs + 1
		};
		let _  = rshift(&mut halved[..ys], &y[..ys], 1);
		let hs = normalized_len(&halved[..ys]);
		if !less_than(&halved[..hs], &x[..xs]) {
			break;
		}
		x[..hs].copy_from_slice(&halved[..hs]);
		x[hs..].fill(0);
		xs = hs;
	}
	
	root[..xs].copy_from_slice(&x[..xs]);
	root[xs..].fill(0);
	let mut square = Scratch::zeroed(2 * xs)?;
	sqr(&mut square, &x[..xs]);
	let ss = normalized_len(&square);
	let _  = sub(&mut r, a, &square[..ss]);
	let rs = normalized_len(&r);
	if let Some(out) = rem {
		out[..rs].copy_from_slice(&r[..rs]);
	}
	Ok(rs)
}

//		pow																		
/// Writes `a` raised to the power `exp` to `w`, returning its length.
/// 
/// `a` must be normalised and non-zero, `exp` non-zero, and `w` large enough
/// for the result.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if working storage cannot be allocated.
/// 
pub fn pow(w: &mut [Limb], a: &[Limb], exp: u64) -> Result<usize, ScratchError> {
	debug_assert!(exp > 0 && !a.is_empty());
	let len          = w.len() + 1;
	let mut acc      = Scratch::zeroed(len)?;
	let mut tmp      = Scratch::zeroed(len)?;
	acc[..a.len()].copy_from_slice(a);
	let mut size     = a.len();
	for bit in (0..63 - exp.leading_zeros()).rev() {
		sqr(&mut tmp[..2 * size], &acc[..size]);
		size = normalized_len(&tmp[..2 * size]);
		swap(&mut acc, &mut tmp);
		if (exp >> bit) & 1 == 1 {
			mul(&mut tmp[..size + a.len()], &acc[..size], a);
			size = normalized_len(&tmp[..size + a.len()]);
			swap(&mut acc, &mut tmp);
		}
	}
	w[..size].copy_from_slice(&acc[..size]);
	Ok(size)
}

//		powm																	
/// Writes `base^exp mod m` to `w`, returning its length.
/// 
/// `m` must be normalised and non-zero; `base` and `exp` normalised and
/// possibly empty. `w` must be at least as long as `m`.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if working storage cannot be allocated.
/// 
pub fn powm(w: &mut [Limb], base: &[Limb], exp: &[Limb], m: &[Limb]) -> Result<usize, ScratchError> {
	let mn = m.len();
	if mn == 1 && m[0] == 1 {
		return Ok(0);
	}
	let mut q    = Scratch::zeroed(2 * mn.max(base.len()) + 1)?;
	let mut rem  = Scratch::zeroed(mn)?;
	let mut prod = Scratch::zeroed(2 * mn)?;
	
	//	Reduce the base first
	let mut b  = Scratch::zeroed(mn)?;
	let mut bs = base.len();
	if bs >= mn {
		tdiv_qr(&mut q, &mut rem, base, m)?;
		bs = normalized_len(&rem);
		b[..bs].copy_from_slice(&rem[..bs]);
	} else {
		b[..bs].copy_from_slice(base);
	}
	
	let mut acc  = Scratch::zeroed(mn)?;
	acc[0]       = 1;
	let mut size = 1;
	let bits     = bit_length(exp);
	for bit in (0..bits).rev() {
		size = mulmod(&mut acc, size, None, m, &mut prod, &mut q, &mut rem)?;
		if test_bit(exp, bit) {
			size = mulmod(&mut acc, size, Some(&b[..bs]), m, &mut prod, &mut q, &mut rem)?;
		}
	}
	w[..size].copy_from_slice(&acc[..size]);
	Ok(size)
}

//		mulmod																	
/// Sets `acc = acc·by mod m`, squaring when `by` is [`None`]. Returns the new
/// length of `acc`.
fn mulmod(
	acc:  &mut [Limb],
	size: usize,
	by:   Option<&[Limb]>,
	m:    &[Limb],
	prod: &mut [Limb],
	q:    &mut [Limb],
	rem:  &mut [Limb],
) -> Result<usize, ScratchError> {
	let other = by.unwrap_or(&acc[..size]);
	if size == 0 || other.is_empty() {
		return Ok(0);
	}
	let len = size + other.len();
	mul(&mut prod[..len], &acc[..size], other);
	let ps  = normalized_len(&prod[..len]);
	if ps < m.len() {
		acc[..ps].copy_from_slice(&prod[..ps]);
		acc[ps..].fill(0);
		return Ok(ps);
	}
	tdiv_qr(q, rem, &prod[..ps], m)?;
	let rs = normalized_len(rem);
	acc[..rs].copy_from_slice(&rem[..rs]);
	acc[rs..].fill(0);
	Ok(rs)
}

//		fac																		
/// Computes `n!`, returning the storage and the length of the result.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if the result cannot be stored.
/// 
pub fn fac(n: u64) -> Result<(Scratch, usize), ScratchError> {
	//	Each factor contributes at most bit_length(n) bits
	let width   = BitCount::from(u64::BITS - n.leading_zeros());
	let limbs   = n.checked_mul(width)
		.map(|bits| bits / BitCount::from(LIMB_BITS) + 2)
		.and_then(|limbs| usize::try_from(limbs).ok())
		.filter(|&limbs| limbs <= MAX_LIMBS)
		.unwrap_or(MAX_LIMBS + 1);
	let mut out = Scratch::zeroed(limbs)?;
	out[0]      = 1;
	let mut size = 1;
	
	//	Multiply in runs of factors whose product still fits in a limb
	let mut factor = 2;
	while factor <= n {
		let mut run: Limb = factor;
		factor += 1;
		while factor <= n {
			match run.checked_mul(factor) {
				Some(next) => run = next,
				None       => break,
			}
			factor += 1;
		}
		let carry = mul_1_in_place(&mut out[..size], run);
		if carry != 0 {
			out[size]  = carry;
			size      += 1;
		}
	}
	Ok((out, size))
}

//		bin																		
/// Computes the binomial coefficient `n` choose `k`, returning the storage and
/// the length of the result.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if the result cannot be stored.
/// 
pub fn bin(n: u64, k: u64) -> Result<(Scratch, usize), ScratchError> {
	if k > n {
		return Ok((Scratch::zeroed(1)?, 0));
	}
	let k       = k.min(n - k);
	let width   = BitCount::from(u64::BITS - n.leading_zeros());
	let limbs   = k.checked_mul(width)
		.map(|bits| bits / BitCount::from(LIMB_BITS) + 2)
		.and_then(|limbs| usize::try_from(limbs).ok())
		.filter(|&limbs| limbs <= MAX_LIMBS)
		.unwrap_or(MAX_LIMBS + 1);
	let mut out  = Scratch::zeroed(limbs)?;
	out[0]       = 1;
	let mut size = 1;
	
	//	After step i the accumulator holds C(n - k + i, i), always an integer
	for i in 1..=k {
		let carry = mul_1_in_place(&mut out[..size], n - k + i);
		if carry != 0 {
			out[size]  = carry;
			size      += 1;
		}
		let _ = divrem_1_in_place(&mut out[..size], i);
		size  = normalized_len(&out[..size]);
	}
	Ok((out, size))
}

//		less_than																
/// Compares two normalised magnitudes of possibly different lengths.
fn less_than(a: &[Limb], b: &[Limb]) -> bool {
	match a.len().cmp(&b.len()) {
		Ordering::Equal => cmp(a, b) == Ordering::Less,
		other           => other == Ordering::Less,
	}
}

//		limb_index																
/// Returns the index of the limb holding bit `bit`.
fn limb_index(bit: BitCount) -> usize {
	usize::try_from(bit / BitCount::from(LIMB_BITS)).unwrap_or(usize::MAX)
}

