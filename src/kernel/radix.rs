//! Radix conversion between limb magnitudes and digit strings.
//!
//! Digits are exchanged as raw values (`0..base`), most significant first; the
//! mapping to and from characters belongs to the caller.
//!

#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	reason = "Digit arithmetic with caller-checked bounds"
)]



//		Packages

use super::{
	BitCount,
	DoubleLimb,
	LIMB_BITS,
	Limb,
	Scratch,
	ScratchError,
	add_1_in_place,
	bit_length,
	divrem_1_in_place,
	mul_1_in_place,
	normalized_len,
};



//		Functions

//		size_in_base															
/// Returns an upper bound for the number of digits needed to write the
/// normalised magnitude `a` in `base`, without sign. Exact for powers of two,
/// and otherwise at most one too large. Zero needs one digit.
#[must_use]
pub fn size_in_base(a: &[Limb], base: u32) -> usize {
	debug_assert!((2..=256).contains(&base));
	let bits = bit_length(a);
	if bits == 0 {
		return 1;
	}
	if base.is_power_of_two() {
		let per_digit = BitCount::from(base.trailing_zeros());
		return to_usize(bits.div_ceil(per_digit));
	}
	//	log(2)/log(base) as a 32-bit binary fraction, rounded up
	let ratio  = (f64::from(u32::MAX) / f64::from(base).log2()).ceil() as DoubleLimb + 1;
	let digits = (DoubleLimb::from(bits) * ratio) >> 32;
	to_usize(BitCount::try_from(digits).unwrap_or(BitCount::MAX)).saturating_add(1)
}

//		get_str																	
/// Writes the digits of the normalised magnitude `a` in `base` to the start of
/// `out`, returning the number of digits written. Zero is written as a single
/// `0` digit, and there are never leading zeros.
/// 
/// `out` must hold at least [`size_in_base()`] digits.
/// 
/// # Errors
/// 
/// Non-power-of-two bases need a working copy of `a`, and will return a
/// [`ScratchError`] if it cannot be allocated.
/// 
pub fn get_str(out: &mut [u8], base: u32, a: &[Limb]) -> Result<usize, ScratchError> {
	debug_assert!((2..=256).contains(&base));
	if a.is_empty() {
		out[0] = 0;
		return Ok(1);
	}
	if base.is_power_of_two() {
		let per_digit = base.trailing_zeros();
		let count     = to_usize(bit_length(a).div_ceil(BitCount::from(per_digit)));
		for (idx, digit) in out[..count].iter_mut().enumerate() {
			let pos = (count - 1 - idx) as BitCount * BitCount::from(per_digit);
			*digit  = extract_bits(a, pos, per_digit);
		}
		return Ok(count);
	}
	
	//	Peel off as many digits at a time as fit in a limb, filling from the end
	let (chunk_base, chunk_digits) = chunk(base);
	let mut work                   = Scratch::from_slice(a)?;
	let mut size                   = work.len();
	let mut end                    = out.len();
	while size > 0 {
		let mut rem = divrem_1_in_place(&mut work[..size], chunk_base);
		size        = normalized_len(&work[..size]);
		for _ in 0..chunk_digits {
			end      -= 1;
			out[end]  = (rem % Limb::from(base)) as u8;
			rem      /= Limb::from(base);
			if size == 0 && rem == 0 {
				break;
			}
		}
	}
	let count = out.len() - end;
	out.copy_within(end.., 0);
	Ok(count)
}

//		set_str																	
/// Converts the digit values in `digits` (most significant first, each less
/// than `base`) into `w`, returning the normalised length of the result.
/// 
/// `w` must be zeroed and large enough for the result.
/// 
pub fn set_str(w: &mut [Limb], digits: &[u8], base: u32) -> usize {
	debug_assert!((2..=256).contains(&base));
	if base.is_power_of_two() {
		let per_digit = base.trailing_zeros();
		for (idx, &digit) in digits.iter().rev().enumerate() {
			deposit_bits(w, idx as BitCount * BitCount::from(per_digit), Limb::from(digit));
		}
		return normalized_len(w);
	}
	
	let (chunk_base, chunk_digits) = chunk(base);
	let mut size                   = 0;
	let head                       = match digits.len() % chunk_digits {
		0 => chunk_digits,
		n => n,
	};
	let mut start = 0;
	let mut take  = head;
	while start < digits.len() {
		let group      = &digits[start..start + take];
		let value      = group.iter().fold(0, |acc: Limb, &d| acc * Limb::from(base) + Limb::from(d));
		let multiplier = if take == chunk_digits { chunk_base } else { Limb::from(base).pow(take as u32) };
		let carry      = mul_1_in_place(&mut w[..size], multiplier);
		if carry != 0 {
			w[size]  = carry;
			size    += 1;
		}
		if size == 0 {
			w[0] = value;
			size = usize::from(value != 0);
		} else if add_1_in_place(&mut w[..size], value) != 0 {
			w[size]  = 1;
			size    += 1;
		}
		start += take;
		take   = chunk_digits;
	}
	normalized_len(&w[..size])
}

//		chunk																	
/// Returns the largest power of `base` that fits in a limb, and its exponent.
fn chunk(base: u32) -> (Limb, usize) {
	let mut power  = Limb::from(base);
	let mut digits = 1;
	while let Some(next) = power.checked_mul(Limb::from(base)) {
		power   = next;
		digits += 1;
	}
	(power, digits)
}

//		extract_bits															
/// Reads `count` (at most 8) bits of `a` starting at bit `pos`.
fn extract_bits(a: &[Limb], pos: BitCount, count: u32) -> u8 {
	let limb  = to_usize(pos / BitCount::from(LIMB_BITS));
	let shift = (pos % BitCount::from(LIMB_BITS)) as u32;
	let mut v = a[limb] >> shift;
	if shift + count > LIMB_BITS && limb + 1 < a.len() {
		v |= a[limb + 1] << (LIMB_BITS - shift);
	}
	(v & ((1 << count) - 1)) as u8
}

//		deposit_bits															
/// ORs the (at most 8-bit) `value` into `w` at bit `pos`.
fn deposit_bits(w: &mut [Limb], pos: BitCount, value: Limb) {
	let limb  = to_usize(pos / BitCount::from(LIMB_BITS));
	let shift = (pos % BitCount::from(LIMB_BITS)) as u32;
	w[limb]  |= value << shift;
	if shift > 0 && limb + 1 < w.len() {
		w[limb + 1] |= value >> (LIMB_BITS - shift);
	}
}

//		to_usize																
/// Narrows a bit-derived count that is known to index memory.
fn to_usize(value: BitCount) -> usize {
	usize::try_from(value).unwrap_or(usize::MAX)
}
