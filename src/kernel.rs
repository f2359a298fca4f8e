//! Fixed-width limb-array primitives.
//!
//! This is the numeric kernel that [`BigInt`](crate::BigInt) is built on.
//! Everything here works on unsigned limb slices stored least-significant limb
//! first, and knows nothing about signs, normalisation, or capacity. Output
//! slices are sized by the caller, and an output never overlaps an input (the
//! borrow checker enforces this for us).
//!
//! Routines that need temporary storage draw it from [`Scratch`], which is
//! obtained through the kernel's replaceable [`ScratchAllocator`]. With the
//! default allocator a failed scratch allocation aborts the process, exactly
//! as a C numeric kernel would. The tracking allocator installed by
//! [`setup()`](crate::setup()) reports the failure as a [`ScratchError`]
//! instead, which the engine then turns into an ordinary
//! [`Error::OutOfMemory`](crate::Error::OutOfMemory).
//!

//	Limb arithmetic is the whole point of this module, and every index is
//	bounded by slice lengths that the callers establish up front.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	reason = "Limb-level arithmetic with caller-checked bounds"
)]



//		Modules

mod radix;
mod theory;

#[cfg(test)]
#[path = "tests/kernel.rs"]
mod tests;



//		Packages

pub use radix::{get_str, set_str, size_in_base};
pub use theory::{bin, fac, gcd, gcdext, pow, powm, sqrtrem};

use core::{
	cmp::Ordering,
	fmt::{Debug, Formatter, self},
	ops::{Deref, DerefMut},
};
use std::{
	alloc::{Layout, handle_alloc_error},
	sync::{Arc, PoisonError, RwLock},
};
use thiserror::Error as ThisError;



//		Constants

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: u32 = Limb::BITS;

/// Number of bytes in a [`Limb`].
pub const LIMB_BYTES: usize = size_of::<Limb>();

/// The largest number of limbs any single buffer may hold.
/// 
/// This keeps every byte-size computation within [`isize::MAX`], which is the
/// largest object the platform allocator can represent.
/// 
pub const MAX_LIMBS: usize = isize::MAX as usize / LIMB_BYTES;



//		Type aliases

/// One unsigned machine word of a multi-word magnitude.
pub type Limb = u64;

/// The signed counterpart of [`Limb`].
pub type SignedLimb = i64;

/// Double-width limb used for carries and partial products.
pub type DoubleLimb = u128;

/// A count of bits.
pub type BitCount = u64;

/// Opaque identifier handed out by a [`ScratchAllocator`].
pub type Ticket = u64;



//		Statics

/// The kernel's currently-installed scratch allocator. [`None`] selects the
/// default, untracked allocator.
static ALLOCATOR: RwLock<Option<Arc<dyn ScratchAllocator>>> = RwLock::new(None);



//		Structs

//		ScratchError															
/// A scratch allocation was refused by a recoverable allocator.
/// 
/// The payload is the number of bytes that were requested.
/// 
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("Scratch allocation of {0} bytes failed")]
pub struct ScratchError(pub usize);

//		Scratch																	
/// Temporary limb storage owned by a kernel routine.
/// 
/// The buffer is zero-filled on creation, and is returned to the allocator that
/// issued it when dropped, even if a different allocator has been installed in
/// the meantime.
/// 
pub struct Scratch {
	/// The storage itself.
	limbs:     Vec<Limb>,
	
	/// Identifier issued by the allocator for this buffer.
	ticket:    Ticket,
	
	/// The allocator that issued the buffer, or [`None`] for the default.
	allocator: Option<Arc<dyn ScratchAllocator>>,
}

//󰭅		Scratch																	
impl Scratch {
	//		zeroed																
	/// Allocates a zero-filled scratch buffer of `len` limbs.
	/// 
	/// # Errors
	/// 
	/// Returns a [`ScratchError`] if the installed allocator is recoverable and
	/// refuses the request. A non-recoverable allocator aborts instead.
	/// 
	pub fn zeroed(len: usize) -> Result<Self, ScratchError> {
		let allocator = memory_functions();
		if len > MAX_LIMBS {
			return Err(refused(allocator.as_deref(), len));
		}
		let size      = len * LIMB_BYTES;
		let ticket    = match allocator.as_deref() {
			Some(alloc) => alloc.allocate(size).ok_or_else(|| refused(Some(alloc), len))?,
			None        => 0,
		};
		let mut limbs = Vec::new();
		if limbs.try_reserve_exact(len).is_err() {
			if let Some(alloc) = allocator.as_deref() {
				alloc.free(ticket, size);
			}
			return Err(refused(allocator.as_deref(), len));
		}
		limbs.resize(len, 0);
		Ok(Self { limbs, ticket, allocator })
	}
	
	//		from_slice															
	/// Allocates a scratch buffer holding a copy of `src`.
	/// 
	/// # Errors
	/// 
	/// As for [`zeroed()`](Self::zeroed()).
	/// 
	pub fn from_slice(src: &[Limb]) -> Result<Self, ScratchError> {
		let mut scratch = Self::zeroed(src.len())?;
		scratch.limbs.copy_from_slice(src);
		Ok(scratch)
	}
	
	//		grow																
	/// Extends the buffer to `len` limbs, zero-filling the new space. Does
	/// nothing if the buffer is already at least that long.
	/// 
	/// # Errors
	/// 
	/// As for [`zeroed()`](Self::zeroed()). On failure the existing contents
	/// are left untouched.
	/// 
	pub fn grow(&mut self, len: usize) -> Result<(), ScratchError> {
		let current = self.limbs.len();
		if len <= current {
			return Ok(());
		}
		if len > MAX_LIMBS {
			return Err(refused(self.allocator.as_deref(), len));
		}
		let (old_size, new_size) = (current * LIMB_BYTES, len * LIMB_BYTES);
		if let Some(alloc) = self.allocator.as_deref() {
			if !alloc.reallocate(self.ticket, old_size, new_size) {
				return Err(refused(Some(alloc), len));
			}
		}
		if self.limbs.try_reserve_exact(len - current).is_err() {
			if let Some(alloc) = self.allocator.as_deref() {
				let _ = alloc.reallocate(self.ticket, new_size, old_size);
			}
			return Err(refused(self.allocator.as_deref(), len));
		}
		self.limbs.resize(len, 0);
		Ok(())
	}
}

//󰭅		Debug																	
impl Debug for Scratch {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Scratch")
			.field("limbs",  &self.limbs.len())
			.field("ticket", &self.ticket)
			.finish_non_exhaustive()
	}
}

//󰭅		Deref																	
impl Deref for Scratch {
	type Target = [Limb];
	
	//		deref																
	fn deref(&self) -> &Self::Target {
		&self.limbs
	}
}

//󰭅		DerefMut																
impl DerefMut for Scratch {
	//		deref_mut															
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.limbs
	}
}

//󰭅		Drop																	
impl Drop for Scratch {
	//		drop																
	fn drop(&mut self) {
		if let Some(alloc) = self.allocator.as_deref() {
			alloc.free(self.ticket, self.limbs.len() * LIMB_BYTES);
		}
	}
}



//		Traits

//		ScratchAllocator														
/// The kernel's replaceable allocation hook.
/// 
/// Every [`Scratch`] buffer is reported to the installed allocator before its
/// storage is reserved, and again when it is released. The allocator does not
/// own the memory itself; it decides whether an allocation may go ahead, and
/// keeps whatever books it needs.
/// 
pub trait ScratchAllocator: Send + Sync {
	//		allocate															
	/// Asks for `size` bytes. Returns a ticket identifying the allocation, or
	/// [`None`] to refuse it.
	fn allocate(&self, size: usize) -> Option<Ticket>;
	
	//		reallocate															
	/// Asks to resize the allocation identified by `ticket`. Returns `false` to
	/// refuse.
	fn reallocate(&self, ticket: Ticket, old_size: usize, new_size: usize) -> bool;
	
	//		free																
	/// Reports that the allocation identified by `ticket` has been released.
	fn free(&self, ticket: Ticket, size: usize);
	
	//		recoverable															
	/// Whether a refused allocation should be reported to the caller as a
	/// [`ScratchError`]. When `false`, the kernel aborts the process instead.
	fn recoverable(&self) -> bool {
		false
	}
}



//		Functions

//		memory_functions														
/// Returns the currently-installed scratch allocator, or [`None`] if the
/// default is in use.
#[must_use]
pub fn memory_functions() -> Option<Arc<dyn ScratchAllocator>> {
	ALLOCATOR.read().unwrap_or_else(PoisonError::into_inner).clone()
}

//		set_memory_functions													
/// Installs a scratch allocator, or restores the default when given [`None`].
/// 
/// This is process-wide, so it must not race with kernel calls on other
/// threads.
/// 
pub fn set_memory_functions(allocator: Option<Arc<dyn ScratchAllocator>>) {
	*ALLOCATOR.write().unwrap_or_else(PoisonError::into_inner) = allocator;
}

//		refused																	
/// Handles a refused allocation of `len` limbs: reports it when the allocator
/// is recoverable, and aborts otherwise.
fn refused(allocator: Option<&dyn ScratchAllocator>, len: usize) -> ScratchError {
	if allocator.is_some_and(|alloc| alloc.recoverable()) {
		return ScratchError(len.saturating_mul(LIMB_BYTES));
	}
	handle_alloc_error(Layout::array::<Limb>(len).unwrap_or_else(|_| Layout::new::<Limb>()))
}

//		normalized_len															
/// Returns the length of `a` without its high-order zero limbs.
#[must_use]
pub fn normalized_len(a: &[Limb]) -> usize {
	a.iter().rposition(|&limb| limb != 0).map_or(0, |pos| pos + 1)
}

//		cmp																		
/// Compares two magnitudes of equal length.
#[must_use]
pub fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
	debug_assert_eq!(a.len(), b.len());
	for (x, y) in a.iter().rev().zip(b.iter().rev()) {
		if x != y {
			return x.cmp(y);
		}
	}
	Ordering::Equal
}

//		add_n																	
/// Sets `w = a + b` for equal-length inputs, returning the carry.
pub fn add_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
	let mut carry = false;
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		let (sum, c1) = x.overflowing_add(y);
		let (sum, c2) = sum.overflowing_add(Limb::from(carry));
		*out          = sum;
		carry         = c1 || c2;
	}
	Limb::from(carry)
}

//		add																		
/// Sets `w[..a.len()] = a + b`, returning the carry. `a` must be at least as
/// long as `b`, and either may be empty.
pub fn add(w: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
	let n     = b.len();
	let carry = add_n(&mut w[..n], &a[..n], b);
	add_1(&mut w[n..a.len()], &a[n..], carry)
}

//		add_1																	
/// Sets `w[..a.len()] = a + b`, returning the carry.
pub fn add_1(w: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	let mut carry = b;
	for (out, &x) in w.iter_mut().zip(a) {
		let (sum, c) = x.overflowing_add(carry);
		*out         = sum;
		carry        = Limb::from(c);
	}
	carry
}

//		add_1_in_place															
/// Adds `b` to `a` in place, returning the carry out of the top limb.
pub fn add_1_in_place(a: &mut [Limb], b: Limb) -> Limb {
	let mut carry = b;
	for limb in a.iter_mut() {
		if carry == 0 {
			break;
		}
		let (sum, c) = limb.overflowing_add(carry);
		*limb        = sum;
		carry        = Limb::from(c);
	}
	carry
}

//		add_in_place															
/// Adds `b` to `a` in place, returning the carry. `a` must be at least as long
/// as `b`.
pub fn add_in_place(a: &mut [Limb], b: &[Limb]) -> Limb {
	let mut carry = false;
	for (x, &y) in a.iter_mut().zip(b) {
		let (sum, c1) = x.overflowing_add(y);
		let (sum, c2) = sum.overflowing_add(Limb::from(carry));
		*x            = sum;
		carry         = c1 || c2;
	}
	add_1_in_place(&mut a[b.len()..], Limb::from(carry))
}

//		sub_n																	
/// Sets `w = a - b` for equal-length inputs, returning the borrow.
pub fn sub_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
	let mut borrow = false;
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		let (diff, b1) = x.overflowing_sub(y);
		let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
		*out           = diff;
		borrow         = b1 || b2;
	}
	Limb::from(borrow)
}

//		sub																		
/// Sets `w[..a.len()] = a - b`, returning the borrow. `a` must be at least as
/// long as `b`.
pub fn sub(w: &mut [Limb], a: &[Limb], b: &[Limb]) -> Limb {
	let n      = b.len();
	let borrow = sub_n(&mut w[..n], &a[..n], b);
	sub_1(&mut w[n..a.len()], &a[n..], borrow)
}

//		sub_1																	
/// Sets `w[..a.len()] = a - b`, returning the borrow.
pub fn sub_1(w: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	let mut borrow = b;
	for (out, &x) in w.iter_mut().zip(a) {
		let (diff, c) = x.overflowing_sub(borrow);
		*out          = diff;
		borrow        = Limb::from(c);
	}
	borrow
}

//		sub_1_in_place															
/// Subtracts `b` from `a` in place, returning the borrow out of the top limb.
pub fn sub_1_in_place(a: &mut [Limb], b: Limb) -> Limb {
	let mut borrow = b;
	for limb in a.iter_mut() {
		if borrow == 0 {
			break;
		}
		let (diff, c) = limb.overflowing_sub(borrow);
		*limb         = diff;
		borrow        = Limb::from(c);
	}
	borrow
}

//		rsub_in_place															
/// Sets `a = b - a` for equal-length inputs, returning the borrow.
pub fn rsub_in_place(a: &mut [Limb], b: &[Limb]) -> Limb {
	let mut borrow = false;
	for (x, &y) in a.iter_mut().zip(b) {
		let (diff, b1) = y.overflowing_sub(*x);
		let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
		*x             = diff;
		borrow         = b1 || b2;
	}
	Limb::from(borrow)
}

//		mul_1																	
/// Sets `w[..a.len()] = a * b`, returning the high limb of the product.
pub fn mul_1(w: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	let mut carry: Limb = 0;
	for (out, &x) in w.iter_mut().zip(a) {
		let prod = DoubleLimb::from(x) * DoubleLimb::from(b) + DoubleLimb::from(carry);
		*out     = low(prod);
		carry    = high(prod);
	}
	carry
}

//		mul_1_in_place															
/// Multiplies `a` by `b` in place, returning the high limb of the product.
pub fn mul_1_in_place(a: &mut [Limb], b: Limb) -> Limb {
	let mut carry: Limb = 0;
	for x in a.iter_mut() {
		let prod = DoubleLimb::from(*x) * DoubleLimb::from(b) + DoubleLimb::from(carry);
		*x       = low(prod);
		carry    = high(prod);
	}
	carry
}

//		addmul_1																
/// Sets `w[..a.len()] += a * b`, returning the high limb.
pub fn addmul_1(w: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	let mut carry: Limb = 0;
	for (out, &x) in w.iter_mut().zip(a) {
		let prod = DoubleLimb::from(x) * DoubleLimb::from(b)
			+ DoubleLimb::from(*out)
			+ DoubleLimb::from(carry);
		*out     = low(prod);
		carry    = high(prod);
	}
	carry
}

//		mul																		
/// Sets `w = a * b`, where `w` is exactly `a.len() + b.len()` limbs long.
/// 
/// This is the schoolbook method. Either input may be empty.
/// 
pub fn mul(w: &mut [Limb], a: &[Limb], b: &[Limb]) {
	debug_assert_eq!(w.len(), a.len() + b.len());
	w.fill(0);
	for (i, &y) in b.iter().enumerate() {
		w[i + a.len()] = addmul_1(&mut w[i..i + a.len()], a, y);
	}
}

//		sqr																		
/// Sets `w = a * a`, where `w` is exactly twice as long as `a`.
pub fn sqr(w: &mut [Limb], a: &[Limb]) {
	mul(w, a, a);
}

//		divrem_1																
/// Sets `q[..a.len()] = a / d`, returning `a % d`. `d` must be non-zero.
pub fn divrem_1(q: &mut [Limb], a: &[Limb], d: Limb) -> Limb {
	debug_assert!(d != 0);
	let divisor         = DoubleLimb::from(d);
	let mut rem: Limb   = 0;
	for (out, &x) in q[..a.len()].iter_mut().zip(a).rev() {
		let num = join(rem, x);
		*out    = low(num / divisor);
		rem     = low(num % divisor);
	}
	rem
}

//		divrem_1_in_place														
/// Divides `a` by `d` in place, returning the remainder. `d` must be non-zero.
pub fn divrem_1_in_place(a: &mut [Limb], d: Limb) -> Limb {
	debug_assert!(d != 0);
	let divisor       = DoubleLimb::from(d);
	let mut rem: Limb = 0;
	for x in a.iter_mut().rev() {
		let num = join(rem, *x);
		*x      = low(num / divisor);
		rem     = low(num % divisor);
	}
	rem
}

//		mod_1																	
/// Returns `a % d`. `d` must be non-zero.
#[must_use]
pub fn mod_1(a: &[Limb], d: Limb) -> Limb {
	debug_assert!(d != 0);
	let divisor = DoubleLimb::from(d);
	a.iter().rev().fold(0, |rem, &x| low(join(rem, x) % divisor))
}

//		tdiv_qr																	
/// Truncating division: sets `q[..=a.len() - d.len()]` to the quotient and
/// `r[..d.len()]` to the remainder of `a / d`.
/// 
/// `a` must be at least as long as `d`, and `d` must be normalised (non-zero
/// top limb). This is Knuth's Algorithm D, which needs normalised copies of
/// both operands.
/// 
/// # Errors
/// 
/// Returns a [`ScratchError`] if the copies cannot be allocated.
/// 
pub fn tdiv_qr(q: &mut [Limb], r: &mut [Limb], a: &[Limb], d: &[Limb]) -> Result<(), ScratchError> {
	let (m, n) = (a.len(), d.len());
	debug_assert!(m >= n && n > 0 && d[n - 1] != 0);
	if n == 1 {
		r[0] = divrem_1(q, a, d[0]);
		return Ok(());
	}
	
	//	Normalise so that the divisor's top bit is set
	let shift  = d[n - 1].leading_zeros();
	let mut dn = Scratch::zeroed(n)?;
	let mut un = Scratch::zeroed(m + 1)?;
	if shift > 0 {
		let _ = lshift(&mut dn, d, shift);
		un[m] = lshift(&mut un[..m], a, shift);
	} else {
		dn.copy_from_slice(d);
		un[..m].copy_from_slice(a);
	}
	
	let top    = DoubleLimb::from(dn[n - 1]);
	let next   = DoubleLimb::from(dn[n - 2]);
	let base   = DoubleLimb::from(Limb::MAX) + 1;
	for j in (0..=m - n).rev() {
		//	Estimate the quotient limb from the top two limbs
		let num      = join(un[j + n], un[j + n - 1]);
		let mut qhat = num / top;
		let mut rhat = num % top;
		while qhat >= base || qhat * next > ((rhat << LIMB_BITS) | DoubleLimb::from(un[j + n - 2])) {
			qhat -= 1;
			rhat += top;
			if rhat >= base {
				break;
			}
		}
		
		//	Multiply and subtract
		let qlimb      = low(qhat);
		let mut carry  = 0;
		let mut borrow = false;
		for i in 0..n {
			let prod       = DoubleLimb::from(qlimb) * DoubleLimb::from(dn[i]) + DoubleLimb::from(carry);
			carry          = high(prod);
			let (diff, b1) = un[i + j].overflowing_sub(low(prod));
			let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
			un[i + j]      = diff;
			borrow         = b1 || b2;
		}
		let (diff, b1) = un[j + n].overflowing_sub(carry);
		let (diff, b2) = diff.overflowing_sub(Limb::from(borrow));
		un[j + n]      = diff;
		
		//	The estimate was one too large, so add back
		if b1 || b2 {
			q[j]      = qlimb - 1;
			let carry = add_in_place(&mut un[j..j + n], &dn);
			un[j + n] = un[j + n].wrapping_add(carry);
		} else {
			q[j] = qlimb;
		}
	}
	
	//	Denormalise the remainder
	if shift > 0 {
		let _ = rshift(&mut r[..n], &un[..n], shift);
	} else {
		r[..n].copy_from_slice(&un[..n]);
	}
	Ok(())
}

//		lshift																	
/// Sets `w[..a.len()] = a << shift` for `0 < shift < LIMB_BITS`, returning the
/// bits shifted out of the top limb.
pub fn lshift(w: &mut [Limb], a: &[Limb], shift: u32) -> Limb {
	debug_assert!(shift > 0 && shift < LIMB_BITS);
	let n = a.len();
	if n == 0 {
		return 0;
	}
	let back = LIMB_BITS - shift;
	let out  = a[n - 1] >> back;
	for i in (1..n).rev() {
		w[i] = (a[i] << shift) | (a[i - 1] >> back);
	}
	w[0] = a[0] << shift;
	out
}

//		rshift																	
/// Sets `w[..a.len()] = a >> shift` for `0 < shift < LIMB_BITS`, returning the
/// bits shifted out of the bottom limb, left-aligned in a limb (so the result
/// is non-zero exactly when a set bit was lost).
pub fn rshift(w: &mut [Limb], a: &[Limb], shift: u32) -> Limb {
	debug_assert!(shift > 0 && shift < LIMB_BITS);
	let n = a.len();
	if n == 0 {
		return 0;
	}
	let back = LIMB_BITS - shift;
	let out  = a[0] << back;
	for i in 0..n - 1 {
		w[i] = (a[i] >> shift) | (a[i + 1] << back);
	}
	w[n - 1] = a[n - 1] >> shift;
	out
}

//		and_n																	
/// Sets `w = a & b` for equal-length inputs.
pub fn and_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) {
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		*out = x & y;
	}
}

//		andn_n																	
/// Sets `w = a & !b` for equal-length inputs.
pub fn andn_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) {
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		*out = x & !y;
	}
}

//		ior_n																	
/// Sets `w = a | b` for equal-length inputs.
pub fn ior_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) {
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		*out = x | y;
	}
}

//		xor_n																	
/// Sets `w = a ^ b` for equal-length inputs.
pub fn xor_n(w: &mut [Limb], a: &[Limb], b: &[Limb]) {
	for ((out, &x), &y) in w.iter_mut().zip(a).zip(b) {
		*out = x ^ y;
	}
}

//		com_in_place															
/// Complements every limb of `a`.
pub fn com_in_place(a: &mut [Limb]) {
	for limb in a.iter_mut() {
		*limb = !*limb;
	}
}

//		popcount																
/// Counts the set bits of `a`.
#[must_use]
pub fn popcount(a: &[Limb]) -> BitCount {
	a.iter().map(|limb| BitCount::from(limb.count_ones())).sum()
}

//		scan1																	
/// Returns the index of the lowest set bit of `a`, or `0` if `a` is zero.
#[must_use]
pub fn scan1(a: &[Limb]) -> BitCount {
	a.iter()
		.position(|&limb| limb != 0)
		.map_or(0, |pos| pos as BitCount * BitCount::from(LIMB_BITS) + BitCount::from(a[pos].trailing_zeros()))
}

//		bit_length																
/// Returns the number of significant bits in the normalised magnitude `a`.
#[must_use]
pub fn bit_length(a: &[Limb]) -> BitCount {
	a.last().map_or(0, |&top| {
		a.len() as BitCount * BitCount::from(LIMB_BITS) - BitCount::from(top.leading_zeros())
	})
}

//		test_bit																
/// Returns whether bit `idx` of `a` is set.
#[must_use]
pub fn test_bit(a: &[Limb], idx: BitCount) -> bool {
	let limb = idx / BitCount::from(LIMB_BITS);
	usize::try_from(limb).ok()
		.and_then(|pos| a.get(pos))
		.is_some_and(|&value| (value >> (idx % BitCount::from(LIMB_BITS))) & 1 == 1)
}

//		join																	
/// Combines a high and low limb into a double limb.
const fn join(hi: Limb, lo: Limb) -> DoubleLimb {
	((hi as DoubleLimb) << LIMB_BITS) | lo as DoubleLimb
}

//		high																	
/// Returns the high limb of a double limb.
#[expect(clippy::cast_possible_truncation, reason = "Shifted down by a full limb first")]
const fn high(value: DoubleLimb) -> Limb {
	(value >> LIMB_BITS) as Limb
}

//		low																		
/// Returns the low limb of a double limb.
#[expect(clippy::cast_possible_truncation, reason = "Truncation is the intent")]
const fn low(value: DoubleLimb) -> Limb {
	value as Limb
}
