//! Memory management for the integer engine.
//!
//! There are two layers here. [`MemoryFunctions`] is the process-wide hook
//! that every allocation made on behalf of an integer passes through, whether
//! it is a value's own limb buffer or temporary storage used by the kernel. The
//! default hook allows everything; [`MemoryCeiling`] caps the total, which is
//! mostly useful for exercising out-of-memory paths.
//!
//! The second layer is the kernel tracker that [`setup()`] installs. It records
//! every scratch buffer the kernel takes out in a per-thread ledger, and turns
//! allocation failures inside the kernel into recoverable errors rather than a
//! process abort. Each kernel call is wrapped by [`recover()`], which releases
//! any ledger entries left behind by a failed call before reporting
//! [`Error::OutOfMemory`].
//!



//		Modules

#[cfg(test)]
#[path = "tests/memory.rs"]
mod tests;



//		Packages

use crate::{
	errors::Error,
	kernel::{self, BitCount, LIMB_BITS, LIMB_BYTES, Limb, MAX_LIMBS, ScratchAllocator, ScratchError, Ticket},
};
use core::{
	cell::RefCell,
	sync::atomic::{AtomicUsize, Ordering},
};
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, trace, warn};



//		Constants

/// How many ledger slots are added whenever the ledger fills up.
const LEDGER_INCREMENT: usize = 64;



//		Statics

/// The installed memory functions. [`None`] selects [`SystemMemory`].
static FUNCTIONS: RwLock<Option<Arc<dyn MemoryFunctions>>> = RwLock::new(None);

/// What [`setup()`] replaced, so that [`finish()`] can put it back.
static SAVED: Mutex<Option<Saved>> = Mutex::new(None);

thread_local! {
	/// Scratch allocations currently held by the kernel on this thread.
	static LEDGER: RefCell<Ledger> = const { RefCell::new(Ledger { entries: Vec::new(), next: 1 }) };
}



//		Structs

//		Config																	
/// Configuration for [`setup_with()`].
/// 
/// This can be loaded from JSON, and any field left out takes its default.
/// 
/// ```
/// let config = zz::Config::from_json(r#"{ "memory_ceiling": 1048576 }"#).unwrap();
/// assert_eq!(config.memory_ceiling, Some(1_048_576));
/// assert!(config.track_kernel);
/// ```
/// 
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Config {
	/// If set, installs a [`MemoryCeiling`] with this many bytes.
	pub memory_ceiling: Option<usize>,
	
	/// Whether to install the kernel tracker, making kernel allocation failures
	/// recoverable.
	pub track_kernel:   bool,
}

//󰭅		Config																	
impl Config {
	//		from_json															
	/// Parses a configuration from a JSON string.
	/// 
	/// # Errors
	/// 
	/// Returns a [`JsonError`] if the string is not valid configuration JSON.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		to_json																
	/// Serialises the configuration to a JSON string.
	/// 
	/// # Errors
	/// 
	/// Returns a [`JsonError`] if serialisation fails.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
}

//󰭅		Default																	
impl Default for Config {
	//		default																
	fn default() -> Self {
		Self {
			memory_ceiling: None,
			track_kernel:   true,
		}
	}
}

//		Info																	
/// Describes the engine's numeric configuration, as reported by [`setup()`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Info {
	/// Library version as major, minor, patch.
	pub version:       [u8; 3],
	
	/// Bits in one limb.
	pub bits_per_limb: u8,
	
	/// Bytes in one limb.
	pub limb_bytes:    u8,
	
	/// Bytes in a limb count.
	pub limbcnt_bytes: u8,
	
	/// Bytes in a bit count.
	pub bitcnt_bytes:  u8,
}

//󰭅		Info																	
impl Info {
	//		current																
	/// Describes this build of the library.
	#[expect(clippy::cast_possible_truncation, reason = "All of these are small")]
	#[must_use]
	pub fn current() -> Self {
		Self {
			version:       [
				env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
				env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
				env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
			],
			bits_per_limb: LIMB_BITS as u8,
			limb_bytes:    LIMB_BYTES as u8,
			limbcnt_bytes: size_of::<usize>() as u8,
			bitcnt_bytes:  size_of::<BitCount>() as u8,
		}
	}
}

//		SystemMemory															
/// The default memory functions, which allow every request and leave the
/// actual decision to the platform allocator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemMemory;

//󰭅		MemoryFunctions															
impl MemoryFunctions for SystemMemory {
	//		allocate															
	fn allocate(&self, _size: usize) -> bool {
		true
	}
	
	//		reallocate															
	fn reallocate(&self, _old_size: usize, _new_size: usize) -> bool {
		true
	}
	
	//		free																
	fn free(&self, _size: usize) {}
}

//		MemoryCeiling															
/// Memory functions that refuse any request which would take the total in use
/// above a fixed limit.
/// 
/// The limit applies across all threads. It can be raised or lowered while
/// installed, which is how tests simulate memory pressure coming and going.
/// 
#[derive(Debug)]
pub struct MemoryCeiling {
	/// The maximum number of bytes that may be in use.
	limit:  AtomicUsize,
	
	/// The number of bytes currently in use.
	in_use: AtomicUsize,
}

//󰭅		MemoryCeiling															
impl MemoryCeiling {
	//		new																	
	/// Creates a ceiling of `limit` bytes, with nothing yet in use.
	#[must_use]
	pub const fn new(limit: usize) -> Self {
		Self {
			limit:  AtomicUsize::new(limit),
			in_use: AtomicUsize::new(0),
		}
	}
	
	//		limit																
	/// Returns the current limit in bytes.
	#[must_use]
	pub fn limit(&self) -> usize {
		self.limit.load(Ordering::Acquire)
	}
	
	//		set_limit															
	/// Changes the limit. Memory already in use above a lowered limit is not
	/// affected, but no more will be granted until usage drops.
	pub fn set_limit(&self, limit: usize) {
		self.limit.store(limit, Ordering::Release);
	}
	
	//		in_use																
	/// Returns the number of bytes currently in use.
	#[must_use]
	pub fn in_use(&self) -> usize {
		self.in_use.load(Ordering::Acquire)
	}
}

//󰭅		MemoryFunctions															
impl MemoryFunctions for MemoryCeiling {
	//		allocate															
	fn allocate(&self, size: usize) -> bool {
		let limit = self.limit();
		self.in_use
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
				used.checked_add(size).filter(|&total| total <= limit)
			})
			.is_ok()
	}
	
	//		reallocate															
	fn reallocate(&self, old_size: usize, new_size: usize) -> bool {
		if new_size <= old_size {
			self.free(old_size - new_size);
			return true;
		}
		self.allocate(new_size - old_size)
	}
	
	//		free																
	fn free(&self, size: usize) {
		let _ = self.in_use.fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
			Some(used.saturating_sub(size))
		});
	}
}

//		Ledger																	
/// Per-thread record of outstanding kernel scratch allocations.
#[derive(Debug)]
struct Ledger {
	/// Ticket and size of each outstanding allocation, oldest first.
	entries: Vec<(Ticket, usize)>,
	
	/// The next ticket to hand out.
	next:    Ticket,
}

//󰭅		Ledger																	
impl Ledger {
	//		record																
	/// Records a new allocation of `size` bytes, returning its ticket, or
	/// [`None`] if the ledger itself cannot grow.
	fn record(&mut self, size: usize) -> Option<Ticket> {
		if self.entries.len() == self.entries.capacity()
			&& self.entries.try_reserve_exact(LEDGER_INCREMENT).is_err()
		{
			return None;
		}
		let ticket = self.next;
		self.next  = self.next.wrapping_add(1);
		self.entries.push((ticket, size));
		Some(ticket)
	}
	
	//		position															
	/// Finds the entry for `ticket`. Recent allocations are the likeliest to
	/// be looked up, so this searches from the end.
	fn position(&self, ticket: Ticket) -> Option<usize> {
		self.entries.iter().rposition(|&(entry, _)| entry == ticket)
	}
}

//		Tracker																	
/// The kernel allocator installed by [`setup()`].
#[derive(Debug)]
struct Tracker;

//󰭅		ScratchAllocator														
impl ScratchAllocator for Tracker {
	//		allocate															
	fn allocate(&self, size: usize) -> Option<Ticket> {
		if !with_functions(|functions| functions.allocate(size)) {
			trace!(size, "Kernel scratch allocation refused");
			return None;
		}
		let ticket = LEDGER.try_with(|ledger| ledger.borrow_mut().record(size)).ok().flatten();
		if ticket.is_none() {
			with_functions(|functions| functions.free(size));
		}
		ticket
	}
	
	//		reallocate															
	fn reallocate(&self, ticket: Ticket, old_size: usize, new_size: usize) -> bool {
		if !with_functions(|functions| functions.reallocate(old_size, new_size)) {
			trace!(old_size, new_size, "Kernel scratch reallocation refused");
			return false;
		}
		let _ = LEDGER.try_with(|ledger| {
			let mut ledger = ledger.borrow_mut();
			if let Some(pos) = ledger.position(ticket) {
				ledger.entries[pos].1 = new_size;
			}
		});
		true
	}
	
	//		free																
	fn free(&self, ticket: Ticket, size: usize) {
		//	Entries already reclaimed after a failure have been accounted for
		let tracked = LEDGER.try_with(|ledger| {
			let mut ledger = ledger.borrow_mut();
			ledger.position(ticket).map(|pos| ledger.entries.remove(pos))
		});
		if matches!(tracked, Ok(Some(_)) | Err(_)) {
			with_functions(|functions| functions.free(size));
		}
	}
	
	//		recoverable															
	fn recoverable(&self) -> bool {
		true
	}
}

//		Saved																	
/// Hooks replaced by [`setup()`].
struct Saved {
	/// The kernel's previous scratch allocator.
	kernel:    Option<Arc<dyn ScratchAllocator>>,
	
	/// The previous memory functions.
	functions: Option<Arc<dyn MemoryFunctions>>,
}



//		Traits

//		MemoryFunctions															
/// Hooks consulted before the engine allocates, resizes, or frees memory.
/// 
/// Implementations decide whether a request may proceed; the memory itself is
/// still obtained from the global allocator. Requests are reported in bytes.
/// 
pub trait MemoryFunctions: Send + Sync {
	//		allocate															
	/// Asks for `size` more bytes. Returns `false` to refuse.
	fn allocate(&self, size: usize) -> bool;
	
	//		reallocate															
	/// Asks to resize an allocation from `old_size` to `new_size` bytes.
	/// Returns `false` to refuse. Shrinking must always be allowed.
	fn reallocate(&self, old_size: usize, new_size: usize) -> bool;
	
	//		free																
	/// Reports that `size` bytes have been released.
	fn free(&self, size: usize);
}



//		Functions

//		setup																	
/// Prepares the engine for use, with the default [`Config`].
/// 
/// See [`setup_with()`].
/// 
#[must_use]
pub fn setup() -> Info {
	setup_with(&Config::default())
}

//		setup_with																
/// Prepares the engine for use.
/// 
/// This installs the kernel tracker (unless disabled) so that kernel memory
/// failures surface as [`Error::OutOfMemory`] instead of aborting, and
/// optionally a [`MemoryCeiling`]. The hooks it replaces are remembered for
/// [`finish()`]. Calling it again reconfigures without losing them.
/// 
/// Setup and teardown are process-wide, and must not race with integer
/// operations on other threads.
/// 
pub fn setup_with(config: &Config) -> Info {
	let mut saved = SAVED.lock().unwrap_or_else(PoisonError::into_inner);
	if saved.is_none() {
		*saved = Some(Saved {
			kernel:    kernel::memory_functions(),
			functions: FUNCTIONS.read().unwrap_or_else(PoisonError::into_inner).clone(),
		});
	}
	if config.track_kernel {
		kernel::set_memory_functions(Some(Arc::new(Tracker)));
	}
	if let Some(limit) = config.memory_ceiling {
		set_memory_functions(Some(Arc::new(MemoryCeiling::new(limit))));
	}
	let info = Info::current();
	debug!(?info, ?config, "Integer engine set up");
	info
}

//		finish																	
/// Restores the hooks that were in place before [`setup()`]. Does nothing if
/// the engine is not set up.
pub fn finish() {
	if let Some(saved) = SAVED.lock().unwrap_or_else(PoisonError::into_inner).take() {
		kernel::set_memory_functions(saved.kernel);
		set_memory_functions(saved.functions);
		debug!("Integer engine finished");
	}
}

//		set_memory_functions													
/// Installs memory functions, or restores [`SystemMemory`] when given [`None`].
/// 
/// This is process-wide. Memory that was granted under the previous functions
/// is reported to the new ones when it is freed.
/// 
pub fn set_memory_functions(functions: Option<Arc<dyn MemoryFunctions>>) {
	debug!(custom = functions.is_some(), "Memory functions installed");
	*FUNCTIONS.write().unwrap_or_else(PoisonError::into_inner) = functions;
}

//		memory_functions														
/// Returns the installed memory functions, or [`None`] if the default is in
/// use.
#[must_use]
pub fn memory_functions() -> Option<Arc<dyn MemoryFunctions>> {
	FUNCTIONS.read().unwrap_or_else(PoisonError::into_inner).clone()
}

//		with_functions															
/// Runs `f` against the installed memory functions.
fn with_functions<T>(f: impl FnOnce(&dyn MemoryFunctions) -> T) -> T {
	match FUNCTIONS.read().unwrap_or_else(PoisonError::into_inner).as_deref() {
		Some(functions) => f(functions),
		None            => f(&SystemMemory),
	}
}

//		recover																	
/// Runs a kernel operation, converting a scratch failure into
/// [`Error::OutOfMemory`].
/// 
/// Anything the operation left in this thread's ledger is released, and the
/// ledger is returned to the state it was in beforehand.
/// 
pub(crate) fn recover<T>(operation: impl FnOnce() -> Result<T, ScratchError>) -> Result<T, Error> {
	let mark = LEDGER.try_with(|ledger| ledger.borrow().entries.len()).unwrap_or(0);
	operation().map_err(|ScratchError(requested)| {
		let reclaimed = reclaim(mark);
		if reclaimed > 0 {
			warn!(reclaimed, "Released kernel scratch left behind by a failed operation");
		}
		debug!(requested, "Kernel ran out of memory");
		Error::OutOfMemory
	})
}

//		reclaim																	
/// Releases ledger entries above `mark`, returning the number of bytes freed.
fn reclaim(mark: usize) -> usize {
	let stale: Vec<(Ticket, usize)> = LEDGER
		.try_with(|ledger| {
			let mut ledger = ledger.borrow_mut();
			let from       = mark.min(ledger.entries.len());
			ledger.entries.drain(from..).collect()
		})
		.unwrap_or_default();
	let total = stale.iter().map(|&(_, size)| size).sum();
	for &(_, size) in &stale {
		with_functions(|functions| functions.free(size));
	}
	total
}

//		outstanding																
/// Returns the number of kernel scratch allocations currently held on this
/// thread.
#[must_use]
pub fn outstanding() -> usize {
	LEDGER.try_with(|ledger| ledger.borrow().entries.len()).unwrap_or(0)
}

//		grow_limbs																
/// Extends `digits` to `target` limbs, zero-filling the new space, after
/// clearing the request with the memory functions.
/// 
/// # Errors
/// 
/// Returns [`Error::OutOfMemory`] if `target` is beyond [`MAX_LIMBS`], or if
/// either the memory functions or the allocator refuse. `digits` is unchanged
/// on failure.
/// 
pub(crate) fn grow_limbs(digits: &mut Vec<Limb>, target: usize) -> Result<(), Error> {
	let current = digits.len();
	if target <= current {
		return Ok(());
	}
	if target > MAX_LIMBS {
		return Err(Error::OutOfMemory);
	}
	let (old_size, new_size) = (current * LIMB_BYTES, target * LIMB_BYTES);
	let granted              = with_functions(|functions| if current == 0 {
		functions.allocate(new_size)
	} else {
		functions.reallocate(old_size, new_size)
	});
	if !granted {
		trace!(old_size, new_size, "Limb buffer growth refused");
		return Err(Error::OutOfMemory);
	}
	if digits.try_reserve_exact(target - current).is_err() {
		with_functions(|functions| functions.free(new_size - old_size));
		trace!(old_size, new_size, "Limb buffer growth failed");
		return Err(Error::OutOfMemory);
	}
	digits.resize(target, 0);
	Ok(())
}

//		release_limbs															
/// Reports a limb buffer of `len` limbs as freed.
pub(crate) fn release_limbs(len: usize) {
	if len > 0 {
		with_functions(|functions| functions.free(len * LIMB_BYTES));
	}
}
