//		Packages

use super::*;
use claims::{assert_err, assert_err_eq, assert_ok, assert_ok_eq, assert_some};
use rubedo::sugar::s;



//		Tests

mod config {
	use super::*;
	
	//		default																
	#[test]
	fn default() {
		let config = Config::default();
		assert_eq!(config.memory_ceiling, None);
		assert!(config.track_kernel);
	}
	
	//		from_json															
	#[test]
	fn from_json__partial() {
		assert_ok_eq!(Config::from_json("{}"), Config::default());
		let config = Config::from_json(r#"{ "memory_ceiling": 4096, "track_kernel": false }"#).unwrap();
		assert_eq!(config.memory_ceiling, Some(4096));
		assert!(!config.track_kernel);
	}
	#[test]
	fn from_json__invalid() {
		assert_err!(Config::from_json(r#"{ "memory_ceiling": -1 }"#));
		assert_err!(Config::from_json("42"));
	}
	
	//		to_json																
	#[test]
	fn to_json() {
		assert_ok_eq!(Config::default().to_json(), s!(r#"{"memory_ceiling":null,"track_kernel":true}"#));
	}
}

mod info {
	use super::*;
	
	//		current																
	#[test]
	fn current() {
		let info = Info::current();
		assert_eq!(info.version,       [0, 1, 0]);
		assert_eq!(info.bits_per_limb, 64);
		assert_eq!(info.limb_bytes,    8);
		assert_eq!(info.bitcnt_bytes,  8);
		assert_eq!(usize::from(info.limbcnt_bytes), size_of::<usize>());
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		let json = serde_json::to_string(&Info::current()).unwrap();
		assert!(json.starts_with(r#"{"version":[0,1,0],"bits_per_limb":64,"limb_bytes":8,"#));
	}
}

mod ceilings {
	use super::*;
	
	//		allocate															
	#[test]
	fn allocate__up_to_limit() {
		let ceiling = MemoryCeiling::new(100);
		assert!( ceiling.allocate(60));
		assert!(!ceiling.allocate(50));
		assert!( ceiling.allocate(40));
		assert_eq!(ceiling.in_use(), 100);
		assert!(!ceiling.allocate(1));
		assert!(!ceiling.allocate(usize::MAX));
	}
	
	//		reallocate															
	#[test]
	fn reallocate__grow_and_shrink() {
		let ceiling = MemoryCeiling::new(100);
		assert!( ceiling.allocate(60));
		assert!( ceiling.reallocate(60, 90));
		assert_eq!(ceiling.in_use(), 90);
		assert!(!ceiling.reallocate(90, 120));
		assert_eq!(ceiling.in_use(), 90);
		assert!( ceiling.reallocate(90, 30));
		assert_eq!(ceiling.in_use(), 30);
	}
	
	//		free																
	#[test]
	fn free__saturates() {
		let ceiling = MemoryCeiling::new(100);
		assert!(ceiling.allocate(10));
		ceiling.free(25);
		assert_eq!(ceiling.in_use(), 0);
	}
	
	//		set_limit															
	#[test]
	fn set_limit__lowered_and_raised() {
		let ceiling = MemoryCeiling::new(100);
		assert!(ceiling.allocate(50));
		ceiling.set_limit(40);
		assert_eq!(ceiling.limit(), 40);
		assert_eq!(ceiling.in_use(), 50);
		assert!(!ceiling.allocate(1));
		ceiling.set_limit(1000);
		assert!( ceiling.allocate(1));
	}
	
	//		SystemMemory														
	#[test]
	fn system_memory__allows_everything() {
		assert!(SystemMemory.allocate(usize::MAX));
		assert!(SystemMemory.reallocate(0, usize::MAX));
		SystemMemory.free(usize::MAX);
	}
}

mod ledger {
	use super::*;
	
	//		record																
	#[test]
	fn record__tickets_increase() {
		let mut ledger = Ledger { entries: Vec::new(), next: 1 };
		let first      = ledger.record(8).unwrap();
		let second     = ledger.record(16).unwrap();
		assert!(second > first);
		assert_eq!(ledger.position(first),  Some(0));
		assert_eq!(ledger.position(second), Some(1));
		assert_eq!(ledger.position(999),    None);
	}
	
	//		Tracker																
	#[test]
	fn tracker__allocate_and_free() {
		let before = outstanding();
		let ticket = Tracker.allocate(64);
		assert_some!(ticket);
		assert_eq!(outstanding(), before + 1);
		let ticket = ticket.unwrap();
		assert!(Tracker.reallocate(ticket, 64, 128));
		Tracker.free(ticket, 128);
		assert_eq!(outstanding(), before);
		assert!(Tracker.recoverable());
	}
	
	//		recover																
	#[test]
	fn recover__passes_success_through() {
		assert_ok_eq!(recover(|| Ok::<_, ScratchError>(5)), 5);
	}
	#[test]
	fn recover__reclaims_after_failure() {
		let before = outstanding();
		let kept   = Tracker.allocate(8).unwrap();
		let result = recover(|| {
			let _ = Tracker.allocate(32);
			let _ = Tracker.allocate(64);
			Err::<(), _>(ScratchError(128))
		});
		assert_err_eq!(result, Error::OutOfMemory);
		assert_eq!(outstanding(), before + 1);
		Tracker.free(kept, 8);
		assert_eq!(outstanding(), before);
	}
	#[test]
	fn recover__reclaimed_entries_free_once() {
		let before     = outstanding();
		let mut ticket = None;
		let result     = recover(|| {
			ticket = Tracker.allocate(32);
			Err::<(), _>(ScratchError(32))
		});
		assert_err!(result);
		assert_eq!(outstanding(), before);
		Tracker.free(ticket.unwrap(), 32);
		assert_eq!(outstanding(), before);
	}
}

mod limbs {
	use super::*;
	
	//		grow_limbs															
	#[test]
	fn grow_limbs__zero_fills() {
		let mut digits = vec![5];
		assert_ok!(grow_limbs(&mut digits, 3));
		assert_eq!(digits, vec![5, 0, 0]);
		assert_ok!(grow_limbs(&mut digits, 2));
		assert_eq!(digits.len(), 3);
		release_limbs(digits.len());
	}
	#[test]
	fn grow_limbs__too_large() {
		let mut digits = Vec::new();
		assert_err_eq!(grow_limbs(&mut digits, MAX_LIMBS + 1), Error::OutOfMemory);
		assert!(digits.is_empty());
	}
}

mod hooks {
	use super::*;
	
	//		memory_functions													
	#[test]
	fn memory_functions__default() {
		assert!(memory_functions().is_none());
	}
}
