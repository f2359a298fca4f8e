//		Packages

use super::*;
use claims::{assert_ok, assert_ok_eq};
use rubedo::sugar::s;



//		Constants

const MAX: Limb = Limb::MAX;



//		Tests

mod scratch {
	use super::*;
	
	//		zeroed																
	#[test]
	fn zeroed__default_allocator() {
		let scratch = Scratch::zeroed(3).unwrap();
		assert_eq!(&*scratch, &[0, 0, 0]);
		assert_eq!(format!("{scratch:?}"), "Scratch { limbs: 3, ticket: 0, .. }");
	}
	
	//		from_slice															
	#[test]
	fn from_slice__copies() {
		let scratch = Scratch::from_slice(&[1, 2, MAX]).unwrap();
		assert_eq!(&*scratch, &[1, 2, MAX]);
	}
	
	//		grow																
	#[test]
	fn grow__keeps_contents() {
		let mut scratch = Scratch::from_slice(&[7, 8]).unwrap();
		assert_ok!(scratch.grow(4));
		assert_eq!(&*scratch, &[7, 8, 0, 0]);
		assert_ok!(scratch.grow(1));
		assert_eq!(scratch.len(), 4);
		scratch[3] = 9;
		assert_eq!(scratch[3], 9);
	}
	
	//		ScratchError														
	#[test]
	fn scratch_error__display() {
		assert_eq!(ScratchError(24).to_string(), s!("Scratch allocation of 24 bytes failed"));
	}
}

mod primitives {
	use super::*;
	
	//		normalized_len														
	#[test]
	fn normalized_len__normal() {
		assert_eq!(normalized_len(&[1, 0, 0]), 1);
		assert_eq!(normalized_len(&[0, 0, 5]), 3);
		assert_eq!(normalized_len(&[0, 0]), 0);
		assert_eq!(normalized_len(&[]), 0);
	}
	
	//		cmp																	
	#[test]
	fn cmp__top_limb_first() {
		assert_eq!(cmp(&[1, 2], &[2, 1]), Ordering::Greater);
		assert_eq!(cmp(&[2, 1], &[1, 1]), Ordering::Greater);
		assert_eq!(cmp(&[0, 1], &[0, 1]), Ordering::Equal);
		assert_eq!(cmp(&[], &[]), Ordering::Equal);
	}
	
	//		add																	
	#[test]
	fn add__carry_out() {
		let mut w = [0; 2];
		assert_eq!(add(&mut w, &[MAX, MAX], &[1]), 1);
		assert_eq!(w, [0, 0]);
		assert_eq!(add(&mut w, &[MAX, 3], &[2]), 0);
		assert_eq!(w, [1, 4]);
	}
	
	//		add_1_in_place														
	#[test]
	fn add_1_in_place__stops_early() {
		let mut a = [MAX, 5, MAX];
		assert_eq!(add_1_in_place(&mut a, 1), 0);
		assert_eq!(a, [0, 6, MAX]);
	}
	
	//		sub																	
	#[test]
	fn sub__borrow() {
		let mut w = [0; 2];
		assert_eq!(sub(&mut w, &[0, 1], &[1]), 0);
		assert_eq!(w, [MAX, 0]);
		assert_eq!(sub(&mut w, &[0, 0], &[1]), 1);
		assert_eq!(w, [MAX, MAX]);
	}
	
	//		rsub_in_place														
	#[test]
	fn rsub_in_place__normal() {
		let mut a = [3, 0];
		assert_eq!(rsub_in_place(&mut a, &[1, 1]), 0);
		assert_eq!(a, [MAX - 1, 0]);
	}
	
	//		mul																	
	#[test]
	fn mul__full_product() {
		let mut w = [0; 2];
		mul(&mut w, &[MAX], &[MAX]);
		assert_eq!(w, [1, MAX - 1]);
		let mut w = [9; 3];
		mul(&mut w, &[0, 1], &[5]);
		assert_eq!(w, [0, 5, 0]);
	}
	
	//		mul_1																
	#[test]
	fn mul_1__high_limb() {
		let mut w = [0; 2];
		assert_eq!(mul_1(&mut w, &[MAX, MAX], 2), 1);
		assert_eq!(w, [MAX - 1, MAX]);
	}
	
	//		divrem_1															
	#[test]
	fn divrem_1__normal() {
		let mut q = [0; 2];
		assert_eq!(divrem_1(&mut q, &[0, 1], 3), 1);
		assert_eq!(q, [6_148_914_691_236_517_205, 0]);
		assert_eq!(mod_1(&[0, 1], 3), 1);
	}
	
	//		tdiv_qr																
	#[test]
	fn tdiv_qr__normal() {
		let mut q = [0; 2];
		let mut r = [0; 2];
		assert_ok!(tdiv_qr(&mut q, &mut r, &[0, 0, 1], &[1, 1]));
		assert_eq!(q, [MAX, 0]);
		assert_eq!(r, [1, 0]);
	}
	#[test]
	fn tdiv_qr__estimate_too_large() {
		let mut q = [0; 2];
		let mut r = [0; 3];
		assert_ok!(tdiv_qr(&mut q, &mut r, &[0, 0, 1 << 63, (1 << 63) - 1], &[1, 0, 1 << 63]));
		assert_eq!(q, [MAX - 1, 0]);
		assert_eq!(r, [2, MAX, (1 << 63) - 1]);
	}
	#[test]
	fn tdiv_qr__single_limb_divisor() {
		let mut q = [0; 3];
		let mut r = [0; 1];
		assert_ok!(tdiv_qr(&mut q, &mut r, &[7, 0, 2], &[2]));
		assert_eq!(q, [3, 0, 1]);
		assert_eq!(r, [1]);
	}
	
	//		lshift																
	#[test]
	fn lshift__across_limbs() {
		let mut w = [0; 2];
		assert_eq!(lshift(&mut w, &[MAX, 1], 4), 0);
		assert_eq!(w, [MAX << 4, 0x1F]);
		assert_eq!(lshift(&mut w, &[0, MAX], 1), 1);
	}
	
	//		rshift																
	#[test]
	fn rshift__reports_lost_bits() {
		let mut w = [0; 2];
		assert_eq!(rshift(&mut w, &[0x10, 1], 4), 0);
		assert_eq!(w, [1 | (1 << 60), 0]);
		assert_ne!(rshift(&mut w, &[0x11, 0], 4), 0);
	}
	
	//		com_in_place														
	#[test]
	fn com_in_place__normal() {
		let mut a = [0, MAX, 0xF0];
		com_in_place(&mut a);
		assert_eq!(a, [MAX, 0, !0xF0]);
	}
	
	//		scan1																
	#[test]
	fn scan1__bit_queries() {
		assert_eq!(popcount(&[MAX, 1]), 65);
		assert_eq!(scan1(&[0, 8]), 67);
		assert_eq!(scan1(&[]), 0);
		assert_eq!(bit_length(&[0, 8]), 68);
		assert_eq!(bit_length(&[]), 0);
		assert!( test_bit(&[0, 8], 67));
		assert!(!test_bit(&[0, 8], 66));
		assert!(!test_bit(&[0, 8], 1000));
	}
}

mod radix_conversion {
	use super::*;
	
	//		size_in_base														
	#[test]
	fn size_in_base__bounds() {
		assert_eq!(size_in_base(&[], 10), 1);
		assert_eq!(size_in_base(&[255], 2), 8);
		assert_eq!(size_in_base(&[255], 16), 2);
		assert_eq!(size_in_base(&[0, 1], 8), 22);
		assert!((20..=21).contains(&size_in_base(&[0, 1], 10)));
	}
	
	//		get_str																
	#[test]
	fn get_str__decimal() {
		let mut out = [0; 21];
		let count   = get_str(&mut out, 10, &[0, 1]).unwrap();
		assert_eq!(&out[..count], &[1, 8, 4, 4, 6, 7, 4, 4, 0, 7, 3, 7, 0, 9, 5, 5, 1, 6, 1, 6]);
	}
	#[test]
	fn get_str__zero_and_powers_of_two() {
		let mut out = [9; 4];
		assert_ok_eq!(get_str(&mut out, 10, &[]), 1);
		assert_eq!(out[0], 0);
		assert_ok_eq!(get_str(&mut out, 16, &[0x3E8]), 3);
		assert_eq!(&out[..3], &[3, 14, 8]);
	}
	
	//		set_str																
	#[test]
	fn set_str__decimal() {
		let mut w = [0; 2];
		let size  = set_str(&mut w, &[1, 8, 4, 4, 6, 7, 4, 4, 0, 7, 3, 7, 0, 9, 5, 5, 1, 6, 1, 6], 10);
		assert_eq!(size, 2);
		assert_eq!(w, [0, 1]);
	}
	#[test]
	fn set_str__leading_zeros() {
		let mut w = [0; 2];
		assert_eq!(set_str(&mut w, &[0, 0, 0, 7], 10), 1);
		assert_eq!(w, [7, 0]);
		let mut w = [0; 2];
		assert_eq!(set_str(&mut w, &[0, 0], 16), 0);
	}
}

mod number_theory {
	use super::*;
	
	//		gcd																	
	#[test]
	fn gcd__multi_limb() {
		let mut w = [0; 2];
		assert_ok_eq!(gcd(&mut w, &[0, 2], &[0, 3]), 2);
		assert_eq!(w, [0, 1]);
	}
	#[test]
	fn gcd__single_limb() {
		let mut w = [0; 1];
		assert_ok_eq!(gcd(&mut w, &[48], &[18]), 1);
		assert_eq!(w, [6]);
	}
	
	//		gcdext																
	#[test]
	fn gcdext__cofactor() {
		let mut g = [0; 1];
		let mut s = [0; 2];
		//	240·(-9) ≡ 2 (mod 46)
		assert_ok_eq!(gcdext(&mut g, &mut s, &[240], &[46]), (1, -1));
		assert_eq!(g, [2]);
		assert_eq!(s[0], 9);
	}
	
	//		sqrtrem																
	#[test]
	fn sqrtrem__exact_and_inexact() {
		let mut root = [0; 2];
		let mut rem  = [0; 3];
		assert_ok_eq!(sqrtrem(&mut root, Some(&mut rem[..]), &[0, 0, 1]), 0);
		assert_eq!(root, [0, 1]);
		let mut root = [0; 1];
		let mut rem  = [0; 1];
		assert_ok_eq!(sqrtrem(&mut root, Some(&mut rem[..]), &[17]), 1);
		assert_eq!(root, [4]);
		assert_eq!(rem, [1]);
	}
	
	//		pow																	
	#[test]
	fn pow__single_limb() {
		let mut w = [0; 2];
		assert_ok_eq!(pow(&mut w, &[3], 40), 1);
		assert_eq!(w[0], 12_157_665_459_056_928_801);
	}
	
	//		powm																
	#[test]
	fn powm__normal() {
		let mut w = [0; 1];
		assert_ok_eq!(powm(&mut w, &[4], &[13], &[497]), 1);
		assert_eq!(w, [445]);
		assert_ok_eq!(powm(&mut w, &[4], &[13], &[1]), 0);
		assert_ok_eq!(powm(&mut w, &[], &[], &[7]), 1);
		assert_eq!(w, [1]);
	}
	
	//		fac																	
	#[test]
	fn fac__normal() {
		let (out, size) = fac(20).unwrap();
		assert_eq!(&out[..size], &[2_432_902_008_176_640_000]);
		let (out, size) = fac(0).unwrap();
		assert_eq!(&out[..size], &[1]);
	}
	
	//		bin																	
	#[test]
	fn bin__normal() {
		let (out, size) = bin(10, 3).unwrap();
		assert_eq!(&out[..size], &[120]);
		let (_, size) = bin(3, 10).unwrap();
		assert_eq!(size, 0);
	}
}
