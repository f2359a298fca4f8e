//! Checks the engine against an independent reference implementation.

#![allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::unwrap_used,
	reason = "Not useful in tests"
)]



//		Packages

use num_bigint::{BigInt as Reference, Sign};
use proptest::prelude::*;
use zz::BigInt;



//		Functions

//		operand																	
/// Generates two's-complement byte strings of up to six limbs.
fn operand() -> impl Strategy<Value = Vec<u8>> {
	prop::collection::vec(any::<u8>(), 0..48)
}

//		pair																	
/// Builds the same value in both implementations.
fn pair(bytes: &[u8]) -> (BigInt, Reference) {
	(BigInt::from_bytes(bytes, true).unwrap(), Reference::from_signed_bytes_be(bytes))
}

//		floor_divmod															
/// Floor division in terms of the reference's truncating operators.
fn floor_divmod(u: &Reference, v: &Reference) -> (Reference, Reference) {
	let mut q = u / v;
	let mut r = u % v;
	if r.sign() != Sign::NoSign && (r.sign() == Sign::Minus) != (v.sign() == Sign::Minus) {
		q -= Reference::from(1);
		r += v;
	}
	(q, r)
}



//		Tests

proptest! {
	#![proptest_config(ProptestConfig::with_cases(256))]
	
	//		add, sub, mul														
	#[test]
	fn arithmetic__matches_reference(a in operand(), b in operand()) {
		let (u, x) = pair(&a);
		let (v, y) = pair(&b);
		prop_assert_eq!((&u + &v).to_string(), (&x + &y).to_string());
		prop_assert_eq!((&u - &v).to_string(), (&x - &y).to_string());
		prop_assert_eq!((&u * &v).to_string(), (&x * &y).to_string());
	}
	
	//		div																	
	#[test]
	fn div__floors_like_reference(a in operand(), b in operand()) {
		let (u, x) = pair(&a);
		let (v, y) = pair(&b);
		prop_assume!(!v.is_zero());
		let mut q = BigInt::new();
		let mut r = BigInt::new();
		zz::div(&u, &v, Some(&mut q), Some(&mut r)).unwrap();
		let (fq, fr) = floor_divmod(&x, &y);
		prop_assert_eq!(q.to_string(), fq.to_string());
		prop_assert_eq!(r.to_string(), fr.to_string());
		prop_assert_eq!(&q * &v + &r, u);
	}
	
	//		and, or, xor, invert												
	#[test]
	fn logic__matches_twos_complement(a in operand(), b in operand()) {
		let (u, x) = pair(&a);
		let (v, y) = pair(&b);
		prop_assert_eq!((&u & &v).to_string(), (&x & &y).to_string());
		prop_assert_eq!((&u | &v).to_string(), (&x | &y).to_string());
		prop_assert_eq!((&u ^ &v).to_string(), (&x ^ &y).to_string());
		prop_assert_eq!((!&u).to_string(), (!&x).to_string());
	}
	
	//		mul_2exp, quo_2exp													
	#[test]
	fn shifts__match_reference(a in operand(), shift in 0..300_u64) {
		let (u, x) = pair(&a);
		let bits   = usize::try_from(shift).unwrap();
		prop_assert_eq!((&u << shift).to_string(), (&x << bits).to_string());
		prop_assert_eq!((&u >> shift).to_string(), (&x >> bits).to_string());
	}
	
	//		to_str_radix														
	#[test]
	fn strings__match_reference(a in operand(), radix in 2..=36_u32) {
		let (u, x) = pair(&a);
		let text   = u.to_str_radix(i32::try_from(radix).unwrap()).unwrap();
		prop_assert_eq!(&text, &x.to_str_radix(radix));
		prop_assert!(u.size_in_base(i32::try_from(radix).unwrap()).unwrap() >= text.trim_start_matches('-').len());
		prop_assert_eq!(BigInt::from_str_radix(&text, radix).unwrap(), u);
	}
	
	//		to_bytes															
	#[test]
	fn bytes__keep_their_width(a in operand()) {
		let (u, _) = pair(&a);
		prop_assert_eq!(u.to_bytes(a.len(), true).unwrap(), a);
	}
	
	//		powm																
	#[test]
	fn powm__matches_reference(a in operand(), e in prop::collection::vec(any::<u8>(), 0..8), m in operand()) {
		let (u, x) = pair(&a);
		let (w, z) = pair(&m);
		prop_assume!(!w.is_zero());
		let v      = BigInt::from_bytes(&e, false).unwrap();
		let y      = Reference::from_bytes_be(Sign::Plus, &e);
		let mut r  = BigInt::new();
		zz::powm(&u, &v, &w, &mut r).unwrap();
		prop_assert_eq!(r.to_string(), x.modpow(&y, &z).to_string());
	}
	
	//		gcdext																
	#[test]
	fn gcdext__bezout_identity(a in operand(), b in operand()) {
		let (u, _) = pair(&a);
		let (v, _) = pair(&b);
		let mut g  = BigInt::new();
		let mut s  = BigInt::new();
		let mut t  = BigInt::new();
		zz::gcdext(&u, &v, Some(&mut g), Some(&mut s), Some(&mut t)).unwrap();
		prop_assert!(!g.is_negative());
		prop_assert_eq!(&s * &u + &t * &v, g.clone());
		if !g.is_zero() {
			prop_assert!((&u % &g).is_zero());
			prop_assert!((&v % &g).is_zero());
		}
	}
	
	//		sqrtrem																
	#[test]
	fn sqrtrem__brackets_the_root(a in prop::collection::vec(any::<u8>(), 0..48)) {
		let u        = BigInt::from_bytes(&a, false).unwrap();
		let mut root = BigInt::new();
		let mut rem  = BigInt::new();
		zz::sqrtrem(&u, &mut root, Some(&mut rem)).unwrap();
		let next = &root + BigInt::from(1_i64);
		prop_assert!(&root * &root <= u);
		prop_assert!(&next * &next > u);
		prop_assert_eq!(&root * &root + &rem, u);
		prop_assert!(rem <= &root * BigInt::from(2_i64));
	}
	
	//		to_f64																
	#[test]
	fn to_f64__rounds_like_parsing(a in operand()) {
		let (u, _) = pair(&a);
		prop_assert_eq!(u.to_f64().unwrap(), u.to_string().parse::<f64>().unwrap());
	}
	
	//		bit_length															
	#[test]
	fn bit_length__matches_reference(a in operand()) {
		let (u, x) = pair(&a);
		prop_assert_eq!(u.bit_length(), x.bits());
	}
}
