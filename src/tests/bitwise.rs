//		Packages

use super::*;
use claims::{assert_err_eq, assert_ok};



//		Functions

//		big																		
fn big(text: &str) -> BigInt {
	text.parse().unwrap()
}

//		apply																	
fn apply(operation: fn(&BigInt, &BigInt, &mut BigInt) -> Result<(), Error>, u: &str, v: &str) -> BigInt {
	let mut w = BigInt::new();
	operation(&big(u), &big(v), &mut w).unwrap();
	w
}



//		Tests

mod logic {
	use super::*;
	
	//		invert																
	#[test]
	fn invert__signs() {
		let mut w = BigInt::new();
		assert_ok!(invert(&BigInt::new(), &mut w));
		assert_eq!(w, -1_i64);
		assert_ok!(invert(&big("18446744073709551615"), &mut w));
		assert_eq!(w, big("-18446744073709551616"));
		assert_ok!(invert(&big("-18446744073709551616"), &mut w));
		assert_eq!(w, big("18446744073709551615"));
		assert_ok!(invert(&big("-1"), &mut w));
		assert!(w.is_zero());
	}
	#[test]
	fn invert__twice() {
		let mut u = big("-123456789012345678901234567890");
		assert_ok!(invert_assign(&mut u));
		assert_ok!(invert_assign(&mut u));
		assert_eq!(u, big("-123456789012345678901234567890"));
	}
	
	//		and																	
	#[test]
	fn and__sign_pairs() {
		assert_eq!(apply(and, "12", "-4"), 12_i64);
		assert_eq!(apply(and, "-1", "-1"), -1_i64);
		assert_eq!(apply(and, "-1180591620717411303429", "18446744073709551619"), big("18446744073709551619"));
		assert_eq!(apply(and, "-1180591620717411303429", "-18446744073709551616"), big("-1199038364791120855040"));
		assert_eq!(apply(and, "18446744073709551619", "-18446744073709551616"), big("18446744073709551616"));
	}
	#[test]
	fn and__with_zero() {
		assert!(apply(and, "0", "-5").is_zero());
		assert!(apply(and, "123", "0").is_zero());
	}
	#[test]
	fn and__complement_is_zero() {
		let u     = big("-98765432109876543210");
		let mut n = BigInt::new();
		let mut w = BigInt::new();
		assert_ok!(invert(&u, &mut n));
		assert_ok!(and(&u, &n, &mut w));
		assert!(w.is_zero());
	}
	
	//		or																	
	#[test]
	fn or__sign_pairs() {
		assert_eq!(apply(or, "-12", "3"), -9_i64);
		assert_eq!(apply(or, "-1180591620717411303429", "18446744073709551619"), big("-1180591620717411303429"));
		assert_eq!(apply(or, "-1180591620717411303429", "-18446744073709551616"), -5_i64);
		assert_eq!(apply(or, "18446744073709551619", "-18446744073709551616"), big("-18446744073709551613"));
		assert_eq!(apply(or, "0", "-7"), -7_i64);
	}
	
	//		xor																	
	#[test]
	fn xor__sign_pairs() {
		assert_eq!(apply(xor, "-12", "-3"), 9_i64);
		assert_eq!(apply(xor, "-1180591620717411303429", "18446744073709551619"), big("-1199038364791120855048"));
		assert_eq!(apply(xor, "-1180591620717411303429", "-18446744073709551616"), big("1199038364791120855035"));
		assert_eq!(apply(xor, "18446744073709551619", "-18446744073709551616"), big("-36893488147419103229"));
		assert!(apply(xor, "-5", "-5").is_zero());
	}
	
	//		and_assign															
	#[test]
	fn and_assign__in_place() {
		let mut u = big("-12");
		assert_ok!(or_assign(&mut u, &big("3")));
		assert_eq!(u, -9_i64);
		assert_ok!(xor_assign(&mut u, &big("-3")));
		assert_eq!(u, 10_i64);
		assert_ok!(and_assign(&mut u, &big("6")));
		assert_eq!(u, 2_i64);
	}
}

mod shifts {
	use super::*;
	
	//		mul_2exp															
	#[test]
	fn mul_2exp__across_limbs() {
		let mut w = BigInt::new();
		assert_ok!(mul_2exp(&big("55340232221128654855"), 67, &mut w));
		assert_eq!(w, big("8166776806102523124154008246490171965440"));
		assert_ok!(mul_2exp(&big("-3"), 130, &mut w));
		assert_eq!(w, big("-4083388403051261561560495289181218537472"));
		assert_ok!(mul_2exp(&big("1"), 64, &mut w));
		assert_eq!(w.limbs(), &[0, 1]);
	}
	#[test]
	fn mul_2exp__zero() {
		let mut w = big("5");
		assert_ok!(mul_2exp(&BigInt::new(), BitCount::MAX, &mut w));
		assert!(w.is_zero());
	}
	#[test]
	fn mul_2exp__too_large() {
		let mut w = big("5");
		assert_err_eq!(mul_2exp(&big("1"), MAX_BITS, &mut w), Error::OutOfMemory);
		assert_eq!(w, 5_i64);
	}
	
	//		quo_2exp															
	#[test]
	fn quo_2exp__floors_negatives() {
		let mut w = BigInt::new();
		assert_ok!(quo_2exp(&big("-18446744073709551617"), 1, &mut w));
		assert_eq!(w, big("-9223372036854775809"));
		assert_ok!(quo_2exp(&big("-18446744073709551616"), 64, &mut w));
		assert_eq!(w, -1_i64);
		assert_ok!(quo_2exp(&big("-18446744073709551617"), 64, &mut w));
		assert_eq!(w, -2_i64);
	}
	#[test]
	fn quo_2exp__past_top_bit() {
		let mut w = BigInt::new();
		assert_ok!(quo_2exp(&big("-5"), 200, &mut w));
		assert_eq!(w, -1_i64);
		assert_ok!(quo_2exp(&big("5"), 200, &mut w));
		assert!(w.is_zero());
		assert_ok!(quo_2exp(&big("-5"), BitCount::MAX, &mut w));
		assert_eq!(w, -1_i64);
	}
	#[test]
	fn quo_2exp__round_trip() {
		let u     = big("-123456789012345678901234567890");
		let mut w = BigInt::new();
		for shift in [0, 1, 63, 64, 65, 200] {
			assert_ok!(mul_2exp(&u, shift, &mut w));
			assert_ok!(quo_2exp_assign(&mut w, shift));
			assert_eq!(w, u);
		}
	}
	#[test]
	fn mul_2exp_assign__in_place() {
		let mut u = big("-1");
		assert_ok!(mul_2exp_assign(&mut u, 100));
		assert_eq!(u, big("-1267650600228229401496703205376"));
	}
}
