//		Packages

use super::*;
use crate::bitwise::mul_2exp;
use claims::{assert_err_eq, assert_ok, assert_ok_eq};
use rubedo::sugar::s;



//		Functions

//		big																		
fn big(text: &str) -> BigInt {
	text.parse().unwrap()
}

//		power																	
fn power(exp: BitCount) -> BigInt {
	let mut w = BigInt::new();
	mul_2exp(&BigInt::from(1_i64), exp, &mut w).unwrap();
	w
}



//		Tests

mod strings {
	use super::*;
	
	//		from_str_radix														
	#[test]
	fn from_str_radix__accepted_forms() {
		assert_ok_eq!(BigInt::from_str_radix("  +1_000_000\n", 10), BigInt::from(1_000_000_i64));
		assert_ok_eq!(BigInt::from_str_radix("-DeadBeef", 16), BigInt::from(-3_735_928_559_i64));
		assert_ok_eq!(BigInt::from_str_radix("zz", 36), BigInt::from(1295_i64));
		assert_ok_eq!(BigInt::from_str_radix("-0", 10), BigInt::new());
		assert_ok_eq!(
			BigInt::from_str_radix("1_0000000000000000_0000000000000000", 16),
			big("340282366920938463463374607431768211456")
		);
	}
	#[test]
	fn from_str_radix__rejected_forms() {
		for text in ["", "   ", "-", "-+1", "+-1", "_1", "1_", "1__2", "1 2", "12a"] {
			assert_err_eq!(BigInt::from_str_radix(text, 10), Error::InvalidArgument, "{text:?}");
		}
		assert_err_eq!(BigInt::from_str_radix("2", 2), Error::InvalidArgument);
		assert_err_eq!(BigInt::from_str_radix("1", 1), Error::InvalidArgument);
		assert_err_eq!(BigInt::from_str_radix("1", 37), Error::InvalidArgument);
	}
	
	//		set_str_radix														
	#[test]
	fn set_str_radix__unchanged_on_failure() {
		let mut value = big("-42");
		assert_err_eq!(value.set_str_radix("4_2_", 10), Error::InvalidArgument);
		assert_eq!(value, -42_i64);
		assert_ok!(value.set_str_radix("777", 8));
		assert_eq!(value, 511_i64);
	}
	
	//		to_str_radix														
	#[test]
	fn to_str_radix__bases() {
		let value = big("-255");
		assert_ok_eq!(value.to_str_radix(16), s!("-ff"));
		assert_ok_eq!(value.to_str_radix(-16), s!("-FF"));
		assert_ok_eq!(value.to_str_radix(2), s!("-11111111"));
		assert_ok_eq!(BigInt::new().to_str_radix(10), s!("0"));
		assert_ok_eq!(power(64).to_str_radix(36), s!("3w5e11264sgsg"));
		assert_err_eq!(value.to_str_radix(1), Error::InvalidArgument);
		assert_err_eq!(value.to_str_radix(-37), Error::InvalidArgument);
	}
	#[test]
	fn to_str_radix__parse_back() {
		let value = big("-123456789012345678901234567890123456789");
		for base in [2, 3, 10, 16, 36] {
			let text = value.to_str_radix(base).unwrap();
			assert_ok_eq!(BigInt::from_str_radix(&text, base.unsigned_abs()), value.clone());
		}
	}
	
	//		write_str_radix														
	#[test]
	fn write_str_radix__buffer() {
		let value   = big("-1000");
		let mut out = [b'.'; 8];
		assert_ok_eq!(value.write_str_radix(10, &mut out), 5);
		assert_eq!(&out[..5], b"-1000");
		assert_err_eq!(value.write_str_radix(10, &mut out[..4]), Error::Unrepresentable);
		assert_ok_eq!(value.write_str_radix(-16, &mut out), 4);
		assert_eq!(&out[..4], b"-3E8");
	}
	
	//		size_in_base														
	#[test]
	fn size_in_base__normal() {
		assert_ok_eq!(BigInt::new().size_in_base(10), 1);
		assert_ok_eq!(big("-255").size_in_base(2), 8);
		assert_ok_eq!(big("256").size_in_base(16), 3);
		assert_ok_eq!(power(64).size_in_base(-2), 65);
		let estimate = big("999").size_in_base(10).unwrap();
		assert!((3..=4).contains(&estimate));
		assert_err_eq!(big("1").size_in_base(0), Error::InvalidArgument);
	}
}

mod bytes {
	use super::*;
	
	//		from_bytes															
	#[test]
	fn from_bytes__signed() {
		assert_ok_eq!(BigInt::from_bytes(&[0xFF], true), BigInt::from(-1_i64));
		assert_ok_eq!(BigInt::from_bytes(&[0x80, 0x00], true), BigInt::from(-32768_i64));
		assert_ok_eq!(BigInt::from_bytes(&[0x00, 0x80], true), BigInt::from(128_i64));
		assert_ok_eq!(BigInt::from_bytes(&[0xFF; 9], true), BigInt::from(-1_i64));
		assert_ok_eq!(BigInt::from_bytes(&[0x80, 0, 0, 0, 0, 0, 0, 0, 0], true), big("-2361183241434822606848"));
	}
	#[test]
	fn from_bytes__unsigned() {
		assert_ok_eq!(BigInt::from_bytes(&[0xFF], false), BigInt::from(255_i64));
		assert_ok_eq!(BigInt::from_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0], false), power(64));
		assert_ok_eq!(BigInt::from_bytes(&[], false), BigInt::new());
		assert_ok_eq!(BigInt::from_bytes(&[], true), BigInt::new());
	}
	
	//		to_bytes															
	#[test]
	fn to_bytes__widths() {
		assert_ok_eq!(big("-128").to_bytes(1, true), vec![0x80]);
		assert_ok_eq!(big("-1").to_bytes(3, true), vec![0xFF, 0xFF, 0xFF]);
		assert_ok_eq!(big("258").to_bytes(3, false), vec![0x00, 0x01, 0x02]);
		assert_ok_eq!(big("255").to_bytes(1, false), vec![0xFF]);
		assert_ok_eq!(BigInt::new().to_bytes(0, true), Vec::<u8>::new());
		assert_ok_eq!(power(64).to_bytes(9, false), vec![1, 0, 0, 0, 0, 0, 0, 0, 0]);
	}
	#[test]
	fn to_bytes__unrepresentable() {
		assert_err_eq!(big("128").to_bytes(1, true), Error::Unrepresentable);
		assert_err_eq!(big("-129").to_bytes(1, true), Error::Unrepresentable);
		assert_err_eq!(big("256").to_bytes(1, false), Error::Unrepresentable);
		assert_err_eq!(big("-1").to_bytes(8, false), Error::Unrepresentable);
	}
	
	//		write_bytes															
	#[test]
	fn write_bytes__unchanged_on_failure() {
		let mut out = [0xAA; 2];
		assert_err_eq!(big("65536").write_bytes(&mut out, false), Error::Unrepresentable);
		assert_eq!(out, [0xAA, 0xAA]);
		assert_ok!(big("-2").write_bytes(&mut out, true));
		assert_eq!(out, [0xFF, 0xFE]);
	}
	
	//		to_signed_bytes														
	#[test]
	fn to_signed_bytes__minimal() {
		assert_ok_eq!(BigInt::new().to_signed_bytes(), vec![0x00]);
		assert_ok_eq!(big("127").to_signed_bytes(), vec![0x7F]);
		assert_ok_eq!(big("128").to_signed_bytes(), vec![0x00, 0x80]);
		assert_ok_eq!(big("-128").to_signed_bytes(), vec![0x80]);
		assert_ok_eq!(big("-129").to_signed_bytes(), vec![0xFF, 0x7F]);
	}
}

mod layouts {
	use super::*;
	
	//		export																
	#[test]
	fn export__thirty_bit_words() {
		let layout  = Layout { limb_endianness: Endian::Little, ..Layout::PYINT };
		let value   = power(64);
		let len     = value.export_len(layout).unwrap();
		let mut out = vec![0xAA; len * 4];
		assert_eq!(len, 3);
		assert_ok!(value.export(layout, len, &mut out));
		assert_eq!(out, vec![0, 0, 0, 0, 0, 0, 0, 0, 16, 0, 0, 0]);
		assert_ok_eq!(BigInt::import(&out, len, layout), value);
	}
	#[test]
	fn export__most_significant_first() {
		let layout = Layout {
			bits_per_limb:   16,
			limb_size:       2,
			limbs_order:     Order::MostSignificantFirst,
			limb_endianness: Endian::Big,
		};
		let value   = big("4886718345");
		let mut out = [0; 8];
		assert_ok!(value.export(layout, 4, &mut out));
		assert_eq!(out, [0x00, 0x00, 0x00, 0x01, 0x23, 0x45, 0x67, 0x89]);
		assert_ok_eq!(BigInt::import(&out, 4, layout), value);
	}
	#[test]
	fn export__ignores_sign() {
		let mut out = [0; 2];
		assert_ok!(big("-513").export(Layout::BYTES, 2, &mut out));
		assert_eq!(out, [0x01, 0x02]);
	}
	#[test]
	fn export__invalid() {
		let value   = big("123");
		let mut out = [0; 16];
		assert_err_eq!(value.export(Layout::PYINT, 0, &mut out), Error::InvalidArgument);
		assert_err_eq!(power(64).export(Layout::BYTES, 9, &mut out[..8]), Error::InvalidArgument);
		let bad = Layout { bits_per_limb: 9, ..Layout::BYTES };
		assert_err_eq!(value.export(bad, 1, &mut out), Error::InvalidArgument);
		let bad = Layout { limb_size: 9, bits_per_limb: 64, ..Layout::BYTES };
		assert_err_eq!(value.export_len(bad), Error::InvalidArgument);
	}
	
	//		export_len															
	#[test]
	fn export_len__normal() {
		assert_ok_eq!(BigInt::new().export_len(Layout::BYTES), 0);
		assert_ok_eq!(big("-256").export_len(Layout::BYTES), 2);
		assert_ok_eq!(power(90).export_len(Layout::PYINT), 4);
	}
	
	//		import																
	#[test]
	fn import__masks_unused_bits() {
		let layout = Layout {
			bits_per_limb:   4,
			limb_size:       1,
			limbs_order:     Order::LeastSignificantFirst,
			limb_endianness: Endian::Native,
		};
		assert_ok_eq!(BigInt::import(&[0xF1, 0xE2], 2, layout), BigInt::from(0x21_i64));
		assert_ok_eq!(BigInt::import(&[], 0, layout), BigInt::new());
		assert_err_eq!(BigInt::import(&[1], 2, layout), Error::InvalidArgument);
	}
	#[test]
	fn import__full_words() {
		let layout = Layout {
			bits_per_limb:   64,
			limb_size:       8,
			limbs_order:     Order::MostSignificantFirst,
			limb_endianness: Endian::Big,
		};
		let mut bytes = vec![0; 16];
		bytes[7]      = 1;
		bytes[15]     = 2;
		assert_ok_eq!(BigInt::import(&bytes, 2, layout), big("18446744073709551618"));
	}
}

mod floats {
	use super::*;
	
	//		to_f64																
	#[test]
	fn to_f64__exact() {
		assert_ok_eq!(BigInt::new().to_f64(), 0.0);
		assert_ok_eq!(big("-12345").to_f64(), -12345.0);
		assert_ok_eq!(power(100).to_f64(), 1_267_650_600_228_229_401_496_703_205_376.0);
	}
	#[test]
	fn to_f64__ties_to_even() {
		assert_ok_eq!(big("9007199254740993").to_f64(), 9_007_199_254_740_992.0);
		assert_ok_eq!(big("9007199254740995").to_f64(), 9_007_199_254_740_996.0);
		assert_ok_eq!(big("-9007199254740995").to_f64(), -9_007_199_254_740_996.0);
	}
	#[test]
	fn to_f64__sticky_bits_round_up() {
		//	Two bits are cut off: half, then a sticky bit
		assert_ok_eq!(big("18014398509481987").to_f64(), 18_014_398_509_481_988.0);
		assert_ok_eq!(big("18014398509481985").to_f64(), 18_014_398_509_481_984.0);
	}
	#[test]
	fn to_f64__limits() {
		let mut max = BigInt::new();
		assert_ok!(mul_2exp(&big("9007199254740991"), 971, &mut max));
		assert_ok_eq!(max.to_f64(), f64::MAX);
		assert_err_eq!(power(1024).to_f64(), Error::Unrepresentable);
		assert_err_eq!(power(1100).to_f64(), Error::Unrepresentable);
	}
	
	//		to_f64_lossy														
	#[test]
	fn to_f64_lossy__infinities() {
		let mut huge = BigInt::new();
		assert_ok!(mul_2exp(&big("-3"), 5000, &mut huge));
		assert_eq!(huge.to_f64_lossy(), f64::NEG_INFINITY);
		assert_eq!(power(1024).to_f64_lossy(), f64::INFINITY);
		assert_eq!(big("7").to_f64_lossy(), 7.0);
	}
}
