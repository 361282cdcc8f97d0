//		Packages																										

use super::*;
use bytes::BytesMut;
use claims::{assert_err, assert_err_eq, assert_ok, assert_ok_eq};
use rubedo::sugar::s;
use serde::de::value::{BytesDeserializer, Error as ValueError};
use serde_test::Configure;
use std::collections::HashSet;
use tokio_postgres::types::ToSql;



//		Tests																											

mod constructors {
	use super::*;
	
	//		new																	
	#[test]
	fn new__valid() {
		assert_ok_eq!(WidthClass::new(256), U256);
		assert_ok_eq!(WidthClass::new(64),  U64);
		assert_ok_eq!(WidthClass::new(8).map(WidthClass::byte_width), 1);
	}
	#[test]
	fn new__invalid() {
		let err = WidthClass::new(0);
		assert_err_eq!(&err, &ConversionError::InvalidWidthClass { max_width: 0, min_width: 0 });
		assert_eq!(err.unwrap_err().to_string(), s!("Invalid width class: max 0 bits, min 0 bits"));
		
		assert_err_eq!(WidthClass::new(12), ConversionError::InvalidWidthClass { max_width: 12, min_width: 0 });
	}
	
	//		with_min															
	#[test]
	fn with_min__valid() {
		assert_ok_eq!(WidthClass::with_min(160, 160), ADDRESS);
		assert_ok_eq!(WidthClass::with_min(128, 0),   U128);
		assert_ok!(WidthClass::with_min(256, 8));
	}
	#[test]
	fn with_min__invalid() {
		assert_err_eq!(WidthClass::with_min(64, 128), ConversionError::InvalidWidthClass { max_width: 64, min_width: 128 });
		assert_err_eq!(WidthClass::with_min(64, 4),   ConversionError::InvalidWidthClass { max_width: 64, min_width: 4 });
		assert_err_eq!(WidthClass::with_min(0, 0),    ConversionError::InvalidWidthClass { max_width: 0,  min_width: 0 });
	}
}

mod presets {
	use super::*;
	
	#[test]
	fn widths() {
		assert_eq!((U256.max_width(),    U256.min_width()),    (256, 0));
		assert_eq!((U160.max_width(),    U160.min_width()),    (160, 0));
		assert_eq!((U128.max_width(),    U128.min_width()),    (128, 0));
		assert_eq!((U64.max_width(),     U64.min_width()),     (64,  0));
		assert_eq!((ADDRESS.max_width(), ADDRESS.min_width()), (160, 160));
	}
	#[test]
	fn byte_widths() {
		assert_eq!(U256.byte_width(),    32);
		assert_eq!(U160.byte_width(),    20);
		assert_eq!(U128.byte_width(),    16);
		assert_eq!(U64.byte_width(),      8);
		assert_eq!(ADDRESS.byte_width(), 20);
	}
}

mod public_methods {
	use super::*;
	
	//		contains															
	#[test]
	fn contains() {
		let value = U160.from_number(1_u8).unwrap();
		assert!( U160.contains(&value));
		assert!(!ADDRESS.contains(&value));
		assert!(!U256.contains(&value));
	}
	
	//		from_biguint														
	#[test]
	fn from_biguint() {
		let value = U64.from_biguint(BigUint::from(42_u8)).unwrap();
		assert_eq!(value.as_biguint(), &BigUint::from(42_u8));
		assert_eq!(value.width_class(), U64);
		
		assert_err_eq!(U64.from_biguint(BigUint::from(1_u8) << 64_u32), ConversionError::WidthTooLarge(64));
	}
	
	//		from_buffer															
	#[test]
	fn from_buffer() {
		assert_ok_eq!(U64.from_buffer(&[0x01, 0x00], Endianness::Big),    U64.from_number(256_u16).unwrap());
		assert_ok_eq!(U64.from_buffer(&[0x01, 0x00], Endianness::Little), U64.from_number(1_u8).unwrap());
		assert_err_eq!(ADDRESS.from_buffer(&[0x01], Endianness::Big), ConversionError::WidthTooSmall(160));
	}
	
	//		from_json															
	#[test]
	fn from_json__valid() {
		assert_ok_eq!(U64.from_json("42"),                     U64.from_number(42_u8).unwrap());
		assert_ok_eq!(U64.from_json(r#""42""#),                U64.from_number(42_u8).unwrap());
		assert_ok_eq!(U64.from_json(r#""0x2a""#),              U64.from_number(42_u8).unwrap());
		assert_ok_eq!(U64.from_json(r#""0x000000000000002a""#), U64.from_number(42_u8).unwrap());
	}
	#[test]
	fn from_json__invalid() {
		assert_err!(U64.from_json("invalid"));
		assert_err!(U64.from_json("-1"));
		assert_err!(U64.from_json("1.5"));
		assert_err!(U64.from_json(r#""ff""#));
		assert_err!(U64.from_json("42 43"));
	}
	#[test]
	fn from_json__too_large() {
		let err = U64.from_json(r#""0x010000000000000000""#).unwrap_err();
		assert!(err.to_string().starts_with("Value must be less than 64 bits"));
	}
	#[test]
	fn from_json__round_trip() {
		for value in [
			U256.parse("0xdeadbeef").unwrap(),
			U128.from_number(u128::MAX).unwrap(),
			ADDRESS.parse("0xffffffffffffffffffffffffffffffffffffffff").unwrap(),
			U64.from_number(0_u8).unwrap(),
		] {
			let json = value.to_json().unwrap();
			assert_ok_eq!(value.width_class().from_json(&json), value);
		}
	}
	
	//		from_number															
	#[test]
	fn from_number() {
		assert_ok_eq!(U64.from_number(42_i16).map(|v| v.to_string()), s!("42"));
		assert_err_eq!(U64.from_number(-42_i16), ConversionError::ValueIsNegative);
	}
	
	//		from_sql															
	#[test]
	fn from_sql__bytea() {
		assert_ok_eq!(U64.from_sql(&Type::BYTEA, &[0, 0, 0, 0, 0, 0, 0x12, 0x34]), U64.from_number(0x1234_u16).unwrap());
		assert_ok_eq!(U64.from_sql(&Type::BYTEA, &[0x12, 0x34]),                   U64.from_number(0x1234_u16).unwrap());
	}
	#[test]
	fn from_sql__text() {
		assert_ok_eq!(U64.from_sql(&Type::TEXT,    b"42"),   U64.from_number(42_u8).unwrap());
		assert_ok_eq!(U64.from_sql(&Type::VARCHAR, b"0x2a"), U64.from_number(42_u8).unwrap());
	}
	#[test]
	fn from_sql__invalid_type() {
		let err = U64.from_sql(&Type::FLOAT4, &42_i32.to_be_bytes());
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "Invalid type for 64-bit integer: float4");
	}
	#[test]
	fn from_sql__invalid_value() {
		let err = U64.from_sql(&Type::TEXT, b"abc");
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "Invalid integer: invalid digit found in string");
		
		let err = ADDRESS.from_sql(&Type::BYTEA, &[0x01]);
		assert_err!(&err);
		assert_eq!(err.unwrap_err().to_string(), "Value must be at least 160 bits");
	}
	#[test]
	fn from_sql__round_trip() {
		let value     = U160.parse("0x00ff00ff00ff00ff00ff00ff00ff00ff00ff00ff").unwrap();
		let mut bytes = BytesMut::new();
		_ = value.to_sql(&Type::BYTEA, &mut bytes).unwrap();
		assert_eq!(bytes.len(), 20);
		assert_ok_eq!(U160.from_sql(&Type::BYTEA, &bytes), value);
		
		//	The leading zero byte leaves only 152 significant bits
		assert_err!(ADDRESS.from_sql(&Type::BYTEA, &bytes));
	}
	
	//		parse																
	#[test]
	fn parse() {
		assert_ok_eq!(U64.parse("10"),   U64.from_number(10_u8).unwrap());
		assert_ok_eq!(U64.parse("0x10"), U64.from_number(16_u8).unwrap());
		assert_err!(U64.parse("0x"));
	}
}

mod derived_traits {
	use super::*;
	
	//		Copy																
	#[test]
	fn copy() {
		let a = U256;
		let b = a;
		assert_eq!(a, b);
	}
	
	//		Debug																
	#[test]
	fn debug() {
		assert_eq!(format!("{U64:?}"), "WidthClass { max_width: 64, min_width: 0 }");
	}
	
	//		Deserialize															
	#[test]
	fn deserialize() {
		assert_ok_eq!(serde_json::from_str::<WidthClass>(r#"{"max_width":256}"#),                 U256);
		assert_ok_eq!(serde_json::from_str::<WidthClass>(r#"{"max_width":160,"min_width":160}"#), ADDRESS);
	}
	#[test]
	fn deserialize__invalid() {
		let err = serde_json::from_str::<WidthClass>(r#"{"max_width":64,"min_width":128}"#).unwrap_err();
		assert!(err.to_string().starts_with("Invalid width class: max 64 bits, min 128 bits"));
		
		assert_err!(serde_json::from_str::<WidthClass>(r#"{"max_width":12}"#));
		assert_err!(serde_json::from_str::<WidthClass>(r#"{"min_width":0}"#));
		assert_err!(serde_json::from_str::<WidthClass>(r#"{"max_width":64,"bits":8}"#));
	}
	
	//		Hash																
	#[test]
	fn hash() {
		let mut set = HashSet::new();
		_ = set.insert(U160);
		assert!( set.contains(&WidthClass::new(160).unwrap()));
		assert!(!set.contains(&ADDRESS));
	}
	
	//		Serialize															
	#[test]
	fn serialize() {
		assert_ok_eq!(serde_json::to_string(&U256),    r#"{"max_width":256,"min_width":0}"#);
		assert_ok_eq!(serde_json::to_string(&ADDRESS), r#"{"max_width":160,"min_width":160}"#);
	}
}

mod traits {
	use super::*;
	
	//		DeserializeSeed														
	#[test]
	fn deserialize_seed() {
		let raw: Vec<serde_json::Value> = serde_json::from_str(r#"["0x01", 2, "3"]"#).unwrap();
		let values: Vec<FixedWidthInt>  = raw.into_iter()
			.map(|v| DeserializeSeed::deserialize(U128, v).unwrap())
			.collect()
		;
		assert_eq!(values, vec![
			U128.from_number(1_u8).unwrap(),
			U128.from_number(2_u8).unwrap(),
			U128.from_number(3_u8).unwrap(),
		]);
	}
	#[test]
	fn deserialize_seed__binary() {
		let value = U64.from_number(0x1234_u16).unwrap();
		let bytes = value.to_be_bytes();
		assert_eq!(bytes.len(), 8);
		assert_ok_eq!(
			DeserializeSeed::deserialize(U64.compact(), BytesDeserializer::<ValueError>::new(&bytes)),
			value
		);
		
		let value = ADDRESS.parse("0xffffffffffffffffffffffffffffffffffffffff").unwrap();
		assert_ok_eq!(
			DeserializeSeed::deserialize(ADDRESS.compact(), BytesDeserializer::<ValueError>::new(&value.to_be_bytes())),
			value
		);
	}
	#[test]
	fn deserialize_seed__binary_padded() {
		let bytes = [0_u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x2a];
		assert_ok_eq!(
			DeserializeSeed::deserialize(U64.compact(), BytesDeserializer::<ValueError>::new(&bytes)),
			U64.from_number(42_u8).unwrap()
		);
	}
	#[test]
	fn deserialize_seed__binary_too_wide() {
		let bytes = [0x01_u8, 0, 0, 0, 0, 0, 0, 0, 0];
		let err   = DeserializeSeed::deserialize(U64.compact(), BytesDeserializer::<ValueError>::new(&bytes)).unwrap_err();
		assert_eq!(err.to_string(), "Value must be less than 64 bits");
		
		let err   = DeserializeSeed::deserialize(ADDRESS.compact(), BytesDeserializer::<ValueError>::new(&[0x01])).unwrap_err();
		assert_eq!(err.to_string(), "Value must be at least 160 bits");
	}
	#[test]
	fn deserialize_seed__by_reference() {
		let width = U64;
		assert_ok_eq!(DeserializeSeed::deserialize(&width, serde_json::json!("0x2a")), U64.from_number(42_u8).unwrap());
	}
	#[test]
	fn deserialize_seed__limits() {
		let value = DeserializeSeed::deserialize(U64, serde_json::json!(u64::MAX)).map(|v| v.to_string());
		assert_ok_eq!(value, s!("18446744073709551615"));
		
		let err = DeserializeSeed::deserialize(ADDRESS, serde_json::json!(u64::MAX)).unwrap_err();
		assert_eq!(err.to_string(), "Value must be at least 160 bits");
	}
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(U256.to_string(),    s!("256-bit"));
		assert_eq!(ADDRESS.to_string(), s!("160..=160-bit"));
		assert_eq!(WidthClass::with_min(64, 32).unwrap().to_string(), s!("32..=64-bit"));
	}
}
