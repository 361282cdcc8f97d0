//! The Fixwidth crate provides arbitrary-precision unsigned integers with
//! bounded bit widths and fixed-length byte encodings.
//!
//! It is intended for protocol-level quantities such as 64, 128, 160, and
//! 256-bit integers, and 160-bit addresses, which must always occupy the same
//! number of bytes on the wire whatever their value.
//!
//! ```
//! use fixwidth::{Endianness, U64};
//!
//! let value = U64.parse("0x1234").unwrap();
//! assert_eq!(value.to_fixed_buffer(Endianness::Big), [0, 0, 0, 0, 0, 0, 0x12, 0x34]);
//! assert_eq!(value.to_fixed_buffer(Endianness::Little), [0x34, 0x12, 0, 0, 0, 0, 0, 0]);
//! ```



//		Global configuration																							

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules																											

mod endian;
mod errors;
mod fixed;
mod integer;
mod width;



//		Packages																										

pub use endian::Endianness;
pub use errors::ConversionError;
pub use fixed::FixedWidthInt;
pub use integer::Integer;
pub use width::{ADDRESS, U64, U128, U160, U256, WidthClass};
