//! Contains error types used throughout the library.



//		Packages																										

use num_bigint::ParseBigIntError;
use thiserror::Error as ThisError;



//		Enums																											

//		ConversionError															
/// Represents all possible conversion errors that can occur.
/// 
/// Every error is raised at the point of violation, i.e. when a value is
/// constructed, parsed, or encoded into a caller-sized container. A failed
/// conversion never produces a partially-valid value.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// A fixed-size array was requested with a length different from the
	/// byte width of the value.
	#[error("Invalid array length: expected {expected} bytes, got {actual}")]
	LengthMismatch {
		/// The byte width of the value.
		expected: usize,
		
		/// The length of the requested array.
		actual:   usize,
	},
	
	/// The incoming endianness tag is not recognised.
	#[error("Invalid endianness: {0}")]
	InvalidEndianness(String),
	
	/// The width class is not usable, i.e. the maximum width is zero, either
	/// width is not a whole number of bytes, or the minimum exceeds the
	/// maximum.
	#[error("Invalid width class: max {max_width} bits, min {min_width} bits")]
	InvalidWidthClass {
		/// The requested maximum width, in bits.
		max_width: u32,
		
		/// The requested minimum width, in bits.
		min_width: u32,
	},
	
	/// The incoming value is not a valid integer. The underlying parser error
	/// is kept as-is.
	#[error("Invalid integer: {0}")]
	Parse(#[from] ParseBigIntError),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value needs more bits than the maximum width allows.
	#[error("Value must be less than {0} bits")]
	WidthTooLarge(u32),
	
	/// The incoming value needs fewer bits than the minimum width requires.
	#[error("Value must be at least {0} bits")]
	WidthTooSmall(u32),
}
