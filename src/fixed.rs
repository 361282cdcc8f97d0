//! Arbitrary-precision unsigned integer with a bounded bit width.

//	Indexing in this module only touches buffers allocated from the byte width
//	of the value, and that width is checked against the magnitude before any
//	write takes place.
#![allow(
	clippy::arithmetic_side_effects,
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Buffers are always sized from the width"
)]



//		Modules																											

#[cfg(test)]
#[path = "tests/fixed.rs"]
mod tests;



//		Packages																										

use crate::{
	endian::Endianness,
	errors::ConversionError,
	width::WidthClass,
};
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Debug, Display, Formatter, LowerHex, UpperHex, self},
	ops::Deref,
};
use num_bigint::{BigUint, ParseBigIntError, ToBigUint};
use num_traits::{Num, PrimInt, Zero};
use serde::{Serialize, Serializer};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};



//		Structs																											

//		FixedWidthInt															
/// An unsigned integer of arbitrary precision, bounded by a width class.
/// 
/// The value is a [`BigUint`] magnitude plus the [`WidthClass`] it was
/// validated against. Both are fixed at construction and cannot change
/// afterwards; there are no mutating methods, and [`Deref`] only grants shared
/// access to the underlying [`BigUint`].
/// 
/// # Widths
/// 
/// Widths are byte-granular. The number of bits a magnitude needs is the
/// minimal number of bytes that represent it without a leading zero byte,
/// times eight, so `0` needs 0 bits, `1` and `255` need 8, `256` needs 16, and
/// so on. Construction fails unless:
/// 
///   - the bits needed are no more than the maximum width, otherwise
///     [`ConversionError::WidthTooLarge`];
///   - the bits needed are no less than the minimum width, otherwise
///     [`ConversionError::WidthTooSmall`].
/// 
/// There is no truncation or wrap-around. A value that does not fit is an
/// error.
/// 
/// # Encoding
/// 
/// Every byte encoding has exactly `max_width / 8` bytes, whatever the value.
/// A 256-bit value is always 32 bytes long, both for `0` and for `2^256 - 1`.
/// Big-endian output is zero-padded at the front, and little-endian output is
/// zero-padded at the back.
/// 
/// # Construction
/// 
/// Values are usually built through a [`WidthClass`], e.g.
/// [`U256`](crate::U256)`.parse("0x10")`. The same entry points exist here
/// with the width class passed explicitly:
/// 
///   - [`new()`](FixedWidthInt::new()) from a [`BigUint`];
///   - [`from_number()`](FixedWidthInt::from_number()) from any primitive
///     integer;
///   - [`parse()`](FixedWidthInt::parse()) from a decimal or `0x`-prefixed
///     hex string;
///   - [`from_buffer()`](FixedWidthInt::from_buffer()) from bytes in a given
///     byte order.
/// 
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct FixedWidthInt {
	/// The validated value.
	magnitude: BigUint,
	
	/// The width class the value was validated against.
	width:     WidthClass,
}

//󰭅		FixedWidthInt															
impl FixedWidthInt {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`FixedWidthInt`] from a [`BigUint`].
	/// 
	/// All other constructors funnel into this one, which is where the width
	/// limits are enforced.
	/// 
	/// # Parameters
	/// 
	/// * `magnitude` - The value to wrap.
	/// * `width`     - The width class to validate against.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::WidthTooLarge`] if the value needs more bits
	/// than the maximum width, or [`ConversionError::WidthTooSmall`] if it
	/// needs fewer bits than the minimum width.
	/// 
	pub fn new(magnitude: BigUint, width: WidthClass) -> Result<Self, ConversionError> {
		let bits_needed = bits_needed_for(&magnitude);
		
		if bits_needed > u64::from(width.max_width()) {
			return Err(ConversionError::WidthTooLarge(width.max_width()));
		}
		if bits_needed < u64::from(width.min_width()) {
			return Err(ConversionError::WidthTooSmall(width.min_width()));
		}
		
		Ok(Self { magnitude, width })
	}
	
	//		from_biguint														
	/// Creates a new [`FixedWidthInt`] from a [`BigUint`].
	/// 
	/// Equivalent to [`new()`](FixedWidthInt::new()), named to match the
	/// other input kinds.
	/// 
	/// # Errors
	/// 
	/// See [`new()`](FixedWidthInt::new()).
	/// 
	pub fn from_biguint(value: BigUint, width: WidthClass) -> Result<Self, ConversionError> {
		Self::new(value, width)
	}
	
	//		from_buffer															
	/// Creates a new [`FixedWidthInt`] from raw bytes.
	/// 
	/// The bytes are read in the given byte order. Zero bytes at the
	/// most-significant end do not count towards the width, so a 32-byte
	/// big-endian buffer holding the value `1` is accepted by a 64-bit class.
	/// 
	/// # Parameters
	/// 
	/// * `bytes`  - The bytes to decode.
	/// * `endian` - The byte order of `bytes`.
	/// * `width`  - The width class to validate against.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the decoded value does not fit the width class. See
	/// [`new()`](FixedWidthInt::new()).
	/// 
	pub fn from_buffer(bytes: &[u8], endian: Endianness, width: WidthClass) -> Result<Self, ConversionError> {
		let magnitude = match endian {
			Endianness::Big    => BigUint::from_bytes_be(bytes),
			Endianness::Little => BigUint::from_bytes_le(bytes),
		};
		Self::new(magnitude, width)
	}
	
	//		from_number															
	/// Creates a new [`FixedWidthInt`] from a primitive integer.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to convert.
	/// * `width` - The width class to validate against.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::ValueIsNegative`] if the value is below zero,
	/// or a width error if it does not fit the width class.
	/// 
	pub fn from_number<N>(value: N, width: WidthClass) -> Result<Self, ConversionError>
	where
		N: PrimInt + ToBigUint,
	{
		let magnitude = value.to_biguint().ok_or(ConversionError::ValueIsNegative)?;
		Self::new(magnitude, width)
	}
	
	//		parse																
	/// Parses a string into a new [`FixedWidthInt`].
	/// 
	/// A string is read as hexadecimal if, and only if, it starts with `0x` or
	/// `0X`. Anything else is read as decimal, so `"10"` is ten and `"0x10"` is
	/// sixteen. Strings such as `"ff"` are not recognised as hex, and fail to
	/// parse as decimal.
	/// 
	/// The string is not trimmed, and a leading `+` is rejected, both before and
	/// after the `0x` prefix. Underscores between digits are accepted, as they
	/// are by [`BigUint`].
	/// 
	/// # Parameters
	/// 
	/// * `s`     - The string to parse.
	/// * `width` - The width class to validate against.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::Parse`] if the string is not a valid number
	/// in the detected base, or a width error if the number does not fit the
	/// width class.
	/// 
	pub fn parse(s: &str, width: WidthClass) -> Result<Self, ConversionError> {
		let magnitude = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			Some(hex) => parse_digits(hex, 16)?,
			None      => parse_digits(s,   10)?,
		};
		Self::new(magnitude, width)
	}
	
	//		Public methods														
	
	//		as_biguint															
	/// Represents the value as a [`BigUint`].
	#[must_use]
	pub const fn as_biguint(&self) -> &BigUint {
		&self.magnitude
	}
	
	//		bits_needed															
	/// The number of bits the value needs, rounded up to whole bytes.
	/// 
	/// This is the figure that is checked against the width class, and is
	/// always [`byte_length()`](FixedWidthInt::byte_length()) times eight.
	/// 
	#[must_use]
	pub fn bits_needed(&self) -> u64 {
		bits_needed_for(&self.magnitude)
	}
	
	//		byte_length															
	/// The minimal number of bytes needed to represent the value.
	/// 
	/// Zero has a byte length of zero.
	/// 
	#[must_use]
	pub fn byte_length(&self) -> usize {
		usize::try_from(self.magnitude.bits().div_ceil(8)).unwrap_or(usize::MAX)
	}
	
	//		byte_width															
	/// The length of every fixed-width encoding of this value.
	#[must_use]
	pub const fn byte_width(&self) -> usize {
		self.width.byte_width()
	}
	
	//		into_biguint														
	/// Consumes the value, returning the underlying [`BigUint`].
	#[must_use]
	pub fn into_biguint(self) -> BigUint {
		self.magnitude
	}
	
	//		is_same_width_class													
	/// Determines if another value has exactly the same width class.
	/// 
	/// Only the widths are compared, not the values.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The value to compare with.
	/// 
	#[must_use]
	pub fn is_same_width_class(&self, other: &Self) -> bool {
		self.width == other.width
	}
	
	//		is_zero																
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}
	
	//		max_width															
	/// The maximum width, in bits.
	#[must_use]
	pub const fn max_width(&self) -> u32 {
		self.width.max_width()
	}
	
	//		min_width															
	/// The minimum width, in bits.
	#[must_use]
	pub const fn min_width(&self) -> u32 {
		self.width.min_width()
	}
	
	//		to_be_bytes															
	/// Returns the fixed-width bytes in big-endian order.
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.to_fixed_buffer(Endianness::Big)
	}
	
	//		to_fixed_array														
	/// Returns the fixed-width bytes as an array.
	/// 
	/// # Parameters
	/// 
	/// * `endian` - The byte order to use.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::LengthMismatch`] if `N` is not the byte width
	/// of the value.
	/// 
	pub fn to_fixed_array<const N: usize>(&self, endian: Endianness) -> Result<[u8; N], ConversionError> {
		self.to_fixed_buffer(endian).try_into().map_err(|buffer: Vec<u8>| ConversionError::LengthMismatch {
			expected: buffer.len(),
			actual:   N,
		})
	}
	
	//		to_fixed_array_like													
	/// Returns the fixed-width bytes collected into a container of the caller's
	/// choice, e.g. [`BytesMut`].
	/// 
	/// # Parameters
	/// 
	/// * `endian` - The byte order to use.
	/// 
	#[must_use]
	pub fn to_fixed_array_like<C>(&self, endian: Endianness) -> C
	where
		C: FromIterator<u8>,
	{
		self.to_fixed_buffer(endian).into_iter().collect()
	}
	
	//		to_fixed_buffer														
	/// Returns the fixed-width bytes in the given byte order.
	/// 
	/// The output always has [`byte_width()`](FixedWidthInt::byte_width())
	/// bytes. Big-endian output has the padding zeros first, and little-endian
	/// output has them last.
	/// 
	/// # Parameters
	/// 
	/// * `endian` - The byte order to use. Pass [`Endianness::default()`] for
	///              big-endian.
	/// 
	/// # Panics
	/// 
	/// Panics if the value needs more bytes than the byte width. Construction
	/// rules this out, so reaching it means the width limits were bypassed.
	/// 
	#[must_use]
	pub fn to_fixed_buffer(&self, endian: Endianness) -> Vec<u8> {
		let width  = self.byte_width();
		let length = self.byte_length();
		assert!(length <= width, "{length}-byte value stored in a {width}-byte integer");
		
		let mut buffer = vec![0_u8; width];
		if length == 0 {
			return buffer;
		}
		
		//	For a non-zero value this has exactly `length` bytes
		let digits = self.magnitude.to_bytes_le();
		match endian {
			Endianness::Big    => {
				for (pos, &byte) in digits.iter().enumerate() {
					buffer[width - 1 - pos] = byte;
				}
			},
			Endianness::Little => buffer[..length].copy_from_slice(&digits),
		}
		buffer
	}
	
	//		to_json																
	/// Serialises this integer to a JSON string.
	/// 
	/// The value is written as a `0x`-prefixed hex string of its fixed-width
	/// big-endian bytes. Use [`WidthClass::from_json()`] to read it back.
	/// 
	/// # Errors
	/// 
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		to_le_bytes															
	/// Returns the fixed-width bytes in little-endian order.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.to_fixed_buffer(Endianness::Little)
	}
	
	//		width_class															
	/// The width class the value was validated against.
	#[must_use]
	pub const fn width_class(&self) -> WidthClass {
		self.width
	}
}

//󰭅		AsRef																	
impl AsRef<BigUint> for FixedWidthInt {
	//		as_ref																
	fn as_ref(&self) -> &BigUint {
		&self.magnitude
	}
}

//󰭅		Debug																	
impl Debug for FixedWidthInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - FixedWidthInt<max, min>(value)
		write!(f, "FixedWidthInt::<{}, {}>({})", self.max_width(), self.min_width(), self.magnitude)?;
		
		//	For alternate formatting (#), show the big-endian encoding
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.to_be_bytes().iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}
		
		Ok(())
	}
}

//󰭅		Deref																	
impl Deref for FixedWidthInt {
	type Target = BigUint;
	
	//		deref																
	fn deref(&self) -> &Self::Target {
		&self.magnitude
	}
}

//󰭅		Display																	
impl Display for FixedWidthInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.magnitude, f)
	}
}

//󰭅		From: FixedWidthInt -> BigUint											
impl From<FixedWidthInt> for BigUint {
	//		from																
	fn from(v: FixedWidthInt) -> Self {
		v.magnitude
	}
}

//󰭅		LowerHex																
impl LowerHex for FixedWidthInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.magnitude, f)
	}
}

//󰭅		Serialize																
impl Serialize for FixedWidthInt {
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, use prefixed hex so the width shows
			serializer.serialize_str(&format!("0x{}", hex::encode(self.to_be_bytes())))
		} else {
			//	For binary formats, serialise the fixed-width bytes
			serializer.serialize_bytes(&self.to_be_bytes())
		}
	}
}

//󰭅		ToSql																	
impl ToSql for FixedWidthInt {
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA                 => self.to_be_bytes().to_sql(ty, out),
			&Type::TEXT | &Type::VARCHAR => self.to_string().to_sql(ty, out),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for {} integer: {}", self.width, unknown),
			))),
		}
	}
	
	//		accepts																
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::BYTEA | Type::TEXT | Type::VARCHAR)
	}
	
	to_sql_checked!();
}

//󰭅		UpperHex																
impl UpperHex for FixedWidthInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		UpperHex::fmt(&self.magnitude, f)
	}
}



//		Functions																										

//		bits_needed_for															
/// Computes the byte-granular number of bits needed for a magnitude.
fn bits_needed_for(magnitude: &BigUint) -> u64 {
	magnitude.bits().div_ceil(8).saturating_mul(8)
}

//		parse_digits															
/// Parses unsigned digits in the given base, with no sign allowed.
fn parse_digits(digits: &str, radix: u32) -> Result<BigUint, ParseBigIntError> {
	if digits.starts_with('+') {
		//	BigUint strips one leading plus but never two, so the doubled sign
		//	fails as an invalid digit
		return BigUint::from_str_radix(&format!("+{digits}"), radix);
	}
	BigUint::from_str_radix(digits, radix)
}
