//! Width classes, and the constructors bound to them.



//		Modules																											

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages																										

use crate::{
	endian::Endianness,
	errors::ConversionError,
	fixed::FixedWidthInt,
};
use core::{
	error::Error,
	fmt::{Display, Formatter, self},
};
use num_bigint::{BigUint, ToBigUint};
use num_traits::PrimInt;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	de::{DeserializeSeed, Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, Type};



//		Constants																										

/// 256-bit unsigned integers, with no lower bound.
pub const U256:    WidthClass = WidthClass { max_width: 256, min_width: 0 };

/// 160-bit unsigned integers, with no lower bound.
pub const U160:    WidthClass = WidthClass { max_width: 160, min_width: 0 };

/// 128-bit unsigned integers, with no lower bound.
pub const U128:    WidthClass = WidthClass { max_width: 128, min_width: 0 };

/// 64-bit unsigned integers, with no lower bound.
pub const U64:     WidthClass = WidthClass { max_width: 64,  min_width: 0 };

/// 160-bit addresses. These must use all 160 bits, so a value whose top byte
/// is zero is rejected.
pub const ADDRESS: WidthClass = WidthClass { max_width: 160, min_width: 160 };



//		Structs																											

//		WidthClass																
/// A pair of minimum and maximum bit widths.
/// 
/// A width class is both the shape shared by a family of [`FixedWidthInt`]s
/// and a factory for them: it exposes one constructor per accepted input kind,
/// each of which forwards to the matching [`FixedWidthInt`] constructor with
/// this width class attached.
/// 
/// Widths are whole numbers of bytes. The maximum must be non-zero, and the
/// minimum, which defaults to zero (i.e. no lower bound), must not exceed it.
/// These rules are checked by [`new()`](WidthClass::new()),
/// [`with_min()`](WidthClass::with_min()), and when deserialising.
/// 
/// # Configuration
/// 
/// A width class can be read from any serde format, in the shape
/// `{ "max_width": 256, "min_width": 0 }`, where `min_width` is optional.
/// 
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "WidthClassConfig")]
pub struct WidthClass {
	/// The maximum width, in bits.
	max_width: u32,
	
	/// The minimum width, in bits.
	min_width: u32,
}

//󰭅		WidthClass																
#[allow(clippy::wrong_self_convention, reason = "Factory methods mirror the FixedWidthInt constructors")]
impl WidthClass {
	//		Constructors														
	
	//		new																	
	/// Creates a new [`WidthClass`] with no lower bound.
	/// 
	/// # Parameters
	/// 
	/// * `max_width` - The maximum width, in bits.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::InvalidWidthClass`] if the width is zero or
	/// not a multiple of eight.
	/// 
	pub fn new(max_width: u32) -> Result<Self, ConversionError> {
		Self::with_min(max_width, 0)
	}
	
	//		with_min															
	/// Creates a new [`WidthClass`] with a lower bound.
	/// 
	/// # Parameters
	/// 
	/// * `max_width` - The maximum width, in bits.
	/// * `min_width` - The minimum width, in bits.
	/// 
	/// # Errors
	/// 
	/// Returns [`ConversionError::InvalidWidthClass`] if the maximum is zero,
	/// either width is not a multiple of eight, or the minimum exceeds the
	/// maximum.
	/// 
	pub fn with_min(max_width: u32, min_width: u32) -> Result<Self, ConversionError> {
		if max_width == 0 || max_width % 8 != 0 || min_width % 8 != 0 || min_width > max_width {
			return Err(ConversionError::InvalidWidthClass { max_width, min_width });
		}
		Ok(Self { max_width, min_width })
	}
	
	//		Public methods														
	
	//		byte_width															
	/// The length of every fixed-width encoding in this class.
	#[expect(clippy::as_conversions,   reason = "A u32 always fits in usize on supported targets")]
	#[expect(clippy::integer_division, reason = "Always a whole number of bytes")]
	#[must_use]
	pub const fn byte_width(self) -> usize {
		(self.max_width / 8) as usize
	}
	
	//		contains															
	/// Determines if a value belongs to this width class.
	/// 
	/// # Parameters
	/// 
	/// * `value` - The value to check.
	/// 
	#[must_use]
	pub fn contains(self, value: &FixedWidthInt) -> bool {
		value.width_class() == self
	}
	
	//		from_biguint														
	/// Creates a [`FixedWidthInt`] in this class from a [`BigUint`].
	/// 
	/// # Errors
	/// 
	/// See [`FixedWidthInt::new()`].
	/// 
	pub fn from_biguint(self, value: BigUint) -> Result<FixedWidthInt, ConversionError> {
		FixedWidthInt::from_biguint(value, self)
	}
	
	//		from_buffer															
	/// Creates a [`FixedWidthInt`] in this class from raw bytes.
	/// 
	/// # Errors
	/// 
	/// See [`FixedWidthInt::from_buffer()`].
	/// 
	pub fn from_buffer(self, bytes: &[u8], endian: Endianness) -> Result<FixedWidthInt, ConversionError> {
		FixedWidthInt::from_buffer(bytes, endian, self)
	}
	
	//		from_json															
	/// Deserialises a JSON string into a [`FixedWidthInt`] in this class.
	/// 
	/// Accepts JSON numbers, and strings in any form that
	/// [`parse()`](WidthClass::parse()) accepts, which includes the output of
	/// [`FixedWidthInt::to_json()`].
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise.
	/// 
	/// # Errors
	/// 
	/// If the JSON string is invalid, or the number inside the JSON is invalid
	/// or does not fit this class, then an error will be returned.
	/// 
	pub fn from_json(self, json: &str) -> Result<FixedWidthInt, JsonError> {
		let mut deserializer = serde_json::Deserializer::from_str(json);
		let value            = DeserializeSeed::deserialize(self, &mut deserializer)?;
		deserializer.end()?;
		Ok(value)
	}
	
	//		from_number															
	/// Creates a [`FixedWidthInt`] in this class from a primitive integer.
	/// 
	/// # Errors
	/// 
	/// See [`FixedWidthInt::from_number()`].
	/// 
	pub fn from_number<N>(self, value: N) -> Result<FixedWidthInt, ConversionError>
	where
		N: PrimInt + ToBigUint,
	{
		FixedWidthInt::from_number(value, self)
	}
	
	//		from_sql															
	/// Decodes a PostgreSQL value into a [`FixedWidthInt`] in this class.
	/// 
	/// `BYTEA` values are read as big-endian bytes, and `TEXT` and `VARCHAR`
	/// values are parsed as by [`parse()`](WidthClass::parse()).
	/// 
	/// # Parameters
	/// 
	/// * `ty`  - The PostgreSQL type of the value.
	/// * `raw` - The raw value, in binary format.
	/// 
	/// # Errors
	/// 
	/// Returns an error if the type is not supported, the raw value cannot be
	/// decoded, or the decoded number does not fit this class.
	/// 
	pub fn from_sql(self, ty: &Type, raw: &[u8]) -> Result<FixedWidthInt, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::BYTEA                 => Ok(self.from_buffer(&Vec::<u8>::from_sql(ty, raw)?, Endianness::Big)?),
			&Type::TEXT | &Type::VARCHAR => Ok(self.parse(<&str>::from_sql(ty, raw)?)?),
			unknown                      => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for {self} integer: {unknown}"),
			))),
		}
	}
	
	//		max_width															
	/// The maximum width, in bits.
	#[must_use]
	pub const fn max_width(self) -> u32 {
		self.max_width
	}
	
	//		min_width															
	/// The minimum width, in bits.
	#[must_use]
	pub const fn min_width(self) -> u32 {
		self.min_width
	}
	
	//		parse																
	/// Parses a decimal or `0x`-prefixed hex string into a [`FixedWidthInt`] in
	/// this class.
	/// 
	/// # Errors
	/// 
	/// See [`FixedWidthInt::parse()`].
	/// 
	pub fn parse(self, s: &str) -> Result<FixedWidthInt, ConversionError> {
		FixedWidthInt::parse(s, self)
	}
}

//󰭅		DeserializeSeed															
impl<'de> DeserializeSeed<'de> for WidthClass {
	type Value = FixedWidthInt;
	
	//		deserialize															
	fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(WidthVisitor(self))
		} else {
			//	For binary formats, expect raw big-endian bytes
			deserializer.deserialize_bytes(WidthVisitor(self))
		}
	}
}

//󰭅		DeserializeSeed: &WidthClass											
impl<'de> DeserializeSeed<'de> for &WidthClass {
	type Value = FixedWidthInt;
	
	//		deserialize															
	fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		DeserializeSeed::deserialize(*self, deserializer)
	}
}

//󰭅		Display																	
impl Display for WidthClass {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.min_width == 0 {
			write!(f, "{}-bit", self.max_width)
		} else {
			write!(f, "{}..={}-bit", self.min_width, self.max_width)
		}
	}
}

//󰭅		TryFrom: WidthClassConfig -> WidthClass									
impl TryFrom<WidthClassConfig> for WidthClass {
	type Error = ConversionError;
	
	//		try_from															
	fn try_from(config: WidthClassConfig) -> Result<Self, Self::Error> {
		Self::with_min(config.max_width, config.min_width)
	}
}

//		WidthClassConfig														
/// The unchecked form of a [`WidthClass`], as read from configuration.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WidthClassConfig {
	/// The maximum width, in bits.
	max_width: u32,
	
	/// The minimum width, in bits.
	#[serde(default)]
	min_width: u32,
}

//		WidthVisitor															
/// A visitor for reading integers of a given width class.
struct WidthVisitor(WidthClass);

//󰭅		Visitor																	
impl Visitor<'_> for WidthVisitor {
	type Value = FixedWidthInt;
	
	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a {} unsigned integer", self.0)
	}
	
	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.from_number(v).map_err(E::custom)
	}
	
	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.from_number(v).map_err(E::custom)
	}
	
	//		visit_i128															
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.from_number(v).map_err(E::custom)
	}
	
	//		visit_u128															
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.from_number(v).map_err(E::custom)
	}
	
	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.parse(v).map_err(E::custom)
	}
	
	//		visit_bytes															
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		self.0.from_buffer(v, Endianness::Big).map_err(E::custom)
	}
}
