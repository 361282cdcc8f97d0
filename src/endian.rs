//! Byte order used when reading and writing buffers.



//		Modules																											

#[cfg(test)]
#[path = "tests/endian.rs"]
mod tests;



//		Packages																										

use crate::errors::ConversionError;
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use serde::{Deserialize, Serialize};



//		Enums																											

//		Endianness																
/// The byte order of a buffer.
/// 
/// Every operation that reads or writes bytes takes the byte order as an
/// explicit argument. Where callers have no preference, they should pass
/// [`Endianness::default()`], which is [`Big`](Endianness::Big).
/// 
/// The textual form is `"be"` or `"le"`, both for [`Display`]/[`FromStr`] and
/// for serialisation.
/// 
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Endianness {
	/// Most-significant byte first.
	#[default]
	#[serde(rename = "be")]
	Big,
	
	/// Least-significant byte first.
	#[serde(rename = "le")]
	Little,
}

//󰭅		Endianness																
impl Endianness {
	//		as_str																
	/// The short tag for this byte order.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Big    => "be",
			Self::Little => "le",
		}
	}
}

//󰭅		Display																	
impl Display for Endianness {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

//󰭅		FromStr																	
impl FromStr for Endianness {
	type Err = ConversionError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"be" => Ok(Self::Big),
			"le" => Ok(Self::Little),
			_    => Err(ConversionError::InvalidEndianness(s.to_owned())),
		}
	}
}
