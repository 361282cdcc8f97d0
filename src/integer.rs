//! Integers that may or may not carry width metadata.



//		Modules																											

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::ConversionError,
	fixed::FixedWidthInt,
	width::WidthClass,
};
use core::fmt::{Display, Formatter, self};
use num_bigint::BigUint;



//		Enums																											

//		Integer																	
/// An unsigned integer that is either plain or bounded by a width class.
/// 
/// Code that accepts big integers from several sources can take an
/// [`Integer`] and match on it, or ask [`is_bounded()`](Integer::is_bounded())
/// whether width metadata is attached.
/// 
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Integer {
	/// A big integer with no width metadata.
	Plain(BigUint),
	
	/// A big integer validated against a width class.
	Bounded(FixedWidthInt),
}

//󰭅		Integer																	
impl Integer {
	//		as_bounded															
	/// Returns the bounded value, if there is one.
	#[must_use]
	pub const fn as_bounded(&self) -> Option<&FixedWidthInt> {
		match self {
			Self::Plain(_)     => None,
			Self::Bounded(fwi) => Some(fwi),
		}
	}
	
	//		bound																
	/// Converts into a [`FixedWidthInt`] of the given width class.
	/// 
	/// A plain value is validated against the class. A bounded value already
	/// in the class is returned as-is, and one from a different class is
	/// validated again against the new one.
	/// 
	/// # Parameters
	/// 
	/// * `width` - The width class to bind to.
	/// 
	/// # Errors
	/// 
	/// Returns a width error if the value does not fit the class. See
	/// [`FixedWidthInt::new()`].
	/// 
	pub fn bound(self, width: WidthClass) -> Result<FixedWidthInt, ConversionError> {
		match self {
			Self::Bounded(fwi) if width.contains(&fwi) => Ok(fwi),
			Self::Bounded(fwi)                         => FixedWidthInt::new(fwi.into_biguint(), width),
			Self::Plain(value)                         => FixedWidthInt::new(value, width),
		}
	}
	
	//		is_bounded															
	/// Determines if the value carries width metadata.
	#[must_use]
	pub const fn is_bounded(&self) -> bool {
		matches!(self, Self::Bounded(_))
	}
	
	//		magnitude															
	/// The value, with any width metadata ignored.
	#[must_use]
	pub const fn magnitude(&self) -> &BigUint {
		match self {
			Self::Plain(value) => value,
			Self::Bounded(fwi) => fwi.as_biguint(),
		}
	}
	
	//		width_class															
	/// The width class of a bounded value.
	#[must_use]
	pub const fn width_class(&self) -> Option<WidthClass> {
		match self {
			Self::Plain(_)     => None,
			Self::Bounded(fwi) => Some(fwi.width_class()),
		}
	}
}

//󰭅		Display																	
impl Display for Integer {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(self.magnitude(), f)
	}
}

//󰭅		From: BigUint -> Integer												
impl From<BigUint> for Integer {
	//		from																
	fn from(v: BigUint) -> Self {
		Self::Plain(v)
	}
}

//󰭅		From: FixedWidthInt -> Integer											
impl From<FixedWidthInt> for Integer {
	//		from																
	fn from(v: FixedWidthInt) -> Self {
		Self::Bounded(v)
	}
}
