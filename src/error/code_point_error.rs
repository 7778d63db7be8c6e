// Copyright 2025 Gabriel Bjørnager Jensen.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// A value was not a valid Unicode code point.
///
/// Valid code points lie in the range `0x0..=0x10FFFF` and exclude the surrogates (`0xD800..=0xDFFF`) as well as `0xFFFE` and `0xFFFF`.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub struct CodePointError {
	/// The invalid value.
	pub value: u32,
}

impl Display for CodePointError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "value {:#X} is not a valid unicode code point", self.value)
	}
}

impl Error for CodePointError { }

impl From<Infallible> for CodePointError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}
