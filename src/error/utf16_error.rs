// Copyright 2025 Gabriel Bjørnager Jensen.

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// An unpaired or misplaced UTF-16 surrogate was encountered.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub struct Utf16Error {
	/// The offending UTF-16 unit.
	pub value: u16,

	/// The index of the offending unit.
	pub index: usize,
}

impl Display for Utf16Error {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "found invalid utf-16 unit {:#06X} at offset ({})", self.value, self.index)
	}
}

impl Error for Utf16Error { }

impl From<Infallible> for Utf16Error {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}
