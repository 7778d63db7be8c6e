// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{CodePointError, LengthError, Utf8Error};

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::io;

/// A UTF-8 sequence could not be decoded.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub enum DecodeError {
	/// The octets were malformed.
	Utf8(Utf8Error),

	/// The octets were well-formed but encoded an invalid code point.
	CodePoint(CodePointError),

	/// The sequence ended prematurely.
	Length(LengthError),
}

impl Display for DecodeError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Self::Utf8(ref e) => e.fmt(f),

			Self::CodePoint(ref e) => e.fmt(f),

			Self::Length(ref e) => e.fmt(f),
		}
	}
}

impl Error for DecodeError { }

impl From<Infallible> for DecodeError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}

impl From<Utf8Error> for DecodeError {
	#[inline(always)]
	fn from(value: Utf8Error) -> Self {
		Self::Utf8(value)
	}
}

impl From<CodePointError> for DecodeError {
	#[inline(always)]
	fn from(value: CodePointError) -> Self {
		Self::CodePoint(value)
	}
}

impl From<LengthError> for DecodeError {
	#[inline(always)]
	fn from(value: LengthError) -> Self {
		Self::Length(value)
	}
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<DecodeError> for io::Error {
	#[inline]
	fn from(value: DecodeError) -> Self {
		Self::new(io::ErrorKind::InvalidData, value)
	}
}
