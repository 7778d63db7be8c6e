// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::{CodePointError, DecodeError, LengthError, Utf16Error, Utf8Error};

use core::convert::Infallible;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

#[cfg(feature = "std")]
use std::io;

/// A sequence could not be converted between encodings.
///
/// Units converted before the failing one have already been written to the destination.
#[derive(Debug, Eq, PartialEq)]
#[must_use]
pub enum TranscodeError {
	/// A UTF-8 source sequence was malformed.
	Utf8(Utf8Error),

	/// A UTF-16 source sequence contained an unpaired surrogate.
	Utf16(Utf16Error),

	/// A source value was not a valid code point.
	CodePoint(CodePointError),

	/// A UTF-8 source sequence ended prematurely.
	Length(LengthError),
}

impl Display for TranscodeError {
	#[inline]
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Self::Utf8(ref e) => e.fmt(f),

			Self::Utf16(ref e) => e.fmt(f),

			Self::CodePoint(ref e) => e.fmt(f),

			Self::Length(ref e) => e.fmt(f),
		}
	}
}

impl Error for TranscodeError { }

impl From<Infallible> for TranscodeError {
	#[inline(always)]
	fn from(_value: Infallible) -> Self {
		unreachable!()
	}
}

impl From<DecodeError> for TranscodeError {
	#[inline]
	fn from(value: DecodeError) -> Self {
		match value {
			DecodeError::Utf8(e) => Self::Utf8(e),

			DecodeError::CodePoint(e) => Self::CodePoint(e),

			DecodeError::Length(e) => Self::Length(e),
		}
	}
}

impl From<Utf8Error> for TranscodeError {
	#[inline(always)]
	fn from(value: Utf8Error) -> Self {
		Self::Utf8(value)
	}
}

impl From<Utf16Error> for TranscodeError {
	#[inline(always)]
	fn from(value: Utf16Error) -> Self {
		Self::Utf16(value)
	}
}

impl From<CodePointError> for TranscodeError {
	#[inline(always)]
	fn from(value: CodePointError) -> Self {
		Self::CodePoint(value)
	}
}

impl From<LengthError> for TranscodeError {
	#[inline(always)]
	fn from(value: LengthError) -> Self {
		Self::Length(value)
	}
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<TranscodeError> for io::Error {
	#[inline]
	fn from(value: TranscodeError) -> Self {
		Self::new(io::ErrorKind::InvalidData, value)
	}
}
