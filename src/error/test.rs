// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::error::{
	CodePointError,
	DecodeError,
	LengthError,
	TranscodeError,
	Utf16Error,
	Utf8Error,
};

use alloc::string::ToString;

#[test]
fn test_error_display() {
	assert_eq!(
		Utf8Error { value: 0xC0, index: 0x3 }.to_string(),
		"found invalid utf-8 octet 0xC0 at offset (3)",
	);

	assert_eq!(
		Utf16Error { value: 0xDD00, index: 0x0 }.to_string(),
		"found invalid utf-16 unit 0xDD00 at offset (0)",
	);

	assert_eq!(
		CodePointError { value: 0x110000 }.to_string(),
		"value 0x110000 is not a valid unicode code point",
	);

	assert_eq!(
		LengthError { remaining: 0x2, count: 0x3 }.to_string(),
		"sequence with (2) remaining octets cannot hold (3) more octets",
	);

	assert_eq!(
		DecodeError::CodePoint(CodePointError { value: 0xFFFE }).to_string(),
		"value 0xFFFE is not a valid unicode code point",
	);
}

#[test]
fn test_transcode_error_from_decode_error() {
	let e = DecodeError::Utf8(Utf8Error { value: 0xFF, index: 0x7 });

	assert_eq!(
		TranscodeError::from(e),
		TranscodeError::Utf8(Utf8Error { value: 0xFF, index: 0x7 }),
	);

	let e = DecodeError::Length(LengthError { remaining: 0x1, count: 0x4 });

	assert_eq!(
		TranscodeError::from(e),
		TranscodeError::Length(LengthError { remaining: 0x1, count: 0x4 }),
	);
}

#[cfg(feature = "std")]
#[test]
fn test_io_error() {
	use std::io;

	let e = io::Error::from(DecodeError::Length(LengthError { remaining: 0x0, count: 0x1 }));
	assert_eq!(e.kind(), io::ErrorKind::InvalidData);

	let e = io::Error::from(TranscodeError::Utf16(Utf16Error { value: 0xD800, index: 0x0 }));
	assert_eq!(e.kind(), io::ErrorKind::InvalidData);
	assert_eq!(e.to_string(), "found invalid utf-16 unit 0xD800 at offset (0)");
}

#[cfg(feature = "oct")]
#[test]
fn test_length_error_into_oct() {
	use oct::error::GenericDecodeError;

	let e = GenericDecodeError::from(LengthError { remaining: 0x1, count: 0x3 });

	assert!(matches!(
		e,
		GenericDecodeError::SmallBuffer(oct::error::LengthError { remaining: 0x1, count: 0x3 }),
	));
}
