// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::unchecked::{
	CodePoints,
	advance,
	append,
	distance,
	next,
	previous,
	utf16_to_8,
	utf32_to_8,
	utf8_to_16,
	utf8_to_32,
};

use alloc::string::String;
use alloc::vec::Vec;
use quickcheck::QuickCheck;

const SAMPLE: &[u8] = b"\xE6\x97\xA5\xD1\x88\xF0\x90\x8D\x86\xE6\x97\xA5\xD1\x88a";

#[test]
fn test_append() {
	let mut s = Vec::new();

	append(0x0448, &mut s);
	assert_eq!(s, b"\xD1\x88");

	s.clear();

	append(0x65E5, &mut s);
	assert_eq!(s, b"\xE6\x97\xA5");

	// Surrogates are encoded like any other value.

	s.clear();

	append(0xD800, &mut s);
	assert_eq!(s, b"\xED\xA0\x80");
}

#[test]
fn test_next_previous() {
	let mut pos = 0x0;

	assert_eq!(next(SAMPLE, &mut pos), 0x65E5);
	assert_eq!(next(SAMPLE, &mut pos), 0x0448);
	assert_eq!(next(SAMPLE, &mut pos), 0x10346);
	assert_eq!(pos, 0x9);

	assert_eq!(previous(SAMPLE, &mut pos), 0x10346);
	assert_eq!(pos, 0x5);

	assert_eq!(previous(SAMPLE, &mut pos), 0x0448);
	assert_eq!(pos, 0x3);
}

#[test]
fn test_advance_distance() {
	assert_eq!(distance(SAMPLE), 0x6);
	assert_eq!(distance(b""), 0x0);

	let mut pos = 0x0;

	advance(SAMPLE, &mut pos, 0x5);
	assert_eq!(pos, 0xE);

	advance(SAMPLE, &mut pos, 0x1);
	assert_eq!(pos, SAMPLE.len());
}

#[test]
fn test_transcode() {
	let mut utf16 = Vec::new();
	utf8_to_16(SAMPLE, &mut utf16);

	assert_eq!(utf16, [0x65E5, 0x0448, 0xD800, 0xDF46, 0x65E5, 0x0448, 0x0061]);

	let mut utf8 = Vec::new();
	utf16_to_8(&utf16, &mut utf8);

	assert_eq!(utf8, SAMPLE);

	let mut utf32 = Vec::new();
	utf8_to_32(SAMPLE, &mut utf32);

	assert_eq!(utf32, [0x65E5, 0x0448, 0x10346, 0x65E5, 0x0448, 0x61]);

	let mut utf8 = Vec::new();
	utf32_to_8(&utf32, &mut utf8);

	assert_eq!(utf8, SAMPLE);
}

#[test]
fn test_code_points() {
	let forward: Vec<u32> = CodePoints::new(SAMPLE).collect();
	assert_eq!(forward, [0x65E5, 0x0448, 0x10346, 0x65E5, 0x0448, 0x61]);

	let mut iter = CodePoints::new(SAMPLE);

	assert_eq!(iter.next_back(), Some(0x61));
	assert_eq!(iter.next_back(), Some(0x0448));
	assert_eq!(iter.next(), Some(0x65E5));
	assert_eq!(iter.as_bytes(), &SAMPLE[0x3..0xC]);
}

#[test]
fn test_matches_checked() {
	#[allow(clippy::needless_pass_by_value)]
	fn prop(s: String) -> bool {
		let src = s.as_bytes();

		if !crate::is_valid(src) {
			return true;
		}

		let mut checked   = Vec::new();
		let mut unchecked = Vec::new();

		crate::utf8_to_16(src, &mut checked).unwrap();
		utf8_to_16(src, &mut unchecked);

		let count = distance(src);

		checked == unchecked
			&& crate::distance(src) == Ok(count)
			&& CodePoints::new(src).rev().count() == count
	}

	QuickCheck::new()
		.tests(0x400)
		.quickcheck(prop as fn(String) -> bool);
}
