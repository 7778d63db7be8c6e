// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::utf8::{
	SequenceError,
	encode_utf8,
	is_code_point_valid,
	is_trail,
	sequence_length,
	validate_next,
};

use rstest::rstest;

#[test]
fn test_sequence_length() {
	assert_eq!(sequence_length(0b01111111u8), 0x1);
	assert_eq!(sequence_length(0b11011111u8), 0x2);
	assert_eq!(sequence_length(0b11101111u8), 0x3);
	assert_eq!(sequence_length(0b11110111u8), 0x4);
	assert_eq!(sequence_length(0b11111011u8), 0x0);
	assert_eq!(sequence_length(0b11111111u8), 0x0);
	assert_eq!(sequence_length(0b10111111u8), 0x0);
}

#[test]
fn test_is_trail() {
	assert!(is_trail(0x80));
	assert!(is_trail(0xBF));

	assert!(!is_trail(0x7F));
	assert!(!is_trail(0xC0));
}

#[test]
fn test_is_code_point_valid() {
	assert!(is_code_point_valid(0x0));
	assert!(is_code_point_valid(0xD7FF));
	assert!(is_code_point_valid(0xE000));
	assert!(is_code_point_valid(0xFFFD));
	assert!(is_code_point_valid(0x10FFFF));

	assert!(!is_code_point_valid(0xD800));
	assert!(!is_code_point_valid(0xDFFF));
	assert!(!is_code_point_valid(0xFFFE));
	assert!(!is_code_point_valid(0xFFFF));
	assert!(!is_code_point_valid(0x110000));
}

#[rstest]
#[case(b"\0",               0x0,     0x1)]
#[case(b"\xC2\xB1",         0xB1,    0x2)]
#[case(b"\xEF\xB7\xB2",     0xFDF2,  0x3)]
#[case(b"\xF0\x9F\x95\x8B", 0x1F54B, 0x4)]
fn test_validate_next(#[case] buf: &[u8], #[case] value: u32, #[case] len: usize) {
	let mut pos = 0x0;

	assert_eq!(validate_next(buf, &mut pos), Ok(value));
	assert_eq!(pos, len);
}

#[rstest]
#[case(b"",                 SequenceError::NotEnoughRoom { remaining: 0x0, count: 0x1 })]
#[case(b"\xE6\x97",         SequenceError::NotEnoughRoom { remaining: 0x2, count: 0x3 })]
#[case(b"\xF8\x80\x80\x80", SequenceError::InvalidLead)]
#[case(b"\x80",             SequenceError::InvalidLead)]
#[case(b"\xE6\x97\x41",     SequenceError::IncompleteSequence)]
#[case(b"\xF0\x9F\x41\x8B", SequenceError::IncompleteSequence)]
#[case(b"\xC0\x80",         SequenceError::OverlongSequence)]
#[case(b"\xE0\x81\xBF",     SequenceError::OverlongSequence)]
#[case(b"\xF0\x8F\xBF\xBD", SequenceError::OverlongSequence)]
#[case(b"\xED\xA0\x80",     SequenceError::InvalidCodePoint(0xD800))]
#[case(b"\xEF\xBF\xBE",     SequenceError::InvalidCodePoint(0xFFFE))]
#[case(b"\xF0\x8F\xBF\xBF", SequenceError::InvalidCodePoint(0xFFFF))]
#[case(b"\xF4\x90\x80\x80", SequenceError::InvalidCodePoint(0x110000))]
fn test_validate_next_rejects(#[case] buf: &[u8], #[case] error: SequenceError) {
	let mut pos = 0x0;

	assert_eq!(validate_next(buf, &mut pos), Err(error));
	assert_eq!(pos, 0x0);
}

#[test]
fn test_validate_next_rolls_back_mid_buffer() {
	let buf = b"ab\xE6\x97\x41cd";

	let mut pos = 0x2;

	assert_eq!(validate_next(buf, &mut pos), Err(SequenceError::IncompleteSequence));
	assert_eq!(pos, 0x2);
}

#[rstest]
#[case(0x24,     &[0x24])]
#[case(0x0448,   &[0xD1, 0x88])]
#[case(0x65E5,   &[0xE6, 0x97, 0xA5])]
#[case(0x10348,  &[0xF0, 0x90, 0x8D, 0x88])]
#[case(0x10FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
fn test_encode_utf8(#[case] value: u32, #[case] octets: &[u8]) {
	let mut buf = [0x00; 0x4];

	let len = encode_utf8(value, &mut buf);
	assert_eq!(&buf[..len], octets);
}
