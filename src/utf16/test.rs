// Copyright 2025 Gabriel Bjørnager Jensen.

#![cfg(test)]

use crate::utf16::{
	combine_surrogates,
	encode_utf16,
	is_lead_surrogate,
	is_surrogate,
	is_trail_surrogate,
};

#[test]
fn test_surrogate_ranges() {
	assert!(!is_surrogate(0xD7FF));
	assert!( is_surrogate(0xD800));
	assert!( is_surrogate(0xDFFF));
	assert!(!is_surrogate(0xE000));

	assert!( is_lead_surrogate(0xDBFF));
	assert!(!is_lead_surrogate(0xDC00));

	assert!( is_trail_surrogate(0xDC00));
	assert!(!is_trail_surrogate(0xDBFF));
}

#[test]
fn test_combine_surrogates() {
	assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x10000);
	assert_eq!(combine_surrogates(0xD834, 0xDD1E), 0x1D11E);
	assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10FFFF);
}

#[test]
fn test_encode_utf16() {
	let mut buf = [0x0000; 0x2];

	assert_eq!(encode_utf16(0x65E5, &mut buf), 0x1);
	assert_eq!(buf[0x0], 0x65E5);

	assert_eq!(encode_utf16(0x1D11E, &mut buf), 0x2);
	assert_eq!(buf, [0xD834, 0xDD1E]);

	assert_eq!(encode_utf16(0x10000, &mut buf), 0x2);
	assert_eq!(buf, [0xD800, 0xDC00]);
}
