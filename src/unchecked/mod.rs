// Copyright 2025 Gabriel Bjørnager Jensen.

//! Conversions that trust their input.
//!
//! The functions in this module mirror those at the crate root, but perform no validation whatsoever.
//! They are meant for data that is already known to be valid, e.g. sequences that have previously passed [`is_valid`](crate::is_valid) or were produced by this crate.
//!
//! The result of passing malformed data to any of these functions is unspecified:
//! They may return arbitrary values, write arbitrary units, or panic.
//! They will, however, never cause undefined behaviour.

mod test;

mod code_points;

pub use code_points::CodePoints;

use crate::utf16::{combine_surrogates, encode_utf16, is_surrogate};
use crate::utf8::{encode_utf8, is_trail, sequence_length};

use core::iter;

/// Decodes the code point at `pos` and advances the cursor past it.
///
/// See [`next`](crate::next) for a checked alternative.
///
/// # Panics
///
/// This function may panic if the sequence at `pos` is not valid UTF-8.
#[must_use]
#[track_caller]
pub const fn next(buf: &[u8], pos: &mut usize) -> u32 {
	let (_, buf) = buf.split_at(*pos);

	let len = sequence_length(buf[0x0]);

	let c = match (len, buf) {
		(0x1, &[o0, ..]) => {
			o0 as u32
		}

		(0x2, &[o0, o1, ..]) => {
			let mut c = 0x0;

			c |= (o0 as u32 & 0x1F) << 0x6;
			c |=  o1 as u32 & 0x3F;

			c
		}

		(0x3, &[o0, o1, o2, ..]) => {
			let mut c = 0x0;

			c |= (o0 as u32 & 0x0F) << 0xC;
			c |= (o1 as u32 & 0x3F) << 0x6;
			c |=  o2 as u32 & 0x3F;

			c
		}

		(0x4, &[o0, o1, o2, o3, ..]) => {
			let mut c = 0x0;

			c |= (o0 as u32 & 0x07) << 0x12;
			c |= (o1 as u32 & 0x3F) << 0xC;
			c |= (o2 as u32 & 0x3F) << 0x6;
			c |=  o3 as u32 & 0x3F;

			c
		}

		// NOTE: We may assume that UTF-8 sequences are
		// terminated properly and that their lead octets
		// are valid.
		_ => unreachable!(),
	};

	*pos += len;
	c
}

/// Decodes the code point directly before `pos` and moves the cursor back to its lead octet.
///
/// # Panics
///
/// This function may panic if no valid sequence ends at `pos`.
#[must_use]
#[track_caller]
pub const fn previous(buf: &[u8], pos: &mut usize) -> u32 {
	let mut lead = *pos - 0x1;
	while is_trail(buf[lead]) {
		lead -= 0x1;
	}

	*pos = lead;

	let mut temp = lead;
	next(buf, &mut temp)
}

/// Advances the cursor by `n` code points.
///
/// # Panics
///
/// This function may panic if the octets being skipped are not valid UTF-8.
#[track_caller]
pub const fn advance(buf: &[u8], pos: &mut usize, n: usize) {
	let mut i = 0x0;

	while i < n {
		let _ = next(buf, pos);
		i += 0x1;
	}
}

/// Counts the code points in `buf`.
///
/// # Panics
///
/// This function may panic if `buf` is not valid UTF-8.
#[must_use]
#[track_caller]
pub const fn distance(buf: &[u8]) -> usize {
	let mut pos   = 0x0;
	let mut count = 0x0;

	while pos < buf.len() {
		let _ = next(buf, &mut pos);
		count += 0x1;
	}

	count
}

/// Appends the UTF-8 encoding of `c` to `out`.
///
/// Values that are not valid code points are encoded all the same, as long as they fit into four octets.
#[inline]
pub fn append<E: Extend<u8>>(c: u32, out: &mut E) {
	let mut buf = [0x00; 0x4];
	let len = encode_utf8(c, &mut buf);

	out.extend(buf[..len].iter().copied());
}

/// Converts UTF-16 units to UTF-8.
///
/// Any surrogate is assumed to be the first half of a well-formed pair.
///
/// # Panics
///
/// This function may panic if `src` ends with a lead surrogate.
#[track_caller]
pub fn utf16_to_8<E: Extend<u8>>(src: &[u16], out: &mut E) {
	let mut i = 0x0;

	while i < src.len() {
		let unit = src[i];

		let c = if is_surrogate(u32::from(unit)) {
			let trail = src[i + 0x1];
			i += 0x2;

			combine_surrogates(unit, trail)
		} else {
			i += 0x1;
			u32::from(unit)
		};

		append(c, out);
	}
}

/// Converts UTF-8 octets to UTF-16.
///
/// # Panics
///
/// This function may panic if `src` is not valid UTF-8.
#[track_caller]
pub fn utf8_to_16<E: Extend<u16>>(src: &[u8], out: &mut E) {
	let mut pos = 0x0;

	while pos < src.len() {
		let c = next(src, &mut pos);

		let mut buf = [0x0000; 0x2];
		let len = encode_utf16(c, &mut buf);

		out.extend(buf[..len].iter().copied());
	}
}

/// Converts UTF-32 values to UTF-8.
#[inline]
pub fn utf32_to_8<E: Extend<u8>>(src: &[u32], out: &mut E) {
	for &c in src {
		append(c, out);
	}
}

/// Converts UTF-8 octets to UTF-32.
///
/// # Panics
///
/// This function may panic if `src` is not valid UTF-8.
#[track_caller]
pub fn utf8_to_32<E: Extend<u32>>(src: &[u8], out: &mut E) {
	let mut pos = 0x0;

	while pos < src.len() {
		let c = next(src, &mut pos);
		out.extend(iter::once(c));
	}
}
