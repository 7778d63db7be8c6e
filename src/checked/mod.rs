// Copyright 2025 Gabriel Bjørnager Jensen.


mod code_points;

pub use code_points::CodePoints;

use crate::error::{
	CodePointError,
	DecodeError,
	LengthError,
	TranscodeError,
	Utf16Error,
	Utf8Error,
};
use crate::utf16::{combine_surrogates, encode_utf16, is_lead_surrogate, is_trail_surrogate};
use crate::utf8::{
	SequenceError,
	encode_utf8,
	is_code_point_valid,
	is_trail,
	validate_next,
};

use core::iter;

/// The UTF-8 byte-order mark.
pub const BOM: [u8; 0x3] = [0xEF, 0xBB, 0xBF];

/// The Unicode replacement character, `U+FFFD`.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Decodes the code point at `pos`.
///
/// On success, the cursor is advanced past the decoded sequence.
/// The end of `buf` is the end bound of the sequence; pass a subslice to decode within a shorter range.
///
/// # Errors
///
/// If `buf` ends before the sequence at `pos` does, then [`DecodeError::Length`] is returned.
/// Invalid lead octets, broken continuation sequences, and overlong encodings yield [`DecodeError::Utf8`] with the lead octet of the sequence.
/// Sequences encoding surrogates, `0xFFFE`, `0xFFFF`, or values above `0x10FFFF` yield [`DecodeError::CodePoint`].
///
/// In all cases, the cursor is left untouched.
///
/// # Examples
///
/// ```rust
/// let buf = b"\xD1\x88!";
///
/// let mut pos = 0x0;
///
/// assert_eq!(utfconv::next(buf, &mut pos), Ok(0x0448));
/// assert_eq!(pos, 0x2);
/// ```
#[inline]
#[track_caller]
pub const fn next(buf: &[u8], pos: &mut usize) -> Result<u32, DecodeError> {
	let index = *pos;

	match validate_next(buf, pos) {
		Ok(c) => Ok(c),

		Err(SequenceError::NotEnoughRoom { remaining, count }) => {
			Err(DecodeError::Length(LengthError { remaining, count }))
		}

		Err(SequenceError::InvalidLead | SequenceError::IncompleteSequence | SequenceError::OverlongSequence) => {
			let value = buf[index];
			Err(DecodeError::Utf8(Utf8Error { value, index }))
		}

		Err(SequenceError::InvalidCodePoint(value)) => {
			Err(DecodeError::CodePoint(CodePointError { value }))
		}
	}
}

/// Decodes the code point at `pos` without moving the cursor.
///
/// # Errors
///
/// See [`next`].
#[inline]
#[track_caller]
pub const fn peek_next(buf: &[u8], mut pos: usize) -> Result<u32, DecodeError> {
	next(buf, &mut pos)
}

/// Decodes the code point directly before `pos`.
///
/// The cursor is stepped backwards over continuation octets until a lead octet is found, but never before `start`.
/// The sequence is then decoded forwards from there and must end exactly at the original cursor.
/// On success, the cursor is left at the lead octet.
///
/// # Errors
///
/// If the cursor is already at `start`, then [`DecodeError::Length`] is returned.
/// If only continuation octets lie between `start` and the cursor, then [`DecodeError::Utf8`] is returned for the octet at `start`.
/// If the found sequence ends before the cursor, then [`DecodeError::Utf8`] is returned for the first stray octet.
/// Otherwise, any error from [`next`] is passed on.
///
/// In all cases, the cursor is left untouched.
///
/// # Panics
///
/// This function panics if `pos` is out of bounds of `buf`.
#[track_caller]
pub const fn prior(buf: &[u8], pos: &mut usize, start: usize) -> Result<u32, DecodeError> {
	let end = *pos;

	if end <= start {
		return Err(DecodeError::Length(LengthError { remaining: 0x0, count: 0x1 }));
	}

	let (buf, _) = buf.split_at(end);

	let mut lead = end - 0x1;
	while is_trail(buf[lead]) {
		if lead == start {
			let value = buf[lead];
			return Err(DecodeError::Utf8(Utf8Error { value, index: lead }));
		}

		lead -= 0x1;
	}

	let mut temp = lead;

	let c = match next(buf, &mut temp) {
		Ok(c) => c,

		Err(e) => return Err(e),
	};

	if temp != end {
		let value = buf[temp];
		return Err(DecodeError::Utf8(Utf8Error { value, index: temp }));
	}

	*pos = lead;
	Ok(c)
}

/// Finds the first invalid sequence of `buf`.
///
/// The offset of the lead octet of the first sequence that could not be decoded is returned.
/// If all of `buf` is valid, its length is returned instead.
///
/// # Examples
///
/// ```rust
/// assert_eq!(utfconv::find_invalid(b"ab\xC0\x80cd"), 0x2);
/// assert_eq!(utfconv::find_invalid(b"abcd"),         0x4);
/// ```
#[must_use]
pub const fn find_invalid(buf: &[u8]) -> usize {
	let mut pos = 0x0;

	while pos < buf.len() {
		if validate_next(buf, &mut pos).is_err() {
			break;
		}
	}

	pos
}

/// Tests whether all of `buf` is valid UTF-8.
#[inline]
#[must_use]
pub const fn is_valid(buf: &[u8]) -> bool {
	find_invalid(buf) == buf.len()
}

/// Tests whether `buf` starts with the UTF-8 byte-order mark.
///
/// Sequences shorter than the mark never match.
#[inline]
#[must_use]
pub const fn is_bom(buf: &[u8]) -> bool {
	matches!(*buf, [0xEF, 0xBB, 0xBF, ..])
}

/// Advances the cursor by `n` code points.
///
/// # Errors
///
/// Any error from [`next`] is passed on.
/// The cursor is then left at the sequence that could not be decoded, i.e. past all code points that were successfully skipped.
#[track_caller]
pub const fn advance(buf: &[u8], pos: &mut usize, n: usize) -> Result<(), DecodeError> {
	let mut i = 0x0;

	while i < n {
		if let Err(e) = next(buf, pos) {
			return Err(e);
		}

		i += 0x1;
	}

	Ok(())
}

/// Counts the code points in `buf`.
///
/// # Errors
///
/// Any error from [`next`] is passed on.
pub const fn distance(buf: &[u8]) -> Result<usize, DecodeError> {
	let mut pos   = 0x0;
	let mut count = 0x0;

	while pos < buf.len() {
		if let Err(e) = next(buf, &mut pos) {
			return Err(e);
		}

		count += 0x1;
	}

	Ok(count)
}

/// Appends the UTF-8 encoding of `c` to `out`.
///
/// # Errors
///
/// If `c` is not a valid code point, then an error is returned and nothing is written to `out`.
///
/// # Examples
///
/// ```rust
/// let mut s = Vec::new();
///
/// utfconv::append(0x65E5, &mut s).unwrap();
/// assert_eq!(s, b"\xE6\x97\xA5");
///
/// assert!(utfconv::append(0xD800, &mut s).is_err());
/// assert_eq!(s.len(), 0x3);
/// ```
#[inline]
pub fn append<E: Extend<u8>>(c: u32, out: &mut E) -> Result<(), CodePointError> {
	if !is_code_point_valid(c) {
		return Err(CodePointError { value: c });
	}

	let mut buf = [0x00; 0x4];
	let len = encode_utf8(c, &mut buf);

	out.extend(buf[..len].iter().copied());
	Ok(())
}

/// Converts UTF-16 units to UTF-8.
///
/// A lead surrogate must be directly followed by a trail surrogate, and a trail surrogate must be directly preceded by a lead surrogate.
///
/// # Errors
///
/// An unpaired surrogate yields [`TranscodeError::Utf16`].
/// Units encoding `0xFFFE` or `0xFFFF` yield [`TranscodeError::CodePoint`].
///
/// Everything converted before the failing unit has already been written to `out`.
pub fn utf16_to_8<E: Extend<u8>>(src: &[u16], out: &mut E) -> Result<(), TranscodeError> {
	let mut i = 0x0;

	while let Some(&unit) = src.get(i) {
		let c = if is_lead_surrogate(unit) {
			match src.get(i + 0x1) {
				Some(&trail) if is_trail_surrogate(trail) => {
					i += 0x2;
					combine_surrogates(unit, trail)
				}

				Some(&other) => return Err(Utf16Error { value: other, index: i + 0x1 }.into()),

				None => return Err(Utf16Error { value: unit, index: i }.into()),
			}
		} else if is_trail_surrogate(unit) {
			return Err(Utf16Error { value: unit, index: i }.into());
		} else {
			i += 0x1;
			u32::from(unit)
		};

		append(c, out)?;
	}

	Ok(())
}

/// Converts UTF-8 octets to UTF-16.
///
/// Code points above `0xFFFF` are written as surrogate pairs.
///
/// # Errors
///
/// Any error from [`next`] is passed on.
/// Everything converted before the failing sequence has already been written to `out`.
pub fn utf8_to_16<E: Extend<u16>>(src: &[u8], out: &mut E) -> Result<(), TranscodeError> {
	let mut pos = 0x0;

	while pos < src.len() {
		let c = next(src, &mut pos)?;

		let mut buf = [0x0000; 0x2];
		let len = encode_utf16(c, &mut buf);

		out.extend(buf[..len].iter().copied());
	}

	Ok(())
}

/// Converts UTF-32 values to UTF-8.
///
/// # Errors
///
/// The first value that is not a valid code point yields [`TranscodeError::CodePoint`].
/// Everything converted before it has already been written to `out`.
pub fn utf32_to_8<E: Extend<u8>>(src: &[u32], out: &mut E) -> Result<(), TranscodeError> {
	for &c in src {
		append(c, out)?;
	}

	Ok(())
}

/// Converts UTF-8 octets to UTF-32.
///
/// # Errors
///
/// Any error from [`next`] is passed on.
/// Everything converted before the failing sequence has already been written to `out`.
pub fn utf8_to_32<E: Extend<u32>>(src: &[u8], out: &mut E) -> Result<(), TranscodeError> {
	let mut pos = 0x0;

	while pos < src.len() {
		let c = next(src, &mut pos)?;
		out.extend(iter::once(c));
	}

	Ok(())
}

/// Copies `src` to `out` while replacing invalid sequences.
///
/// Each malformed sequence is replaced by a single `replacement` code point, which is usually [`REPLACEMENT`].
/// An invalid lead octet is skipped on its own, whilst other malformed sequences are skipped together with any continuation octets directly following their lead octet.
/// A truncated sequence at the end of `src` is thus replaced once, and octets following a lead octet that lacks room for its sequence are kept if they are not continuation octets.
///
/// # Errors
///
/// If `replacement` is not a valid code point, then an error is returned and nothing is written to `out`.
///
/// # Examples
///
/// ```rust
/// let mut s = Vec::new();
///
/// utfconv::replace_invalid(b"a\xC0\x80b\xE6\x97", utfconv::REPLACEMENT, &mut s).unwrap();
/// assert_eq!(s, "a\u{FFFD}b\u{FFFD}".as_bytes());
/// ```
pub fn replace_invalid<E: Extend<u8>>(src: &[u8], replacement: u32, out: &mut E) -> Result<(), CodePointError> {
	if !is_code_point_valid(replacement) {
		return Err(CodePointError { value: replacement });
	}

	let mut buf = [0x00; 0x4];
	let len = encode_utf8(replacement, &mut buf);
	let replacement = &buf[..len];

	let mut pos = 0x0;

	while pos < src.len() {
		let start = pos;

		match validate_next(src, &mut pos) {
			Ok(_) => {
				out.extend(src[start..pos].iter().copied());
			}

			Err(SequenceError::InvalidLead) => {
				out.extend(replacement.iter().copied());
				pos += 0x1;
			}

			// NOTE: A lead octet lacking room for its sequence
			// is only truncated if the octets after it are all
			// continuation octets. Anything else is resumed.
			Err(
				SequenceError::NotEnoughRoom { .. }
				| SequenceError::IncompleteSequence
				| SequenceError::OverlongSequence
				| SequenceError::InvalidCodePoint(_)
			) => {
				out.extend(replacement.iter().copied());

				pos += 0x1;
				while pos < src.len() && is_trail(src[pos]) {
					pos += 0x1;
				}
			}
		}
	}

	Ok(())
}
