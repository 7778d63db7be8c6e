// Copyright 2025 Gabriel Bjørnager Jensen.

mod test;

use crate::utf16::is_surrogate;

/// The greatest value of any Unicode code point.
pub(crate) const CODE_POINT_MAX: u32 = 0x0010FFFF;

/// Why a single UTF-8 sequence could not be decoded.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum SequenceError {
	/// The sequence declared `count` octets but only `remaining` were left.
	NotEnoughRoom { remaining: usize, count: usize },

	InvalidLead,

	IncompleteSequence,

	OverlongSequence,

	InvalidCodePoint(u32),
}

#[inline(always)]
#[must_use]
pub(crate) const fn is_trail(octet: u8) -> bool {
	octet >> 0x6 == 0b10
}

#[inline]
#[must_use]
pub(crate) const fn is_code_point_valid(c: u32) -> bool {
	c <= CODE_POINT_MAX && !is_surrogate(c) && c != 0xFFFE && c != 0xFFFF
}

/// Gets the length of a UTF-8 sequence from its lead octet.
///
/// Zero is returned for octets that cannot start a sequence.
#[inline]
#[must_use]
pub(crate) const fn sequence_length(lead: u8) -> usize {
	if lead < 0x80 {
		0x1
	} else if lead >> 0x5 == 0b110 {
		0x2
	} else if lead >> 0x4 == 0b1110 {
		0x3
	} else if lead >> 0x3 == 0b11110 {
		0x4
	} else {
		0x0
	}
}

/// Gets the minimal amount of octets needed to encode `c`.
#[inline]
#[must_use]
const fn encoded_length(c: u32) -> usize {
	match c {
		0x00000..=0x0007F => 0x1,
		0x00080..=0x007FF => 0x2,
		0x00800..=0x0FFFF => 0x3,
		_                 => 0x4,
	}
}

/// Decodes and validates the sequence at `pos`.
///
/// The cursor is only moved on success, in which case it is left directly after the sequence.
/// On failure it still points to the lead octet, so that a scanner may report the exact offset of the malformed sequence.
#[track_caller]
pub(crate) const fn validate_next(buf: &[u8], pos: &mut usize) -> Result<u32, SequenceError> {
	let start = *pos;

	if start >= buf.len() {
		return Err(SequenceError::NotEnoughRoom { remaining: 0x0, count: 0x1 });
	}

	let lead = buf[start];
	let len  = sequence_length(lead);

	// ASCII.
	if len == 0x1 {
		*pos = start + 0x1;
		return Ok(lead as u32);
	}

	let remaining = buf.len() - start;

	if remaining < len {
		return Err(SequenceError::NotEnoughRoom { remaining, count: len });
	}

	if len == 0x0 {
		return Err(SequenceError::InvalidLead);
	}

	let mut c = (lead & (0x7F >> len)) as u32;

	let mut i = 0x1;
	while i < len {
		let octet = buf[start + i];

		if !is_trail(octet) {
			return Err(SequenceError::IncompleteSequence);
		}

		c = (c << 0x6) | (octet & 0x3F) as u32;
		i += 0x1;
	}

	// NOTE: Validity of the value is tested before
	// its length. An overlong encoding of a valid
	// value (e.g. `C0 80`) is therefore reported as
	// overlong and not as an invalid code point.

	if !is_code_point_valid(c) {
		return Err(SequenceError::InvalidCodePoint(c));
	}

	if encoded_length(c) != len {
		return Err(SequenceError::OverlongSequence);
	}

	*pos = start + len;
	Ok(c)
}

/// Encodes `c` into `buf` without validating it.
///
/// The amount of written octets is returned.
/// Values above [`CODE_POINT_MAX`] are silently truncated.
#[inline]
pub(crate) const fn encode_utf8(c: u32, buf: &mut [u8; 0x4]) -> usize {
	let len = encoded_length(c);

	match len {
		0x1 => {
			buf[0x0] = c as u8;
		}

		0x2 => {
			buf[0x0] = (c >> 0x6)         as u8 | 0xC0;
			buf[0x1] = (c        & 0x3F)  as u8 | 0x80;
		}

		0x3 => {
			buf[0x0] = (c >> 0xC)         as u8 | 0xE0;
			buf[0x1] = (c >> 0x6 & 0x3F)  as u8 | 0x80;
			buf[0x2] = (c        & 0x3F)  as u8 | 0x80;
		}

		_ => {
			buf[0x0] = (c >> 0x12 & 0x07) as u8 | 0xF0;
			buf[0x1] = (c >> 0xC  & 0x3F) as u8 | 0x80;
			buf[0x2] = (c >> 0x6  & 0x3F) as u8 | 0x80;
			buf[0x3] = (c         & 0x3F) as u8 | 0x80;
		}
	}

	len
}
