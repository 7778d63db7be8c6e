// Copyright 2025 Gabriel Bjørnager Jensen.

use core::iter::FusedIterator;

/// Unchecked iterator over the code points of UTF-8 octets.
///
/// See [`crate::CodePoints`] for a checked alternative.
///
/// # Panics
///
/// Iterating over octets that are not valid UTF-8 may panic.
#[derive(Clone, Debug)]
#[must_use]
pub struct CodePoints<'a> {
	buf:   &'a [u8],
	front: usize,
	back:  usize,
}

impl<'a> CodePoints<'a> {
	/// Constructs a new iterator over `buf`.
	#[inline(always)]
	pub const fn new(buf: &'a [u8]) -> Self {
		let front = 0x0;
		let back  = buf.len();

		Self { buf, front, back }
	}

	/// Gets the octets that have not been iterated over yet.
	#[inline(always)]
	#[must_use]
	pub fn as_bytes(&self) -> &'a [u8] {
		&self.buf[self.front..self.back]
	}
}

impl Iterator for CodePoints<'_> {
	type Item = u32;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}

		let c = super::next(self.buf, &mut self.front);
		Some(c)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.back - self.front;

		(len.div_ceil(0x4), Some(len))
	}
}

impl DoubleEndedIterator for CodePoints<'_> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}

		let c = super::previous(self.buf, &mut self.back);
		Some(c)
	}
}

impl FusedIterator for CodePoints<'_> { }
