// Copyright 2025 Gabriel Bjørnager Jensen.

use crate::error::DecodeError;

use core::iter::FusedIterator;

/// Checked iterator over the code points of UTF-8 octets.
///
/// Each step is validated as by [`next`](crate::next) (or [`prior`](crate::prior) when iterating backwards).
/// The iterator stops after yielding its first error.
///
/// # Examples
///
/// ```rust
/// use utfconv::CodePoints;
///
/// let mut iter = CodePoints::new(b"a\xD1\x88\xFF");
///
/// assert_eq!(iter.next(), Some(Ok(0x61)));
/// assert_eq!(iter.next(), Some(Ok(0x0448)));
/// assert!(matches!(iter.next(), Some(Err(_))));
/// assert_eq!(iter.next(), None);
/// ```
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

	/// Gets the offset of the next octet to be decoded from the front.
	#[inline(always)]
	#[must_use]
	pub const fn position(&self) -> usize {
		self.front
	}

	#[inline(always)]
	const fn fuse(&mut self) {
		self.front = self.back;
	}
}

impl Iterator for CodePoints<'_> {
	type Item = Result<u32, DecodeError>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}

		let buf = &self.buf[..self.back];

		let result = super::next(buf, &mut self.front);

		if result.is_err() {
			self.fuse();
		}

		Some(result)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.back - self.front;

		// The iterator stops after its first error, which
		// may be yielded for the very first octet.
		(usize::from(len != 0x0), Some(len))
	}
}

impl DoubleEndedIterator for CodePoints<'_> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}

		let result = super::prior(self.buf, &mut self.back, self.front);

		if result.is_err() {
			self.fuse();
		}

		Some(result)
	}
}

impl FusedIterator for CodePoints<'_> { }
