// Copyright 2025 Gabriel Bjørnager Jensen.

//! `utfconv` is a Rust crate for validating UTF-8 and for converting between UTF-8, UTF-16, and UTF-32.
//!
//! Every operation comes in two flavours.
//! The ones found at the crate root validate their input and report malformed data through the types in [`error`].
//! The ones in [`unchecked`] trust their input to already be well-formed and skip all validation.
//!
//! Cursors are plain `usize` offsets into a caller-owned slice, and the end of the slice is the end bound.
//! Destination sequences are any sink implementing [`Extend`].
//!
//! # Examples
//!
//! ```rust
//! let text = b"\xE6\x97\xA5\xD1\x88";
//!
//! assert!(utfconv::is_valid(text));
//! assert_eq!(utfconv::distance(text), Ok(0x2));
//!
//! let mut utf16 = Vec::new();
//! utfconv::utf8_to_16(text, &mut utf16).unwrap();
//!
//! assert_eq!(utf16, [0x65E5, 0x0448]);
//! ```

#![no_std]

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod unchecked;

#[cfg(all(feature = "alloc", feature = "serde"))]
#[cfg_attr(docsrs, doc(cfg(all(feature = "alloc", feature = "serde"))))]
pub mod serde;

mod checked;
mod utf16;
mod utf8;

pub use checked::{
	BOM,
	CodePoints,
	REPLACEMENT,
	advance,
	append,
	distance,
	find_invalid,
	is_bom,
	is_valid,
	next,
	peek_next,
	prior,
	replace_invalid,
	utf16_to_8,
	utf32_to_8,
	utf8_to_16,
	utf8_to_32,
};
