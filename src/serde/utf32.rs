// Copyright 2025 Gabriel Bjørnager Jensen.

//! (De)serialises `Vec<u32>` as a string.

use crate::{utf32_to_8, utf8_to_32};

use alloc::vec::Vec;
use core::fmt::{self, Formatter};
use core::str;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};

#[derive(Debug)]
struct Utf32Visitor;

impl Visitor<'_> for Utf32Visitor {
	type Value = Vec<u32>;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "a string of valid unicode code points")
	}

	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		let mut buf = Vec::with_capacity(v.len());

		utf8_to_32(v.as_bytes(), &mut buf).map_err(E::custom)?;
		Ok(buf)
	}
}

/// Serialises UTF-32 values as a string.
///
/// # Errors
///
/// If any value of `values` is not a valid code point, then an error is returned.
#[inline]
pub fn serialize<S: Serializer>(values: &[u32], serializer: S) -> Result<S::Ok, S::Error> {
	let mut buf = Vec::with_capacity(values.len());

	utf32_to_8(values, &mut buf).map_err(<S::Error as ser::Error>::custom)?;

	let s = str::from_utf8(&buf).map_err(<S::Error as ser::Error>::custom)?;
	serializer.serialize_str(s)
}

/// Deserialises a string as UTF-32 values.
///
/// # Errors
///
/// If the string contains `U+FFFE` or `U+FFFF`, then an error is returned.
/// Any error from the deserialiser is passed on.
#[inline]
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
	deserializer.deserialize_str(Utf32Visitor)
}
