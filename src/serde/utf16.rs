// Copyright 2025 Gabriel Bjørnager Jensen.

//! (De)serialises `Vec<u16>` as a string.

use crate::{utf16_to_8, utf8_to_16};

use alloc::vec::Vec;
use core::fmt::{self, Formatter};
use core::str;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};

#[derive(Debug)]
struct Utf16Visitor;

impl Visitor<'_> for Utf16Visitor {
	type Value = Vec<u16>;

	#[inline]
	fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
		write!(formatter, "a string of valid unicode code points")
	}

	#[inline]
	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		let mut buf = Vec::with_capacity(v.len());

		utf8_to_16(v.as_bytes(), &mut buf).map_err(E::custom)?;
		Ok(buf)
	}
}

/// Serialises UTF-16 units as a string.
///
/// # Errors
///
/// If `units` is not valid UTF-16, then an error is returned.
#[inline]
pub fn serialize<S: Serializer>(units: &[u16], serializer: S) -> Result<S::Ok, S::Error> {
	let mut buf = Vec::with_capacity(units.len());

	utf16_to_8(units, &mut buf).map_err(<S::Error as ser::Error>::custom)?;

	let s = str::from_utf8(&buf).map_err(<S::Error as ser::Error>::custom)?;
	serializer.serialize_str(s)
}

/// Deserialises a string as UTF-16 units.
///
/// # Errors
///
/// If the string contains `U+FFFE` or `U+FFFF`, then an error is returned.
/// Any error from the deserialiser is passed on.
#[inline]
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u16>, D::Error> {
	deserializer.deserialize_str(Utf16Visitor)
}
