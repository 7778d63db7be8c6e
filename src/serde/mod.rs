// Copyright 2025 Gabriel Bjørnager Jensen.

//! Serde helpers for UTF-16 and UTF-32 buffers.
//!
//! The modules herein are meant to be used with `#[serde(with = "...")]`.
//! They represent `Vec<u16>` and `Vec<u32>` fields as strings in the serialised format, converting through the checked transcoders.
//!
//! # Examples
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize, Serialize)]
//! struct Label {
//!     #[serde(with = "utfconv::serde::utf16")]
//!     text: Vec<u16>,
//! }
//! ```


pub mod utf16;
pub mod utf32;
