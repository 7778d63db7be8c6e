// Copyright 2025 Gabriel Bjørnager Jensen.

//! Error types.

mod test;

mod code_point_error;
mod decode_error;
mod length_error;
mod transcode_error;
mod utf16_error;
mod utf8_error;

pub use code_point_error::CodePointError;
pub use decode_error::DecodeError;
pub use length_error::LengthError;
pub use transcode_error::TranscodeError;
pub use utf16_error::Utf16Error;
pub use utf8_error::Utf8Error;
