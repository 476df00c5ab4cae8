//! # Base32 Encoding
//!
//! base32-codec implements the Base32 encoding of [RFC 4648](https://www.rfc-editor.org/rfc/rfc4648#section-6)
//! with the standard alphabet `A-Z2-7`. Every 5 input bytes become 8 symbols, and padded output
//! is filled with `=` up to a whole group.
//!
//! Decoding reads groups of 8 symbols and always yields 5 bytes per group, so a short final
//! group leaves trailing zero bytes behind. Symbols outside the alphabet (whitespace,
//! lowercase letters, ...) are skipped and reported, unless strict decoding is requested.
//!
//! ## Encode Example
//!
//! ```
//! use base32_codec::{encode, encode_with_padding};
//!
//! assert_eq!(encode(b"foobar"), "MZXW6YTBOI======");
//! assert_eq!(encode_with_padding(b"foobar", false), "MZXW6YTBOI");
//! ```
//!
//! ## Decode Example
//!
//! ```
//! use base32_codec::{decode, decode_with, DecodeOptions};
//!
//! let decoded = decode("MZXW6YTB").unwrap();
//! assert_eq!(decoded.bytes, b"fooba");
//!
//! let decoded = decode("MZXW\n6YT").unwrap();
//! assert_eq!(decoded.warnings.len(), 1);
//!
//! assert!(decode_with("MZXW\n6YT", &DecodeOptions::strict()).is_err());
//! ```

mod alphabet;
mod decode;
mod encode;

pub use alphabet::{ALPHABET, PAD};
pub use decode::{
    decode, decode_with, decoded_len, DecodeError, DecodeOptions, Decoded, InvalidSymbol,
};
pub use encode::{encode, encode_with_padding, encoded_len};
