use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::alphabet::lookup;
use crate::PAD;

/// Errors that abort a decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input length is not a multiple of 4.
    #[error("not base32: length {len} is not a multiple of 4")]
    InvalidLength { len: usize },

    /// A byte outside the alphabet, reported only in strict mode.
    #[error("not base32: {symbol}")]
    InvalidSymbol { symbol: InvalidSymbol },
}

/// A byte that was skipped because it is neither in the alphabet nor padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol {
    /// Offset of the byte in the input.
    pub position: usize,
    /// The raw input byte.
    pub byte: u8,
}

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.byte.is_ascii_graphic() {
            write!(f, "invalid symbol '{}' at {}", self.byte as char, self.position)
        } else {
            write!(f, "invalid byte {:#04x} at {}", self.byte, self.position)
        }
    }
}

/// Options controlling how `decode_with` treats bytes outside the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on the first invalid symbol instead of skipping it.
    pub strict: bool,
}

impl DecodeOptions {
    /// Fail on the first invalid symbol.
    pub const fn strict() -> Self {
        DecodeOptions { strict: true }
    }

    /// Skip invalid symbols and report them in [`Decoded::warnings`].
    pub const fn lenient() -> Self {
        DecodeOptions { strict: false }
    }
}

/// The output of a decode, together with every symbol that was skipped on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    pub warnings: Vec<InvalidSymbol>,
}

impl Decoded {
    /// `true` if no symbol had to be skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Drops the warnings.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Turns the first skipped symbol, if any, into an error.
    pub fn into_strict(self) -> Result<Vec<u8>, DecodeError> {
        match self.warnings.first() {
            Some(&symbol) => Err(DecodeError::InvalidSymbol { symbol }),
            None => Ok(self.bytes),
        }
    }
}

/// Number of bytes `decode` produces for `n` input bytes.
///
/// Every group of up to 8 symbols yields 5 bytes, so a short final group is followed by
/// zero bytes. Callers that need the exact original length have to keep track of it.
pub const fn decoded_len(n: usize) -> usize {
    (n + 7) / 8 * 5
}

/// Joins 8 symbols into 5 bytes, most significant first.
fn decode_word(symbols: [u8; 8]) -> [u8; 5] {
    let mut n = 0u64;
    for (k, &s) in symbols.iter().enumerate() {
        n |= (s as u64) << ((7 - k) * 5);
    }
    let word = n.to_be_bytes();
    let mut out = [0; 5];
    out.copy_from_slice(&word[3..]);
    out
}

/// Decodes Base32, skipping symbols outside the alphabet.
///
/// Skipped symbols are returned in [`Decoded::warnings`].
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<Decoded, DecodeError> {
    decode_with(input, &DecodeOptions::default())
}

/// Decodes Base32.
///
/// The input is read in groups of 8 bytes. Within a group, `=` ends the group and whatever
/// follows it there is ignored. A byte outside the alphabet is skipped without taking a slot,
/// so the next valid symbol fills it instead; in strict mode it fails the decode instead.
/// Each group yields 5 bytes even if it held fewer than 8 symbols.
pub fn decode_with<T: AsRef<[u8]>>(
    input: T,
    options: &DecodeOptions,
) -> Result<Decoded, DecodeError> {
    let data = input.as_ref();
    if data.len() % 4 != 0 {
        debug!(len = data.len(), "rejecting base32 input");
        return Err(DecodeError::InvalidLength { len: data.len() });
    }

    let mut decoded = Decoded {
        bytes: Vec::with_capacity(decoded_len(data.len())),
        warnings: Vec::new(),
    };

    for (i, chunk) in data.chunks(8).enumerate() {
        let mut symbols = [0; 8];
        let mut slot = 0;
        for (j, &byte) in chunk.iter().enumerate() {
            if byte == PAD {
                break;
            }
            match lookup(byte) {
                Some(value) => {
                    symbols[slot] = value;
                    slot += 1;
                }
                None => {
                    let symbol = InvalidSymbol {
                        position: i * 8 + j,
                        byte,
                    };
                    if options.strict {
                        return Err(DecodeError::InvalidSymbol { symbol });
                    }
                    warn!(
                        position = symbol.position,
                        byte = symbol.byte,
                        "skipping invalid base32 symbol"
                    );
                    decoded.warnings.push(symbol);
                }
            }
        }
        decoded.bytes.extend_from_slice(&decode_word(symbols));
    }

    Ok(decoded)
}
