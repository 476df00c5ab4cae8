use std::convert::TryInto;

use crate::{ALPHABET, PAD};

/// Number of symbols carrying real data for a group of `n` input bytes.
const fn significant_symbols(n: usize) -> usize {
    (n * 8 + 4) / 5
}

/// Splits 5 bytes into 8 symbols, most significant first.
fn encode_word(c: [u8; 5]) -> [u8; 8] {
    let mut word = [0; 8];
    word[3..].copy_from_slice(&c);
    let n = u64::from_be_bytes(word);

    let mut out = [0; 8];
    for (k, symbol) in out.iter_mut().enumerate() {
        let index = (n >> ((7 - k) * 5)) & 0x1F;
        *symbol = ALPHABET[index as usize];
    }
    out
}

/// Length of the text `encode_with_padding` produces for `n` input bytes.
///
/// ```
/// use base32_codec::encoded_len;
///
/// assert_eq!(encoded_len(1, false), 2);
/// assert_eq!(encoded_len(1, true), 8);
/// assert_eq!(encoded_len(5, true), 8);
/// ```
pub const fn encoded_len(n: usize, with_padding: bool) -> usize {
    let unpadded = n / 5 * 8 + significant_symbols(n % 5);
    if with_padding {
        (unpadded + 7) / 8 * 8
    } else {
        unpadded
    }
}

/// Encodes `data` as padded Base32.
pub fn encode(data: &[u8]) -> String {
    encode_with_padding(data, true)
}

/// Encodes `data` as Base32.
///
/// With padding the output is filled with `=` up to a whole group of 8 symbols, so its length
/// is always a multiple of 8 (and therefore of 4). Input that already fills its last group gets
/// no padding at all.
pub fn encode_with_padding(data: &[u8], with_padding: bool) -> String {
    let mut buf = Vec::with_capacity(encoded_len(data.len(), with_padding));
    let chunks = data.chunks_exact(5);
    let remainder = chunks.remainder();
    for chunk in chunks {
        let c: [u8; 5] = chunk.try_into().unwrap();
        buf.extend_from_slice(&encode_word(c));
    }

    if !remainder.is_empty() {
        let mut c = [0; 5];
        c[..remainder.len()].copy_from_slice(remainder);
        let out = encode_word(c);
        buf.extend_from_slice(&out[..significant_symbols(remainder.len())]);
    }

    if with_padding {
        let pad = (8 - buf.len() % 8) % 8;
        buf.resize(buf.len() + pad, PAD);
    }

    buf.into_iter().map(char::from).collect()
}
