/// The RFC 4648 alphabet. The index of a character is the 5-bit value it encodes.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding character, only ever found at the end of a group.
pub const PAD: u8 = b'=';

/// Marks an ASCII code that is not part of the alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Maps an ASCII code to its 5-bit value, or to `INVALID`.
pub(crate) const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Maps an input byte to a 5-bit value.
///
/// Lowercase letters, `=`, whitespace and every byte outside 7-bit ASCII map to `None`.
pub(crate) const fn lookup(byte: u8) -> Option<u8> {
    if byte >= 0x80 {
        return None;
    }
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        v => Some(v),
    }
}
