//! XOR obfuscation applied to music stream files.
//!
//! Every byte of a stream file is XORed with a 16-byte key that cycles over
//! the whole file. The key byte is chosen by the absolute file offset, so a
//! file decoded in chunks must pass each chunk's starting offset to
//! [`apply_at`].
//!
//! ## Key (hex)
//! `EA 3A C4 A1 9A A8 14 F3 48 B0 D7 23 9D E8 FF F1`
//!
//! XOR is symmetric: `decode(decode(data)) == data`.

/// The 16-byte stream key.
pub const STREAM_KEY: [u8; 16] = [
    0xEA, 0x3A, 0xC4, 0xA1, 0x9A, 0xA8, 0x14, 0xF3, 0x48, 0xB0, 0xD7, 0x23, 0x9D, 0xE8, 0xFF, 0xF1,
];

/// Key byte for absolute file offset `index`.
#[inline]
pub fn key_byte(index: u64) -> u8 {
    STREAM_KEY[(index % STREAM_KEY.len() as u64) as usize]
}

/// Decode a whole stream file.
pub fn decode(data: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ STREAM_KEY[i % STREAM_KEY.len()])
        .collect()
}

/// Encode raw bytes into stream-file form.
pub fn encode(data: &[u8]) -> Vec<u8> {
    decode(data)
}

/// Decode (or encode) `buf` in place, treating `buf[0]` as the byte at
/// absolute file offset `start`.
pub fn apply_at(buf: &mut [u8], start: u64) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key_byte(start + i as u64);
    }
}
