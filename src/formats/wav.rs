//! Minimal RIFF/WAVE writer for extracted sound effects.
//!
//! ## Layout (44-byte header)
//! ```text
//! [0x00] "RIFF"
//! [0x04] RiffSize       (u32 LE) - file length minus 8
//! [0x08] "WAVE"
//! [0x0C] "fmt "
//! [0x10] FmtSize        (u32 LE) - 16
//! [0x14] FormatTag      (u16 LE) - 1 (PCM)
//! [0x16] Channels       (u16 LE) - 1
//! [0x18] SampleRate     (u32 LE)
//! [0x1C] ByteRate       (u32 LE) - SampleRate × 2
//! [0x20] BlockAlign     (u16 LE) - 2
//! [0x22] BitsPerSample  (u16 LE) - 16
//! [0x24] "data"
//! [0x28] DataSize       (u32 LE)
//! [0x2C] Samples
//! ```

use crate::formats::sfx::SoundEffect;

/// Size of the header written in front of the samples.
pub const WAV_HEADER_SIZE: usize = 44;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Encode `effect` as a mono 16-bit PCM WAV file.
///
/// The output is always `44 + effect.sound_data.len()` bytes. A trailing odd
/// byte is copied as-is.
pub fn to_wav(effect: &SoundEffect) -> Vec<u8> {
    let pcm = &effect.sound_data;
    let data_size = u32::try_from(pcm.len()).unwrap_or(u32::MAX);
    let sample_rate = effect.sample_rate as u32;

    let mut out = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&data_size.saturating_add(36).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * BLOCK_ALIGN as u32).to_le_bytes());
    out.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    let samples = pcm.chunks_exact(2);
    let tail = samples.remainder();
    for s in samples {
        let sample = i16::from_le_bytes([s[0], s[1]]);
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out.extend_from_slice(tail);
    out
}
