//! Sound effect packages (`audio/sfx/*`).
//!
//! A package file is a sequence of banks. Each bank is a fixed-size header
//! followed by the raw sample data of all its sounds; where a bank starts
//! and how much sample data it holds comes from
//! [`super::lookup::BankLookup`].
//!
//! ## Bank header (4804 bytes)
//! ```text
//! [0x000] SoundCount  (u16 LE, at most 400)
//! [0x002] Padding     (u16)
//! [0x004] SoundMeta   (400 × 12 bytes, only SoundCount are meaningful)
//! ```
//!
//! ## SoundMeta (12 bytes)
//! ```text
//! [0x00] BufferOffset  (u32 LE) - relative to the end of the bank header
//! [0x04] LoopOffset    (i32 LE) - in samples, -1 when the sound does not loop
//! [0x08] SampleRate    (u16 LE)
//! [0x0A] Headroom      (u16 LE)
//! ```
//!
//! Sample data is mono signed 16-bit PCM. A sound runs from its own buffer
//! offset to the next sound's, the last one to the end of the bank.

use crate::cursor::Cursor;
use crate::formats::lookup::BankLookup;
use crate::formats::wav;
use crate::{Error, Result};

/// Size of a bank header.
pub const BANK_HEADER_SIZE: usize = 4804;
/// Most sounds a bank header can describe.
pub const MAX_SOUNDS: usize = 400;
/// Loop offset of a sound that does not loop.
pub const NO_LOOP: i32 = -1;

/// Per-sound metadata from a bank header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundMeta {
    pub buffer_offset: u32,
    pub loop_offset: i32,
    pub sample_rate: u16,
    pub headroom: u16,
}

impl SoundMeta {
    fn read(c: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            buffer_offset: c.le_u32()?,
            loop_offset: c.le_i32()?,
            sample_rate: c.le_u16()?,
            headroom: c.le_u16()?,
        })
    }
}

/// Parsed bank header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHeader {
    pub sounds: Vec<SoundMeta>,
}

impl BankHeader {
    /// Parse a bank header from its 4804-byte section.
    ///
    /// Returns [`Error::CapacityExceeded`] if more than 400 sounds are
    /// declared.
    pub fn parse(section: &[u8]) -> Result<Self> {
        let mut c = Cursor::new(section);
        let count = c.le_u16()? as usize;
        if count > MAX_SOUNDS {
            return Err(Error::CapacityExceeded {
                count,
                max: MAX_SOUNDS,
            });
        }
        let _padding = c.le_u16()?;

        let mut sounds = Vec::with_capacity(count);
        for _ in 0..count {
            sounds.push(SoundMeta::read(&mut c)?);
        }
        Ok(Self { sounds })
    }

    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }

    /// Metadata of slot `slot_index` (1-based).
    pub fn sound(&self, slot_index: usize) -> Result<&SoundMeta> {
        slot_index
            .checked_sub(1)
            .and_then(|i| self.sounds.get(i))
            .ok_or(Error::InvalidSlotIndex {
                slot_index,
                sound_count: self.sounds.len(),
            })
    }

    /// Byte length of slot `slot_index` (1-based) in a bank holding
    /// `bank_size` bytes of sample data.
    pub fn sound_len(&self, slot_index: usize, bank_size: u32) -> Result<u32> {
        let sound = self.sound(slot_index)?;
        let end = match self.sounds.get(slot_index) {
            Some(next) => next.buffer_offset,
            None => bank_size,
        };
        end.checked_sub(sound.buffer_offset)
            .ok_or(Error::InvalidRange {
                start: sound.buffer_offset as u64,
                end: end as u64,
            })
    }
}

/// One extracted sound effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEffect {
    /// In Hz.
    pub sample_rate: u16,
    /// How far above average loudness this sound is expected to go.
    pub headroom: u16,
    /// Loop start in samples, [`NO_LOOP`] if the sound does not loop.
    pub loop_offset: i32,
    /// Mono signed 16-bit little-endian PCM.
    pub sound_data: Vec<u8>,
}

impl SoundEffect {
    pub fn is_looping(&self) -> bool {
        self.loop_offset != NO_LOOP
    }

    /// Wrap the sample data in a WAV container.
    pub fn to_wav(&self) -> Vec<u8> {
        wav::to_wav(self)
    }
}

/// Read the header of the bank described by `lookup` from a package file.
pub fn read_bank_header(package: &[u8], lookup: &BankLookup) -> Result<BankHeader> {
    let mut c = Cursor::new(package);
    c.skip(lookup.bank_header_offset as usize)?;
    BankHeader::parse(c.section(BANK_HEADER_SIZE)?)
}

/// Carve slot `slot_index` (1-based) of the bank described by `lookup` out
/// of a package file.
pub fn extract_sound(package: &[u8], lookup: &BankLookup, slot_index: usize) -> Result<SoundEffect> {
    let mut c = Cursor::new(package);
    c.skip(lookup.bank_header_offset as usize)?;
    let header = BankHeader::parse(c.section(BANK_HEADER_SIZE)?)?;

    let sound = *header.sound(slot_index)?;
    let len = header.sound_len(slot_index, lookup.bank_size)?;

    // Sample offsets are relative to the end of the bank header.
    c.skip(sound.buffer_offset as usize)?;
    let sound_data = c.section(len as usize)?.to_vec();

    Ok(SoundEffect {
        sample_rate: sound.sample_rate,
        headroom: sound.headroom,
        loop_offset: sound.loop_offset,
        sound_data,
    })
}
