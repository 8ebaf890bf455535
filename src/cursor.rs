//! Sequential little-endian reader over an in-memory buffer.
//!
//! Every read either returns exactly the bytes it promises and advances the
//! position, or fails with [`Error::OutOfBounds`] and leaves the position
//! untouched. There is no partial-read ambiguity and no seeking backwards.
//!
//! Sections returned by [`Cursor::section`] borrow from the same buffer, so a
//! nested cursor over a fixed-size table costs nothing:
//!
//! ```
//! use sfxkit::cursor::Cursor;
//!
//! let data = [1u8, 0, 2, 0, 3, 0];
//! let mut outer = Cursor::new(&data);
//! let mut inner = Cursor::new(outer.section(4)?);
//! assert_eq!(inner.le_u16()?, 1);
//! assert_eq!(inner.le_u16()?, 2);
//! assert_eq!(outer.le_u16()?, 3);
//! # Ok::<(), sfxkit::Error>(())
//! ```

use crate::{Error, Result};

/// Forward-only reader holding a borrowed buffer and a read position.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Wrap `data` with the position at zero.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether any unread bytes remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.pos < self.data.len()
    }

    /// Read exactly `len` bytes as a borrowed slice.
    pub fn section(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::OutOfBounds {
                offset: self.pos,
                requested: len,
                available: self.remaining(),
            })?;
        let data = self.data;
        let slice = &data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Skip `len` bytes.
    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.section(len).map(|_| ())
    }

    /// Read exactly `N` bytes into a fixed-size array.
    #[inline]
    pub fn bytesa<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut b = [0u8; N];
        b.copy_from_slice(self.section(N)?);
        Ok(b)
    }

    /// Read one byte.
    #[inline]
    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.bytesa::<1>()?[0])
    }

    /// Read a little-endian `u16`.
    #[inline]
    pub fn le_u16(&mut self) -> Result<u16> {
        self.bytesa().map(u16::from_le_bytes)
    }

    /// Read a little-endian `u32`.
    #[inline]
    pub fn le_u32(&mut self) -> Result<u32> {
        self.bytesa().map(u32::from_le_bytes)
    }

    /// Read a little-endian `i32`.
    #[inline]
    pub fn le_i32(&mut self) -> Result<i32> {
        self.bytesa().map(i32::from_le_bytes)
    }

    /// Read a fixed-width text field and trim it.
    ///
    /// Name fields are padded with NULs and/or spaces; both are stripped from
    /// either end. Bytes that are not valid UTF-8 are replaced.
    pub fn string(&mut self, len: usize) -> Result<String> {
        let raw = self.section(len)?;
        let text = String::from_utf8_lossy(raw);
        Ok(text
            .trim_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let data = [
            0x7F, // u8
            0x34, 0x12, // u16
            0x78, 0x56, 0x34, 0x12, // u32
            0xFF, 0xFF, 0xFF, 0xFF, // i32 -1
        ];
        let mut c = Cursor::new(&data);
        assert_eq!(c.u8().unwrap(), 0x7F);
        assert_eq!(c.le_u16().unwrap(), 0x1234);
        assert_eq!(c.le_u32().unwrap(), 0x1234_5678);
        assert_eq!(c.le_i32().unwrap(), -1);
        assert!(!c.has_more());
    }

    #[test]
    fn short_read_fails_without_advancing() {
        let data = [1u8, 2, 3];
        let mut c = Cursor::new(&data);
        c.skip(2).unwrap();
        match c.le_u16() {
            Err(Error::OutOfBounds {
                offset,
                requested,
                available,
            }) => {
                assert_eq!((offset, requested, available), (2, 2, 1));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert_eq!(c.position(), 2);
        assert_eq!(c.u8().unwrap(), 3);
    }

    #[test]
    fn oversized_section_does_not_overflow() {
        let data = [0u8; 4];
        let mut c = Cursor::new(&data);
        c.skip(1).unwrap();
        assert!(matches!(
            c.section(usize::MAX),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn string_trims_nul_and_space_padding() {
        let mut field = [0u8; 12];
        field[..7].copy_from_slice(b"GENRL  ");
        let mut c = Cursor::new(&field);
        assert_eq!(c.string(12).unwrap(), "GENRL");
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn nested_cursor_borrows_section() {
        let data = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE];
        let mut outer = Cursor::new(&data);
        outer.skip(1).unwrap();
        let mut inner = Cursor::new(outer.section(2).unwrap());
        assert_eq!(inner.len(), 2);
        assert_eq!(inner.le_u16().unwrap(), 0xCCBB);
        assert!(!inner.has_more());
        assert_eq!(outer.position(), 3);
        assert_eq!(outer.remaining(), 2);
    }

    #[test]
    fn empty_buffer_has_nothing_to_read() {
        let c = Cursor::new(&[]);
        assert!(c.is_empty());
        assert!(!c.has_more());
    }
}
