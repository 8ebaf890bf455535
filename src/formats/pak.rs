//! `PakFiles.dat` - package entry table.
//!
//! Lists the package files under `audio/sfx`. A package's position in this
//! table is its index, referenced by [`super::lookup::BankLookup`].
//!
//! ## Layout
//! ```text
//! [0x00] Name  (52 bytes, NUL/space padded)
//! [0x34] Name  ...
//! ```
//! The record count is `file length / 52`; there is no header.

use std::ops::Index;

use crate::Result;
use crate::cursor::Cursor;

/// Size of one package name record.
pub const PAK_ENTRY_SIZE: usize = 52;

/// Parsed package table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PakTable {
    pub names: Vec<String>,
}

impl PakTable {
    /// Parse a package table from raw file bytes.
    ///
    /// A trailing partial record is ignored.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let count = data.len() / PAK_ENTRY_SIZE;
        let mut c = Cursor::new(data);

        let mut names = Vec::with_capacity(count);
        for _ in 0..count {
            names.push(c.string(PAK_ENTRY_SIZE)?);
        }
        Ok(Self { names })
    }

    /// Position of `name` in the table, compared case-insensitively.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Index<usize> for PakTable {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}
