//! `BankLkup.dat` - bank lookup table.
//!
//! Each record places one bank inside a package file. Records sharing a
//! package index form that package's bank list, in file order; the 1-based
//! bank number used by the community is the position within that list.
//!
//! ## Record (12 bytes)
//! ```text
//! [0x00] PackageIndex      (u8) - position in PakFiles.dat
//! [0x01] Padding           (3 bytes)
//! [0x04] BankHeaderOffset  (u32 LE) - absolute offset in the package file
//! [0x08] BankSize          (u32 LE) - PCM bytes following the bank header
//! ```
//! The record count is `file length / 12`; there is no header.

use crate::Result;
use crate::cursor::Cursor;

/// Size of one bank lookup record.
pub const BANK_LOOKUP_SIZE: usize = 12;

/// Location of one bank inside a package file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankLookup {
    /// 0-based index into the package table.
    pub package_index: u8,
    /// Absolute offset of the bank header in the package file.
    pub bank_header_offset: u32,
    /// Byte length of the bank's sample data.
    pub bank_size: u32,
}

impl BankLookup {
    fn read(c: &mut Cursor<'_>) -> Result<Self> {
        let package_index = c.u8()?;
        c.skip(3)?;
        let bank_header_offset = c.le_u32()?;
        let bank_size = c.le_u32()?;
        Ok(Self {
            package_index,
            bank_header_offset,
            bank_size,
        })
    }
}

/// Parsed bank lookup table, in file order.
///
/// Package indices are not checked against the package table here; that
/// happens when a bank is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankLookupTable {
    pub lookups: Vec<BankLookup>,
}

impl BankLookupTable {
    /// Parse a bank lookup table from raw file bytes.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let count = data.len() / BANK_LOOKUP_SIZE;
        let mut c = Cursor::new(data);

        let mut lookups = Vec::with_capacity(count);
        for _ in 0..count {
            lookups.push(BankLookup::read(&mut c)?);
        }
        Ok(Self { lookups })
    }

    /// All banks belonging to package `package_index`, in file order.
    pub fn banks_for(&self, package_index: usize) -> impl Iterator<Item = &BankLookup> {
        self.lookups
            .iter()
            .filter(move |lk| lk.package_index as usize == package_index)
    }

    /// The `bank_index`-th (1-based) bank of package `package_index`.
    pub fn bank(&self, package_index: usize, bank_index: usize) -> Option<&BankLookup> {
        let real = bank_index.checked_sub(1)?;
        self.banks_for(package_index).nth(real)
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}
