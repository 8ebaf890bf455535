//! High-level access to the audio files of a game installation.
//!
//! [`SfxReader`] caches the package and bank lookup tables once
//! [`SfxReader::load`] has run; streams and package files are read from disk
//! on every call and not kept.
//!
//! ```no_run
//! use sfxkit::reader::SfxReader;
//!
//! let mut sfx = SfxReader::new("/games/gta_sa");
//! sfx.load()?;
//! let sound = sfx.sound_effect("SPC_GA", 209, 48)?;
//! std::fs::write("sound.wav", sound.to_wav())?;
//! # Ok::<(), sfxkit::Error>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::formats::lookup::{BankLookup, BankLookupTable};
use crate::formats::pak::PakTable;
use crate::formats::sfx::{self, SoundEffect};
use crate::formats::stream::{AudioStream, StreamName, StreamTrack};
use crate::layout::{Layout, read_file};
use crate::{Error, Result};

/// Reader over one installation root.
///
/// Loading is not synchronised; callers sharing a reader must serialise
/// calls to the `load*` methods.
#[derive(Debug, Clone)]
pub struct SfxReader {
    root: PathBuf,
    layout: Layout,
    packages: Option<PakTable>,
    lookups: Option<BankLookupTable>,
}

impl SfxReader {
    /// Reader using the default [`Layout`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, Layout::default())
    }

    pub fn with_layout(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
            packages: None,
            lookups: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and cache `PakFiles.dat`.
    pub fn load_package_entries(&mut self) -> Result<&PakTable> {
        let path = self.layout.pak_files_path(&self.root);
        let table = PakTable::parse(&read_file(&path)?)?;
        debug!(path = %path.display(), packages = table.len(), "loaded package table");
        Ok(self.packages.insert(table))
    }

    /// Load and cache `BankLkup.dat`.
    pub fn load_bank_lookups(&mut self) -> Result<&BankLookupTable> {
        let path = self.layout.bank_lookup_path(&self.root);
        let table = BankLookupTable::parse(&read_file(&path)?)?;
        debug!(path = %path.display(), banks = table.len(), "loaded bank lookup table");
        Ok(self.lookups.insert(table))
    }

    /// Load both tables.
    pub fn load(&mut self) -> Result<()> {
        self.load_package_entries()?;
        self.load_bank_lookups()?;
        Ok(())
    }

    /// Whether both tables have been loaded.
    pub fn is_loaded(&self) -> bool {
        self.packages.is_some() && self.lookups.is_some()
    }

    pub fn package_entries(&self) -> Option<&PakTable> {
        self.packages.as_ref()
    }

    pub fn bank_lookups(&self) -> Option<&BankLookupTable> {
        self.lookups.as_ref()
    }

    /// Read, decode and parse stream `name` (e.g. `AMBIENCE`).
    pub fn audio_stream(&self, name: &str) -> Result<AudioStream> {
        let stream: StreamName = name.parse()?;
        let path = self.layout.stream_path(&self.root, stream);
        let raw = read_file(&path)?;
        debug!(stream = %stream, bytes = raw.len(), "decoding audio stream");
        AudioStream::decode_and_parse(&raw)
    }

    /// Track `track_id` (1-based) of stream `name`.
    pub fn stream_track(&self, name: &str, track_id: usize) -> Result<StreamTrack> {
        self.audio_stream(name)?.into_track(track_id)
    }

    /// Lookup of bank `bank_index` (1-based) of package `package`.
    ///
    /// Fails with [`Error::InvalidPackageName`] if the package table is not
    /// loaded or does not list `package`, and with
    /// [`Error::InvalidBankIndex`] if the lookup table is not loaded or the
    /// package has fewer banks.
    pub fn lookup(&self, package: &str, bank_index: usize) -> Result<BankLookup> {
        let package_index = self.package_index(package)?;
        self.lookups
            .as_ref()
            .and_then(|t| t.bank(package_index, bank_index))
            .copied()
            .ok_or_else(|| Error::InvalidBankIndex {
                package: package.to_owned(),
                bank_index,
            })
    }

    /// Extract slot `slot_index` of bank `bank_index` of package `package`
    /// (both 1-based).
    pub fn sound_effect(&self, package: &str, bank_index: usize, slot_index: usize) -> Result<SoundEffect> {
        let lookup = self.lookup(package, bank_index)?;
        let path = self.layout.package_path(&self.root, package);
        let data = read_file(&path)?;
        let effect = sfx::extract_sound(&data, &lookup, slot_index)?;
        debug!(
            package,
            bank = bank_index,
            slot = slot_index,
            sample_rate = effect.sample_rate,
            bytes = effect.sound_data.len(),
            "extracted sound effect"
        );
        Ok(effect)
    }

    fn package_index(&self, package: &str) -> Result<usize> {
        self.packages
            .as_ref()
            .and_then(|t| t.position(package))
            .ok_or_else(|| Error::InvalidPackageName(package.to_owned()))
    }
}
