//! Where the audio files live inside a game installation.
//!
//! ```text
//! <root>/audio/CONFIG/PakFiles.dat
//! <root>/audio/CONFIG/BankLkup.dat
//! <root>/audio/streams/<STREAM>
//! <root>/audio/sfx/<PACKAGE>
//! ```
//!
//! Stream and package file names are upper case on disk. Override any part
//! of the default when working with a repacked or renamed tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::formats::stream::StreamName;
use crate::{Error, Result};

/// Paths of the audio files relative to the installation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config_dir: PathBuf,
    pub pak_files: PathBuf,
    pub bank_lookup: PathBuf,
    pub streams_dir: PathBuf,
    pub sfx_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("audio").join("CONFIG"),
            pak_files: PathBuf::from("PakFiles.dat"),
            bank_lookup: PathBuf::from("BankLkup.dat"),
            streams_dir: PathBuf::from("audio").join("streams"),
            sfx_dir: PathBuf::from("audio").join("sfx"),
        }
    }
}

impl Layout {
    pub fn pak_files_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config_dir).join(&self.pak_files)
    }

    pub fn bank_lookup_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config_dir).join(&self.bank_lookup)
    }

    pub fn stream_path(&self, root: &Path, stream: StreamName) -> PathBuf {
        root.join(&self.streams_dir).join(stream.as_str())
    }

    pub fn package_path(&self, root: &Path, package: &str) -> PathBuf {
        root.join(&self.sfx_dir).join(package.to_ascii_uppercase())
    }
}

/// Read a whole file, reporting a missing one as [`Error::FileNotFound`].
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_install_tree() {
        let layout = Layout::default();
        let root = Path::new("gta");
        assert_eq!(
            layout.pak_files_path(root),
            root.join("audio").join("CONFIG").join("PakFiles.dat")
        );
        assert_eq!(
            layout.bank_lookup_path(root),
            root.join("audio").join("CONFIG").join("BankLkup.dat")
        );
        assert_eq!(
            layout.stream_path(root, StreamName::Ambience),
            root.join("audio").join("streams").join("AMBIENCE")
        );
        assert_eq!(
            layout.package_path(root, "spc_ga"),
            root.join("audio").join("sfx").join("SPC_GA")
        );
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.dat");
        match read_file(&path) {
            Err(Error::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
