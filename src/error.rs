//! Library-wide error and result types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout sfxkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Every variant carries the operand values that caused it, so a failed
/// lookup can be diagnosed without re-running it.
#[derive(Debug, Error)]
pub enum Error {
    /// A source file does not exist under the installation root.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The stream name is not one of the known stream files.
    #[error("invalid stream name: {0}")]
    InvalidStreamName(String),

    /// A 1-based track id outside `[1, track_count]`.
    #[error("invalid track id: {track_id} (stream has {track_count} tracks)")]
    InvalidTrackId { track_id: usize, track_count: usize },

    /// The package name is not present in the loaded package table.
    #[error("invalid package name: {0}")]
    InvalidPackageName(String),

    /// No bank lookup exists for this package/bank pair, or the lookup
    /// table has not been loaded.
    #[error("invalid bank index: {bank_index} for package {package}")]
    InvalidBankIndex { package: String, bank_index: usize },

    /// A bank header declares more sounds than the format allows.
    #[error("capacity exceeded: bank declares {count} sounds (max {max})")]
    CapacityExceeded { count: usize, max: usize },

    /// A 1-based slot index outside `[1, sound_count]`.
    #[error("invalid slot index: {slot_index} (bank has {sound_count} sounds)")]
    InvalidSlotIndex { slot_index: usize, sound_count: usize },

    /// A read would run past the end of an in-memory buffer.
    #[error("out of bounds: {requested} bytes at offset {offset} ({available} available)")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        available: usize,
    },

    /// Offset arithmetic produced an inverted range.
    #[error("invalid range: {start}..{end}")]
    InvalidRange { start: u64, end: u64 },

    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
