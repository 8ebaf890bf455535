//! **sfxkit** - a Rust library for reading GTA: San Andreas audio files.
//!
//! # Supported files
//! | Module | File |
//! |--------|------|
//! | [`formats::pak`]    | `PakFiles.dat` - package name table |
//! | [`formats::lookup`] | `BankLkup.dat` - bank locations inside packages |
//! | [`formats::sfx`]    | `audio/sfx/*` - sound effect packages |
//! | [`formats::stream`] | `audio/streams/*` - obfuscated music streams with beat tables |
//! | [`formats::wav`]    | WAV output for extracted sound effects |
//!
//! [`reader::SfxReader`] ties these together over an installation
//! directory; the format modules work on in-memory bytes alone.

pub mod crypto;
pub mod cursor;
pub mod error;
pub mod formats;
pub mod layout;
pub mod reader;

pub use error::{Error, Result};
