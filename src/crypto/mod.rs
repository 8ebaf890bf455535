//! De-obfuscation of audio files.
//!
//! Only the music stream files are obfuscated; package files and the config
//! tables are stored in the clear. Decode a stream file with
//! [`stream::decode`] before handing it to
//! [`crate::formats::stream::AudioStream::parse`].
//!
//! ## Submodules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stream`] | 16-byte cycling XOR key over whole stream files |

pub mod stream;
