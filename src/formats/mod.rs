//! Parsers for the audio file families.
//!
//! All parsers follow the same conventions:
//!
//! * **In-memory input** - each `parse` takes the whole file (or one fixed
//!   section of it) as a byte slice and reads it with
//!   [`crate::cursor::Cursor`].
//! * **Counts from sizes** - tables carry no record count; it is the input
//!   length divided by the record size.
//! * **Bounds-checked** - a read past the end of the input fails with
//!   [`crate::Error::OutOfBounds`]; nothing is padded or truncated.
//! * **Decoding is separate** - stream files must be run through
//!   [`crate::crypto::stream::decode`] first (or use
//!   [`stream::AudioStream::decode_and_parse`]).
//!
//! ## Format overview
//!
//! | Module     | File          | Description |
//! |------------|---------------|-------------|
//! | [`pak`]    | PakFiles.dat  | 52-byte package names; position is the package index |
//! | [`lookup`] | BankLkup.dat  | 12-byte records placing each bank inside a package |
//! | [`sfx`]    | audio/sfx/*   | Bank headers (up to 400 sounds) followed by mono 16-bit PCM |
//! | [`stream`] | audio/streams/* | Tracks of beat table, length table and Ogg Vorbis payload |
//! | [`wav`]    | -             | 44-byte RIFF/WAVE header for extracted sounds |

pub mod lookup;
pub mod pak;
pub mod sfx;
pub mod stream;
pub mod wav;
