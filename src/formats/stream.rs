//! Music stream files (`audio/streams/*`).
//!
//! A stream file is XOR-obfuscated as a whole (see
//! [`crate::crypto::stream`]). Once decoded it is a run of tracks laid out
//! back to back with no file header and no track count:
//!
//! ## Track layout
//! ```text
//! [0x0000] BeatTable    (1000 × 8 bytes)
//! [0x1F40] LengthTable  (8 × 8 bytes)
//! [0x1F80] Magic        (4 bytes, not checked)
//! [0x1F84] Payload      (Ogg Vorbis, length from LengthTable)
//! ```
//!
//! ## Beat entry (8 bytes)
//! ```text
//! [0x00] Timing   (i32 LE) - -1 marks an unused entry
//! [0x04] Control  (i32 LE) - see BeatControl
//! ```
//!
//! ## Length entry (8 bytes)
//! ```text
//! [0x00] OggSize     (u32 LE)
//! [0x04] SampleRate  (u32 LE)
//! ```
//! The payload length is the `OggSize` of the **last** entry whose size is
//! non-zero.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::crypto::stream as cipher;
use crate::cursor::Cursor;
use crate::{Error, Result};

/// Number of entries in a beat table.
pub const BEAT_COUNT: usize = 1000;
/// Size of a beat entry.
pub const BEAT_ENTRY_SIZE: usize = 8;
/// Size of a beat table.
pub const BEAT_TABLE_SIZE: usize = BEAT_COUNT * BEAT_ENTRY_SIZE;
/// Number of entries in a length table.
pub const LENGTH_COUNT: usize = 8;
/// Size of a length table.
pub const LENGTH_TABLE_SIZE: usize = LENGTH_COUNT * 8;
/// Size of the separator between the length table and the payload.
pub const TRACK_MAGIC_SIZE: usize = 4;
/// Beat timing value of an unused entry.
pub const NO_BEAT: i32 = -1;

/// The stream files shipped with the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamName {
    Aa,
    Adverts,
    Ambience,
    Beats,
    Ch,
    Co,
    Cr,
    Cutscene,
    Ds,
    Hc,
    Mh,
    Mr,
    Nj,
    Re,
    Rg,
    Tk,
}

impl StreamName {
    pub const ALL: [StreamName; 16] = [
        Self::Aa,
        Self::Adverts,
        Self::Ambience,
        Self::Beats,
        Self::Ch,
        Self::Co,
        Self::Cr,
        Self::Cutscene,
        Self::Ds,
        Self::Hc,
        Self::Mh,
        Self::Mr,
        Self::Nj,
        Self::Re,
        Self::Rg,
        Self::Tk,
    ];

    /// File name of this stream, as stored on disk.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Adverts => "ADVERTS",
            Self::Ambience => "AMBIENCE",
            Self::Beats => "BEATS",
            Self::Ch => "CH",
            Self::Co => "CO",
            Self::Cr => "CR",
            Self::Cutscene => "CUTSCENE",
            Self::Ds => "DS",
            Self::Hc => "HC",
            Self::Mh => "MH",
            Self::Mr => "MR",
            Self::Nj => "NJ",
            Self::Re => "RE",
            Self::Rg => "RG",
            Self::Tk => "TK",
        }
    }
}

impl FromStr for StreamName {
    type Err = Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStreamName(s.to_owned()))
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known beat control codes.
///
/// Dance codes are shown with their keyboard / PS2 / Xbox prompts; lowrider
/// codes with their stick direction / numpad keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum BeatControl {
    /// Down arrow, PS2 X, Xbox A.
    Down = 0x01,
    /// Left arrow, PS2 square, Xbox X.
    Left = 0x02,
    /// Up arrow, PS2 triangle, Xbox Y.
    Up = 0x03,
    /// Right arrow, PS2 circle, Xbox B.
    Right = 0x04,
    /// Numpad 6.
    StickRight = 0x09,
    /// Numpad 4.
    StickLeft = 0x0A,
    /// Numpad 8+6.
    StickUpRight = 0x0B,
    /// Numpad 2+4.
    StickDownLeft = 0x0C,
    /// Numpad 8.
    StickUp = 0x0D,
    /// Numpad 2.
    StickDown = 0x0E,
    /// Numpad 8+4.
    StickUpLeft = 0x0F,
    /// Numpad 2+6.
    StickDownRight = 0x10,
    EndOfBeat = 0x21,
}

impl TryFrom<i32> for BeatControl {
    type Error = i32;

    fn try_from(v: i32) -> std::result::Result<Self, i32> {
        Ok(match v {
            0x01 => Self::Down,
            0x02 => Self::Left,
            0x03 => Self::Up,
            0x04 => Self::Right,
            0x09 => Self::StickRight,
            0x0A => Self::StickLeft,
            0x0B => Self::StickUpRight,
            0x0C => Self::StickDownLeft,
            0x0D => Self::StickUp,
            0x0E => Self::StickDown,
            0x0F => Self::StickUpLeft,
            0x10 => Self::StickDownRight,
            0x21 => Self::EndOfBeat,
            other => return Err(other),
        })
    }
}

/// One timed control event of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub timing: i32,
    pub control: i32,
}

impl Beat {
    /// The control code, if it is one of the known [`BeatControl`]s.
    pub fn control(&self) -> Option<BeatControl> {
        BeatControl::try_from(self.control).ok()
    }
}

/// Parse a beat table, dropping unused entries and keeping order.
pub fn parse_beats(section: &[u8]) -> Result<Vec<Beat>> {
    let mut c = Cursor::new(section);
    let mut beats = Vec::new();
    for _ in 0..BEAT_COUNT {
        let timing = c.le_i32()?;
        let control = c.le_i32()?;
        if timing == NO_BEAT {
            continue;
        }
        beats.push(Beat { timing, control });
    }
    Ok(beats)
}

/// One entry of a track's length table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthEntry {
    pub ogg_size: u32,
    pub sample_rate: u32,
}

/// A track's length table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthTable {
    pub entries: [LengthEntry; LENGTH_COUNT],
}

impl LengthTable {
    pub fn parse(section: &[u8]) -> Result<Self> {
        let mut c = Cursor::new(section);
        let mut entries = [LengthEntry::default(); LENGTH_COUNT];
        for e in &mut entries {
            e.ogg_size = c.le_u32()?;
            e.sample_rate = c.le_u32()?;
        }
        Ok(Self { entries })
    }

    /// Payload length: the size of the last entry with a non-zero size, or
    /// zero if there is none.
    pub fn audio_len(&self) -> u32 {
        self.entries
            .iter()
            .rev()
            .map(|e| e.ogg_size)
            .find(|&size| size > 0)
            .unwrap_or(0)
    }
}

/// One track of a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamTrack {
    pub beats: Vec<Beat>,
    /// Ogg Vorbis payload, passed through untouched.
    pub audio_data: Vec<u8>,
}

impl StreamTrack {
    fn read(c: &mut Cursor<'_>) -> Result<Self> {
        let beats = parse_beats(c.section(BEAT_TABLE_SIZE)?)?;
        let lengths = LengthTable::parse(c.section(LENGTH_TABLE_SIZE)?)?;
        c.skip(TRACK_MAGIC_SIZE)?;
        let audio_data = c.section(lengths.audio_len() as usize)?.to_vec();
        Ok(Self { beats, audio_data })
    }
}

/// All tracks of a stream file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioStream {
    pub tracks: Vec<StreamTrack>,
}

impl AudioStream {
    /// Parse an already-decoded stream file.
    ///
    /// A track cut short by the end of the buffer fails the whole stream
    /// with [`Error::OutOfBounds`].
    pub fn parse(decoded: &[u8]) -> Result<Self> {
        let mut c = Cursor::new(decoded);
        let mut tracks = Vec::new();
        while c.has_more() {
            let start = c.position();
            let track = StreamTrack::read(&mut c)?;
            trace!(
                track = tracks.len() + 1,
                offset = start,
                beats = track.beats.len(),
                audio_len = track.audio_data.len(),
                "read stream track"
            );
            tracks.push(track);
        }
        debug!(tracks = tracks.len(), bytes = decoded.len(), "parsed audio stream");
        Ok(Self { tracks })
    }

    /// Decode a raw stream file and parse it.
    pub fn decode_and_parse(raw: &[u8]) -> Result<Self> {
        Self::parse(&cipher::decode(raw))
    }

    /// Track `track_id` (1-based).
    pub fn track(&self, track_id: usize) -> Result<&StreamTrack> {
        let index = self.track_index(track_id)?;
        Ok(&self.tracks[index])
    }

    /// Take track `track_id` (1-based) out of the stream.
    pub fn into_track(mut self, track_id: usize) -> Result<StreamTrack> {
        let index = self.track_index(track_id)?;
        Ok(self.tracks.swap_remove(index))
    }

    fn track_index(&self, track_id: usize) -> Result<usize> {
        if track_id < 1 || track_id > self.tracks.len() {
            return Err(Error::InvalidTrackId {
                track_id,
                track_count: self.tracks.len(),
            });
        }
        Ok(track_id - 1)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build one decoded track: beats fill the first slots of the table and
    /// the rest are unused.
    pub(crate) fn track_bytes(beats: &[(i32, i32)], lengths: &[(u32, u32)], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for i in 0..BEAT_COUNT {
            let (t, c) = beats.get(i).copied().unwrap_or((NO_BEAT, NO_BEAT));
            out.extend_from_slice(&t.to_le_bytes());
            out.extend_from_slice(&c.to_le_bytes());
        }
        for i in 0..LENGTH_COUNT {
            let (size, rate) = lengths.get(i).copied().unwrap_or((0, 0));
            out.extend_from_slice(&size.to_le_bytes());
            out.extend_from_slice(&rate.to_le_bytes());
        }
        out.extend_from_slice(b"OggS");
        out.extend_from_slice(payload);
        out
    }

    #[test]
    fn unused_beats_are_dropped_in_order() {
        let data = track_bytes(&[(-1, -1), (5, 2), (-1, -1), (9, 3)], &[], &[]);
        let beats = parse_beats(&data[..BEAT_TABLE_SIZE]).unwrap();
        assert_eq!(
            beats,
            [
                Beat { timing: 5, control: 2 },
                Beat { timing: 9, control: 3 }
            ]
        );
    }

    #[test]
    fn last_nonzero_length_wins() {
        let data = track_bytes(&[], &[(100, 44100), (0, 0), (250, 22050), (0, 0)], &[]);
        let table = LengthTable::parse(&data[BEAT_TABLE_SIZE..][..LENGTH_TABLE_SIZE]).unwrap();
        assert_eq!(table.audio_len(), 250);
        assert_eq!(table.entries[0].sample_rate, 44100);
    }

    #[test]
    fn all_zero_lengths_mean_empty_payload() {
        assert_eq!(LengthTable::default().audio_len(), 0);
    }

    #[test]
    fn parses_consecutive_tracks() {
        let mut data = track_bytes(&[(10, 1), (20, 0x21)], &[(3, 0)], b"abc");
        data.extend(track_bytes(&[], &[(0, 0), (5, 32000)], b"defgh"));

        let stream = AudioStream::parse(&data).unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.tracks[0].audio_data, b"abc");
        assert_eq!(stream.tracks[0].beats[1].control(), Some(BeatControl::EndOfBeat));
        assert!(stream.tracks[1].beats.is_empty());
        assert_eq!(stream.tracks[1].audio_data, b"defgh");
    }

    #[test]
    fn decode_and_parse_undoes_obfuscation() {
        let plain = track_bytes(&[(1, 2)], &[(4, 0)], b"wxyz");
        let stream = AudioStream::decode_and_parse(&cipher::encode(&plain)).unwrap();
        assert_eq!(stream.tracks[0].beats, [Beat { timing: 1, control: 2 }]);
        assert_eq!(stream.tracks[0].audio_data, b"wxyz");
    }

    #[test]
    fn truncated_payload_fails_whole_stream() {
        let mut data = track_bytes(&[], &[(2, 0)], b"ok");
        let mut second = track_bytes(&[], &[(100, 0)], b"short");
        data.append(&mut second);
        assert!(matches!(
            AudioStream::parse(&data),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn truncated_beat_table_fails() {
        let data = vec![0u8; 100];
        assert!(matches!(
            AudioStream::parse(&data),
            Err(Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_stream_has_no_tracks() {
        assert!(AudioStream::parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn track_ids_are_one_based() {
        let mut data = track_bytes(&[], &[(1, 0)], b"a");
        data.extend(track_bytes(&[], &[(1, 0)], b"b"));
        let stream = AudioStream::parse(&data).unwrap();

        assert_eq!(stream.track(1).unwrap().audio_data, b"a");
        assert_eq!(stream.track(2).unwrap().audio_data, b"b");
        for bad in [0, 3] {
            assert!(matches!(
                stream.track(bad),
                Err(Error::InvalidTrackId { track_id, track_count: 2 }) if track_id == bad
            ));
        }
        assert_eq!(stream.into_track(2).unwrap().audio_data, b"b");
    }

    #[test]
    fn stream_names_parse_case_insensitively() {
        assert_eq!("ambience".parse::<StreamName>().unwrap(), StreamName::Ambience);
        assert_eq!("Tk".parse::<StreamName>().unwrap(), StreamName::Tk);
        assert!(matches!(
            "RADIO".parse::<StreamName>(),
            Err(Error::InvalidStreamName(name)) if name == "RADIO"
        ));
        for name in StreamName::ALL {
            assert_eq!(name.to_string().parse::<StreamName>().unwrap(), name);
        }
    }

    #[test]
    fn unknown_control_codes_are_none() {
        let beat = Beat { timing: 0, control: 0x05 };
        assert_eq!(beat.control(), None);
        assert_eq!(BeatControl::try_from(0x0C), Ok(BeatControl::StickDownLeft));
    }
}
