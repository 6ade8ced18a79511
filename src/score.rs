//! Fixed-width high score record.
//!
//! Layout (4 bytes):
//! ```text
//! Byte 0..3: Player name, ASCII, right-padded with b' '
//! Byte 3:    Guess count (unsigned, 0..255)
//! ```

use crate::config::{NAME_LEN, NAME_PAD, NAME_REPLACEMENT};
use crate::error::EncodeError;

/// Encoded record size in bytes.
pub const RECORD_SIZE: usize = NAME_LEN + 1;

/// Three-character player name as stored on the EEPROM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlayerName([u8; NAME_LEN]);

impl PlayerName {
    /// Normalize free-form input into a stored name.
    ///
    /// Surrounding whitespace is trimmed, the result is truncated to
    /// `NAME_LEN` characters and right-padded with `NAME_PAD`. Characters
    /// outside printable ASCII become `NAME_REPLACEMENT`.
    pub fn normalize(input: &str) -> Self {
        let mut name = [NAME_PAD; NAME_LEN];
        for (slot, c) in name.iter_mut().zip(input.trim().chars()) {
            *slot = if c.is_ascii_graphic() || c == ' ' {
                c as u8
            } else {
                NAME_REPLACEMENT
            };
        }
        Self(name)
    }

    /// Take a raw name that is already exactly `NAME_LEN` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EncodeError> {
        let name: [u8; NAME_LEN] = bytes
            .try_into()
            .map_err(|_| EncodeError::NameLength(bytes.len()))?;
        Ok(Self(name))
    }

    /// True if every byte is printable ASCII, as `normalize` always produces.
    pub fn is_printable(&self) -> bool {
        self.0.iter().all(|b| (b' '..=b'~').contains(b))
    }

    pub fn as_bytes(&self) -> &[u8; NAME_LEN] {
        &self.0
    }

    /// Name as text. Bytes decoded from a foreign EEPROM image may not be
    /// UTF-8; those render as `NAME_LEN` replacement characters.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("???")
    }
}

/// One leaderboard entry: who won and how many submits it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScoreRecord {
    pub name: PlayerName,
    /// Number of submits including the winning one. Lower is better.
    pub guesses: u8,
}

impl ScoreRecord {
    pub fn new(name: PlayerName, guesses: u8) -> Self {
        Self { name, guesses }
    }

    /// Encode into the 4-byte on-EEPROM form.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[..NAME_LEN].copy_from_slice(self.name.as_bytes());
        out[NAME_LEN] = self.guesses;
        out
    }

    /// Serialise into a byte slice. Returns the number of bytes written.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        if buf.len() < RECORD_SIZE {
            return Err(EncodeError::BufferTooSmall {
                needed: RECORD_SIZE,
                available: buf.len(),
            });
        }
        buf[..RECORD_SIZE].copy_from_slice(&self.encode());
        Ok(RECORD_SIZE)
    }

    /// Decode a record. Every 4-byte pattern is a valid record.
    pub fn decode(bytes: &[u8; RECORD_SIZE]) -> Self {
        Self {
            name: PlayerName([bytes[0], bytes[1], bytes[2]]),
            guesses: bytes[NAME_LEN],
        }
    }
}
