//! Unified error type for guessbox.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

use crate::config::NAME_LEN;

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The leaderboard EEPROM could not be read or written.
    Store(StoreError),

    /// A round is already in progress; only one session may exist at a time.
    SessionActive,

    /// A score was requested for a round that has not been won.
    NotWon,
}

/// Record encoding failures. Raised by the codec itself; the store maps
/// them to `StoreError::Write` since a table it built always fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// A raw name was not exactly `NAME_LEN` bytes.
    NameLength(usize),
    /// Destination buffer cannot hold a full record.
    BufferTooSmall { needed: usize, available: usize },
}

/// Backing-store failures. The driver error is logged at the call site
/// and not carried, keeping this enum `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Reading the count byte or record block failed.
    Read,
    /// Writing the count byte or record block failed.
    Write,
}

// Convenience conversions

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NameLength(len) => {
                write!(f, "name is {} bytes, expected {}", len, NAME_LEN)
            }
            EncodeError::BufferTooSmall { needed, available } => {
                write!(f, "record needs {} bytes, buffer has {}", needed, available)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read => f.write_str("leaderboard store read failed"),
            StoreError::Write => f.write_str("leaderboard store write failed"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(e) => write!(f, "{}", e),
            Error::SessionActive => f.write_str("a round is already active"),
            Error::NotWon => f.write_str("round has not been won"),
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
