//! Leaderboard persistence over a byte-addressable store.
//!
//! Generic over `embedded_storage::Storage` so the same code drives the
//! 24x32 EEPROM on target (via `eeprom24x`) and `RamStorage` on the host.
//!
//! Known limitation: `persist` is a single block write with no journal.
//! Power loss mid-write can leave a count byte that disagrees with the
//! record block; `load` clamps the count and re-ranks what it finds.
//!
//! An erased part reads back as `0xFF` everywhere. `load` treats that
//! image as an empty table, so a new board starts clean.

use embedded_storage::{ReadStorage, Storage};

use super::{max_records, Leaderboard, COUNT_OFFSET, MAX_ENCODED_LEN, RECORDS_OFFSET};
use crate::config::NAME_LEN;
use crate::error::StoreError;
use crate::score::{PlayerName, ScoreRecord, RECORD_SIZE};

/// Owns the leaderboard region of the backing store. There is exactly one
/// of these per store, so load/merge/persist never race.
pub struct LeaderboardStore<S> {
    storage: S,
    limit: usize,
}

impl<S: ReadStorage> LeaderboardStore<S> {
    /// Wrap a store; the record limit follows from its capacity.
    pub fn new(storage: S) -> Self {
        let limit = max_records(storage.capacity());
        Self { storage, limit }
    }

    /// Maximum number of records this store keeps.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Read the count byte and the record block.
    pub fn load(&mut self) -> Result<Leaderboard, StoreError> {
        let mut count = [0u8; 1];
        self.storage
            .read(COUNT_OFFSET, &mut count)
            .map_err(|_| StoreError::Read)?;

        let raw_count = count[0];
        // A stale or corrupt count must not walk past the usable region.
        let count = (raw_count as usize).min(self.limit);

        let mut block = [0u8; MAX_ENCODED_LEN];
        let block = &mut block[..count * RECORD_SIZE];
        if !block.is_empty() {
            self.storage
                .read(RECORDS_OFFSET, block)
                .map_err(|_| StoreError::Read)?;
        }

        if raw_count == ERASED_BYTE && !written_by_us(block) {
            return Ok(Leaderboard::with_limit(self.limit));
        }

        Ok(Leaderboard::decode(block, self.limit))
    }

    /// Release the underlying store.
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: Storage> LeaderboardStore<S> {
    /// Write the count byte followed by every record, starting at offset 0.
    pub fn persist(&mut self, board: &Leaderboard) -> Result<(), StoreError> {
        debug_assert!(board.len() <= self.limit);

        let mut buf = [0u8; MAX_ENCODED_LEN];
        let len = board
            .encode_into(&mut buf)
            .map_err(|_| StoreError::Write)?;

        self.storage
            .write(COUNT_OFFSET, &buf[..len])
            .map_err(|_| StoreError::Write)
    }

    /// Load, merge `record` at its rank, and write the table back.
    ///
    /// Returns the updated table and the rank the new record landed at
    /// (`None` if the table was full of better scores).
    pub fn record(
        &mut self,
        record: ScoreRecord,
    ) -> Result<(Leaderboard, Option<usize>), StoreError> {
        let mut board = self.load()?;
        let rank = board.merge(record);
        self.persist(&board)?;
        Ok((board, rank))
    }

    /// Reset to an empty table (count byte 0).
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage
            .write(COUNT_OFFSET, &[0])
            .map_err(|_| StoreError::Write)
    }
}

/// Value of every byte of a factory-fresh (erased) EEPROM.
const ERASED_BYTE: u8 = 0xFF;

/// Whether the first record of `block` could have been written by
/// `persist`. Names are always printable, so an erased image (name bytes
/// `0xFF`) is told apart from a genuinely full table.
fn written_by_us(block: &[u8]) -> bool {
    block
        .get(..NAME_LEN)
        .and_then(|name| PlayerName::from_bytes(name).ok())
        .is_some_and(|name| name.is_printable())
}

// RAM-backed store

/// Out-of-range access on a `RamStorage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RamStorageError;

/// `N`-byte store held in RAM. Used by host tests and simulations.
#[derive(Clone, Debug)]
pub struct RamStorage<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Default for RamStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RamStorage<N> {
    /// Zero-filled store (reads back as an empty leaderboard).
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Store in the factory state of an EEPROM: every byte `0xFF`.
    pub const fn erased() -> Self {
        Self { bytes: [0xFF; N] }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn range(&self, offset: u32, len: usize) -> Result<core::ops::Range<usize>, RamStorageError> {
        let start = offset as usize;
        let end = start.checked_add(len).ok_or(RamStorageError)?;
        if end > N {
            return Err(RamStorageError);
        }
        Ok(start..end)
    }
}

impl<const N: usize> ReadStorage for RamStorage<N> {
    type Error = RamStorageError;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, bytes.len())?;
        bytes.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Storage for RamStorage<N> {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let range = self.range(offset, bytes.len())?;
        self.bytes[range].copy_from_slice(bytes);
        Ok(())
    }
}
