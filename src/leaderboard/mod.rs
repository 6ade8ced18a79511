//! Ranked, capacity-bounded high score table.
//!
//! EEPROM layout:
//! ```text
//! Byte 0:              count (0..255)
//! Bytes 1..1+4*count:  `count` encoded `ScoreRecord`s, best (fewest guesses) first
//! Beyond that:         stale, never trusted
//! ```
//!
//! The table holds at most `min(255, (capacity - HEADER_RESERVE) / 4)`
//! records. Merging into a full table drops the worst-ranked record.

mod store;


pub use store::{LeaderboardStore, RamStorage, RamStorageError};

use heapless::Vec;

use crate::config::HEADER_RESERVE;
use crate::error::EncodeError;
use crate::score::{ScoreRecord, RECORD_SIZE};

/// Offset of the count byte.
pub const COUNT_OFFSET: u32 = 0;

/// Offset of the first record.
pub const RECORDS_OFFSET: u32 = 1;

/// Upper bound set by the one-byte count.
pub const MAX_RECORDS: usize = u8::MAX as usize;

/// Largest encoded table (count byte + every record).
pub const MAX_ENCODED_LEN: usize = 1 + MAX_RECORDS * RECORD_SIZE;

/// How many records fit a store of `capacity_bytes`.
pub const fn max_records(capacity_bytes: usize) -> usize {
    let by_bytes = capacity_bytes.saturating_sub(HEADER_RESERVE) / RECORD_SIZE;
    if by_bytes < MAX_RECORDS {
        by_bytes
    } else {
        MAX_RECORDS
    }
}

/// In-memory copy of the high score table, always sorted ascending by
/// guess count. Records with equal scores keep arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    records: Vec<ScoreRecord, MAX_RECORDS>,
    limit: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Leaderboard {
    /// Empty table bounded only by the count byte.
    pub const fn new() -> Self {
        Self::with_limit(MAX_RECORDS)
    }

    /// Empty table holding at most `limit` records (clamped to `MAX_RECORDS`).
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: if limit < MAX_RECORDS { limit } else { MAX_RECORDS },
        }
    }

    /// Rebuild a table from a record block read off the store.
    ///
    /// The block is ranked with a stable sort so a hand-edited or half
    /// written image still comes back ordered. Trailing bytes that do not
    /// form a full record are ignored.
    pub fn decode(block: &[u8], limit: usize) -> Self {
        let mut board = Self::with_limit(limit);
        for chunk in block.chunks_exact(RECORD_SIZE).take(board.limit) {
            let mut raw = [0u8; RECORD_SIZE];
            raw.copy_from_slice(chunk);
            // Cannot overflow: `take(limit)` and limit <= MAX_RECORDS.
            let _ = board.records.push(ScoreRecord::decode(&raw));
        }
        sort_stable(&mut board.records);
        board
    }

    /// Serialise as `[count][records...]`. Returns the number of bytes written.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let needed = self.encoded_len();
        if buf.len() < needed {
            return Err(EncodeError::BufferTooSmall {
                needed,
                available: buf.len(),
            });
        }
        buf[0] = self.count();
        let mut offset = 1;
        for record in &self.records {
            offset += record.encode_into(&mut buf[offset..])?;
        }
        Ok(offset)
    }

    /// Bytes needed to store this table.
    pub fn encoded_len(&self) -> usize {
        1 + self.records.len() * RECORD_SIZE
    }

    /// Insert a new score at its rank.
    ///
    /// Returns the zero-based rank, or `None` when the table is full and
    /// the new score does not beat the current worst (it is the record
    /// truncation drops).
    pub fn merge(&mut self, record: ScoreRecord) -> Option<usize> {
        if self.records.len() >= self.limit {
            match self.records.last() {
                Some(worst) if record.guesses < worst.guesses => {
                    self.records.pop();
                }
                _ => return None,
            }
        }

        // Ties go after existing entries: arrival order wins.
        let rank = self
            .records
            .partition_point(|r| r.guesses <= record.guesses);
        self.records.insert(rank, record).ok()?;
        Some(rank)
    }

    /// Best `n` scores (fewer if the table is shorter).
    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Stored count byte. Always equals `records().len()`.
    pub fn count(&self) -> u8 {
        self.records.len() as u8
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Stable insertion sort by guess count.
///
/// `core` only offers unstable sorts without `alloc`; tables are at most
/// 255 entries and usually already ordered, so this is linear in practice.
fn sort_stable(records: &mut [ScoreRecord]) {
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && records[j - 1].guesses > records[j].guesses {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}
