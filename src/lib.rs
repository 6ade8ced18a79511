//! Host-testable core of guessbox.
//!
//! This crate holds the pure game logic - score record codec, leaderboard
//! ranking and persistence, closeness feedback laws, the session state
//! machine and console text - so it can be tested on the host (no embedded
//! hardware required).
//!
//! Usage: `cargo test --lib` (unit) or `cargo test` (unit + integration)
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and pulls its hardware glue from `src/hw/`. Build it with
//! `--features embedded` for `thumbv7em-none-eabihf`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod feedback;
pub mod game;
pub mod leaderboard;
pub mod score;
pub mod ui;

pub use error::{EncodeError, Error, StoreError};
pub use game::{Action, GameSession, Outcome, Phase};
pub use leaderboard::{Leaderboard, LeaderboardStore};
pub use score::{PlayerName, ScoreRecord};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
