//! Unit tests for the game session state machine.
//!
//! These tests run on the host (not embedded) and drive the session with
//! scripted actions and a fixed RNG.

use embedded_storage::{ReadStorage, Storage};
use rand::rngs::mock::StepRng;

use super::{Action, GameSession, Outcome, Phase};
use crate::error::{Error, StoreError};
use crate::leaderboard::{LeaderboardStore, RamStorage, RamStorageError};
use crate::score::PlayerName;

fn active_with_target(target: u8) -> GameSession {
    let mut session = GameSession::new();
    session.start_with_target(target).unwrap();
    session
}

// ═══════════════════════════════════════════════════════════════════════════
// Lifecycle Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn new_session_is_idle() {
    let session = GameSession::new();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.is_active());
}

#[test]
fn start_draws_target_from_rng() {
    let mut session = GameSession::new();
    session.start(&mut StepRng::new(6, 0)).unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.target(), 6);
    assert_eq!(session.guess(), 0);
    assert_eq!(session.attempts(), 0);
}

#[test]
fn start_maps_rng_into_range() {
    let mut session = GameSession::new();
    session.start(&mut StepRng::new(13, 0)).unwrap();
    assert_eq!(session.target(), 5);
}

#[test]
fn targets_cover_whole_range() {
    let mut rng = StepRng::new(0, 1);
    let mut seen = [false; 8];
    for _ in 0..8 {
        let mut session = GameSession::new();
        session.start(&mut rng).unwrap();
        seen[session.target() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn start_refused_while_active() {
    let mut session = active_with_target(3);
    session.handle(Action::Increase);
    assert_eq!(session.start_with_target(1), Err(Error::SessionActive));
    // The running round is untouched.
    assert_eq!(session.target(), 3);
    assert_eq!(session.guess(), 1);
}

#[test]
fn start_allowed_after_finish() {
    let mut session = active_with_target(0);
    assert_eq!(session.handle(Action::Submit), Outcome::Won { attempts: 1 });
    // Won rounds may be restarted directly; state is fully reset.
    session.start_with_target(4).unwrap();
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.guess(), 0);
}

#[test]
fn actions_ignored_when_idle() {
    let mut session = GameSession::new();
    assert_eq!(session.handle(Action::Increase), Outcome::Ignored);
    assert_eq!(session.handle(Action::Submit), Outcome::Ignored);
    assert_eq!(session.handle(Action::Cancel), Outcome::Ignored);
    assert_eq!(session.guess(), 0);
    assert_eq!(session.attempts(), 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Guess / Submit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn increase_wraps_after_eight_presses() {
    let mut session = active_with_target(5);
    for expected in 1..8 {
        assert_eq!(
            session.handle(Action::Increase),
            Outcome::GuessChanged(expected)
        );
    }
    assert_eq!(session.handle(Action::Increase), Outcome::GuessChanged(0));
    assert_eq!(session.guess(), 0);
    assert_eq!(session.attempts(), 0);
}

#[test]
fn miss_counts_attempt_and_reports_feedback() {
    let mut session = active_with_target(6);
    for _ in 0..4 {
        session.handle(Action::Increase);
    }
    match session.handle(Action::Submit) {
        Outcome::Miss(fb) => {
            assert_eq!(fb.distance, 2);
            assert_eq!(fb.brightness, 66);
            assert_eq!(fb.buzzer_hz, Some(2));
        }
        other => panic!("expected miss, got {:?}", other),
    }
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.phase(), Phase::Active);
}

#[test]
fn win_after_six_increases_and_one_submit() {
    let mut session = active_with_target(6);
    for _ in 0..6 {
        session.handle(Action::Increase);
    }
    assert_eq!(session.handle(Action::Submit), Outcome::Won { attempts: 1 });
    assert_eq!(session.phase(), Phase::Won);

    let record = session.score(PlayerName::normalize("ann")).unwrap();
    assert_eq!(record.guesses, 1);
    assert_eq!(record.name.as_str(), "ann");
}

#[test]
fn winning_submit_is_counted() {
    let mut session = active_with_target(2);
    session.handle(Action::Submit); // 0: miss
    session.handle(Action::Increase);
    session.handle(Action::Submit); // 1: miss
    session.handle(Action::Increase);
    assert_eq!(session.handle(Action::Submit), Outcome::Won { attempts: 3 });
}

#[test]
fn actions_after_win_are_ignored() {
    let mut session = active_with_target(0);
    session.handle(Action::Submit);
    assert_eq!(session.handle(Action::Increase), Outcome::Ignored);
    assert_eq!(session.handle(Action::Submit), Outcome::Ignored);
    assert_eq!(session.attempts(), 1);
}

#[test]
fn attempts_saturate_at_one_byte() {
    let mut session = active_with_target(7);
    for _ in 0..300 {
        session.handle(Action::Submit);
    }
    assert_eq!(session.attempts(), u8::MAX);
}

// ═══════════════════════════════════════════════════════════════════════════
// Cancel / Finish Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn cancel_discards_round() {
    let mut session = active_with_target(4);
    session.handle(Action::Increase);
    session.handle(Action::Submit);
    assert_eq!(session.handle(Action::Cancel), Outcome::Cancelled);
    assert_eq!(session.phase(), Phase::Cancelled);
    assert_eq!(
        session.score(PlayerName::normalize("x")),
        Err(Error::NotWon)
    );
}

#[test]
fn score_requires_win() {
    let session = active_with_target(4);
    assert_eq!(
        session.score(PlayerName::normalize("abc")),
        Err(Error::NotWon)
    );
}

#[test]
fn finish_returns_to_idle() {
    let mut session = active_with_target(0);
    session.handle(Action::Submit);
    session.finish();
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.attempts(), 0);

    let mut cancelled = active_with_target(3);
    cancelled.handle(Action::Cancel);
    cancelled.finish();
    assert_eq!(cancelled.phase(), Phase::Idle);
}

#[test]
fn finish_leaves_active_round_alone() {
    let mut session = active_with_target(3);
    session.handle(Action::Increase);
    session.finish();
    assert_eq!(session.phase(), Phase::Active);
    assert_eq!(session.guess(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Save Tests
// ═══════════════════════════════════════════════════════════════════════════

/// EEPROM with its write-protect pin asserted: reads work, writes fail.
struct WriteProtected(RamStorage<64>);

impl ReadStorage for WriteProtected {
    type Error = RamStorageError;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        self.0.read(offset, bytes)
    }

    fn capacity(&self) -> usize {
        self.0.capacity()
    }
}

impl Storage for WriteProtected {
    fn write(&mut self, _offset: u32, _bytes: &[u8]) -> Result<(), Self::Error> {
        Err(RamStorageError)
    }
}

fn won_in(attempts: u8) -> GameSession {
    let mut session = active_with_target(1);
    for _ in 1..attempts {
        session.handle(Action::Submit);
    }
    session.handle(Action::Increase);
    session.handle(Action::Submit);
    session
}

#[test]
fn save_records_and_returns_to_idle() {
    let mut store = LeaderboardStore::new(RamStorage::<64>::new());
    let mut session = won_in(2);

    assert_eq!(session.save(&mut store, PlayerName::normalize("Ann")), Ok(Some(0)));
    assert_eq!(session.phase(), Phase::Idle);

    let board = store.load().unwrap();
    assert_eq!(board.count(), 1);
    assert_eq!(board.records()[0].guesses, 2);
}

#[test]
fn failed_save_still_ends_round() {
    let mut store = LeaderboardStore::new(WriteProtected(RamStorage::new()));
    let mut session = won_in(1);

    assert_eq!(
        session.save(&mut store, PlayerName::normalize("Ann")),
        Err(Error::Store(StoreError::Write))
    );
    assert_eq!(session.phase(), Phase::Idle);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_refused_before_win() {
    let mut store = LeaderboardStore::new(RamStorage::<64>::new());
    let mut session = active_with_target(5);

    assert_eq!(
        session.save(&mut store, PlayerName::normalize("Ann")),
        Err(Error::NotWon)
    );
    assert_eq!(session.phase(), Phase::Active);
    assert!(store.load().unwrap().is_empty());
}
