//! Integration tests for guessbox host-testable logic.
//!
//! Drives a full round through the public API the firmware uses:
//! session → outcome → leaderboard store on a RAM-backed EEPROM image.

use guessbox::config::{EEPROM_CAPACITY, HOLD_TO_CANCEL_MS};
use guessbox::leaderboard::RamStorage;
use guessbox::ui::input_logic::classify_submit;
use guessbox::ui::menu::write_scores;
use guessbox::{Action, GameSession, LeaderboardStore, Outcome, Phase, PlayerName};

type Eeprom = RamStorage<EEPROM_CAPACITY>;

#[test]
fn winning_round_lands_on_empty_leaderboard() {
    let mut store = LeaderboardStore::new(Eeprom::new());
    let mut session = GameSession::new();
    session.start_with_target(6).unwrap();

    for expected in 1..=6 {
        assert_eq!(
            session.handle(Action::Increase),
            Outcome::GuessChanged(expected)
        );
    }
    let outcome = session.handle(classify_submit(120, HOLD_TO_CANCEL_MS));
    assert_eq!(outcome, Outcome::Won { attempts: 1 });

    let record = session.score(PlayerName::normalize("Kim")).unwrap();
    let (_, rank) = store.record(record).unwrap();
    session.finish();

    assert_eq!(rank, Some(0));
    assert_eq!(session.phase(), Phase::Idle);

    let board = store.load().unwrap();
    assert_eq!(board.count(), 1);
    assert_eq!(board.records()[0].name.as_str(), "Kim");
    assert_eq!(board.records()[0].guesses, 1);
}

#[test]
fn cancelled_round_leaves_leaderboard_untouched() {
    let mut store = LeaderboardStore::new(Eeprom::new());
    let mut earlier = GameSession::new();
    earlier.start_with_target(0).unwrap();
    earlier.handle(Action::Submit);
    store
        .record(earlier.score(PlayerName::normalize("OLD")).unwrap())
        .unwrap();
    let before = store.load().unwrap();

    let mut session = GameSession::new();
    session.start_with_target(3).unwrap();
    session.handle(Action::Increase);
    let outcome = session.handle(classify_submit(HOLD_TO_CANCEL_MS, HOLD_TO_CANCEL_MS));
    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(session.phase(), Phase::Cancelled);
    session.finish();

    let after = store.load().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.count(), 1);
}

#[test]
fn several_rounds_rank_and_render() {
    let mut store = LeaderboardStore::new(Eeprom::new());
    let plays: [(&str, u8, u8); 4] = [("EVE", 5, 4), ("DON", 2, 0), ("CAL", 7, 2), ("BEA", 1, 0)];

    for (name, target, misses) in plays {
        let mut session = GameSession::new();
        session.start_with_target(target).unwrap();
        // Burn `misses` submits on a wrong value first.
        if misses > 0 {
            session.handle(Action::Increase);
            if session.guess() == target {
                session.handle(Action::Increase);
            }
            for _ in 0..misses {
                assert!(matches!(session.handle(Action::Submit), Outcome::Miss(_)));
            }
        }
        while session.guess() != target {
            session.handle(Action::Increase);
        }
        let attempts = match session.handle(Action::Submit) {
            Outcome::Won { attempts } => attempts,
            other => panic!("expected win, got {:?}", other),
        };
        assert_eq!(attempts, misses + 1);
        store
            .record(session.score(PlayerName::normalize(name)).unwrap())
            .unwrap();
    }

    let board = store.load().unwrap();
    let mut out = String::new();
    write_scores(&mut out, &board).unwrap();
    assert_eq!(
        out,
        "There are 4 scores. Here are the top 3!\n\
         1 - DON took 1 guesses\n\
         2 - BEA took 1 guesses\n\
         3 - CAL took 3 guesses\n"
    );
}

#[test]
fn fresh_eeprom_starts_with_empty_leaderboard() {
    let mut store = LeaderboardStore::new(Eeprom::erased());
    let mut session = GameSession::new();
    session.start_with_target(2).unwrap();
    session.handle(Action::Submit);
    session.handle(Action::Submit);
    session.handle(Action::Increase);
    session.handle(Action::Increase);
    assert_eq!(session.handle(Action::Submit), Outcome::Won { attempts: 3 });

    let rank = session
        .save(&mut store, PlayerName::normalize("Kim"))
        .unwrap();
    assert_eq!(rank, Some(0));
    assert_eq!(session.phase(), Phase::Idle);

    let mut out = String::new();
    write_scores(&mut out, &store.load().unwrap()).unwrap();
    assert_eq!(
        out,
        "There are 1 scores. Here are the top 3!\n\
         1 - Kim took 3 guesses\n"
    );
}
