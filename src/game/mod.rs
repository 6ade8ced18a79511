//! Game session state machine.
//!
//! ```text
//!  Idle ──start──▶ Active ──submit (match)──▶ Won ───────┐
//!                   │  ▲                                  │ finish
//!                   │  └─ increase / submit (miss)        ▼
//!                   └──────cancel (hold)──────▶ Cancelled ──▶ Idle
//! ```
//!
//! The session owns no hardware. `handle` returns an `Outcome` and the
//! caller drives LEDs, buzzer and the leaderboard from it.

#[cfg(test)]
mod tests;

use embedded_storage::Storage;
use rand_core::RngCore;

use crate::config::VALUE_RANGE;
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::leaderboard::LeaderboardStore;
use crate::score::{PlayerName, ScoreRecord};

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// No round running; the menu is in control.
    #[default]
    Idle,
    /// Accepting increase/submit actions.
    Active,
    /// Guessed correctly; waiting for the player's name.
    Won,
    /// Abandoned by holding SUBMIT; nothing is recorded.
    Cancelled,
}

/// Debounced player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Step the displayed guess, wrapping after the top value.
    Increase,
    /// Submit the displayed guess (SUBMIT released before the hold threshold).
    Submit,
    /// SUBMIT held past the threshold.
    Cancel,
}

/// What the caller has to do after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// No round is active; nothing changed.
    Ignored,
    /// Show the new guess on the value LEDs.
    GuessChanged(u8),
    /// Wrong guess; drive the accuracy LED and buzzer.
    Miss(Feedback),
    /// Correct guess after `attempts` submits. Outputs go off and a name is needed.
    Won { attempts: u8 },
    /// Round abandoned. Outputs go off, nothing is recorded.
    Cancelled,
}

/// One play-through from start to win or cancel.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    target: u8,
    guess: u8,
    attempts: u8,
    phase: Phase,
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            target: 0,
            guess: 0,
            attempts: 0,
            phase: Phase::Idle,
        }
    }

    /// Begin a round with a fresh target drawn from `rng`.
    ///
    /// Refused while a round is active so there is never more than one
    /// writer of the leaderboard.
    pub fn start(&mut self, rng: &mut impl RngCore) -> Result<()> {
        // VALUE_RANGE divides 2^32, so the modulo is unbiased.
        let target = (rng.next_u32() % VALUE_RANGE as u32) as u8;
        self.start_with_target(target)
    }

    /// Begin a round with a known target (wrapped into range).
    pub fn start_with_target(&mut self, target: u8) -> Result<()> {
        if self.phase == Phase::Active {
            return Err(Error::SessionActive);
        }
        self.target = target % VALUE_RANGE;
        self.guess = 0;
        self.attempts = 0;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Apply one player action.
    pub fn handle(&mut self, action: Action) -> Outcome {
        if self.phase != Phase::Active {
            return Outcome::Ignored;
        }

        match action {
            Action::Increase => {
                self.guess = (self.guess + 1) % VALUE_RANGE;
                Outcome::GuessChanged(self.guess)
            }
            Action::Submit => {
                // Every submit counts, the winning one included.
                self.attempts = self.attempts.saturating_add(1);
                match Feedback::for_guess(self.target, self.guess) {
                    Some(feedback) => Outcome::Miss(feedback),
                    None => {
                        self.phase = Phase::Won;
                        Outcome::Won {
                            attempts: self.attempts,
                        }
                    }
                }
            }
            Action::Cancel => {
                self.phase = Phase::Cancelled;
                Outcome::Cancelled
            }
        }
    }

    /// Build the leaderboard entry for a won round.
    pub fn score(&self, name: PlayerName) -> Result<ScoreRecord> {
        if self.phase != Phase::Won {
            return Err(Error::NotWon);
        }
        Ok(ScoreRecord::new(name, self.attempts))
    }

    /// Record a won round on `store` under `name`, then return to Idle.
    ///
    /// Returns the rank the score landed at (`None` if it did not make the
    /// board). A failed write is reported but still ends the round; only
    /// `NotWon` leaves the session as it was.
    pub fn save<S: Storage>(
        &mut self,
        store: &mut LeaderboardStore<S>,
        name: PlayerName,
    ) -> Result<Option<usize>> {
        let record = self.score(name)?;
        let saved = store.record(record).map(|(_, rank)| rank);
        self.finish();
        saved.map_err(Error::from)
    }

    /// Return a finished (won or cancelled) session to Idle.
    /// An active round is left untouched.
    pub fn finish(&mut self) {
        if matches!(self.phase, Phase::Won | Phase::Cancelled) {
            *self = Self::new();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn guess(&self) -> u8 {
        self.guess
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Hidden value. Exposed for diagnostics (logged at debug level on target).
    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}
