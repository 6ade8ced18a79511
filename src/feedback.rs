//! Closeness feedback laws.
//!
//! Two independent outputs tell the player how close a miss was:
//! - the accuracy LED brightness rises linearly as the guess approaches
//!   the target from either side;
//! - the buzzer pulses faster as the distance shrinks (1, 2, 4 pulses per
//!   second at distance 3, 2, 1) with a fixed 50% duty cycle.
//!
//! An exact match never reaches these laws; the session reports a win instead.

use crate::config::{BUZZER_DUTY_PERCENT, VALUE_RANGE};

/// Absolute difference between target and guess.
pub fn distance(target: u8, guess: u8) -> u8 {
    target.abs_diff(guess)
}

/// Accuracy LED brightness in percent, rounded toward zero.
///
/// Below the target the brightness is `guess / target`; above it the
/// remaining headroom `(range - guess) / (range - target)` where `range`
/// is the size of the value range. Returns `None` for an exact match.
pub fn brightness_percent(target: u8, guess: u8) -> Option<u8> {
    let (num, den) = if guess < target {
        (guess as u16, target as u16)
    } else if guess > target {
        let range = VALUE_RANGE as u16;
        (range.saturating_sub(guess as u16), range.saturating_sub(target as u16))
    } else {
        return None;
    };
    // guess < target implies target >= 1; guess > target implies target < range.
    Some((num * 100 / den) as u8)
}

/// Buzzer pulses per second for a given distance. `None` means silent:
/// distance 0 is a win, and anything beyond 3 is too far to hint at.
pub fn buzzer_cadence(distance: u8) -> Option<u8> {
    match distance {
        1 => Some(4),
        2 => Some(2),
        3 => Some(1),
        _ => None,
    }
}

/// On/off times (ms) of one buzzer pulse at `hz` pulses per second.
pub fn pulse_timing_ms(hz: u8) -> (u64, u64) {
    let period = 1000 / hz.max(1) as u64;
    let on = period * BUZZER_DUTY_PERCENT as u64 / 100;
    (on, period - on)
}

/// Everything the outputs need for one missed submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Feedback {
    pub distance: u8,
    /// Accuracy LED duty in percent.
    pub brightness: u8,
    /// Buzzer pulses per second, or `None` for silence.
    pub buzzer_hz: Option<u8>,
}

impl Feedback {
    /// Compute feedback for a miss. Returns `None` on an exact match.
    pub fn for_guess(target: u8, guess: u8) -> Option<Self> {
        let brightness = brightness_percent(target, guess)?;
        let distance = distance(target, guess);
        Some(Self {
            distance,
            brightness,
            buzzer_hz: buzzer_cadence(distance),
        })
    }
}
