//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and storage
//! geometry live here so they can be tuned in one place.

// Game

/// Number of bits shown on the guess LEDs.
pub const VALUE_BITS: u32 = 3;

/// Size of the guessable range (`2^VALUE_BITS`); values are `0..VALUE_RANGE`.
pub const VALUE_RANGE: u8 = 1 << VALUE_BITS;

/// Largest value a target or guess can take.
pub const MAX_VALUE: u8 = VALUE_RANGE - 1;

/// Holding SUBMIT this long cancels the round instead of submitting (ms).
pub const HOLD_TO_CANCEL_MS: u64 = 2000;

// Feedback

/// Accuracy LED PWM base frequency (Hz).
pub const LED_PWM_FREQ_HZ: u32 = 50;

/// Buzzer duty cycle. Only the pulse rate changes with closeness.
pub const BUZZER_DUTY_PERCENT: u8 = 50;

// Player names

/// Stored name width in bytes.
pub const NAME_LEN: usize = 3;

/// Right-pad byte for names shorter than `NAME_LEN`.
pub const NAME_PAD: u8 = b' ';

/// Replacement byte for characters that are not printable ASCII.
pub const NAME_REPLACEMENT: u8 = b'?';

// Leaderboard storage

/// Capacity of the reference 24x32 EEPROM (bytes).
pub const EEPROM_CAPACITY: usize = 4096;

/// Bytes held back from the record payload for the header region.
pub const HEADER_RESERVE: usize = 4;

/// 7-bit I²C address of the EEPROM (A0..A2 tied low).
pub const EEPROM_I2C_ADDR: u8 = 0x50;

/// Number of scores listed by the "view high scores" menu entry.
pub const TOP_SCORES_SHOWN: usize = 3;

// Console (UARTE0, 115200 8N1)

/// Longest console line we buffer; extra input is dropped.
pub const CONSOLE_LINE_MAX: usize = 32;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your own wiring.
//
//   Button INCREASE → P0.11
//   Button SUBMIT   → P0.12
//   Guess LED bit 2 → P0.13
//   Guess LED bit 1 → P0.14
//   Guess LED bit 0 → P0.15
//   Accuracy LED    → P0.16 (PWM0)
//   Buzzer          → P0.17
//   I²C SDA         → P0.26
//   I²C SCL         → P0.27
//   UART TX         → P0.06
//   UART RX         → P0.08

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;
