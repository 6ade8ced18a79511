//! Board glue for the nRF52840: buttons, LEDs, buzzer, UART console and
//! the leaderboard EEPROM.
//!
//! Only the firmware binary builds this module. All decisions it acts on
//! come from the library (`guessbox::game`, `guessbox::feedback`, ...).

pub mod buttons;
pub mod console;
pub mod eeprom;
pub mod outputs;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use guessbox::Action;

/// Depth of the button → game loop action queue.
pub const ACTION_QUEUE: usize = 4;

pub type ActionChannel = Channel<CriticalSectionRawMutex, Action, ACTION_QUEUE>;
pub type ActionSender = Sender<'static, CriticalSectionRawMutex, Action, ACTION_QUEUE>;
pub type ActionReceiver = Receiver<'static, CriticalSectionRawMutex, Action, ACTION_QUEUE>;
