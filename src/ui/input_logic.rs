use heapless::String;

use crate::config::VALUE_BITS;
use crate::game::Action;

/// Guess LED levels, most significant bit first.
pub fn guess_led_levels(value: u8) -> [bool; VALUE_BITS as usize] {
    let mut levels = [false; VALUE_BITS as usize];
    for (i, level) in levels.iter_mut().enumerate() {
        let bit = VALUE_BITS as usize - 1 - i;
        *level = value & (1 << bit) != 0;
    }
    levels
}

/// Decide what a SUBMIT press meant from how long it was held.
pub fn classify_submit(held_ms: u64, hold_to_cancel_ms: u64) -> Action {
    if held_ms >= hold_to_cancel_ms {
        Action::Cancel
    } else {
        Action::Submit
    }
}

/// Result of feeding one console byte to a `LineEditor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEvent {
    /// Byte accepted; echo it back.
    Echo(u8),
    /// Last character removed; erase it on the terminal.
    Erase,
    /// Enter pressed; the line is ready.
    Complete,
    /// Nothing to do (control byte, full buffer, LF after CR).
    Ignored,
}

/// Minimal line assembly for a serial terminal: printable ASCII,
/// backspace/delete, and CR, LF or CRLF line endings.
pub struct LineEditor<const N: usize> {
    buf: String<N>,
    after_cr: bool,
}

impl<const N: usize> Default for LineEditor<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineEditor<N> {
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            after_cr: false,
        }
    }

    pub fn feed(&mut self, byte: u8) -> LineEvent {
        let after_cr = core::mem::replace(&mut self.after_cr, false);
        match byte {
            b'\r' => {
                self.after_cr = true;
                LineEvent::Complete
            }
            b'\n' if after_cr => LineEvent::Ignored,
            b'\n' => LineEvent::Complete,
            0x08 | 0x7F => match self.buf.pop() {
                Some(_) => LineEvent::Erase,
                None => LineEvent::Ignored,
            },
            0x20..=0x7E => match self.buf.push(byte as char) {
                Ok(()) => LineEvent::Echo(byte),
                Err(()) => LineEvent::Ignored,
            },
            _ => LineEvent::Ignored,
        }
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Take the assembled line, leaving the editor empty.
    pub fn take(&mut self) -> String<N> {
        core::mem::take(&mut self.buf)
    }
}
