//! Line-oriented serial console on UARTE0.
//!
//! Output uses CRLF line endings. Input is echoed as it is typed and
//! assembled by `LineEditor`, so backspace works in a plain terminal.

use defmt::warn;
use embassy_nrf::peripherals::UARTE0;
use embassy_nrf::uarte::Uarte;
use guessbox::config::CONSOLE_LINE_MAX;
use guessbox::ui::input_logic::{LineEditor, LineEvent};
use heapless::String;

/// Largest slice handed to the UARTE in one DMA transfer. Slices from
/// flash are copied to a RAM bounce buffer by the driver, which is bounded.
const TX_CHUNK: usize = 64;

pub struct Console {
    uart: Uarte<'static, UARTE0>,
    editor: LineEditor<CONSOLE_LINE_MAX>,
}

impl Console {
    pub fn new(uart: Uarte<'static, UARTE0>) -> Self {
        Self {
            uart,
            editor: LineEditor::new(),
        }
    }

    /// Write `text` as-is (no line ending).
    pub async fn write_str(&mut self, text: &str) {
        self.write_bytes(text.as_bytes()).await;
    }

    async fn write_bytes(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(TX_CHUNK) {
            if let Err(e) = self.uart.write(chunk).await {
                warn!("Console: write failed: {}", e);
                return;
            }
        }
    }

    /// Write one line followed by CRLF.
    pub async fn line(&mut self, text: &str) {
        self.write_str(text).await;
        self.write_str("\r\n").await;
    }

    pub async fn lines(&mut self, lines: &[&str]) {
        for text in lines {
            self.line(text).await;
        }
    }

    /// Write `\n`-separated text (as produced by the menu renderers).
    pub async fn text(&mut self, text: &str) {
        for text in text.lines() {
            self.line(text).await;
        }
    }

    /// Print `prompt` and block until the player presses Enter.
    pub async fn prompt(&mut self, prompt: &str) -> String<CONSOLE_LINE_MAX> {
        self.write_str(prompt).await;
        self.read_line().await
    }

    async fn read_line(&mut self) -> String<CONSOLE_LINE_MAX> {
        let mut byte = [0u8; 1];
        loop {
            if let Err(e) = self.uart.read(&mut byte).await {
                warn!("Console: read failed: {}", e);
                continue;
            }
            match self.editor.feed(byte[0]) {
                LineEvent::Echo(b) => self.write_bytes(&[b]).await,
                LineEvent::Erase => self.write_str("\x08 \x08").await,
                LineEvent::Complete => {
                    self.write_str("\r\n").await;
                    return self.editor.take();
                }
                LineEvent::Ignored => {}
            }
        }
    }
}
