//! Guess LEDs, accuracy LED (PWM) and buzzer.

use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use guessbox::config::{LED_PWM_FREQ_HZ, VALUE_BITS};
use guessbox::feedback::{pulse_timing_ms, Feedback};
use guessbox::ui::input_logic::guess_led_levels;

/// Buzzer cadence in pulses per second; `None` silences it.
static BUZZER: Signal<CriticalSectionRawMutex, Option<u8>> = Signal::new();

/// Everything the player can see on the board.
pub struct Outputs {
    guess_leds: [Output<'static>; VALUE_BITS as usize],
    accuracy: SimplePwm<'static, PWM0>,
}

impl Outputs {
    /// Take the guess LED pins (MSB first) and the accuracy LED PWM.
    /// Everything starts off.
    pub fn new(
        guess_leds: [AnyPin; VALUE_BITS as usize],
        mut accuracy: SimplePwm<'static, PWM0>,
    ) -> Self {
        accuracy.set_period(LED_PWM_FREQ_HZ);
        let mut outputs = Self {
            guess_leds: guess_leds.map(|pin| Output::new(pin, Level::Low, OutputDrive::Standard)),
            accuracy,
        };
        outputs.all_off();
        outputs
    }

    /// Show `value` in binary on the guess LEDs.
    pub fn show_guess(&mut self, value: u8) {
        for (led, on) in self.guess_leds.iter_mut().zip(guess_led_levels(value)) {
            led.set_level(Level::from(on));
        }
    }

    fn set_brightness(&mut self, percent: u8) {
        let max = self.accuracy.max_duty() as u32;
        let duty = max * percent.min(100) as u32 / 100;
        self.accuracy.set_duty(0, duty as u16);
    }

    /// Drive the accuracy LED and buzzer for a missed guess.
    pub fn apply(&mut self, feedback: &Feedback) {
        self.set_brightness(feedback.brightness);
        BUZZER.signal(feedback.buzzer_hz);
    }

    /// Accuracy LED dark, buzzer silent.
    pub fn feedback_off(&mut self) {
        self.set_brightness(0);
        BUZZER.signal(None);
    }

    pub fn all_off(&mut self) {
        self.feedback_off();
        self.show_guess(0);
    }
}

/// Pulse the buzzer at the last signalled cadence. A new cadence takes
/// effect immediately, mid-pulse included.
#[embassy_executor::task]
pub async fn buzzer_task(pin: AnyPin) {
    let mut buzzer = Output::new(pin, Level::Low, OutputDrive::Standard);
    let mut cadence: Option<u8> = None;

    loop {
        let Some(hz) = cadence else {
            buzzer.set_low();
            cadence = BUZZER.wait().await;
            continue;
        };

        let (on_ms, off_ms) = pulse_timing_ms(hz);

        buzzer.set_high();
        if let Either::First(next) = select(BUZZER.wait(), Timer::after_millis(on_ms)).await {
            cadence = next;
            continue;
        }

        buzzer.set_low();
        if let Either::First(next) = select(BUZZER.wait(), Timer::after_millis(off_ms)).await {
            cadence = next;
        }
    }
}
