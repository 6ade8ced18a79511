//! guessbox firmware - nRF52840 number-guessing game.
//!
//! Tasks:
//!   - `button_task`  debounces INCREASE / SUBMIT and queues `Action`s
//!   - `buzzer_task`  pulses the buzzer at the current cadence
//!   - `main`         console menu and the game loop
//!
//! Holding SUBMIT while powering up wipes the high score table.

#![no_std]
#![no_main]

mod hw;

use cortex_m_rt::{exception, ExceptionFrame};
use defmt::{debug, error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::peripherals::RNG;
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::rng::Rng;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::uarte::{self, Uarte};
use embassy_nrf::{bind_interrupts, peripherals, rng};
use embassy_time::Timer;
use guessbox::leaderboard::Leaderboard;
use guessbox::ui::menu::{self, write_save_result, write_scores};
use guessbox::ui::MenuChoice;
use guessbox::{GameSession, LeaderboardStore, Outcome, PlayerName};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use hw::console::Console;
use hw::eeprom::{self, Eeprom};
use hw::outputs::{buzzer_task, Outputs};
use hw::{buttons::button_task, ActionChannel, ActionReceiver};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

static ACTIONS: ActionChannel = ActionChannel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(Default::default());
    info!("guessbox starting");

    let wipe_requested = {
        let submit = Input::new(&mut p.P0_12, Pull::Up);
        Timer::after_millis(5).await;
        submit.is_low()
    };

    // - Outputs -------------------------------------------
    let accuracy = SimplePwm::new_1ch(p.PWM0, p.P0_16);
    let outputs = Outputs::new(
        [p.P0_13.degrade(), p.P0_14.degrade(), p.P0_15.degrade()],
        accuracy,
    );

    // - Tasks ---------------------------------------------
    if spawner
        .spawn(button_task(p.P0_11.degrade(), p.P0_12.degrade(), ACTIONS.sender()))
        .is_err()
    {
        error!("Failed to spawn button task");
    }
    if spawner.spawn(buzzer_task(p.P0_17.degrade())).is_err() {
        error!("Failed to spawn buzzer task");
    }

    // - Leaderboard EEPROM ------------------------------------
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let mut store = eeprom::open(i2c);
    info!("Leaderboard: room for {} records", store.limit());

    if wipe_requested {
        match store.clear() {
            Ok(()) => info!("Leaderboard: wiped (SUBMIT held at boot)"),
            Err(e) => error!("Leaderboard: wipe failed: {}", e),
        }
    }

    // - Console -------------------------------------------
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);

    let mut app = App {
        console: Console::new(uart),
        outputs,
        store,
        rng: Rng::new(p.RNG, Irqs),
        actions: ACTIONS.receiver(),
        session: GameSession::new(),
    };

    app.console.lines(menu::BANNER).await;

    loop {
        app.console.line("").await;
        app.console.line(menu::MENU_PROMPT).await;
        let line = app.console.prompt("> ").await;

        match MenuChoice::parse(&line) {
            Some(MenuChoice::HighScores) => app.show_scores().await,
            Some(MenuChoice::Play) => app.play_round().await,
            Some(MenuChoice::Quit) => break,
            None => app.console.line(menu::INVALID_OPTION).await,
        }
    }

    app.outputs.all_off();
    app.console.line(menu::GOODBYE).await;
    info!("Quit: parking");
    loop {
        cortex_m::asm::wfe();
    }
}

/// Peripherals and state owned by the menu/game loop.
struct App {
    console: Console,
    outputs: Outputs,
    store: LeaderboardStore<Eeprom>,
    rng: Rng<'static, RNG>,
    actions: ActionReceiver,
    session: GameSession,
}

impl App {
    async fn show_scores(&mut self) {
        let board = match self.store.load() {
            Ok(board) => board,
            Err(e) => {
                warn!("Leaderboard: load failed: {}", e);
                Leaderboard::with_limit(self.store.limit())
            }
        };

        let mut text: String<256> = String::new();
        if write_scores(&mut text, &board).is_err() {
            warn!("Leaderboard: listing truncated");
        }
        self.console.line(menu::HIGH_SCORES_TITLE).await;
        self.console.text(&text).await;
    }

    async fn play_round(&mut self) {
        if let Err(e) = self.session.start(&mut self.rng) {
            error!("Session: start refused: {}", e);
            return;
        }
        debug!("Session: target {}", self.session.target());

        self.console.lines(menu::ROUND_INTRO).await;
        self.drain_actions();
        self.outputs.show_guess(self.session.guess());

        loop {
            let action = self.actions.receive().await;
            match self.session.handle(action) {
                Outcome::Ignored => {}
                Outcome::GuessChanged(guess) => self.outputs.show_guess(guess),
                Outcome::Miss(feedback) => {
                    info!("Session: miss {}", feedback);
                    self.outputs.apply(&feedback);
                }
                Outcome::Won { attempts } => {
                    info!("Session: won after {} attempts", attempts);
                    self.outputs.feedback_off();
                    self.console.line(menu::WIN_MESSAGE).await;
                    self.save_score(attempts).await;
                    break;
                }
                Outcome::Cancelled => {
                    info!("Session: cancelled");
                    self.outputs.feedback_off();
                    self.console.line(menu::CANCELLED).await;
                    break;
                }
            }
        }

        self.session.finish();
        self.outputs.all_off();
        self.drain_actions();
    }

    async fn save_score(&mut self, attempts: u8) {
        let name = self.console.prompt(menu::NAME_PROMPT).await;
        let saved = self
            .session
            .save(&mut self.store, PlayerName::normalize(&name));
        if let Err(e) = saved {
            error!("Leaderboard: save failed: {}", e);
        }

        let mut text: String<64> = String::new();
        if write_save_result(&mut text, saved, attempts).is_err() {
            warn!("Console: save result truncated");
        }
        self.console.text(&text).await;
    }

    /// Drop presses made while the game loop was not listening.
    fn drain_actions(&mut self) {
        while self.actions.try_receive().is_ok() {}
    }
}

/// A fault after a panic (panic-probe traps with `udf`) lands here. Reset
/// returns every GPIO to its input default, so LEDs and buzzer go dark.
#[exception]
unsafe fn HardFault(_frame: &ExceptionFrame) -> ! {
    cortex_m::peripheral::SCB::sys_reset()
}
