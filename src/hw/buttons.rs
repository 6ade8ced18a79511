//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - INCREASE - step the displayed guess
//!   - SUBMIT   - short press submits, hold cancels the round
//!
//! A single task watches both pins so actions reach the game loop in
//! press order. SUBMIT is classified once it is released or once the
//! hold threshold passes, whichever comes first.

use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{with_deadline, Duration, Instant, Timer};
use guessbox::config::{BUTTON_DEBOUNCE_MS, HOLD_TO_CANCEL_MS};
use guessbox::ui::input_logic::classify_submit;
use guessbox::Action;

use super::ActionSender;

/// Run the button polling loop.
///
/// Waits for either pin to go low (pressed), debounces, sends the action,
/// then waits for release before repeating.
#[embassy_executor::task]
pub async fn button_task(increase: AnyPin, submit: AnyPin, tx: ActionSender) {
    let mut increase = Input::new(increase, Pull::Up);
    let mut submit = Input::new(submit, Pull::Up);
    let debounce = Duration::from_millis(BUTTON_DEBOUNCE_MS);

    loop {
        let edge = select(
            increase.wait_for_falling_edge(),
            submit.wait_for_falling_edge(),
        )
        .await;

        match edge {
            Either::First(()) => {
                Timer::after(debounce).await;
                if increase.is_low() {
                    info!("Button: INCREASE");
                    tx.send(Action::Increase).await;

                    increase.wait_for_high().await;
                    Timer::after(debounce).await;
                }
            }
            Either::Second(()) => {
                let pressed_at = Instant::now();
                Timer::after(debounce).await;
                if submit.is_low() {
                    // Timing out here is the hold case; either way we classify now.
                    let hold_deadline = pressed_at + Duration::from_millis(HOLD_TO_CANCEL_MS);
                    let _ = with_deadline(hold_deadline, submit.wait_for_high()).await;

                    let held_ms = pressed_at.elapsed().as_millis();
                    let action = classify_submit(held_ms, HOLD_TO_CANCEL_MS);
                    info!("Button: SUBMIT held {} ms -> {}", held_ms, action);
                    tx.send(action).await;

                    submit.wait_for_high().await;
                    Timer::after(debounce).await;
                }
            }
        }
    }
}
