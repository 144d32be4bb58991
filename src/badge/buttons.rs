//! Active-low D-pad and Start buttons.
//!
//! [`Steering`] feeds edges to the input latch; [`Menu`] drives the idle
//! screen and is only read while no round is running.

use embassy_futures::select::{
    Either,
    Either3,
    select,
    select3,
};
use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    badge::ButtonResources,
    latch::{
        Button,
        Level,
    },
};

const DEBOUNCE_MS: u64 = 20;
const START_POLL_MS: u64 = 10;

impl From<esp_hal::gpio::Level> for Level {
    fn from(level: esp_hal::gpio::Level) -> Self {
        match level {
            esp_hal::gpio::Level::Low => Level::Low,
            esp_hal::gpio::Level::High => Level::High,
        }
    }
}

pub struct Buttons {
    pub steering: Steering,
    pub menu: Menu,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            steering: Steering {
                left: Input::new(res.left, pull_up),
                right: Input::new(res.right, pull_up),
            },
            menu: Menu {
                up: Input::new(res.up, pull_up),
                down: Input::new(res.down, pull_up),
                start: Input::new(res.start, pull_up),
            },
        }
    }
}

/// Left and right on the D-pad.
pub struct Steering {
    pub left: Input<'static>,
    pub right: Input<'static>,
}

impl Steering {
    /// Wait for the next transition on either button and sample its level.
    ///
    /// Bounces are reported as-is; filtering them is the latch's job.
    pub async fn next_edge(&mut self) -> (Button, Level) {
        match select(self.left.wait_for_any_edge(), self.right.wait_for_any_edge()).await {
            Either::First(()) => (Button::Left, self.left.level().into()),
            Either::Second(()) => (Button::Right, self.right.level().into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum MenuAction {
    Harder,
    Easier,
    Start,
}

/// Up, down and Start.
pub struct Menu {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub start: Input<'static>,
}

impl Menu {
    /// Next idle-screen action. Start is a plain level poll.
    pub async fn next_action(&mut self) -> MenuAction {
        match select3(
            Self::debounce_press(&mut self.up),
            Self::debounce_press(&mut self.down),
            Self::wait_low(&self.start),
        )
        .await
        {
            Either3::First(()) => MenuAction::Harder,
            Either3::Second(()) => MenuAction::Easier,
            Either3::Third(()) => MenuAction::Start,
        }
    }

    /// Block until Start is no longer held, so a press that ended the last
    /// round does not immediately start the next one.
    pub async fn release_start(&self) {
        while self.start.is_low() {
            Timer::after(Duration::from_millis(START_POLL_MS)).await;
        }
    }

    /// Wait for a debounced button press (falling edge, active low).
    pub async fn debounce_press(button: &mut Input<'_>) {
        loop {
            button.wait_for_falling_edge().await;
            Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
            if button.is_low() {
                return;
            }
        }
    }

    async fn wait_low(button: &Input<'_>) {
        while button.is_high() {
            Timer::after(Duration::from_millis(START_POLL_MS)).await;
        }
    }
}
