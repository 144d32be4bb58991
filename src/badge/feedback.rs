//! Backlight and vibration motor, used to mark fruit and crashes.

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};

use crate::{
    badge::{
        BacklightResources,
        VibrationResources,
    },
    game::Tick,
};

const FRUIT_BUZZ: Duration = Duration::from_millis(40);
const CRASH_BLINK: Duration = Duration::from_millis(120);
const CRASH_BLINKS: u8 = 3;

/// A feedback pattern for something that happened in a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Cue {
    Fruit,
    Crash,
}

impl Cue {
    pub const fn for_tick(tick: Tick) -> Option<Self> {
        match tick {
            Tick::Ate => Some(Cue::Fruit),
            Tick::Crashed(_) => Some(Cue::Crash),
            Tick::Halted | Tick::Moved => None,
        }
    }
}

pub struct Feedback {
    backlight: Output<'static>,
    motor: Output<'static>,
}

impl Feedback {
    /// Backlight starts on, motor off.
    pub fn new(backlight: BacklightResources<'static>, vibra: VibrationResources<'static>) -> Self {
        Self {
            backlight: Output::new(backlight.led, Level::High, OutputConfig::default()),
            motor: Output::new(vibra.motor, Level::Low, OutputConfig::default()),
        }
    }

    pub fn backlight_on(&mut self) {
        self.backlight.set_high();
    }

    /// Play `cue`; leaves the backlight on and the motor off.
    pub async fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Fruit => {
                self.motor.set_high();
                Timer::after(FRUIT_BUZZ).await;
                self.motor.set_low();
            }
            Cue::Crash => {
                for _ in 0..CRASH_BLINKS {
                    self.backlight.set_low();
                    self.motor.set_high();
                    Timer::after(CRASH_BLINK).await;
                    self.backlight.set_high();
                    self.motor.set_low();
                    Timer::after(CRASH_BLINK).await;
                }
            }
        }
        self.backlight_on();
    }
}
