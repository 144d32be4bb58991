//! Single-slot handoff of steering intent from the button edge handler to the
//! tick loop.
//!
//! The edge side calls [`InputLatch::on_button_edge`] and the tick side calls
//! [`InputLatch::take_pending_turn`] once per tick. Both run inside a short
//! critical section. The ESP32-S3 has no 64-bit atomics, so the timestamp
//! cannot live in an atomic next to the turn.

use core::cell::Cell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;
use embassy_time::{
    Duration,
    Instant,
};

use crate::{
    config::GameConfig,
    grid::Turn,
};

/// The two steering buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Left,
    Right,
}

impl Button {
    /// Left steers counter-clockwise, right clockwise.
    pub const fn turn(self) -> Turn {
        match self {
            Button::Left => Turn::CounterClockwise,
            Button::Right => Turn::Clockwise,
        }
    }
}

/// Pin level sampled right after an edge. Buttons are active low.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

#[derive(Clone, Copy, Default)]
struct Slot {
    pending: Option<Turn>,
    last_accepted: Option<Instant>,
}

pub struct InputLatch {
    slot: CriticalSectionMutex<Cell<Slot>>,
    debounce: Duration,
}

impl InputLatch {
    pub const fn new(debounce: Duration) -> Self {
        Self {
            slot: CriticalSectionMutex::new(Cell::new(Slot {
                pending: None,
                last_accepted: None,
            })),
            debounce,
        }
    }

    /// A latch using the configured debounce window.
    pub const fn from_config(config: &GameConfig) -> Self {
        Self::new(config.debounce)
    }

    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Record one physical transition of `button`.
    ///
    /// Accepted only for a press (`Level::Low`) arriving more than the debounce
    /// window after the last accepted press of either button. An accepted press
    /// replaces whatever turn is still pending. Returns whether it was accepted.
    pub fn on_button_edge(&self, button: Button, level: Level, at: Instant) -> bool {
        if level != Level::Low {
            return false;
        }

        let accepted = self.slot.lock(|slot| {
            let mut state = slot.get();
            let settled = match state.last_accepted {
                None => true,
                // A timestamp older than the last accepted one is treated as bounce.
                Some(last) => at
                    .checked_duration_since(last)
                    .is_some_and(|since| since > self.debounce),
            };
            if settled {
                state.pending = Some(button.turn());
                state.last_accepted = Some(at);
                slot.set(state);
            }
            settled
        });

        if !accepted {
            trace!("debounced {} edge", button);
        }
        accepted
    }

    /// Take the pending turn, leaving the slot empty.
    pub fn take_pending_turn(&self) -> Option<Turn> {
        self.slot.lock(|slot| {
            let mut state = slot.get();
            let turn = state.pending.take();
            slot.set(state);
            turn
        })
    }

    /// Drop a pending turn. The debounce timestamp is kept.
    pub fn clear(&self) {
        self.slot.lock(|slot| {
            let mut state = slot.get();
            state.pending = None;
            slot.set(state);
        });
    }
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::from_config(&GameConfig::BADGE)
    }
}
