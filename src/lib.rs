//! # badge-snake
//!
//! Snake for the Disobey 2026 badge: two buttons steer, a fixed tick moves the
//! snake, fruit makes it grow.
//!
//! The game engine is hardware-free and runs on the host:
//! - [`InputLatch`]: debounced, single-slot handoff of turn intents from the
//!   button edge handler to the tick loop
//! - [`SnakeBody`]: fixed-capacity ring buffer of cells, tail to head
//! - [`FruitSpawner`]: uniform fruit placement from a per-round seed
//! - [`Game`]: round state machine and the per-tick rules
//! - [`Renderer`] / [`ScreenRenderer`]: drawing contract and its
//!   `embedded-graphics` implementation
//!
//! With the `badge` feature the [`badge`] module adds the ESP32-S3 board
//! support (display, buttons, backlight, vibration motor).
//!
//! ## Quick start
//!
//! ```rust,ignore
//! static LATCH: InputLatch = InputLatch::from_config(&GameConfig::BADGE);
//!
//! let mut game = Game::<BADGE_CELLS>::new(GameConfig::BADGE)?;
//! game.start(Difficulty::Normal, seed);
//! loop {
//!     game.tick(&LATCH);
//!     game.render(&mut renderer)?;
//!     Timer::after(game.tick_period()).await;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod body;
pub mod config;
mod error;
pub mod fruit;
pub mod game;
pub mod grid;
pub mod latch;
pub mod render;

#[cfg(feature = "badge")]
pub mod badge;

pub use body::{
    Segment,
    SnakeBody,
};
pub use config::{
    BADGE_CELLS,
    DEBOUNCE_WINDOW,
    Difficulty,
    GameConfig,
    SpeedTable,
};
pub use error::Error;
pub use fruit::FruitSpawner;
pub use game::{
    Collision,
    Game,
    RoundState,
    Tick,
};
pub use grid::{
    Cell,
    Direction,
    Grid,
    Turn,
};
pub use latch::{
    Button,
    InputLatch,
    Level,
};
pub use render::{
    Layout,
    Renderer,
    ScreenRenderer,
};

/// The game sized for the badge's 21×10 board.
pub type BadgeGame = Game<BADGE_CELLS>;
