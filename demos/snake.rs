//! Snake on the Disobey 2026 badge.
//!
//! Controls:
//! - Left/Right: turn counter-clockwise / clockwise
//! - Up/Down: pick the speed on the title screen
//! - Start: begin a round
//!
//! Build with `--features badge` for `xtensa-esp32s3-none-elf`.

#![no_std]
#![no_main]

#[allow(clippy::wildcard_imports)]
use badge_snake::badge::*;
use badge_snake::{
    BadgeGame,
    Difficulty,
    GameConfig,
    InputLatch,
    RoundState,
    ScreenRenderer,
    mk_static,
};
use defmt::{
    error,
    info,
};
use embassy_executor::Spawner;
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::Channel,
};
use embassy_time::{
    Duration,
    Instant,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

esp_bootloader_esp_idf::esp_app_desc!();

/// How long the final score stays up before the title screen returns.
const GAME_OVER_HOLD: Duration = Duration::from_secs(4);

// ── Shared state ────────────────────────────────────────────────────────────
const CONFIG: GameConfig = GameConfig::BADGE;

static LATCH: InputLatch = InputLatch::from_config(&CONFIG);

static CUES: Channel<CriticalSectionRawMutex, Cue, 4> = Channel::new();

// ── Tasks ───────────────────────────────────────────────────────────────────

#[embassy_executor::task]
async fn input_task(steering: &'static mut Steering) {
    info!("Snake input task started");
    loop {
        let (button, level) = steering.next_edge().await;
        LATCH.on_button_edge(button, level, Instant::now());
    }
}

#[embassy_executor::task]
async fn feedback_task(feedback: &'static mut Feedback) {
    info!("Snake feedback task started");
    loop {
        let cue = CUES.receive().await;
        feedback.play(cue).await;
    }
}

#[embassy_executor::task]
async fn game_task(display: &'static mut Display<'static>, menu: &'static mut Menu) {
    let mut game = match BadgeGame::new(CONFIG) {
        Ok(game) => game,
        Err(e) => {
            error!("Snake cannot start: {}", e);
            return;
        }
    };
    let mut screen = ScreenRenderer::new(display, &CONFIG);
    let mut difficulty = Difficulty::default();
    info!("Snake game started");

    loop {
        // Title screen
        menu.release_start().await;
        loop {
            if screen.draw_instructions(difficulty).is_err() {
                error!("Failed to draw title screen");
            }
            match menu.next_action().await {
                MenuAction::Harder => difficulty = difficulty.harder(),
                MenuAction::Easier => difficulty = difficulty.easier(),
                MenuAction::Start => break,
            }
        }

        // Presses on the title screen must not steer the new snake.
        LATCH.clear();
        game.start(difficulty, Instant::now().as_micros());
        let tick = game.tick_period();

        // Game loop
        loop {
            let outcome = game.tick(&LATCH);
            if let Some(cue) = Cue::for_tick(outcome) {
                CUES.try_send(cue).ok();
            }

            if game.render(&mut screen).is_err() {
                error!("Failed to draw frame");
            }

            if game.state() == RoundState::GameOver {
                break;
            }
            Timer::after(tick).await;
        }

        Timer::after(GAME_OVER_HOLD).await;
        let score = game.end_round();
        info!("Round over, final score {}", score);
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = badge_snake::badge::init();
    let resources = badge_snake::split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display = mk_static!(Display<'static>, resources.display.into());
    let Buttons { steering, menu } = resources.buttons.into();
    let steering = mk_static!(Steering, steering);
    let menu = mk_static!(Menu, menu);
    let feedback = mk_static!(
        Feedback,
        Feedback::new(resources.backlight, resources.vibra)
    );

    spawner.must_spawn(input_task(steering));
    spawner.must_spawn(feedback_task(feedback));
    spawner.must_spawn(game_task(display, menu));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
