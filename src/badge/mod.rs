//! Board support for playing on the Disobey 2026 badge.
//!
//! Only the peripherals the game uses are claimed:
//! - **Display**: 320×170 ST7789 LCD over SPI with DMA
//! - **Buttons**: D-pad left/right steer; up/down and Start drive the menu
//! - **Backlight** and **vibration motor**: round feedback
//!
//! ```rust,ignore
//! let peripherals = badge_snake::badge::init();
//! let resources = badge_snake::split_resources!(peripherals);
//!
//! let display: Display = resources.display.into();
//! let Buttons { steering, menu } = resources.buttons.into();
//! ```

mod buttons;
mod display;
mod feedback;

pub use buttons::{
    Buttons,
    Menu,
    MenuAction,
    Steering,
};
pub use display::Display;
use esp_hal::{
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rom,
};
pub use feedback::{
    Cue,
    Feedback,
};

/// StaticCell helper: allocates a value into a `static` exactly once.
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO15,
            rst: GPIO7,
            sck: GPIO4,
            cs: GPIO6,
            miso: GPIO16,
            mosi: GPIO5,
            spi: SPI2,
            dma: DMA_CH0,
        },
        backlight: BacklightResources<'d> {
            led: GPIO19,
        },
        buttons: ButtonResources<'d> {
            left: GPIO21,
            right: GPIO2,
            up: GPIO11,
            down: GPIO1,
            start: GPIO12,
        },
        vibra: VibrationResources<'d> {
            motor: GPIO20,
        },
    }
}

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// The ESP32-S3 has to pass through an intermediate frequency on the way to
/// the target clock.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Bring up clocks and return the raw peripherals. Call once, first thing in
/// `main`, then split them with [`split_resources!`](crate::split_resources).
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}
