//! Compile-time game configuration.

use embassy_time::Duration;

use crate::{
    Error,
    grid::Grid,
};

/// Badge panel size in pixels (landscape).
pub const DISPLAY_WIDTH_PX: u32 = 320;
pub const DISPLAY_HEIGHT_PX: u32 = 170;

/// Mechanical bounce on the badge buttons settles well inside this.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);

/// Cell count of the badge grid; the body's static capacity.
pub const BADGE_CELLS: usize = GameConfig::BADGE.grid.cell_count();

/// Speed selection, made once on the idle screen before each round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    const fn index(self) -> usize {
        self as usize
    }

    /// Next harder setting, saturating at `Hard`.
    #[must_use]
    pub const fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            _ => Difficulty::Hard,
        }
    }

    /// Next easier setting, saturating at `Easy`.
    #[must_use]
    pub const fn easier(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Normal,
            _ => Difficulty::Easy,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Tick period per difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedTable([Duration; 3]);

impl SpeedTable {
    /// 500/300/150 ms, the badge's speeds.
    pub const BADGE: SpeedTable = SpeedTable::new(
        Duration::from_millis(500),
        Duration::from_millis(300),
        Duration::from_millis(150),
    );

    pub const fn new(easy: Duration, normal: Duration, hard: Duration) -> Self {
        Self([easy, normal, hard])
    }

    pub const fn period(&self, difficulty: Difficulty) -> Duration {
        self.0[difficulty.index()]
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self::BADGE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub grid: Grid,
    /// Side of one square cell in pixels.
    pub cell_px: u32,
    /// Height of the score bar above the board.
    pub hud_px: u32,
    pub score_per_fruit: u32,
    pub debounce: Duration,
    pub speeds: SpeedTable,
}

impl GameConfig {
    /// The Disobey 2026 badge: 320×170 panel, 15 px cells under a 15 px score
    /// bar, which gives a 21×10 board.
    pub const BADGE: GameConfig =
        GameConfig::for_display(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, 15, 15);

    /// Derive the grid from a panel size. Leftover pixels on the right and
    /// bottom edges stay unused. Each side is clamped to `i16::MAX` cells.
    pub const fn for_display(width_px: u32, height_px: u32, cell_px: u32, hud_px: u32) -> Self {
        let (w, h) = if cell_px == 0 || height_px < hud_px {
            (0, 0)
        } else {
            (width_px / cell_px, (height_px - hud_px) / cell_px)
        };
        Self {
            grid: Grid::new(clamp_cells(w), clamp_cells(h)),
            cell_px,
            hud_px,
            score_per_fruit: 1,
            debounce: DEBOUNCE_WINDOW,
            speeds: SpeedTable::BADGE,
        }
    }

    /// Same settings on an explicit grid, for boards that are not tied to a
    /// panel size.
    #[must_use]
    pub const fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub const fn tick_period(&self, difficulty: Difficulty) -> Duration {
        self.speeds.period(difficulty)
    }

    /// Check the configuration against a body capacity of `N` cells.
    pub fn validate<const N: usize>(&self) -> Result<(), Error> {
        let cells = self.grid.cell_count();
        if cells == 0 {
            return Err(Error::EmptyGrid);
        }
        if cells > N {
            return Err(Error::GridTooLarge { cells, capacity: N });
        }
        if self.cell_px < 3 {
            return Err(Error::CellTooSmall);
        }
        if Difficulty::ALL
            .iter()
            .any(|d| self.tick_period(*d) == Duration::from_ticks(0))
        {
            return Err(Error::ZeroTickPeriod);
        }
        Ok(())
    }
}

const fn clamp_cells(cells: u32) -> i16 {
    if cells > i16::MAX as u32 {
        i16::MAX
    } else {
        cells as i16
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BADGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_board_is_21_by_10() {
        assert_eq!(GameConfig::BADGE.grid, Grid::new(21, 10));
        assert_eq!(BADGE_CELLS, 210);
        assert_eq!(GameConfig::BADGE.validate::<BADGE_CELLS>(), Ok(()));
    }

    #[test]
    fn reference_board_from_portrait_panel() {
        // 135×240 portrait panel with a 15 px score bar.
        let config = GameConfig::for_display(135, 240, 15, 15);
        assert_eq!(config.grid, Grid::new(9, 15));
    }

    #[test]
    fn every_panel_shares_the_badge_speeds() {
        let config = GameConfig::for_display(135, 240, 15, 15);
        assert_eq!(config.speeds, SpeedTable::default());
        assert_eq!(GameConfig::BADGE.speeds, SpeedTable::BADGE);
    }

    #[test]
    fn huge_panels_clamp_instead_of_wrapping() {
        let config = GameConfig::for_display(u32::MAX, 100_000, 3, 0);
        assert_eq!(config.grid, Grid::new(i16::MAX, i16::MAX));
        assert!(config.grid.contains(crate::Cell::new(i16::MAX - 1, 0)));
        assert!(matches!(
            config.validate::<BADGE_CELLS>(),
            Err(Error::GridTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_grid_over_capacity() {
        assert_eq!(
            GameConfig::BADGE.validate::<100>(),
            Err(Error::GridTooLarge {
                cells: 210,
                capacity: 100
            })
        );
    }

    #[test]
    fn rejects_degenerate_configs() {
        let empty = GameConfig::for_display(320, 10, 15, 15);
        assert_eq!(empty.validate::<BADGE_CELLS>(), Err(Error::EmptyGrid));

        let tiny = GameConfig::for_display(20, 20, 2, 0);
        assert_eq!(tiny.validate::<200>(), Err(Error::CellTooSmall));

        let mut stalled = GameConfig::BADGE;
        stalled.speeds = SpeedTable::new(
            Duration::from_millis(100),
            Duration::from_millis(0),
            Duration::from_millis(50),
        );
        assert_eq!(stalled.validate::<BADGE_CELLS>(), Err(Error::ZeroTickPeriod));
    }

    #[test]
    fn harder_levels_tick_faster() {
        let speeds = SpeedTable::default();
        assert!(speeds.period(Difficulty::Easy) > speeds.period(Difficulty::Normal));
        assert!(speeds.period(Difficulty::Normal) > speeds.period(Difficulty::Hard));
        assert_eq!(Difficulty::Hard.harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder().harder(), Difficulty::Hard);
    }
}
