//! Drawing contract between the game and a display.
//!
//! [`Renderer`] is what [`Game::render`](crate::Game::render) talks to.
//! [`ScreenRenderer`] implements it on any `embedded-graphics` RGB565 target,
//! which on the badge is the ST7789 panel.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{
            FONT_6X10,
            FONT_10X20,
        },
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{
        Baseline,
        Text,
    },
};

use crate::{
    body::Segment,
    config::{
        Difficulty,
        GameConfig,
    },
    grid::Cell,
};

pub trait Renderer {
    type Error;

    /// Called before each board frame.
    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Segments arrive tail first; exactly one is marked as the head.
    fn draw_snake(&mut self, segments: impl Iterator<Item = Segment>) -> Result<(), Self::Error>;

    fn draw_fruit(&mut self, cell: Cell) -> Result<(), Self::Error>;

    fn draw_score(&mut self, score: u32) -> Result<(), Self::Error>;

    /// Called instead of a board frame once the round is over.
    fn on_round_end(&mut self, score: u32) -> Result<(), Self::Error>;
}

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const BODY_COLOR: Rgb565 = Rgb565::WHITE;
const HEAD_COLOR: Rgb565 = Rgb565::GREEN;
const FRUIT_COLOR: Rgb565 = Rgb565::RED;
const TEXT_COLOR: Rgb565 = Rgb565::WHITE;
const DIM_COLOR: Rgb565 = Rgb565::new(12, 24, 12);

/// Pixel geometry of the board: a score bar of `hud_px` rows, then square
/// cells of `cell_px` with a 1 px gap around each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub cell_px: u32,
    pub hud_px: u32,
    pub columns: u32,
    pub rows: u32,
}

impl Layout {
    pub const fn from_config(config: &GameConfig) -> Self {
        Self {
            cell_px: config.cell_px,
            hud_px: config.hud_px,
            columns: config.grid.width as u32,
            rows: config.grid.height as u32,
        }
    }

    /// Filled part of a cell, inside its 1 px border. Empty for cells under
    /// 3 px, which [`GameConfig::validate`] rejects.
    pub fn cell_rect(&self, cell: Cell) -> Rectangle {
        let px = self.cell_px as i32;
        Rectangle::new(
            Point::new(
                i32::from(cell.x) * px + 1,
                self.hud_px as i32 + i32::from(cell.y) * px + 1,
            ),
            Size::new(self.cell_px.saturating_sub(2), self.cell_px.saturating_sub(2)),
        )
    }

    pub fn hud_rect(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.columns * self.cell_px, self.hud_px))
    }

    pub fn board_rect(&self) -> Rectangle {
        Rectangle::new(
            Point::new(0, self.hud_px as i32),
            Size::new(self.columns * self.cell_px, self.rows * self.cell_px),
        )
    }
}

/// Full-redraw renderer: every board frame clears the score bar and the board
/// and paints them again.
pub struct ScreenRenderer<'a, D> {
    target: &'a mut D,
    layout: Layout,
}

impl<'a, D> ScreenRenderer<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D, config: &GameConfig) -> Self {
        Self {
            target,
            layout: Layout::from_config(config),
        }
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Idle screen: controls, current speed and how to start.
    pub fn draw_instructions(&mut self, difficulty: Difficulty) -> Result<(), D::Error> {
        let target = &mut *self.target;
        target.clear(BACKGROUND)?;

        let title = MonoTextStyle::new(&FONT_10X20, Rgb565::YELLOW);
        let text = MonoTextStyle::new(&FONT_6X10, TEXT_COLOR);
        let dim = MonoTextStyle::new(&FONT_6X10, DIM_COLOR);

        Text::with_baseline("SNAKE", Point::new(4, 4), title, Baseline::Top).draw(target)?;
        Text::with_baseline(
            "Left / Right: turn the snake",
            Point::new(4, 34),
            text,
            Baseline::Top,
        )
        .draw(target)?;
        Text::with_baseline("Up / Down: speed", Point::new(4, 50), text, Baseline::Top)
            .draw(target)?;

        let mut speed: heapless::String<24> = heapless::String::new();
        let _ = write!(speed, "< {} >", difficulty.label());
        Text::with_baseline(&speed, Point::new(16, 66), dim, Baseline::Top).draw(target)?;

        Text::with_baseline("Press START to begin!", Point::new(4, 90), text, Baseline::Top)
            .draw(target)?;
        Ok(())
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgb565) -> Result<(), D::Error> {
        let rect = self.layout.cell_rect(cell);
        self.target.fill_solid(&rect, color)
    }
}

impl<D> Renderer for ScreenRenderer<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn begin_frame(&mut self) -> Result<(), Self::Error> {
        let hud = self.layout.hud_rect();
        let board = self.layout.board_rect();
        self.target.fill_solid(&hud, BACKGROUND)?;
        self.target.fill_solid(&board, BACKGROUND)
    }

    fn draw_snake(&mut self, segments: impl Iterator<Item = Segment>) -> Result<(), Self::Error> {
        for segment in segments {
            let color = if segment.is_head { HEAD_COLOR } else { BODY_COLOR };
            self.fill_cell(segment.cell, color)?;
        }
        Ok(())
    }

    fn draw_fruit(&mut self, cell: Cell) -> Result<(), Self::Error> {
        self.fill_cell(cell, FRUIT_COLOR)
    }

    fn draw_score(&mut self, score: u32) -> Result<(), Self::Error> {
        let mut text: heapless::String<24> = heapless::String::new();
        let _ = write!(text, "Score: {score}");
        let style = MonoTextStyle::new(&FONT_6X10, TEXT_COLOR);
        Text::with_baseline(&text, Point::new(2, 2), style, Baseline::Top).draw(&mut *self.target)?;
        Ok(())
    }

    fn on_round_end(&mut self, score: u32) -> Result<(), Self::Error> {
        let target = &mut *self.target;
        target.clear(BACKGROUND)?;

        let style = MonoTextStyle::new(&FONT_10X20, TEXT_COLOR);
        let mut value: heapless::String<16> = heapless::String::new();
        let _ = write!(value, "{score}");
        Text::with_baseline("Score:", Point::zero(), style, Baseline::Top).draw(target)?;
        Text::with_baseline(&value, Point::new(0, 24), style, Baseline::Top).draw(target)?;
        Ok(())
    }
}
