//! Grid coordinates, headings and turns.

/// One cell of the playfield. Negative or too-large coordinates are legal
/// values; they are how a head that left the board is represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit();
        Self::new(self.x + dx, self.y + dy)
    }

    /// True when `other` is exactly one cardinal step away.
    pub const fn is_adjacent(self, other: Cell) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }
}

/// Heading of the snake. The discriminants form the 4-cycle N → E → S → W.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    const fn from_index(i: u8) -> Self {
        match i % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    /// Apply one turn. There is deliberately no way to reverse in one call.
    #[must_use]
    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Clockwise => self.clockwise(),
            Turn::CounterClockwise => self.counter_clockwise(),
        }
    }

    /// Unit vector in screen coordinates (+y is down).
    pub const fn unit(self) -> (i16, i16) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// A latched steering intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// Size of the playfield in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub const fn new(width: i16, height: i16) -> Self {
        Self { width, height }
    }

    /// Strict bounds: `0 <= x < width` and `0 <= y < height`.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Total number of cells, the upper bound on the snake's length.
    pub const fn cell_count(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Where a new snake is born: one column left of centre, middle row.
    pub const fn start_cell(&self) -> Cell {
        let x = self.width / 2 - 1;
        Cell::new(if x < 0 { 0 } else { x }, self.height / 2)
    }
}
