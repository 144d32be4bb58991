//! Construction-time errors.
//!
//! Collisions are game outcomes, not errors, and broken body invariants panic.
//! What is left is rejecting a configuration or a hand-built layout before a
//! round starts.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Grid has no cells.
    EmptyGrid,
    /// Grid has more cells than the body's static capacity.
    GridTooLarge { cells: usize, capacity: usize },
    /// Cells below 3 px cannot show the 1 px border.
    CellTooSmall,
    /// A difficulty maps to a zero tick period.
    ZeroTickPeriod,
    /// Layout without any segment.
    EmptyBody,
    /// Segment `index` is not a cardinal neighbour of the one before it.
    DisjointBody { index: usize },
    /// Segment `index` repeats an earlier cell.
    DuplicateCell { index: usize },
    /// Segment `index` lies outside the grid.
    CellOffGrid { index: usize },
    /// Layout longer than the body's static capacity.
    BodyTooLong,
    /// Restored fruit lies outside the grid.
    FruitOffGrid,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGrid => f.write_str("grid has no cells"),
            Error::GridTooLarge { cells, capacity } => {
                write!(f, "grid has {cells} cells but the body holds at most {capacity}")
            }
            Error::CellTooSmall => f.write_str("cells must be at least 3 px wide"),
            Error::ZeroTickPeriod => f.write_str("tick period must be non-zero"),
            Error::EmptyBody => f.write_str("snake body needs at least one segment"),
            Error::DisjointBody { index } => {
                write!(f, "segment {index} is not adjacent to the previous one")
            }
            Error::DuplicateCell { index } => write!(f, "segment {index} repeats a cell"),
            Error::CellOffGrid { index } => write!(f, "segment {index} is outside the grid"),
            Error::BodyTooLong => f.write_str("snake body exceeds its capacity"),
            Error::FruitOffGrid => f.write_str("fruit is outside the grid"),
        }
    }
}

impl core::error::Error for Error {}
