//! Points, grid cells and the cell width

use std::convert::TryFrom;
use std::fmt;

use crate::error::Error;
use crate::math::{floor_div, floor_mod};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point in the fine-grained (sub-cell) coordinate space
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new Point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32,i32)> for Point {
    fn from((x,y): (i32,i32)) -> Self {
        Self { x, y }
    }
}

/// Grid cell index
///
/// Cell `(x,y)` covers the half-open square
/// `[x*w, (x+1)*w) x [y*w, (y+1)*w)` for a cell width `w`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash,PartialOrd,Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new Cell at (x,y)
    pub const fn at(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    pub fn equal(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
    /// True if `other` shares an edge or a corner with this cell
    pub fn touches(&self, other: &Cell) -> bool {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        dx <= 1 && dy <= 1 && (dx, dy) != (0, 0)
    }
    /// Number of unit axis steps between two cells
    pub fn manhattan(&self, other: &Cell) -> u64 {
        let dx = (i64::from(self.x) - i64::from(other.x)).abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).abs();
        (dx + dy) as u64
    }
}

impl From<(i32,i32)> for Cell {
    fn from((x,y): (i32,i32)) -> Self {
        Self::at(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Number of fine coordinate units spanned by one cell along each axis
///
/// Always strictly positive. Construction fails for `w <= 0`, so a
/// traversal can never see an invalid width.
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct CellWidth(i32);

impl CellWidth {
    /// Validate a cell width
    pub fn new(w: i32) -> Result<Self, Error> {
        if w <= 0 {
            return Err(Error::InvalidCellWidth(i64::from(w)));
        }
        Ok(Self(w))
    }
    /// Cell width from a value known to be positive
    ///
    /// # Panics
    ///
    /// Panics if `w <= 0`
    pub fn of(w: i32) -> Self {
        assert!(w > 0, "cell width must be positive, got {}", w);
        Self(w)
    }
    pub fn get(self) -> i32 {
        self.0
    }
    /// Cell index containing the coordinate `v`
    pub fn index(self, v: i32) -> i32 {
        floor_div(v, self.0)
    }
    /// Offset of `v` inside its cell, in `[0, w)`
    pub fn offset(self, v: i32) -> i32 {
        floor_mod(v, self.0)
    }
    /// True if `v` lies exactly on a grid line
    pub fn on_boundary(self, v: i32) -> bool {
        self.offset(v) == 0
    }
    /// Cell containing the point `p`, without any boundary correction
    pub fn cell_of(self, p: Point) -> Cell {
        Cell::at(self.index(p.x), self.index(p.y))
    }
}

impl TryFrom<i32> for CellWidth {
    type Error = Error;
    fn try_from(w: i32) -> Result<Self, Error> {
        Self::new(w)
    }
}

impl From<CellWidth> for i32 {
    fn from(w: CellWidth) -> i32 {
        w.0
    }
}
