//! Grid traversal
//!
//! Walks every cell a segment passes through using only integer
//! arithmetic. A single signed accumulator, the balance, tracks which
//! grid line the segment reaches next:
//!
//! ```text
//!   balance = |dx| * y_dist - |dy| * x_dist
//! ```
//!
//! where `x_dist`/`y_dist` are the distances from the current position to
//! the next vertical/horizontal grid line in the direction of travel.
//! A non-negative balance means the vertical line comes first (step x),
//! a non-positive balance means the horizontal line comes first (step y).
//! Zero means both at once: the segment passes exactly through a corner
//! and moves diagonally, skipping the two cells that only share that
//! corner.
//!
//! Ties on grid lines favor the bottom/left cell: a horizontal segment
//! lying on a grid line belongs to the cells above it (their min-y edge),
//! a vertical segment to the cells right of it (their min-x edge).

use std::convert::TryFrom;
use std::iter::FusedIterator;

use log::trace;

use crate::cell::{Cell, CellWidth, Point};
use crate::endpoints::{end_cell, start_cell};

/// Traversal state machine
///
/// Built once from the segment, then stepped with [`advance`](Self::advance)
/// until [`is_end`](Self::is_end).
#[derive(Debug,Clone)]
pub struct LineTraverser {
    /// Clockwiseness of the segment relative to the next cell corner
    balance: i64,
    /// Change in balance for one step along x
    balance_dx: i64,
    /// Change in balance for one step along y
    balance_dy: i64,
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
    end: Cell,
}

impl LineTraverser {
    /// Create a traverser for the segment from `p1` to `p2`
    pub fn new(p1: Point, p2: Point, w: CellWidth) -> Self {
        let dx = i64::from(p2.x) - i64::from(p1.x);
        let dy = i64::from(p2.y) - i64::from(p1.y);
        let width = i64::from(w.get());

        let local_x = i64::from(w.offset(p1.x));
        let local_y = i64::from(w.offset(p1.y));
        let x_dist = if dx >= 0 { width - local_x } else { local_x };
        let y_dist = if dy >= 0 { width - local_y } else { local_y };

        let balance_dx = -dy.abs() * width;
        let balance_dy = dx.abs() * width;
        let mut balance = dx.abs() * y_dist - dy.abs() * x_dist;

        let start = start_cell(p1, p2, w);
        if start.x != w.index(p1.x) {
            balance += balance_dx;
        }
        if start.y != w.index(p1.y) {
            balance += balance_dy;
        }
        let end = end_cell(p1, p2, w);

        trace!("traverse ({},{}) -> ({},{}) w={}: cells {} -> {} balance {}",
               p1.x, p1.y, p2.x, p2.y, width, start, end, balance);

        Self {
            balance, balance_dx, balance_dy,
            x: start.x,
            y: start.y,
            step_x: if dx >= 0 { 1 } else { -1 },
            step_y: if dy >= 0 { 1 } else { -1 },
            end,
        }
    }
    /// Current cell
    pub fn cell(&self) -> Cell {
        Cell::at(self.x, self.y)
    }
    /// Last cell of the traversal
    pub fn end(&self) -> Cell {
        self.end
    }
    pub fn balance(&self) -> i64 {
        self.balance
    }
    /// True once the current cell is the last cell
    pub fn is_end(&self) -> bool {
        self.end.equal(self.x, self.y)
    }
    /// Step to the next cell
    ///
    /// Both axes step when the balance is exactly zero
    pub fn advance(&mut self) {
        let b = self.balance;
        if b >= 0 {
            self.x += self.step_x;
            self.balance += self.balance_dx;
        }
        if b <= 0 {
            self.y += self.step_y;
            self.balance += self.balance_dy;
        }
    }
    /// Upper bound on the number of cells left, including the current one
    fn budget(&self) -> u64 {
        self.cell().manhattan(&self.end) + 1
    }
    /// Iterate over all cells, first and last included
    pub fn inclusive(self) -> Inclusive {
        let remaining = self.budget();
        Inclusive { t: self, remaining }
    }
    /// Iterate over all cells except the first and last
    pub fn exclusive(self) -> Exclusive {
        let remaining = if self.is_end() { 0 } else { self.budget() - 2 };
        Exclusive { t: self, remaining }
    }
}

/// Cells of a segment including both end cells
///
/// Created by [`traverse_inclusive`]
#[derive(Debug,Clone)]
pub struct Inclusive {
    t: LineTraverser,
    remaining: u64,
}

impl Iterator for Inclusive {
    type Item = Cell;
    fn next(&mut self) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        let c = self.t.cell();
        if self.t.is_end() {
            self.remaining = 0;
        } else {
            self.remaining -= 1;
            self.t.advance();
        }
        Some(c)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.remaining > 0 { 1 } else { 0 };
        (n, usize::try_from(self.remaining).ok())
    }
}

impl FusedIterator for Inclusive {}

/// Cells of a segment strictly between its end cells
///
/// Created by [`traverse_exclusive`]
#[derive(Debug,Clone)]
pub struct Exclusive {
    t: LineTraverser,
    remaining: u64,
}

impl Iterator for Exclusive {
    type Item = Cell;
    fn next(&mut self) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        self.t.advance();
        if self.t.is_end() {
            self.remaining = 0;
            return None;
        }
        self.remaining -= 1;
        Some(self.t.cell())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}

impl FusedIterator for Exclusive {}

/// Cells crossed by the segment from `p1` to `p2`, end cells included
///
/// A zero-length segment yields exactly one cell.
pub fn traverse_inclusive(p1: Point, p2: Point, w: CellWidth) -> Inclusive {
    LineTraverser::new(p1, p2, w).inclusive()
}

/// Cells crossed by the segment from `p1` to `p2`, end cells excluded
///
/// Yields nothing if the segment starts and ends in the same cell.
pub fn traverse_exclusive(p1: Point, p2: Point, w: CellWidth) -> Exclusive {
    LineTraverser::new(p1, p2, w).exclusive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(v: &[(i32,i32)]) -> Vec<Cell> {
        v.iter().map(|&c| Cell::from(c)).collect()
    }
    fn inc(x1: i32, y1: i32, x2: i32, y2: i32, w: i32) -> Vec<Cell> {
        traverse_inclusive(Point::new(x1,y1), Point::new(x2,y2), CellWidth::of(w)).collect()
    }
    fn exc(x1: i32, y1: i32, x2: i32, y2: i32, w: i32) -> Vec<Cell> {
        traverse_exclusive(Point::new(x1,y1), Point::new(x2,y2), CellWidth::of(w)).collect()
    }

    #[test_log::test]
    fn anti_diagonal_through_corners() {
        assert_eq!(inc(0,7,7,0,1),
                   cells(&[(0,6),(1,5),(2,4),(3,3),(4,2),(5,1),(6,0)]));
        assert_eq!(exc(0,7,7,0,1),
                   cells(&[(1,5),(2,4),(3,3),(4,2),(5,1)]));
    }

    #[test_log::test]
    fn diagonal_skips_corner_cells() {
        assert_eq!(inc(0,0,2,2,1), cells(&[(0,0),(1,1)]));
        assert_eq!(inc(0,2,2,0,1), cells(&[(0,1),(1,0)]));
        assert_eq!(exc(0,0,2,2,1), cells(&[]));
    }

    #[test]
    fn shallow_line_ordering() {
        // crosses y=1 at x=2.5
        assert_eq!(inc(0,0,5,2,1), cells(&[(0,0),(1,0),(2,0),(2,1),(3,1),(4,1)]));
        assert_eq!(exc(0,0,5,2,1), cells(&[(1,0),(2,0),(2,1),(3,1)]));
    }

    #[test]
    fn horizontal_on_grid_line_takes_cells_above() {
        assert_eq!(inc(0,4,12,4,4), cells(&[(0,1),(1,1),(2,1)]));
        assert_eq!(inc(12,4,0,4,4), cells(&[(2,1),(1,1),(0,1)]));
    }

    #[test]
    fn vertical_on_grid_line_takes_cells_right() {
        assert_eq!(inc(4,0,4,12,4), cells(&[(1,0),(1,1),(1,2)]));
        assert_eq!(inc(4,12,4,0,4), cells(&[(1,2),(1,1),(1,0)]));
    }

    #[test]
    fn negative_coordinates() {
        // ends on x=2, the cell starting there is never entered
        assert_eq!(inc(-3,-1,2,-1,2), cells(&[(-2,-1),(-1,-1),(0,-1)]));
        assert_eq!(inc(0,0,-2,-1,1), cells(&[(-1,-1),(-2,-1)]));
        assert_eq!(inc(-2,-1,0,0,1), cells(&[(-2,-1),(-1,-1)]));
    }

    #[test]
    fn single_cell() {
        assert_eq!(inc(5,5,5,5,1), cells(&[(5,5)]));
        assert_eq!(exc(5,5,5,5,1), cells(&[]));
        assert_eq!(inc(1,1,3,2,4), cells(&[(0,0)]));
        assert_eq!(exc(1,1,3,2,4), cells(&[]));
    }

    #[test]
    fn two_cells_exclusive_is_empty() {
        assert_eq!(inc(0,0,3,1,2), cells(&[(0,0),(1,0)]));
        assert_eq!(exc(0,0,3,1,2), cells(&[]));
    }

    #[test]
    fn state_machine() {
        let mut t = LineTraverser::new(Point::new(0,7), Point::new(7,0), CellWidth::of(1));
        assert_eq!(t.cell(), Cell::at(0,6));
        assert_eq!(t.end(), Cell::at(6,0));
        assert_eq!(t.balance(), 0);
        assert!(!t.is_end());
        t.advance();
        assert_eq!(t.cell(), Cell::at(1,5));
        assert_eq!(t.balance(), 0);

        let mut t = LineTraverser::new(Point::new(0,0), Point::new(5,2), CellWidth::of(1));
        // |dx|*1 - |dy|*1
        assert_eq!(t.balance(), 3);
        t.advance();
        assert_eq!(t.cell(), Cell::at(1,0));
        assert_eq!(t.balance(), 1);
    }

    #[test]
    fn size_hint_bounds() {
        let it = traverse_inclusive(Point::new(0,7), Point::new(7,0), CellWidth::of(1));
        let (lo, hi) = it.size_hint();
        assert_eq!(lo, 1);
        assert!(hi.unwrap() >= it.clone().count());
        let it = traverse_exclusive(Point::new(2,2), Point::new(2,2), CellWidth::of(1));
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn fused() {
        let mut it = traverse_inclusive(Point::new(0,0), Point::new(1,0), CellWidth::of(4));
        assert_eq!(it.next(), Some(Cell::at(0,0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let p1 = Point::new(i32::MIN + 1, i32::MIN + 1);
        let p2 = Point::new(i32::MAX, i32::MAX);
        let w = CellWidth::of(1 << 30);
        let v: Vec<Cell> = traverse_inclusive(p1, p2, w).collect();
        assert_eq!(v.first(), Some(&Cell::at(-2,-2)));
        assert_eq!(v.last(), Some(&Cell::at(1,1)));
        assert!(v.windows(2).all(|p| p[0].touches(&p[1])));
    }
}
