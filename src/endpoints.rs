//! Start and end cells of a segment
//!
//! The cell holding an endpoint is not always `floor(coord / w)`. When
//! a segment leaves its start point in the negative direction and the
//! start sits exactly on a grid line, the first cell the segment enters
//! is the one below (or left of) the nominal cell. Likewise a segment
//! moving in the positive direction that ends exactly on a grid line
//! never enters the cell starting at that line. Each axis is corrected
//! on its own and both corrections may apply at once.

use crate::cell::{Cell, CellWidth, Point};

/// First and last cell of a traversal
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Endpoints {
    pub start: Cell,
    pub end: Cell,
}

fn start_index(a: i32, b: i32, w: CellWidth) -> i32 {
    let i = w.index(a);
    if b < a && w.on_boundary(a) { i - 1 } else { i }
}

fn end_index(a: i32, b: i32, w: CellWidth) -> i32 {
    let i = w.index(b);
    if b > a && w.on_boundary(b) { i - 1 } else { i }
}

/// Cell the segment from `p1` to `p2` starts in
pub fn start_cell(p1: Point, p2: Point, w: CellWidth) -> Cell {
    Cell::at(start_index(p1.x, p2.x, w), start_index(p1.y, p2.y, w))
}

/// Last cell the segment from `p1` to `p2` passes through
pub fn end_cell(p1: Point, p2: Point, w: CellWidth) -> Cell {
    Cell::at(end_index(p1.x, p2.x, w), end_index(p1.y, p2.y, w))
}

/// Corrected start and end cells, without running the traversal
///
/// Always equal to the first and last cells produced by
/// [`traverse_inclusive`](crate::traverse_inclusive).
pub fn endpoint_cells(p1: Point, p2: Point, w: CellWidth) -> Endpoints {
    Endpoints { start: start_cell(p1, p2, w), end: end_cell(p1, p2, w) }
}
