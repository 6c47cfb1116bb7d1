//! Clipping Region
//!
//! Slab clipping of a segment against an inclusive rectangle. Each
//! pair of parallel edges gives an entry and an exit parameter along the
//! segment; the visible part runs from the latest entry to the earliest
//! exit. Parameters are exact [`Fraction`]s, so a segment grazing a
//! corner never flips between hit and miss through rounding.
//!
//! See [Liang Barsky](https://en.wikipedia.org/wiki/Liang-Barsky_algorithm)

use std::cmp::{max, min};

use log::trace;

use crate::cell::Point;
use crate::math::Fraction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rectangle with inclusive bounds
///
/// Bounds are stored as given. A rectangle with `x1 > x2` or `y1 > y2`
/// is empty and nothing clips into it.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    /// Minimum x value
    pub x1: i32,
    /// Minimum y value
    pub y1: i32,
    /// Maximum x value
    pub x2: i32,
    /// Maximum y value
    pub y2: i32,
}

impl Rectangle {
    /// Create a new Rectangle from its minimum and maximum corners
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
    /// Smallest rectangle holding both points
    pub fn spanning(a: Point, b: Point) -> Self {
        Self::new(min(a.x, b.x), min(a.y, b.y), max(a.x, b.x), max(a.y, b.y))
    }
    /// True if the rectangle holds no points
    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }
    pub fn contains(&self, p: Point) -> bool {
        self.clip_flags(p.x, p.y) == INSIDE && !self.is_empty()
    }
    /// Get location of point relative to rectangle
    ///
    /// Returned is an a u8 made up of the following bits:
    /// - [INSIDE](constant.INSIDE.html)
    /// - [LEFT](constant.LEFT.html)
    /// - [RIGHT](constant.RIGHT.html)
    /// - [BOTTOM](constant.BOTTOM.html)
    /// - [TOP](constant.TOP.html)
    ///
    pub fn clip_flags(&self, x: i32, y: i32) -> u8 {
        let mut code = INSIDE;
        if x < self.x1 { code |= LEFT; }
        if x > self.x2 { code |= RIGHT; }
        if y < self.y1 { code |= BOTTOM; }
        if y > self.y2 { code |= TOP; }
        code
    }
    /// Portion of the segment from `p1` to `p2` inside the rectangle
    ///
    /// See [`clip_to_rectangle`]
    pub fn clip_line(&self, p1: Point, p2: Point) -> Option<(Point, Point)> {
        clip_to_rectangle(p1, p2, self)
    }
}

/// Inside Region
pub const INSIDE : u8 = 0b0000;
/// Left of Region
pub const LEFT   : u8 = 0b0000_0001;
/// Right of Region
pub const RIGHT  : u8 = 0b0000_0010;
/// Below Region
pub const BOTTOM : u8 = 0b0000_0100;
/// Above Region
pub const TOP    : u8 = 0b0000_1000;

fn clamp(v: i32, lo: i32, hi: i32) -> i32 {
    max(min(v, hi), lo)
}

/// Segment lying along one axis
///
/// `a1`,`a2` run along the segment, `b` is the fixed coordinate.
/// Returns the clipped run, or None when the segment misses or the
/// clipped run collapses to a single point.
fn clip_axis(a1: i32, a2: i32, b: i32, a_lo: i32, a_hi: i32, b_lo: i32, b_hi: i32) -> Option<(i32, i32)> {
    let on_line = b >= b_lo && b <= b_hi;
    let overlaps = min(a1, a2) <= a_hi && max(a1, a2) >= a_lo;
    let (c1, c2) = (clamp(a1, a_lo, a_hi), clamp(a2, a_lo, a_hi));
    if on_line && overlaps && c1 != c2 {
        Some((c1, c2))
    } else {
        None
    }
}

/// Clip the segment from `p1` to `p2` to the inclusive rectangle `r`
///
/// Returns the part of the segment inside `r` with its direction kept,
/// or None if nothing of positive length lies inside. Clipped endpoints
/// are placed at `p1 + t * (p2 - p1)` truncated toward zero, so they can
/// sit one unit off the exact intersection.
pub fn clip_to_rectangle(p1: Point, p2: Point, r: &Rectangle) -> Option<(Point, Point)> {
    if r.is_empty() {
        trace!("clip: empty rectangle {:?}", r);
        return None;
    }
    // Both ends beyond the same edge
    if r.clip_flags(p1.x, p1.y) & r.clip_flags(p2.x, p2.y) != INSIDE {
        trace!("clip: ({},{}) -> ({},{}) outside {:?}", p1.x, p1.y, p2.x, p2.y, r);
        return None;
    }
    let dx = i64::from(p2.x) - i64::from(p1.x);
    let dy = i64::from(p2.y) - i64::from(p1.y);
    let out = if dx == 0 {
        clip_axis(p1.y, p2.y, p1.x, r.y1, r.y2, r.x1, r.x2)
            .map(|(y1, y2)| (Point::new(p1.x, y1), Point::new(p2.x, y2)))
    } else if dy == 0 {
        clip_axis(p1.x, p2.x, p1.y, r.x1, r.x2, r.y1, r.y2)
            .map(|(x1, x2)| (Point::new(x1, p1.y), Point::new(x2, p2.y)))
    } else {
        clip_slabs(p1, p2, dx, dy, r)
    };
    trace!("clip: ({},{}) -> ({},{}) in {:?} => {:?}", p1.x, p1.y, p2.x, p2.y, r, out);
    out
}

fn clip_slabs(p1: Point, p2: Point, dx: i64, dy: i64, r: &Rectangle) -> Option<(Point, Point)> {
    let (entry_x, exit_x) = if dx >= 0 { (r.x1, r.x2) } else { (r.x2, r.x1) };
    let (entry_y, exit_y) = if dy >= 0 { (r.y1, r.y2) } else { (r.y2, r.y1) };
    let param = |edge: i32, start: i32, d: i64| Fraction::new(i64::from(edge) - i64::from(start), d);

    let t_near = max(param(entry_x, p1.x, dx), param(entry_y, p1.y, dy));
    let t_far = min(param(exit_x, p1.x, dx), param(exit_y, p1.y, dy));

    if !(t_near < t_far && t_near.is_below_one() && t_far.is_positive()) {
        return None;
    }
    // t in (0,1), so the point lies between p1 and p2 and fits an i32
    let at = |t: &Fraction| Some(Point::new(t.lerp(p1.x, dx)?, t.lerp(p1.y, dy)?));
    let q1 = if t_near.is_positive() { at(&t_near)? } else { p1 };
    let q2 = if t_far.is_below_one() { at(&t_far)? } else { p2 };
    Some((q1, q2))
}
