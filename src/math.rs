//! Exact integer helpers
//!
//! Nothing here touches floating point. Cell indices use floor division
//! so negative coordinates land in the cell that actually contains them,
//! and clip parameters are kept as exact fractions compared by
//! cross-multiplication.

use std::cmp::Ordering;
use std::convert::TryFrom;

/// Floor division, `w` must be positive
///
/// `-1 / 4` is `-1`, not the truncated `0`
pub fn floor_div(v: i32, w: i32) -> i32 {
    debug_assert!(w > 0);
    v.div_euclid(w)
}

/// Floor modulo, result is in `[0, w)`, `w` must be positive
pub fn floor_mod(v: i32, w: i32) -> i32 {
    debug_assert!(w > 0);
    v.rem_euclid(w)
}

/// Exact rational number `numerator / denominator`
///
/// The denominator is kept non-negative; a negative denominator moves
/// its sign onto the numerator. Comparison cross-multiplies in `i128`
/// so no pair of values built from `i32` coordinates can overflow.
#[derive(Debug,Copy,Clone)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Create a new Fraction, normalizing the sign of the denominator
    pub fn new(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator != 0, "fraction with zero denominator");
        if denominator < 0 {
            Self { numerator: -numerator, denominator: -denominator }
        } else {
            Self { numerator, denominator }
        }
    }
    pub const fn zero() -> Self {
        Self { numerator: 0, denominator: 1 }
    }
    pub const fn one() -> Self {
        Self { numerator: 1, denominator: 1 }
    }
    pub fn numerator(&self) -> i64 {
        self.numerator
    }
    pub fn denominator(&self) -> i64 {
        self.denominator
    }
    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }
    /// Strictly less than one
    pub fn is_below_one(&self) -> bool {
        self.numerator < self.denominator
    }
    /// Evaluate `a + self * d`, truncating toward zero
    ///
    /// Used to place a point at parameter `self` along a segment
    /// starting at `a` with extent `d`. None if the result does not fit
    /// in an `i32`, which cannot happen for `self` in `[0,1]` when
    /// `a + d` is itself an `i32`.
    pub fn lerp(&self, a: i32, d: i64) -> Option<i32> {
        let den = i128::from(self.denominator);
        let v = (i128::from(a) * den + i128::from(self.numerator) * i128::from(d)) / den;
        i32::try_from(v).ok()
    }
    fn cross(&self, other: &Fraction) -> (i128, i128) {
        (i128::from(self.numerator) * i128::from(other.denominator),
         i128::from(other.numerator) * i128::from(self.denominator))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        let (a, b) = self.cross(other);
        a == b
    }
}
impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        let (a, b) = self.cross(other);
        a.cmp(&b)
    }
}
