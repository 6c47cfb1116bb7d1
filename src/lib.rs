//! Exact grid traversal and rectangle clipping for line segments
//!
//! How does this work
//!
//! ```text
//!    p1, p2   = points in sub-cell units
//!    w        = CellWidth (sub-cell units per cell)
//!  Clip (optional)
//!    clip_to_rectangle(p1, p2, rect)
//!      trivial reject on clip_flags()
//!      clip_slabs() -- entry/exit Fractions, max(entry) .. min(exit)
//!    Output: Segment inside the rectangle, or None
//!  Traverse
//!    traverse_inclusive(p1, p2, w) / traverse_exclusive(p1, p2, w)
//!      endpoint_cells()     -- start/end cell with grid line correction
//!      LineTraverser::new() -- seed balance
//!      advance()            -- step x, y or both by the sign of balance
//!    Output: Cells in order from start to end
//!  Draw
//!    Canvas::draw_line() / draw_line_clipped()
//!      set() -- ignores cells outside the buffer
//! ```
//!
//! No floating point is used for any decision: cell indices use floor
//! division, the traversal compares integer products, and clip
//! parameters are exact fractions.
//!
//!     use gridline::{traverse_inclusive, clip_to_rectangle};
//!     use gridline::{Cell, CellWidth, Point, Rectangle};
//!
//!     let w = CellWidth::new(1).unwrap();
//!     let cells: Vec<Cell> = traverse_inclusive(Point::new(0,7), Point::new(7,0), w).collect();
//!     assert_eq!(cells.first(), Some(&Cell::at(0,6)));
//!     assert_eq!(cells.len(), 7);
//!
//!     let r = Rectangle::new(0, 0, 4, 4);
//!     let seg = clip_to_rectangle(Point::new(2,0), Point::new(2,100), &r);
//!     assert_eq!(seg, Some((Point::new(2,0), Point::new(2,4))));
//!

pub mod error;
pub mod math;
pub mod cell;
pub mod endpoints;
pub mod traverse;
pub mod clip;
pub mod color;
pub mod canvas;

pub use error::*;
pub use math::*;
pub use cell::*;
pub use endpoints::*;
pub use traverse::*;
pub use clip::*;
pub use color::*;
pub use canvas::*;
