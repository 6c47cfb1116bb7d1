//! Rendering buffer
//!
//! Destination for traversed cells: every cell becomes one pixel,
//! writes outside the buffer are silently dropped.

use std::convert::TryFrom;
use std::ops::Index;
use std::path::Path;

use log::debug;

use crate::cell::{Cell, CellWidth, Point};
use crate::clip::{clip_to_rectangle, Rectangle};
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::traverse::{traverse_exclusive, traverse_inclusive};

/// Whether the end cells of a line are drawn
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum EndpointMode {
    /// Draw the start and end cells
    Include,
    /// Skip the start and end cells
    Exclude,
}

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), one `T` per cell
#[derive(Debug,Clone)]
pub struct Canvas<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy> Canvas<T> {
    /// Create a new buffer of width x height filled with `background`
    ///
    ///     use gridline::Canvas;
    ///
    ///     let pix = Canvas::new(3, 2, 0u32).unwrap();
    ///     assert_eq!(pix.pixels().len(), 6);
    ///     assert!(Canvas::new(0, 2, 0u32).is_err());
    ///
    pub fn new(width: usize, height: usize, background: T) -> Result<Self> {
        // Pixels are addressed by i32 cell indices
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(Error::InvalidCanvas { width, height });
        }
        let n = width.checked_mul(height).ok_or(Error::InvalidCanvas { width, height })?;
        Ok(Self { data: vec![background; n], width, height })
    }
    /// Image Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixels(&self) -> &[T] {
        &self.data
    }
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
    /// Value at (`x`,`y`), None outside the buffer
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        self.offset(x, y).map(|i| self.data[i])
    }
    /// Set the value at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use gridline::Canvas;
    ///
    ///     let mut pix = Canvas::new(2, 2, 0u32).unwrap();
    ///     pix.set(1, 0, 7);
    ///     pix.set(-1, 0, 7);
    ///     pix.set(2, 1, 7);
    ///     assert_eq!(pix.pixels(), &[0, 7, 0, 0]);
    ///
    pub fn set(&mut self, x: i32, y: i32, v: T) {
        if let Some(i) = self.offset(x, y) {
            self.data[i] = v;
        }
    }
    pub fn set_cell(&mut self, c: Cell, v: T) {
        self.set(c.x, c.y, v);
    }
    /// Set every pixel to `v`
    pub fn fill(&mut self, v: T) {
        self.data.iter_mut().for_each(|p| *p = v);
    }
    /// Draw the cells crossed by the segment from `p1` to `p2`
    ///
    /// `p1` and `p2` are in sub-cell units, `w` of them per pixel
    pub fn draw_line(&mut self, p1: Point, p2: Point, w: CellWidth, v: T, mode: EndpointMode) {
        match mode {
            EndpointMode::Include => traverse_inclusive(p1, p2, w).for_each(|c| self.set_cell(c, v)),
            EndpointMode::Exclude => traverse_exclusive(p1, p2, w).for_each(|c| self.set_cell(c, v)),
        }
    }
    /// Buffer bounds in sub-cell units, `[0, width*w] x [0, height*w]`
    pub fn extent(&self, w: CellWidth) -> Rectangle {
        let span = |n: usize| {
            let n = i64::try_from(n).unwrap_or(i64::MAX);
            let v = n.saturating_mul(i64::from(w.get()));
            i32::try_from(v).unwrap_or(i32::MAX)
        };
        Rectangle::new(0, 0, span(self.width), span(self.height))
    }
    /// Clip the segment to the buffer extent, then draw it
    ///
    /// Returns false, drawing nothing, if the segment misses the buffer.
    ///
    /// What gets drawn is the clipped segment, whose new endpoints are
    /// truncated to integer coordinates. For sloped segments that rounding
    /// tilts the line slightly, so the cells can differ from
    /// [`draw_line`](Self::draw_line) on the unclipped segment, and with
    /// [`EndpointMode::Exclude`] the skipped end cells are those of the
    /// clipped segment. A zero-length segment inside the extent is drawn
    /// like `draw_line` draws it.
    pub fn draw_line_clipped(&mut self, p1: Point, p2: Point, w: CellWidth, v: T, mode: EndpointMode) -> bool {
        let extent = self.extent(w);
        if p1 == p2 {
            if !extent.contains(p1) {
                return false;
            }
            self.draw_line(p1, p2, w, v, mode);
            return true;
        }
        match clip_to_rectangle(p1, p2, &extent) {
            Some((q1, q2)) => {
                self.draw_line(q1, q2, w, v, mode);
                true
            }
            None => false,
        }
    }
}

impl<T: Copy + PartialEq> Canvas<T> {
    /// Cells holding `v`, in row-major order
    ///
    /// Both dimensions are at most `i32::MAX`, checked in `new`
    pub fn positions(&self, v: T) -> Vec<Cell> {
        let w = self.width;
        self.data.iter().enumerate()
            .filter(|(_, p)| **p == v)
            .map(|(i, _)| Cell::at((i % w) as i32, (i / w) as i32))
            .collect()
    }
}

impl<T> Index<(usize,usize)> for Canvas<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &T {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}

impl Canvas<Rgb8> {
    /// Copy into an `image` buffer
    pub fn to_image(&self) -> Result<image::RgbImage> {
        let (w, h) = match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(Error::InvalidCanvas { width: self.width, height: self.height }),
        };
        Ok(image::RgbImage::from_fn(w, h, |x, y| {
            image::Rgb(self[(x as usize, y as usize)].to_array())
        }))
    }
    /// Write the buffer as a PNG file, row 0 at the top
    pub fn save_png<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        debug!("canvas: writing {}x{} png to {}", self.width, self.height, filename.as_ref().display());
        let img = self.to_image()?;
        img.save_with_format(filename, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Read an image file into a buffer
pub fn read_png<P: AsRef<Path>>(filename: P) -> Result<Canvas<Rgb8>> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let mut pix = Canvas::new(w as usize, h as usize, Rgb8::black())?;
    for (x, y, p) in img.enumerate_pixels() {
        pix.set(x as i32, y as i32, Rgb8::new(p[0], p[1], p[2]));
    }
    Ok(pix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w1() -> CellWidth {
        CellWidth::of(1)
    }

    #[test]
    fn zero_size_rejected() {
        assert!(matches!(Canvas::new(0, 0, 0u8), Err(Error::InvalidCanvas { width: 0, height: 0 })));
    }

    #[test]
    fn out_of_range_ignored() {
        let mut pix = Canvas::new(4, 4, 0u32).unwrap();
        pix.draw_line(Point::new(-3, 2), Point::new(9, 2), w1(), 1, EndpointMode::Include);
        assert_eq!(pix.positions(1), vec![Cell::at(0,2), Cell::at(1,2), Cell::at(2,2), Cell::at(3,2)]);
        assert_eq!(pix.get(4, 2), None);
        assert_eq!(pix.get(-1, 2), None);
        assert_eq!(pix[(3,2)], 1);
    }

    #[test]
    fn exclude_mode_skips_ends() {
        let mut pix = Canvas::new(8, 8, 0u32).unwrap();
        pix.draw_line(Point::new(0, 7), Point::new(7, 0), w1(), 1, EndpointMode::Exclude);
        assert_eq!(pix.get(0, 6), Some(0));
        assert_eq!(pix.get(6, 0), Some(0));
        assert_eq!(pix.positions(1).len(), 5);
    }

    #[test]
    fn clipped_matches_unclipped_inside() {
        let mut a = Canvas::new(10, 10, 0u32).unwrap();
        let mut b = a.clone();
        a.draw_line(Point::new(-100, 5), Point::new(100, 5), w1(), 1, EndpointMode::Include);
        assert!(b.draw_line_clipped(Point::new(-100, 5), Point::new(100, 5), w1(), 1, EndpointMode::Include));
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(b.positions(1).len(), 10);
    }

    #[test]
    fn clipped_miss_draws_nothing() {
        let mut pix = Canvas::new(10, 10, 0u32).unwrap();
        assert!(!pix.draw_line_clipped(Point::new(20, 20), Point::new(40, 30), w1(), 1, EndpointMode::Include));
        assert!(pix.positions(1).is_empty());
    }

    #[test]
    fn clipped_zero_length_draws_one_cell() {
        let mut a = Canvas::new(10, 10, 0u32).unwrap();
        let mut b = a.clone();
        let p = Point::new(5, 5);
        a.draw_line(p, p, w1(), 1, EndpointMode::Include);
        assert!(b.draw_line_clipped(p, p, w1(), 1, EndpointMode::Include));
        assert_eq!(b.positions(1), vec![Cell::at(5,5)]);
        assert_eq!(a.pixels(), b.pixels());

        let q = Point::new(50, 5);
        assert!(!b.draw_line_clipped(q, q, w1(), 2, EndpointMode::Include));
        assert!(b.positions(2).is_empty());
    }

    #[test]
    fn clipped_sloped_draws_rounded_segment() {
        let w = CellWidth::of(4);
        let (p1, p2) = (Point::new(-37, 5), Point::new(61, 33));
        let mut pix = Canvas::new(10, 10, 0u32).unwrap();
        assert!(pix.draw_line_clipped(p1, p2, w, 1, EndpointMode::Include));

        // clipped to (0,15) -> (40,27)
        let (q1, q2) = pix.extent(w).clip_line(p1, p2).unwrap();
        assert_eq!((q1, q2), (Point::new(0, 15), Point::new(40, 27)));
        let mut want = Canvas::new(10, 10, 0u32).unwrap();
        want.draw_line(q1, q2, w, 1, EndpointMode::Include);
        assert_eq!(pix.pixels(), want.pixels());
        assert_eq!(pix.positions(1), vec![
            Cell::at(0,3),
            Cell::at(0,4), Cell::at(1,4), Cell::at(2,4), Cell::at(3,4), Cell::at(4,4),
            Cell::at(4,5), Cell::at(5,5), Cell::at(6,5), Cell::at(7,5),
            Cell::at(7,6), Cell::at(8,6), Cell::at(9,6),
        ]);

        // the unclipped line crosses y=20 before x=16, at (3,5) not (4,4)
        let mut full = Canvas::new(10, 10, 0u32).unwrap();
        full.draw_line(p1, p2, w, 1, EndpointMode::Include);
        assert_eq!(full.get(3, 5), Some(1));
        assert_eq!(full.get(4, 4), Some(0));
    }

    #[test]
    fn oversized_canvas_rejected() {
        let big = i32::MAX as usize + 1;
        assert!(matches!(Canvas::new(big, 1, 0u8), Err(Error::InvalidCanvas { .. })));
        assert!(matches!(Canvas::new(1, big, 0u8), Err(Error::InvalidCanvas { .. })));
    }

    #[test]
    fn extent_in_sub_cell_units() {
        let pix = Canvas::new(10, 5, 0u8).unwrap();
        assert_eq!(pix.extent(CellWidth::of(4)), Rectangle::new(0, 0, 40, 20));
    }

    #[test]
    fn fill_and_image() {
        let mut pix = Canvas::new(3, 2, Rgb8::white()).unwrap();
        pix.set(2, 1, Rgb8::black());
        let img = pix.to_image().unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &image::Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
        pix.fill(Rgb8::gray(9));
        assert!(pix.pixels().iter().all(|&p| p == Rgb8::gray(9)));
    }
}
