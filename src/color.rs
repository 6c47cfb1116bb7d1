//! Colors

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color as Red, Green, and Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Components as [r, g, b]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Packed `0x00RRGGBB`
impl From<u32> for Rgb8 {
    fn from(c: u32) -> Rgb8 {
        let [_, r, g, b] = c.to_be_bytes();
        Rgb8::new(r, g, b)
    }
}

impl From<Rgb8> for u32 {
    fn from(c: Rgb8) -> u32 {
        u32::from_be_bytes([0, c.r, c.g, c.b])
    }
}
