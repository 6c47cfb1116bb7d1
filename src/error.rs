//! Errors

/// Errors raised while building traversal or drawing inputs
///
/// Geometric outcomes such as a segment missing a rectangle are
/// never errors, they are ordinary return values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cell width must be strictly positive
    #[error("invalid cell width {0}, must be greater than zero")]
    InvalidCellWidth(i64),
    /// Canvas dimensions must both be non-zero
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: usize, height: usize },
    /// Encoding or writing an image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result with the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
