//! Pixel dimensions, precision and scale.

/// How precisely downstream decoding must honor the resolved size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Scale to the literal resolved size.
    Exact,
    /// A nearby cached size may be substituted.
    Inexact,
    /// Let the size policy decide.
    #[default]
    Automatic,
}

/// How an image is fitted into a requested size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Cover the requested size; the larger per-axis ratio wins.
    #[default]
    Fill,
    /// Fit inside the requested size; the smaller per-axis ratio wins.
    Fit,
}

/// Width × height in pixels. Both dimensions are non-zero.
///
/// ```
/// use zensize::{PixelSize, SizeError};
///
/// let size = PixelSize::new(100, 50).unwrap();
/// assert_eq!(size.width(), 100);
/// assert_eq!(PixelSize::new(0, 50), Err(SizeError::ZeroDimension { width: 0, height: 50 }));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    /// Create a size, rejecting zero width or height.
    pub const fn new(width: u32, height: u32) -> Result<Self, SizeError> {
        if width == 0 || height == 0 {
            return Err(SizeError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Square size with both edges equal to `edge`.
    pub const fn square(edge: u32) -> Result<Self, SizeError> {
        Self::new(edge, edge)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The longer of the two edges.
    pub const fn max_edge(&self) -> u32 {
        if self.width >= self.height {
            self.width
        } else {
            self.height
        }
    }
}

/// A resolved request size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Size {
    /// Use the image's intrinsic dimensions.
    Original,
    /// Decode to (approximately, when allowed) these dimensions.
    Pixels(PixelSize),
}

impl From<PixelSize> for Size {
    fn from(size: PixelSize) -> Self {
        Self::Pixels(size)
    }
}

/// Size construction error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    /// Width or height is zero.
    #[error("pixel size must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}
