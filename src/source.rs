//! Size sources: where a request's pixel dimensions come from.

use crate::size::{PixelSize, Size, SizeError};
use crate::surface::SurfaceHandle;

/// Capability token for the containing display or viewport.
///
/// Only needed to construct [`SizeSource::DisplayDerived`]. The policy never
/// reads it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayContext {
    viewport: PixelSize,
}

impl DisplayContext {
    /// Context for a viewport of the given pixel dimensions.
    pub const fn new(width: u32, height: u32) -> Result<Self, SizeError> {
        match PixelSize::new(width, height) {
            Ok(viewport) => Ok(Self { viewport }),
            Err(e) => Err(e),
        }
    }

    pub const fn from_viewport(viewport: PixelSize) -> Self {
        Self { viewport }
    }

    pub const fn viewport(&self) -> PixelSize {
        self.viewport
    }
}

/// Strategy that yields the size for a request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeSource {
    /// Fixed size declared by the caller.
    Explicit(PixelSize),
    /// Measured from the referenced surface.
    ViewDerived(SurfaceHandle),
    /// Derived from the containing viewport.
    DisplayDerived(DisplayContext),
    /// No size; downstream uses the intrinsic image size.
    None,
}

impl SizeSource {
    /// Explicit source from raw dimensions.
    pub const fn explicit(width: u32, height: u32) -> Result<Self, SizeError> {
        match PixelSize::new(width, height) {
            Ok(size) => Ok(Self::Explicit(size)),
            Err(e) => Err(e),
        }
    }

    /// Source that measures `surface`.
    pub fn view(surface: &SurfaceHandle) -> Self {
        Self::ViewDerived(surface.clone())
    }

    /// The size this source yields without measuring anything.
    ///
    /// `None` for [`ViewDerived`](Self::ViewDerived): the surface has to be
    /// measured by the caller. Display sources yield a square of the longer
    /// viewport edge, so rotating the device does not invalidate the size.
    pub fn fixed_size(&self) -> Option<Size> {
        match self {
            Self::Explicit(size) => Some(Size::Pixels(*size)),
            Self::ViewDerived(_) => None,
            Self::DisplayDerived(display) => {
                let edge = display.viewport().max_edge();
                PixelSize::square(edge).ok().map(Size::Pixels)
            }
            Self::None => Some(Size::Original),
        }
    }

    /// The surface this source measures, if any.
    pub fn surface(&self) -> Option<&SurfaceHandle> {
        match self {
            Self::ViewDerived(surface) => Some(surface),
            _ => None,
        }
    }
}
