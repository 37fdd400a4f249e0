//! Cached bitmap reuse.
//!
//! Consumes the inexactness verdict: a cached bitmap whose size differs from
//! the requested one is only reusable when an approximate size is allowed.

use crate::size::{PixelSize, Scale, Size};

/// A bitmap already held by a cache.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CachedBitmap {
    /// Dimensions of the cached bitmap.
    pub size: PixelSize,
    /// Decoded below the image's intrinsic resolution.
    pub sampled: bool,
}

impl CachedBitmap {
    pub const fn new(size: PixelSize, sampled: bool) -> Self {
        Self { size, sampled }
    }
}

/// Factor to scale `src` by so it matches `dst` under `scale`.
///
/// ```
/// use zensize::{PixelSize, Scale, size_multiplier};
///
/// let src = PixelSize::new(200, 100).unwrap();
/// let dst = PixelSize::new(100, 100).unwrap();
/// assert_eq!(size_multiplier(src, dst, Scale::Fill), 1.0);
/// assert_eq!(size_multiplier(src, dst, Scale::Fit), 0.5);
/// ```
pub fn size_multiplier(src: PixelSize, dst: PixelSize, scale: Scale) -> f64 {
    let width_ratio = dst.width() as f64 / src.width() as f64;
    let height_ratio = dst.height() as f64 / src.height() as f64;
    match scale {
        Scale::Fill => width_ratio.max(height_ratio),
        Scale::Fit => width_ratio.min(height_ratio),
    }
}

/// Whether `cached` can stand in for a decode at `requested`.
///
/// `allow_inexact` is the policy's verdict for the request (see
/// [`allow_inexact_size`](crate::allow_inexact_size)).
pub fn is_cached_size_valid(
    cached: &CachedBitmap,
    requested: Size,
    scale: Scale,
    allow_inexact: bool,
) -> bool {
    let requested = match requested {
        Size::Original => return !cached.sampled,
        Size::Pixels(size) => size,
    };

    let multiplier = size_multiplier(cached.size, requested, scale);
    if multiplier != 1.0 && !allow_inexact {
        log::trace!(
            "cached {:?} rejected: exact size {:?} required",
            cached.size,
            requested
        );
        return false;
    }
    // Upscaling a sampled bitmap loses detail the full decode would have.
    if multiplier > 1.0 && cached.sampled {
        log::trace!(
            "cached {:?} rejected: sampled bitmap smaller than {:?}",
            cached.size,
            requested
        );
        return false;
    }
    true
}
