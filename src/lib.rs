//! Size resolution policy for image loading.
//!
//! Decides which size source governs a load request and whether the resulting
//! size may be approximated, so a pipeline can choose between a precise
//! decode/scale and reusing a cached bitmap of nearby dimensions.
//!
//! Pure decisions: no I/O, no allocation, `no_std` compatible.
//!
//! # Modules
//!
//! - [`policy`] — Default size sources and the exact/inexact decision
//! - [`request`] — Load requests and request defaults
//! - [`source`] — Size sources (explicit, view, display, none)
//! - [`target`] — Consumer targets (surface, generic, absent)
//! - [`surface`] — Identity-compared display surface handles
//! - [`size`] — Pixel sizes, precision, scale
//! - [`reuse`] — Whether a cached bitmap satisfies a request

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod policy;
pub mod request;
pub mod reuse;
pub mod size;
pub mod source;
pub mod surface;
pub mod target;

pub use policy::{
    SizePolicy, allow_inexact_size, effective_size_source, resolve_default_size_source,
};
pub use request::{LoadRequest, RequestDefaults};
pub use reuse::{CachedBitmap, is_cached_size_valid, size_multiplier};
pub use size::{PixelSize, Precision, Scale, Size, SizeError};
pub use source::{DisplayContext, SizeSource};
pub use surface::{SurfaceHandle, SurfaceId, SurfaceKind};
pub use target::Target;
