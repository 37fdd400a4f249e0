//! Size resolution policy.
//!
//! Two decisions per request:
//!
//! 1. Which [`SizeSource`] applies when the request declares none
//!    ([`resolve_default_size_source`]).
//! 2. Whether the eventual size may be approximate ([`allow_inexact_size`]).
//!    An inexact size lets the pipeline reuse a cached bitmap of nearby
//!    dimensions; an exact one forces a precise decode and scale.
//!
//! Both are pure and total. Exactness is required only for caller-fixed
//! pixel sizes and for sizes measured from a surface that cannot absorb a
//! mismatch (a generic surface, or a surface other than the one rendered
//! into).
//!
//! # Example
//!
//! ```
//! use zensize::{DisplayContext, LoadRequest, SizePolicy, SizeSource, SurfaceHandle, Target};
//!
//! let policy = SizePolicy::new(DisplayContext::new(1080, 1920).unwrap());
//! let view = SurfaceHandle::image_presenting();
//!
//! let request = policy.request(Target::surface(&view));
//! assert_eq!(policy.size_source(&request), SizeSource::view(&view));
//! assert!(policy.allow_inexact_size(&request));
//!
//! let fixed = request.size(SizeSource::explicit(100, 100).unwrap());
//! assert!(!policy.allow_inexact_size(&fixed));
//! ```

use crate::request::{LoadRequest, RequestDefaults};
use crate::size::Precision;
use crate::source::{DisplayContext, SizeSource};
use crate::target::Target;

/// Default size source for a request that declares none.
///
/// Depends only on the target variant: surfaces are measured, generic
/// consumers get the display size, and absent targets get no size.
pub fn resolve_default_size_source(request: &LoadRequest, display: DisplayContext) -> SizeSource {
    let source = match request.target() {
        Target::SurfaceBound(surface) => SizeSource::ViewDerived(surface.clone()),
        Target::GenericBound => SizeSource::DisplayDerived(display),
        Target::Absent => SizeSource::None,
    };
    log::trace!("default size source for {:?}: {:?}", request.target(), source);
    source
}

/// The declared size source, or the default when none was declared.
pub fn effective_size_source(request: &LoadRequest, display: DisplayContext) -> SizeSource {
    match request.declared_size_source() {
        Some(declared) => declared.clone(),
        None => resolve_default_size_source(request, display),
    }
}

/// Whether the size produced by `source` may be approximated for `request`.
///
/// `source` must be the effective source (see [`effective_size_source`]).
pub fn allow_inexact_size(request: &LoadRequest, source: &SizeSource) -> bool {
    let (allow, rule) = decide(request, source);
    log::trace!(
        "inexact size {} for {:?} with {:?}: {}",
        if allow { "allowed" } else { "denied" },
        request.precision_mode(),
        source,
        rule
    );
    allow
}

fn decide(request: &LoadRequest, source: &SizeSource) -> (bool, &'static str) {
    match request.precision_mode() {
        Precision::Exact => return (false, "exact precision"),
        Precision::Inexact => return (true, "inexact precision"),
        Precision::Automatic => {}
    }

    match source {
        SizeSource::Explicit(_) => (false, "explicit size"),
        SizeSource::ViewDerived(measured) => {
            if !measured.is_image_presenting() {
                return (false, "measured surface is not image-presenting");
            }
            match request.target() {
                Target::SurfaceBound(rendered) if !rendered.is_same_surface(measured) => {
                    (false, "size measured from a different surface")
                }
                _ => (true, "image-presenting surface"),
            }
        }
        SizeSource::DisplayDerived(_) => (true, "display size"),
        SizeSource::None => (true, "no size"),
    }
}

/// Display context and request defaults, bundled for repeated decisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SizePolicy {
    display: DisplayContext,
    defaults: RequestDefaults,
}

impl SizePolicy {
    pub fn new(display: DisplayContext) -> Self {
        Self {
            display,
            defaults: RequestDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: RequestDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn display(&self) -> DisplayContext {
        self.display
    }

    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Start a request for `target` using this policy's defaults.
    pub fn request(&self, target: Target) -> LoadRequest {
        LoadRequest::with_defaults(target, &self.defaults)
    }

    /// Effective size source for `request`.
    pub fn size_source(&self, request: &LoadRequest) -> SizeSource {
        effective_size_source(request, self.display)
    }

    /// Resolve the effective source and decide inexactness in one step.
    pub fn allow_inexact_size(&self, request: &LoadRequest) -> bool {
        allow_inexact_size(request, &self.size_source(request))
    }
}
