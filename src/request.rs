//! Load requests and their defaults.

use crate::size::{Precision, Scale};
use crate::source::SizeSource;
use crate::target::Target;

/// Values used for request fields the caller leaves unset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestDefaults {
    pub precision: Precision,
    pub scale: Scale,
}

impl RequestDefaults {
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }
}

/// An image load request, as seen by the size policy.
///
/// A declared size source always wins over the default the policy would
/// compute from the target.
///
/// # Example
///
/// ```
/// use zensize::{LoadRequest, Precision, SizeSource, SurfaceHandle, Target};
///
/// let view = SurfaceHandle::image_presenting();
/// let request = LoadRequest::new(Target::surface(&view))
///     .size(SizeSource::explicit(100, 100).unwrap())
///     .precision(Precision::Exact);
///
/// assert!(request.declared_size_source().is_some());
/// assert_eq!(request.precision_mode(), Precision::Exact);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadRequest {
    target: Target,
    size_source: Option<SizeSource>,
    precision: Precision,
    scale: Scale,
}

impl LoadRequest {
    /// Request for `target` with [`RequestDefaults::default`].
    pub fn new(target: Target) -> Self {
        Self::with_defaults(target, &RequestDefaults::default())
    }

    /// Request for `target`, unset fields taken from `defaults`.
    pub fn with_defaults(target: Target, defaults: &RequestDefaults) -> Self {
        Self {
            target,
            size_source: None,
            precision: defaults.precision,
            scale: defaults.scale,
        }
    }

    /// Request with no consumer: the caller wants the decoded image itself.
    pub fn get() -> Self {
        Self::new(Target::Absent)
    }

    /// Declare the size source, overriding the target's default.
    pub fn size(mut self, source: SizeSource) -> Self {
        self.size_source = Some(source);
        self
    }

    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn declared_size_source(&self) -> Option<&SizeSource> {
        self.size_source.as_ref()
    }

    pub fn precision_mode(&self) -> Precision {
        self.precision
    }

    pub fn scale_mode(&self) -> Scale {
        self.scale
    }
}
