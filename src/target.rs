//! Consumer targets: where a decoded image ends up.

use crate::surface::SurfaceHandle;

/// Sink for the decoded result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// Renders into a display surface.
    SurfaceBound(SurfaceHandle),
    /// Callback consumer without a surface.
    GenericBound,
    /// No consumer; the caller takes the decoded image directly.
    #[default]
    Absent,
}

impl Target {
    /// Target rendering into `surface`.
    pub fn surface(surface: &SurfaceHandle) -> Self {
        Self::SurfaceBound(surface.clone())
    }

    /// The surface this target renders into, if any.
    pub fn surface_handle(&self) -> Option<&SurfaceHandle> {
        match self {
            Self::SurfaceBound(surface) => Some(surface),
            Self::GenericBound | Self::Absent => None,
        }
    }

    /// Whether the target is bound to an image-presenting surface.
    pub fn is_image_presenting(&self) -> bool {
        self.surface_handle()
            .is_some_and(SurfaceHandle::is_image_presenting)
    }
}
