//! Opaque display-surface handles.
//!
//! The policy never looks inside a surface. It needs two things: whether two
//! handles refer to the same surface, and whether a surface re-fits decoded
//! images on its own. Both are fixed when the handle is created.

use core::num::NonZeroU64;
use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique surface identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(NonZeroU64);

impl SurfaceId {
    fn allocate() -> Self {
        let raw = NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed);
        // Starts at 1 and would need 2^64 allocations to wrap.
        match NonZeroU64::new(raw) {
            Some(id) => Self(id),
            None => panic!("surface id space exhausted"),
        }
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// What kind of surface a handle refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Specialized for decoded images; re-fits content given an approximate size.
    ImagePresenting,
    /// Any other surface. An approximate size may render visibly wrong.
    Generic,
}

/// Reference to a display surface, compared by identity.
///
/// Clones refer to the same surface. Independently created handles never
/// compare equal, even when their kinds match.
///
/// ```
/// use zensize::SurfaceHandle;
///
/// let a = SurfaceHandle::image_presenting();
/// let b = SurfaceHandle::image_presenting();
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug)]
pub struct SurfaceHandle {
    id: SurfaceId,
    kind: SurfaceKind,
}

impl SurfaceHandle {
    /// Register a new surface of the given kind.
    pub fn new(kind: SurfaceKind) -> Self {
        Self {
            id: SurfaceId::allocate(),
            kind,
        }
    }

    pub fn image_presenting() -> Self {
        Self::new(SurfaceKind::ImagePresenting)
    }

    pub fn generic() -> Self {
        Self::new(SurfaceKind::Generic)
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn is_image_presenting(&self) -> bool {
        self.kind == SurfaceKind::ImagePresenting
    }

    /// Whether both handles refer to the same surface.
    pub fn is_same_surface(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for SurfaceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_surface(other)
    }
}

impl Eq for SurfaceHandle {}

impl core::hash::Hash for SurfaceHandle {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
