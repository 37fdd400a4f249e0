//! End-to-end decisions: build a request, resolve its size source, decide
//! whether an approximate size is acceptable.

use zensize::*;

fn display() -> DisplayContext {
    DisplayContext::new(1080, 1920).unwrap()
}

/// Resolve the effective source the way a pipeline would, then decide.
fn allow_inexact(request: &LoadRequest) -> bool {
    allow_inexact_size(request, &effective_size_source(request, display()))
}

fn explicit_100() -> SizeSource {
    SizeSource::explicit(100, 100).unwrap()
}

#[test]
fn exact_precision() {
    let request = LoadRequest::new(Target::surface(&SurfaceHandle::image_presenting()))
        .precision(Precision::Exact);
    assert!(!allow_inexact(&request));
}

#[test]
fn inexact_precision() {
    let request = LoadRequest::get().precision(Precision::Inexact);
    assert!(allow_inexact(&request));
}

#[test]
fn image_surface_target() {
    let view = SurfaceHandle::image_presenting();
    let request = LoadRequest::new(Target::surface(&view));
    assert_eq!(
        resolve_default_size_source(&request, display()),
        SizeSource::view(&view)
    );
    assert!(allow_inexact(&request));
}

#[test]
fn image_surface_target_explicit_size() {
    let request =
        LoadRequest::new(Target::surface(&SurfaceHandle::image_presenting())).size(explicit_100());
    assert!(!allow_inexact(&request));
}

#[test]
fn image_surface_target_same_view_source() {
    let view = SurfaceHandle::image_presenting();
    let request = LoadRequest::new(Target::surface(&view)).size(SizeSource::view(&view));
    assert!(allow_inexact(&request));
}

#[test]
fn image_surface_target_different_views() {
    let request = LoadRequest::new(Target::surface(&SurfaceHandle::image_presenting()))
        .size(SizeSource::view(&SurfaceHandle::image_presenting()));
    assert!(!allow_inexact(&request));
}

#[test]
fn generic_target_uses_display_size() {
    let request = LoadRequest::new(Target::GenericBound);
    assert_eq!(
        resolve_default_size_source(&request, display()),
        SizeSource::DisplayDerived(display())
    );
    assert!(allow_inexact(&request));
}

#[test]
fn absent_target_has_no_size() {
    let request = LoadRequest::get();
    assert_eq!(
        resolve_default_size_source(&request, display()),
        SizeSource::None
    );
    assert!(allow_inexact(&request));
}

#[test]
fn generic_target_explicit_size() {
    let request = LoadRequest::new(Target::GenericBound).size(explicit_100());
    assert!(!allow_inexact(&request));
}

#[test]
fn generic_surface_target() {
    let request = LoadRequest::new(Target::surface(&SurfaceHandle::generic()));
    assert!(!allow_inexact(&request));
}

#[test]
fn absent_target_explicit_size() {
    let request = LoadRequest::get().size(explicit_100());
    assert!(!allow_inexact(&request));
}

// ---- Feeding the verdict into cache reuse ----

#[test]
fn verdict_gates_cache_reuse() {
    let policy = SizePolicy::new(display());
    let view = SurfaceHandle::image_presenting();
    let cached = CachedBitmap::new(PixelSize::new(400, 400).unwrap(), true);
    let measured = Size::Pixels(PixelSize::new(300, 300).unwrap());

    let flexible = policy.request(Target::surface(&view));
    let allow = policy.allow_inexact_size(&flexible);
    assert!(is_cached_size_valid(
        &cached,
        measured,
        flexible.scale_mode(),
        allow
    ));

    let strict = flexible.clone().size(SizeSource::explicit(300, 300).unwrap());
    let requested = policy.size_source(&strict).fixed_size().unwrap();
    let allow = policy.allow_inexact_size(&strict);
    assert!(!is_cached_size_valid(
        &cached,
        requested,
        strict.scale_mode(),
        allow
    ));
}

#[test]
fn display_source_reuses_square_cache_entry() {
    let policy = SizePolicy::new(display());
    let request = policy.request(Target::GenericBound);
    let requested = policy.size_source(&request).fixed_size().unwrap();
    assert_eq!(requested, Size::Pixels(PixelSize::square(1920).unwrap()));

    let cached = CachedBitmap::new(PixelSize::square(2048).unwrap(), true);
    assert!(is_cached_size_valid(
        &cached,
        requested,
        request.scale_mode(),
        policy.allow_inexact_size(&request)
    ));
}
