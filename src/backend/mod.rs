/// Backend implementations
///
/// This module contains the backend trait and implementations for the
/// display protocols the probe knows about.

mod r#trait;
pub use r#trait::*;

pub mod null;

#[cfg(all(feature = "backend-wayland", unix))]
pub mod wayland;

/// Get compiled-in display paths (features enabled + platform compatible)
#[allow(unused_mut)] // mut needed when features are enabled
pub fn available_backends() -> Vec<&'static str> {
    let mut backends = Vec::new();

    // Wayland path is available on Unix systems when feature is enabled
    #[cfg(all(feature = "backend-wayland", unix))]
    backends.push("wayland");

    // X11 fallback branch is compiled in when feature is enabled
    #[cfg(feature = "backend-x11")]
    backends.push("x11");

    backends
}
