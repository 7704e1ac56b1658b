//! Session detection
//!
//! Decides which display protocol the current graphical session runs under
//! by looking at a single environment variable.

use std::ffi::OsString;

/// Display protocol of the running session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// The session variable is set and non-empty
    Wayland,
    /// Anything else; X11 or no graphical session at all
    Other,
}

/// Classify the session from `var` as seen through `lookup`.
///
/// An empty value counts as unset. The value itself is never inspected
/// beyond that, so non-UTF-8 values still select Wayland.
pub fn detect_session<F>(lookup: F, var: &str) -> SessionKind
where
    F: Fn(&str) -> Option<OsString>,
{
    match lookup(var) {
        Some(value) if !value.is_empty() => SessionKind::Wayland,
        _ => SessionKind::Other,
    }
}

/// Lookup backed by the process environment
pub fn process_env(var: &str) -> Option<OsString> {
    std::env::var_os(var)
}
