//! Probe configuration
//!
//! Nothing is read from the command line; the defaults are fixed by the
//! features the binary was built with.

/// Environment variable marking a Wayland session
pub const WAYLAND_DISPLAY_VAR: &str = "WAYLAND_DISPLAY";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Variable consulted to detect the session
    pub session_var: String,

    /// Whether the X11 fallback branch is compiled in
    pub x11_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            session_var: WAYLAND_DISPLAY_VAR.to_string(),
            x11_fallback: cfg!(feature = "backend-x11"),
        }
    }
}
