//! display-probe - Wayland session probe
//!
//! Checks whether the graphical session runs under Wayland and, if so, opens
//! and closes one connection to the compositor. An X11 fallback branch is
//! reserved but does no work.

pub mod backend;
pub mod config;
pub mod environment;
pub mod probe;
pub mod session;

pub use backend::{BackendResult, DisplayBackend};
pub use config::Config;
pub use environment::SessionKind;
pub use probe::{Outcome, Probe, ProbeReport};

/// Probe version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
