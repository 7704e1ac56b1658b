//! display-probe - Main entry point
//!
//! Always exits with status 0, whatever the probe finds.

use display_probe::backend;
use display_probe::config::{Config, DEFAULT_LOG_FILTER};
use display_probe::{Probe, VERSION};

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let config = Config::default();

    log::info!("display-probe v{}", VERSION);
    log::info!("Compiled paths: {:?}", backend::available_backends());
    log::info!("Session variable: {}", config.session_var);

    #[cfg(all(feature = "backend-wayland", unix))]
    let mut probe = Probe::new(config, Some(backend::wayland::WaylandBackend::new()));

    #[cfg(not(all(feature = "backend-wayland", unix)))]
    let mut probe = Probe::<backend::null::NullBackend>::new(config, None);

    let report = probe.run();
    log::info!("Probe finished: {:?}", report);
}
