//! End-to-end probe scenarios
//!
//! The library scenarios drive the probe with the null backend and an
//! injected environment. The binary scenarios run the real executable and
//! check it exits cleanly.

use std::ffi::OsString;
use std::process::Command;

use display_probe::backend::null::NullBackend;
use display_probe::{Config, Outcome, Probe, SessionKind};

fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<OsString> {
    move |var: &str| {
        if var == "WAYLAND_DISPLAY" {
            value.map(OsString::from)
        } else {
            None
        }
    }
}

#[test]
fn test_unset_variable_performs_no_acquire() {
    let mut probe = Probe::new(Config::default(), Some(NullBackend::new()));
    let report = probe.run_with(lookup(None));

    assert_eq!(report.session, SessionKind::Other);
    assert_eq!(report.outcome, Outcome::Skipped);

    let backend = probe.wayland_backend().unwrap();
    assert_eq!(backend.connects(), 0);
    assert_eq!(backend.disconnects(), 0);
}

#[test]
fn test_empty_variable_performs_no_acquire() {
    let mut probe = Probe::new(Config::default(), Some(NullBackend::new()));
    let report = probe.run_with(lookup(Some("")));

    assert_eq!(report.outcome, Outcome::Skipped);
    assert_eq!(probe.wayland_backend().unwrap().connects(), 0);
}

#[test]
fn test_acquire_success_releases_once() {
    let mut probe = Probe::new(Config::default(), Some(NullBackend::new()));
    let report = probe.run_with(lookup(Some("wayland-0")));

    assert_eq!(report.session, SessionKind::Wayland);
    assert_eq!(report.outcome, Outcome::Released);

    let backend = probe.wayland_backend().unwrap();
    assert_eq!(backend.connects(), 1);
    assert_eq!(backend.disconnects(), 1);
    assert!(backend.open_handles().is_empty());
}

#[test]
fn test_acquire_failure_skips_release() {
    let mut probe = Probe::new(Config::default(), Some(NullBackend::refusing()));
    let report = probe.run_with(lookup(Some("wayland-0")));

    assert_eq!(report.outcome, Outcome::Unavailable);

    let backend = probe.wayland_backend().unwrap();
    assert_eq!(backend.connects(), 1);
    assert_eq!(backend.disconnects(), 0);
}

#[test]
fn test_no_paths_compiled_in_does_nothing() {
    let config = Config {
        x11_fallback: false,
        ..Config::default()
    };

    for value in [None, Some(""), Some("wayland-0")] {
        let mut probe = Probe::<NullBackend>::new(config.clone(), None);
        let report = probe.run_with(lookup(value));

        assert_eq!(report.outcome, Outcome::Skipped, "value {:?}", value);
        assert!(probe.wayland_backend().is_none());
    }
}

#[test]
fn test_x11_fallback_does_no_work() {
    let config = Config {
        x11_fallback: true,
        ..Config::default()
    };
    let mut probe = Probe::new(config, Some(NullBackend::new()));
    let report = probe.run_with(lookup(None));

    assert_eq!(report.outcome, Outcome::Skipped);
    assert_eq!(probe.wayland_backend().unwrap().connects(), 0);
}

#[test]
fn test_repeated_runs_do_not_leak_handles() {
    let mut probe = Probe::new(Config::default(), Some(NullBackend::new()));
    for _ in 0..3 {
        probe.run_with(lookup(Some("wayland-0")));
    }

    let backend = probe.wayland_backend().unwrap();
    assert_eq!(backend.connects(), 3);
    assert_eq!(backend.disconnects(), 3);
    assert!(backend.open_handles().is_empty());
}

fn probe_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_display-probe"));
    cmd.env_remove("WAYLAND_DISPLAY")
        .env_remove("WAYLAND_SOCKET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_exits_zero_without_session() {
    let status = probe_command().status().expect("failed to run display-probe");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_binary_exits_zero_with_unreachable_compositor() {
    let runtime_dir = std::env::temp_dir().join(format!("display-probe-test-{}", std::process::id()));
    std::fs::create_dir_all(&runtime_dir).unwrap();

    let status = probe_command()
        .env("WAYLAND_DISPLAY", "no-such-compositor")
        .env("XDG_RUNTIME_DIR", &runtime_dir)
        .status()
        .expect("failed to run display-probe");

    let _ = std::fs::remove_dir_all(&runtime_dir);
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_binary_ignores_arguments() {
    let status = probe_command()
        .args(["--help", "-display", "1"])
        .status()
        .expect("failed to run display-probe");
    assert_eq!(status.code(), Some(0));
}
