//! Probe run
//!
//! Reads the session variable once and, for a Wayland session, opens and
//! immediately closes one display handle. The probe never fails: every path
//! ends in a [`ProbeReport`].

use std::ffi::OsString;

use crate::backend::DisplayBackend;
use crate::config::Config;
use crate::environment::{self, SessionKind};
use crate::session::DisplaySession;

/// What happened to the display handle during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No acquire was attempted
    Skipped,
    /// Acquire was attempted and no handle came back
    Unavailable,
    /// A handle was acquired and released again
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub session: SessionKind,
    pub outcome: Outcome,
}

pub struct Probe<B: DisplayBackend> {
    config: Config,
    wayland: Option<DisplaySession<B>>,
}

impl<B: DisplayBackend> Probe<B> {
    /// `wayland` is `None` when the Wayland path is not compiled in
    pub fn new(config: Config, wayland: Option<B>) -> Self {
        Self {
            config,
            wayland: wayland.map(DisplaySession::new),
        }
    }

    /// Run against the process environment
    pub fn run(&mut self) -> ProbeReport {
        self.run_with(environment::process_env)
    }

    pub fn run_with<F>(&mut self, lookup: F) -> ProbeReport
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let session = environment::detect_session(lookup, &self.config.session_var);
        log::debug!("{} => {:?} session", self.config.session_var, session);

        let outcome = match session {
            SessionKind::Wayland => self.probe_wayland(),
            SessionKind::Other => {
                if self.config.x11_fallback {
                    log::trace!("X11 fallback branch has nothing to do");
                }
                Outcome::Skipped
            }
        };

        ProbeReport { session, outcome }
    }

    fn probe_wayland(&mut self) -> Outcome {
        let Some(session) = self.wayland.as_mut() else {
            log::trace!("Wayland path not compiled in");
            return Outcome::Skipped;
        };

        match session.acquire() {
            Some(handle) => {
                session.release(Some(handle));
                Outcome::Released
            }
            None => Outcome::Unavailable,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Backend of the Wayland path, if compiled in
    pub fn wayland_backend(&self) -> Option<&B> {
        self.wayland.as_ref().map(DisplaySession::backend)
    }
}
