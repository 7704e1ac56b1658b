//! Display-session helper
//!
//! Wraps a backend's connect/disconnect pair. A failed connect is an expected
//! outcome (no compositor, stale socket) and is reported only as an absent
//! handle.

use crate::backend::DisplayBackend;

pub struct DisplaySession<B: DisplayBackend> {
    backend: B,
}

impl<B: DisplayBackend> DisplaySession<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Try to open a connection to the backend's default display
    pub fn acquire(&mut self) -> Option<B::Handle> {
        match self.backend.connect() {
            Ok(handle) => {
                log::debug!("Acquired {} display handle", self.backend.name());
                Some(handle)
            }
            Err(e) => {
                log::debug!("No {} display available: {}", self.backend.name(), e);
                None
            }
        }
    }

    /// Close `handle`; an absent handle is a no-op
    pub fn release(&mut self, handle: Option<B::Handle>) {
        if let Some(handle) = handle {
            self.backend.disconnect(handle);
            log::debug!("Released {} display handle", self.backend.name());
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
