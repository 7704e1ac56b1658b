//! Null Backend - In-process backend for testing
//!
//! This backend talks to no display server. It hands out numbered handles and
//! counts every connect and disconnect, so the probe's call sequence can be
//! checked without a real compositor.

use super::*;

/// Handle issued by [`NullBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullHandle(pub usize);

#[derive(Debug, Default)]
pub struct NullBackend {
    next_handle_id: usize,
    refuse: bool,
    connects: usize,
    disconnects: usize,
    open: Vec<NullHandle>,
}

impl NullBackend {
    pub fn new() -> Self {
        Self {
            next_handle_id: 1,
            ..Self::default()
        }
    }

    /// A backend whose display is never reachable
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::new()
        }
    }

    /// Number of `connect` calls, successful or not
    pub fn connects(&self) -> usize {
        self.connects
    }

    pub fn disconnects(&self) -> usize {
        self.disconnects
    }

    /// Handles connected and not yet disconnected
    pub fn open_handles(&self) -> &[NullHandle] {
        &self.open
    }
}

impl DisplayBackend for NullBackend {
    type Handle = NullHandle;

    fn name(&self) -> &'static str {
        "null"
    }

    fn connect(&mut self) -> BackendResult<NullHandle> {
        self.connects += 1;
        if self.refuse {
            return Err("null display refused connection".into());
        }

        let handle = NullHandle(self.next_handle_id);
        self.next_handle_id += 1;
        self.open.push(handle);
        Ok(handle)
    }

    fn disconnect(&mut self, handle: NullHandle) {
        self.disconnects += 1;
        self.open.retain(|h| *h != handle);
    }
}
