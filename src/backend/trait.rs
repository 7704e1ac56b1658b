//! Backend trait definition
//!
//! This module defines the trait that display protocol backends implement.
//! A backend only knows how to open and close a connection to its display
//! server; everything else is out of its hands.

use std::error::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// A display protocol backend
pub trait DisplayBackend {
    /// Opaque connection handle, valid between `connect` and `disconnect`
    type Handle;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Open a connection to the default display of this protocol
    fn connect(&mut self) -> BackendResult<Self::Handle>;

    /// Close a connection previously returned by `connect`
    fn disconnect(&mut self, handle: Self::Handle);
}
