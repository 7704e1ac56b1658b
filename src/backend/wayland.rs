//! Wayland Backend - Connection to the running compositor
//!
//! Connects the same way libwayland's `wl_display_connect(NULL)` does:
//! `WAYLAND_SOCKET` if set, otherwise `WAYLAND_DISPLAY` under
//! `XDG_RUNTIME_DIR`.

use super::*;
use wayland_client::Connection;

pub struct WaylandBackend;

impl WaylandBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WaylandBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBackend for WaylandBackend {
    type Handle = Connection;

    fn name(&self) -> &'static str {
        "wayland"
    }

    fn connect(&mut self) -> BackendResult<Connection> {
        let connection = Connection::connect_to_env()?;
        log::debug!("Wayland backend connected to compositor");
        Ok(connection)
    }

    fn disconnect(&mut self, connection: Connection) {
        // Dropping the last reference closes the socket
        drop(connection);
        log::debug!("Wayland backend disconnected");
    }
}
