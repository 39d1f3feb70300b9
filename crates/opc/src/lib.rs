//! Open Pixel Control client.
//!
//! Fire-and-forget: the client connects lazily, writes whole messages and
//! never waits for an acknowledgement. Any write failure drops the
//! connection; the next `put_pixels` call tries to reconnect.

pub mod protocol;
pub mod types;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::{timeout, Duration};

use crate::protocol::build_set_pixels_message;
use crate::types::*;

/// A connection to an OPC server such as a fadecandy board or the simulator.
pub struct Client {
    address: String,
    stream: Option<TcpStream>,
}

impl Client {
    /// Create a client for `address` (`host:port`). No connection is made yet.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            stream: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Try to connect if not already connected. Returns true on success.
    pub async fn can_connect(&mut self) -> bool {
        self.ensure_connected().await
    }

    /// Drop the current connection, if any.
    pub fn disconnect(&mut self) {
        if self.stream.take().is_some() {
            log::debug!("[opc] disconnected from {}", self.address);
        }
    }

    async fn ensure_connected(&mut self) -> bool {
        if self.stream.is_some() {
            return true;
        }

        match timeout(
            Duration::from_millis(CONNECT_TIMEOUT_MS),
            TcpStream::connect(&self.address),
        )
        .await
        {
            Ok(Ok(stream)) => {
                let _ = stream.set_nodelay(true);
                log::debug!("[opc] connected to {}", self.address);
                self.stream = Some(stream);
                true
            }
            Ok(Err(e)) => {
                log::trace!("[opc] connect to {} failed: {e}", self.address);
                false
            }
            Err(_) => {
                log::trace!("[opc] connect to {} timed out", self.address);
                false
            }
        }
    }

    /// Send one frame of pixels to `channel`.
    ///
    /// Channel 0 goes to every strand; 1..=255 address a single strand.
    /// Values are truncated and saturated to 0..=255. Returns false if the
    /// frame could not be sent; the caller is not expected to retry.
    pub async fn put_pixels(&mut self, channel: u8, pixels: &[[f64; 3]]) -> bool {
        if !self.ensure_connected().await {
            return false;
        }

        let message = build_set_pixels_message(channel, pixels);
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };

        match timeout(
            Duration::from_millis(WRITE_TIMEOUT_MS),
            stream.write_all(&message),
        )
        .await
        {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                log::trace!("[opc] write to {} failed: {e}", self.address);
                self.disconnect();
                false
            }
            Err(_) => {
                log::trace!("[opc] write to {} timed out", self.address);
                self.disconnect();
                false
            }
        }
    }
}
