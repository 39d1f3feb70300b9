/// Default OPC server (fadecandy, gl_server, ...) address.
pub const DEFAULT_SERVER: &str = "127.0.0.1:7890";

/// Channel 0 is delivered to every strand on the server.
pub const BROADCAST_CHANNEL: u8 = 0;

/// Size of the fixed message header: channel, command, length (u16 BE).
pub const HEADER_LEN: usize = 4;

/// Largest payload a single message can carry.
pub const MAX_DATA_LEN: usize = u16::MAX as usize;

/// Bytes per pixel in a set-pixel-colors payload.
pub const BYTES_PER_PIXEL: usize = 3;

/// Timeouts.
pub const CONNECT_TIMEOUT_MS: u64 = 500;
pub const WRITE_TIMEOUT_MS: u64 = 250;

/// OPC command bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    SetPixelColors = 0x00,
    SystemExclusive = 0xFF,
}

impl Command {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x00 => Some(Self::SetPixelColors),
            0xFF => Some(Self::SystemExclusive),
            _ => None,
        }
    }
}
