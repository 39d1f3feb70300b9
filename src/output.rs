//! Pixel output.
//!
//! `PixelSink` is the seam between the render loop and the wire. Sends are
//! fire-and-forget: a sink reports whether a frame went out, and the caller
//! never retries.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::models::universe::{Color, Frame};

#[async_trait]
pub trait PixelSink: Send {
    /// Push one channel's worth of pixels. Returns false if nothing was sent.
    async fn put_pixels(&mut self, channel: u8, pixels: &[Color]) -> bool;
}

#[async_trait]
impl PixelSink for opc::Client {
    async fn put_pixels(&mut self, channel: u8, pixels: &[Color]) -> bool {
        let raw: Vec<[f64; 3]> = pixels.iter().map(|c| c.to_array()).collect();
        opc::Client::put_pixels(self, channel, &raw).await
    }
}

/// How a frame is split into OPC channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Whole frame on channel 0, vine after vine.
    #[default]
    Simulator,
    /// One channel per vine, numbered from 1.
    Tree,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Simulator => "simulator",
            OutputMode::Tree => "tree",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simulator" | "sim" => Ok(OutputMode::Simulator),
            "tree" => Ok(OutputMode::Tree),
            other => Err(format!(
                "unknown output '{other}' (expected simulator or tree)"
            )),
        }
    }
}

/// OPC channel carrying `vine` on the physical tree. Channel 0 is reserved
/// for broadcast, so vines start at 1; vines past 255 have no channel.
pub fn vine_channel(vine: usize) -> Option<u8> {
    u8::try_from(vine + 1).ok()
}

/// Send `frame` to `sink`. Returns how many channels were delivered.
pub async fn dispatch<S: PixelSink + ?Sized>(
    sink: &mut S,
    mode: OutputMode,
    frame: &Frame,
) -> usize {
    match mode {
        OutputMode::Simulator => {
            let channel = opc::types::BROADCAST_CHANNEL;
            usize::from(sink.put_pixels(channel, frame.as_flat()).await)
        }
        OutputMode::Tree => {
            let mut delivered = 0;
            for (vine, pixels) in frame.vines().enumerate() {
                let Some(channel) = vine_channel(vine) else {
                    log::trace!("[output] vine {vine} has no OPC channel, skipped");
                    continue;
                };
                if sink.put_pixels(channel, pixels).await {
                    delivered += 1;
                }
            }
            delivered
        }
    }
}
