//! Headless OPC listener: accepts connections and logs every message.
//! cargo run -p opc --bin opc-dump -- [ADDRESS]
//!
//! Stands in for the simulator when checking what the pattern engine sends.

use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};

use opc::protocol::drain_messages;
use opc::types::{Command, DEFAULT_SERVER};

async fn handle_connection(mut stream: TcpStream, peer: String) {
    let mut buf = Vec::with_capacity(8192);
    let mut temp = [0u8; 8192];
    let mut frames: u64 = 0;

    loop {
        let n = match stream.read(&mut temp).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                log::warn!("[opc-dump] read error from {peer}: {e}");
                break;
            }
        };
        buf.extend_from_slice(&temp[..n]);

        let messages = match drain_messages(&mut buf) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[opc-dump] bad message from {peer}: {e}");
                break;
            }
        };

        for msg in messages {
            frames += 1;
            match Command::from_u8(msg.command) {
                Some(Command::SetPixelColors) => {
                    let pixels = msg.pixels();
                    let first = pixels.first().copied().unwrap_or_default();
                    log::info!(
                        "[opc-dump] #{frames} channel {} pixels {} first {:?}",
                        msg.channel,
                        pixels.len(),
                        first
                    );
                }
                _ => log::info!(
                    "[opc-dump] #{frames} channel {} command {:#04x} ({} bytes)",
                    msg.channel,
                    msg.command,
                    msg.data.len()
                ),
            }
        }
    }

    log::info!("[opc-dump] {peer} closed after {frames} messages");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let listener = TcpListener::bind(&address).await?;
    log::info!("[opc-dump] listening on {address}");

    loop {
        let (stream, peer) = listener.accept().await?;
        log::info!("[opc-dump] connection from {peer}");
        tokio::spawn(handle_connection(stream, peer.to_string()));
    }
}
