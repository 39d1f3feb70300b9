pub mod error;
pub mod fixtures;
pub mod models;
pub mod output;
pub mod patterns;
pub mod render_engine;
pub mod settings;

use anyhow::Context;
use tokio::sync::watch;

use crate::error::LayoutError;
use crate::fixtures::models::LIGHTS_PER_VINE;
use crate::fixtures::parser::read_layout;
use crate::patterns::{build_pattern, FRAMES_PER_SECOND};
use crate::render_engine::RenderEngine;
use crate::settings::{EngineSettings, DEFAULT_FPS};

/// True when `err` came from a layout path that could not be read, which the
/// binary reports together with its usage text.
pub fn is_layout_path_error(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<LayoutError>(),
        Some(LayoutError::Io { .. })
    )
}

/// Load the layout, connect to the OPC server and render until Ctrl-C.
pub async fn run(settings: EngineSettings) -> anyhow::Result<()> {
    log::info!("[willow] parsing layout file {}", settings.layout.display());
    let layout = read_layout(&settings.layout, LIGHTS_PER_VINE)
        .with_context(|| format!("loading layout {}", settings.layout.display()))?;
    log::info!(
        "[willow] {} vines x {} lights",
        layout.num_vines(),
        layout.lights_per_vine()
    );

    if settings.fps != DEFAULT_FPS {
        log::warn!(
            "[willow] --fps {} is ignored; patterns run at {FRAMES_PER_SECOND} fps",
            settings.fps
        );
    }

    let mut client = opc::Client::new(settings.server.clone());
    if client.can_connect().await {
        log::info!("[willow] connected to {}", settings.server);
    } else {
        // keep running in case the server appears later
        log::warn!("[willow] could not connect to {}", settings.server);
    }

    let pattern = build_pattern(settings.pattern, &layout, settings.output);
    let mut engine = RenderEngine::new(layout, pattern, client, settings.output, FRAMES_PER_SECOND);

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log::info!("[willow] interrupted, stopping");
                let _ = stop_tx.send(true);
            }
            Err(e) => {
                log::warn!("[willow] cannot listen for Ctrl-C: {e}");
                // hold the sender so the engine keeps running
                let _keep = stop_tx;
                std::future::pending::<()>().await;
            }
        }
    });

    engine.run(stop_rx).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::parser::parse_layout;

    #[test]
    fn unreadable_layout_path_asks_for_usage() {
        let err = read_layout(std::path::Path::new("no/such/layout.json"), LIGHTS_PER_VINE)
            .context("loading layout")
            .unwrap_err();
        assert!(is_layout_path_error(&err));
    }

    #[test]
    fn bad_layout_contents_do_not_ask_for_usage() {
        let err = parse_layout("[{\"point\":", LIGHTS_PER_VINE)
            .context("loading layout")
            .unwrap_err();
        assert!(!is_layout_path_error(&err));
        let unrelated = anyhow::anyhow!("connection refused");
        assert!(!is_layout_path_error(&unrelated));
    }
}
