//! Render Engine
//!
//! Owns the frame loop: sample elapsed time, render the active pattern over
//! the layout, dispatch to the sink, sleep one frame interval. The layout and
//! the sink are handed in at construction; nothing is global.

use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::time::sleep;

use crate::fixtures::Layout;
use crate::models::universe::Frame;
use crate::output::{dispatch, OutputMode, PixelSink};
use crate::patterns::Pattern;

pub struct RenderEngine<S: PixelSink> {
    layout: Layout,
    pattern: Box<dyn Pattern>,
    sink: S,
    mode: OutputMode,
    frame_interval: Duration,
}

/// Sleep between frames for a target rate. Zero is treated as one frame per second.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

impl<S: PixelSink> RenderEngine<S> {
    pub fn new(
        layout: Layout,
        pattern: Box<dyn Pattern>,
        sink: S,
        mode: OutputMode,
        fps: u32,
    ) -> Self {
        Self {
            layout,
            pattern,
            sink,
            mode,
            frame_interval: frame_interval(fps),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Render one frame at `t` seconds since start without sending it.
    pub fn render_at(&mut self, t: f64) -> Frame {
        self.pattern.render(t, &self.layout)
    }

    /// Run until `stop` reads true or its sender goes away.
    /// Returns the number of frames dispatched.
    pub async fn run(&mut self, mut stop: watch::Receiver<bool>) -> u64 {
        log::info!(
            "[render] {} -> {} output, {} fixtures, {:.1} ms/frame",
            self.pattern.name(),
            self.mode,
            self.layout.len(),
            self.frame_interval.as_secs_f64() * 1000.0
        );

        let start = Instant::now();
        let mut frames: u64 = 0;

        loop {
            if *stop.borrow() {
                break;
            }

            let t = start.elapsed().as_secs_f64();
            let frame = self.render_at(t);
            let delivered = dispatch(&mut self.sink, self.mode, &frame).await;
            if delivered == 0 {
                log::trace!("[render] frame {frames} not delivered");
            }
            frames += 1;

            // A dropped sender counts as a stop; a changed value is read at the top.
            let sender_gone = tokio::select! {
                changed = stop.changed() => changed.is_err(),
                _ = sleep(self.frame_interval) => false,
            };
            if sender_gone {
                break;
            }
        }

        log::info!(
            "[render] stopped after {frames} frames ({:.1}s)",
            start.elapsed().as_secs_f64()
        );
        frames
    }
}
