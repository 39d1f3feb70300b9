//! Raver Plaid
//!
//! Three out-of-sync color waves under diagonal black stripes. Works on a
//! synthetic 1D strip rather than the tree coordinates; the strip is folded
//! in on itself segment by segment before being laid onto the fixtures.

use std::f64::consts::TAU;

use crate::fixtures::models::{LIGHTS_PER_VINE, VINES_PER_BRANCH};
use crate::fixtures::Layout;
use crate::models::universe::{Color, Frame};
use crate::patterns::color_utils::{clamp, cos, remap};
use crate::patterns::Pattern;

/// Number of strip copies folded into one frame.
pub const SEGMENTS: usize = 4;

/// Spatial frequency (cycles along the strip) per channel.
pub const FREQ_R: f64 = 30.0;
pub const FREQ_G: f64 = 30.0;
pub const FREQ_B: f64 = 30.0;

/// Seconds per cycle per channel; a negative speed runs backwards.
pub const SPEED_R: f64 = 7.0;
pub const SPEED_G: f64 = -13.0;
pub const SPEED_B: f64 = 19.0;

/// Sub-pixels in one segment.
pub fn segment_len(lights_per_vine: usize, vines_per_branch: usize) -> usize {
    lights_per_vine * vines_per_branch * 2
}

/// Color at fractional position `pct` along the strip.
pub fn pixel_color(t: f64, pct: f64) -> Color {
    // diagonal black stripes
    let pct_jittered = (pct * 77.0) % 37.0;
    let stripes = cos(pct_jittered, t * 0.05, 1.0, -1.5, 1.5);
    let stripes_offset = cos(t, 0.9, 60.0, -0.5, 3.0);
    let stripes = clamp(stripes + stripes_offset, 0.0, 1.0);

    let wave = |speed: f64, freq: f64| {
        let v = ((t / speed + pct * freq) * TAU).cos();
        stripes * remap(v, -1.0, 1.0, 0.0, 256.0)
    };

    Color::new(
        wave(SPEED_R, FREQ_R),
        wave(SPEED_G, FREQ_G),
        wave(SPEED_B, FREQ_B),
    )
}

/// One segment of `n` sub-pixels.
pub fn segment(t: f64, n: usize) -> Vec<Color> {
    (0..n)
        .map(|i| pixel_color(t, i as f64 / n as f64))
        .collect()
}

/// Fold segments together: the first half of each segment is inserted at the
/// middle of what has been accumulated so far, the second half is appended.
pub fn interleave_segments<T: Clone>(segments: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for seg in segments {
        let half = seg.len() / 2;
        let mid = out.len() / 2;
        out.splice(mid..mid, seg[..half].iter().cloned());
        out.extend_from_slice(&seg[half..]);
    }
    out
}

/// The full folded strip for time `t`: `SEGMENTS * segment_len` colors.
pub fn strip(t: f64, lights_per_vine: usize, vines_per_branch: usize) -> Vec<Color> {
    let seg = segment(t, segment_len(lights_per_vine, vines_per_branch));
    interleave_segments(std::iter::repeat(seg).take(SEGMENTS))
}

#[derive(Debug, Clone, Copy)]
pub struct RaverPlaid {
    pub lights_per_vine: usize,
    pub vines_per_branch: usize,
}

impl Default for RaverPlaid {
    fn default() -> Self {
        Self {
            lights_per_vine: LIGHTS_PER_VINE,
            vines_per_branch: VINES_PER_BRANCH,
        }
    }
}

impl Pattern for RaverPlaid {
    fn name(&self) -> &'static str {
        "raver-plaid"
    }

    /// Lays the strip onto the fixtures in flat order, repeating it if the
    /// layout is longer and cutting it if shorter.
    fn render(&mut self, t: f64, layout: &Layout) -> Frame {
        let colors = strip(t, self.lights_per_vine, self.vines_per_branch);
        layout.map_positions(|vine, light, _| {
            if colors.is_empty() {
                return Color::BLACK;
            }
            let index = vine * layout.lights_per_vine() + light;
            colors[index % colors.len()]
        })
    }
}
