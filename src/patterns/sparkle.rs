//! Green sparkle: every fixture re-rolls its brightness every frame. The
//! simplest possible pattern, useful as a smoke test for a new output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fixtures::Layout;
use crate::models::universe::{Color, Frame};
use crate::output::OutputMode;
use crate::patterns::Pattern;

/// Peak level on the simulator, which renders dim.
pub const SIMULATOR_INTENSITY: f64 = 80.0;
/// Peak level on the physical tree.
pub const TREE_INTENSITY: f64 = 30.0;

pub struct Sparkle {
    intensity: f64,
    rng: StdRng,
}

impl Sparkle {
    pub fn new(intensity: f64, rng: StdRng) -> Self {
        Self { intensity, rng }
    }

    pub fn for_output(mode: OutputMode) -> Self {
        let intensity = match mode {
            OutputMode::Simulator => SIMULATOR_INTENSITY,
            OutputMode::Tree => TREE_INTENSITY,
        };
        Self::new(intensity, StdRng::from_entropy())
    }
}

pub fn pixel_color(seed: f64, intensity: f64) -> Color {
    let level = seed * intensity;
    Color::new(level, level * 3.0, level)
}

impl Pattern for Sparkle {
    fn name(&self) -> &'static str {
        "sparkle"
    }

    fn render(&mut self, _t: f64, layout: &Layout) -> Frame {
        let intensity = self.intensity;
        let rng = &mut self.rng;
        layout.map_positions(|_, _, _| pixel_color(rng.gen::<f64>(), intensity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{generate_layout, TreeGeometry};

    #[test]
    fn green_is_three_times_red() {
        let layout = generate_layout(&TreeGeometry::default());
        let mut sparkle = Sparkle::new(SIMULATOR_INTENSITY, StdRng::seed_from_u64(7));
        let frame = sparkle.render(0.0, &layout);
        for c in frame.as_flat() {
            assert_eq!(c.r, c.b);
            assert!((c.g - 3.0 * c.r).abs() < 1e-9);
            assert!((0.0..SIMULATOR_INTENSITY).contains(&c.r));
        }
    }

    #[test]
    fn rerolls_every_frame() {
        let layout = generate_layout(&TreeGeometry::default());
        let mut sparkle = Sparkle::new(TREE_INTENSITY, StdRng::seed_from_u64(11));
        let a = sparkle.render(0.0, &layout);
        let b = sparkle.render(0.0, &layout);
        assert_ne!(a, b);
    }

    #[test]
    fn tree_output_is_dimmer() {
        let sim = Sparkle::for_output(OutputMode::Simulator);
        let tree = Sparkle::for_output(OutputMode::Tree);
        assert!(tree.intensity < sim.intensity);
    }
}
