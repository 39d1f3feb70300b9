//! Lava Lamp
//!
//! A smooth 3D color field: warp the fixture coordinates with a couple of
//! cosine shifts, turn each axis into a slow color wave, then cut moving dark
//! holes into it with a second, slower field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fixtures::{Layout, Point3};
use crate::models::universe::{Color, Frame};
use crate::patterns::color_utils::{clamp, contrast, cos, remap};
use crate::patterns::Pattern;

/// Elapsed time is slowed down before it reaches the field.
pub const TIME_SCALE: f64 = 0.6;

const CONTRAST_CENTER: f64 = 0.5;
const CONTRAST_GAIN: f64 = 1.5;

/// Phase offsets of the clampdown field, one per axis.
const CLAMPDOWN_OFFSETS: [f64; 3] = [12.345, 24.536, 34.675];

/// Color of one fixture.
///
/// `t` is already time-scaled. `index`, `n_pixels` and `random_values` are
/// part of the per-pixel signature shared with the other fields; the current
/// formula does not read them.
pub fn pixel_color(
    t: f64,
    coord: Point3,
    _index: usize,
    _n_pixels: usize,
    _random_values: &[f64],
) -> Color {
    let Point3 { mut x, mut y, mut z } = coord;

    // moving stripes
    y += cos(x + 0.2 * z, 0.0, 1.0, 0.0, 0.6);
    z += cos(x, 0.0, 1.0, 0.0, 0.3);
    x += cos(y + z, 0.0, 1.5, 0.0, 0.2);

    // rotate axes
    (x, y, z) = (y, z, x);

    let r = cos(x, t / 4.0, 2.0, 0.0, 1.0);
    let g = cos(y, t / 4.0, 2.0, 0.0, 1.0);
    let b = cos(z, t / 4.0, 2.0, 0.0, 1.0);
    let (mut r, mut g, mut b) = contrast((r, g, b), CONTRAST_CENTER, CONTRAST_GAIN);

    let mask = clampdown(t, x, y, z);
    r *= mask;
    g *= mask;
    b *= mask;

    // fade towards blue and orange
    g = g * 0.6 + ((r + b) / 2.0) * 0.4;

    Color::new(r * 256.0, g * 256.0, b * 256.0)
}

/// Darkening mask in [0, 1] from a slower field over the warped coordinates.
pub fn clampdown(t: f64, x: f64, y: f64, z: f64) -> f64 {
    let r2 = cos(x, t / 10.0 + CLAMPDOWN_OFFSETS[0], 3.0, 0.0, 1.0);
    let g2 = cos(y, t / 10.0 + CLAMPDOWN_OFFSETS[1], 3.0, 0.0, 1.0);
    let b2 = cos(z, t / 10.0 + CLAMPDOWN_OFFSETS[2], 3.0, 0.0, 1.0);
    let level = (r2 + g2 + b2) / 2.0;
    clamp(remap(level, 0.8, 0.9, 0.0, 1.0), 0.0, 1.0)
}

pub struct LavaLamp {
    random_values: Vec<f64>,
}

impl LavaLamp {
    /// Draw the per-pixel random table once, from OS entropy.
    pub fn new(n_pixels: usize) -> Self {
        let mut rng = StdRng::from_entropy();
        Self::with_rng(n_pixels, &mut rng)
    }

    pub fn with_rng(n_pixels: usize, rng: &mut impl Rng) -> Self {
        Self {
            random_values: (0..n_pixels).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    pub fn random_values(&self) -> &[f64] {
        &self.random_values
    }
}

impl Pattern for LavaLamp {
    fn name(&self) -> &'static str {
        "lava-lamp"
    }

    fn render(&mut self, t: f64, layout: &Layout) -> Frame {
        let t = t * TIME_SCALE;
        let n_pixels = layout.len();
        let random_values = &self.random_values;
        layout.par_map_indexed(|index, coord| {
            pixel_color(t, *coord, index, n_pixels, random_values)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{generate_layout, TreeGeometry};

    #[test]
    fn same_inputs_same_color() {
        let coord = Point3::new(0.6, -0.2, 2.1);
        let a = pixel_color(4.2, coord, 17, 1360, &[0.1; 1360]);
        let b = pixel_color(4.2, coord, 17, 1360, &[0.9; 1360]);
        assert_eq!(a, b);
        assert_eq!(a, pixel_color(4.2, coord, 17, 1360, &[0.1; 1360]));
    }

    #[test]
    fn frames_repeat_for_the_same_time() {
        let layout = generate_layout(&TreeGeometry::default());
        let mut lamp = LavaLamp::new(layout.len());
        let first = lamp.render(12.5, &layout);
        let second = lamp.render(12.5, &layout);
        assert_eq!(first, second);
    }

    #[test]
    fn render_applies_time_scale() {
        let layout = generate_layout(&TreeGeometry::default());
        let mut lamp = LavaLamp::new(layout.len());
        let frame = lamp.render(10.0, &layout);
        let coord = layout[(7, 3)];
        let index = 7 * layout.lights_per_vine() + 3;
        let expected = pixel_color(6.0, coord, index, layout.len(), lamp.random_values());
        assert_eq!(frame[(7, 3)], expected);
    }

    #[test]
    fn channels_stay_within_nominal_range() {
        let layout = generate_layout(&TreeGeometry::default());
        let mut lamp = LavaLamp::new(layout.len());
        for step in 0..20 {
            let frame = lamp.render(step as f64 * 3.7, &layout);
            for c in frame.as_flat() {
                for v in c.to_array() {
                    assert!((0.0..=256.0).contains(&v), "{v}");
                }
            }
        }
    }

    #[test]
    fn clampdown_is_a_mask() {
        for i in 0..200 {
            let v = i as f64 * 0.137;
            let m = clampdown(v, v * 0.5, -v, v * 1.3);
            assert!((0.0..=1.0).contains(&m));
        }
    }

    #[test]
    fn known_colors() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

        let c = pixel_color(31.0, Point3::new(-1.4, 0.6, 1.0), 0, 1360, &[]);
        assert!(close(c.r, 123.60020413110902), "{c:?}");
        assert!(close(c.g, 111.8738914891498), "{c:?}");
        assert!(close(c.b, 0.0), "{c:?}");

        let c = pixel_color(55.5, Point3::new(0.9, 0.9, 0.5), 0, 1360, &[]);
        assert!(close(c.r, 240.67835988672533), "{c:?}");
        assert!(close(c.g, 48.13567197734507), "{c:?}");
        assert!(close(c.b, 0.0), "{c:?}");
    }

    #[test]
    fn clampdown_ramps_between_its_thresholds() {
        // (r2 + g2 + b2) / 2 = 0.85725..., inside the 0.8 - 0.9 ramp
        let m = clampdown(1.0, -1.3, 0.4, -0.3);
        assert!((m - 0.5725184342702971).abs() < 1e-9, "{m}");
    }

    #[test]
    fn random_table_is_drawn_once() {
        let lamp = LavaLamp::new(1360);
        assert_eq!(lamp.random_values().len(), 1360);
        assert!(lamp.random_values().iter().all(|v| (0.0..1.0).contains(v)));
    }
}
