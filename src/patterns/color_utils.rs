//! Small signal helpers shared by the color fields.

use std::f64::consts::TAU;

/// Cosine wave with the given period, shifted by `offset` whole periods,
/// rescaled so it swings between `min` (trough) and `max` (peak).
pub fn cos(x: f64, offset: f64, period: f64, min: f64, max: f64) -> f64 {
    let value = ((x / period - offset) * TAU).cos() / 2.0 + 0.5;
    value * (max - min) + min
}

/// Linear map from `[old_min, old_max]` to `[new_min, new_max]`. Does not clamp.
pub fn remap(x: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    let zero_to_one = (x - old_min) / (old_max - old_min);
    zero_to_one * (new_max - new_min) + new_min
}

pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.max(min).min(max)
}

/// Push each channel away from `center` by `gain`, clamped to [0, 1].
pub fn contrast((r, g, b): (f64, f64, f64), center: f64, gain: f64) -> (f64, f64, f64) {
    let apply = |c: f64| clamp((c - center) * gain + center, 0.0, 1.0);
    (apply(r), apply(g), apply(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn cos_peaks_at_offset() {
        assert!(close(cos(0.0, 0.0, 1.0, 0.0, 1.0), 1.0));
        assert!(close(cos(0.5, 0.0, 1.0, 0.0, 1.0), 0.0));
        assert!(close(cos(3.0, 1.5, 2.0, -1.0, 1.0), 1.0));
        assert!(close(cos(0.25, 0.0, 1.0, 0.0, 0.6), 0.3));
    }

    #[test]
    fn remap_is_linear_and_unclamped() {
        assert!(close(remap(0.85, 0.8, 0.9, 0.0, 1.0), 0.5));
        assert!(close(remap(1.0, 0.8, 0.9, 0.0, 1.0), 2.0));
        assert!(close(remap(0.0, -1.0, 1.0, 0.0, 256.0), 128.0));
    }

    #[test]
    fn contrast_pivots_and_clamps() {
        let (r, g, b) = contrast((0.5, 0.7, 0.0), 0.5, 1.5);
        assert!(close(r, 0.5));
        assert!(close(g, 0.8));
        assert!(close(b, 0.0));
        let (r, _, _) = contrast((0.9, 0.0, 0.0), 0.5, 1.5);
        assert!(close(r, 1.0));
    }
}
