//! Wiring check: every vine gets a solid color picked by its index, so a
//! miswired or misordered vine stands out against its neighbours.

use crate::fixtures::Layout;
use crate::models::universe::{Color, Frame};
use crate::patterns::Pattern;

pub const REFERENCE_COLORS: [Color; 5] = [
    Color::new(255.0, 0.0, 0.0),
    Color::new(0.0, 255.0, 0.0),
    Color::new(0.0, 0.0, 255.0),
    Color::new(255.0, 255.0, 0.0),
    Color::new(255.0, 255.0, 255.0),
];

pub fn color_index(vine: usize) -> usize {
    vine % REFERENCE_COLORS.len()
}

pub fn pixel_color(vine: usize) -> Color {
    REFERENCE_COLORS[color_index(vine)]
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostic;

impl Pattern for Diagnostic {
    fn name(&self) -> &'static str {
        "diagnostic"
    }

    fn render(&mut self, _t: f64, layout: &Layout) -> Frame {
        layout.map_positions(|vine, _light, _| pixel_color(vine))
    }
}
