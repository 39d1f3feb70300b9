use crate::models::grid::VineGrid;

/// One fixture's color. Channels are nominally 0.0 - 255.0 but patterns are
/// allowed to overshoot; the OPC encoder saturates on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Colors for every fixture for one tick, shaped like the layout.
pub type Frame = VineGrid<Color>;
