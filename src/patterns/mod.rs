//! Color Patterns
//!
//! Each pattern turns elapsed time and the static layout into one frame.
//! Patterns are stateless between frames except for what they draw once at
//! construction (the lava-lamp random table, the sparkle RNG).

pub mod color_utils;
pub mod diagnostic;
pub mod lava_lamp;
pub mod raver_plaid;
pub mod sparkle;

use std::str::FromStr;

use crate::fixtures::Layout;
use crate::models::universe::Frame;
use crate::output::OutputMode;

/// Frame rate every pattern runs at, whatever `--fps` says.
pub const FRAMES_PER_SECOND: u32 = 120;

pub trait Pattern: Send {
    fn name(&self) -> &'static str;

    /// Colors for every fixture in `layout` at `t` seconds since start.
    fn render(&mut self, t: f64, layout: &Layout) -> Frame;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternKind {
    #[default]
    LavaLamp,
    RaverPlaid,
    Diagnostic,
    Sparkle,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::LavaLamp,
        PatternKind::RaverPlaid,
        PatternKind::Diagnostic,
        PatternKind::Sparkle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::LavaLamp => "lava",
            PatternKind::RaverPlaid => "raver",
            PatternKind::Diagnostic => "diagnostic",
            PatternKind::Sparkle => "sparkle",
        }
    }
}

impl FromStr for PatternKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lava" | "lava-lamp" | "lava_lamp" => Ok(PatternKind::LavaLamp),
            "raver" | "raver-plaid" | "raver_plaid" => Ok(PatternKind::RaverPlaid),
            "diagnostic" | "diag" => Ok(PatternKind::Diagnostic),
            "sparkle" | "basic" => Ok(PatternKind::Sparkle),
            other => Err(format!(
                "unknown pattern '{other}' (expected one of: lava, raver, diagnostic, sparkle)"
            )),
        }
    }
}

/// Construct the pattern for `kind`, drawing any per-pixel randomness now.
pub fn build_pattern(kind: PatternKind, layout: &Layout, mode: OutputMode) -> Box<dyn Pattern> {
    match kind {
        PatternKind::LavaLamp => Box::new(lava_lamp::LavaLamp::new(layout.len())),
        PatternKind::RaverPlaid => Box::new(raver_plaid::RaverPlaid::default()),
        PatternKind::Diagnostic => Box::new(diagnostic::Diagnostic),
        PatternKind::Sparkle => Box::new(sparkle::Sparkle::for_output(mode)),
    }
}
