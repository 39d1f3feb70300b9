use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Branches radiating from the trunk.
pub const NUM_BRANCHES: usize = 8;
/// Vines hanging from each branch.
pub const VINES_PER_BRANCH: usize = 5;
/// Lights on each vine, top to bottom.
pub const LIGHTS_PER_VINE: usize = 34;
/// Vertical distance between neighbouring lights on a vine.
pub const LIGHT_DROP: f64 = 0.08;

/// A fixture position. Serialized as a bare `[x, y, z]` array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Point3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, k: f64) -> Point3 {
        Point3::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Physical description of the tree the layout is generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGeometry {
    pub center: Point3,
    /// Distance from the trunk to the first vine on each branch.
    pub inner_radius: f64,
    /// Distance between consecutive vines along a branch.
    pub vine_spacing: f64,
    pub branches: usize,
    pub vines_per_branch: usize,
    pub lights_per_vine: usize,
    pub light_drop: f64,
}

impl Default for TreeGeometry {
    fn default() -> Self {
        Self {
            center: Point3::new(0.0, 0.0, 3.0),
            inner_radius: 0.6,
            vine_spacing: 0.3,
            branches: NUM_BRANCHES,
            vines_per_branch: VINES_PER_BRANCH,
            lights_per_vine: LIGHTS_PER_VINE,
            light_drop: LIGHT_DROP,
        }
    }
}

impl TreeGeometry {
    /// The reference tree with a different center and spacing.
    pub fn new(center: Point3, inner_radius: f64, vine_spacing: f64) -> Self {
        Self {
            center,
            inner_radius,
            vine_spacing,
            ..Self::default()
        }
    }

    pub fn num_vines(&self) -> usize {
        self.branches * self.vines_per_branch
    }
}
