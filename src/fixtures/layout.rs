use std::f64::consts::TAU;

use crate::fixtures::models::{Point3, TreeGeometry};
use crate::models::grid::VineGrid;

/// Fixture positions, grouped by vine and ordered root to tip.
pub type Layout = VineGrid<Point3>;

/// Horizontal unit vector for `branch` out of `branches` evenly spaced arms.
pub fn branch_direction(branch: usize, branches: usize) -> Point3 {
    if branches == 0 {
        return Point3::new(1.0, 0.0, 0.0);
    }
    let angle = branch as f64 * TAU / branches as f64;
    Point3::new(angle.cos(), angle.sin(), 0.0)
}

/// Where vine `vine` of `branch` attaches to its branch.
pub fn vine_origin(geometry: &TreeGeometry, branch: usize, vine: usize) -> Point3 {
    let direction = branch_direction(branch, geometry.branches);
    geometry.center + direction * (geometry.inner_radius + vine as f64 * geometry.vine_spacing)
}

/// Position of `light` on a vine hanging straight down from `origin`.
pub fn light_position(origin: Point3, light: usize, drop: f64) -> Point3 {
    origin + Point3::new(0.0, 0.0, -drop) * light as f64
}

/// Every fixture position on the tree: branch-major, then vine, then light.
pub fn generate_layout(geometry: &TreeGeometry) -> Layout {
    let lights = geometry.lights_per_vine;
    VineGrid::from_fn(geometry.num_vines(), lights, |vine_index, light| {
        let branch = vine_index / geometry.vines_per_branch;
        let vine = vine_index % geometry.vines_per_branch;
        let origin = vine_origin(geometry, branch, vine);
        light_position(origin, light, geometry.light_drop)
    })
}
