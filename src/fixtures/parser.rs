use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LayoutError;
use crate::fixtures::layout::Layout;
use crate::fixtures::models::Point3;
use crate::models::grid::VineGrid;

/// One element of the layout file: `{"point": [x, y, z]}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LayoutEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Point3>,
}

/// Render a layout as a JSON array with one entry per line.
pub fn layout_to_json(layout: &Layout) -> Result<String, LayoutError> {
    let mut lines = Vec::with_capacity(layout.len());
    for point in layout.as_flat() {
        let entry = LayoutEntry {
            point: Some(*point),
        };
        lines.push(serde_json::to_string(&entry)?);
    }
    Ok(format!("[\n{}\n]\n", lines.join(",\n")))
}

/// Parse a layout file's contents, regrouping entries into vines of
/// `lights_per_vine` in file order.
///
/// An entry without a `point` still occupies its slot, placed at the origin,
/// so every later fixture keeps its `(vine, light)` address.
pub fn parse_layout(json: &str, lights_per_vine: usize) -> Result<Layout, LayoutError> {
    let entries: Vec<LayoutEntry> = serde_json::from_str(json)?;
    let points = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.point.unwrap_or_else(|| {
                log::warn!("[layout] entry {index} has no point, using the origin");
                Point3::ORIGIN
            })
        })
        .collect();
    Ok(VineGrid::from_flat(lights_per_vine, points)?)
}

pub fn read_layout(path: &Path, lights_per_vine: usize) -> Result<Layout, LayoutError> {
    let content = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layout(&content, lights_per_vine)
}

pub fn write_layout(path: &Path, layout: &Layout) -> Result<(), LayoutError> {
    let content = layout_to_json(layout)?;
    fs::write(path, content).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })
}
