use serde::{Deserialize, Serialize};

/// A polygon of the 3D view, already projected onto the view plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPolygon {
    pub points: Vec<(f32, f32)>,
    /// RGB fill colour, components in 0.0..=1.0
    #[serde(default = "default_color")]
    pub color: (f32, f32, f32),
}

fn default_color() -> (f32, f32, f32) {
    (0.8, 0.8, 0.8)
}

/// Snapshot of the 3D view handed over by the 3D component
///
/// Coordinates are in view pixels with a top-left origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub polygons: Vec<ProjectedPolygon>,
}
