use serde::{Deserialize, Serialize};

/// A storey of the home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(default)]
    pub elevation: f32,
    /// Levels that are not viewable are skipped when printing the plan
    #[serde(default = "default_true")]
    pub viewable: bool,
}

fn default_true() -> bool {
    true
}

impl Level {
    pub fn new(name: impl Into<String>, elevation: f32) -> Self {
        Self {
            name: name.into(),
            elevation,
            viewable: true,
        }
    }
}

/// Wall segment, plan coordinates in cm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub start: (f32, f32),
    pub end: (f32, f32),
    #[serde(default = "default_thickness")]
    pub thickness: f32,
    #[serde(default)]
    pub level: Option<usize>,
}

fn default_thickness() -> f32 {
    10.0
}

/// Room outline, plan coordinates in cm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub name: Option<String>,
    pub points: Vec<(f32, f32)>,
    #[serde(default)]
    pub level: Option<usize>,
}

/// Axis aligned bounds of plan items, `(min_x, min_y, max_x, max_y)` in cm
pub fn plan_bounds<'a>(
    walls: impl IntoIterator<Item = &'a Wall>,
    rooms: impl IntoIterator<Item = &'a Room>,
) -> Option<(f32, f32, f32, f32)> {
    let wall_points = walls.into_iter().flat_map(|w| {
        let half = w.thickness / 2.0;
        [w.start, w.end]
            .into_iter()
            .flat_map(move |(x, y)| [(x - half, y - half), (x + half, y + half)])
    });
    let room_points = rooms.into_iter().flat_map(|r| r.points.iter().copied());

    wall_points
        .chain(room_points)
        .fold(None, |bounds, (x, y)| match bounds {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
}
