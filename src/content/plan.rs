//! 2D plan printout
//!
//! One page per viewable level, or a single page for a home without levels.
//! All pages share one scale: the fixed plan scale when the home has one,
//! otherwise the largest scale at which the whole plan fits the imageable
//! area.

use printpdf::BuiltinFont;

use super::{PageResult, PaginatedContent};
use crate::error::PrintError;
use crate::model::level::plan_bounds;
use crate::model::{Home, Room, Wall};
use crate::print::{PageFormat, Rect};
use crate::render::helpers::colors::{GRAY, ROOM_COLOR, WALL_COLOR};
use crate::render::surface::{Surface, TextStyle};

/// Plan coordinates are in cm, paper in mm
const CM_TO_MM: f32 = 10.0;

/// Room name size in points
const ROOM_LABEL_SIZE: f32 = 7.0;

/// Walls and rooms drawn on one page
#[derive(Debug, Clone, Default)]
struct PlanPage {
    walls: Vec<Wall>,
    rooms: Vec<Room>,
}

/// Plan bounds in cm, `(min_x, min_y, max_x, max_y)`
type Bounds = (f32, f32, f32, f32);

pub struct PlanView {
    pages: Vec<PlanPage>,
    /// Fixed scale, paper length over real length
    fixed_scale: Option<f32>,
    bounds: Option<Bounds>,
}

impl PlanView {
    /// Build the plan pages of `home`
    ///
    /// Items without a level appear on every page.
    pub fn from_home(home: &Home, fixed_scale: Option<f32>) -> Self {
        let on_level = |level: Option<usize>, index: usize| level.map_or(true, |l| l == index);

        let pages: Vec<PlanPage> = if home.levels.is_empty() {
            vec![PlanPage {
                walls: home.walls.clone(),
                rooms: home.rooms.clone(),
            }]
        } else {
            home.levels
                .iter()
                .enumerate()
                .filter(|(_, level)| level.viewable)
                .map(|(index, _)| PlanPage {
                    walls: home
                        .walls
                        .iter()
                        .filter(|wall| on_level(wall.level, index))
                        .cloned()
                        .collect(),
                    rooms: home
                        .rooms
                        .iter()
                        .filter(|room| on_level(room.level, index))
                        .cloned()
                        .collect(),
                })
                .collect()
        };

        let bounds = plan_bounds(
            pages.iter().flat_map(|page| &page.walls),
            pages.iter().flat_map(|page| &page.rooms),
        );

        Self {
            pages,
            fixed_scale,
            bounds,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Largest scale at which the plan fits `area`
    fn fit_scale(&self, area: &Rect) -> Option<f32> {
        let (min_x, min_y, max_x, max_y) = self.bounds?;
        let width = (max_x - min_x) * CM_TO_MM;
        let height = (max_y - min_y) * CM_TO_MM;
        let scale = match (width > 0.0, height > 0.0) {
            (true, true) => (area.width / width).min(area.height / height),
            (true, false) => area.width / width,
            (false, true) => area.height / height,
            (false, false) => return None,
        };
        Some(scale)
    }

    fn scale(&self, area: &Rect) -> Option<f32> {
        self.fixed_scale.or_else(|| self.fit_scale(area))
    }
}

/// Maps plan coordinates in cm onto the page, centring the plan in the area
struct PlanTransform {
    scale: f32,
    origin: (f32, f32),
    offset: (f32, f32),
}

impl PlanTransform {
    fn new(bounds: Bounds, scale: f32, area: &Rect) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds;
        let width = (max_x - min_x) * CM_TO_MM * scale;
        let height = (max_y - min_y) * CM_TO_MM * scale;
        Self {
            scale,
            origin: (min_x, min_y),
            offset: (
                area.x + (area.width - width) / 2.0,
                area.y + (area.height - height) / 2.0,
            ),
        }
    }

    fn apply(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (
            self.offset.0 + (x - self.origin.0) * CM_TO_MM * self.scale,
            self.offset.1 + (y - self.origin.1) * CM_TO_MM * self.scale,
        )
    }
}

/// Outline of a wall of some thickness along its axis
fn wall_outline(wall: &Wall) -> Option<[(f32, f32); 4]> {
    let (dx, dy) = (wall.end.0 - wall.start.0, wall.end.1 - wall.start.1);
    let length = (dx * dx + dy * dy).sqrt();
    if length <= 0.0 {
        return None;
    }
    let half = wall.thickness / 2.0;
    let (nx, ny) = (-dy / length * half, dx / length * half);
    Some([
        (wall.start.0 + nx, wall.start.1 + ny),
        (wall.end.0 + nx, wall.end.1 + ny),
        (wall.end.0 - nx, wall.end.1 - ny),
        (wall.start.0 - nx, wall.start.1 - ny),
    ])
}

impl PaginatedContent for PlanView {
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        let Some(page) = self.pages.get(page_index) else {
            return Ok(PageResult::NoSuchPage);
        };

        let area = format.imageable();
        let (Some(bounds), Some(scale)) = (self.bounds, self.scale(&area)) else {
            // Nothing drawn yet in this home: print a blank plan page
            return Ok(PageResult::Exists);
        };
        let transform = PlanTransform::new(bounds, scale, &area);
        log::debug!(
            "Plan page {}: {} walls, {} rooms, scale {:.5}",
            page_index + 1,
            page.walls.len(),
            page.rooms.len(),
            transform.scale
        );

        for room in &page.rooms {
            let points: Vec<_> = room.points.iter().map(|&p| transform.apply(p)).collect();
            surface.polygon(&points, Some(&ROOM_COLOR), Some(&GRAY));
        }

        for wall in &page.walls {
            if let Some(outline) = wall_outline(wall) {
                let points = outline.map(|p| transform.apply(p));
                surface.polygon(&points, Some(&WALL_COLOR), None);
            }
        }

        let style = TextStyle::new(BuiltinFont::Helvetica, ROOM_LABEL_SIZE);
        for room in &page.rooms {
            let Some(ref name) = room.name else {
                continue;
            };
            if room.points.is_empty() {
                continue;
            }
            let count = room.points.len() as f32;
            let (sx, sy) = room
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
            let (cx, cy) = transform.apply((sx / count, sy / count));
            surface.text(name, cx - style.width(name) / 2.0, cy, &style);
        }

        Ok(PageResult::Exists)
    }

    fn preferred_scale(&self, format: &PageFormat) -> Option<f32> {
        self.scale(&format.imageable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::print::{Orientation, Paper};
    use crate::render::surface::{DrawCommand, RecordingSurface};

    fn wall(start: (f32, f32), end: (f32, f32), level: Option<usize>) -> Wall {
        Wall {
            start,
            end,
            thickness: 0.0,
            level,
        }
    }

    fn square_home() -> Home {
        Home {
            walls: vec![
                wall((0.0, 0.0), (1000.0, 0.0), None),
                wall((0.0, 500.0), (1000.0, 500.0), None),
            ],
            rooms: vec![Room {
                name: Some("Living".to_string()),
                points: vec![(0.0, 0.0), (1000.0, 0.0), (1000.0, 500.0), (0.0, 500.0)],
                level: None,
            }],
            ..Default::default()
        }
    }

    fn format() -> PageFormat {
        PageFormat::new(
            Paper::new(210.0, 297.0, Rect::new(10.0, 10.0, 200.0, 200.0)),
            Orientation::Portrait,
        )
    }

    #[test]
    fn test_fit_scale_uses_limiting_side() {
        let plan = PlanView::from_home(&square_home(), None);
        // 10 m wide plan on a 200 mm wide area
        let scale = plan.preferred_scale(&format()).unwrap();
        assert!((scale - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_scale_wins() {
        let plan = PlanView::from_home(&square_home(), Some(0.01));
        assert_eq!(plan.preferred_scale(&format()), Some(0.01));
    }

    #[test]
    fn test_one_page_per_viewable_level() {
        let mut home = square_home();
        home.levels = vec![
            Level::new("Ground", 0.0),
            Level::new("Attic", 250.0),
            Level::new("Roof", 500.0),
        ];
        home.levels[2].viewable = false;
        home.walls.push(wall((0.0, 0.0), (0.0, 500.0), Some(1)));

        let mut plan = PlanView::from_home(&home, None);
        assert_eq!(plan.page_count(), 2);
        assert_eq!(plan.pages[0].walls.len(), 2);
        assert_eq!(plan.pages[1].walls.len(), 3);

        let mut surface = RecordingSurface::new();
        assert_eq!(plan.render(&mut surface, &format(), 1).unwrap(), PageResult::Exists);
        assert_eq!(
            plan.render(&mut surface, &format(), 2).unwrap(),
            PageResult::NoSuchPage
        );
    }

    #[test]
    fn test_plan_centred_in_area() {
        let mut plan = PlanView::from_home(&square_home(), None);
        let mut surface = RecordingSurface::new();
        plan.render(&mut surface, &format(), 0).unwrap();

        // 10 m x 5 m at 1/50 is 200 x 100 mm, centred vertically in 200 mm
        let room = surface
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Polygon { points } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert!((room[0].0 - 10.0).abs() < 1e-3);
        assert!((room[0].1 - 60.0).abs() < 1e-3);
        assert!((room[2].0 - 210.0).abs() < 1e-3);
        assert!((room[2].1 - 160.0).abs() < 1e-3);
        assert_eq!(surface.texts(), vec!["Living"]);
    }

    #[test]
    fn test_empty_home_prints_blank_page() {
        let mut plan = PlanView::from_home(&Home::default(), None);
        assert_eq!(plan.preferred_scale(&format()), None);
        let mut surface = RecordingSurface::new();
        assert_eq!(plan.render(&mut surface, &format(), 0).unwrap(), PageResult::Exists);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_wall_outline_has_thickness() {
        let outline = wall_outline(&Wall {
            start: (0.0, 0.0),
            end: (100.0, 0.0),
            thickness: 20.0,
            level: None,
        })
        .unwrap();
        assert_eq!(outline[0], (0.0, 10.0));
        assert_eq!(outline[2], (100.0, -10.0));
    }
}
