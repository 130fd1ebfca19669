//! 3D view printout: a single page with the projected view fitted to the area

use super::{PageResult, PaginatedContent};
use crate::error::PrintError;
use crate::model::ViewSnapshot;
use crate::print::PageFormat;
use crate::render::helpers::colors::rgb;
use crate::render::surface::Surface;

pub struct View3DSnapshot {
    snapshot: ViewSnapshot,
}

impl View3DSnapshot {
    pub fn new(snapshot: ViewSnapshot) -> Self {
        Self { snapshot }
    }
}

impl PaginatedContent for View3DSnapshot {
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        if page_index > 0 {
            return Ok(PageResult::NoSuchPage);
        }

        let (width, height) = (self.snapshot.width, self.snapshot.height);
        if width <= 0.0 || height <= 0.0 {
            log::warn!("Empty 3D view snapshot {}x{}", width, height);
            return Ok(PageResult::Exists);
        }

        // Keep the view aspect ratio, centred in the area
        let area = format.imageable();
        let scale = (area.width / width).min(area.height / height);
        let x0 = area.x + (area.width - width * scale) / 2.0;
        let y0 = area.y + (area.height - height * scale) / 2.0;

        for polygon in &self.snapshot.polygons {
            let points: Vec<_> = polygon
                .points
                .iter()
                .map(|&(x, y)| (x0 + x * scale, y0 + y * scale))
                .collect();
            surface.polygon(&points, Some(&rgb(polygon.color)), None);
        }
        Ok(PageResult::Exists)
    }
}
