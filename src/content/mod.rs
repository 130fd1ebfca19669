//! Paginated content printed by the composer
//!
//! Each provider lays its content out into the imageable area of the page
//! format it is given and reports whether the requested page exists. Page
//! indices are local to the provider; the composer maps global page numbers
//! onto them.

pub mod furniture;
pub mod plan;
pub mod view3d;

pub use furniture::FurnitureTable;
pub use plan::PlanView;
pub use view3d::View3DSnapshot;

use crate::config::Settings;
use crate::error::PrintError;
use crate::model::Home;
use crate::print::PageFormat;
use crate::render::surface::Surface;

/// Whether a requested page was printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResult {
    Exists,
    NoSuchPage,
}

/// Content that can be split over several pages
pub trait PaginatedContent {
    /// Draw page `page_index` inside `format.imageable()`
    ///
    /// Nothing is drawn when the page does not exist.
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError>;

    /// Scale the content would be printed at on `format`, if it has one
    fn preferred_scale(&self, _format: &PageFormat) -> Option<f32> {
        None
    }
}

/// The providers of a home printout, in printing order
#[derive(Default)]
pub struct ContentProviders {
    pub furniture: Option<Box<dyn PaginatedContent>>,
    pub plan: Option<Box<dyn PaginatedContent>>,
    pub view3d: Option<Box<dyn PaginatedContent>>,
}

impl ContentProviders {
    /// Build the standard providers for a home
    ///
    /// The 3D view is only available when the home carries a snapshot.
    pub fn for_home(home: &Home, settings: &Settings) -> Self {
        let plan_scale = settings.print.as_ref().and_then(|p| p.plan_scale);
        Self {
            furniture: Some(Box::new(FurnitureTable::from_home(
                home,
                settings.table_font_size,
            ))),
            plan: Some(Box::new(PlanView::from_home(home, plan_scale))),
            view3d: home.view3d.clone().map(|snapshot| {
                Box::new(View3DSnapshot::new(snapshot)) as Box<dyn PaginatedContent>
            }),
        }
    }
}
