//! Furniture list printed as a table
//!
//! Columns: name, width, depth, height and level. The column header is
//! repeated at the top of every page. Pages are filled one after the other:
//! page `k` starts at the row following page `k - 1` and holds as many rows
//! as the imageable height it is printed on allows.

use printpdf::BuiltinFont;

use super::{PageResult, PaginatedContent};
use crate::error::PrintError;
use crate::model::Home;
use crate::print::{PageFormat, Rect};
use crate::render::helpers::colors::{GRAY, LIGHT_GRAY};
use crate::render::surface::{Surface, TextStyle};

const COLUMN_TITLES: [&str; 5] = ["Name", "Width", "Depth", "Height", "Level"];

/// Share of the table width given to each column
const COLUMN_WEIGHTS: [f32; 5] = [0.40, 0.14, 0.14, 0.14, 0.18];

/// Row height as a multiple of the text line height
const ROW_SPACING: f32 = 1.6;

/// Horizontal cell padding in mm
const CELL_PADDING: f32 = 1.5;

/// Grid line thickness in points
const GRID_THICKNESS: f32 = 0.3;

/// Rows `first..last` laid out on a page `height` mm tall
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageRows {
    height: f32,
    first: usize,
    last: usize,
}

/// Rows of the furniture list, one page after the other
pub struct FurnitureTable {
    rows: Vec<[String; 5]>,
    font_size: f32,
    /// Page breaks computed so far, in page order
    pages: Vec<PageRows>,
}

impl FurnitureTable {
    pub fn new(rows: Vec<[String; 5]>, font_size: f32) -> Self {
        Self {
            rows,
            font_size,
            pages: Vec::new(),
        }
    }

    /// List the visible furniture of `home`; dimensions are printed in cm
    pub fn from_home(home: &Home, font_size: f32) -> Self {
        let rows = home
            .visible_furniture()
            .map(|piece| {
                [
                    piece.name.clone(),
                    format!("{:.1}", piece.width),
                    format!("{:.1}", piece.depth),
                    format!("{:.1}", piece.height),
                    home.level_name(piece.level).unwrap_or_default().to_string(),
                ]
            })
            .collect();
        Self::new(rows, font_size)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn style(&self) -> TextStyle {
        TextStyle::new(BuiltinFont::Helvetica, self.font_size)
    }

    fn header_style(&self) -> TextStyle {
        TextStyle::new(BuiltinFont::HelveticaBold, self.font_size)
    }

    fn row_height(&self) -> f32 {
        self.style().line_height() * ROW_SPACING
    }

    /// Rows below the column header that fit in `height` mm
    fn rows_per_page(&self, height: f32) -> Result<usize, PrintError> {
        let per_page = ((height / self.row_height()).floor() as usize).saturating_sub(1);
        if per_page == 0 {
            return Err(PrintError::InvalidGeometry(format!(
                "{:.1} mm is too short for a furniture table row",
                height
            )));
        }
        Ok(per_page)
    }

    /// Rows `first..last` printed on `page_index` for an imageable area `height` mm tall
    ///
    /// Breaks of earlier pages are kept. A page asked for with another height
    /// than last time is laid out again, along with every page after it.
    /// Pages never asked for before `page_index` are laid out with `height`.
    fn page_rows(
        &mut self,
        height: f32,
        page_index: usize,
    ) -> Result<Option<(usize, usize)>, PrintError> {
        if let Some(page) = self.pages.get(page_index) {
            if (page.height - height).abs() < f32::EPSILON {
                return Ok(Some((page.first, page.last)));
            }
            self.pages.truncate(page_index);
        }

        while self.pages.len() <= page_index {
            let first = self.pages.last().map_or(0, |page| page.last);
            if first >= self.rows.len() {
                return Ok(None);
            }
            let last = (first + self.rows_per_page(height)?).min(self.rows.len());
            log::debug!(
                "Furniture table page {}: rows {}..{} of {}",
                self.pages.len() + 1,
                first + 1,
                last,
                self.rows.len()
            );
            self.pages.push(PageRows {
                height,
                first,
                last,
            });
        }

        let page = self.pages[page_index];
        Ok(Some((page.first, page.last)))
    }

    fn column_bounds(area: &Rect) -> [(f32, f32); 5] {
        let mut x = area.x;
        COLUMN_WEIGHTS.map(|weight| {
            let width = area.width * weight;
            let column = (x, width);
            x += width;
            column
        })
    }

    fn draw_row(
        &self,
        surface: &mut dyn Surface,
        columns: &[(f32, f32); 5],
        cells: &[&str; 5],
        top: f32,
        style: &TextStyle,
    ) {
        let row_height = self.row_height();
        let baseline = top + (row_height - style.line_height()) / 2.0 + style.ascent();
        for (index, (&(x, width), cell)) in columns.iter().zip(cells).enumerate() {
            // Name and level left aligned, dimensions right aligned
            let text_x = if index == 0 || index == 4 {
                x + CELL_PADDING
            } else {
                x + width - CELL_PADDING - style.width(cell)
            };
            surface.text(cell, text_x, baseline, style);
        }
        let bottom = top + row_height;
        let right = columns[4].0 + columns[4].1;
        surface.line((columns[0].0, bottom), (right, bottom), &GRAY, GRID_THICKNESS);
    }
}

impl PaginatedContent for FurnitureTable {
    fn render(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        let area = format.imageable();
        let Some((first, last)) = self.page_rows(area.height, page_index)? else {
            return Ok(PageResult::NoSuchPage);
        };

        let columns = Self::column_bounds(&area);
        let row_height = self.row_height();

        surface.fill_rect(Rect::new(area.x, area.y, area.width, row_height), &LIGHT_GRAY);
        self.draw_row(surface, &columns, &COLUMN_TITLES, area.y, &self.header_style());

        let style = self.style();
        let mut top = area.y + row_height;
        for row in &self.rows[first..last] {
            let cells = [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
                row[4].as_str(),
            ];
            self.draw_row(surface, &columns, &cells, top, &style);
            top += row_height;
        }

        surface.stroke_rect(
            Rect::new(area.x, area.y, area.width, top - area.y),
            &GRAY,
            GRID_THICKNESS,
        );
        Ok(PageResult::Exists)
    }
}
