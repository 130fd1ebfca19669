//! Page geometry
//!
//! All lengths are in millimetres. Rectangles use a top-left origin with y
//! growing downwards; the PDF surface flips them when emitting operations.
//!
//! `Paper` always describes the physical sheet in portrait coordinates.
//! `PageFormat` adds an orientation and exposes the logical (rotated) view
//! that content providers draw into.

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_PAGE_MARGIN, DEFAULT_PAPER_HEIGHT, DEFAULT_PAPER_WIDTH};
use crate::config::PrintSettings;
use crate::error::PrintError;

/// Tolerance used when comparing geometry
const EPSILON: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
    ReverseLandscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check that this rectangle fits inside `outer`
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.x >= outer.x - EPSILON
            && self.y >= outer.y - EPSILON
            && self.right() <= outer.right() + EPSILON
            && self.bottom() <= outer.bottom() + EPSILON
    }
}

/// Physical sheet, portrait coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paper {
    pub width: f32,
    pub height: f32,
    pub imageable: Rect,
}

impl Paper {
    pub fn new(width: f32, height: f32, imageable: Rect) -> Self {
        Self {
            width,
            height,
            imageable,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// US Letter with one inch margins, the device default sheet
impl Default for Paper {
    fn default() -> Self {
        Self::new(
            DEFAULT_PAPER_WIDTH,
            DEFAULT_PAPER_HEIGHT,
            Rect::new(
                DEFAULT_PAGE_MARGIN,
                DEFAULT_PAGE_MARGIN,
                DEFAULT_PAPER_WIDTH - 2.0 * DEFAULT_PAGE_MARGIN,
                DEFAULT_PAPER_HEIGHT - 2.0 * DEFAULT_PAGE_MARGIN,
            ),
        )
    }
}

/// A sheet seen through its orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageFormat {
    pub paper: Paper,
    pub orientation: Orientation,
}

impl PageFormat {
    pub fn new(paper: Paper, orientation: Orientation) -> Self {
        Self { paper, orientation }
    }

    /// Logical page width
    pub fn width(&self) -> f32 {
        match self.orientation {
            Orientation::Portrait => self.paper.width,
            Orientation::Landscape | Orientation::ReverseLandscape => self.paper.height,
        }
    }

    /// Logical page height
    pub fn height(&self) -> f32 {
        match self.orientation {
            Orientation::Portrait => self.paper.height,
            Orientation::Landscape | Orientation::ReverseLandscape => self.paper.width,
        }
    }

    /// Logical page rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width(), self.height())
    }

    /// Logical imageable rectangle derived from the paper imageable area
    pub fn imageable(&self) -> Rect {
        let paper = &self.paper;
        let area = &paper.imageable;
        match self.orientation {
            Orientation::Portrait => *area,
            Orientation::Landscape => Rect::new(
                paper.height - (area.y + area.height),
                area.x,
                area.height,
                area.width,
            ),
            Orientation::ReverseLandscape => Rect::new(
                area.y,
                paper.width - (area.x + area.width),
                area.height,
                area.width,
            ),
        }
    }

    /// Restrict the logical imageable area to the vertical band `[y, y + height]`
    ///
    /// The band is written back onto the physical paper edge that the
    /// orientation maps the logical vertical axis to, so the result reads back
    /// with `imageable().y == y` and `imageable().height == height`.
    pub fn with_logical_band(&self, y: f32, height: f32) -> PageFormat {
        let mut paper = self.paper;
        let area = paper.imageable;
        paper.imageable = match self.orientation {
            Orientation::Portrait => Rect::new(area.x, y, area.width, height),
            Orientation::Landscape => Rect::new(y, area.y, height, area.height),
            Orientation::ReverseLandscape => {
                Rect::new(paper.width - (y + height), area.y, height, area.height)
            }
        };
        PageFormat::new(paper, self.orientation)
    }

    fn check(&self) -> Result<(), PrintError> {
        let paper = &self.paper;
        if !(paper.width.is_finite() && paper.height.is_finite())
            || paper.width <= 0.0
            || paper.height <= 0.0
        {
            return Err(PrintError::InvalidGeometry(format!(
                "paper size {}x{} mm",
                paper.width, paper.height
            )));
        }
        let area = &paper.imageable;
        if area.width <= 0.0 || area.height <= 0.0 {
            return Err(PrintError::InvalidGeometry(format!(
                "imageable area {}x{} mm leaves no room for content",
                area.width, area.height
            )));
        }
        if area.x < 0.0 || area.y < 0.0 || !area.is_within(&paper.bounds()) {
            return Err(PrintError::InvalidGeometry(
                "imageable area exceeds the sheet".to_string(),
            ));
        }
        Ok(())
    }
}

/// Snaps a page format to what an output device supports
pub trait DeviceFormatValidator {
    fn validate(&self, format: PageFormat) -> Result<PageFormat, PrintError>;
}

/// Validator for PDF output: any sheet size is accepted, the imageable area
/// is clamped into the sheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDevice;

impl DeviceFormatValidator for PdfDevice {
    fn validate(&self, format: PageFormat) -> Result<PageFormat, PrintError> {
        let mut paper = format.paper;
        let area = paper.imageable;
        let x = area.x.clamp(0.0, paper.width);
        let y = area.y.clamp(0.0, paper.height);
        let right = area.right().clamp(x, paper.width);
        let bottom = area.bottom().clamp(y, paper.height);
        let clamped = Rect::new(x, y, right - x, bottom - y);
        if clamped != area {
            log::warn!(
                "Imageable area {:?} clamped to sheet {}x{} mm",
                area,
                paper.width,
                paper.height
            );
        }
        if clamped.width <= 0.0 || clamped.height <= 0.0 {
            return Err(PrintError::Device(
                "no printable area left on the sheet".to_string(),
            ));
        }
        paper.imageable = clamped;
        Ok(PageFormat::new(paper, format.orientation))
    }
}

/// Resolve the page format for a print job
///
/// Without stored print settings the device default is used. Otherwise the
/// paper and margins from the settings are validated against the device.
pub fn resolve_page_format(
    settings: Option<&PrintSettings>,
    device: &dyn DeviceFormatValidator,
) -> Result<PageFormat, PrintError> {
    let Some(settings) = settings else {
        return Ok(PageFormat::default());
    };

    let (width, height) = (settings.paper_width, settings.paper_height);
    let margins = &settings.margins;
    if [margins.left, margins.top, margins.right, margins.bottom]
        .iter()
        .any(|m| !m.is_finite() || *m < 0.0)
    {
        return Err(PrintError::InvalidGeometry(format!(
            "negative margins {:?}",
            margins
        )));
    }

    let imageable = Rect::new(
        margins.left,
        margins.top,
        width - margins.left - margins.right,
        height - margins.top - margins.bottom,
    );
    let format = PageFormat::new(Paper::new(width, height, imageable), settings.orientation);
    format.check()?;

    device.validate(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Margins;

    fn a4_settings(orientation: Orientation) -> PrintSettings {
        PrintSettings {
            paper_width: 210.0,
            paper_height: 297.0,
            margins: Margins {
                left: 10.0,
                top: 20.0,
                right: 15.0,
                bottom: 25.0,
            },
            orientation,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_format_without_settings() {
        let format = resolve_page_format(None, &PdfDevice).unwrap();
        assert_eq!(format, PageFormat::default());
        assert!((format.width() - 215.9).abs() < 0.01);
    }

    #[test]
    fn test_imageable_from_margins() {
        let settings = a4_settings(Orientation::Portrait);
        let format = resolve_page_format(Some(&settings), &PdfDevice).unwrap();
        assert_eq!(format.imageable(), Rect::new(10.0, 20.0, 185.0, 252.0));
    }

    #[test]
    fn test_landscape_swaps_logical_size() {
        let settings = a4_settings(Orientation::Landscape);
        let format = resolve_page_format(Some(&settings), &PdfDevice).unwrap();
        assert_eq!(format.width(), 297.0);
        assert_eq!(format.height(), 210.0);
        // Paper imageable y=20 h=252 -> logical x = 297 - 272 = 25
        assert_eq!(format.imageable(), Rect::new(25.0, 10.0, 252.0, 185.0));
    }

    #[test]
    fn test_reverse_landscape_imageable() {
        let settings = a4_settings(Orientation::ReverseLandscape);
        let format = resolve_page_format(Some(&settings), &PdfDevice).unwrap();
        assert_eq!(format.imageable(), Rect::new(20.0, 15.0, 252.0, 185.0));
    }

    #[test]
    fn test_invalid_geometry() {
        let mut settings = a4_settings(Orientation::Portrait);
        settings.margins.left = 150.0;
        settings.margins.right = 100.0;
        let err = resolve_page_format(Some(&settings), &PdfDevice).unwrap_err();
        assert!(matches!(err, PrintError::InvalidGeometry(_)));

        let mut settings = a4_settings(Orientation::Portrait);
        settings.paper_width = 0.0;
        assert!(matches!(
            resolve_page_format(Some(&settings), &PdfDevice),
            Err(PrintError::InvalidGeometry(_))
        ));

        let mut settings = a4_settings(Orientation::Portrait);
        settings.margins.top = -1.0;
        assert!(matches!(
            resolve_page_format(Some(&settings), &PdfDevice),
            Err(PrintError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_logical_band_round_trip() {
        for orientation in [
            Orientation::Portrait,
            Orientation::Landscape,
            Orientation::ReverseLandscape,
        ] {
            let format = resolve_page_format(Some(&a4_settings(orientation)), &PdfDevice).unwrap();
            let original = format.imageable();
            let narrowed = format.with_logical_band(original.y + 8.0, original.height - 14.0);
            let result = narrowed.imageable();
            assert!((result.y - (original.y + 8.0)).abs() < EPSILON);
            assert!((result.height - (original.height - 14.0)).abs() < EPSILON);
            assert!((result.x - original.x).abs() < EPSILON);
            assert!((result.width - original.width).abs() < EPSILON);
            assert!(narrowed.paper.imageable.is_within(&narrowed.paper.bounds()));
            // The caller's format is untouched
            assert_eq!(format.imageable(), original);
        }
    }

    #[test]
    fn test_landscape_band_lands_on_physical_left_edge() {
        let format =
            resolve_page_format(Some(&a4_settings(Orientation::Landscape)), &PdfDevice).unwrap();
        let area = format.imageable();
        let narrowed = format.with_logical_band(area.y + 5.0, area.height - 5.0);
        // Logical top maps to the physical left edge in landscape
        assert!((narrowed.paper.imageable.x - (format.paper.imageable.x + 5.0)).abs() < EPSILON);
        assert_eq!(narrowed.paper.imageable.y, format.paper.imageable.y);

        let format = resolve_page_format(
            Some(&a4_settings(Orientation::ReverseLandscape)),
            &PdfDevice,
        )
        .unwrap();
        let area = format.imageable();
        let narrowed = format.with_logical_band(area.y + 5.0, area.height - 5.0);
        // ... and to the physical right edge in reverse landscape
        assert!(
            (narrowed.paper.imageable.right() - (format.paper.imageable.right() - 5.0)).abs()
                < EPSILON
        );
    }

    #[test]
    fn test_pdf_device_rejects_empty_area() {
        let format = PageFormat::new(
            Paper::new(100.0, 100.0, Rect::new(120.0, 0.0, 10.0, 10.0)),
            Orientation::Portrait,
        );
        assert!(matches!(
            PdfDevice.validate(format),
            Err(PrintError::Device(_))
        ));
    }
}
