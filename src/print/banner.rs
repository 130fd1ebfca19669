//! Fixed headers and footers
//!
//! A banner is a static decoration printed above or below the content on
//! every page, such as a letterhead line. The first page may carry its own
//! banner.

use std::fs;
use std::path::Path;

use printpdf::BuiltinFont;
use serde::{Deserialize, Serialize};

use crate::print::Rect;
use crate::render::helpers::colors::GRAY;
use crate::render::surface::{Surface, TextStyle};

/// Banner text size in points
const BANNER_FONT_SIZE: f32 = 9.0;

/// Rule thickness in points
const RULE_THICKNESS: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Height of the banner in mm
    pub height: f32,
    /// Text lines, drawn left aligned
    #[serde(default)]
    pub text: String,
    /// Draw a rule along the edge facing the content
    #[serde(default)]
    pub ruled: bool,
}

impl Banner {
    pub fn new(height: f32, text: impl Into<String>) -> Self {
        Self {
            height,
            text: text.into(),
            ruled: false,
        }
    }

    /// Load banner text from a file
    ///
    /// A file that cannot be read means no banner; printing goes on without it.
    pub fn from_file(path: &Path, height: Option<f32>) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let text = text.trim_end().to_string();
                let lines = text.lines().count().max(1) as f32;
                let style = TextStyle::new(BuiltinFont::Helvetica, BANNER_FONT_SIZE);
                let height = height.unwrap_or(lines * style.line_height() * 1.2);
                Some(Self {
                    height,
                    text,
                    ruled: true,
                })
            }
            Err(e) => {
                log::warn!("Ignoring banner {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Paint the banner into `area`; `rule_at_bottom` tells which edge faces the content
    pub fn paint(&self, surface: &mut dyn Surface, area: Rect, rule_at_bottom: bool) {
        let style = TextStyle::new(BuiltinFont::Helvetica, BANNER_FONT_SIZE);
        let line_height = style.line_height() * 1.2;
        let mut baseline = area.y + style.ascent();
        for line in self.text.lines() {
            if baseline > area.bottom() {
                break;
            }
            surface.text(line, area.x, baseline, &style);
            baseline += line_height;
        }

        if self.ruled {
            let y = if rule_at_bottom {
                area.bottom()
            } else {
                area.y
            };
            surface.line((area.x, y), (area.right(), y), &GRAY, RULE_THICKNESS);
        }
    }
}

/// Fixed header or footer: one banner for the first page, one for the others
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedBand {
    pub first_page: Option<Banner>,
    pub other_pages: Option<Banner>,
}

impl FixedBand {
    /// Same banner on every page
    pub fn uniform(banner: Banner) -> Self {
        Self {
            first_page: None,
            other_pages: Some(banner),
        }
    }

    /// Banner printed on `page_index`; the first page falls back to the common banner
    pub fn for_page(&self, page_index: usize) -> Option<&Banner> {
        if page_index == 0 {
            self.first_page.as_ref().or(self.other_pages.as_ref())
        } else {
            self.other_pages.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::RecordingSurface;

    #[test]
    fn test_first_page_banner() {
        let band = FixedBand {
            first_page: Some(Banner::new(20.0, "Letterhead")),
            other_pages: Some(Banner::new(8.0, "Continued")),
        };
        assert_eq!(band.for_page(0).unwrap().text, "Letterhead");
        assert_eq!(band.for_page(3).unwrap().text, "Continued");

        let uniform = FixedBand::uniform(Banner::new(8.0, "Same"));
        assert_eq!(uniform.for_page(0), uniform.for_page(1));
        assert!(FixedBand::default().for_page(0).is_none());
    }

    #[test]
    fn test_missing_banner_file_is_ignored() {
        let banner = Banner::from_file(Path::new("/nonexistent/banner.txt"), Some(10.0));
        assert!(banner.is_none());
    }

    #[test]
    fn test_paint_lines_and_rule() {
        let mut banner = Banner::new(15.0, "Studio North\n12 Harbour Road");
        banner.ruled = true;
        let mut surface = RecordingSurface::new();
        banner.paint(&mut surface, Rect::new(10.0, 10.0, 100.0, 15.0), true);
        assert_eq!(surface.texts(), vec!["Studio North", "12 Harbour Road"]);
        assert!(surface.commands.iter().any(|c| matches!(
            c,
            crate::render::surface::DrawCommand::Line { from, .. } if from.1 == 25.0
        )));
    }
}
