//! Drawing surfaces
//!
//! Content providers and the print composer draw through the `Surface`
//! trait in logical page millimetres (top-left origin, y downwards). Text is
//! set in the PDF builtin fonts, so every surface measures text with the same
//! AFM metrics and layout is identical whichever surface is used.

use printpdf::{BuiltinFont, Rgb};

use crate::print::Rect;
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::text_metrics::{get_builtin_measurer, BuiltinFontMeasurer};

/// Font, size and colour of a text run
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font: BuiltinFont,
    /// Size in points
    pub size: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub fn new(font: BuiltinFont, size: f32) -> Self {
        Self {
            font,
            size,
            color: BLACK,
        }
    }

    fn measurer(&self) -> &'static BuiltinFontMeasurer {
        get_builtin_measurer(self.font)
    }

    /// Text width in mm
    pub fn width(&self, text: &str) -> f32 {
        self.measurer().measure_width_mm(text, self.size)
    }

    /// Ascender height in mm
    pub fn ascent(&self) -> f32 {
        self.measurer().ascender_mm(self.size)
    }

    /// Descender depth in mm (positive)
    pub fn descent(&self) -> f32 {
        self.measurer().descender_mm(self.size)
    }

    /// Height of a text line in mm
    pub fn line_height(&self) -> f32 {
        self.measurer().line_height_mm(self.size)
    }
}

/// Something pages can be drawn onto
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: &Rgb);

    fn stroke_rect(&mut self, rect: Rect, color: &Rgb, thickness: f32);

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: &Rgb, thickness: f32);

    /// Closed polygon, filled and/or outlined
    fn polygon(&mut self, points: &[(f32, f32)], fill: Option<&Rgb>, outline: Option<&Rgb>);

    /// Draw `text` with its baseline starting at `(x, baseline)`
    fn text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle);

    /// Restrict drawing to `rect` until the matching `pop_clip`
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}

/// Throwaway surface used to count pages; draws nothing
#[derive(Debug, Default)]
pub struct DryRunSurface {
    clip_depth: usize,
}

impl DryRunSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for DryRunSurface {
    fn fill_rect(&mut self, _rect: Rect, _color: &Rgb) {}

    fn stroke_rect(&mut self, _rect: Rect, _color: &Rgb, _thickness: f32) {}

    fn line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: &Rgb, _thickness: f32) {}

    fn polygon(&mut self, _points: &[(f32, f32)], _fill: Option<&Rgb>, _outline: Option<&Rgb>) {}

    fn text(&mut self, _text: &str, _x: f32, _baseline: f32, _style: &TextStyle) {}

    fn push_clip(&mut self, _rect: Rect) {
        self.clip_depth += 1;
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
    }
}

/// Drawing commands captured by a `RecordingSurface`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect(Rect),
    StrokeRect(Rect),
    Line { from: (f32, f32), to: (f32, f32) },
    Polygon { points: Vec<(f32, f32)> },
    Text { text: String, x: f32, baseline: f32 },
    PushClip(Rect),
    PopClip,
}

/// Surface keeping a display list of what was drawn, for previews
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text runs in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Clip rectangles pushed, in order
    pub fn clips(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::PushClip(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, _color: &Rgb) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect, _color: &Rgb, _thickness: f32) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), _color: &Rgb, _thickness: f32) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn polygon(&mut self, points: &[(f32, f32)], _fill: Option<&Rgb>, _outline: Option<&Rgb>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
        });
    }

    fn text(&mut self, text: &str, x: f32, baseline: f32, _style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            baseline,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
