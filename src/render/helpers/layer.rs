//! PDF drawing surface
//!
//! `PdfSurface` collects printpdf operations for one page. Callers draw in
//! top-left millimetre coordinates; the y axis is flipped here because PDF
//! user space starts at the bottom-left corner.

use printpdf::{
    Color, LinePoint, Mm, Op, PaintMode, Point, Polygon, PolygonRing, Pt, Rgb, TextItem,
    WindingOrder,
};

use crate::print::Rect;
use crate::render::surface::{Surface, TextStyle};

/// Collects the operations of a single PDF page
pub struct PdfSurface {
    page_height: f32,
    ops: Vec<Op>,
}

impl PdfSurface {
    /// Create a surface for a page `page_height` mm tall
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            ops: Vec::new(),
        }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Mm(x).into(),
            y: Mm(self.page_height - y).into(),
        }
    }

    fn ring(&self, points: &[(f32, f32)]) -> PolygonRing {
        PolygonRing {
            points: points
                .iter()
                .map(|&(x, y)| LinePoint {
                    p: self.point(x, y),
                    bezier: false,
                })
                .collect(),
        }
    }

    fn rect_ring(&self, rect: Rect) -> PolygonRing {
        self.ring(&[
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.bottom()),
            (rect.x, rect.bottom()),
        ])
    }

    fn draw(&mut self, ring: PolygonRing, mode: PaintMode) {
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![ring],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    fn set_fill_color(&mut self, color: &Rgb) {
        self.ops.push(Op::SetFillColor {
            col: Color::Rgb(color.clone()),
        });
    }

    fn set_outline(&mut self, color: &Rgb, thickness: f32) {
        self.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(color.clone()),
        });
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }
}

impl Surface for PdfSurface {
    fn fill_rect(&mut self, rect: Rect, color: &Rgb) {
        self.set_fill_color(color);
        let ring = self.rect_ring(rect);
        self.draw(ring, PaintMode::Fill);
    }

    fn stroke_rect(&mut self, rect: Rect, color: &Rgb, thickness: f32) {
        self.set_outline(color, thickness);
        let ring = self.rect_ring(rect);
        self.draw(ring, PaintMode::Stroke);
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: &Rgb, thickness: f32) {
        self.set_outline(color, thickness);
        let ring = self.ring(&[from, to]);
        self.draw(ring, PaintMode::Stroke);
    }

    fn polygon(&mut self, points: &[(f32, f32)], fill: Option<&Rgb>, outline: Option<&Rgb>) {
        if points.len() < 2 {
            return;
        }
        let mode = match (fill, outline) {
            (Some(fill), Some(outline)) => {
                self.set_fill_color(fill);
                self.set_outline(outline, 0.5);
                PaintMode::FillStroke
            }
            (Some(fill), None) => {
                self.set_fill_color(fill);
                PaintMode::Fill
            }
            (None, Some(outline)) => {
                self.set_outline(outline, 0.5);
                PaintMode::Stroke
            }
            (None, None) => return,
        };
        let ring = self.ring(points);
        self.draw(ring, mode);
    }

    fn text(&mut self, text: &str, x: f32, baseline: f32, style: &TextStyle) {
        if text.is_empty() {
            return;
        }

        self.set_fill_color(&style.color);
        let pos = self.point(x, baseline);
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor { pos });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(style.size),
            font: style.font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: style.font,
        });
        self.ops.push(Op::EndTextSection);
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(Op::SaveGraphicsState);
        let ring = self.rect_ring(rect);
        self.draw(ring, PaintMode::Clip);
    }

    fn pop_clip(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }
}
