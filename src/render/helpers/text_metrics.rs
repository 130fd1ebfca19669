//! Text measurement for the PDF builtin fonts
//!
//! Header/footer bands and furniture table rows are sized from these
//! metrics, so page layout is known before anything is drawn.

use printpdf::BuiltinFont;

/// Points to millimetres
pub const PT_TO_MM: f32 = 0.3528;

/// Text measurer for the Helvetica builtin fonts
///
/// Uses Adobe AFM metrics (1000 units per em). Fonts outside the Helvetica
/// family are measured as Helvetica.
pub struct BuiltinFontMeasurer {
    bold: bool,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        let bold = matches!(
            font,
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique
        );
        Self { bold }
    }

    /// Character width in 1000 units per em
    fn char_width(&self, c: char) -> u16 {
        // Builtin fonts only cover Win-1252; measure the rest as an average glyph
        if !c.is_ascii() {
            return 556;
        }

        let table = if self.bold {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        match table[c as usize] {
            0 => 278,
            width => width,
        }
    }

    /// Measure text width in points
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }

    /// Measure text width in mm
    pub fn measure_width_mm(&self, text: &str, font_size: f32) -> f32 {
        self.measure_width_pt(text, font_size) * PT_TO_MM
    }

    /// Ascender height in mm
    pub fn ascender_mm(&self, font_size: f32) -> f32 {
        (718.0 / 1000.0) * font_size * PT_TO_MM
    }

    /// Descender depth in mm (positive value)
    pub fn descender_mm(&self, font_size: f32) -> f32 {
        (207.0 / 1000.0) * font_size * PT_TO_MM
    }

    /// Line height in mm
    pub fn line_height_mm(&self, font_size: f32) -> f32 {
        self.ascender_mm(font_size) + self.descender_mm(font_size)
    }
}

/// Get a builtin font measurer for Helvetica
fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

/// Get a builtin font measurer for Helvetica-Bold
fn get_helvetica_bold_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::HelveticaBold))
}

/// Get the measurer matching a builtin font
pub fn get_builtin_measurer(font: BuiltinFont) -> &'static BuiltinFontMeasurer {
    match font {
        BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
            get_helvetica_bold_measurer()
        }
        _ => get_helvetica_measurer(),
    }
}

// =============================================================================
// Adobe AFM character width tables (ASCII subset, 1000 units per em)
// =============================================================================

/// Helvetica character widths
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

/// Helvetica-Bold character widths
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
];
