use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::print::{FixedBand, Orientation};

use super::defaults::*;

/// Page margins in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub fn uniform(margin: f32) -> Self {
        Self {
            left: margin,
            top: margin,
            right: margin,
            bottom: margin,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_PAGE_MARGIN)
    }
}

/// Print attributes stored with a home
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    pub paper_width: f32,
    pub paper_height: f32,
    pub margins: Margins,
    pub orientation: Orientation,
    /// Fixed plan scale (paper length / real length), fit to page when absent
    pub plan_scale: Option<f32>,
    pub header_format: Option<String>,
    pub footer_format: Option<String>,
    pub furniture_printed: bool,
    pub plan_printed: bool,
    pub view3d_printed: bool,
    pub fixed_header: FixedBand,
    pub fixed_footer: FixedBand,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            paper_width: DEFAULT_PAPER_WIDTH,
            paper_height: DEFAULT_PAPER_HEIGHT,
            margins: Margins::default(),
            orientation: Orientation::Portrait,
            plan_scale: None,
            header_format: None,
            footer_format: None,
            furniture_printed: true,
            plan_printed: true,
            view3d_printed: true,
            fixed_header: FixedBand::default(),
            fixed_footer: FixedBand::default(),
        }
    }
}

/// Print attributes given on the command line, applied over the stored ones
#[derive(Debug, Clone, Default)]
pub struct PrintOverrides {
    pub paper: Option<(f32, f32)>,
    pub orientation: Option<Orientation>,
    pub margins: Option<Margins>,
    pub plan_scale: Option<f32>,
    pub header_format: Option<String>,
    pub footer_format: Option<String>,
    pub no_furniture: bool,
    pub no_plan: bool,
    pub no_view3d: bool,
    pub fixed_header: Option<FixedBand>,
    pub fixed_footer: Option<FixedBand>,
}

impl PrintOverrides {
    fn is_empty(&self) -> bool {
        self.paper.is_none()
            && self.orientation.is_none()
            && self.margins.is_none()
            && self.plan_scale.is_none()
            && self.header_format.is_none()
            && self.footer_format.is_none()
            && !self.no_furniture
            && !self.no_plan
            && !self.no_view3d
            && self.fixed_header.is_none()
            && self.fixed_footer.is_none()
    }

    /// Apply these overrides to stored settings
    ///
    /// Returns `None` only when nothing is stored and nothing is overridden,
    /// which keeps the device default page format and prints everything.
    pub fn apply(&self, stored: Option<PrintSettings>) -> Option<PrintSettings> {
        if stored.is_none() && self.is_empty() {
            return None;
        }

        let mut print = stored.unwrap_or_default();
        if let Some((width, height)) = self.paper {
            print.paper_width = width;
            print.paper_height = height;
        }
        if let Some(orientation) = self.orientation {
            print.orientation = orientation;
        }
        if let Some(margins) = self.margins {
            print.margins = margins;
        }
        if self.plan_scale.is_some() {
            print.plan_scale = self.plan_scale;
        }
        if self.header_format.is_some() {
            print.header_format = self.header_format.clone();
        }
        if self.footer_format.is_some() {
            print.footer_format = self.footer_format.clone();
        }
        if self.no_furniture {
            print.furniture_printed = false;
        }
        if self.no_plan {
            print.plan_printed = false;
        }
        if self.no_view3d {
            print.view3d_printed = false;
        }
        if let Some(ref band) = self.fixed_header {
            print.fixed_header = band.clone();
        }
        if let Some(ref band) = self.fixed_footer {
            print.fixed_footer = band.clone();
        }
        Some(print)
    }
}

/// Runtime settings for printing
#[derive(Debug, Clone)]
pub struct Settings {
    // Typography (in points)
    pub header_font_size: f32,
    pub table_font_size: f32,

    /// Space between an overlay band and the content, in mm
    pub band_margin: f32,

    // Variable formats
    pub date_format: String,
    pub time_format: String,

    /// Application name written as PDF creator
    pub app_name: String,

    /// Compress PDF streams after generation
    pub compress: bool,

    /// Effective print attributes (None = device defaults, print everything)
    pub print: Option<PrintSettings>,

    // CLI print overrides, applied in `with_home_print`
    pub(crate) overrides: PrintOverrides,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            header_font_size: DEFAULT_HEADER_FONT_SIZE,
            table_font_size: DEFAULT_TABLE_FONT_SIZE,
            band_margin: DEFAULT_BAND_MARGIN,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            compress: true,
            print: None,
            overrides: PrintOverrides::default(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let overrides = PrintOverrides {
            paper: args.page_size.map(|size| size.dimensions_mm()),
            orientation: args.orientation.map(Into::into),
            margins: args.margins,
            plan_scale: args.plan_scale,
            header_format: args.header.clone(),
            footer_format: args.footer.clone(),
            no_furniture: args.no_furniture,
            no_plan: args.no_plan,
            no_view3d: args.no_view3d,
            fixed_header: args.fixed_header_band(),
            fixed_footer: args.fixed_footer_band(),
        };

        Self {
            compress: !args.no_compress,
            overrides,
            ..Default::default()
        }
    }

    /// Merge with the print attributes stored in the home (CLI wins)
    pub fn with_home_print(mut self, stored: Option<&PrintSettings>) -> Self {
        self.print = self.overrides.apply(stored.cloned());
        self
    }
}
