//! Home print composer
//!
//! Merges the furniture list, the plan and the 3D view into one page
//! sequence. Global page `n` belongs to the first enabled provider, in that
//! order, that still has a page at `n - offset`, where `offset` is the number
//! of pages the providers before it have printed. Every printed page gets
//! the fixed banners and the dynamic header/footer lines around its content.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use printpdf::BuiltinFont;

use crate::config::{PrintSettings, Settings};
use crate::content::{ContentProviders, PageResult, PaginatedContent};
use crate::error::PrintError;
use crate::model::HomeModelSnapshot;
use crate::print::banner::Banner;
use crate::print::cancel::CancellationToken;
use crate::print::format::{PageFormat, Rect};
use crate::print::template::{Template, VariableValues};
use crate::render::helpers::colors::WHITE;
use crate::render::surface::{DryRunSurface, Surface, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Furniture,
    Plan,
    View3D,
}

struct Slot {
    kind: ContentKind,
    provider: Box<dyn PaginatedContent>,
    enabled: bool,
    /// Pages this provider has printed, each global page counted once
    pages: usize,
}

/// Home labels substituted into headers and footers
#[derive(Debug, Clone, Default)]
struct HomeLabels {
    presentation_name: Option<String>,
    raw_name: Option<String>,
    level_name: Option<String>,
}

/// Vertical layout of one page
struct PageLayout {
    fixed_header: Option<(Banner, Rect)>,
    header: Option<(String, f32)>,
    footer: Option<(String, f32)>,
    fixed_footer: Option<(Banner, Rect)>,
    content: PageFormat,
}

/// Composes home printouts page by page
///
/// Not meant for concurrent use: page bookkeeping assumes pages are asked
/// for by one caller, which `&mut self` enforces.
pub struct PrintComposer {
    format: PageFormat,
    print: Option<PrintSettings>,
    labels: HomeLabels,
    slots: Vec<Slot>,
    header: Option<Template>,
    footer: Option<Template>,
    header_style: TextStyle,
    band_margin: f32,
    date_format: String,
    time_format: String,
    cancel: CancellationToken,

    page_count: Option<usize>,
    counting: bool,
    printed_pages: HashSet<usize>,
    print_date: Option<DateTime<Local>>,
}

impl PrintComposer {
    /// Create a composer printing `home` on `format`
    ///
    /// Print attributes come from `settings.print`; without them every
    /// available provider is printed and no header or footer is drawn.
    pub fn new(
        home: &dyn HomeModelSnapshot,
        settings: &Settings,
        format: PageFormat,
        providers: ContentProviders,
    ) -> Self {
        let print = settings.print.clone();
        let enabled = |flag: fn(&PrintSettings) -> bool| print.as_ref().map_or(true, flag);

        let slots = [
            (ContentKind::Furniture, providers.furniture, enabled(|p| p.furniture_printed)),
            (ContentKind::Plan, providers.plan, enabled(|p| p.plan_printed)),
            (ContentKind::View3D, providers.view3d, enabled(|p| p.view3d_printed)),
        ]
        .into_iter()
        .filter_map(|(kind, provider, enabled)| {
            provider.map(|provider| Slot {
                kind,
                provider,
                enabled,
                pages: 0,
            })
        })
        .collect();

        let template = |format: Option<&String>| format.map(|f| Template::parse(f));
        let header = template(print.as_ref().and_then(|p| p.header_format.as_ref()));
        let footer = template(print.as_ref().and_then(|p| p.footer_format.as_ref()));

        let labels = HomeLabels {
            presentation_name: home.presentation_name(),
            raw_name: home.raw_name().map(String::from),
            // A hidden level is not printed, so it is not named either
            level_name: home
                .selected_level_name()
                .filter(|_| home.selected_level_viewable())
                .map(String::from),
        };

        Self {
            format,
            print,
            labels,
            slots,
            header,
            footer,
            header_style: TextStyle::new(BuiltinFont::Helvetica, settings.header_font_size),
            band_margin: settings.band_margin,
            date_format: settings.date_format.clone(),
            time_format: settings.time_format.clone(),
            cancel: CancellationToken::new(),
            page_count: None,
            counting: false,
            printed_pages: HashSet::new(),
            print_date: None,
        }
    }

    /// Use `token` to stop printing between pages
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Name of the home shown to the user
    pub fn presentation_name(&self) -> Option<&str> {
        self.labels.presentation_name.as_deref()
    }

    /// Page format used for counting pages
    pub fn page_format(&self) -> &PageFormat {
        &self.format
    }

    /// Print date of the current pass, captured when page 0 is drawn
    pub fn print_date(&self) -> Option<DateTime<Local>> {
        self.print_date
    }

    /// Pages printed so far by the provider of `kind`
    pub fn pages_of(&self, kind: ContentKind) -> usize {
        self.slots
            .iter()
            .find(|slot| slot.kind == kind)
            .map_or(0, |slot| slot.pages)
    }

    /// Total number of pages
    ///
    /// Counted once by drawing every page onto a throwaway surface. The count
    /// is kept for the life of the composer; build a new composer after the
    /// home changes.
    pub fn page_count(&mut self) -> Result<usize, PrintError> {
        if let Some(count) = self.page_count {
            return Ok(count);
        }

        self.counting = true;
        let result = self.count_pages();
        self.counting = false;

        let count = result?;
        log::info!("Home printout has {} page(s)", count);
        self.page_count = Some(count);
        Ok(count)
    }

    fn count_pages(&mut self) -> Result<usize, PrintError> {
        let mut surface = DryRunSurface::new();
        let format = self.format;
        let mut index = 0;
        while self.paint_page(&mut surface, &format, index)? == PageResult::Exists {
            index += 1;
        }
        Ok(index)
    }

    /// Draw page `page_index` onto `surface`
    pub fn render_page(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        // Provider offsets are established in page order by the count
        if self.page_count.is_none() && !self.counting {
            self.page_count()?;
        }
        self.paint_page(surface, format, page_index)
    }

    fn paint_page(
        &mut self,
        surface: &mut dyn Surface,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        self.cancel.check()?;

        if page_index == 0 || self.print_date.is_none() {
            self.print_date = Some(Local::now());
        }

        surface.fill_rect(format.bounds(), &WHITE);

        let layout = self.layout_page(format, page_index)?;

        surface.push_clip(layout.content.imageable());
        let result = self.delegate(surface, &layout.content, page_index);
        surface.pop_clip();

        if result? == PageResult::NoSuchPage {
            return Ok(PageResult::NoSuchPage);
        }

        self.paint_overlays(surface, format, &layout);
        Ok(PageResult::Exists)
    }

    /// Reserve the header and footer bands and compute their text
    fn layout_page(
        &self,
        format: &PageFormat,
        page_index: usize,
    ) -> Result<PageLayout, PrintError> {
        let area = format.imageable();
        let line_height = self.header_style.line_height();
        let (fixed_header, fixed_footer) = match self.print {
            Some(ref print) => (
                print.fixed_header.for_page(page_index).cloned(),
                print.fixed_footer.for_page(page_index).cloned(),
            ),
            None => (None, None),
        };

        // Presence of a line does not depend on the plan scale value, so the
        // bands can be sized with the scale of the full imageable area.
        let sizing_scale = self.plan_scale(format);
        let header_present = self
            .line(self.header.as_ref(), page_index, sizing_scale)
            .is_some();
        let footer_present = self
            .line(self.footer.as_ref(), page_index, sizing_scale)
            .is_some();

        let mut top = area.y;
        let mut bottom = area.bottom();

        let fixed_header = fixed_header.map(|banner| {
            let rect = Rect::new(area.x, top, area.width, banner.height);
            top += banner.height + self.band_margin;
            (banner, rect)
        });
        let header_baseline = header_present.then(|| {
            let baseline = top + self.header_style.ascent();
            top += line_height + self.band_margin;
            baseline
        });

        let fixed_footer = fixed_footer.map(|banner| {
            let rect = Rect::new(area.x, bottom - banner.height, area.width, banner.height);
            bottom -= banner.height + self.band_margin;
            (banner, rect)
        });
        let footer_baseline = footer_present.then(|| {
            let baseline = bottom - self.header_style.descent();
            bottom -= line_height + self.band_margin;
            baseline
        });

        if bottom - top <= 0.0 {
            return Err(PrintError::InvalidGeometry(format!(
                "headers and footers leave no room for content on page {}",
                page_index + 1
            )));
        }

        let content = format.with_logical_band(top, bottom - top);
        let scale = self.plan_scale(&content);
        let header = header_baseline.and_then(|baseline| {
            let text = self.line(self.header.as_ref(), page_index, scale)?;
            Some((text, baseline))
        });
        let footer = footer_baseline.and_then(|baseline| {
            let text = self.line(self.footer.as_ref(), page_index, scale)?;
            Some((text, baseline))
        });

        Ok(PageLayout {
            fixed_header,
            header,
            footer,
            fixed_footer,
            content,
        })
    }

    /// Render a header/footer line, `None` when it is blank
    fn line(
        &self,
        template: Option<&Template>,
        page_index: usize,
        plan_scale: Option<f32>,
    ) -> Option<String> {
        let template = template?;
        let page_count = match self.page_count {
            Some(count) => count,
            // While counting, the pages counted so far
            None => page_index + 1,
        };
        let values = VariableValues {
            page_number: page_index + 1,
            page_count,
            plan_scale,
            date: self.print_date.unwrap_or_else(Local::now),
            date_format: &self.date_format,
            time_format: &self.time_format,
            presentation_name: self.labels.presentation_name.as_deref(),
            home_name: self.labels.raw_name.as_deref(),
            level_name: self.labels.level_name.as_deref(),
        };
        let text = template.render(&values);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Scale shown by `$planScale`: the fixed scale, or the one the plan would use
    fn plan_scale(&self, format: &PageFormat) -> Option<f32> {
        let plan = self
            .slots
            .iter()
            .find(|slot| slot.kind == ContentKind::Plan && slot.enabled)?;
        self.print
            .as_ref()
            .and_then(|print| print.plan_scale)
            .or_else(|| plan.provider.preferred_scale(format))
    }

    /// Hand the page to the first provider that has it
    fn delegate(
        &mut self,
        surface: &mut dyn Surface,
        content: &PageFormat,
        page_index: usize,
    ) -> Result<PageResult, PrintError> {
        let mut offset = 0;
        for slot in self.slots.iter_mut().filter(|slot| slot.enabled) {
            let Some(local_index) = page_index.checked_sub(offset) else {
                break;
            };
            match slot.provider.render(surface, content, local_index)? {
                PageResult::Exists => {
                    if self.printed_pages.insert(page_index) {
                        slot.pages += 1;
                    }
                    log::debug!(
                        "Page {} -> {:?} page {}",
                        page_index + 1,
                        slot.kind,
                        local_index + 1
                    );
                    return Ok(PageResult::Exists);
                }
                PageResult::NoSuchPage => offset += slot.pages,
            }
        }
        Ok(PageResult::NoSuchPage)
    }

    /// Paint banners and header/footer lines outside the content clip
    fn paint_overlays(&self, surface: &mut dyn Surface, format: &PageFormat, layout: &PageLayout) {
        let area = format.imageable();

        if let Some((ref banner, rect)) = layout.fixed_header {
            banner.paint(surface, rect, true);
        }
        if let Some((ref text, baseline)) = layout.header {
            let x = area.x + (area.width - self.header_style.width(text)) / 2.0;
            surface.text(text, x, baseline, &self.header_style);
        }
        if let Some((ref text, baseline)) = layout.footer {
            let x = area.x + (area.width - self.header_style.width(text)) / 2.0;
            surface.text(text, x, baseline, &self.header_style);
        }
        if let Some((ref banner, rect)) = layout.fixed_footer {
            banner.paint(surface, rect, false);
        }
    }
}
