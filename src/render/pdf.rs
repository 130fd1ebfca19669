//! PDF export of a composed home printout

use std::env;
use std::io::Write;

use chrono::Local;
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::content::PageResult;
use crate::error::PrintError;
use crate::print::{PageFormat, PrintComposer};

use super::helpers::{finish_pdf, DocumentInfo, PdfSurface};

/// Title used when the home has never been saved
const UNTITLED: &str = "Home";

/// Name of the user running the export
fn current_user() -> Option<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .ok()
        .filter(|user| !user.is_empty())
}

/// Print every page of `composer` on `format` and write the PDF to `writer`
///
/// Returns the number of pages written. Nothing is written when there is
/// nothing to print. The writer is flushed but stays open.
pub fn export_to_pdf<W: Write>(
    writer: &mut W,
    composer: &mut PrintComposer,
    format: &PageFormat,
    settings: &Settings,
) -> Result<usize, PrintError> {
    let page_count = composer.page_count()?;
    if page_count == 0 {
        log::warn!("Nothing to print");
        return Ok(0);
    }

    let title = composer.presentation_name().unwrap_or(UNTITLED).to_string();
    let mut doc = PdfDocument::new(&title);
    let mut pages = Vec::with_capacity(page_count);

    for index in 0..page_count {
        composer.cancellation().check()?;

        let mut surface = PdfSurface::new(format.height());
        match composer.render_page(&mut surface, format, index)? {
            PageResult::Exists => {}
            PageResult::NoSuchPage => {
                return Err(PrintError::PdfGeneration(format!(
                    "page {} of {} vanished while printing",
                    index + 1,
                    page_count
                )));
            }
        }
        pages.push(PdfPage::new(
            Mm(format.width()),
            Mm(format.height()),
            surface.into_ops(),
        ));
    }

    doc.with_pages(pages);

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        log::debug!("printpdf: {:?}", warning);
    }

    let info = DocumentInfo {
        title: composer.presentation_name().map(String::from),
        author: current_user(),
        creator: Some(settings.app_name.clone()),
        creation_date: Some(composer.print_date().unwrap_or_else(Local::now)),
    };
    let bytes = finish_pdf(bytes, &info, settings.compress)?;

    writer.write_all(&bytes)?;
    writer.flush()?;

    log::info!("Wrote {} page(s), {} bytes", page_count, bytes.len());
    Ok(page_count)
}
