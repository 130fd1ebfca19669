pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
pub mod print;
pub mod render;

pub use config::{PrintSettings, Settings};
pub use content::{ContentProviders, PageResult, PaginatedContent};
pub use error::{ConfigError, HomeError, PrintError};
pub use model::{Home, HomeModelSnapshot};
pub use print::{resolve_page_format, CancellationToken, PageFormat, PdfDevice, PrintComposer};
pub use render::export_to_pdf;

/// High-level API for printing a home to PDF.
///
/// This is the recommended entry point for library consumers. It resolves
/// the page format, builds the furniture, plan and 3D view printouts and
/// composes them into one document.
///
/// # Arguments
///
/// * `home` - The home to print
/// * `settings` - Runtime settings; `settings.print` holds the print
///   attributes (use `Settings::with_home_print` to take them from the home)
///
/// # Returns
///
/// PDF file contents as bytes (empty when nothing is selected for
/// printing), or a PrintError on failure.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use home_to_pdf::{render_home_pdf, Home, Settings};
///
/// let home = Home::load(Path::new("cottage.json")).unwrap();
/// let settings = Settings::default().with_home_print(home.print.as_ref());
///
/// let pdf_bytes = render_home_pdf(&home, &settings).unwrap();
/// std::fs::write("cottage.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_home_pdf(home: &Home, settings: &Settings) -> Result<Vec<u8>, PrintError> {
    render_home_pdf_with_cancellation(home, settings, CancellationToken::new())
}

/// Same as [`render_home_pdf`], stopping between pages once `token` is cancelled
pub fn render_home_pdf_with_cancellation(
    home: &Home,
    settings: &Settings,
    token: CancellationToken,
) -> Result<Vec<u8>, PrintError> {
    let format = resolve_page_format(settings.print.as_ref(), &PdfDevice)?;
    let providers = ContentProviders::for_home(home, settings);
    let mut composer =
        PrintComposer::new(home, settings, format, providers).with_cancellation(token);

    let mut output = Vec::new();
    export_to_pdf(&mut output, &mut composer, &format, settings)?;
    Ok(output)
}
