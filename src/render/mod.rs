//! Drawing surfaces and PDF output

pub mod helpers;
pub mod pdf;
pub mod surface;

// Re-export commonly used items for convenience
pub use helpers::{BuiltinFontMeasurer, PdfSurface};
pub use pdf::export_to_pdf;
pub use surface::{DryRunSurface, RecordingSurface, Surface, TextStyle};
