//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod layer;
pub mod text_metrics;

pub use colors::{BLACK, WHITE};
pub use compress::{finish_pdf, DocumentInfo};
pub use layer::PdfSurface;
pub use text_metrics::{get_builtin_measurer, BuiltinFontMeasurer};
