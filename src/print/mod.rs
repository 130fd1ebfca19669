//! Page formats and the print composer

pub mod banner;
pub mod cancel;
pub mod composer;
pub mod format;
pub mod template;

pub use banner::{Banner, FixedBand};
pub use cancel::CancellationToken;
pub use composer::{ContentKind, PrintComposer};
pub use format::{
    resolve_page_format, DeviceFormatValidator, Orientation, PageFormat, Paper, PdfDevice, Rect,
};
pub use template::{Template, Variable, VariableValues};
