pub mod defaults;
pub mod settings;

pub use settings::{Margins, PrintOverrides, PrintSettings, Settings};
