/// Default paper width in mm (Letter)
pub const DEFAULT_PAPER_WIDTH: f32 = 215.9;

/// Default paper height in mm (Letter)
pub const DEFAULT_PAPER_HEIGHT: f32 = 279.4;

/// Default page margin in mm (1 inch)
pub const DEFAULT_PAGE_MARGIN: f32 = 25.4;

/// Space kept between a header/footer band and the content, in mm
pub const DEFAULT_BAND_MARGIN: f32 = 2.0;

/// Dynamic header/footer font size in points
pub const DEFAULT_HEADER_FONT_SIZE: f32 = 10.0;

/// Furniture table font size in points
pub const DEFAULT_TABLE_FONT_SIZE: f32 = 9.0;

/// Date format for the `$date` variable (chrono strftime)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format for the `$time` variable (chrono strftime)
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Creator written into exported PDF metadata
pub const DEFAULT_APP_NAME: &str = "Home to PDF";
