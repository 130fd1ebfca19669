use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("Printing cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Print device error: {0}")]
    Device(String),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

impl PrintError {
    /// True when the failure comes from a cancellation request rather than a fault
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PrintError::Cancelled)
    }
}

#[derive(Error, Debug)]
pub enum HomeError {
    #[error("Failed to read home file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid home description: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid plan scale: {0}")]
    InvalidScale(String),

    #[error("Invalid margins specification: {0}")]
    InvalidMargins(String),
}
