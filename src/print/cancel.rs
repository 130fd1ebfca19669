use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::PrintError;

/// Cooperative cancellation flag shared between a print job and its owner
///
/// Clones share the same flag. The composer checks it before each page and
/// the PDF exporter between pages; a page already being drawn is finished.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once cancellation was requested
    pub fn check(&self) -> Result<(), PrintError> {
        if self.is_cancelled() {
            Err(PrintError::Cancelled)
        } else {
            Ok(())
        }
    }
}
