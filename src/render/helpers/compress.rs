//! PDF post-processing
//!
//! printpdf writes uncompressed streams and a minimal document info
//! dictionary. The saved bytes are reparsed with lopdf to fill in the
//! metadata and compress every stream.

use std::io::Cursor;

use chrono::{DateTime, Local};
use lopdf::{Dictionary, Object};

use crate::error::PrintError;

/// Document information written into the PDF trailer
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub creation_date: Option<DateTime<Local>>,
}

impl DocumentInfo {
    fn to_dictionary(&self) -> Dictionary {
        let mut info = Dictionary::new();
        if let Some(ref title) = self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        if let Some(ref author) = self.author {
            info.set("Author", Object::string_literal(author.as_str()));
        }
        if let Some(ref creator) = self.creator {
            info.set("Creator", Object::string_literal(creator.as_str()));
        }
        if let Some(date) = self.creation_date {
            info.set("CreationDate", Object::string_literal(pdf_date(&date)));
        }
        info
    }
}

/// Format a date the way PDF info dictionaries expect: `D:YYYYMMDDHHmmSS+HH'mm'`
pub fn pdf_date(date: &DateTime<Local>) -> String {
    let offset = date.format("%z").to_string();
    let (hours, minutes) = offset.split_at(offset.len().saturating_sub(2));
    format!("D:{}{}'{}'", date.format("%Y%m%d%H%M%S"), hours, minutes)
}

/// Rewrite the document info and optionally compress streams.
pub fn finish_pdf(
    bytes: Vec<u8>,
    info: &DocumentInfo,
    compress: bool,
) -> Result<Vec<u8>, PrintError> {
    let mut doc = lopdf::Document::load_mem(&bytes)
        .map_err(|e| PrintError::PdfGeneration(format!("Failed to parse generated PDF: {}", e)))?;

    let info_id = doc.add_object(info.to_dictionary());
    doc.trailer.set("Info", info_id);

    if compress {
        doc.compress();
    }

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| PrintError::PdfGeneration(format!("Failed to save PDF: {}", e)))?;

    Ok(output.into_inner())
}
