//! Best-effort field extraction from saved company profile pages.
//!
//! The source HTML is semi-stable, so every extractor runs an ordered chain
//! of structural heuristics from most-specific to most-generic and returns
//! the first non-empty match. When the whole chain misses, the extractor
//! logs a warning and returns its documented fallback — extraction never
//! fails a document.

mod fields;
mod founders;

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use fields::{extract_company_name, extract_description, extract_website};
pub use founders::extract_founders;

/// File extensions accepted as input documents.
const SUPPORTED_EXTENSIONS: [&str; 2] = [".html", ".htm"];

// ---------------------------------------------------------------------------
// Document handling
// ---------------------------------------------------------------------------

/// Check whether a file name is a supported input document.
pub fn is_supported_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Decode raw document bytes: UTF-8 first, then a windows-1252 re-decode
/// for legacy exports. The re-decode is total over all byte values, so a
/// saved page always yields text.
pub fn decode_document(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => {
            debug!("input is not valid UTF-8, re-decoding as windows-1252");
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

/// Parse document text into a DOM tree for the extractors.
pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

// ---------------------------------------------------------------------------
// Profile extraction
// ---------------------------------------------------------------------------

/// Everything the extractors pull from one profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// Company name, or `"Unknown Company"`.
    pub company_name: String,
    /// Website text or href, or empty.
    pub website: String,
    /// Company description, or empty.
    pub description: String,
    /// Founder names in page order; may be empty.
    pub founders: Vec<String>,
}

/// Run all field extractors over a parsed document.
pub fn extract_profile(doc: &Html) -> ExtractedProfile {
    ExtractedProfile {
        company_name: extract_company_name(doc),
        website: extract_website(doc),
        description: extract_description(doc),
        founders: extract_founders(doc),
    }
}
