//! Single-field extractors: company name, website, description.
//!
//! Each selector chain is ordered most-specific → most-generic; the order
//! is a contract, because it decides extraction priority when a page
//! matches more than one strategy.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use leadbase_shared::UNKNOWN_COMPANY;

/// Domain-suffix tokens that mark link text or hrefs as a real website.
const DOMAIN_SUFFIXES: [&str; 4] = [".com", ".org", ".net", ".io"];

/// Host of the profile source itself; links back to it are never the
/// company's own website.
const SOURCE_HOST: &str = "crunchbase.com";

/// Descriptions shorter than this are assumed to be labels, not prose.
const MIN_DESCRIPTION_CHARS: usize = 50;

/// Collapse an element's text content to a trimmed string.
fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

// ---------------------------------------------------------------------------
// Company name
// ---------------------------------------------------------------------------

/// Selector chain for the company name, tried in order.
const COMPANY_NAME_SELECTORS: [&str; 4] = [
    ".entity-name",
    "span.entity-name",
    ".profile-v3-header .entity-name",
    ".top-row .entity-name",
];

/// Extract the company name, falling back to `"Unknown Company"`.
pub fn extract_company_name(doc: &Html) -> String {
    for sel_str in COMPANY_NAME_SELECTORS {
        let sel = Selector::parse(sel_str).unwrap();
        if let Some(el) = doc.select(&sel).next() {
            let text = element_text(&el);
            if !text.is_empty() {
                return text;
            }
        }
    }

    // Structural pass: the profile header element may carry the name below
    // markup the class selectors miss.
    let header_sel = Selector::parse("profile-v3-header").unwrap();
    let name_sel = Selector::parse(".entity-name").unwrap();
    if let Some(header) = doc.select(&header_sel).next() {
        if let Some(el) = header.select(&name_sel).next() {
            let text = element_text(&el);
            if !text.is_empty() {
                return text;
            }
        }
    }

    warn!("company name not found with any selector strategy");
    UNKNOWN_COMPANY.to_string()
}

// ---------------------------------------------------------------------------
// Website
// ---------------------------------------------------------------------------

/// Selector chain for anchors likely to carry the company website.
const WEBSITE_SELECTORS: [&str; 3] = [
    "a[href^='http'][title*='.com']",
    "link-formatter a[target='_blank']",
    "field-formatter a[href^='http']",
];

/// Extract the company website, falling back to an empty string.
///
/// Anchors whose visible text names a domain win over anchors that merely
/// link to one; hrefs pointing back at the profile source are skipped.
pub fn extract_website(doc: &Html) -> String {
    for sel_str in WEBSITE_SELECTORS {
        let sel = Selector::parse(sel_str).unwrap();
        for el in doc.select(&sel) {
            let text = element_text(&el);
            if DOMAIN_SUFFIXES.iter().any(|ext| text.contains(ext)) {
                return text;
            }
        }
    }

    let anchor_sel = Selector::parse("a[href]").unwrap();
    for el in doc.select(&anchor_sel) {
        if let Some(href) = el.value().attr("href") {
            if DOMAIN_SUFFIXES.iter().any(|ext| href.contains(ext))
                && !href.contains(SOURCE_HOST)
            {
                return href.to_string();
            }
        }
    }

    warn!("website not found with any selector strategy");
    String::new()
}

// ---------------------------------------------------------------------------
// Description
// ---------------------------------------------------------------------------

/// Selector chain for the company description, tried in order.
const DESCRIPTION_SELECTORS: [&str; 4] = [
    ".expanded-only-content:not(.chips-container)",
    "profile-v3-header span.expanded-only-content",
    "tile-description span.description",
    ".overview-row span:not([class])",
];

/// Extract the company description, falling back to an empty string.
pub fn extract_description(doc: &Html) -> String {
    for sel_str in DESCRIPTION_SELECTORS {
        let sel = Selector::parse(sel_str).unwrap();
        if let Some(el) = doc.select(&sel).next() {
            let text = element_text(&el);
            if !text.is_empty() {
                return text;
            }
        }
    }

    // Last resort: any paragraph long enough to read as prose.
    let p_sel = Selector::parse("p").unwrap();
    for el in doc.select(&p_sel) {
        let text = element_text(&el);
        if text.chars().count() > MIN_DESCRIPTION_CHARS {
            return text;
        }
    }

    warn!("description not found with any selector strategy");
    String::new()
}
