//! Founder-name extraction.
//!
//! Three independent heuristic passes over the profile markup; the first
//! pass that yields any names wins. Pass order is a contract.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Label phrases that mark a founders section.
const FOUNDER_INDICATORS: [&str; 3] = ["Founders", "Founded by", "Founder"];

/// Extract founder names, falling back to an empty list.
pub fn extract_founders(doc: &Html) -> Vec<String> {
    if let Some(names) = founders_by_label(doc) {
        return names;
    }
    if let Some(names) = founders_by_tile(doc) {
        return names;
    }
    if let Some(names) = founders_by_multi_formatter(doc) {
        return names;
    }

    warn!("founders not found with any heuristic pass");
    Vec::new()
}

// ---------------------------------------------------------------------------
// Pass 1: label-adjacent
// ---------------------------------------------------------------------------

/// A `span` label whose own text names founders, followed in document order
/// by a `field-formatter` holding the profile links.
fn founders_by_label(doc: &Html) -> Option<Vec<String>> {
    let span_sel = Selector::parse("span").unwrap();

    for indicator in FOUNDER_INDICATORS {
        for span in doc.select(&span_sel) {
            if !direct_text(&span).contains(indicator) {
                continue;
            }
            if let Some(formatter) = next_element_named(doc, &span, "field-formatter") {
                let names = link_texts(&formatter);
                if !names.is_empty() {
                    return Some(names);
                }
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Pass 2: tile-labeled
// ---------------------------------------------------------------------------

/// A labeled `tile-field` whose links are the founder profiles.
fn founders_by_tile(doc: &Html) -> Option<Vec<String>> {
    let sel = Selector::parse("tile-field span").unwrap();

    for span in doc.select(&sel) {
        let text: String = span.text().collect();
        if !text.contains("Founders") && !text.contains("Founded by") {
            continue;
        }
        if let Some(tile) = enclosing_element(&span, "tile-field") {
            let names = link_texts(&tile);
            if !names.is_empty() {
                return Some(names);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Pass 3: multi-value formatter
// ---------------------------------------------------------------------------

/// An `identifier-multi-formatter` inside a founders-labeled `tile-field`;
/// these often carry the full founder list.
fn founders_by_multi_formatter(doc: &Html) -> Option<Vec<String>> {
    let sel = Selector::parse("identifier-multi-formatter").unwrap();

    for formatter in doc.select(&sel) {
        let Some(tile) = enclosing_element(&formatter, "tile-field") else {
            continue;
        };
        let tile_text: String = tile.text().collect();
        if !FOUNDER_INDICATORS.iter().any(|ind| tile_text.contains(ind)) {
            continue;
        }
        let names = link_texts(&formatter);
        if !names.is_empty() {
            return Some(names);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tree helpers
// ---------------------------------------------------------------------------

/// Text of an element's direct child text nodes only (no descendants).
fn direct_text(el: &ElementRef) -> String {
    el.children()
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .collect()
}

/// Trimmed, non-empty texts of all `<a>` descendants.
fn link_texts(el: &ElementRef) -> Vec<String> {
    let a_sel = Selector::parse("a").unwrap();
    el.select(&a_sel)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// First element with the given name that appears after `from` in document
/// order, anywhere in the tree.
fn next_element_named<'a>(
    doc: &'a Html,
    from: &ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    let mut past_start = false;
    for node in doc.tree.nodes() {
        if node.id() == from.id() {
            past_start = true;
            continue;
        }
        if !past_start {
            continue;
        }
        if let Some(el) = ElementRef::wrap(node) {
            if el.value().name() == name {
                return Some(el);
            }
        }
    }
    None
}

/// Nearest ancestor element with the given name.
fn enclosing_element<'a>(el: &ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn label_adjacent_pass() {
        let d = doc(
            r#"<span>Founders</span>
               <field-formatter>
                 <a href="/p/1">John Smith</a>
                 <a href="/p/2">Mary Jones</a>
               </field-formatter>"#,
        );
        assert_eq!(
            extract_founders(&d),
            vec!["John Smith".to_string(), "Mary Jones".to_string()]
        );
    }

    #[test]
    fn label_pass_needs_direct_text() {
        // The outer span only contains the label through a nested child, so
        // pass 1 skips it; pass 2 still finds the tile structure.
        let d = doc(
            r#"<tile-field>
                 <span><b>Founded by</b></span>
                 <a href="/p/1">John Smith</a>
               </tile-field>"#,
        );
        assert_eq!(extract_founders(&d), vec!["John Smith".to_string()]);
    }

    #[test]
    fn tile_labeled_pass() {
        let d = doc(
            r#"<tile-field>
                 <span>Founders</span>
                 <div><a href="/p/1">Ada Lovelace</a></div>
               </tile-field>"#,
        );
        assert_eq!(extract_founders(&d), vec!["Ada Lovelace".to_string()]);
    }

    #[test]
    fn multi_formatter_pass() {
        // No span label at all: the tile's aggregate text carries the
        // indicator and the formatter holds the links.
        let d = doc(
            r#"<tile-field>
                 <div>Founder</div>
                 <identifier-multi-formatter>
                   <a href="/p/1">Grace Hopper</a>
                   <a href="/p/2">Alan Kay</a>
                 </identifier-multi-formatter>
               </tile-field>"#,
        );
        assert_eq!(
            extract_founders(&d),
            vec!["Grace Hopper".to_string(), "Alan Kay".to_string()]
        );
    }

    #[test]
    fn multi_formatter_requires_labeled_tile() {
        let d = doc(
            r#"<tile-field>
                 <div>Investors</div>
                 <identifier-multi-formatter><a href="/p/1">Not A Founder</a></identifier-multi-formatter>
               </tile-field>"#,
        );
        assert!(extract_founders(&d).is_empty());
    }

    #[test]
    fn no_founders_returns_empty() {
        let d = doc("<div><span>Leadership</span><a href='/p/1'>Someone</a></div>");
        assert!(extract_founders(&d).is_empty());
    }

    #[test]
    fn empty_link_texts_are_dropped() {
        let d = doc(
            r#"<span>Founders</span>
               <field-formatter>
                 <a href="/p/1"><img src="x.png"></a>
                 <a href="/p/2">Real Name</a>
               </field-formatter>"#,
        );
        assert_eq!(extract_founders(&d), vec!["Real Name".to_string()]);
    }
}
