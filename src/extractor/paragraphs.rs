use scraper::{Html, Selector};
use std::sync::LazyLock;

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Extracts the text of every `<p>` block in `markup`, newline-joined in
/// document order.
///
/// Returns `None` when the markup holds no paragraph blocks. Malformed markup
/// is parsed best-effort and never causes an error.
pub fn extract_paragraph_text(markup: &str) -> Option<String> {
    let document = Html::parse_document(markup);
    paragraph_text(&document)
}

/// Same as [`extract_paragraph_text`] for an already parsed document.
pub fn paragraph_text(document: &Html) -> Option<String> {
    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| p.text().collect::<String>())
        .collect();

    if paragraphs.is_empty() {
        return None;
    }

    Some(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_paragraphs_in_order() {
        let markup = r#"<div class="mw-parser-output"><p>First <b>bold</b> line.</p><table><tr><td>cell</td></tr></table><p>Second line.</p></div>"#;
        let text = extract_paragraph_text(markup).unwrap();
        assert_eq!(text, "First bold line.\nSecond line.");
    }

    #[test]
    fn test_no_paragraphs_is_none() {
        assert_eq!(extract_paragraph_text("<div><span>no blocks</span></div>"), None);
        assert_eq!(extract_paragraph_text(""), None);
        assert_eq!(extract_paragraph_text("plain text, no markup at all"), None);
    }

    #[test]
    fn test_empty_paragraph_still_counts() {
        // A document with an empty block has content, just zero-length.
        assert_eq!(extract_paragraph_text("<p></p>"), Some(String::new()));
        assert_eq!(extract_paragraph_text("<p></p><p>x</p>"), Some("\nx".to_string()));
    }

    #[test]
    fn test_malformed_markup() {
        let markup = "<div><p>Unclosed paragraph<p>Another<div></span>";
        let text = extract_paragraph_text(markup).unwrap();
        assert!(text.contains("Unclosed paragraph"));
        assert!(text.contains("Another"));

        assert_eq!(extract_paragraph_text("<<<>>> \u{0} {{garbage}}"), None);
    }

    #[test]
    fn test_keeps_reference_markers_for_cleaner() {
        let markup = r##"<p>Paris<sup class="reference"><a href="#cite_note-1">[1]</a></sup> is big.</p>"##;
        assert_eq!(extract_paragraph_text(markup).unwrap(), "Paris[1] is big.");
    }

    #[test]
    fn test_nul_and_bom_input() {
        let markup = "\u{feff}<p>Bled\u{0} Island</p>";
        let text = extract_paragraph_text(markup).unwrap();
        assert!(text.contains("Bled"));
        assert!(text.contains("Island"));
    }
}
