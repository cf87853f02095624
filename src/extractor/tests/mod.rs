use std::fs;

use crate::extractor::{extract_clean_text, extract_paragraph_text, markup_payload};

fn fixture_markup(name: &str) -> String {
    let body = fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture");
    markup_payload(&body).expect("Fixture has no markup payload")
}

#[test]
fn test_extract_article() {
    let markup = fixture_markup("article.json");
    let text = extract_paragraph_text(&markup).unwrap();

    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Lake Bled (Slovene: Blejsko jezero)"));
    assert!(text.contains("[1]"));
    assert!(text.contains("[citation needed]"));
    // Infobox cells and headings are not paragraph blocks
    assert!(!text.contains("Location:"));
    assert!(!text.contains("Geography"));
}

#[test]
fn test_clean_article() {
    let markup = fixture_markup("article.json");
    let text = extract_clean_text(&markup).unwrap();

    assert!(!text.contains("[1]"));
    assert!(!text.contains("[2]"));
    assert!(!text.contains("[citation needed]"));
    assert!(text.contains("where it adjoins the town of Bled. The area"));
    assert!(text.len() >= 275);
}

#[test]
fn test_stub_article_is_short() {
    let markup = fixture_markup("stub.json");
    let text = extract_clean_text(&markup).unwrap();

    assert_eq!(
        text,
        "Zyxland is a small village in the municipality of Example, in the north of the country."
    );
    assert!(text.len() < 275);
}

#[test]
fn test_list_page_has_no_content() {
    let markup = fixture_markup("list.json");
    assert_eq!(extract_paragraph_text(&markup), None);
    assert_eq!(extract_clean_text(&markup), None);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(markup in ".*") {
            let _ = extract_paragraph_text(&markup);
        }

        #[test]
        fn test_extract_segments_follow_paragraphs(
            segments in proptest::collection::vec("[a-zA-Z0-9 .,]{0,30}", 1..8)
        ) {
            let markup: String = segments.iter().map(|s| format!("<p>{}</p>", s)).collect();
            let text = extract_paragraph_text(&markup).unwrap();
            prop_assert_eq!(text, segments.join("\n"));
        }

        #[test]
        fn test_no_paragraph_markup_is_none(words in "[a-z ]{0,40}") {
            let markup = format!("<div><span>{}</span></div>", words);
            prop_assert_eq!(extract_paragraph_text(&markup), None);
        }
    }
}
