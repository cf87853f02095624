pub mod cleaner;
pub mod document;
pub mod paragraphs;

#[cfg(test)]
mod tests;

pub use cleaner::clean;
pub use document::{DocumentError, markup_payload, read_markup};
pub use paragraphs::{extract_paragraph_text, paragraph_text};

/// Paragraph text of `markup` with editorial artifacts removed.
///
/// `None` means the markup has no paragraph blocks at all.
pub fn extract_clean_text(markup: &str) -> Option<String> {
    extract_paragraph_text(markup).map(|text| clean(&text))
}
