use crate::culler::markers::stub_marker;
use crate::extractor::{clean, paragraph_text};
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Documents whose cleaned paragraph text is shorter than this many UTF-8
/// bytes are excluded. 25th percentile of English article sizes.
pub const MIN_CONTENT_BYTES: usize = 275;

static TITLED_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[title]").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Stub,
    EmptyContent,
    BelowSizeThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionVerdict {
    Retained,
    Excluded(Criterion),
}

impl ExclusionVerdict {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded(_))
    }
}

/// Classifies one document's markup.
///
/// Criteria are checked in order stub, empty content, below size; the first
/// match decides the verdict.
pub fn classify(markup: &str, locale: &str) -> ExclusionVerdict {
    let document = Html::parse_document(markup);

    if let Some(marker) = stub_marker(locale)
        && has_stub_marker(&document, marker)
    {
        return ExclusionVerdict::Excluded(Criterion::Stub);
    }

    let Some(text) = paragraph_text(&document) else {
        return ExclusionVerdict::Excluded(Criterion::EmptyContent);
    };

    if clean(&text).len() < MIN_CONTENT_BYTES {
        return ExclusionVerdict::Excluded(Criterion::BelowSizeThreshold);
    }

    ExclusionVerdict::Retained
}

fn has_stub_marker(document: &Html, marker: &str) -> bool {
    document
        .select(&TITLED_LINK_SELECTOR)
        .any(|link| link.value().attr("title") == Some(marker))
}
