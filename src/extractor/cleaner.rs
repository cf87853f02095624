use regex::Regex;
use std::sync::LazyLock;

const EDIT_MARKER: &str = "[edit]";
const CITATION_NEEDED_MARKER: &str = "[citation needed]";

static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d{1,3}\]").unwrap());

/// Removes editorial artifacts from extracted article text: `[edit]` links,
/// numeric reference markers such as `[12]`, and `[citation needed]` tags.
///
/// Passes repeat until nothing changes, so a marker that only appears once
/// an inner marker is gone (`[ed[1]it]`) is removed as well.
pub fn clean(text: &str) -> String {
    let mut current = strip_markers(text);
    loop {
        let next = strip_markers(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_markers(text: &str) -> String {
    let without_edit = text.replace(EDIT_MARKER, "");
    let without_refs = REFERENCE_REGEX.replace_all(&without_edit, "");
    without_refs.replace(CITATION_NEEDED_MARKER, "")
}
