use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Title of the page that stub notices link to, per language edition.
static STUB_MARKERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("en", "Wikipedia:Stub"),
        ("es", "Wikipedia:Esbozo"),
        ("nl", "Wikipedia:Beginnetje"),
        ("pt", "Wikipedia:Esboço"),
    ])
});

/// Stub marker title for `locale`, if stub detection is supported there.
pub fn stub_marker(locale: &str) -> Option<&'static str> {
    STUB_MARKERS.get(locale).copied()
}
