/// Upper bound, in characters, on any extracted free-text value.
pub(crate) const MAX_VALUE_CHARS: usize = 200;

/// Separator placed between pages when a document is flattened to one blob.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Removes invisible marks left behind by PDF text layers.
pub(crate) fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}', '\u{00ad}'], "")
}

/// Flattens page texts into one blob, dropping pages with no visible text.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

/// Cleans a raw captured value: collapses whitespace, drops one leading
/// colon or dash, caps the length. Returns `None` when nothing is left.
pub(crate) fn clean_value(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = match collapsed.strip_prefix([':', '-']) {
        Some(rest) => rest.trim_start(),
        None => collapsed.as_str(),
    };
    let truncated: String = stripped.chars().take(MAX_VALUE_CHARS).collect();
    let truncated = truncated.trim_end();

    if truncated.is_empty() {
        None
    } else {
        Some(truncated.to_string())
    }
}
