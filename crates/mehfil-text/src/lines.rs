//! Line extraction shared by couplet splitting and ghazal classification.

/// Legacy poem bodies from the old CMS were stored as one long string with
/// couplet lines separated by a danda and a single space. A danda without a
/// trailing space does not split; that quirk is load-bearing for the stored
/// data and must not be "fixed" here.
const LEGACY_DANDA_DELIMITER: &str = "। ";

/// Splits a raw poem body into trimmed, non-empty lines.
///
/// Line breaks win when present; otherwise the text is treated as a legacy
/// single-line body and split on [`LEGACY_DANDA_DELIMITER`].
pub fn split_poem_lines(text: &str) -> Vec<String> {
    if text.contains('\n') {
        collect_lines(text.lines())
    } else {
        collect_lines(text.split(LEGACY_DANDA_DELIMITER))
    }
}

/// Splits social caption text on line breaks only. Captions never use the
/// legacy danda convention, so no delimiter fallback applies.
pub fn split_caption_lines(text: &str) -> Vec<String> {
    collect_lines(text.lines())
}

fn collect_lines<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
