//! Normalizes raw poem bodies and scraped captions before structuring.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleans text coming out of the document store or the social-feed scraper.
///
/// Strips control characters, NFC-normalizes (feed text often arrives with
/// decomposed matras), removes zero-width characters, and collapses runs of
/// spaces and tabs within each line. Line breaks are preserved: line
/// structure is the signal the splitter and classifier work from.
pub fn cleanup_text(text: &str) -> String {
    let mut cleaned = text
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect::<String>();

    cleaned = cleaned.nfc().collect::<String>();
    cleaned = cleaned.replace(['\u{200B}', '\u{200C}', '\u{FEFF}'], "");
    cleaned = cleaned.replace('\u{00A0}', " ");
    cleaned = collapse_inline_whitespace(&cleaned);

    cleaned.trim().to_string()
}

fn collapse_inline_whitespace(input: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());
    input
        .lines()
        .map(|line| RE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_runs_of_spaces_within_lines() {
        assert_eq!(
            cleanup_text("हम  दीवाना   हुए\nजाते \t हैं"),
            "हम दीवाना हुए\nजाते हैं"
        );
    }

    #[test]
    fn preserves_line_breaks() {
        assert_eq!(cleanup_text("एक\nदो\nतीन"), "एक\nदो\nतीन");
    }

    #[test]
    fn strips_zero_width_and_nonbreaking_characters() {
        assert_eq!(cleanup_text("जाते\u{200B} हैं\u{00A0}।"), "जाते हैं ।");
    }

    #[test]
    fn removes_control_characters() {
        assert_eq!(cleanup_text("एक\u{0}\u{7}दो"), "एकदो");
    }

    #[test]
    fn nfc_composes_decomposed_sequences() {
        // e + combining acute composes to é; scraped captions mix scripts.
        assert_eq!(cleanup_text("caf\u{65}\u{301}"), "caf\u{E9}");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(cleanup_text(""), "");
        assert_eq!(cleanup_text("  \n\t "), "");
    }
}
