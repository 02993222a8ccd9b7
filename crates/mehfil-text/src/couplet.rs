//! Couplet pairing and matla extraction.
//!
//! A couplet ("sher") is a pair of consecutive lines treated as one unit; the
//! matla is the opening couplet, shown as a poem's preview. Pairing tolerates
//! an odd trailing line, matla extraction does not.

use serde::{Deserialize, Serialize};

use crate::lines::split_poem_lines;

/// One structural unit of a poem. `second` is empty when the source had an
/// odd number of lines and this is the trailing couplet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couplet {
    pub first: String,
    pub second: String,
}

impl Couplet {
    /// True when both lines are present. Only complete couplets qualify as a
    /// matla.
    pub fn is_complete(&self) -> bool {
        !self.first.is_empty() && !self.second.is_empty()
    }
}

/// Splits a raw poem body into couplets. Lines come from
/// [`split_poem_lines`], so blank lines never produce empty couplets.
pub fn split_couplets(text: &str) -> Vec<Couplet> {
    pair_lines(split_poem_lines(text))
}

/// Pairs an already-split sequence of lines into couplets. Lines are trimmed
/// and empties dropped before pairing, matching the string form.
pub fn couplets_from_lines<I, S>(lines: I) -> Vec<Couplet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pair_lines(
        lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
    )
}

/// The opening couplet, if the poem opens with a true pair. A poem with a
/// single usable line has no matla even though [`split_couplets`] would
/// still yield one half-filled couplet for it.
pub fn matla(text: &str) -> Option<Couplet> {
    split_couplets(text)
        .into_iter()
        .next()
        .filter(Couplet::is_complete)
}

/// [`matla`] over an already-split line sequence.
pub fn matla_from_lines<I, S>(lines: I) -> Option<Couplet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    couplets_from_lines(lines)
        .into_iter()
        .next()
        .filter(Couplet::is_complete)
}

/// Joins couplets back into a newline-separated body. Splitting the result
/// reproduces the same couplets, provided the originals came from input
/// without blank lines.
pub fn join_couplets(couplets: &[Couplet]) -> String {
    let mut lines = Vec::with_capacity(couplets.len() * 2);
    for couplet in couplets {
        lines.push(couplet.first.as_str());
        if !couplet.second.is_empty() {
            lines.push(couplet.second.as_str());
        }
    }
    lines.join("\n")
}

fn pair_lines(lines: Vec<String>) -> Vec<Couplet> {
    let mut couplets = Vec::with_capacity(lines.len().div_ceil(2));
    let mut lines = lines.into_iter();
    while let Some(first) = lines.next() {
        let second = lines.next().unwrap_or_default();
        couplets.push(Couplet { first, second });
    }
    couplets
}

pub trait CoupletSplit {
    fn split_couplets(&self) -> Vec<Couplet>;
    fn matla(&self) -> Option<Couplet>;
}

impl<T: AsRef<str>> CoupletSplit for T {
    fn split_couplets(&self) -> Vec<Couplet> {
        split_couplets(self.as_ref())
    }

    fn matla(&self) -> Option<Couplet> {
        matla(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couplet(first: &str, second: &str) -> Couplet {
        Couplet {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    #[test]
    fn even_line_count_pairs_fully() {
        let couplets = split_couplets("एक\nदो\nतीन\nचार");
        assert_eq!(
            couplets,
            vec![couplet("एक", "दो"), couplet("तीन", "चार")]
        );
        assert!(couplets.iter().all(Couplet::is_complete));
    }

    #[test]
    fn odd_line_count_leaves_trailing_half_couplet() {
        let couplets = couplets_from_lines([
            "इश्क़ में हम दीवाना हुए",
            "मगर तू समझा ही नहीं",
            "रात-रात जगते रहे",
        ]);
        assert_eq!(
            couplets,
            vec![
                couplet("इश्क़ में हम दीवाना हुए", "मगर तू समझा ही नहीं"),
                couplet("रात-रात जगते रहे", ""),
            ]
        );
    }

    #[test]
    fn legacy_danda_body_pairs_after_delimiter_split() {
        let couplets = split_couplets("लाइन एक। लाइन दो। लाइन तीन।");
        assert_eq!(
            couplets,
            vec![couplet("लाइन एक", "लाइन दो"), couplet("लाइन तीन।", "")]
        );
    }

    #[test]
    fn matla_equals_first_complete_couplet() {
        let text = "इश्क़ में हम दीवाना हुए\nमगर तू समझा ही नहीं\nरात-रात जगते रहे";
        let matla = matla(text).expect("two usable lines");
        assert_eq!(matla, split_couplets(text)[0]);
        assert!(!matla.second.is_empty());
    }

    #[test]
    fn matla_absent_below_two_usable_lines() {
        assert_eq!(matla(""), None);
        assert_eq!(matla("अकेली पंक्ति"), None);
        assert_eq!(matla("अकेली पंक्ति\n\n   "), None);
        assert_eq!(matla_from_lines(["", "  ", "एक"]), None);
    }

    #[test]
    fn blank_entries_in_line_sequences_are_dropped_before_pairing() {
        let couplets = couplets_from_lines(["एक", "", "  ", "दो"]);
        assert_eq!(couplets, vec![couplet("एक", "दो")]);
    }

    #[test]
    fn join_then_split_round_trips() {
        let original = split_couplets("एक\nदो\nतीन\nचार\nपाँच");
        let rejoined = join_couplets(&original);
        assert_eq!(split_couplets(&rejoined), original);
    }

    #[test]
    fn extension_trait_mirrors_free_functions() {
        let text = "एक\nदो";
        assert_eq!(text.split_couplets(), split_couplets(text));
        assert_eq!(text.matla(), matla(text));
        assert_eq!(String::from(text).matla(), matla(text));
    }

    #[test]
    fn degenerate_input_never_panics() {
        for text in ["", " ", "\n\n\n", "।", "। ", "\u{0}", "🙂", "a\u{200B}b"] {
            let _ = split_couplets(text);
            let _ = matla(text);
        }
    }

    #[test]
    fn couplet_serializes_for_the_render_layer() {
        let value = serde_json::to_value(couplet("एक", "दो")).expect("serialize");
        assert_eq!(value["first"], "एक");
        assert_eq!(value["second"], "दो");
    }
}
