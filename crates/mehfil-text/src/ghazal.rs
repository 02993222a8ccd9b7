//! Heuristic ghazal detection for social-feed captions.
//!
//! A ghazal is built from couplets sharing a repeated end-rhyme or refrain,
//! so a caption "looks like" a ghazal when at least two of its lines end the
//! same way. The heuristic is: gate on Devanagari script, extract the last
//! word of each line, compare a fixed trailing window of code points. Known
//! limitation: Arabic-script Urdu and Roman transliteration are never
//! recognized; only Devanagari passes the gate. False positives and false
//! negatives are expected; the contract is determinism and never panicking,
//! not linguistic accuracy.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::lines::split_caption_lines;

/// Trailing code points compared per line ending. Full-word matching is too
/// strict for Hindi/Urdu morphology; four code points approximates rhyme
/// without any linguistic analysis.
const DEFAULT_SUFFIX_WINDOW: usize = 4;

/// Stripped from lines before the last word is taken, so `...हैं।` and
/// `...हैं!` rhyme with `...हैं`.
const STRIPPED_PUNCTUATION: &[char] = &[
    '।', '!', '?', '.', ',', ';', ':', '—', '-', '"', '\'',
];

const DEVANAGARI_START: char = '\u{0900}';
const DEVANAGARI_END: char = '\u{097F}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Size of the rhyme-suffix window in code points. A tunable, not a
    /// derived constant; 4 is the production setting.
    pub suffix_window: usize,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            suffix_window: DEFAULT_SUFFIX_WINDOW,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClassifierOptionsError {
    #[error("suffix window must be at least 1 code point")]
    ZeroSuffixWindow,
}

/// The boolean decision plus the evidence behind it, for diagnostics and the
/// admin surface. The decision alone is [`GhazalClassifier::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GhazalClassification {
    pub is_ghazal: bool,
    pub has_devanagari: bool,
    /// Non-empty lines found after trimming. Zero when the script gate
    /// rejected the text before line extraction.
    pub line_count: usize,
    /// Occurrences of each rhyme suffix across lines. Empty unless the text
    /// passed the script gate with at least two lines.
    pub suffix_counts: BTreeMap<String, usize>,
}

impl GhazalClassification {
    fn rejected(has_devanagari: bool, line_count: usize) -> Self {
        Self {
            is_ghazal: false,
            has_devanagari,
            line_count,
            suffix_counts: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GhazalClassifier {
    suffix_window: usize,
}

impl Default for GhazalClassifier {
    fn default() -> Self {
        Self {
            suffix_window: DEFAULT_SUFFIX_WINDOW,
        }
    }
}

impl GhazalClassifier {
    /// A zero window would make every line ending an empty suffix and every
    /// two-line caption a ghazal; that is a caller bug, reported as a typed
    /// error rather than silently classifying garbage.
    pub fn new(options: ClassifierOptions) -> Result<Self, ClassifierOptionsError> {
        if options.suffix_window == 0 {
            return Err(ClassifierOptionsError::ZeroSuffixWindow);
        }
        Ok(Self {
            suffix_window: options.suffix_window,
        })
    }

    pub fn classify(&self, text: &str) -> bool {
        self.classify_with_evidence(text).is_ghazal
    }

    pub fn classify_with_evidence(&self, text: &str) -> GhazalClassification {
        let has_devanagari = contains_devanagari(text);
        if !has_devanagari {
            return GhazalClassification::rejected(false, 0);
        }

        let lines = split_caption_lines(text);
        if lines.len() < 2 {
            // A single line cannot exhibit end-rhyme repetition.
            return GhazalClassification::rejected(true, lines.len());
        }

        let mut suffix_counts = BTreeMap::new();
        for line in &lines {
            if let Some(suffix) = rhyme_suffix(line, self.suffix_window) {
                *suffix_counts.entry(suffix).or_insert(0usize) += 1;
            }
        }

        let is_ghazal = suffix_counts.values().any(|&count| count >= 2);
        GhazalClassification {
            is_ghazal,
            has_devanagari,
            line_count: lines.len(),
            suffix_counts,
        }
    }
}

/// Classifies with the production default window. The struct form exists for
/// callers tuning [`ClassifierOptions::suffix_window`].
pub fn classify_ghazal(text: &str) -> bool {
    GhazalClassifier::default().classify(text)
}

fn contains_devanagari(text: &str) -> bool {
    text.chars()
        .any(|c| (DEVANAGARI_START..=DEVANAGARI_END).contains(&c))
}

/// Last `window` code points of the line's last word, punctuation stripped
/// and lowercased. `None` when nothing word-like remains (a line of pure
/// punctuation contributes no suffix).
fn rhyme_suffix(line: &str, window: usize) -> Option<String> {
    let cleaned: String = line
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    let last_word = cleaned.split_whitespace().next_back()?;
    let chars: Vec<char> = last_word.chars().collect();
    let start = chars.len().saturating_sub(window);
    Some(chars[start..].iter().collect::<String>().to_lowercase())
}
