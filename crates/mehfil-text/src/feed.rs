//! Batch filtering of social-feed captions. The one seam in this crate that
//! logs; pure transforms stay in the sibling modules.

use tracing::debug;

use crate::ghazal::GhazalClassifier;

/// Keeps the ghazal-like captions from a scraped batch, preserving input
/// order and original indices so the caller can map results back to posts.
pub fn filter_ghazal_captions<'a, S>(
    captions: &'a [S],
    classifier: &GhazalClassifier,
) -> Vec<(usize, &'a str)>
where
    S: AsRef<str>,
{
    let kept: Vec<(usize, &str)> = captions
        .iter()
        .enumerate()
        .map(|(index, caption)| (index, caption.as_ref()))
        .filter(|(_, caption)| classifier.classify(caption))
        .collect();

    debug!(
        total = captions.len(),
        kept = kept.len(),
        "filtered feed batch for ghazal-like captions"
    );
    kept
}
