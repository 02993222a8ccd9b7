//! Text-structuring core for the mehfil poetry platform.
//!
//! Everything in `lines`, `couplet`, `ghazal`, and `cleanup` is a pure
//! transform: no IO, no shared state, no panics for any string input. The
//! web layer hands these functions already-fetched poem bodies and social
//! captions and renders whatever comes back; a degenerate input produces an
//! empty or negative result, never an error. Keep it that way so the
//! functions stay safe to call from rendering paths.
//!
//! `feed` is the one service-flavored seam (it logs); pure transforms do not
//! belong there.

pub mod cleanup;
pub mod couplet;
pub mod feed;
pub mod ghazal;
pub mod lines;

pub use cleanup::cleanup_text;
pub use couplet::{
    Couplet, CoupletSplit, couplets_from_lines, join_couplets, matla, matla_from_lines,
    split_couplets,
};
pub use feed::filter_ghazal_captions;
pub use ghazal::{
    ClassifierOptions, ClassifierOptionsError, GhazalClassification, GhazalClassifier,
    classify_ghazal,
};
pub use lines::{split_caption_lines, split_poem_lines};
