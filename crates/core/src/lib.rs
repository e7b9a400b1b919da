//! Fitcheck outfit recommendation engine.
//!
//! This crate is the pure, synchronous core of the recommender: it takes a
//! flat snapshot of one user's clothing catalog plus an occasion label and
//! returns a ranked list of outfit combinations. Building blocks, leaf-first:
//!
//! - [`color`] — hex/RGB/HSV conversion and color-theory predicates.
//! - [`color_score`] — the rule-table color compatibility scorer.
//! - [`footwear`] — the textual footwear advisor.
//! - [`wardrobe`] — clothing-item model, category/slot mapping, occasion
//!   vocabulary, and boundary validation helpers.
//! - [`outfit`] — the combination generator: enumeration, occasion gates,
//!   fit/fabric scoring, ranking, truncation.
//! - [`summary`] — the opaque per-request history record.
//!
//! No persistence, auth, or HTTP concerns live here; the crate is callable
//! with plain data and performs no I/O.

pub mod color;
pub mod color_score;
pub mod error;
pub mod footwear;
pub mod outfit;
pub mod summary;
pub mod types;
pub mod wardrobe;

pub use color_score::{score_colors, ColorScore};
pub use error::CoreError;
pub use footwear::recommend_footwear;
pub use outfit::{generate_outfits, OutfitCombination, DEFAULT_MAX_OUTFITS};
pub use summary::GenerationSummary;
pub use wardrobe::{Category, ClothingItem, Fabric, Fit, Slot};
