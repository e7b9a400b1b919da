//! Wardrobe data model: clothing items, category/slot mapping, occasion
//! vocabulary, and boundary validation helpers.
//!
//! Items are created and edited by the wardrobe manager upstream; the
//! generator only ever reads a snapshot of them. The validation helpers here
//! exist for that upstream boundary — the generator itself is total and
//! never validates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Occasion vocabulary
// ---------------------------------------------------------------------------

pub const OCCASION_FORMAL: &str = "formal";
pub const OCCASION_WORK: &str = "work";
pub const OCCASION_CASUAL: &str = "casual";
pub const OCCASION_COLLEGE: &str = "college";
pub const OCCASION_PARTY: &str = "party";
pub const OCCASION_TRAVEL: &str = "travel";

/// All occasions the scoring rules know about. Unknown occasion strings are
/// not an error — they simply trigger no occasion-specific rules.
pub const VALID_OCCASIONS: &[&str] = &[
    OCCASION_FORMAL,
    OCCASION_WORK,
    OCCASION_CASUAL,
    OCCASION_COLLEGE,
    OCCASION_PARTY,
    OCCASION_TRAVEL,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The functional role a clothing category fills in an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Top,
    Bottom,
    Footwear,
    Layer,
}

/// Clothing category. The category→slot mapping is fixed data; categories
/// that map to no slot are excluded from generation, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Shirt,
    Tshirt,
    Trousers,
    Jeans,
    Sneakers,
    FormalShoes,
    Boots,
    Blazer,
}

impl Category {
    /// The slot this category fills, if any.
    pub fn slot(self) -> Option<Slot> {
        match self {
            Category::Shirt | Category::Tshirt => Some(Slot::Top),
            Category::Trousers | Category::Jeans => Some(Slot::Bottom),
            Category::Sneakers | Category::FormalShoes | Category::Boots => Some(Slot::Footwear),
            Category::Blazer => Some(Slot::Layer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    Slim,
    Regular,
    Oversized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fabric {
    Cotton,
    Denim,
    Wool,
    Leather,
    Synthetic,
}

// ---------------------------------------------------------------------------
// Clothing item
// ---------------------------------------------------------------------------

/// A single catalog entry belonging to one owner.
///
/// `primary_color` is a `#RRGGBB` hex string; enum fields arrive already
/// validated by the wardrobe collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Category,
    pub primary_color: String,
    pub secondary_color: Option<String>,
    pub fit: Fit,
    pub fabric: Fabric,
    pub occasion_tags: Vec<String>,
}

impl ClothingItem {
    /// Whether this item is eligible for an occasion: exact, case-insensitive
    /// tag match. Duplicate tags and tag order are irrelevant.
    pub fn matches_occasion(&self, occasion: &str) -> bool {
        self.occasion_tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(occasion))
    }
}

// ---------------------------------------------------------------------------
// Validation helpers (wardrobe boundary)
// ---------------------------------------------------------------------------

/// Validate that a color string is a 6-hex-digit `#RRGGBB` (hash optional).
pub fn validate_hex_color(hex: &str) -> Result<(), CoreError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid hex color '{hex}'. Expected #RRGGBB"
        )))
    }
}

/// Validate that an item carries at least one occasion tag.
pub fn validate_occasion_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.is_empty() {
        return Err(CoreError::Validation(
            "An item must have at least one occasion tag".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an occasion label is one of the known occasions.
pub fn validate_occasion(occasion: &str) -> Result<(), CoreError> {
    if VALID_OCCASIONS.contains(&occasion) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown occasion '{occasion}'. Valid occasions: {}",
            VALID_OCCASIONS.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
