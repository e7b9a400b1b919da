//! Outfit combination generator: slot partitioning, occasion filtering,
//! cross-product enumeration with hard occasion gates, weighted scoring, and
//! ranked truncation.
//!
//! The generator is a total function over any well-formed catalog snapshot
//! and occasion string: empty slots, unknown occasions, and malformed colors
//! all yield ordinary (possibly empty) results, never an error.

use serde::Serialize;

use crate::color_score::score_colors;
use crate::footwear::recommend_footwear;
use crate::wardrobe::{
    Category, ClothingItem, Fabric, Fit, Slot, OCCASION_CASUAL, OCCASION_COLLEGE, OCCASION_FORMAL,
    OCCASION_WORK,
};

// ---------------------------------------------------------------------------
// Generation constants
// ---------------------------------------------------------------------------

/// Default number of ranked outfits returned.
pub const DEFAULT_MAX_OUTFITS: usize = 10;

/// Weight applied to the color sub-score in the combined total.
pub const COLOR_SCORE_WEIGHT: f64 = 0.5;

/// Maximum contribution of the fit sub-score.
pub const MAX_FIT_SCORE: f64 = 0.3;

/// Maximum contribution of the fabric sub-score.
pub const MAX_FABRIC_SCORE: f64 = 0.25;

// ---------------------------------------------------------------------------
// Fit scoring
// ---------------------------------------------------------------------------

struct FitRule {
    applies: fn(Fit, Fit) -> bool,
    score: f64,
}

fn fits_match(top: Fit, bottom: Fit) -> bool {
    top == bottom
}

fn slim_over_regular(top: Fit, bottom: Fit) -> bool {
    top == Fit::Slim && bottom == Fit::Regular
}

fn regular_over_slim(top: Fit, bottom: Fit) -> bool {
    top == Fit::Regular && bottom == Fit::Slim
}

fn either_oversized(top: Fit, bottom: Fit) -> bool {
    top == Fit::Oversized || bottom == Fit::Oversized
}

/// First matching rule wins; matched-fit outranks the oversized penalty, so
/// oversized-over-oversized still scores the full 0.3.
const FIT_RULES: &[FitRule] = &[
    FitRule {
        applies: fits_match,
        score: 0.3,
    },
    FitRule {
        applies: slim_over_regular,
        score: 0.25,
    },
    FitRule {
        applies: regular_over_slim,
        score: 0.2,
    },
    FitRule {
        applies: either_oversized,
        score: 0.1,
    },
];

const FIT_SCORE_DEFAULT: f64 = 0.15;

/// Fit sub-score for a top/bottom pair, capped at [`MAX_FIT_SCORE`].
pub fn fit_score(top: Fit, bottom: Fit) -> f64 {
    FIT_RULES
        .iter()
        .find(|r| (r.applies)(top, bottom))
        .map(|r| r.score)
        .unwrap_or(FIT_SCORE_DEFAULT)
}

// ---------------------------------------------------------------------------
// Fabric scoring
// ---------------------------------------------------------------------------

struct FabricRule {
    applies: fn(Fabric, Fabric, &str) -> bool,
    score: f64,
}

fn formal_naturals(top: Fabric, bottom: Fabric, occasion: &str) -> bool {
    const NATURALS: &[Fabric] = &[Fabric::Cotton, Fabric::Wool];
    occasion == OCCASION_FORMAL && NATURALS.contains(&top) && NATURALS.contains(&bottom)
}

fn relaxed_denim_bottom(_top: Fabric, bottom: Fabric, occasion: &str) -> bool {
    (occasion == OCCASION_CASUAL || occasion == OCCASION_COLLEGE) && bottom == Fabric::Denim
}

fn cotton_over_wool(top: Fabric, bottom: Fabric, _occasion: &str) -> bool {
    top == Fabric::Cotton && bottom == Fabric::Wool
}

/// Evaluated in fixed priority order; first match wins, rules never stack.
const FABRIC_RULES: &[FabricRule] = &[
    FabricRule {
        applies: formal_naturals,
        score: 0.25,
    },
    FabricRule {
        applies: relaxed_denim_bottom,
        score: 0.2,
    },
    FabricRule {
        applies: cotton_over_wool,
        score: 0.2,
    },
];

const FABRIC_SCORE_DEFAULT: f64 = 0.15;

/// Fabric sub-score for a top/bottom pair and occasion, capped at
/// [`MAX_FABRIC_SCORE`].
pub fn fabric_score(top: Fabric, bottom: Fabric, occasion: &str) -> f64 {
    FABRIC_RULES
        .iter()
        .find(|r| (r.applies)(top, bottom, occasion))
        .map(|r| r.score)
        .unwrap_or(FABRIC_SCORE_DEFAULT)
}

// ---------------------------------------------------------------------------
// Result record
// ---------------------------------------------------------------------------

/// One generated outfit, created fresh per request and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OutfitCombination {
    pub top: ClothingItem,
    pub bottom: ClothingItem,
    pub footwear: ClothingItem,
    /// Present only for formal and work occasions, and only the first
    /// eligible layer in catalog order.
    pub layer: Option<ClothingItem>,
    /// Weighted total `color * 0.5 + fit + fabric`. The sub-scores are not
    /// jointly renormalized, so this can exceed 1.0; that overflow is part of
    /// the scoring contract and is deliberately not clamped.
    pub compatibility_score: f64,
    /// Color-only sub-score, always clamped to `[0, 1]`.
    pub color_score: f64,
    pub explanation: String,
    pub shoe_recommendation: String,
}

// ---------------------------------------------------------------------------
// Occasion hard gates
// ---------------------------------------------------------------------------

/// Hard requirements applied before scoring. A failing triple is discarded
/// entirely, not scored.
fn passes_occasion_gate(
    top: &ClothingItem,
    bottom: &ClothingItem,
    footwear: &ClothingItem,
    occasion: &str,
) -> bool {
    match occasion {
        OCCASION_FORMAL => {
            footwear.category == Category::FormalShoes
                && top.category != Category::Tshirt
                && bottom.category != Category::Jeans
        }
        OCCASION_WORK => {
            footwear.category != Category::Sneakers || footwear.matches_occasion(OCCASION_WORK)
        }
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Generate up to `max_outfits` ranked outfit combinations for one occasion.
///
/// The catalog is read as a snapshot: partitioned into slots by the fixed
/// category mapping, filtered by occasion tag, enumerated as a full
/// top x bottom x footwear cross-product behind the occasion gates, scored,
/// stable-sorted by score descending (enumeration order breaks ties), and
/// truncated. `max_outfits == 0` returns an empty result even when valid
/// combinations exist.
pub fn generate_outfits(
    catalog: &[ClothingItem],
    occasion: &str,
    max_outfits: usize,
) -> Vec<OutfitCombination> {
    let mut tops: Vec<&ClothingItem> = Vec::new();
    let mut bottoms: Vec<&ClothingItem> = Vec::new();
    let mut footwear: Vec<&ClothingItem> = Vec::new();
    let mut layers: Vec<&ClothingItem> = Vec::new();

    for item in catalog {
        if !item.matches_occasion(occasion) {
            continue;
        }
        match item.category.slot() {
            Some(Slot::Top) => tops.push(item),
            Some(Slot::Bottom) => bottoms.push(item),
            Some(Slot::Footwear) => footwear.push(item),
            Some(Slot::Layer) => layers.push(item),
            None => {}
        }
    }

    // Only formal and work outfits carry a layer, and only the first eligible
    // one in catalog order.
    let layer = if occasion == OCCASION_FORMAL || occasion == OCCASION_WORK {
        layers.first().copied()
    } else {
        None
    };

    let mut combinations: Vec<OutfitCombination> = Vec::new();

    for top in &tops {
        for bottom in &bottoms {
            for shoe in &footwear {
                if !passes_occasion_gate(top, bottom, shoe, occasion) {
                    continue;
                }

                let color = score_colors(
                    &top.primary_color,
                    &bottom.primary_color,
                    &shoe.primary_color,
                    occasion,
                );
                let fit = fit_score(top.fit, bottom.fit);
                let fabric = fabric_score(top.fabric, bottom.fabric, occasion);
                let compatibility_score = color.score * COLOR_SCORE_WEIGHT + fit + fabric;

                let shoe_recommendation =
                    recommend_footwear(&top.primary_color, &bottom.primary_color, occasion);

                combinations.push(OutfitCombination {
                    top: (*top).clone(),
                    bottom: (*bottom).clone(),
                    footwear: (*shoe).clone(),
                    layer: layer.cloned(),
                    compatibility_score,
                    color_score: color.score,
                    explanation: color.explanation,
                    shoe_recommendation: shoe_recommendation.to_string(),
                });
            }
        }
    }

    let candidates = combinations.len();

    // Stable sort: ties keep enumeration order.
    combinations.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    combinations.truncate(max_outfits);

    tracing::debug!(
        occasion,
        candidates,
        returned = combinations.len(),
        "Generated outfit combinations"
    );

    combinations
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn item(
        category: Category,
        color: &str,
        fit: Fit,
        fabric: Fabric,
        tags: &[&str],
    ) -> ClothingItem {
        ClothingItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            category,
            primary_color: color.to_string(),
            secondary_color: None,
            fit,
            fabric,
            occasion_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn formal_catalog() -> Vec<ClothingItem> {
        vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["formal"]),
            item(Category::Trousers, "#BBBBBB", Fit::Regular, Fabric::Wool, &["formal"]),
            item(Category::FormalShoes, "#AAAAAA", Fit::Regular, Fabric::Leather, &["formal"]),
            item(Category::Blazer, "#333333", Fit::Regular, Fabric::Wool, &["formal"]),
        ]
    }

    // -- fit_score -----------------------------------------------------------

    #[test]
    fn matched_fits_score_highest() {
        assert_eq!(fit_score(Fit::Slim, Fit::Slim), 0.3);
        assert_eq!(fit_score(Fit::Oversized, Fit::Oversized), 0.3);
    }

    #[test]
    fn slim_over_regular_scores() {
        assert_eq!(fit_score(Fit::Slim, Fit::Regular), 0.25);
    }

    #[test]
    fn regular_over_slim_scores() {
        assert_eq!(fit_score(Fit::Regular, Fit::Slim), 0.2);
    }

    #[test]
    fn mixed_oversized_scores_low() {
        assert_eq!(fit_score(Fit::Oversized, Fit::Slim), 0.1);
        assert_eq!(fit_score(Fit::Regular, Fit::Oversized), 0.1);
    }

    // -- fabric_score --------------------------------------------------------

    #[test]
    fn formal_naturals_score_highest() {
        assert_eq!(fabric_score(Fabric::Cotton, Fabric::Wool, "formal"), 0.25);
        assert_eq!(fabric_score(Fabric::Wool, Fabric::Wool, "formal"), 0.25);
    }

    #[test]
    fn denim_bottom_scores_for_relaxed_occasions() {
        assert_eq!(fabric_score(Fabric::Cotton, Fabric::Denim, "casual"), 0.2);
        assert_eq!(fabric_score(Fabric::Synthetic, Fabric::Denim, "college"), 0.2);
    }

    #[test]
    fn cotton_over_wool_scores_outside_formal() {
        assert_eq!(fabric_score(Fabric::Cotton, Fabric::Wool, "travel"), 0.2);
    }

    #[test]
    fn formal_rule_wins_over_cotton_over_wool() {
        // Both rules match cotton/wool at a formal occasion; the formal rule
        // is earlier in the table and must win.
        assert_eq!(fabric_score(Fabric::Cotton, Fabric::Wool, "formal"), 0.25);
    }

    #[test]
    fn unmatched_fabrics_score_default() {
        assert_eq!(fabric_score(Fabric::Leather, Fabric::Synthetic, "party"), 0.15);
        assert_eq!(fabric_score(Fabric::Cotton, Fabric::Denim, "formal"), 0.15);
    }

    // -- Formal hard gate ----------------------------------------------------

    #[test]
    fn formal_outfits_exclude_tshirts_jeans_and_casual_shoes() {
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["formal"]),
            item(Category::Tshirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["formal"]),
            item(Category::Trousers, "#BBBBBB", Fit::Regular, Fabric::Wool, &["formal"]),
            item(Category::Jeans, "#BBBBBB", Fit::Regular, Fabric::Denim, &["formal"]),
            item(Category::FormalShoes, "#AAAAAA", Fit::Regular, Fabric::Leather, &["formal"]),
            item(Category::Sneakers, "#AAAAAA", Fit::Regular, Fabric::Synthetic, &["formal"]),
            item(Category::Boots, "#AAAAAA", Fit::Regular, Fabric::Leather, &["formal"]),
        ];
        let outfits = generate_outfits(&catalog, "formal", 50);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            assert_ne!(outfit.top.category, Category::Tshirt);
            assert_ne!(outfit.bottom.category, Category::Jeans);
            assert_eq!(outfit.footwear.category, Category::FormalShoes);
        }
    }

    #[test]
    fn work_sneakers_require_work_tag() {
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["work"]),
            item(Category::Trousers, "#BBBBBB", Fit::Regular, Fabric::Wool, &["work"]),
            item(Category::Sneakers, "#AAAAAA", Fit::Regular, Fabric::Synthetic, &["work"]),
        ];
        let outfits = generate_outfits(&catalog, "work", 50);

        assert!(!outfits.is_empty());
        for outfit in &outfits {
            if outfit.footwear.category == Category::Sneakers {
                assert!(outfit.footwear.matches_occasion("work"));
            }
        }
    }

    // -- Single-combination formal scenario ----------------------------------

    #[test]
    fn one_of_each_neutral_formal_yields_one_layered_outfit() {
        let outfits = generate_outfits(&formal_catalog(), "formal", 10);

        assert_eq!(outfits.len(), 1);
        let outfit = &outfits[0];
        assert!(outfit.layer.is_some());
        assert_eq!(outfit.layer.as_ref().unwrap().category, Category::Blazer);
        assert!(outfit.color_score >= 0.8, "got {}", outfit.color_score);
        // color 0.85 * 0.5 + fit 0.3 (regular/regular) + fabric 0.25 (cotton/wool formal)
        assert!((outfit.compatibility_score - 0.975).abs() < 1e-9);
    }

    #[test]
    fn layer_absent_outside_formal_and_work() {
        let catalog = vec![
            item(Category::Tshirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Jeans, "#3A5F8A", Fit::Regular, Fabric::Denim, &["casual"]),
            item(Category::Sneakers, "#FFFFFF", Fit::Regular, Fabric::Synthetic, &["casual"]),
            item(Category::Blazer, "#333333", Fit::Regular, Fabric::Wool, &["casual"]),
        ];
        let outfits = generate_outfits(&catalog, "casual", 10);

        assert_eq!(outfits.len(), 1);
        assert!(outfits[0].layer.is_none());
    }

    #[test]
    fn only_first_eligible_layer_attaches() {
        let mut catalog = formal_catalog();
        catalog.push(item(
            Category::Blazer,
            "#000080",
            Fit::Regular,
            Fabric::Wool,
            &["formal"],
        ));
        let first_blazer_id = catalog[3].id;

        let outfits = generate_outfits(&catalog, "formal", 10);
        assert_eq!(outfits[0].layer.as_ref().unwrap().id, first_blazer_id);
    }

    // -- Ranking & truncation ------------------------------------------------

    #[test]
    fn outfits_sorted_by_score_non_increasing() {
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Shirt, "#FF0000", Fit::Oversized, Fabric::Synthetic, &["casual"]),
            item(Category::Tshirt, "#00FF00", Fit::Slim, Fabric::Cotton, &["casual"]),
            item(Category::Jeans, "#3A5F8A", Fit::Regular, Fabric::Denim, &["casual"]),
            item(Category::Trousers, "#222222", Fit::Slim, Fabric::Wool, &["casual"]),
            item(Category::Sneakers, "#FFFFFF", Fit::Regular, Fabric::Synthetic, &["casual"]),
            item(Category::Boots, "#8B4513", Fit::Regular, Fabric::Leather, &["casual"]),
        ];
        let outfits = generate_outfits(&catalog, "casual", 50);

        assert!(outfits.len() > 1);
        for pair in outfits.windows(2) {
            assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
        }
    }

    #[test]
    fn results_truncated_to_max_outfits() {
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Shirt, "#DDDDDD", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Jeans, "#3A5F8A", Fit::Regular, Fabric::Denim, &["casual"]),
            item(Category::Trousers, "#222222", Fit::Regular, Fabric::Wool, &["casual"]),
            item(Category::Sneakers, "#FFFFFF", Fit::Regular, Fabric::Synthetic, &["casual"]),
            item(Category::Boots, "#8B4513", Fit::Regular, Fabric::Leather, &["casual"]),
        ];
        let outfits = generate_outfits(&catalog, "casual", 3);
        assert_eq!(outfits.len(), 3);
    }

    #[test]
    fn max_outfits_zero_returns_empty() {
        let outfits = generate_outfits(&formal_catalog(), "formal", 0);
        assert!(outfits.is_empty());
    }

    #[test]
    fn equal_scores_keep_enumeration_order() {
        // Two identical tops: every derived score ties, so the first catalog
        // top must come out first.
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Trousers, "#BBBBBB", Fit::Regular, Fabric::Wool, &["casual"]),
            item(Category::Sneakers, "#AAAAAA", Fit::Regular, Fabric::Synthetic, &["casual"]),
        ];
        let first_top_id = catalog[0].id;

        let outfits = generate_outfits(&catalog, "casual", 10);
        assert_eq!(outfits.len(), 2);
        assert_eq!(outfits[0].top.id, first_top_id);
    }

    // -- Empty / edge semantics ----------------------------------------------

    #[test]
    fn empty_catalog_returns_empty() {
        assert!(generate_outfits(&[], "casual", 10).is_empty());
    }

    #[test]
    fn no_items_tagged_for_occasion_returns_empty() {
        let catalog = formal_catalog();
        assert!(generate_outfits(&catalog, "party", 10).is_empty());
    }

    #[test]
    fn missing_slot_returns_empty() {
        // No footwear at all.
        let catalog = vec![
            item(Category::Shirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["casual"]),
            item(Category::Jeans, "#3A5F8A", Fit::Regular, Fabric::Denim, &["casual"]),
        ];
        assert!(generate_outfits(&catalog, "casual", 10).is_empty());
    }

    #[test]
    fn unknown_occasion_filters_everything_out() {
        assert!(generate_outfits(&formal_catalog(), "wedding", 10).is_empty());
    }

    #[test]
    fn occasion_tag_match_is_case_insensitive() {
        let catalog = vec![
            item(Category::Tshirt, "#CCCCCC", Fit::Regular, Fabric::Cotton, &["Casual"]),
            item(Category::Jeans, "#3A5F8A", Fit::Regular, Fabric::Denim, &["CASUAL"]),
            item(Category::Sneakers, "#FFFFFF", Fit::Regular, Fabric::Synthetic, &["casual"]),
        ];
        assert_eq!(generate_outfits(&catalog, "casual", 10).len(), 1);
    }

    #[test]
    fn outfit_serializes_for_the_api_layer() {
        let outfits = generate_outfits(&formal_catalog(), "formal", 10);
        let json = serde_json::to_value(&outfits[0]).unwrap();

        assert_eq!(json["top"]["category"], "shirt");
        assert!(json["compatibility_score"].is_f64());
        assert!(json["shoe_recommendation"].is_string());
    }
}
