//! Color compatibility scorer: rule-table evaluation over the HSV triples of
//! a top/bottom/footwear combination.
//!
//! The rules are data — an ordered list of (predicate, delta, rationale)
//! entries applied in fixed sequence over a base score — so the stacking and
//! priority semantics stay independently testable. The final score is clamped
//! to `[0, 1]`; occasion matching is case-sensitive exact, and unrecognized
//! occasions simply fail to trigger the occasion-specific rules.

use serde::Serialize;

use crate::color::{
    are_analogous, are_complementary, contrast, hex_to_rgb, is_neutral, rgb_to_hsv, Hsv,
};
use crate::wardrobe::{
    OCCASION_CASUAL, OCCASION_COLLEGE, OCCASION_FORMAL, OCCASION_PARTY, OCCASION_WORK,
};

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Every combination starts here before rule deltas are applied.
pub const BASE_COLOR_SCORE: f64 = 0.5;

/// Explanation used when no rule triggered.
pub const FALLBACK_EXPLANATION: &str = "Standard color combination";

/// Occasions where a complementary pairing is rewarded rather than penalized.
const BOLD_OCCASIONS: &[&str] = &[OCCASION_CASUAL, OCCASION_PARTY];

/// Occasions scored with dressed-up contrast preferences.
const DRESSY_OCCASIONS: &[&str] = &[OCCASION_FORMAL, OCCASION_WORK];

/// Occasions scored with relaxed contrast preferences.
const RELAXED_OCCASIONS: &[&str] = &[OCCASION_CASUAL, OCCASION_COLLEGE, OCCASION_PARTY];

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Inputs shared by every color rule predicate.
pub struct RuleInput<'a> {
    pub top: Hsv,
    pub bottom: Hsv,
    pub footwear: Hsv,
    pub occasion: &'a str,
}

/// One scoring rule: a predicate, the score delta it contributes, and the
/// fixed rationale sentence appended to the explanation when it triggers.
struct ColorRule {
    applies: fn(&RuleInput) -> bool,
    delta: f64,
    rationale: &'static str,
}

fn all_neutral(i: &RuleInput) -> bool {
    is_neutral(i.top) && is_neutral(i.bottom) && is_neutral(i.footwear)
}

// Excludes the all-neutral case so the two rules stay mutually exclusive.
fn neutral_footwear_balance(i: &RuleInput) -> bool {
    (is_neutral(i.top) || is_neutral(i.bottom)) && is_neutral(i.footwear) && !all_neutral(i)
}

fn dark_over_light(i: &RuleInput) -> bool {
    i.top.value < 40.0 && i.bottom.value > 60.0
}

fn light_over_dark(i: &RuleInput) -> bool {
    i.top.value > 60.0 && i.bottom.value < 40.0
}

fn complementary_bold_occasion(i: &RuleInput) -> bool {
    are_complementary(i.top, i.bottom) && BOLD_OCCASIONS.contains(&i.occasion)
}

fn complementary_muted_occasion(i: &RuleInput) -> bool {
    are_complementary(i.top, i.bottom) && !BOLD_OCCASIONS.contains(&i.occasion)
}

fn analogous_saturated(i: &RuleInput) -> bool {
    are_analogous(i.top, i.bottom) && !is_neutral(i.top) && !is_neutral(i.bottom)
}

fn low_contrast_dressy(i: &RuleInput) -> bool {
    DRESSY_OCCASIONS.contains(&i.occasion) && contrast(i.top, i.bottom) < 0.3
}

fn high_contrast_dressy(i: &RuleInput) -> bool {
    DRESSY_OCCASIONS.contains(&i.occasion) && contrast(i.top, i.bottom) > 0.6
}

fn mid_contrast_relaxed(i: &RuleInput) -> bool {
    let c = contrast(i.top, i.bottom);
    RELAXED_OCCASIONS.contains(&i.occasion) && c > 0.4 && c < 0.7
}

fn bold_top_neutral_footwear(i: &RuleInput) -> bool {
    i.top.saturation > 60.0 && i.top.value > 50.0 && is_neutral(i.footwear)
}

fn all_bold(i: &RuleInput) -> bool {
    i.top.saturation > 60.0 && i.bottom.saturation > 60.0 && i.footwear.saturation > 60.0
}

fn monochromatic(i: &RuleInput) -> bool {
    (i.top.hue - i.bottom.hue).abs() < 30.0
        && (i.top.value - i.bottom.value).abs() > 20.0
        && !is_neutral(i.top)
}

/// The full rule set, evaluated in this exact order. Independent rules may
/// stack; only the two neutral rules are mutually exclusive (by predicate
/// construction, not by short-circuiting).
const COLOR_RULES: &[ColorRule] = &[
    ColorRule {
        applies: all_neutral,
        delta: 0.30,
        rationale: "An all-neutral palette is timeless and effortlessly coordinated",
    },
    ColorRule {
        applies: neutral_footwear_balance,
        delta: 0.20,
        rationale: "Neutral footwear grounds the outfit",
    },
    ColorRule {
        applies: dark_over_light,
        delta: 0.15,
        rationale: "A dark top over a light bottom gives a balanced silhouette",
    },
    ColorRule {
        applies: light_over_dark,
        delta: 0.10,
        rationale: "A light top over a dark bottom keeps the look anchored",
    },
    ColorRule {
        applies: complementary_bold_occasion,
        delta: 0.10,
        rationale: "Complementary colors make a confident statement",
    },
    ColorRule {
        applies: complementary_muted_occasion,
        delta: -0.10,
        rationale: "Complementary colors can feel loud for this occasion",
    },
    ColorRule {
        applies: analogous_saturated,
        delta: 0.15,
        rationale: "Analogous colors blend harmoniously",
    },
    ColorRule {
        applies: low_contrast_dressy,
        delta: 0.15,
        rationale: "Low contrast reads polished and professional",
    },
    ColorRule {
        applies: high_contrast_dressy,
        delta: -0.10,
        rationale: "High contrast is stark for a dressed-up setting",
    },
    ColorRule {
        applies: mid_contrast_relaxed,
        delta: 0.10,
        rationale: "Moderate contrast adds casual visual interest",
    },
    ColorRule {
        applies: bold_top_neutral_footwear,
        delta: 0.10,
        rationale: "Neutral footwear lets a bold top take center stage",
    },
    ColorRule {
        applies: all_bold,
        delta: -0.20,
        rationale: "Three saturated colors compete for attention",
    },
    ColorRule {
        applies: monochromatic,
        delta: 0.15,
        rationale: "Tonal variation within one hue family adds depth",
    },
];

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Result of scoring one color combination.
#[derive(Debug, Clone, Serialize)]
pub struct ColorScore {
    /// Clamped to `[0, 1]`.
    pub score: f64,
    /// Triggered rule rationales joined with `". "`, or the fallback literal.
    pub explanation: String,
}

/// Score the color compatibility of a top/bottom/footwear hex triple for an
/// occasion. Malformed hex strings degrade to black upstream in the color
/// model, so this function is total.
pub fn score_colors(
    top_hex: &str,
    bottom_hex: &str,
    footwear_hex: &str,
    occasion: &str,
) -> ColorScore {
    let input = RuleInput {
        top: rgb_to_hsv(hex_to_rgb(top_hex)),
        bottom: rgb_to_hsv(hex_to_rgb(bottom_hex)),
        footwear: rgb_to_hsv(hex_to_rgb(footwear_hex)),
        occasion,
    };

    let mut score = BASE_COLOR_SCORE;
    let mut rationales: Vec<&'static str> = Vec::new();

    for rule in COLOR_RULES {
        if (rule.applies)(&input) {
            score += rule.delta;
            rationales.push(rule.rationale);
        }
    }

    let explanation = if rationales.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        rationales.join(". ")
    };

    ColorScore {
        score: score.clamp(0.0, 1.0),
        explanation,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
