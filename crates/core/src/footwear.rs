//! Footwear advisor: a short textual recommendation derived from the top and
//! bottom colors plus the occasion. Independent of the numeric score.

use crate::color::{hex_to_rgb, is_neutral, rgb_to_hsv};
use crate::wardrobe::{
    OCCASION_CASUAL, OCCASION_COLLEGE, OCCASION_FORMAL, OCCASION_PARTY, OCCASION_WORK,
};

// ---------------------------------------------------------------------------
// Advisory messages
// ---------------------------------------------------------------------------

pub const ADVICE_BLACK_LEATHER: &str =
    "Black leather shoes will complete this dark-bottomed look";
pub const ADVICE_BROWN_LEATHER: &str =
    "Brown leather shoes or earth tones will complement these warm bottoms";
pub const ADVICE_DARK_LEATHER: &str = "Dark leather shoes are a safe, polished choice";
pub const ADVICE_WHITE_SNEAKERS: &str = "White sneakers keep this neutral outfit crisp";
pub const ADVICE_NEUTRAL_SNEAKERS: &str = "Neutral sneakers will balance the bold colors";
pub const ADVICE_CASUAL_SNEAKERS: &str = "Casual sneakers round this outfit off nicely";
pub const ADVICE_BOLD_FOOTWEAR: &str = "Bold sneakers or boots will lift this dark palette";
pub const ADVICE_STATEMENT_FOOTWEAR: &str = "Statement footwear works well for a party look";
pub const ADVICE_NEUTRAL_FALLBACK: &str =
    "Neutral footwear is a versatile pick for this occasion";

// Earth-tone hue band used for the brown-leather branch.
const EARTH_HUE_MIN: f64 = 20.0;
const EARTH_HUE_MAX: f64 = 40.0;

/// Recommend footwear for a top/bottom color pair and occasion.
///
/// Pure function of its inputs; unknown occasions get the generic neutral
/// fallback rather than an error.
pub fn recommend_footwear(top_hex: &str, bottom_hex: &str, occasion: &str) -> &'static str {
    let top = rgb_to_hsv(hex_to_rgb(top_hex));
    let bottom = rgb_to_hsv(hex_to_rgb(bottom_hex));

    match occasion {
        OCCASION_FORMAL | OCCASION_WORK => {
            if bottom.value < 30.0 {
                ADVICE_BLACK_LEATHER
            } else if (EARTH_HUE_MIN..=EARTH_HUE_MAX).contains(&bottom.hue) {
                ADVICE_BROWN_LEATHER
            } else {
                ADVICE_DARK_LEATHER
            }
        }
        OCCASION_CASUAL | OCCASION_COLLEGE => {
            if is_neutral(top) && is_neutral(bottom) {
                ADVICE_WHITE_SNEAKERS
            } else if top.saturation > 60.0 || bottom.saturation > 60.0 {
                ADVICE_NEUTRAL_SNEAKERS
            } else {
                ADVICE_CASUAL_SNEAKERS
            }
        }
        OCCASION_PARTY => {
            if top.value < 40.0 && bottom.value < 40.0 {
                ADVICE_BOLD_FOOTWEAR
            } else {
                ADVICE_STATEMENT_FOOTWEAR
            }
        }
        _ => ADVICE_NEUTRAL_FALLBACK,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Formal / work -------------------------------------------------------

    #[test]
    fn dark_bottom_gets_black_leather() {
        assert_eq!(
            recommend_footwear("#FFFFFF", "#1A1A1A", "formal"),
            ADVICE_BLACK_LEATHER
        );
        assert_eq!(
            recommend_footwear("#FFFFFF", "#1A1A1A", "work"),
            ADVICE_BLACK_LEATHER
        );
    }

    #[test]
    fn earth_tone_bottom_gets_brown_leather() {
        // #C08040 sits around hue 30 with value well above the dark cutoff.
        assert_eq!(
            recommend_footwear("#FFFFFF", "#C08040", "formal"),
            ADVICE_BROWN_LEATHER
        );
    }

    #[test]
    fn other_formal_bottoms_get_dark_leather() {
        assert_eq!(
            recommend_footwear("#FFFFFF", "#4060C0", "formal"),
            ADVICE_DARK_LEATHER
        );
    }

    // -- Casual / college ----------------------------------------------------

    #[test]
    fn double_neutral_gets_white_sneakers() {
        assert_eq!(
            recommend_footwear("#CCCCCC", "#333333", "casual"),
            ADVICE_WHITE_SNEAKERS
        );
        assert_eq!(
            recommend_footwear("#CCCCCC", "#333333", "college"),
            ADVICE_WHITE_SNEAKERS
        );
    }

    #[test]
    fn bold_color_gets_neutral_sneakers() {
        assert_eq!(
            recommend_footwear("#FF0000", "#333333", "casual"),
            ADVICE_NEUTRAL_SNEAKERS
        );
    }

    #[test]
    fn soft_colors_get_generic_casual_sneakers() {
        // Muted lavender pair: not neutral, saturation under the bold cutoff.
        assert_eq!(
            recommend_footwear("#B090D0", "#90B0D0", "casual"),
            ADVICE_CASUAL_SNEAKERS
        );
    }

    // -- Party ---------------------------------------------------------------

    #[test]
    fn double_dark_party_gets_bold_footwear() {
        assert_eq!(
            recommend_footwear("#202020", "#301030", "party"),
            ADVICE_BOLD_FOOTWEAR
        );
    }

    #[test]
    fn bright_party_gets_statement_footwear() {
        assert_eq!(
            recommend_footwear("#FF00FF", "#202020", "party"),
            ADVICE_STATEMENT_FOOTWEAR
        );
    }

    // -- Fallback ------------------------------------------------------------

    #[test]
    fn unknown_occasion_gets_neutral_fallback() {
        assert_eq!(
            recommend_footwear("#FF0000", "#00FF00", "travel"),
            ADVICE_NEUTRAL_FALLBACK
        );
        assert_eq!(
            recommend_footwear("#FF0000", "#00FF00", "wedding"),
            ADVICE_NEUTRAL_FALLBACK
        );
    }
}
