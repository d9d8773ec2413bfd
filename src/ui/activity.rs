// SPDX-License-Identifier: MPL-2.0
//! Static activity catalog.
//!
//! Photos carry a free-form activity label; this catalog maps the labels the
//! application knows about to an icon and a gradient for the overlay pill.
//! Unknown labels are not an error: the pill falls back to text-only.

use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::widget::svg::Svg;
use iced::Color;

/// Visual identity of one activity.
pub struct ActivityStyle {
    /// Canonical label, lower-case.
    pub label: &'static str,
    /// Icon shown inside the pill.
    pub icon: fn() -> Svg<'static>,
    /// Gradient stops for the pill background.
    pub gradient: (Color, Color),
}

/// All activities the application can render with an icon.
pub const CATALOG: &[ActivityStyle] = &[
    ActivityStyle {
        label: "running",
        icon: icons::running,
        gradient: (palette::SUNRISE_START, palette::SUNRISE_END),
    },
    ActivityStyle {
        label: "cycling",
        icon: icons::cycling,
        gradient: (palette::OCEAN_START, palette::OCEAN_END),
    },
    ActivityStyle {
        label: "hiking",
        icon: icons::hiking,
        gradient: (palette::FOREST_START, palette::FOREST_END),
    },
    ActivityStyle {
        label: "swimming",
        icon: icons::swimming,
        gradient: (palette::OCEAN_START, palette::OCEAN_END),
    },
    ActivityStyle {
        label: "climbing",
        icon: icons::climbing,
        gradient: (palette::EMBER_START, palette::EMBER_END),
    },
    ActivityStyle {
        label: "yoga",
        icon: icons::yoga,
        gradient: (palette::DUSK_START, palette::DUSK_END),
    },
];

/// Gradient used when the label has no catalog entry.
pub const FALLBACK_GRADIENT: (Color, Color) = (palette::SLATE_START, palette::SLATE_END);

/// Looks up an activity by label, case-insensitively.
#[must_use]
pub fn lookup(label: &str) -> Option<&'static ActivityStyle> {
    CATALOG
        .iter()
        .find(|style| style.label.eq_ignore_ascii_case(label.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_activity() {
        assert!(lookup("running").is_some());
        assert!(lookup("yoga").is_some());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("Running").is_some());
        assert!(lookup("CYCLING").is_some());
    }

    #[test]
    fn lookup_trims_surrounding_whitespace() {
        assert!(lookup("  hiking ").is_some());
    }

    #[test]
    fn lookup_returns_none_for_unknown_label() {
        assert!(lookup("base jumping").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn catalog_labels_are_unique_and_lower_case() {
        for (i, style) in CATALOG.iter().enumerate() {
            assert_eq!(style.label, style.label.to_lowercase());
            for other in &CATALOG[i + 1..] {
                assert_ne!(style.label, other.label);
            }
        }
    }
}
