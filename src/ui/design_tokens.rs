// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! # Organization
//!
//! - **Palette**: Base colors, including the activity gradient stops
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Tokens are designed to be consistent; maintain ratios (e.g. `MD = XS * 2`)
//! when modifying them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Activity gradient stops (warm → cool pairs picked per activity)
    pub const SUNRISE_START: Color = Color::from_rgb(0.98, 0.45, 0.25);
    pub const SUNRISE_END: Color = Color::from_rgb(0.95, 0.25, 0.55);
    pub const OCEAN_START: Color = Color::from_rgb(0.15, 0.55, 0.95);
    pub const OCEAN_END: Color = Color::from_rgb(0.1, 0.8, 0.85);
    pub const FOREST_START: Color = Color::from_rgb(0.2, 0.65, 0.35);
    pub const FOREST_END: Color = Color::from_rgb(0.55, 0.8, 0.25);
    pub const DUSK_START: Color = Color::from_rgb(0.45, 0.3, 0.85);
    pub const DUSK_END: Color = Color::from_rgb(0.8, 0.3, 0.75);
    pub const EMBER_START: Color = Color::from_rgb(0.9, 0.55, 0.15);
    pub const EMBER_END: Color = Color::from_rgb(0.85, 0.3, 0.2);
    pub const SLATE_START: Color = Color::from_rgb(0.35, 0.4, 0.5);
    pub const SLATE_END: Color = Color::from_rgb(0.2, 0.25, 0.35);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SCRIM_SUBTLE: f32 = 0.25;
    pub const SCRIM_MEDIUM: f32 = 0.45;
    pub const SCRIM_STRONG: f32 = 0.7;
    pub const BADGE_BACKGROUND: f32 = 0.55;
    pub const CONTROL_HOVER: f32 = 0.8;
    pub const CONTROL_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Overlay badges
    pub const DATE_BADGE_WIDTH: f32 = 56.0;
    pub const ACTIVITY_PILL_HEIGHT: f32 = 36.0;

    // Bottom interaction bar
    pub const INTERACTION_BAR_HEIGHT: f32 = 56.0;

    // Toasts
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for a consistent text hierarchy.

    /// Large numerals (date badge day).
    pub const DISPLAY: f32 = 26.0;
    /// Section titles.
    pub const TITLE: f32 = 20.0;
    /// Primary content text.
    pub const BODY: f32 = 16.0;
    /// Secondary, supporting text (badge month, counts).
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Fully rounded ends for pills.
    pub const PILL: f32 = 18.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_its_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn opacity_values_are_normalized() {
        let all = [
            opacity::TRANSPARENT,
            opacity::SCRIM_SUBTLE,
            opacity::SCRIM_MEDIUM,
            opacity::SCRIM_STRONG,
            opacity::BADGE_BACKGROUND,
            opacity::CONTROL_HOVER,
            opacity::CONTROL_PRESSED,
            opacity::OPAQUE,
        ];
        for value in all {
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::ERROR_500, palette::WARNING_500);
        assert_ne!(palette::SUCCESS_500, palette::INFO_500);
        assert_ne!(palette::ERROR_500, palette::SUCCESS_500);
    }

    #[test]
    fn gradient_stops_differ_within_each_pair() {
        assert_ne!(palette::SUNRISE_START, palette::SUNRISE_END);
        assert_ne!(palette::OCEAN_START, palette::OCEAN_END);
        assert_ne!(palette::FOREST_START, palette::FOREST_END);
        assert_ne!(palette::DUSK_START, palette::DUSK_END);
        assert_ne!(palette::EMBER_START, palette::EMBER_END);
        assert_ne!(palette::SLATE_START, palette::SLATE_END);
    }
}
