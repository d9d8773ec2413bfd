// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons ship as white SVG sources embedded at compile time via
//! `include_bytes!`; handles are cached with `OnceLock` so each icon is
//! parsed once per process. The white fill is designed for the dark photo
//! surface and toast cards this application renders everything on.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `trash` not `delete_photo`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Interaction bar icons
// =============================================================================

define_icon!(heart, "heart.svg", "Heart icon: filled like symbol.");
define_icon!(comment, "comment.svg", "Comment icon: speech bubble.");
define_icon!(share, "share.svg", "Share icon: paper plane.");
define_icon!(
    ellipsis_horizontal,
    "ellipsis_horizontal.svg",
    "Horizontal ellipsis: three dots in a row."
);

// =============================================================================
// Action and status icons
// =============================================================================

define_icon!(trash, "trash.svg", "Trash icon: waste bin.");
define_icon!(cross, "cross.svg", "Cross icon: X shape for dismissal.");
define_icon!(checkmark, "checkmark.svg", "Checkmark icon: success tick.");
define_icon!(info, "info.svg", "Info icon: circled letter i.");
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with exclamation mark."
);

// =============================================================================
// Activity icons
// =============================================================================

define_icon!(running, "running.svg", "Running figure.");
define_icon!(cycling, "cycling.svg", "Cyclist on a bicycle.");
define_icon!(hiking, "hiking.svg", "Hiker mid-stride.");
define_icon!(swimming, "swimming.svg", "Swimmer above waves.");
define_icon!(climbing, "climbing.svg", "Climber on a wall.");
define_icon!(yoga, "yoga.svg", "Figure in a yoga pose.");

/// Sizes an icon to a square of the given side length.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_construct_without_panicking() {
        let _ = heart();
        let _ = comment();
        let _ = share();
        let _ = ellipsis_horizontal();
        let _ = trash();
        let _ = cross();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = running();
        let _ = cycling();
        let _ = hiking();
        let _ = swimming();
        let _ = climbing();
        let _ = yoga();
    }

    #[test]
    fn sized_icon_builds() {
        let _ = sized(heart(), 24.0);
    }
}
