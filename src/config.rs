/// View configuration for the portfolio window
///
/// The portfolio shipped in several near-identical variants that differed
/// only in interaction details. Those differences are collapsed here into
/// one options struct, carried in the manifest's optional `options` block.

use serde::{Deserialize, Serialize};

/// How the enlarged artwork is zoomed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomMode {
    /// Dedicated +/- buttons, 0.1 per press. No panning.
    Stepped,
    /// Mouse wheel zooms, dragging pans.
    WheelDrag,
}

/// Which artworks take part in the intro burst.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IntroItems {
    /// The first six artworks in display order.
    First6,
    /// Every artwork in the store.
    All,
}

impl IntroItems {
    /// Number of burst participants for a store of `total` artworks.
    pub fn count(self, total: usize) -> usize {
        match self {
            IntroItems::First6 => total.min(6),
            IntroItems::All => total,
        }
    }

    /// Divisor for the angle step between burst items.
    ///
    /// The first-six variant always divides the circle into six slots,
    /// even when fewer artworks exist, so a short store leaves gaps
    /// rather than respacing.
    pub fn angle_divisor(self, total: usize) -> usize {
        match self {
            IntroItems::First6 => 6,
            IntroItems::All => total.max(1),
        }
    }
}

/// All interaction options for a portfolio window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ViewOptions {
    /// Zoom behavior of the lightbox.
    pub zoom_mode: ZoomMode,
    /// When true, the lightbox only opens on viewports wider than the
    /// mobile breakpoint; card clicks below it are recorded but show
    /// no overlay.
    pub modal_desktop_only: bool,
    /// Which artworks join the intro burst.
    pub intro_items: IntroItems,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            zoom_mode: ZoomMode::WheelDrag,
            modal_desktop_only: true,
            intro_items: IntroItems::First6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ViewOptions::default();
        assert_eq!(options.zoom_mode, ZoomMode::WheelDrag);
        assert!(options.modal_desktop_only);
        assert_eq!(options.intro_items, IntroItems::First6);
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let json = r#"{ "zoom_mode": "stepped", "modal_desktop_only": false, "intro_items": "all" }"#;
        let options: ViewOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.zoom_mode, ZoomMode::Stepped);
        assert!(!options.modal_desktop_only);
        assert_eq!(options.intro_items, IntroItems::All);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{ "zoom_mode": "stepped" }"#;
        let options: ViewOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.zoom_mode, ZoomMode::Stepped);
        assert!(options.modal_desktop_only);
        assert_eq!(options.intro_items, IntroItems::First6);
    }

    #[test]
    fn test_intro_item_count() {
        assert_eq!(IntroItems::First6.count(10), 6);
        assert_eq!(IntroItems::First6.count(4), 4);
        assert_eq!(IntroItems::All.count(10), 10);
        assert_eq!(IntroItems::All.count(0), 0);
    }

    #[test]
    fn test_angle_divisor() {
        assert_eq!(IntroItems::First6.angle_divisor(21), 6);
        assert_eq!(IntroItems::First6.angle_divisor(3), 6);
        assert_eq!(IntroItems::All.angle_divisor(10), 10);
        assert_eq!(IntroItems::All.angle_divisor(0), 1);
    }
}
