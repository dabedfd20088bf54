//! Colors - MinEE Theme Colors

use gpui::{Rgba, rgb};

/// MinEE color palette - All colors are accessed via associated functions
pub struct Palette;

impl Palette {
    // Chrome
    /// Header background - Slate
    pub fn header_bg() -> Rgba { rgb(0x334155) }
    /// Footer background
    pub fn footer_bg() -> Rgba { rgb(0xe2e8f0) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf1f5f9) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Board title bar
    pub fn board_title_bg() -> Rgba { rgb(0xf8fafc) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Read-only field background
    pub fn readonly_bg() -> Rgba { rgb(0xf3f4f6) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
    /// Hovered row or option
    pub fn hover_bg() -> Rgba { rgb(0xf3f4f6) }
}
