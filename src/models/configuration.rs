// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Color and geometry configuration for a switch, one color pair per channel.

use egui::Color32;

/// A color for each of the two switch states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateColors {
    /// Color used while the switch is on.
    pub on: Color32,
    /// Color used while the switch is off.
    pub off: Color32,
}

impl StateColors {
    pub const fn new(on: Color32, off: Color32) -> Self {
        Self { on, off }
    }

    /// Pick the color matching `is_on`.
    pub fn for_state(&self, is_on: bool) -> Color32 {
        if is_on { self.on } else { self.off }
    }

    /// Blend from the off color (`t = 0`) to the on color (`t = 1`).
    pub fn blend(&self, t: f32) -> Color32 {
        lerp_color(self.off, self.on, t)
    }
}

/// Immutable appearance bundle: background, foreground and border colors plus
/// the container corner radius.
///
/// Values are taken as-is. A negative radius is stored unchanged; painting
/// clamps it to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// Container fill.
    pub background: StateColors,
    /// Title text and icon tint.
    pub foreground: StateColors,
    /// One-point border around the container.
    pub border: StateColors,
    /// Container corner radius; the knob uses this minus two.
    pub corner_radius: f32,
}

/// Default "on" background (`#0065D1`).
pub const DEFAULT_BACKGROUND_ON: Color32 = Color32::from_rgb(0x00, 0x65, 0xD1);
/// Default "off" background (`#E7E7E8`).
pub const DEFAULT_BACKGROUND_OFF: Color32 = Color32::from_rgb(0xE7, 0xE7, 0xE8);
/// Default "off" border: `rgb(13, 17, 23)` at 5% opacity, stored premultiplied.
pub const DEFAULT_BORDER_OFF: Color32 = Color32::from_rgba_premultiplied(1, 1, 1, 13);
/// Default container corner radius.
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

impl Default for Configuration {
    fn default() -> Self {
        Self {
            background: StateColors::new(DEFAULT_BACKGROUND_ON, DEFAULT_BACKGROUND_OFF),
            foreground: StateColors::new(Color32::WHITE, Color32::WHITE),
            border: StateColors::new(Color32::TRANSPARENT, DEFAULT_BORDER_OFF),
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// Linear blend of two colors in premultiplied space.
///
/// `t` is clamped to `0..=1`; both ends return the input colors exactly.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| egui::lerp(a as f32..=b as f32, t).round() as u8;
    Color32::from_rgba_premultiplied(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
        channel(from.a(), to.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_stock_palette() {
        let config = Configuration::default();

        assert_eq!(config.background.on, Color32::from_rgb(0, 101, 209));
        assert_eq!(config.background.off, Color32::from_rgb(231, 231, 232));
        assert_eq!(config.foreground.for_state(true), Color32::WHITE);
        assert_eq!(config.border.on, Color32::TRANSPARENT);
        assert_eq!(config.border.off.a(), 13);
        assert_eq!(config.corner_radius, 10.0);
    }

    #[test]
    fn blend_hits_both_ends_exactly() {
        let colors = Configuration::default().background;

        assert_eq!(colors.blend(0.0), colors.off);
        assert_eq!(colors.blend(1.0), colors.on);
        // Out-of-range progress is clamped rather than extrapolated.
        assert_eq!(colors.blend(1.7), colors.on);
        assert_eq!(colors.blend(-0.3), colors.off);
    }

    #[test]
    fn blend_midpoint_lies_between_channels() {
        let mid = lerp_color(Color32::from_rgb(0, 0, 0), Color32::from_rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color32::from_rgb(100, 50, 25));
    }
}
