// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Optional title and icon overlays drawn inside the switch track.

use unicode_segmentation::UnicodeSegmentation;

/// Maximum number of user-perceived characters (grapheme clusters) shown per title.
pub const TITLE_MAX_CHARS: usize = 2;

/// Pair of short labels shown on the track, e.g. `"I"` / `"O"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Title {
    pub on: String,
    pub off: String,
}

impl Title {
    pub fn new(on: impl Into<String>, off: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            off: off.into(),
        }
    }

    /// On label as displayed (at most two grapheme clusters).
    pub fn display_on(&self) -> String {
        truncate_graphemes(&self.on, TITLE_MAX_CHARS)
    }

    /// Off label as displayed (at most two grapheme clusters).
    pub fn display_off(&self) -> String {
        truncate_graphemes(&self.off, TITLE_MAX_CHARS)
    }
}

/// Where an icon's pixels come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSource {
    /// A glyph from an icon font, such as `egui_phosphor::regular::CHECK`.
    Glyph(String),
    /// Any URI understood by the installed egui image loaders (`file://`, `bytes://`, ...).
    Uri(String),
    /// A texture the host already uploaded.
    Texture(egui::TextureId),
}

impl IconSource {
    pub fn glyph(glyph: impl Into<String>) -> Self {
        Self::Glyph(glyph.into())
    }

    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri(uri.into())
    }
}

/// Pair of icons shown on the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub on: IconSource,
    pub off: IconSource,
}

impl Icon {
    pub fn new(on: IconSource, off: IconSource) -> Self {
        Self { on, off }
    }
}

fn truncate_graphemes(text: &str, max: usize) -> String {
    text.graphemes(true).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_truncated_to_two_chars() {
        let title = Title::new("ONLINE", "OFF");
        assert_eq!(title.display_on(), "ON");
        assert_eq!(title.display_off(), "OF");
    }

    #[test]
    fn short_and_multibyte_titles_survive() {
        let title = Title::new("", "äöü");
        assert_eq!(title.display_on(), "");
        assert_eq!(title.display_off(), "äö");
    }

    #[test]
    fn truncation_keeps_combining_marks_and_emoji_sequences_whole() {
        // "e" + COMBINING ACUTE ACCENT is one visible character.
        let title = Title::new("ne\u{301}e", "👨\u{200d}👩\u{200d}👧OK");

        assert_eq!(title.display_on(), "ne\u{301}");
        assert_eq!(title.display_off(), "👨\u{200d}👩\u{200d}👧O");
    }
}
