// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! JSON theme files that describe a [`Configuration`] with hex color strings.
//!
//! ```json
//! {
//!   "background": { "on": "#0065D1", "off": "#E7E7E8" },
//!   "border": { "off": "#0D11170D" },
//!   "corner_radius": 10
//! }
//! ```
//!
//! Every field is optional; missing values fall back to [`Configuration::default`].

use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::models::configuration::{Configuration, StateColors};

/// On/off hex pair as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HexPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off: Option<String>,
}

/// Serialized form of a switch configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeFile {
    pub background: HexPair,
    pub foreground: HexPair,
    pub border: HexPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
}

impl ThemeFile {
    /// Parse a theme from JSON text without validating colors.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Capture every value of `config` so the file reproduces it exactly.
    pub fn from_configuration(config: &Configuration) -> Self {
        let pair = |colors: &StateColors| HexPair {
            on: Some(colors.on.to_hex()),
            off: Some(colors.off.to_hex()),
        };
        Self {
            background: pair(&config.background),
            foreground: pair(&config.foreground),
            border: pair(&config.border),
            corner_radius: Some(config.corner_radius),
        }
    }

    /// Pretty-printed JSON for writing to disk.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the theme and merge it over the default configuration.
    pub fn into_configuration(self) -> Result<Configuration> {
        let defaults = Configuration::default();

        let corner_radius = match self.corner_radius {
            Some(radius) if !radius.is_finite() || radius < 0.0 => {
                return Err(ThemeError::InvalidRadius(radius));
            }
            Some(radius) => radius,
            None => defaults.corner_radius,
        };

        Ok(Configuration {
            background: merge_pair(&self.background, defaults.background, "background")?,
            foreground: merge_pair(&self.foreground, defaults.foreground, "foreground")?,
            border: merge_pair(&self.border, defaults.border, "border")?,
            corner_radius,
        })
    }
}

/// Read, parse and validate a theme file.
pub fn load_theme(path: &Path) -> Result<Configuration> {
    let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ThemeFile::from_json_str(&text)?.into_configuration()?;
    tracing::info!(path = %path.display(), "loaded switch theme");
    Ok(config)
}

/// Write `config` as a pretty JSON theme file.
pub fn save_theme(path: &Path, config: &Configuration) -> Result<()> {
    let json = ThemeFile::from_configuration(config).to_json_pretty()?;
    fs::write(path, json).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved switch theme");
    Ok(())
}

fn merge_pair(pair: &HexPair, fallback: StateColors, channel: &'static str) -> Result<StateColors> {
    let on = match &pair.on {
        Some(hex) => parse_color(hex, field_name(channel, true))?,
        None => fallback.on,
    };
    let off = match &pair.off {
        Some(hex) => parse_color(hex, field_name(channel, false))?,
        None => fallback.off,
    };
    Ok(StateColors::new(on, off))
}

fn field_name(channel: &'static str, on: bool) -> &'static str {
    match (channel, on) {
        ("background", true) => "background.on",
        ("background", false) => "background.off",
        ("foreground", true) => "foreground.on",
        ("foreground", false) => "foreground.off",
        ("border", true) => "border.on",
        ("border", false) => "border.off",
        _ => channel,
    }
}

fn parse_color(hex: &str, field: &'static str) -> Result<Color32> {
    Color32::from_hex(hex.trim()).map_err(|_| ThemeError::InvalidColor {
        field,
        value: hex.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_theme_yields_defaults() {
        let config = ThemeFile::from_json_str("{}")
            .and_then(ThemeFile::into_configuration)
            .expect("empty theme is valid");
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn partial_theme_overrides_only_given_fields() {
        let json = r##"{ "background": { "on": "#FF0000" }, "corner_radius": 4 }"##;
        let config = ThemeFile::from_json_str(json)
            .and_then(ThemeFile::into_configuration)
            .expect("valid theme");

        assert_eq!(config.background.on, Color32::from_rgb(255, 0, 0));
        assert_eq!(config.background.off, Configuration::default().background.off);
        assert_eq!(config.corner_radius, 4.0);
    }

    #[test]
    fn eight_digit_hex_carries_alpha() {
        let json = r##"{ "border": { "off": "#0D11170D" } }"##;
        let config = ThemeFile::from_json_str(json)
            .and_then(ThemeFile::into_configuration)
            .expect("valid theme");

        assert_eq!(
            config.border.off,
            Color32::from_rgba_unmultiplied(0x0D, 0x11, 0x17, 0x0D)
        );
    }

    #[test]
    fn bad_color_names_the_field() {
        let json = r#"{ "border": { "off": "not-a-color" } }"#;
        let err = ThemeFile::from_json_str(json)
            .and_then(ThemeFile::into_configuration)
            .unwrap_err();

        match err {
            ThemeError::InvalidColor { field, value } => {
                assert_eq!(field, "border.off");
                assert_eq!(value, "not-a-color");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err = ThemeFile::from_json_str(r#"{ "corner_radius": -3 }"#)
            .and_then(ThemeFile::into_configuration)
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidRadius(r) if r == -3.0));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ThemeFile::from_json_str(r#"{ "knob": {} }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn save_then_load_restores_configuration() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("theme.json");
        let mut config = Configuration::default();
        config.background.on = Color32::from_rgb(0x12, 0x34, 0x56);
        config.border = StateColors::new(Color32::from_rgb(1, 2, 3), Color32::from_gray(200));
        config.corner_radius = 6.0;

        save_theme(&path, &config).expect("save");
        let loaded = load_theme(&path).expect("load");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_theme_reads_handwritten_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r##"{{ "foreground": {{ "on": "#000000", "off": "#333333" }} }}"##)
            .expect("write");

        let config = load_theme(file.path()).expect("load");

        assert_eq!(config.foreground.on, Color32::BLACK);
        assert_eq!(config.foreground.off, Color32::from_rgb(0x33, 0x33, 0x33));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");

        let err = load_theme(&path).unwrap_err();

        match err {
            ThemeError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
