// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the switch gallery.

use std::path::Path;

use anyhow::Context;
use eframe::egui;
use egui_phosphor::Variant;

use crate::models::configuration::Configuration;
use crate::models::theme::load_theme;
use crate::ui::SwitchGalleryApp;

/// Bootstrap the desktop application and run the main egui event loop.
///
/// `theme` optionally points at a JSON theme applied to every switch.
pub fn run(theme: Option<&Path>) -> anyhow::Result<()> {
    let configuration = match theme {
        Some(path) => load_theme(path)
            .with_context(|| format!("failed to load theme {}", path.display()))?,
        None => Configuration::default(),
    };

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 360.0])
            .with_min_inner_size([400.0, 280.0]),
        ..Default::default()
    };

    tracing::info!("starting switch gallery");
    eframe::run_native(
        "AlphaSwitch",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            // Icon overlays given as URIs need the image loaders.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SwitchGalleryApp::new(configuration)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("UI event loop failed: {err}"))
}
