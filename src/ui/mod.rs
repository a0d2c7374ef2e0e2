// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the switch gallery.
//! Handles layout, theme controls, and wiring to the background dialog worker.

pub mod components;

use eframe::egui;

use crate::models::configuration::Configuration;
use crate::mvu::{self, AppModel, Command, Msg};

/// Stateful egui application showing a gallery of switches.
pub struct SwitchGalleryApp {
    model: AppModel,
    inbox: Vec<Msg>,
    feedback: bool,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl SwitchGalleryApp {
    /// Build the app with `configuration` applied to every switch.
    ///
    /// Spawns one worker thread that runs native file dialogs so the UI keeps painting.
    pub fn new(configuration: Configuration) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd);
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
        });

        Self {
            model: AppModel::with_configuration(configuration),
            inbox: Vec::new(),
            feedback: true,
            cmd_tx,
            msg_rx,
        }
    }
}

impl Default for SwitchGalleryApp {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl eframe::App for SwitchGalleryApp {
    /// Drives a single UI frame: drains worker results, applies queued messages,
    /// then renders the top bar, status line, error modal and the switch gallery.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("AlphaSwitch");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(2.0);
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_theme_buttons(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_gallery(ui);
            ui.add_space(12.0);
            self.render_bulk_controls(ui);
        });
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which
    /// eframe still invokes before `ui` each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl SwitchGalleryApp {
    fn render_theme_buttons(&mut self, ui: &mut egui::Ui) {
        let export = egui::Button::new(format!(
            "{} Export theme",
            egui_phosphor::regular::FLOPPY_DISK
        ));
        if ui.add(export).clicked() {
            self.inbox.push(Msg::ExportThemeRequested);
        }

        let load = egui::Button::new(format!(
            "{} Load theme",
            egui_phosphor::regular::FOLDER_OPEN
        ));
        if ui.add(load).clicked() {
            self.inbox.push(Msg::LoadThemeRequested);
        }
    }

    /// Render every gallery row as label, switch and hint.
    fn render_gallery(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("switch_gallery")
            .num_columns(3)
            .spacing(egui::vec2(16.0, 12.0))
            .min_col_width(60.0)
            .show(ui, |ui| {
                for (index, row) in self.model.switches.iter_mut().enumerate() {
                    ui.label(row.label);
                    if ui.add(&mut row.switch).changed() {
                        self.inbox.push(Msg::SwitchToggled {
                            index,
                            is_on: row.switch.is_on(),
                        });
                    }
                    ui.label(
                        egui::RichText::new(row.hint)
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                    ui.end_row();
                }
            });
    }

    fn render_bulk_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("All on").clicked() {
                self.inbox.push(Msg::SetAll(true));
            }
            if ui.button("All off").clicked() {
                self.inbox.push(Msg::SetAll(false));
            }
            ui.separator();
            if ui.checkbox(&mut self.feedback, "Haptic feedback").changed() {
                self.inbox.push(Msg::SetFeedback(self.feedback));
            }
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Theme error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text("Waiting for file dialog");
                }
            });
        }
    }
}
