// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the demo gallery: switch rows, theme loading, status.

use std::path::PathBuf;

use anyhow::Context;

use crate::models::configuration::Configuration;
use crate::models::overlay::{Icon, IconSource, Title};
use crate::models::theme::{load_theme, save_theme};
use crate::ui::components::switch::haptics::{ImpactStyle, TracingHaptics};
use crate::ui::components::switch::{AlphaSwitch, SwitchModel, SwitchMsg};

/// One labelled switch in the gallery.
pub struct DemoSwitch {
    pub label: &'static str,
    pub hint: &'static str,
    pub switch: AlphaSwitch,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Gallery rows, top to bottom.
    pub switches: Vec<DemoSwitch>,
    /// Configuration currently applied to every row.
    pub configuration: Configuration,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    /// A row's switch was flipped by the user.
    SwitchToggled { index: usize, is_on: bool },
    /// Programmatically set every interactive row.
    SetAll(bool),
    /// Toggle haptic feedback on every row.
    SetFeedback(bool),
    LoadThemeRequested,
    ExportThemeRequested,
    ThemeLoaded(Result<(PathBuf, Configuration), String>),
    ThemeExported(Result<PathBuf, String>),
    DialogCancelled,
    DismissError,
}

/// Commands represent side-effects executed between frames.
#[derive(Debug)]
pub enum Command {
    PickTheme,
    ExportTheme(Configuration),
}

impl AppModel {
    /// Build the gallery with `configuration` applied to every row.
    pub fn with_configuration(configuration: Configuration) -> Self {
        let row = |model: SwitchModel| {
            AlphaSwitch::new(model.with_configuration(configuration)).with_haptics(TracingHaptics)
        };

        let switches = vec![
            DemoSwitch {
                label: "Notifications",
                hint: "Plain switch",
                switch: row(SwitchModel::new()),
            },
            DemoSwitch {
                label: "Power",
                hint: "Two-letter titles, medium impact",
                switch: row(SwitchModel::new()
                    .with_title(Title::new("I", "O"))
                    .with_impact(ImpactStyle::Medium)),
            },
            DemoSwitch {
                label: "Night mode",
                hint: "Icon overlay",
                switch: row(SwitchModel::new().with_icon(Icon::new(
                    IconSource::glyph(egui_phosphor::regular::MOON),
                    IconSource::glyph(egui_phosphor::regular::SUN),
                ))),
            },
            DemoSwitch {
                label: "Sync",
                hint: "Read-only knob: tap the track, not the knob",
                switch: row(SwitchModel::new()
                    .with_icon(Icon::new(
                        IconSource::glyph(egui_phosphor::regular::CHECK),
                        IconSource::glyph(egui_phosphor::regular::X),
                    ))
                    .read_only()),
            },
            DemoSwitch {
                label: "Managed by admin",
                hint: "Disabled",
                switch: row(SwitchModel::new().on(true).disabled()),
            },
        ];

        Self {
            switches,
            configuration,
            ..Default::default()
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SwitchToggled { index, is_on } => {
            if let Some(label) = model.switches.get(index).map(|row| row.label) {
                let state = if is_on { "on" } else { "off" };
                surface_event(model, format!("{label} switched {state}."), false);
            }
        }
        Msg::SetAll(value) => {
            for row in model.switches.iter_mut() {
                if row.switch.model().is_enabled() {
                    row.switch.send(SwitchMsg::SetOn(value));
                }
            }
        }
        Msg::SetFeedback(enabled) => {
            for row in model.switches.iter_mut() {
                row.switch.send(SwitchMsg::EnableFeedback(enabled));
            }
        }
        Msg::LoadThemeRequested => cmds.push(Command::PickTheme),
        Msg::ExportThemeRequested => cmds.push(Command::ExportTheme(model.configuration)),
        Msg::ThemeLoaded(Ok((path, configuration))) => {
            apply_configuration(model, configuration);
            surface_event(model, format!("Theme loaded: {}", path.display()), false);
        }
        Msg::ThemeLoaded(Err(err)) => {
            surface_event(model, format!("Failed to load theme:\n\n{err}"), true)
        }
        Msg::ThemeExported(Ok(path)) => {
            surface_event(model, format!("Theme saved: {}", path.display()), false)
        }
        Msg::ThemeExported(Err(err)) => {
            surface_event(model, format!("Failed to save theme:\n\n{err}"), true)
        }
        Msg::DialogCancelled => surface_event(model, "Cancelled.".to_string(), false),
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command on a worker thread and return a resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickTheme => {
            let file = rfd::FileDialog::new()
                .set_title("Load switch theme")
                .add_filter("Theme JSON", &["json"])
                .pick_file();
            match file {
                Some(path) => Msg::ThemeLoaded(
                    load_theme(&path)
                        .with_context(|| format!("reading {}", path.display()))
                        .map(|config| (path, config))
                        .map_err(|e| format!("{e:#}")),
                ),
                None => Msg::DialogCancelled,
            }
        }
        Command::ExportTheme(configuration) => {
            let file = rfd::FileDialog::new()
                .set_title("Save switch theme")
                .add_filter("Theme JSON", &["json"])
                .set_file_name("switch-theme.json")
                .save_file();
            match file {
                Some(path) => Msg::ThemeExported(
                    save_theme(&path, &configuration)
                        .with_context(|| format!("writing {}", path.display()))
                        .map(|()| path)
                        .map_err(|e| format!("{e:#}")),
                ),
                None => Msg::DialogCancelled,
            }
        }
    }
}

fn apply_configuration(model: &mut AppModel, configuration: Configuration) {
    model.configuration = configuration;
    for row in model.switches.iter_mut() {
        row.switch.send(SwitchMsg::SetConfiguration(configuration));
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
